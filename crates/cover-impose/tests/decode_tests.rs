use cover_impose::meta::decode_page_sizes;
use cover_impose::*;
use serde_json::{Value, json};

fn encoding(value: Value) -> Vec<Value> {
    value.as_array().unwrap().clone()
}

#[test]
fn test_decode_empty() {
    let table = decode_page_sizes(&[]).unwrap();
    assert_eq!(table.page_count, 0);
    assert!(table.sizes.is_empty());
}

#[test]
fn test_decode_expands_runs() {
    let table = decode_page_sizes(&encoding(json!([2, [0.297, 0.420], 1, [0.210, 0.297]]))).unwrap();

    assert_eq!(table.page_count, 3);
    assert_eq!(
        table.sizes,
        vec![
            PageSize::new(0.297, 0.420),
            PageSize::new(0.297, 0.420),
            PageSize::new(0.210, 0.297),
        ]
    );
}

#[test]
fn test_decode_length_matches_page_count() {
    let table = decode_page_sizes(&encoding(json!([
        5, [0.21, 0.297],
        3, [0.297, 0.42],
        1, [0.21, 0.297],
        4, [0.148, 0.21]
    ])))
    .unwrap();

    assert_eq!(table.page_count, 13);
    assert_eq!(table.sizes.len(), table.page_count);
    // Runs stay contiguous and in order
    assert!(table.sizes[..5].iter().all(|s| *s == PageSize::new(0.21, 0.297)));
    assert!(table.sizes[5..8].iter().all(|s| *s == PageSize::new(0.297, 0.42)));
    assert_eq!(table.sizes[8], PageSize::new(0.21, 0.297));
    assert!(table.sizes[9..].iter().all(|s| *s == PageSize::new(0.148, 0.21)));
}

#[test]
fn test_decode_accepts_integral_float_count() {
    let table = decode_page_sizes(&encoding(json!([2.0, [1, 2]]))).unwrap();
    assert_eq!(table.page_count, 2);
    assert_eq!(table.sizes[1], PageSize::new(1.0, 2.0));
}

#[test]
fn test_decode_array_as_count() {
    let result = decode_page_sizes(&encoding(json!([[0.21, 0.297], 2])));
    match result {
        Err(ImposeError::Decode { offset, reason }) => {
            assert_eq!(offset, 0);
            assert_eq!(reason, DecodeReason::MalformedCount);
        }
        _ => panic!("Expected Decode error"),
    }
}

#[test]
fn test_decode_scalar_as_size() {
    let result = decode_page_sizes(&encoding(json!([1, [0.21, 0.297], 2, 0.5])));
    match result {
        Err(ImposeError::Decode { offset, reason }) => {
            assert_eq!(offset, 3);
            assert_eq!(reason, DecodeReason::MalformedSize);
        }
        _ => panic!("Expected Decode error"),
    }
}

#[test]
fn test_decode_rejects_bad_counts() {
    for bad in [json!(0), json!(-1), json!(1.5), json!("2")] {
        let result = decode_page_sizes(&[bad.clone(), json!([0.21, 0.297])]);
        assert!(
            matches!(
                result,
                Err(ImposeError::Decode {
                    reason: DecodeReason::MalformedCount,
                    ..
                })
            ),
            "count {bad} should be rejected"
        );
    }
}

#[test]
fn test_decode_rejects_wrong_size_shape() {
    for bad in [json!([0.21]), json!([0.21, 0.297, 0.1]), json!(["a", "b"])] {
        let result = decode_page_sizes(&[json!(1), bad]);
        assert!(matches!(
            result,
            Err(ImposeError::Decode {
                reason: DecodeReason::MalformedSize,
                ..
            })
        ));
    }
}

#[test]
fn test_decode_dangling_count() {
    let result = decode_page_sizes(&encoding(json!([1, [0.21, 0.297], 2])));
    match result {
        Err(ImposeError::Decode { offset, reason }) => {
            assert_eq!(offset, 2);
            assert_eq!(reason, DecodeReason::DanglingCount);
        }
        _ => panic!("Expected Decode error"),
    }
}

#[test]
fn test_decode_error_message() {
    let err = decode_page_sizes(&encoding(json!([[1, 2]]))).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Could not read metadata: malformed count at pageSizes[0]"
    );
}

#[test]
fn test_decode_rejects_huge_count() {
    let result = decode_page_sizes(&[json!(1e18), json!([0.21, 0.297])]);
    match result {
        Err(ImposeError::Decode { offset, reason }) => {
            assert_eq!(offset, 0);
            assert_eq!(reason, DecodeReason::TooManyPages);
        }
        _ => panic!("Expected Decode error"),
    }

    let result = decode_page_sizes(&[json!(u64::MAX), json!([0.21, 0.297])]);
    assert!(matches!(
        result,
        Err(ImposeError::Decode {
            reason: DecodeReason::TooManyPages,
            ..
        })
    ));
}

#[test]
fn test_decode_limits_total_across_runs() {
    let half = constants::MAX_PAGE_COUNT / 2 + 1;
    let result = decode_page_sizes(&[
        json!(half),
        json!([0.21, 0.297]),
        json!(half),
        json!([0.21, 0.297]),
    ]);
    match result {
        Err(ImposeError::Decode { offset, reason }) => {
            assert_eq!(offset, 2);
            assert_eq!(reason, DecodeReason::TooManyPages);
        }
        _ => panic!("Expected Decode error"),
    }
}
