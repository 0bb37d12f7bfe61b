//! 2D affine transformations for placing inserted pages
//!
//! A [`Transform`] stores the six coefficients `[a, b, c, d, e, f]` of the
//! homogeneous matrix
//!
//! ```text
//! | a  c  e |
//! | b  d  f |
//! | 0  0  1 |
//! ```
//!
//! which is the layout the print engine expects in `CopyInputPage` commands.

use serde::{Deserialize, Serialize};

/// Row-major 3x3 matrix in homogeneous coordinates
pub type Matrix3 = [[f64; 3]; 3];

/// Six-coefficient affine transformation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transform(pub [f64; 6]);

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn coefficients(&self) -> [f64; 6] {
        self.0
    }

    /// Set a uniform scale on the diagonal.
    ///
    /// Shear and translation terms are left untouched.
    pub fn scale(mut self, scale: f64) -> Self {
        self.0[0] = scale;
        self.0[3] = scale;
        self
    }

    /// Add to the translation terms (cumulative)
    pub fn translate(mut self, dx: f64, dy: f64) -> Self {
        self.0[4] += dx;
        self.0[5] += dy;
        self
    }

    /// Rotate the linear part by `degrees`.
    ///
    /// Uses the standard rotation matrix `[[cos, -sin], [sin, cos]]`, applied
    /// on the left. Translation passes through unchanged.
    pub fn rotate(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let rotation = [[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]];
        self.premultiply_linear(&rotation)
    }

    /// Half turn, computed by negating the linear part
    pub fn rotate_180(self) -> Self {
        let rotation = [[-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]];
        self.premultiply_linear(&rotation)
    }

    /// Linear part as a homogeneous matrix, translation zeroed
    fn linear_matrix(&self) -> Matrix3 {
        let [a, b, c, d, _, _] = self.0;
        [[a, c, 0.0], [b, d, 0.0], [0.0, 0.0, 1.0]]
    }

    fn premultiply_linear(self, left: &Matrix3) -> Self {
        let result = multiply_matrices(left, &self.linear_matrix());
        Transform([
            result[0][0],
            result[1][0],
            result[0][1],
            result[1][1],
            self.0[4],
            self.0[5],
        ])
    }
}

impl From<Transform> for [f64; 6] {
    fn from(transform: Transform) -> Self {
        transform.0
    }
}

/// Standard 3x3 matrix product `left * right`
pub fn multiply_matrices(left: &Matrix3, right: &Matrix3) -> Matrix3 {
    let mut result = [[0.0; 3]; 3];
    for (i, row) in result.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..3).map(|k| left[i][k] * right[k][j]).sum();
        }
    }
    result
}

/// Placement applied to inserted prefix/suffix pages
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PagePlacement {
    pub scale: Option<f64>,
    pub rotation_degrees: Option<f64>,
    pub offset: Option<(f64, f64)>,
}

impl PagePlacement {
    pub fn is_identity(&self) -> bool {
        self.scale.is_none() && self.rotation_degrees.is_none() && self.offset.is_none()
    }

    /// Compose scale, then rotation, then offset.
    ///
    /// Returns `None` when nothing is set so commands stay free of an
    /// explicit identity matrix.
    pub fn to_transform(&self) -> Option<Transform> {
        if self.is_identity() {
            return None;
        }

        let mut transform = Transform::identity();
        if let Some(scale) = self.scale {
            transform = transform.scale(scale);
        }
        match self.rotation_degrees {
            Some(degrees) if degrees.rem_euclid(360.0) == 180.0 => {
                transform = transform.rotate_180();
            }
            Some(degrees) => transform = transform.rotate(degrees),
            None => {}
        }
        if let Some((dx, dy)) = self.offset {
            transform = transform.translate(dx, dy);
        }
        Some(transform)
    }
}
