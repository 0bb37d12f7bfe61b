mod logger;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use cover_impose::{HostEnvironment, PagePlacement, Parameters, WorkingDir};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "covt", about = "Cover page command generator", version)]
struct Cli {
    /// Log debug details
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the print engine command file and bundled generate step
    Generate {
        /// Host parameters JSON file; flags below override its values
        #[arg(long)]
        params: Option<PathBuf>,

        /// Host environment JSON file; flags below override its values
        #[arg(long)]
        env: Option<PathBuf>,

        /// Local directory backing job:// paths
        #[arg(short, long, default_value = ".")]
        working_dir: PathBuf,

        /// Input TNO file
        #[arg(short, long)]
        input: Option<String>,

        /// Metadata file (defaults to <input>.json)
        #[arg(short, long)]
        metadata: Option<String>,

        /// Page inserted before every group (.pdf or .tno)
        #[arg(long)]
        prefix: Option<String>,

        /// Page inserted after every group (.pdf or .tno)
        #[arg(long)]
        suffix: Option<String>,

        /// Output path pattern
        #[arg(short, long)]
        output: Option<String>,

        /// Output type
        #[arg(long, value_enum)]
        output_type: Option<OutputTypeArg>,

        /// Production configuration prefix
        #[arg(long, value_enum)]
        production_config_type: Option<ProductionConfigArg>,

        /// Production configuration path following the prefix
        #[arg(long)]
        production_config: Option<String>,

        /// Production type of the job
        #[arg(long)]
        production_type: Option<String>,

        /// Job identifier
        #[arg(long)]
        job_id: Option<String>,

        /// Impositioning template used by the generate step
        #[arg(long)]
        template: Option<String>,

        /// Uniform scale for inserted pages
        #[arg(long)]
        cover_scale: Option<f64>,

        /// Rotation of inserted pages in degrees
        #[arg(long)]
        cover_rotate: Option<f64>,

        /// Offset of inserted pages (dx dy)
        #[arg(long, num_args = 2, value_names = ["DX", "DY"])]
        cover_offset: Option<Vec<f64>>,

        /// Show statistics only, don't write any file
        #[arg(long)]
        stats_only: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputTypeArg {
    Pdf,
    Afp,
    InspireNative,
    Mtiff,
}

#[derive(Clone, Copy, ValueEnum)]
enum ProductionConfigArg {
    WorkingFolder,
    Share,
    Icm,
    Custom,
    IcmSampleSolutions,
    IcmCustomSolutions,
    IcmContentAuthor,
}

impl From<OutputTypeArg> for cover_impose::OutputType {
    fn from(arg: OutputTypeArg) -> Self {
        match arg {
            OutputTypeArg::Pdf => Self::Pdf,
            OutputTypeArg::Afp => Self::Afp,
            OutputTypeArg::InspireNative => Self::InspireNative,
            OutputTypeArg::Mtiff => Self::Mtiff,
        }
    }
}

impl From<ProductionConfigArg> for cover_impose::ProductionConfigurationType {
    fn from(arg: ProductionConfigArg) -> Self {
        match arg {
            ProductionConfigArg::WorkingFolder => Self::WorkingFolder,
            ProductionConfigArg::Share => Self::Share,
            ProductionConfigArg::Icm => Self::Icm,
            ProductionConfigArg::Custom => Self::Custom,
            ProductionConfigArg::IcmSampleSolutions => Self::IcmSampleSolutions,
            ProductionConfigArg::IcmCustomSolutions => Self::IcmCustomSolutions,
            ProductionConfigArg::IcmContentAuthor => Self::IcmContentAuthor,
        }
    }
}

/// Replace `target` when the flag was given
fn overlay<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    logger::CliLogger::new(level).init()?;

    match cli.command {
        Commands::Generate {
            params,
            env,
            working_dir,
            input,
            metadata,
            prefix,
            suffix,
            output,
            output_type,
            production_config_type,
            production_config,
            production_type,
            job_id,
            template,
            cover_scale,
            cover_rotate,
            cover_offset,
            stats_only,
        } => {
            let mut parameters = match params {
                Some(path) => Parameters::load(path).await?,
                None => Parameters::default(),
            };
            overlay(&mut parameters.input_file_path, input.map(Some));
            overlay(&mut parameters.metadata_file_path, metadata.map(Some));
            overlay(&mut parameters.prefix_page_path, prefix.map(Some));
            overlay(&mut parameters.suffix_page_path, suffix.map(Some));
            overlay(&mut parameters.output_file_paths, output.map(Some));
            overlay(&mut parameters.output_type, output_type.map(Into::into));
            overlay(
                &mut parameters.production_configuration_type,
                production_config_type.map(|t| Some(t.into())),
            );
            overlay(
                &mut parameters.production_configuration,
                production_config.map(Some),
            );

            let mut environment = match env {
                Some(path) => HostEnvironment::load(path).await?,
                None => HostEnvironment::default(),
            };
            overlay(&mut environment.production_type, production_type);
            overlay(&mut environment.job_id, job_id);
            overlay(&mut environment.impositioning_template_path, template);

            let placement = PagePlacement {
                scale: cover_scale,
                rotation_degrees: cover_rotate,
                offset: cover_offset.map(|o| (o[0], o[1])),
            };
            let working_dir = WorkingDir::new(working_dir);

            if stats_only {
                let paths = cover_impose::ResolvedPaths::resolve(&parameters)?;
                let metadata =
                    cover_impose::load_metadata(&working_dir, &paths.metadata_file_path).await?;
                let meta = cover_impose::build_meta_context(&metadata)?;
                let stats = cover_impose::calculate_statistics(
                    &meta,
                    paths.prefix_page_path.is_some(),
                    paths.suffix_page_path.is_some(),
                );
                println!("Command Statistics:");
                println!("  Source pages: {}", stats.source_pages);
                println!("  Groups: {}", stats.groups);
                println!("  Prefix pages added: {}", stats.prefix_pages_added);
                println!("  Suffix pages added: {}", stats.suffix_pages_added);
                println!("  Output pages: {}", stats.output_pages);
                return Ok(());
            }

            let result =
                cover_impose::execute(&parameters, &environment, &working_dir, &placement).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
