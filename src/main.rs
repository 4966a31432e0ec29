use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use sql_attributes::{
    locate_attributes, render_report, scan_sources, FileAttributes, OutputFormat, ScanOptions,
    SqlDialect,
};

#[derive(Parser)]
#[command(name = "sql-attributes")]
#[command(author, version, about = "Extract #[Name(key: value)] attributes from SQL sources")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan SQL files, directories or glob patterns for attributes
    Scan {
        /// Files, directories or glob patterns (e.g. "schema/**/*.sql")
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Only report attributes with this name
        #[arg(short, long)]
        name: Option<String>,

        /// Only read attributes from SQL comments
        #[arg(long)]
        comments_only: bool,

        /// SQL dialect used to tokenize sources with --comments-only
        #[arg(short, long, value_enum, default_value_t = SqlDialect::MySql)]
        dialect: SqlDialect,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Read SQL text from stdin and print its attributes
    Parse {
        /// Only report attributes with this name
        #[arg(short, long)]
        name: Option<String>,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    match cli.command {
        Commands::Scan {
            inputs,
            name,
            comments_only,
            dialect,
            format,
            output,
        } => {
            let options = ScanOptions {
                inputs,
                name_filter: name,
                comments_only,
                dialect,
            };

            let files = scan_sources(&options)?;
            let report = render_report(&files, format)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, report)
                        .with_context(|| format!("Failed to write report to {}", path.display()))?;
                    log::info!("Wrote report to {}", path.display());
                }
                None => print!("{}", report),
            }
        }
        Commands::Parse { name, format } => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read SQL from stdin")?;

            let mut attributes = locate_attributes(&content, &ScanOptions::default())?;
            if let Some(name) = &name {
                attributes.retain(|located| &located.attribute.name == name);
            }

            let files = if attributes.is_empty() {
                Vec::new()
            } else {
                vec![FileAttributes {
                    path: PathBuf::from("<stdin>"),
                    attributes,
                }]
            };
            print!("{}", render_report(&files, format)?);
        }
    }

    Ok(())
}
