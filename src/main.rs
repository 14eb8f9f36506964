use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{info, warn};

use xmldoc_site::cli::run_generation;
use xmldoc_site::generator::{SiteOptions, Theme};
use xmldoc_site::logging::{init_logger, level_from_flags};
use xmldoc_site::DocError;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// XML documentation file produced by the compiler (e.g. Assembly-CSharp.xml)
    input: PathBuf,

    /// Output directory for the generated site
    #[arg(default_value = "documentation_html")]
    output: PathBuf,

    /// Title shown in page headers
    #[arg(long, default_value = "API Documentation")]
    title: String,

    /// Theme used until the reader toggles it in the browser
    #[arg(long, value_enum, default_value_t = Theme::Light)]
    theme: Theme,

    /// Print more details (repeat for trace output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logger(level_from_flags(cli.verbose, cli.quiet))?;

    let options = SiteOptions {
        title: cli.title,
        theme: cli.theme,
    };

    match run_generation(&cli.input, &cli.output, options) {
        Ok(summary) => {
            let stats = summary.stats;
            info!(
                "documentation written to {} ({} files)",
                cli.output.display(),
                summary.files.len()
            );
            info!(
                "{} types, {} methods, {} properties, {} fields",
                stats.total_types, stats.total_methods, stats.total_properties, stats.total_fields
            );
            info!("open {}", cli.output.join("index.html").display());
            Ok(ExitCode::SUCCESS)
        }
        Err(DocError::NoTypes) => {
            warn!("no types found in {}", cli.input.display());
            warn!("check that the XML file contains documentation comments");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}
