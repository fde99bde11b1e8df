mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use clap::Parser;

use crate::model::config::ScanConfig;
use crate::pipeline::stage4_report::ReportFormat;
use crate::pipeline::{ScanError, run_scan};

#[derive(Debug, Parser)]
#[command(
    name = "gp-beststat",
    version,
    about = "Rank the best-of-run individuals found in job.*.out.stat files in the current directory"
)]
struct Cli {
    /// Report format written to stdout.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

#[derive(Debug, Clone)]
struct RunConfig {
    format: ReportFormat,
    scan: ScanConfig,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        Self {
            format: cli.format,
            scan: ScanConfig::default(),
        }
    }
}

fn main() {
    logging::init_logging();
    let config = RunConfig::from(Cli::parse());
    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<(), ScanError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_scan(&config.scan, config.format, &mut out)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
