use anyhow::Result;
use clap::Parser;
use tracing::error;

use dude::{run, utils, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);
    utils::validate_args(&args)?;

    match run::run_dynamic_url_detection(&args) {
        Ok(summary) => {
            run::print_run_summary(&summary, &args);
            Ok(())
        }
        Err(e) => {
            error!(action = "abort", component = "dude_run", error = %e, "Dynamic URL detection failed");
            std::process::exit(1);
        }
    }
}
