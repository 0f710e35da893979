pub mod args;
pub mod engine;
pub mod error;
pub mod files;
pub mod params;
pub mod run;
pub mod scheme;
pub mod stats;
pub mod step;
pub mod subdomain;
pub mod utils;

pub use args::Args;
pub use engine::dude_main;
pub use error::DudeError;
pub use params::DudeParameters;
pub use run::run_dynamic_url_detection;
pub use stats::{DudeOutcome, RunSummary};
