use clap::Parser;
use std::path::PathBuf;

use crate::params::{
    DudeParameters, DEFAULT_LARGE_LINK_COUNT, DEFAULT_LARGE_LINK_LEN_THRESHOLD,
    DEFAULT_POPULARITY_CUTOFF, DEFAULT_SHORT_PREFIX_CUTOFF, DEFAULT_SUBDOMAIN_THRESHOLD,
};

#[derive(Parser, Debug)]
#[command(
    name = "dude",
    about = "Filter auto-generated URL families out of an orphan-page candidate list",
    version,
    long_about = None
)]
pub struct Args {
    /// Domain to filter orphan candidates for
    pub domain: String,

    /// Candidate URL list, one URL per line; overwritten in place with the remaining candidates
    #[arg(short, long)]
    pub candidates: PathBuf,

    /// Output path for excluded URLs (defaults to <DOMAIN>_dude_excluded.txt)
    #[arg(long)]
    pub excluded: Option<PathBuf>,

    /// Output path for identified prefixes (defaults to <DOMAIN>_dude_prefix_excluded.txt)
    #[arg(long)]
    pub prefixes: Option<PathBuf>,

    /// Fraction of a subdomain's population a prefix cluster must reach
    #[arg(long = "pc", default_value_t = DEFAULT_POPULARITY_CUTOFF)]
    pub popularity_cutoff: f64,

    /// Extra length beyond the domain name below which a prefix is distrusted
    #[arg(long = "st", default_value_t = DEFAULT_SHORT_PREFIX_CUTOFF)]
    pub short_prefix_cutoff: usize,

    /// Length beyond the domain name that marks a URL as large
    #[arg(long = "lt", default_value_t = DEFAULT_LARGE_LINK_LEN_THRESHOLD)]
    pub large_link_len_threshold: usize,

    /// Minimum number of large URLs required before a pattern search runs
    #[arg(long = "lc", default_value_t = DEFAULT_LARGE_LINK_COUNT)]
    pub large_link_count: usize,

    /// Minimum subdomain population before detection runs on the group
    #[arg(long, default_value_t = DEFAULT_SUBDOMAIN_THRESHOLD)]
    pub subdomain_threshold: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Number of worker threads
    #[arg(short, long)]
    pub workers: Option<usize>,
}

impl Args {
    pub fn dude_params(&self) -> DudeParameters {
        DudeParameters {
            popularity_cutoff: self.popularity_cutoff,
            short_prefix_cutoff: self.short_prefix_cutoff,
            large_link_len_threshold: self.large_link_len_threshold,
            large_link_count: self.large_link_count,
            subdomain_threshold: self.subdomain_threshold,
        }
    }

    pub fn excluded_path(&self) -> PathBuf {
        self.excluded
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}_dude_excluded.txt", self.domain)))
    }

    pub fn prefixes_path(&self) -> PathBuf {
        self.prefixes
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}_dude_prefix_excluded.txt", self.domain)))
    }
}
