pub const DEFAULT_POPULARITY_CUTOFF: f64 = 0.05;
pub const DEFAULT_SHORT_PREFIX_CUTOFF: usize = 15;
pub const DEFAULT_LARGE_LINK_LEN_THRESHOLD: usize = 20;
pub const DEFAULT_LARGE_LINK_COUNT: usize = 0;
pub const DEFAULT_SUBDOMAIN_THRESHOLD: usize = 40;

/// Tuning parameters for one dynamic URL detection run.
#[derive(Debug, Clone, Copy)]
pub struct DudeParameters {
    /// Fraction of a subdomain's population a prefix cluster must reach.
    pub popularity_cutoff: f64,
    /// Extra length beyond the domain name below which a prefix is distrusted.
    pub short_prefix_cutoff: usize,
    /// Length beyond the domain name that marks a URL as "large".
    pub large_link_len_threshold: usize,
    /// Minimum number of large URLs required before a pattern search runs.
    pub large_link_count: usize,
    /// Minimum subdomain population before detection runs on the group at all.
    pub subdomain_threshold: usize,
}

impl Default for DudeParameters {
    fn default() -> Self {
        DudeParameters {
            popularity_cutoff: DEFAULT_POPULARITY_CUTOFF,
            short_prefix_cutoff: DEFAULT_SHORT_PREFIX_CUTOFF,
            large_link_len_threshold: DEFAULT_LARGE_LINK_LEN_THRESHOLD,
            large_link_count: DEFAULT_LARGE_LINK_COUNT,
            subdomain_threshold: DEFAULT_SUBDOMAIN_THRESHOLD,
        }
    }
}
