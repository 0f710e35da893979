use thiserror::Error;

/// Structural data errors from the detection engine.
///
/// These indicate bad input, not transient faults; callers should surface
/// them instead of retrying.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DudeError {
    #[error("domain '{domain}' not found in url '{url}'")]
    DomainNotFoundInUrl { domain: String, url: String },

    #[error("no scheme mapping recorded for url '{url}'")]
    MissingSchemeMapping { url: String },
}
