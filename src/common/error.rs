use thiserror::Error;

/// Reasons a probe abstains. Never fatal: the detector collapses these to
/// "not this platform" and moves on to the next probe.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Hardware info source could not be read")]
    SourceUnavailable(std::io::Error),

    #[error("Hardware info has no Revision field")]
    RevisionNotFound,
}
