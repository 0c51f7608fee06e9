use thiserror::Error;

/// Domain-specific error types for plugin activation
///
/// Only activation can fail with an `Err`. Runtime ad failures never cross
/// the plugin boundary as errors — they degrade to host events
/// (`adtimeout`, a forced `ended`) so content playback always proceeds.
#[derive(Error, Debug)]
pub enum VastPluginError {
    #[error("host player does not expose an ads extension")]
    MissingAdsExtension,

    #[error("no VAST ad tag URL configured")]
    MissingAdUrl,

    #[error("invalid plugin options: {0}")]
    InvalidOptions(String),
}

// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, VastPluginError>;
