/// Error type for [`crate::config`] module. Captures errors building or
/// reading the session configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A value required by the selected command was not configured.
    #[error("missing required configuration: {0}")]
    Missing(&'static str),
    /// Error parsing a URL
    #[error("failed to parse URL: {0}")]
    Url(#[from] url::ParseError),
}
