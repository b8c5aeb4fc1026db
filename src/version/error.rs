use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Invalid version string '{0}'")]
    InvalidVersionFormat(String),
}
