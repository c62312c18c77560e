/// Errors raised before any clustering iteration begins.
///
/// Both variants are precondition failures on the caller's side. Once a
/// [`Config`](crate::Config) and a [`Dataset`](crate::Dataset) exist, a fit
/// cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    InvalidConfiguration(String),
    InvalidDataset(String),
}

impl std::fmt::Display for ClusterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfiguration(s) => write!(f, "invalid configuration: {}", s),
            Self::InvalidDataset(s) => write!(f, "invalid dataset: {}", s),
        }
    }
}

impl std::error::Error for ClusterError {}
