//! Error type shared by the library.

use thiserror::Error;

/// Errors surfaced by the helpers and the integration layer.
#[derive(Debug, Error)]
pub enum Error {
    /// An optional integration was used but its support is not compiled in.
    #[error("{dependency} is not installed; enable the `{dependency}` feature to use this helper")]
    MissingOptionalDependency { dependency: &'static str },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dependency_names_dependency() {
        let err = Error::MissingOptionalDependency { dependency: "forms" };
        let msg = err.to_string();
        assert!(msg.contains("forms is not installed"));
        assert!(msg.contains("`forms` feature"));
    }
}
