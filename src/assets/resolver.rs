//! Static URL resolution for locally served assets.

/// Maps a file name under the asset namespace to its public URL path.
pub trait StaticResolver: Send + Sync {
    fn static_url(&self, filename: &str) -> String;
}

/// Joins the namespace prefix and the file name with a single `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixResolver {
    prefix: String,
}

impl PrefixResolver {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl StaticResolver for PrefixResolver {
    fn static_url(&self, filename: &str) -> String {
        format!(
            "{}/{}",
            self.prefix.trim_end_matches('/'),
            filename.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_resolver_joins_once() {
        let resolver = PrefixResolver::new("/bootstrap/static");
        assert_eq!(
            resolver.static_url("css/bootstrap.min.css"),
            "/bootstrap/static/css/bootstrap.min.css"
        );

        let trailing = PrefixResolver::new("/bootstrap/static/");
        assert_eq!(
            trailing.static_url("/jquery.min.js"),
            "/bootstrap/static/jquery.min.js"
        );
    }

    #[test]
    fn test_prefix_resolver_is_deterministic() {
        let resolver = PrefixResolver::new("/assets");
        assert_eq!(
            resolver.static_url("popper.min.js"),
            resolver.static_url("popper.min.js")
        );
    }
}
