//! Bootstrap files compiled into the crate.

use super::{CSS_FILENAME, JQUERY_FILENAME, JS_FILENAME, POPPER_FILENAME};

/// Bundled files keyed by their path under the asset namespace.
pub const BUNDLED_FILES: &[(&str, &[u8])] = &[
    (CSS_FILENAME, include_bytes!("static/css/bootstrap.min.css")),
    (JS_FILENAME, include_bytes!("static/js/bootstrap.min.js")),
    (JQUERY_FILENAME, include_bytes!("static/jquery.min.js")),
    (POPPER_FILENAME, include_bytes!("static/popper.min.js")),
];

/// Look up a bundled file by its namespace-relative path.
pub fn bundled_file(path: &str) -> Option<&'static [u8]> {
    BUNDLED_FILES
        .iter()
        .find(|(name, _)| *name == path)
        .map(|(_, bytes)| *bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_local_reference_is_bundled() {
        for path in [CSS_FILENAME, JS_FILENAME, JQUERY_FILENAME, POPPER_FILENAME] {
            let bytes = bundled_file(path).unwrap_or_else(|| panic!("{path} not bundled"));
            assert!(!bytes.is_empty(), "{path} is empty");
        }
    }

    #[test]
    fn test_unknown_paths_are_not_bundled() {
        assert!(bundled_file("css/bootstrap.css").is_none());
        assert!(bundled_file("/jquery.min.js").is_none());
        assert!(bundled_file("").is_none());
    }

    #[test]
    fn test_jquery_is_the_release_build() {
        let jquery = bundled_file(JQUERY_FILENAME).unwrap();
        assert!(jquery.starts_with(b"/*! jQuery v3."));
    }
}
