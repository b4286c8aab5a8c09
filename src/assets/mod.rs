//! Bootstrap asset reference generation.
//!
//! Produces `<link>`/`<script>` tags pointing either at the bundled copy
//! served under the asset namespace or at the bootcss CDN:
//! - `bundled`: the Bootstrap files compiled into the crate
//! - `generator`: the stylesheet and script reference builders
//! - `markup`: pre-escaped output wrapper
//! - `resolver`: local static URL resolution

mod bundled;
mod generator;
mod markup;
mod resolver;

pub use bundled::{bundled_file, BUNDLED_FILES};
pub use generator::AssetReferenceGenerator;
pub use markup::Markup;
pub use resolver::{PrefixResolver, StaticResolver};

/// Default Bootstrap version.
pub const DEFAULT_BOOTSTRAP_VERSION: &str = "4.1.0";
/// Default jQuery version.
pub const DEFAULT_JQUERY_VERSION: &str = "3.3.1";
/// Default Popper.js version.
pub const DEFAULT_POPPER_VERSION: &str = "1.14.0";

/// CDN host prefix (protocol-relative).
pub const CDN_BASE: &str = "//cdn.bootcss.com";

/// Bundled file names, relative to the asset namespace.
pub const CSS_FILENAME: &str = "css/bootstrap.min.css";
pub const JS_FILENAME: &str = "js/bootstrap.min.js";
pub const JQUERY_FILENAME: &str = "jquery.min.js";
pub const POPPER_FILENAME: &str = "popper.min.js";

/// Version identifiers for the toolkit and its companion libraries.
///
/// Versions are interpolated verbatim; nothing checks them against a list
/// of published releases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSpec {
    pub bootstrap: String,
    pub jquery: String,
    pub popper: String,
}

impl VersionSpec {
    /// Override the Bootstrap version, keeping the companion defaults.
    pub fn bootstrap(version: impl Into<String>) -> Self {
        Self {
            bootstrap: version.into(),
            ..Self::default()
        }
    }

    pub fn with_jquery(mut self, version: impl Into<String>) -> Self {
        self.jquery = version.into();
        self
    }

    pub fn with_popper(mut self, version: impl Into<String>) -> Self {
        self.popper = version.into();
        self
    }
}

impl Default for VersionSpec {
    fn default() -> Self {
        Self {
            bootstrap: DEFAULT_BOOTSTRAP_VERSION.to_string(),
            jquery: DEFAULT_JQUERY_VERSION.to_string(),
            popper: DEFAULT_POPPER_VERSION.to_string(),
        }
    }
}

/// Which companion libraries to include in script output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InclusionOptions {
    pub with_jquery: bool,
    pub with_popper: bool,
}

impl InclusionOptions {
    /// Only the Bootstrap script itself.
    pub fn bootstrap_only() -> Self {
        Self {
            with_jquery: false,
            with_popper: false,
        }
    }
}

impl Default for InclusionOptions {
    fn default() -> Self {
        Self {
            with_jquery: true,
            with_popper: true,
        }
    }
}

/// Serving mode and local asset prefix, fixed when the generator is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServingConfiguration {
    /// Serve the bundled files instead of the CDN.
    pub serve_local: bool,
    /// URL prefix of the asset namespace, e.g. `/bootstrap/static`.
    pub static_prefix: String,
}

impl ServingConfiguration {
    pub fn new(serve_local: bool, static_prefix: impl Into<String>) -> Self {
        Self {
            serve_local,
            static_prefix: static_prefix.into(),
        }
    }

    /// CDN mode with the default namespace.
    pub fn remote() -> Self {
        Self::default()
    }

    /// Local mode with the default namespace.
    pub fn local() -> Self {
        Self {
            serve_local: true,
            ..Self::default()
        }
    }
}

impl Default for ServingConfiguration {
    fn default() -> Self {
        Self {
            serve_local: false,
            static_prefix: "/bootstrap/static".to_string(),
        }
    }
}
