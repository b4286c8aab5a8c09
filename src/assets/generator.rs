//! Stylesheet and script reference builders.

use std::fmt;
use std::sync::Arc;

use super::{
    InclusionOptions, Markup, PrefixResolver, ServingConfiguration, StaticResolver, VersionSpec,
    CDN_BASE, CSS_FILENAME, DEFAULT_BOOTSTRAP_VERSION, JQUERY_FILENAME, JS_FILENAME,
    POPPER_FILENAME,
};

/// Builds Bootstrap `<link>`/`<script>` markup for one serving mode.
///
/// The serving mode is captured at construction, so every call on the same
/// generator sees the same mode and repeated calls return identical output.
#[derive(Clone)]
pub struct AssetReferenceGenerator {
    serve_local: bool,
    resolver: Arc<dyn StaticResolver>,
}

impl AssetReferenceGenerator {
    /// Build a generator resolving local files under `config.static_prefix`.
    pub fn new(config: &ServingConfiguration) -> Self {
        Self::with_resolver(
            config.serve_local,
            Arc::new(PrefixResolver::new(config.static_prefix.clone())),
        )
    }

    /// Build a generator with a host-provided resolver.
    pub fn with_resolver(serve_local: bool, resolver: Arc<dyn StaticResolver>) -> Self {
        Self {
            serve_local,
            resolver,
        }
    }

    pub fn serve_local(&self) -> bool {
        self.serve_local
    }

    /// Stylesheet reference for the given Bootstrap version.
    pub fn load_css(&self, version: &str) -> Markup {
        let href = if self.serve_local {
            self.resolver.static_url(CSS_FILENAME)
        } else {
            format!("{CDN_BASE}/bootstrap/{version}/{CSS_FILENAME}")
        };
        Markup::new(format!(
            "<link rel=\"stylesheet\" href=\"{href}\" type=\"text/css\">\n"
        ))
    }

    /// Stylesheet reference for the default Bootstrap version.
    pub fn css(&self) -> Markup {
        self.load_css(DEFAULT_BOOTSTRAP_VERSION)
    }

    /// Script references: jQuery, Bootstrap, then Popper.js, one per line.
    ///
    /// A library left out by `include` still occupies its line as an empty
    /// string.
    pub fn load_js(&self, versions: &VersionSpec, include: InclusionOptions) -> Markup {
        let serve_local = self.serve_local;

        let bootstrap = if serve_local {
            self.local_script(JS_FILENAME)
        } else {
            cdn_script("bootstrap", &versions.bootstrap, JS_FILENAME)
        };

        let jquery = match (include.with_jquery, serve_local) {
            (false, _) => String::new(),
            (true, true) => self.local_script(JQUERY_FILENAME),
            (true, false) => cdn_script("jquery", &versions.jquery, JQUERY_FILENAME),
        };

        let popper = match (include.with_popper, serve_local) {
            (false, _) => String::new(),
            (true, true) => self.local_script(POPPER_FILENAME),
            (true, false) => cdn_script(
                "popper.js",
                &versions.popper,
                &format!("umd/{POPPER_FILENAME}"),
            ),
        };

        Markup::new(format!("{jquery}\n{bootstrap}\n{popper}\n"))
    }

    /// Script references with default versions and every library included.
    pub fn js(&self) -> Markup {
        self.load_js(&VersionSpec::default(), InclusionOptions::default())
    }

    fn local_script(&self, filename: &str) -> String {
        script_tag(&self.resolver.static_url(filename))
    }
}

impl Default for AssetReferenceGenerator {
    fn default() -> Self {
        Self::new(&ServingConfiguration::default())
    }
}

impl fmt::Debug for AssetReferenceGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetReferenceGenerator")
            .field("serve_local", &self.serve_local)
            .finish_non_exhaustive()
    }
}

fn cdn_script(library: &str, version: &str, path: &str) -> String {
    script_tag(&format!("{CDN_BASE}/{library}/{version}/{path}"))
}

fn script_tag(src: &str) -> String {
    format!("<script src=\"{src}\"></script>")
}
