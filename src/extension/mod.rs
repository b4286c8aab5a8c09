//! The Bootstrap extension for axum applications.
//!
//! [`Bootstrap::init_app`] wires the helpers into a [`HostApp`]:
//! - records the extension under [`EXTENSION_NAME`]
//! - defaults `bootstrap_serve_local` to `false`
//! - mounts the bundled files at `/bootstrap` + `static_url_path`, from the
//!   compiled-in copy unless `bootstrap_static_folder` overrides it
//!
//! Templates receive the returned `Arc<Bootstrap>` as a `bootstrap` field
//! and call its helpers, e.g. `{{ bootstrap.css()|safe }}`.

mod host;
mod static_files;

pub use host::HostApp;
pub use static_files::{serve_asset, serve_bundled, static_route};

use std::sync::Arc;

use crate::assets::{
    AssetReferenceGenerator, InclusionOptions, Markup, ServingConfiguration, VersionSpec,
};
use crate::error::Result;
use crate::forms::{FormField, HiddenFieldFilter};

/// Name the extension is registered under.
pub const EXTENSION_NAME: &str = "bootstrap";

/// URL prefix of the asset namespace for an application static path.
pub fn asset_namespace(static_url_path: &str) -> String {
    format!("/{}{}", EXTENSION_NAME, static_url_path)
}

/// Template helpers for Bootstrap assets and forms.
#[derive(Debug, Clone)]
pub struct Bootstrap {
    generator: AssetReferenceGenerator,
    hidden_fields: HiddenFieldFilter,
}

impl Bootstrap {
    pub fn new(serving: &ServingConfiguration) -> Self {
        Self::with_parts(
            AssetReferenceGenerator::new(serving),
            HiddenFieldFilter::detect(),
        )
    }

    pub fn with_parts(generator: AssetReferenceGenerator, hidden_fields: HiddenFieldFilter) -> Self {
        Self {
            generator,
            hidden_fields,
        }
    }

    /// Register the extension and its static route on `app`.
    ///
    /// Calling this twice registers a second route for the same path, which
    /// axum panics on; initialise each application once.
    pub fn init_app(app: &mut HostApp) -> Arc<Self> {
        let serve_local = app.config_mut().set_default_serve_local();
        let namespace = asset_namespace(&app.config().static_url_path);
        let folder = app.config().static_folder();

        app.route(&format!("{}/*path", namespace), static_route(folder.clone()));

        let extension = Arc::new(Self::new(&ServingConfiguration::new(
            serve_local,
            namespace.clone(),
        )));
        app.register_extension(EXTENSION_NAME, Arc::clone(&extension));

        tracing::debug!(
            "Registered {} extension: namespace={} folder={} serve_local={}",
            EXTENSION_NAME,
            namespace,
            folder
                .as_deref()
                .map_or_else(|| "<bundled>".into(), |f| f.display().to_string()),
            serve_local
        );

        extension
    }

    pub fn generator(&self) -> &AssetReferenceGenerator {
        &self.generator
    }

    pub fn load_css(&self, version: &str) -> Markup {
        self.generator.load_css(version)
    }

    pub fn css(&self) -> Markup {
        self.generator.css()
    }

    pub fn load_js(&self, versions: &VersionSpec, include: InclusionOptions) -> Markup {
        self.generator.load_js(versions, include)
    }

    pub fn js(&self) -> Markup {
        self.generator.js()
    }

    pub fn is_hidden_field(&self, field: &dyn FormField) -> Result<bool> {
        self.hidden_fields.is_hidden_field(field)
    }
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self::new(&ServingConfiguration::default())
    }
}
