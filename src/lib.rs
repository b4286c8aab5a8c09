//! Bootstrap asset helpers for axum applications.
//!
//! Generates the `<link>`/`<script>` tags for Bootstrap, jQuery and
//! Popper.js, pointing either at the bootcss CDN or at a bundled copy served
//! by the application itself, and registers the route serving that copy.
//!
//! ```
//! use bootstrap_assets::{AssetReferenceGenerator, ServingConfiguration};
//!
//! let generator = AssetReferenceGenerator::new(&ServingConfiguration::remote());
//! assert!(generator.css().as_str().contains("//cdn.bootcss.com/bootstrap/4.1.0/"));
//! ```

pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod extension;
pub mod forms;
pub mod server;

pub use assets::{
    AssetReferenceGenerator, InclusionOptions, Markup, ServingConfiguration, VersionSpec,
};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use extension::{Bootstrap, HostApp};
pub use forms::{FormField, HiddenFieldFilter, InputType};
