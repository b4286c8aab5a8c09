//! Commands printing asset references and configuration.

use crate::assets::{InclusionOptions, ServingConfiguration, VersionSpec};
use crate::config::AppConfig;
use crate::extension::{asset_namespace, Bootstrap};

/// Arguments of the `js` command.
pub struct JsArgs {
    pub version: String,
    pub jquery_version: String,
    pub popper_version: String,
    pub with_jquery: bool,
    pub with_popper: bool,
}

fn bootstrap_for(config: &AppConfig) -> Bootstrap {
    Bootstrap::new(&ServingConfiguration::new(
        config.serve_local(),
        asset_namespace(&config.static_url_path),
    ))
}

/// Print the effective configuration.
pub fn cmd_config(config: &AppConfig) -> anyhow::Result<()> {
    let mut config = config.clone();
    config.set_default_serve_local();
    println!("{}", config.to_json()?);
    Ok(())
}

/// Print the stylesheet reference.
pub fn cmd_css(config: &AppConfig, version: &str) -> anyhow::Result<()> {
    print!("{}", bootstrap_for(config).load_css(version));
    Ok(())
}

/// Print the script references.
pub fn cmd_js(config: &AppConfig, args: JsArgs) -> anyhow::Result<()> {
    let versions = VersionSpec::bootstrap(args.version)
        .with_jquery(args.jquery_version)
        .with_popper(args.popper_version);
    let include = InclusionOptions {
        with_jquery: args.with_jquery,
        with_popper: args.with_popper,
    };

    print!("{}", bootstrap_for(config).load_js(&versions, include));
    Ok(())
}
