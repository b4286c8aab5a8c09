//! Web server command.

use console::style;

use crate::config::AppConfig;
use crate::extension::asset_namespace;

/// Default port when the bind address names only a host.
const DEFAULT_PORT: u16 = 5000;

/// Start the web server.
pub async fn cmd_serve(config: AppConfig, bind: &str) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(bind);

    let mode = match (config.serve_local(), config.static_folder()) {
        (false, _) => "CDN".to_string(),
        (true, None) => "bundled files compiled into the binary".to_string(),
        (true, Some(folder)) => format!("bundled files from {}", folder.display()),
    };

    println!(
        "{} Serving Bootstrap assets: {}",
        style("→").cyan(),
        mode
    );
    println!(
        "  Asset namespace {}",
        style(asset_namespace(&config.static_url_path)).dim()
    );
    println!(
        "{} Starting server at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(config, &host, port).await
}

/// Parse a bind address that can be:
/// - Just a port: "8080" -> 127.0.0.1:8080
/// - Just a host: "0.0.0.0" -> 0.0.0.0:5000
/// - Host and port: "0.0.0.0:8080" -> 0.0.0.0:8080
fn parse_bind_address(bind: &str) -> (String, u16) {
    if let Ok(port) = bind.parse::<u16>() {
        return ("127.0.0.1".to_string(), port);
    }

    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return (host.to_string(), port);
        }
    }

    (bind.to_string(), DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bind_address() {
        assert_eq!(parse_bind_address("8080"), ("127.0.0.1".to_string(), 8080));
        assert_eq!(parse_bind_address("0.0.0.0"), ("0.0.0.0".to_string(), 5000));
        assert_eq!(
            parse_bind_address("0.0.0.0:3000"),
            ("0.0.0.0".to_string(), 3000)
        );
        assert_eq!(
            parse_bind_address("localhost:notaport"),
            ("localhost:notaport".to_string(), 5000)
        );
    }
}
