//! Server configuration, read from a TOML file (spec.md §6's external
//! interface table: listen address, base URL, context path).

use std::net::SocketAddr;

/// Top level configuration for one `ldp_server` process.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Config {
    /// Socket address to bind the HTTP listener to.
    pub addr: SocketAddr,

    /// This server's externally visible base URL, with no trailing slash
    /// (e.g. `http://localhost:8080`). Every resource URI the protocol core
    /// computes is `base_url` + request path.
    pub base_url: String,

    /// The path segment under which LDP resources are served, starting
    /// with `/` and without a trailing slash (e.g. `/r`).
    #[serde(default = "default_context_path")]
    pub context_path: String,
}

fn default_context_path() -> String {
    "/r".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_toml() {
        let raw = r#"
            addr = "127.0.0.1:8080"
            base_url = "http://localhost:8080"
            context_path = "/r"
        "#;
        let config: Config = ::config::Config::builder()
            .add_source(::config::File::from_str(raw, ::config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.context_path, "/r");
    }

    #[test]
    fn context_path_defaults_when_absent() {
        let raw = r#"
            addr = "127.0.0.1:8080"
            base_url = "http://localhost:8080"
        "#;
        let config: Config = ::config::Config::builder()
            .add_source(::config::File::from_str(raw, ::config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.context_path, "/r");
    }
}
