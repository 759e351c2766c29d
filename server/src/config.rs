/// Default `EnvFilter` directive when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "item_server=info,tower_http=info";

/// Startup parameters for the server binary.
///
/// Every flag can also come from the environment variable named next to it.
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "item-server", version, about = "In-memory items CRUD service")]
pub struct Config {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 4000)]
    pub port: u16,

    /// Log filter, e.g. "item_server=debug,tower_http=info"
    #[arg(short, long, env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_level: String,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
