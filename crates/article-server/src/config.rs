//! Server configuration.
//!
//! Every option is a command-line flag with an environment variable fallback:
//! - `ARTICLES_HOST`: interface to bind (default: "0.0.0.0")
//! - `ARTICLES_PORT`: listen port (default: 10000)
//! - `ARTICLES_NO_SEED`: start with an empty store instead of the samples

use clap::Parser;

/// Configuration for the article server.
#[derive(Debug, Clone, Parser)]
#[command(name = "article-server", about = "In-memory article CRUD service")]
pub struct ServerConfig {
    /// Interface to bind to.
    #[arg(long, env = "ARTICLES_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, env = "ARTICLES_PORT", default_value_t = 10000)]
    pub port: u16,

    /// Start with an empty store instead of the two sample articles.
    #[arg(long, env = "ARTICLES_NO_SEED")]
    pub no_seed: bool,
}

impl ServerConfig {
    /// The `host:port` string to bind the listener to.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
