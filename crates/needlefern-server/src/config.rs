//! Server configuration, from command-line flags or `NEEDLEFERN_*` environment variables.

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "needlefern-server", version, about = "NeedleFern storefront API")]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "NEEDLEFERN_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long, env = "NEEDLEFERN_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Simulated backing-store delay for `GET /products`, in milliseconds.
    #[arg(long, env = "NEEDLEFERN_CATALOG_LATENCY_MS", default_value_t = 500)]
    pub catalog_latency_ms: u64,

    /// Simulated payment initiation delay for `POST /submit_order`, in milliseconds.
    #[arg(long, env = "NEEDLEFERN_PAYMENT_LATENCY_MS", default_value_t = 1000)]
    pub payment_latency_ms: u64,

    /// Request queue capacity of the catalog actor.
    #[arg(long, env = "NEEDLEFERN_CATALOG_BUFFER", default_value_t = 32)]
    pub catalog_buffer: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            catalog_latency_ms: 500,
            payment_latency_ms: 1000,
            catalog_buffer: 32,
        }
    }
}

impl ServerConfig {
    /// Defaults with both simulated delays turned off.
    pub fn without_latency() -> Self {
        Self {
            catalog_latency_ms: 0,
            payment_latency_ms: 0,
            ..Self::default()
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn catalog_latency(&self) -> Duration {
        Duration::from_millis(self.catalog_latency_ms)
    }

    pub fn payment_latency(&self) -> Duration {
        Duration::from_millis(self.payment_latency_ms)
    }
}
