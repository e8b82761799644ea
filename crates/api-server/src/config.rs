//! Service configuration from environment variables

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use a11y_core::query::QueryConfig;
use tracing::warn;

const DEFAULT_DATA_DIR: &str = ".a11y-data";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub data_dir: PathBuf,
    pub bind_addr: SocketAddr,
    pub query: QueryConfig,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup("A11Y_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let host = parse_or_default(
            "A11Y_HOST",
            lookup("A11Y_HOST"),
            IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            |raw| raw.parse().ok(),
        );
        let port = parse_or_default("A11Y_PORT", lookup("A11Y_PORT"), DEFAULT_PORT, |raw| {
            raw.parse().ok()
        });
        let query = parse_or_default(
            "A11Y_DEFAULT_WINDOW_DAYS",
            lookup("A11Y_DEFAULT_WINDOW_DAYS"),
            QueryConfig::default(),
            |raw| {
                raw.parse::<i64>()
                    .ok()
                    .filter(|days| *days > 0)
                    .and_then(QueryConfig::with_default_window_days)
            },
        );

        Self {
            data_dir,
            bind_addr: SocketAddr::new(host, port),
            query,
        }
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.data_dir.join("tasks.json")
    }

    pub fn results_path(&self) -> PathBuf {
        self.data_dir.join("results.jsonl")
    }
}

fn parse_or_default<T: std::fmt::Debug>(
    name: &str,
    raw: Option<String>,
    default: T,
    parse: impl Fn(&str) -> Option<T>,
) -> T {
    let Some(raw) = raw else {
        return default;
    };
    match parse(raw.trim()) {
        Some(value) => value,
        None => {
            warn!("Invalid value {:?} for {}, using {:?}", raw, name, default);
            default
        }
    }
}
