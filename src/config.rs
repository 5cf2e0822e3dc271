//! Explicit, serde-deserializable configuration for the enrichment worker
//! pool, plus the runtime capability set workers are constructed with.
//!
//! Splitting these into two types matters: `EnrichmentConfig` is the plain
//! data a host process may load from a config file (this crate never reads
//! one itself); `Capabilities` additionally holds live provider handles
//! (a DNS resolver, a WHOIS client, a GeoIP reader) that cannot be
//! deserialized and are instead constructed once by the caller and shared
//! read-only across workers.

use std::net::IpAddr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[cfg(feature = "whois_lookup")]
use whois_rust::WhoIs;

#[cfg(feature = "geoip_lookup")]
use maxminddb::Reader;

#[cfg(feature = "ssdeep_lookup")]
use reqwest::Client;

/// Default user agent, matching the original tool's `dnstwist/<version>` style.
pub const DEFAULT_USER_AGENT: &str = concat!("Mozilla/5.0 lookalike/", env!("CARGO_PKG_VERSION"));

pub const DNS_QUERY_TIMEOUT: Duration = Duration::from_millis(2500);
pub const DNS_LIFETIME_TIMEOUT: Duration = Duration::from_secs(5);
pub const BANNER_TIMEOUT: Duration = Duration::from_secs(1);
pub const SMTP_TIMEOUT: Duration = Duration::from_secs(5);
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Plain, host-configurable knobs for the worker pool. Implements
/// [`Default`] with the documented defaults (10 threads, system
/// nameservers, port 53, the crate's default user agent).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Number of concurrent workers. Forced to 1 by
    /// [`crate::enrich::Pool::new`] when the WHOIS capability is enabled,
    /// since typical WHOIS clients are not safely reentrant.
    pub threads: usize,

    /// Custom nameservers to resolve against; empty means "use the system
    /// resolver configuration".
    pub nameservers: Vec<IpAddr>,

    /// Port to query configured nameservers on.
    pub port: u16,

    /// User agent sent on the fuzzy-hash content fetch and HTTP banner probe.
    pub user_agent: String,

    pub enable_mx_check: bool,
    pub enable_banners: bool,
    pub enable_geoip: bool,
    pub enable_whois: bool,
    pub enable_ssdeep: bool,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            threads: 10,
            nameservers: Vec::new(),
            port: 53,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            enable_mx_check: false,
            enable_banners: false,
            enable_geoip: false,
            enable_whois: false,
            enable_ssdeep: false,
        }
    }
}

/// Runtime-constructed bundle of optional provider handles a worker pool
/// consumes. A missing handle simply means the corresponding probe is
/// skipped — capability absence is not an error.
#[derive(Default)]
pub struct Capabilities {
    pub resolver: Option<hickory_resolver::TokioAsyncResolver>,

    #[cfg(feature = "whois_lookup")]
    pub whois: Option<WhoIs>,

    #[cfg(feature = "geoip_lookup")]
    pub geoip: Option<Reader<Vec<u8>>>,

    /// Reused HTTP client for the fuzzy-hash content fetch. There is no
    /// analogous handle for the fuzzy hasher itself — `fuzzyhash::hash`/
    /// `compare` are pure functions with no state to hold, so the
    /// `enable_ssdeep` flag on [`EnrichmentConfig`] alone gates that probe.
    #[cfg(feature = "ssdeep_lookup")]
    pub http_client: Option<Client>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_documented_defaults() {
        let config = EnrichmentConfig::default();

        assert_eq!(config.threads, 10);
        assert_eq!(config.port, 53);
        assert!(config.nameservers.is_empty());
        assert!(!config.enable_whois);
    }

    #[test]
    fn test_config_overrides_are_independent_of_defaults() {
        let config = EnrichmentConfig {
            threads: 4,
            enable_banners: true,
            ..Default::default()
        };

        assert_eq!(config.threads, 4);
        assert!(config.enable_banners);
        assert!(!config.enable_whois);
    }
}
