//! Environment configuration.
//!
//! Every variable is prefixed with `STATIC_DATA_` and has a default, so the service starts
//! with no environment at all. Values that are present but malformed are rejected rather
//! than silently replaced by their default.

use crate::server::error::config::ConfigError;

const ENV_PREFIX: &str = "STATIC_DATA_";

/// How location IDs are classified before fetching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassifierPolicy {
    /// Ask the universe names endpoint for the category of each ID.
    Query,
    /// Infer the category from the numeric range of the ID alone.
    Range,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub db_path: String,
    pub log_level: String,
    pub port: u16,
    pub esi_host: String,
    pub structure_hunt_host: String,
    pub disable_tls: bool,
    pub user_agent: String,
    pub classifier: ClassifierPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `lookup` receives the fully prefixed variable name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| -> (String, String) {
            let full_name = format!("{}{}", ENV_PREFIX, name);
            let value = lookup(&full_name).unwrap_or_else(|| default.to_string());
            (full_name, value)
        };

        let (_, db_path) = var("DB_PATH", "static-data.db");
        let (log_var, log_level) = var("LOG_LEVEL", "info");
        if let Err(e) = tracing_subscriber::EnvFilter::try_new(&log_level) {
            return Err(ConfigError::InvalidEnvValue {
                var: log_var,
                reason: e.to_string(),
            });
        }
        let (_, esi_host) = var("ESI_HOST", "esi.evetech.net");
        let (_, structure_hunt_host) = var("STRUCTURE_HUNT_HOST", "stop.hammerti.me.uk");
        let (_, user_agent) = var(
            "USER_AGENT",
            concat!("static-data/", env!("CARGO_PKG_VERSION")),
        );

        let (port_var, port) = var("PORT", "43000");
        let port = port.parse::<u16>().map_err(|e| ConfigError::InvalidEnvValue {
            var: port_var,
            reason: e.to_string(),
        })?;

        let (tls_var, disable_tls) = var("DISABLE_TLS", "false");
        let disable_tls = parse_bool(&disable_tls).ok_or(ConfigError::InvalidEnvValue {
            var: tls_var,
            reason: format!("expected a boolean, got {:?}", disable_tls),
        })?;

        let (classifier_var, classifier) = var("CLASSIFIER", "query");
        let classifier = match classifier.to_ascii_lowercase().as_str() {
            "query" => ClassifierPolicy::Query,
            "range" => ClassifierPolicy::Range,
            other => {
                return Err(ConfigError::InvalidEnvValue {
                    var: classifier_var,
                    reason: format!("expected \"query\" or \"range\", got {:?}", other),
                })
            }
        };

        Ok(Self {
            db_path,
            log_level,
            port,
            esi_host,
            structure_hunt_host,
            disable_tls,
            user_agent,
            classifier,
        })
    }

    /// Base URL of the universe API, including the version segment.
    pub fn esi_base_url(&self) -> String {
        format!("{}/latest", self.base_url(&self.esi_host))
    }

    /// Base URL of the structure feed.
    pub fn structure_base_url(&self) -> String {
        self.base_url(&self.structure_hunt_host)
    }

    fn base_url(&self, host: &str) -> String {
        if self.disable_tls {
            format!("http://{}:443", host)
        } else {
            format!("https://{}", host)
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
