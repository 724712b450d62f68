use crate::shared::Locale;
use chrono_tz::Tz;
use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    /// Root of the backend REST API, e.g. `https://api.example.com/api`
    pub api_base_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub default_locale: Locale,
    pub business_timezone: Tz,
    pub whatsapp_number: Option<String>,
    pub api_timeout: Option<Duration>,
    pub booking_rate_limit_per_hour: u32,
    pub otel_exporter_endpoint: Option<String>,
    pub service_name: String,
    pub metrics_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 3000,
            default_locale: Locale::En,
            business_timezone: Tz::UTC,
            whatsapp_number: None,
            api_timeout: None,
            booking_rate_limit_per_hour: 5,
            otel_exporter_endpoint: None,
            service_name: "rentadrive".to_string(),
            metrics_port: 9000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base_url = get("API_BASE_URL")
            .or_else(|| get("NEXT_PUBLIC_API_URL"))
            .unwrap_or(defaults.api_base_url);
        reqwest::Url::parse(&api_base_url)
            .map_err(|_| ConfigError::InvalidApiUrl(api_base_url.clone()))?;

        let server_host = get("SERVER_HOST").unwrap_or(defaults.server_host);

        let server_port = match get("SERVER_PORT") {
            Some(port) => port.parse().map_err(|_| ConfigError::InvalidPort)?,
            None => defaults.server_port,
        };

        let default_locale = match get("DEFAULT_LOCALE") {
            Some(locale) => locale
                .parse()
                .map_err(|_| ConfigError::InvalidLocale(locale))?,
            None => defaults.default_locale,
        };

        let business_timezone = match get("BUSINESS_TIMEZONE") {
            Some(tz) => tz
                .parse::<Tz>()
                .map_err(|_| ConfigError::InvalidTimezone(tz))?,
            None => defaults.business_timezone,
        };

        let whatsapp_number = get("WHATSAPP_NUMBER");

        // 0 disables the timeout
        let api_timeout = match get("API_TIMEOUT_SECS") {
            Some(secs) => Some(parse_number::<u64>("API_TIMEOUT_SECS", secs)?)
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            None => defaults.api_timeout,
        };

        let booking_rate_limit_per_hour = match get("BOOKING_RATE_LIMIT_PER_HOUR") {
            Some(limit) => parse_number("BOOKING_RATE_LIMIT_PER_HOUR", limit)?,
            None => defaults.booking_rate_limit_per_hour,
        };

        let otel_exporter_endpoint = get("OTEL_EXPORTER_OTLP_ENDPOINT");

        let service_name = get("SERVICE_NAME").unwrap_or(defaults.service_name);

        let metrics_port = match get("METRICS_PORT") {
            Some(port) => port.parse().map_err(|_| ConfigError::InvalidPort)?,
            None => defaults.metrics_port,
        };

        Ok(Config {
            api_base_url,
            server_host,
            server_port,
            default_locale,
            business_timezone,
            whatsapp_number,
            api_timeout,
            booking_rate_limit_per_hour,
            otel_exporter_endpoint,
            service_name,
            metrics_port,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    match value.trim().parse() {
        Ok(number) => Ok(number),
        Err(_) => Err(ConfigError::InvalidNumber { key, value }),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid API base URL: {0}")]
    InvalidApiUrl(String),

    #[error("Unsupported locale: {0} (expected en or fr)")]
    InvalidLocale(String),

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}
