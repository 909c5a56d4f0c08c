use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono_tz::Tz;

/// Default queue that receives resolved incidents
pub const DEFAULT_CLOSING_MAILBOX: &str = "GR_SAL_COMP_CIERRE";

/// Identity recorded on history entries produced by this service
pub const DEFAULT_SYSTEM_AUTHOR: &str = "Sistema Automático";

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// Base URL advertised in attachment metadata
    pub public_base_url: String,
    /// Directory served under /api/adjuntos
    pub attachments_dir: PathBuf,
    /// Timezone used to render history timestamps
    pub timezone: Tz,
    pub system_author: String,
    pub closing_mailbox: String,
    /// Reject transitions on incidents that are already resolved
    pub resolved_is_terminal: bool,
    pub incidents_fixtures: Option<PathBuf>,
    pub closed_incidents_fixtures: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let port = env::var("INCIDENTS_PORT")
            .or_else(|_| env::var("PORT"))
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let timezone = match env::var("TIMEZONE") {
            Ok(name) => parse_timezone(&name)?,
            Err(_) => chrono_tz::Europe::Madrid,
        };

        Ok(Self {
            port,
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| format!("http://localhost:{}", port)),
            attachments_dir: env::var("ATTACHMENTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public/adjuntos")),
            timezone,
            system_author: env::var("SYSTEM_AUTHOR")
                .unwrap_or_else(|_| DEFAULT_SYSTEM_AUTHOR.to_string()),
            closing_mailbox: env::var("CLOSING_MAILBOX")
                .unwrap_or_else(|_| DEFAULT_CLOSING_MAILBOX.to_string()),
            resolved_is_terminal: env::var("RESOLVED_IS_TERMINAL")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            incidents_fixtures: env::var("INCIDENTS_FIXTURES").ok().map(PathBuf::from),
            closed_incidents_fixtures: env::var("CLOSED_INCIDENTS_FIXTURES")
                .ok()
                .map(PathBuf::from),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            public_base_url: "http://localhost:3000".to_string(),
            attachments_dir: PathBuf::from("public/adjuntos"),
            timezone: chrono_tz::Europe::Madrid,
            system_author: DEFAULT_SYSTEM_AUTHOR.to_string(),
            closing_mailbox: DEFAULT_CLOSING_MAILBOX.to_string(),
            resolved_is_terminal: false,
            incidents_fixtures: None,
            closed_incidents_fixtures: None,
        }
    }
}

fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|e| anyhow!("Invalid TIMEZONE '{}': {}", name, e))
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_accepts_common_truthy_values() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(parse_flag(" YES "));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn timezone_parses_iana_names() {
        assert_eq!(parse_timezone("Europe/Madrid").unwrap(), chrono_tz::Europe::Madrid);
        assert!(parse_timezone("Mars/Olympus").is_err());
    }

    #[test]
    fn default_config_routes_resolutions_to_closing_queue() {
        let config = Config::default();
        assert_eq!(config.closing_mailbox, "GR_SAL_COMP_CIERRE");
        assert!(!config.resolved_is_terminal);
    }
}
