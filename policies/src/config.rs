use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// JSON file replacing the built-in recommendation catalog
    pub resolution_catalog: Option<PathBuf>,
    /// JSON file replacing the built-in policy fixtures
    pub policies_fixtures: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: env::var("POLICIES_PORT")
                .or_else(|_| env::var("PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            resolution_catalog: env::var("RESOLUTION_CATALOG").ok().map(PathBuf::from),
            policies_fixtures: env::var("POLICIES_FIXTURES").ok().map(PathBuf::from),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3001,
            resolution_catalog: None,
            policies_fixtures: None,
        }
    }
}
