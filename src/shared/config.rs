//! Application configuration. Minutes tree location, semester override.

use serde::Deserialize;

/// Default location of the minutes tree when nothing is configured.
pub const DEFAULT_MINUTES_ROOT: &str = "./minutes";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Root of the minutes tree (semester directories live directly under
    /// it). Read from BOD_MINUTES_MINUTES_ROOT.
    #[serde(default)]
    pub minutes_root: Option<String>,

    /// Semester to operate on instead of the date-derived current one.
    /// Read from BOD_MINUTES_SEMESTER.
    #[serde(default)]
    pub semester: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("BOD_MINUTES"));
        if let Ok(path) = std::env::var("BOD_MINUTES_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the minutes tree root. Defaults to DEFAULT_MINUTES_ROOT if unset.
    pub fn minutes_root_or_default(&self) -> String {
        self.minutes_root
            .clone()
            .unwrap_or_else(|| DEFAULT_MINUTES_ROOT.to_string())
    }
}
