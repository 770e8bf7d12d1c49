use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Exports
    pub output_dir: String,
    pub export_csv: bool,
    pub export_json: bool,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Config {
            output_dir: env("OUTPUT_DIR", "reports"),
            export_csv: env("EXPORT_CSV", "true").to_lowercase() == "true",
            export_json: env("EXPORT_JSON", "true").to_lowercase() == "true",
            log_level: env("LOG_LEVEL", "INFO"),
        }
    }
}
