use std::env;
use std::path::PathBuf;

const DEFAULT_MODEL_PATH: &str = "churn_model.json";

#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Path to the trained model artifact (JSON).
    pub model_path: PathBuf,
    /// Emit logs as JSON instead of human-readable lines.
    pub log_json: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            log_json: false,
        }
    }
}

impl AnalyzerConfig {
    pub fn load() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        if let Some(v) = env_non_empty("CHURN_MODEL_PATH") {
            self.model_path = PathBuf::from(v);
        }
        if let Some(v) = env_non_empty("CHURN_LOG_JSON") {
            if let Some(parsed) = parse_bool(&v) {
                self.log_json = parsed;
            }
        }
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
