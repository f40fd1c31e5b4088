use std::time::Duration;

/// Debounce delay for async field checks when `VALIDATION_DEBOUNCE_MS` is unset
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Parse an on/off environment value (`1`, `true`, `yes`, `y`, `on` and their
/// negatives, case-insensitive)
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "no" | "n" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Console configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | (unset) | daily rolling log file directory |
/// | LOG_FORMAT | text | `json` for JSON lines |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | VALIDATION_DEBOUNCE_MS | 300 | debounce delay for async checks |
/// | ASSUME_YES | false | answer every confirmation with "예" |
///
/// # Example
///
/// ```ignore
/// LOG_LEVEL=debug ASSUME_YES=true seller-console draft.json
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    /// Log files are written here when set and the directory exists
    pub log_dir: Option<String>,
    pub log_json: bool,
    pub environment: String,
    pub validation_debounce_ms: u64,
    pub assume_yes: bool,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|dir| !dir.is_empty()),
            log_json: std::env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            validation_debounce_ms: std::env::var("VALIDATION_DEBOUNCE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DEBOUNCE_MS),
            assume_yes: std::env::var("ASSUME_YES")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.validation_debounce_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
