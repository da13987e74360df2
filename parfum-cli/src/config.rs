//! Output configuration

use std::env;
use std::str::FromStr;

/// Rendering format for command output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}' (expected text or json)")),
        }
    }
}

/// Configuration for rendering command output
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,

    /// Print note ids next to their labels
    pub show_ids: bool,

    /// Separator between items of a one-line list
    pub separator: String,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_ids: false,
            separator: ", ".to_string(),
            pretty: true,
        }
    }
}

impl OutputConfig {
    /// JSON output, pretty-printed
    pub fn json() -> Self {
        Self {
            format: OutputFormat::Json,
            ..Default::default()
        }
    }

    /// Text output with note ids
    pub fn verbose() -> Self {
        Self {
            show_ids: true,
            ..Default::default()
        }
    }

    /// Load from `PARFUM_OUTPUT` and `PARFUM_SHOW_IDS`
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load from an arbitrary variable source; unset or invalid values keep
    /// their defaults
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = get("PARFUM_OUTPUT") {
            match raw.parse() {
                Ok(format) => config.format = format,
                Err(e) => tracing::warn!("ignoring PARFUM_OUTPUT: {e}"),
            }
        }

        if let Some(raw) = get("PARFUM_SHOW_IDS") {
            config.show_ids = matches!(raw.trim(), "1" | "true" | "yes");
        }

        config
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
