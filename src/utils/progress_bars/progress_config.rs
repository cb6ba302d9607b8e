// src/utils/progress_bars/progress_config.rs

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::env;

const BAR_TEMPLATE: &str = "  🗺️  [{elapsed_precise}] {bar:30.cyan/blue} {pos}/{len} {msg}";
const BAR_CHARS: &str = "█▉▊▋▌▍▎▏  ";

/// Configuration for progress tracking in the dedupe binary
#[derive(Debug, Clone)]
pub struct ProgressConfig {
    /// Whether to show progress bars at all
    pub enabled: bool,
    /// Refresh rate for progress bars in milliseconds
    pub refresh_rate_ms: u64,
    /// Whether to show memory usage in progress messages
    pub show_memory: bool,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            refresh_rate_ms: 100,
            show_memory: true,
        }
    }
}

impl ProgressConfig {
    /// Create progress configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            enabled: env::var("PROGRESS_ENABLED")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
            refresh_rate_ms: env::var("PROGRESS_REFRESH_RATE_MS")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .unwrap_or(100),
            show_memory: env::var("PROGRESS_SHOW_MEMORY")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
        }
    }

    /// Create a styled bar over `total` items, or None when progress is disabled.
    pub fn create_bar(&self, total: u64, message: &str) -> Option<ProgressBar> {
        if !self.enabled {
            return None;
        }
        let refresh_hz = (1000 / self.refresh_rate_ms.max(1)).clamp(1, 60) as u8;
        let style = ProgressStyle::default_bar()
            .template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars(BAR_CHARS);
        let pb = ProgressBar::with_draw_target(
            Some(total),
            ProgressDrawTarget::stderr_with_hz(refresh_hz),
        );
        pb.set_style(style);
        pb.set_message(message.to_string());
        Some(pb)
    }

    /// Check if memory usage should be shown
    pub fn should_show_memory(&self) -> bool {
        self.enabled && self.show_memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_config() {
        let config = ProgressConfig::default();
        assert!(config.enabled);
        assert_eq!(config.refresh_rate_ms, 100);
        assert!(config.show_memory);
    }

    #[test]
    fn test_env_config() {
        env::set_var("PROGRESS_ENABLED", "false");
        env::set_var("PROGRESS_REFRESH_RATE_MS", "50");
        env::set_var("PROGRESS_SHOW_MEMORY", "not-a-bool");

        let config = ProgressConfig::from_env();
        assert!(!config.enabled);
        assert_eq!(config.refresh_rate_ms, 50);
        // Unparseable values fall back to the default
        assert!(config.show_memory);

        env::remove_var("PROGRESS_ENABLED");
        env::remove_var("PROGRESS_REFRESH_RATE_MS");
        env::remove_var("PROGRESS_SHOW_MEMORY");
    }

    #[test]
    fn test_bar_creation() {
        let mut config = ProgressConfig::default();
        let pb = config.create_bar(10, "Evaluating pairs...");
        assert_eq!(pb.and_then(|pb| pb.length()), Some(10));

        config.enabled = false;
        assert!(config.create_bar(10, "Evaluating pairs...").is_none());
    }

    #[test]
    fn test_should_show_memory() {
        let mut config = ProgressConfig::default();
        assert!(config.should_show_memory());
        config.show_memory = false;
        assert!(!config.should_show_memory());
        config.show_memory = true;
        config.enabled = false;
        assert!(!config.should_show_memory());
    }
}
