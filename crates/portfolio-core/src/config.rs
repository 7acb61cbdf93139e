use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::view_state::Phase;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PortfolioConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Timing and offset of the content panel's fade transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub enter_ms: u64,
    pub exit_ms: u64,
    pub offset_px: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            enter_ms: 400,
            exit_ms: 300,
            offset_px: 20,
        }
    }
}

impl MotionConfig {
    /// How long `phase` runs before it completes. `Visible` never completes.
    pub fn duration(&self, phase: Phase) -> Option<Duration> {
        match phase {
            Phase::Entering => Some(Duration::from_millis(self.enter_ms)),
            Phase::Exiting { .. } => Some(Duration::from_millis(self.exit_ms)),
            Phase::Visible => None,
        }
    }

    /// CSS custom properties read by the `tab-enter` / `tab-exit` keyframes.
    pub fn css_vars(&self) -> String {
        format!(
            "--tab-enter-ms: {}ms; --tab-exit-ms: {}ms; --tab-offset: {}px;",
            self.enter_ms, self.exit_ms, self.offset_px
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `portfolio_web=debug`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortfolioError;
    use crate::tab::ActiveTab;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = PortfolioConfig::from_json("{}").unwrap();
        assert_eq!(config, PortfolioConfig::default());
        assert_eq!(config.motion.enter_ms, 400);
        assert_eq!(config.motion.exit_ms, 300);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_override() {
        let config =
            PortfolioConfig::from_json(r#"{ "motion": { "exit_ms": 150 }, "logging": { "level": "debug" } }"#)
                .unwrap();
        assert_eq!(config.motion.exit_ms, 150);
        assert_eq!(config.motion.enter_ms, 400);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_malformed_is_config_error() {
        let err = PortfolioConfig::from_json("{ motion: ").unwrap_err();
        assert!(matches!(err, PortfolioError::Config(_)));
    }

    #[test]
    fn test_durations_per_phase() {
        let motion = MotionConfig::default();
        assert_eq!(motion.duration(Phase::Entering), Some(Duration::from_millis(400)));
        assert_eq!(
            motion.duration(Phase::Exiting { next: ActiveTab::Skills }),
            Some(Duration::from_millis(300))
        );
        assert_eq!(motion.duration(Phase::Visible), None);
    }

    #[test]
    fn test_css_vars() {
        assert_eq!(
            MotionConfig::default().css_vars(),
            "--tab-enter-ms: 400ms; --tab-exit-ms: 300ms; --tab-offset: 20px;"
        );
    }
}
