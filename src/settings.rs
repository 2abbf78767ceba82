use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default share (percent) below which a category is merged into "Other"
pub const DEFAULT_OTHER_THRESHOLD_PERCENT: f64 = 10.0;

/// Default trailing window for the "this year" pie chart
pub const DEFAULT_RECENCY_MONTHS: u32 = 12;

/// Dashboard tunables, read from an optional TOML file
///
/// ```toml
/// other_threshold_percent = 5.0
/// recency_months = 6
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    pub other_threshold_percent: f64,
    pub recency_months: u32,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            other_threshold_percent: DEFAULT_OTHER_THRESHOLD_PERCENT,
            recency_months: DEFAULT_RECENCY_MONTHS,
        }
    }
}

impl DashboardSettings {
    /// Load settings from `path`; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings: DashboardSettings = toml::from_str(&content)
            .with_context(|| format!("invalid settings file {}", path.display()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that make the dashboard meaningless
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.other_threshold_percent) {
            bail!(
                "other_threshold_percent must be between 0 and 100, got {}",
                self.other_threshold_percent
            );
        }
        if self.recency_months == 0 {
            bail!("recency_months must be at least 1");
        }
        Ok(())
    }
}
