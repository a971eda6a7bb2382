use std::time::Duration;

use anyhow::{bail, Result};

use crate::traits_and_structs::host::Rgba;

/// Everything fixed at construction time for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LifeConfig {
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub cell_size: u32,
    /// Gap in pixels between neighbouring cells and around the board edge.
    pub margin: u32,
    /// Pause after every simulation step.
    pub step_delay: Duration,
    /// Newest generations to keep; `None` keeps all of them.
    pub history_limit: Option<usize>,
    pub alive_color: Rgba,
    pub dead_color: Rgba,
    pub background: Rgba,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800,
            viewport_height: 800,
            cell_size: 20,
            margin: 1,
            step_delay: Duration::from_millis(100),
            history_limit: None,
            alive_color: [0xff, 0xff, 0xff, 0xff],
            dead_color: [0x55, 0x55, 0x55, 0xff],
            background: [0, 0, 0, 0xff],
        }
    }
}

impl LifeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.viewport_width == 0 || self.viewport_height == 0 {
            bail!(
                "viewport must not be empty, got {}x{}",
                self.viewport_width,
                self.viewport_height
            );
        }
        if self.cell_size.checked_add(self.margin).unwrap_or(0) == 0 {
            bail!("cell size plus margin must be a positive pixel count");
        }
        if matches!(self.history_limit, Some(limit) if limit < 2) {
            bail!("history limit must keep at least two generations");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = LifeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.step_delay, Duration::from_millis(100));
        assert_ne!(config.alive_color, config.dead_color);
    }

    #[test]
    fn degenerate_geometry_is_rejected() {
        let config = LifeConfig {
            cell_size: 0,
            margin: 0,
            ..LifeConfig::default()
        };
        assert!(config.validate().is_err());

        let config = LifeConfig {
            viewport_height: 0,
            ..LifeConfig::default()
        };
        assert!(config.validate().is_err());

        let config = LifeConfig {
            cell_size: u32::MAX,
            margin: 1,
            ..LifeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn short_history_is_rejected() {
        let config = LifeConfig {
            history_limit: Some(1),
            ..LifeConfig::default()
        };
        assert!(config.validate().is_err());

        let config = LifeConfig {
            history_limit: Some(2),
            ..LifeConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
