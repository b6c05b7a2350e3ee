//! Tracker configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::reminder::NotificationPolicy;
use crate::task::Minutes;

/// Top-level configuration for the tracker screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Choices offered by the duration picker, in minutes.
    pub presets: Vec<u32>,
    /// Content of scheduled reminders.
    pub reminder: ReminderConfig,
    /// Presentation policy installed at startup.
    pub notifications: NotificationPolicy,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            presets: vec![15, 30, 45, 60, 120],
            reminder: ReminderConfig::default(),
            notifications: NotificationPolicy::default(),
            log_filter: "info".to_string(),
        }
    }
}

/// Reminder content settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderConfig {
    pub title: String,
    /// `{task}` is replaced with the task text.
    pub body_template: String,
    pub sound: bool,
    /// Vibration pattern in milliseconds.
    pub vibration: Vec<u32>,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            title: "⏰ Alarm!".to_string(),
            body_template: "Task \"{task}\" is due now!".to_string(),
            sound: true,
            vibration: vec![0, 500, 500, 500],
        }
    }
}

impl TrackerConfig {
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.presets.is_empty() {
            return Err(ConfigError::Invalid {
                field: "presets",
                reason: "at least one preset is required".to_string(),
            });
        }
        if self.presets.contains(&0) {
            return Err(ConfigError::Invalid {
                field: "presets",
                reason: "presets must be positive".to_string(),
            });
        }
        if !self.reminder.body_template.contains("{task}") {
            return Err(ConfigError::Invalid {
                field: "reminder.body_template",
                reason: "missing `{task}` placeholder".to_string(),
            });
        }
        Ok(())
    }

    pub fn preset_minutes(&self) -> Vec<Minutes> {
        self.presets.iter().copied().map(Minutes).collect()
    }
}
