//! Requests handed to the host's local-notification facility.
//!
//! A reminder is scheduled once, when its task is created, and is never
//! tracked afterwards: editing or deleting the task leaves an already
//! scheduled reminder in place.

use std::sync::OnceLock;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::ReminderConfig;
use crate::error::ReminderError;
use crate::task::Task;

/// A one-shot, non-repeating alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderRequest {
    pub title: String,
    pub body: String,
    pub delay: Duration,
    pub sound: bool,
    /// Alternating wait/vibrate durations in milliseconds.
    pub vibration: Vec<u32>,
    pub repeats: bool,
}

impl ReminderRequest {
    pub fn for_task(task: &Task, config: &ReminderConfig) -> Self {
        Self {
            title: config.title.clone(),
            body: config.body_template.replace("{task}", &task.text),
            delay: Duration::from_secs(task.duration.as_seconds()),
            sound: config.sound,
            vibration: config.vibration.clone(),
            repeats: false,
        }
    }

    /// The delay as a browser timer argument.
    pub fn timeout_millis(&self) -> Result<i32, ReminderError> {
        i32::try_from(self.delay.as_millis()).map_err(|_| ReminderError::DelayOutOfRange {
            seconds: self.delay.as_secs(),
        })
    }

    /// Whether the alert should be accompanied by sound and vibration.
    pub fn audible(&self, policy: &NotificationPolicy) -> bool {
        self.sound && policy.play_sound
    }
}

/// Host answer to the notification permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionStatus {
    Granted,
    Denied,
    #[default]
    Undetermined,
}

impl PermissionStatus {
    /// Maps the host's permission string. Unknown values count as undetermined.
    pub fn parse(value: &str) -> Self {
        match value {
            "granted" => Self::Granted,
            "denied" => Self::Denied,
            _ => Self::Undetermined,
        }
    }

    pub fn is_granted(self) -> bool {
        self == Self::Granted
    }
}

static POLICY: OnceLock<NotificationPolicy> = OnceLock::new();

/// How delivered reminders are presented, fixed once per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationPolicy {
    pub show_alert: bool,
    pub play_sound: bool,
}

impl Default for NotificationPolicy {
    fn default() -> Self {
        Self {
            show_alert: true,
            play_sound: true,
        }
    }
}

impl NotificationPolicy {
    /// Installs the process-wide policy. The first call wins; repeating it
    /// is harmless.
    pub fn install(self) -> NotificationPolicy {
        let mut fresh = false;
        let installed = *POLICY.get_or_init(|| {
            fresh = true;
            self
        });
        if fresh {
            tracing::debug!(?installed, "notification policy installed");
        } else if installed != self {
            tracing::warn!(?installed, requested = ?self, "notification policy already installed");
        }
        installed
    }

    pub fn current() -> NotificationPolicy {
        POLICY.get().copied().unwrap_or_default()
    }
}
