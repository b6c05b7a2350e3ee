//! Task list, reminder requests and screen state for the task tracker.

pub mod config;
pub mod error;
pub mod reminder;
pub mod screen;
pub mod store;
pub mod task;

pub use config::{ReminderConfig, TrackerConfig};
pub use error::{ConfigError, ReminderError};
pub use reminder::{NotificationPolicy, PermissionStatus, ReminderRequest};
pub use screen::TrackerScreen;
pub use store::TaskStore;
pub use task::{Minutes, Task, TaskId};
