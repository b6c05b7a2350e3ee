use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier assigned to a task when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A task duration in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Minutes(pub u32);

impl Minutes {
    /// Parses the integer prefix of free-form input.
    ///
    /// Leading whitespace and a single `+` are skipped, then digits are read
    /// until the first non-digit. Anything that yields no digits, starts with
    /// `-`, or overflows `u32` is treated as "no duration".
    pub fn parse_input(input: &str) -> Option<Self> {
        let rest = input.trim_start();
        let rest = rest.strip_prefix('+').unwrap_or(rest);
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if end == 0 {
            return None;
        }
        rest[..end].parse().ok().map(Self)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn as_seconds(self) -> u64 {
        u64::from(self.0) * 60
    }

    /// Row label: `"30 min"`, or `"Time’s up!"` once the duration is zero.
    pub fn label(self) -> String {
        if self.0 > 0 {
            format!("{} min", self.0)
        } else {
            "Time’s up!".to_string()
        }
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub duration: Minutes,
    pub completed: bool,
}

impl Task {
    pub fn new(text: String, duration: Minutes) -> Self {
        Self {
            id: TaskId::new(),
            text,
            duration,
            completed: false,
        }
    }
}
