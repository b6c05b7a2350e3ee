//! In-memory, insertion-ordered task collection.

use crate::task::{Minutes, Task, TaskId};

/// Tasks for the lifetime of one screen. Nothing here is persisted.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task, or does nothing when the text is blank or the
    /// duration is unset.
    pub fn add(&mut self, text: &str, duration: Option<Minutes>) -> Option<&Task> {
        if text.trim().is_empty() {
            tracing::debug!("ignoring task with blank text");
            return None;
        }
        let Some(duration) = duration else {
            tracing::debug!("ignoring task without a duration");
            return None;
        };

        let mut task = Task::new(text.to_string(), duration);
        while self.get(task.id).is_some() {
            task.id = TaskId::new();
        }
        tracing::info!(id = %task.id, duration = %task.duration, "task added");
        self.tasks.push(task);
        self.tasks.last()
    }

    /// Returns `false` when no task has `id`.
    pub fn update_duration(&mut self, id: TaskId, duration: Minutes) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                tracing::debug!(%id, from = %task.duration, to = %duration, "duration updated");
                task.duration = duration;
                true
            }
            None => {
                tracing::debug!(%id, "update_duration: unknown task");
                false
            }
        }
    }

    /// Returns `false` when no task has `id`.
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                tracing::debug!(%id, completed = task.completed, "completion toggled");
                true
            }
            None => {
                tracing::debug!(%id, "toggle_complete: unknown task");
                false
            }
        }
    }

    /// Removes and returns the task, keeping the order of the rest.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id);
        match index {
            Some(index) => {
                tracing::debug!(%id, "task deleted");
                Some(self.tasks.remove(index))
            }
            None => {
                tracing::debug!(%id, "delete: unknown task");
                None
            }
        }
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn pending_count(&self) -> usize {
        self.len() - self.completed_count()
    }
}
