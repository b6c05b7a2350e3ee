//! State behind the single tracker screen: the task list, the entry form,
//! and the duration picker.

use crate::config::{ReminderConfig, TrackerConfig};
use crate::reminder::{PermissionStatus, ReminderRequest};
use crate::store::TaskStore;
use crate::task::{Minutes, TaskId};

#[derive(Debug, Clone, Default)]
pub struct TrackerScreen {
    store: TaskStore,
    task_text: String,
    /// Duration field exactly as typed; `duration` is its parsed value.
    duration_input: String,
    duration: Option<Minutes>,
    /// Task bound to the duration picker. One slot for the whole screen.
    editing: Option<TaskId>,
    picker_open: bool,
    permission: PermissionStatus,
    presets: Vec<Minutes>,
    reminder: ReminderConfig,
}

impl TrackerScreen {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            presets: config.preset_minutes(),
            reminder: config.reminder.clone(),
            ..Self::default()
        }
    }

    pub fn set_task_text(&mut self, text: String) {
        self.task_text = text;
    }

    pub fn set_duration_text(&mut self, text: String) {
        self.duration = Minutes::parse_input(&text);
        self.duration_input = text;
    }

    /// Adds the entered task. On success the form is cleared and the
    /// reminder for the new task is returned for scheduling.
    pub fn submit(&mut self) -> Option<ReminderRequest> {
        let task = self.store.add(&self.task_text, self.duration)?;
        let request = ReminderRequest::for_task(task, &self.reminder);
        self.task_text.clear();
        self.duration_input.clear();
        self.duration = None;
        Some(request)
    }

    /// Binds the picker to `id` and shows it, replacing any earlier target.
    pub fn open_editor(&mut self, id: TaskId) {
        if let Some(previous) = self.editing.filter(|previous| *previous != id) {
            tracing::debug!(%previous, %id, "duration picker retargeted");
        }
        self.editing = Some(id);
        self.picker_open = true;
    }

    pub fn choose_preset(&mut self, choice: Minutes) {
        if let Some(id) = self.editing {
            self.store.update_duration(id, choice);
        }
        self.close_editor();
    }

    pub fn close_editor(&mut self) {
        self.editing = None;
        self.picker_open = false;
    }

    pub fn toggle_complete(&mut self, id: TaskId) {
        self.store.toggle_complete(id);
    }

    /// The "Done" action: removes the task outright.
    pub fn delete(&mut self, id: TaskId) {
        self.store.delete(id);
    }

    /// Records the permission answer. Returns `true` when the user should be
    /// told that reminders will not be delivered.
    pub fn permission_resolved(&mut self, status: PermissionStatus) -> bool {
        self.permission = status;
        if status == PermissionStatus::Denied {
            tracing::warn!("notification permission denied; reminders will not be shown");
            true
        } else {
            false
        }
    }

    /// Whether the host has refused notifications. Tasks are still created,
    /// only their reminders are skipped.
    pub fn reminders_blocked(&self) -> bool {
        self.permission == PermissionStatus::Denied
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn task_text(&self) -> &str {
        &self.task_text
    }

    pub fn duration_text(&self) -> &str {
        &self.duration_input
    }

    pub fn duration(&self) -> Option<Minutes> {
        self.duration
    }

    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    pub fn picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn presets(&self) -> &[Minutes] {
        &self.presets
    }

    pub fn permission(&self) -> PermissionStatus {
        self.permission
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> TrackerScreen {
        TrackerScreen::new(&TrackerConfig::default())
    }

    fn add(screen: &mut TrackerScreen, text: &str, minutes: &str) -> TaskId {
        screen.set_task_text(text.to_string());
        screen.set_duration_text(minutes.to_string());
        screen.submit().expect("task should be accepted");
        screen.store().tasks().last().unwrap().id
    }

    #[test]
    fn submit_clears_form_and_returns_reminder() {
        let mut screen = screen();
        screen.set_task_text("Stretch".to_string());
        screen.set_duration_text("15".to_string());
        let request = screen.submit().unwrap();

        assert_eq!(request.body, "Task \"Stretch\" is due now!");
        assert_eq!(request.delay.as_secs(), 900);
        assert_eq!(screen.task_text(), "");
        assert_eq!(screen.duration_text(), "");
        assert_eq!(screen.store().len(), 1);
    }

    #[test]
    fn rejected_submit_keeps_form() {
        let mut screen = screen();
        screen.set_task_text("Stretch".to_string());
        screen.set_duration_text("soon".to_string());
        assert!(screen.submit().is_none());
        assert_eq!(screen.task_text(), "Stretch");
        assert!(screen.store().is_empty());
    }

    #[test]
    fn duration_field_keeps_typed_text() {
        let mut screen = screen();
        screen.set_duration_text("25 minutes".to_string());
        assert_eq!(screen.duration_text(), "25 minutes");
        assert_eq!(screen.duration(), Some(Minutes(25)));

        screen.set_duration_text("x".to_string());
        assert_eq!(screen.duration_text(), "x");
        assert_eq!(screen.duration(), None);

        screen.set_duration_text(String::new());
        assert_eq!(screen.duration_text(), "");
        assert_eq!(screen.duration(), None);
    }

    #[test]
    fn opening_second_editor_retargets() {
        let mut screen = screen();
        let first = add(&mut screen, "first", "10");
        let second = add(&mut screen, "second", "10");

        screen.open_editor(first);
        screen.open_editor(second);
        assert_eq!(screen.editing(), Some(second));

        screen.choose_preset(Minutes(45));
        assert_eq!(screen.store().get(first).unwrap().duration, Minutes(10));
        assert_eq!(screen.store().get(second).unwrap().duration, Minutes(45));
        assert!(!screen.picker_open());
        assert_eq!(screen.editing(), None);
    }

    #[test]
    fn close_dismisses_without_change() {
        let mut screen = screen();
        let id = add(&mut screen, "task", "10");
        screen.open_editor(id);
        assert!(screen.picker_open());
        screen.close_editor();
        assert!(!screen.picker_open());
        assert_eq!(screen.editing(), None);
        assert_eq!(screen.store().get(id).unwrap().duration, Minutes(10));
    }

    #[test]
    fn preset_without_target_only_closes() {
        let mut screen = screen();
        let id = add(&mut screen, "task", "10");
        screen.choose_preset(Minutes(60));
        assert_eq!(screen.store().get(id).unwrap().duration, Minutes(10));
        assert!(!screen.picker_open());
    }

    #[test]
    fn preset_for_deleted_target_is_ignored() {
        let mut screen = screen();
        let id = add(&mut screen, "task", "10");
        screen.open_editor(id);
        screen.delete(id);
        screen.choose_preset(Minutes(60));
        assert!(screen.store().is_empty());
        assert!(!screen.picker_open());
    }

    #[test]
    fn only_denial_warns() {
        let mut screen = screen();
        assert!(!screen.permission_resolved(PermissionStatus::Granted));
        assert!(!screen.permission_resolved(PermissionStatus::Undetermined));
        assert!(screen.permission_resolved(PermissionStatus::Denied));
        assert_eq!(screen.permission(), PermissionStatus::Denied);
    }

    #[test]
    fn only_denial_blocks_reminders() {
        let mut screen = screen();
        assert!(!screen.reminders_blocked());
        screen.permission_resolved(PermissionStatus::Granted);
        assert!(!screen.reminders_blocked());
        screen.permission_resolved(PermissionStatus::Denied);
        assert!(screen.reminders_blocked());
    }

    #[test]
    fn presets_come_from_config() {
        let config = TrackerConfig {
            presets: vec![5, 90],
            ..TrackerConfig::default()
        };
        let screen = TrackerScreen::new(&config);
        assert_eq!(screen.presets(), &[Minutes(5), Minutes(90)]);
    }
}
