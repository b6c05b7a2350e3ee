use sauron::{
    html::{attributes::*, *},
    prelude::*,
};
use tracker_shared::{Minutes, PermissionStatus, Task, TaskId, TrackerConfig, TrackerScreen};
use web_sys::window;

mod logging;
mod notify;

const CONFIG_JSON: &str = include_str!("../tracker.json");

#[derive(Debug, Clone)]
pub enum Msg {
    // Entry form
    SetTaskText(String),
    SetDurationText(String),
    AddTask,
    ReminderScheduled(i32),

    // Rows
    ToggleComplete(TaskId),
    EditTime(TaskId),
    Done(TaskId),

    // Duration picker
    ChoosePreset(Minutes),
    ClosePicker,

    PermissionResolved(PermissionStatus),
    Error(String),
}

#[derive(Debug, Clone)]
pub struct Model {
    screen: TrackerScreen,
}

impl Model {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            screen: TrackerScreen::new(config),
        }
    }
}

impl Application for Model {
    type MSG = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        Cmd::new(async {
            match notify::request_permission().await {
                Ok(status) => Msg::PermissionResolved(status),
                Err(e) => Msg::Error(e.to_string()),
            }
        })
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::SetTaskText(task_text) => {
                self.screen.set_task_text(task_text);
                Cmd::none()
            }
            Msg::SetDurationText(duration) => {
                self.screen.set_duration_text(duration);
                Cmd::none()
            }
            Msg::AddTask => match self.screen.submit() {
                Some(_) if self.screen.reminders_blocked() => {
                    tracing::info!("notifications denied, task added without a reminder");
                    Cmd::none()
                }
                Some(request) => Cmd::new(async move {
                    match notify::schedule(request) {
                        Ok(handle) => Msg::ReminderScheduled(handle),
                        Err(e) => Msg::Error(e.to_string()),
                    }
                }),
                None => Cmd::none(),
            },
            Msg::ReminderScheduled(handle) => {
                tracing::info!(handle, "reminder scheduled");
                Cmd::none()
            }
            Msg::ToggleComplete(id) => {
                self.screen.toggle_complete(id);
                Cmd::none()
            }
            Msg::EditTime(id) => {
                self.screen.open_editor(id);
                Cmd::none()
            }
            Msg::Done(id) => {
                self.screen.delete(id);
                Cmd::none()
            }
            Msg::ChoosePreset(minutes) => {
                self.screen.choose_preset(minutes);
                Cmd::none()
            }
            Msg::ClosePicker => {
                self.screen.close_editor();
                Cmd::none()
            }
            Msg::PermissionResolved(status) => {
                if self.screen.permission_resolved(status) {
                    if let Some(window) = window() {
                        if let Err(e) = window.alert_with_message(
                            "Permission Required\n\nPlease enable notifications in settings!",
                        ) {
                            tracing::warn!(error = ?e, "permission alert not shown");
                        }
                    }
                }
                Cmd::none()
            }
            Msg::Error(error) => {
                tracing::error!(%error, "host request failed");
                Cmd::none()
            }
        }
    }

    fn view(&self) -> Node<Msg> {
        div(
            [class("min-h-screen bg-ctp-base text-ctp-text")],
            [
                div(
                    [class("max-w-xl mx-auto px-6 py-8")],
                    [
                        h1([class("text-2xl font-bold text-center mt-8 mb-6")], [text("Task Tracker")]),
                        self.view_entry_form(),
                        self.view_task_list(),
                        self.view_summary(),
                    ],
                ),
                if self.screen.picker_open() {
                    self.view_duration_picker()
                } else {
                    span([], [])
                },
            ],
        )
    }
}

impl Model {
    fn view_summary(&self) -> Node<Msg> {
        let store = self.screen.store();
        p([class("text-xs text-center text-ctp-subtext0 mt-4")], [text(&format!(
            "{} tasks · {} pending · {} completed",
            store.len(),
            store.pending_count(),
            store.completed_count()
        ))])
    }

    fn view_entry_form(&self) -> Node<Msg> {
        div([class("space-y-3 mb-6")], [
            input([
                r#type("text"),
                placeholder("Enter a task"),
                value(self.screen.task_text().to_string()),
                on_input(|event| Msg::SetTaskText(event.value())),
                class("w-full px-3 py-2 bg-ctp-surface0 border border-ctp-surface2 rounded-md text-lg"),
            ], []),
            input([
                r#type("text"),
                placeholder("Enter a duration in minutes"),
                value(self.screen.duration_text().to_string()),
                on_input(|event| Msg::SetDurationText(event.value())),
                class("w-full px-3 py-2 bg-ctp-surface0 border border-ctp-surface2 rounded-md text-lg"),
            ], []),
            button([
                on_click(|_| Msg::AddTask),
                class("w-full bg-ctp-blue hover:bg-ctp-sapphire text-ctp-base font-medium px-6 py-2 rounded-md"),
            ], [text("Add Task")]),
        ])
    }

    fn view_task_list(&self) -> Node<Msg> {
        let tasks = self.screen.store().tasks();
        if tasks.is_empty() {
            return p([class("text-center py-10 text-ctp-subtext0 italic")], [text("No tasks yet.")]);
        }
        div([class("divide-y divide-ctp-surface1")], tasks.iter().map(|task| self.view_task(task)).collect::<Vec<_>>())
    }

    fn view_task(&self, task: &Task) -> Node<Msg> {
        let task_id = task.id;
        div([key(task.id.to_string()), class("flex items-center justify-between gap-2 p-3")], [
            span([
                on_click(move |_| Msg::ToggleComplete(task_id)),
                class(&format!(
                    "flex-1 text-lg cursor-pointer {}",
                    if task.completed { "line-through text-ctp-overlay1" } else { "text-ctp-text" }
                )),
            ], [text(&format!("{} - {}", task.text, task.duration.label()))]),
            button([
                on_click(move |_| Msg::EditTime(task_id)),
                class("bg-ctp-blue/20 text-ctp-blue hover:bg-ctp-blue/30 px-3 py-1 rounded-md text-sm"),
            ], [text("Edit Time")]),
            button([
                on_click(move |_| Msg::Done(task_id)),
                class("bg-ctp-red/20 text-ctp-red hover:bg-ctp-red/30 px-3 py-1 rounded-md text-sm"),
            ], [text("Done")]),
        ])
    }

    fn view_duration_picker(&self) -> Node<Msg> {
        div([class("fixed inset-0 flex items-center justify-center bg-black/50")], [
            div([class("w-72 p-5 bg-ctp-surface0 rounded-lg text-center")], [
                h2([class("text-xl font-bold mb-3")], [text("Select Duration")]),
                div(
                    [class("flex flex-col")],
                    self.screen.presets().iter().map(|&minutes| {
                        button([
                            on_click(move |_| Msg::ChoosePreset(minutes)),
                            class("text-lg p-2 hover:bg-ctp-surface1 rounded-md"),
                        ], [text(&minutes.to_string())])
                    }).collect::<Vec<_>>(),
                ),
                button([
                    on_click(|_| Msg::ClosePicker),
                    class("mt-4 bg-ctp-overlay0 hover:bg-ctp-overlay1 px-4 py-2 rounded-md"),
                ], [text("Close")]),
            ]),
        ])
    }
}

fn load_config() -> TrackerConfig {
    match TrackerConfig::from_json(CONFIG_JSON) {
        Ok(config) => {
            logging::init(&config.log_filter);
            config
        }
        Err(e) => {
            let config = TrackerConfig::default();
            logging::init(&config.log_filter);
            tracing::warn!(error = %e, "bundled config rejected, using defaults");
            config
        }
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let config = load_config();
    config.notifications.install();
    tracing::info!(presets = ?config.presets, "task tracker starting");
    Program::mount_to_body(Model::new(&config));
}
