//! Browser side of reminders: the permission prompt, a one-shot timer per
//! reminder, and the notification shown when it fires.

use tracker_shared::{NotificationPolicy, PermissionStatus, ReminderError, ReminderRequest};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Notification, NotificationOptions, NotificationPermission};

pub async fn request_permission() -> Result<PermissionStatus, ReminderError> {
    let promise = Notification::request_permission().map_err(host_error)?;
    let answer = JsFuture::from(promise).await.map_err(host_error)?;
    Ok(PermissionStatus::parse(
        &answer.as_string().unwrap_or_default(),
    ))
}

/// Arms a timer for `request` and returns the host timer handle. The handle
/// is informational only; reminders are never cancelled.
pub fn schedule(request: ReminderRequest) -> Result<i32, ReminderError> {
    let timeout = request.timeout_millis()?;
    let window = window().ok_or_else(|| ReminderError::Host("no window".to_string()))?;
    let fire = Closure::once_into_js(move || deliver(&request));
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(fire.unchecked_ref(), timeout)
        .map_err(host_error)
}

fn deliver(request: &ReminderRequest) {
    if let Err(err) = present(request, &NotificationPolicy::current()) {
        tracing::warn!(error = %err, title = %request.title, "reminder not shown");
    }
}

fn present(request: &ReminderRequest, policy: &NotificationPolicy) -> Result<(), ReminderError> {
    if policy.show_alert {
        if Notification::permission() != NotificationPermission::Granted {
            return Err(ReminderError::Host(
                "notification permission not granted".to_string(),
            ));
        }
        let options = NotificationOptions::new();
        options.set_body(&request.body);
        Notification::new_with_options(&request.title, &options).map_err(host_error)?;
    }
    if request.audible(policy) {
        vibrate(&request.vibration)?;
    }
    tracing::info!(body = %request.body, "reminder delivered");
    Ok(())
}

fn vibrate(pattern: &[u32]) -> Result<(), ReminderError> {
    let window = window().ok_or_else(|| ReminderError::Host("no window".to_string()))?;
    let pattern =
        serde_wasm_bindgen::to_value(pattern).map_err(|e| ReminderError::Host(e.to_string()))?;
    // Browsers without the Vibration API return false; nothing else to do.
    window.navigator().vibrate_with_pattern(&pattern);
    Ok(())
}

fn host_error(value: JsValue) -> ReminderError {
    ReminderError::Host(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}
