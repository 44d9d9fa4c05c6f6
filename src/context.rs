//! Application Context
//!
//! Shared signals provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Transient alert banner message - read
    pub alert: ReadSignal<Option<String>>,
    set_alert: WriteSignal<Option<String>>,
    /// Guard so a stale dismiss timer cannot clear a newer alert
    alert_seq: StoredValue<u32>,
    /// Trigger to reload requests from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new() -> Self {
        let (alert, set_alert) = signal(None);
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            alert,
            set_alert,
            alert_seq: StoredValue::new(0),
            reload_trigger,
            set_reload_trigger,
        }
    }

    /// Trigger a full reload of requests
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show a transient alert that auto-dismisses after `duration_ms`
    pub fn show_alert(&self, message: impl Into<String>, duration_ms: u32) {
        let seq = self.alert_seq.with_value(|s| s + 1);
        self.alert_seq.set_value(seq);
        self.set_alert.set(Some(message.into()));

        let set_alert = self.set_alert;
        let alert_seq = self.alert_seq;
        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            if alert_seq.get_value() == seq {
                set_alert.set(None);
            }
        });
    }
}
