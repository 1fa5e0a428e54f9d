use crate::input::TextField;
use crate::keybinds::Keybinds;
use crate::Config;
use anyhow::Result;
use pdiff_api::{ApiError, CreatedSite, PdiffApi, SiteCredentials};
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::future::Future;
use tokio::sync::mpsc;

mod actions;
mod effects;
mod input;
mod render;
mod state;
mod types;

pub use render::render;
pub use state::{App, SessionState, UploadField, UploadForm, View};
pub use types::AppAsyncEvent;

impl App {
    pub(super) fn report_error(&mut self, context: &str, error: impl std::fmt::Display) {
        let message = format!(
            "{context}: {}",
            Self::redact_secret(&error.to_string(), &self.state.secret)
        );
        self.state.error = Some(message.clone());
        tracing::warn!("{message}");
    }

    pub(super) fn report_api_error(&mut self, context: &str, error: &ApiError) {
        self.report_error(context, format!("{} ({error})", error.user_message()));
    }

    pub(super) fn clear_error(&mut self) {
        self.state.error = None;
    }

    fn redact_secret(input: &str, secret: &str) -> String {
        if secret.is_empty() {
            input.to_string()
        } else {
            input.replace(secret, "[REDACTED]")
        }
    }

    pub(super) fn spawn_app_task<F>(&self, future: F)
    where
        F: Future<Output = AppAsyncEvent> + Send + 'static,
    {
        if let Some(tx) = self.app_async_tx.clone() {
            tokio::spawn(async move {
                let event = future.await;
                let _ = tx.send(event);
            });
        }
    }
}
