//! Saving and resuming progress on the backend

use crate::model::{ActiveSession, SAVE_FAILED_MESSAGE};
use super::AppController;

impl AppController {
    /// Post the running game's progress.
    ///
    /// The backend ignores progress when it creates a session, so a game
    /// without a session id is saved in two steps: create, then update.
    pub async fn save_progress(&self) {
        let _saving = self.save_lock.lock().await;
        let Some(mut request) = self.model.build_save_request().await else {
            tracing::debug!("Nothing to save outside a game");
            return;
        };

        if request.session_id.is_none() {
            let created = match self.api.save_session(&request).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to create session");
                    self.model.set_error(SAVE_FAILED_MESSAGE).await;
                    return;
                }
            };
            tracing::info!(session_id = %created.session_id, "Session created");
            self.model
                .set_active_session(ActiveSession {
                    session_id: created.session_id.clone(),
                    theme_id: request.theme_id.clone(),
                    image_id: request.image_id.clone(),
                })
                .await;
            request.session_id = Some(created.session_id);
        }

        match self.api.save_session(&request).await {
            Ok(response) => {
                let words = request.progress.len();
                tracing::info!(session_id = %response.session_id, words, "Progress saved");
                let noun = if words == 1 { "word" } else { "words" };
                self.model
                    .set_status_message(format!("Progress saved ({} {})", words, noun))
                    .await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save progress");
                self.model.set_error(SAVE_FAILED_MESSAGE).await;
            }
        }
    }

    /// Load a saved session so a matching game starts from its progress.
    /// Failures are logged; the app starts fresh.
    pub async fn resume_session(&self, session_id: &str) {
        match self.api.load_session(session_id).await {
            Ok(Some(session)) => {
                tracing::info!(
                    session_id,
                    theme_id = %session.theme_id,
                    image_id = %session.image_id,
                    "Resuming saved session"
                );
                self.model
                    .set_status_message(format!(
                        "Resumed session {} (last updated {})",
                        session.session_id,
                        crate::model::format_timestamp(&session.last_updated)
                    ))
                    .await;
                self.model.set_resumed_session(session).await;
            }
            Ok(None) => tracing::warn!(session_id, "Saved session not found"),
            Err(e) => tracing::warn!(session_id, error = %e, "Failed to load saved session"),
        }
    }
}
