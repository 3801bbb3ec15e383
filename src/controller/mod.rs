//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! runs the model's transitions and performs the fetches they ask for.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `navigation`: Theme/image/game mode transitions and their fetches
//! - `session`: Saving and resuming backend sessions

mod input;
mod navigation;
mod session;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::model::{AppModel, VocabularyApi};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<AppModel>,
    pub(crate) api: Arc<dyn VocabularyApi>,
    /// Held for a whole save so a second save sees the first one's session id
    save_lock: Arc<Mutex<()>>,
}

impl AppController {
    pub fn new(model: Arc<AppModel>, api: Arc<dyn VocabularyApi>) -> Self {
        Self {
            model,
            api,
            save_lock: Arc::new(Mutex::new(())),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::model::{
        ApiError, ApiResult, Image, SaveSessionRequest, SaveSessionResponse, SessionData, Theme,
        VocabularyApi, VocabularyItem,
    };

    fn unavailable() -> ApiError {
        ApiError::Status {
            status: 500,
            message: "unavailable".to_string(),
        }
    }

    /// In-memory backend; `None` for a resource makes its fetch fail
    #[derive(Default)]
    pub struct FakeApi {
        pub themes: Option<Vec<Theme>>,
        pub images: HashMap<String, Vec<Image>>,
        pub vocabulary: Option<Vec<VocabularyItem>>,
        pub sessions: Mutex<HashMap<String, SessionData>>,
        pub saves: Mutex<Vec<SaveSessionRequest>>,
        pub vocabulary_requests: Mutex<Vec<(String, u32)>>,
        pub fail_saves: bool,
        pub save_delay: Option<Duration>,
    }

    #[async_trait]
    impl VocabularyApi for FakeApi {
        async fn fetch_themes(&self) -> ApiResult<Vec<Theme>> {
            self.themes.clone().ok_or_else(unavailable)
        }

        async fn fetch_images(&self, theme_id: &str) -> ApiResult<Vec<Image>> {
            self.images.get(theme_id).cloned().ok_or_else(unavailable)
        }

        async fn fetch_vocabulary(&self, theme_id: &str, count: u32) -> ApiResult<Vec<VocabularyItem>> {
            self.vocabulary_requests
                .lock()
                .unwrap()
                .push((theme_id.to_string(), count));
            self.vocabulary.clone().ok_or_else(unavailable)
        }

        async fn save_session(&self, request: &SaveSessionRequest) -> ApiResult<SaveSessionResponse> {
            if let Some(delay) = self.save_delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail_saves {
                return Err(unavailable());
            }
            self.saves.lock().unwrap().push(request.clone());
            let session_id = request
                .session_id
                .clone()
                .unwrap_or_else(|| format!("session_{}", self.saves.lock().unwrap().len()));
            Ok(SaveSessionResponse {
                session_id,
                status: "success".to_string(),
            })
        }

        async fn load_session(&self, session_id: &str) -> ApiResult<Option<SessionData>> {
            Ok(self.sessions.lock().unwrap().get(session_id).cloned())
        }
    }
}
