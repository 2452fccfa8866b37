use std::sync::Arc;

use glimpsy_core::model::QuestionSet;
use services::ShareSink;

pub trait UiApp: Send + Sync {
    fn questions(&self) -> QuestionSet;
    fn image_url(&self) -> String;
    fn share_sink(&self) -> Arc<dyn ShareSink>;
}

#[derive(Clone)]
pub struct AppContext {
    questions: QuestionSet,
    image_url: String,
    share_sink: Arc<dyn ShareSink>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            questions: app.questions(),
            image_url: app.image_url(),
            share_sink: app.share_sink(),
        }
    }

    #[must_use]
    pub fn questions(&self) -> QuestionSet {
        self.questions.clone()
    }

    #[must_use]
    pub fn image_url(&self) -> String {
        self.image_url.clone()
    }

    #[must_use]
    pub fn share_sink(&self) -> Arc<dyn ShareSink> {
        Arc::clone(&self.share_sink)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
