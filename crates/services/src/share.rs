use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ShareError;

/// Surface the finished game's share text is placed on (usually a clipboard).
#[async_trait(?Send)]
pub trait ShareSink: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ShareError>;
}

/// Keeps the last shared text in memory. Used by headless runs and tests.
#[derive(Debug, Default)]
pub struct MemoryShareSink {
    last: Mutex<Option<String>>,
    fail_with: Option<ShareError>,
}

impl MemoryShareSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every write fails with `err`.
    #[must_use]
    pub fn failing(err: ShareError) -> Self {
        Self {
            last: Mutex::new(None),
            fail_with: Some(err),
        }
    }

    #[must_use]
    pub fn last_text(&self) -> Option<String> {
        self.last.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait(?Send)]
impl ShareSink for MemoryShareSink {
    async fn write_text(&self, text: &str) -> Result<(), ShareError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        let mut guard = self.last.lock().map_err(|_| ShareError::Unavailable)?;
        *guard = Some(text.to_owned());
        Ok(())
    }
}
