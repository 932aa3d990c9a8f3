//! Upload payloads and progress reporting

use std::sync::Arc;

use bytes::Bytes;

/// Callback receiving upload progress as a whole percentage (0-100)
pub type ProgressFn = Arc<dyn Fn(u8) + Send + Sync>;

/// Size of the chunks an upload body is streamed in
pub const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

/// A file to upload as the `file` part of a multipart form
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl FileUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Streaming chunks of the payload; each is a view into the same buffer
    pub fn chunks(&self) -> impl Iterator<Item = Bytes> + Send + 'static {
        let bytes = self.bytes.clone();
        (0..bytes.len())
            .step_by(UPLOAD_CHUNK_SIZE)
            .map(move |start| bytes.slice(start..(start + UPLOAD_CHUNK_SIZE).min(bytes.len())))
    }
}

/// Tracks bytes handed to the transport and reports rounded percentages.
///
/// Reported values never decrease, a value is reported once, and 100 is
/// reported when `loaded == total`. Nothing is reported for an empty payload.
pub struct UploadProgress {
    total: u64,
    loaded: u64,
    last: Option<u8>,
    callback: Option<ProgressFn>,
}

impl UploadProgress {
    pub fn new(total: u64, callback: Option<ProgressFn>) -> Self {
        Self {
            total,
            loaded: 0,
            last: None,
            callback,
        }
    }

    /// Record `bytes` more as sent
    pub fn advance(&mut self, bytes: u64) {
        self.loaded = self.loaded.saturating_add(bytes).min(self.total);
        let Some(percent) = self.percent() else {
            return;
        };
        if self.last.is_some_and(|last| last >= percent) {
            return;
        }
        self.last = Some(percent);
        if let Some(callback) = &self.callback {
            callback(percent);
        }
    }

    /// Current percentage, rounded half up; `None` while the total is unknown
    pub fn percent(&self) -> Option<u8> {
        if self.total == 0 {
            return None;
        }
        let scaled = (self.loaded as u128 * 200 + self.total as u128) / (self.total as u128 * 2);
        Some(scaled.min(100) as u8)
    }

    pub fn loaded(&self) -> u64 {
        self.loaded
    }
}

impl std::fmt::Debug for UploadProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadProgress")
            .field("total", &self.total)
            .field("loaded", &self.loaded)
            .field("last", &self.last)
            .finish()
    }
}
