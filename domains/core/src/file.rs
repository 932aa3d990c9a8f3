//! File uploads for covers and gallery images

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tourdesk_client::{decode, FileUpload, ProgressFn, Result, Transport};

const UPLOAD_PATH: &str = "/open/files/upload";

/// Stored file as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub file_name: String,
    pub file_url: String,
}

#[derive(Clone)]
pub struct FileClient {
    transport: Arc<dyn Transport>,
}

impl FileClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Upload one file. `on_progress` receives whole percentages that never
    /// decrease and finish at 100 once every byte is sent.
    pub async fn upload(
        &self,
        file: FileUpload,
        on_progress: Option<ProgressFn>,
    ) -> Result<UploadResult> {
        let file_name = file.file_name.clone();
        let result: UploadResult =
            decode(self.transport.upload(UPLOAD_PATH, file, on_progress).await?)?;
        tracing::info!(file_name = %file_name, file_url = %result.file_url, "File uploaded");
        Ok(result)
    }
}
