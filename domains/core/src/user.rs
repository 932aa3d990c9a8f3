//! Profile of the signed-in back-office user

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tourdesk_client::{decode, ApiRequest, Result, Transport};

const USER_INFO_PATH: &str = "/open/sysUser/getUserInfo";

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfo {
    pub user_id: String,
    pub username: String,
    pub real_name: String,
    pub avatar: String,
    pub desc: String,
    /// Route the UI opens after sign-in
    pub home_path: String,
    pub roles: Vec<String>,
}

#[derive(Clone)]
pub struct UserInfoClient {
    transport: Arc<dyn Transport>,
}

impl UserInfoClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn current(&self) -> Result<UserInfo> {
        decode(self.transport.send(ApiRequest::get(USER_INFO_PATH)).await?)
    }
}
