//! Back-office operator accounts

use serde::{Deserialize, Serialize};
use tourdesk_client::{Lifecycle, Resource, ResourceClient, ResourceDescriptor, Result};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SysUserRecord {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub real_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub role_ids: Vec<i64>,
    /// `normal` or `forbidden`
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gmt_create: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gmt_modified: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SysUserQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SysUserSaveRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub username: String,
    pub real_name: String,
    pub phone: String,
    pub email: String,
    pub avatar: String,
    pub role_ids: Vec<i64>,
    /// Only sent when setting or resetting the password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SysUserTransition {
    Enable,
    Disable,
}

impl Lifecycle for SysUserTransition {
    fn segment(&self) -> &'static str {
        match self {
            SysUserTransition::Enable => "normal",
            SysUserTransition::Disable => "forbidden",
        }
    }
}

pub struct SysUsers;

impl Resource for SysUsers {
    type Record = SysUserRecord;
    type Query = SysUserQuery;
    type SaveRequest = SysUserSaveRequest;
    type Transition = SysUserTransition;

    const DESCRIPTOR: ResourceDescriptor =
        ResourceDescriptor::new("operator", "/open/sysUser").removed_with_post();
}

pub type SysUserClient = ResourceClient<SysUsers>;

#[async_trait::async_trait]
pub trait SysUserLifecycle {
    async fn enable(&self, id: i64) -> Result<()>;
    async fn disable(&self, id: i64) -> Result<()>;
}

#[async_trait::async_trait]
impl SysUserLifecycle for SysUserClient {
    async fn enable(&self, id: i64) -> Result<()> {
        self.transition(SysUserTransition::Enable, id).await
    }

    async fn disable(&self, id: i64) -> Result<()> {
        self.transition(SysUserTransition::Disable, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use tourdesk_client::mock::MockBackend;
    use tourdesk_client::Method;

    #[test]
    fn test_password_omitted_unless_set() {
        let mut request = SysUserSaveRequest {
            id: Some(3),
            username: "ops".to_string(),
            real_name: "Ops Desk".to_string(),
            phone: String::new(),
            email: "ops@example.com".to_string(),
            avatar: String::new(),
            role_ids: vec![2],
            password: None,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("password").is_none());
        assert_eq!(body["roleIds"], json!([2]));

        request.password = Some("s3cret".to_string());
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["password"], "s3cret");
    }

    #[tokio::test]
    async fn test_enable_disable_use_put() {
        let backend = MockBackend::new();
        backend.seed("/open/sysUser", [json!({"id": 8, "username": "ops", "status": "normal"})]);
        backend.on_transition("/open/sysUser", "forbidden", "status", json!("forbidden"));
        backend.on_transition("/open/sysUser", "normal", "status", json!("normal"));
        let client = SysUserClient::new(Arc::new(backend.clone()));

        client.disable(8).await.unwrap();
        assert_eq!(client.get_by_id(8).await.unwrap().status, "forbidden");
        client.enable(8).await.unwrap();
        assert_eq!(client.get_by_id(8).await.unwrap().status, "normal");

        let transitions: Vec<String> = backend
            .recorded_requests()
            .into_iter()
            .filter(|r| r.method == Method::PUT)
            .map(|r| r.path)
            .collect();
        assert_eq!(
            transitions,
            vec!["/open/sysUser/forbidden/8", "/open/sysUser/normal/8"]
        );
    }

    #[tokio::test]
    async fn test_remove_uses_post() {
        let backend = MockBackend::new();
        backend.seed(
            "/open/sysUser",
            [json!({"id": 1, "username": "a"}), json!({"id": 2, "username": "b"})],
        );
        let client = SysUserClient::new(Arc::new(backend.clone()));

        client.remove(&[1, 2]).await.unwrap();

        let sent = backend.recorded_requests();
        assert_eq!(sent[0].method, Method::POST);
        assert_eq!(sent[0].path, "/open/sysUser/remove");
        assert_eq!(sent[0].body, Some(json!([1, 2])));
        assert_eq!(backend.deletion_count(), 2);
    }
}
