//! Core domain: regions, attractions, region activities, roles, files,
//! and the signed-in user's profile

pub mod attraction;
pub mod file;
pub mod region;
pub mod region_activity;
pub mod sys_role;
pub mod user;

use serde::{Deserialize, Serialize};

// Re-export resource types at the crate root for convenience
pub use attraction::{
    AttractionClient, AttractionLifecycle, AttractionQuery, AttractionRecord,
    AttractionSaveRequest, AttractionTransition, Attractions, LocationInfo,
};
pub use file::{FileClient, UploadResult};
pub use region::{
    ExtendEntry, RegionClient, RegionLevel, RegionLifecycle, RegionQuery, RegionRecord,
    RegionSaveRequest, RegionTransition, Regions,
};
pub use region_activity::{
    RegionActivities, RegionActivityClient, RegionActivityLifecycle, RegionActivityQuery,
    RegionActivityRecord, RegionActivitySaveRequest, RegionActivityTransition,
};
pub use sys_role::{SysRoleClient, SysRoleQuery, SysRoleRecord, SysRoleSaveRequest, SysRoles};
pub use user::{UserInfo, UserInfoClient};

/// Publication state of content shown to app users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum PublishStatus {
    #[default]
    Pending,
    Publish,
}

impl std::fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublishStatus::Pending => write!(f, "PENDING"),
            PublishStatus::Publish => write!(f, "PUBLISH"),
        }
    }
}
