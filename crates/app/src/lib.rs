//! Tourdesk back-office composition root
//!
//! Builds every domain client on top of one shared transport.

use std::sync::Arc;

use tourdesk_client::{ClientConfig, Result, Transport, TransportFactory};
use tourdesk_core::{
    AttractionClient, FileClient, RegionActivityClient, RegionClient, SysRoleClient,
    UserInfoClient,
};
use tourdesk_guesthouse::{GuesthouseReservationClient, GuesthouseRoomClient};
use tourdesk_portal::{AppUserClient, AttractionGalleryClient};
use tourdesk_system::{SysMenuClient, SysUserClient};

/// One client per back-office resource, all sharing a transport
#[derive(Clone)]
pub struct Backoffice {
    pub attractions: AttractionClient,
    pub regions: RegionClient,
    pub region_activities: RegionActivityClient,
    pub roles: SysRoleClient,
    pub files: FileClient,
    pub user_info: UserInfoClient,
    pub rooms: GuesthouseRoomClient,
    pub reservations: GuesthouseReservationClient,
    pub menus: SysMenuClient,
    pub operators: SysUserClient,
    pub app_users: AppUserClient,
    pub gallery: AttractionGalleryClient,
}

impl Backoffice {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            attractions: AttractionClient::new(transport.clone()),
            regions: RegionClient::new(transport.clone()),
            region_activities: RegionActivityClient::new(transport.clone()),
            roles: SysRoleClient::new(transport.clone()),
            files: FileClient::new(transport.clone()),
            user_info: UserInfoClient::new(transport.clone()),
            rooms: GuesthouseRoomClient::new(transport.clone()),
            reservations: GuesthouseReservationClient::new(transport.clone()),
            menus: SysMenuClient::new(transport.clone()),
            operators: SysUserClient::new(transport.clone()),
            app_users: AppUserClient::new(transport.clone()),
            gallery: AttractionGalleryClient::new(transport),
        }
    }

    /// Build the back office on the transport selected by `config.provider`
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = TransportFactory::create(config)?;
        Ok(Self::new(transport))
    }
}
