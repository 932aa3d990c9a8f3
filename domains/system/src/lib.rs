//! System domain: navigation menus and back-office users

pub mod menu;
pub mod sys_user;

pub use menu::{
    MenuMeta, SysMenuCatalog, SysMenuClient, SysMenuQuery, SysMenuRecord, SysMenuSaveRequest,
    SysMenus, ALL_MENUS_PAGE_SIZE,
};
pub use sys_user::{
    SysUserClient, SysUserLifecycle, SysUserQuery, SysUserRecord, SysUserSaveRequest,
    SysUserTransition, SysUsers,
};
