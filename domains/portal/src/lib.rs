//! Portal domain: accounts of the consumer app and the attraction gallery
//! it browses

pub mod app_user;
pub mod gallery;

pub use app_user::{AppUserClient, AppUserQuery, AppUserRecord, AppUserTransition, AppUsers};
pub use gallery::{
    AttractionGalleryClient, AttractionGalleryItem, AttractionGalleryQuery, GalleryLocation,
    GALLERY_QUERY_PATH,
};
