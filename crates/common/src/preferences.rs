//! Back-office UI preference overrides
//!
//! Only the settings the back office changes from the UI framework defaults
//! live here. The struct is built once at startup and never mutated.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_APP_NAME: &str = "Tourdesk Admin";

/// Where route and menu access rules come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    Backend,
    Frontend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthPageLayout {
    PanelLeft,
    PanelCenter,
    PanelRight,
}

/// How an expired login is surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginExpiredMode {
    Modal,
    Page,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    Auto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppPreferences {
    pub access_mode: AccessMode,
    pub auth_page_layout: AuthPageLayout,
    #[serde(with = "minutes")]
    pub check_updates_interval: Duration,
    pub dynamic_title: bool,
    pub enable_check_updates: bool,
    pub login_expired_mode: LoginExpiredMode,
    pub name: String,
    pub watermark: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePreferences {
    pub builtin_type: String,
    pub color_primary: String,
    pub mode: ThemeMode,
    pub semi_dark_sidebar: bool,
}

/// Preference overrides for the back-office UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub app: AppPreferences,
    pub theme: ThemePreferences,
}

impl Preferences {
    /// Overrides with the given application name
    pub fn with_app_name(name: impl Into<String>) -> Self {
        Self {
            app: AppPreferences {
                access_mode: AccessMode::Backend,
                auth_page_layout: AuthPageLayout::PanelCenter,
                check_updates_interval: Duration::from_secs(60),
                dynamic_title: true,
                enable_check_updates: true,
                login_expired_mode: LoginExpiredMode::Modal,
                name: name.into(),
                watermark: true,
            },
            theme: ThemePreferences {
                builtin_type: "violet".to_string(),
                color_primary: "hsl(245 82% 67%)".to_string(),
                mode: ThemeMode::Light,
                semi_dark_sidebar: false,
            },
        }
    }

    /// Build the overrides, taking the application name from `TOURDESK_APP_TITLE`
    pub fn load() -> Self {
        let name = env::var("TOURDESK_APP_TITLE")
            .ok()
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
        Self::with_app_name(name)
    }
}

/// Serializes a `Duration` as whole minutes
mod minutes {
    use std::time::Duration;

    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs() / 60)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let minutes = u64::deserialize(deserializer)?;
        let secs = minutes
            .checked_mul(60)
            .ok_or_else(|| D::Error::custom("checkUpdatesInterval out of range"))?;
        Ok(Duration::from_secs(secs))
    }
}
