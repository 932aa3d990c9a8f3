// Tourdesk back office - local smoke run against the configured backend

use tracing::{error, info, warn};

use tourdesk_app::Backoffice;
use tourdesk_client::{ClientConfig, PageQuery};
use tourdesk_common::Preferences;
use tourdesk_system::SysMenuCatalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .pretty()
        .init();

    let preferences = Preferences::load();
    info!(app = %preferences.app.name, theme = %preferences.theme.builtin_type, "Starting Tourdesk back office");

    let config = ClientConfig::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;
    info!(?config, "Configuration loaded successfully");

    let office = Backoffice::from_config(config)?;

    match office.user_info.current().await {
        Ok(user) => info!(username = %user.username, roles = ?user.roles, "Signed in"),
        Err(e) => warn!("Could not fetch current user: {}", e),
    }

    let totals = [
        ("attractions", office.attractions.list(&PageQuery::default()).await.map(|p| p.total)),
        ("regions", office.regions.list(&PageQuery::default()).await.map(|p| p.total)),
        (
            "region activities",
            office.region_activities.list(&PageQuery::default()).await.map(|p| p.total),
        ),
        ("roles", office.roles.list(&PageQuery::default()).await.map(|p| p.total)),
        ("rooms", office.rooms.list(&PageQuery::default()).await.map(|p| p.total)),
        (
            "reservations",
            office.reservations.list(&PageQuery::default()).await.map(|p| p.total),
        ),
        ("menus", office.menus.all_menus().await.map(|p| p.total)),
        ("operators", office.operators.list(&PageQuery::default()).await.map(|p| p.total)),
        ("app users", office.app_users.list(&PageQuery::default()).await.map(|p| p.total)),
        ("gallery", office.gallery.query(&PageQuery::default()).await.map(|p| p.total)),
    ];

    let mut failures = 0;
    for (resource, total) in totals {
        match total {
            Ok(total) => info!(resource, total, "Listed first page"),
            Err(e) => {
                failures += 1;
                error!(resource, "Listing failed: {}", e);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} resource listings failed", failures);
    }
    info!("All resources reachable");
    Ok(())
}
