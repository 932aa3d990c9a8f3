//! Back-office workflows against the in-memory backend

use chrono::{TimeZone, Utc};
use serde_json::json;
use tourdesk_client::{Page, PageQuery};
use tourdesk_core::{
    AttractionLifecycle, AttractionQuery, AttractionSaveRequest, LocationInfo, PublishStatus,
    RegionActivityLifecycle,
};
use tourdesk_guesthouse::GuesthouseReservationQuery;
use tourdesk_system::{SysMenuCatalog, SysUserLifecycle};

mod common;

use common::mock_office;

fn new_attraction(title: &str) -> AttractionSaveRequest {
    AttractionSaveRequest {
        id: None,
        region_id: 7,
        location_info: LocationInfo {
            lnglat: "120.14,30.23".to_string(),
            ..LocationInfo::default()
        },
        title: title.to_string(),
        location: "West Lake".to_string(),
        extend_content: Default::default(),
        cover_list: vec![],
        description: String::new(),
        publish_status: None,
        enable_status: Some(true),
    }
}

#[test_log::test(tokio::test)]
async fn test_create_assigns_fresh_ids() {
    let (backend, office) = mock_office();
    backend.seed(
        "/open/attraction",
        [json!({"id": 40, "regionId": 7, "title": "Old Bridge", "locationInfo": {"lnglat": ""}})],
    );

    let first = office
        .attractions
        .save_or_update(&new_attraction("Lakeside Pagoda"))
        .await
        .unwrap();
    let second = office
        .attractions
        .save_or_update(&new_attraction("Tea Terraces"))
        .await
        .unwrap();

    assert_eq!(first.id, 41);
    assert_eq!(second.id, 42);
    assert_eq!(backend.records("/open/attraction").len(), 3);

    let sent = backend.recorded_requests();
    assert!(sent[0].body.as_ref().is_some_and(|b| b.get("id").is_none()));
}

#[test_log::test(tokio::test)]
async fn test_publish_lifecycle_round_trip() {
    let (backend, office) = mock_office();
    backend.on_transition("/open/attraction", "publish", "publishStatus", json!("PUBLISH"));
    backend.on_transition("/open/attraction", "unpublish", "publishStatus", json!("PENDING"));

    let created = office
        .attractions
        .save_or_update(&new_attraction("Lakeside Pagoda"))
        .await
        .unwrap();
    assert_eq!(created.publish_status, PublishStatus::Pending);

    office.attractions.publish(created.id).await.unwrap();
    let published = office.attractions.get_by_id(created.id).await.unwrap();
    assert_eq!(published.publish_status, PublishStatus::Publish);

    let query = PageQuery::new(
        Page::default(),
        AttractionQuery {
            publish_status: Some(PublishStatus::Publish),
            ..AttractionQuery::default()
        },
    );
    assert_eq!(office.attractions.list(&query).await.unwrap().total, 1);

    office.attractions.unpublish(created.id).await.unwrap();
    assert_eq!(office.attractions.list(&query).await.unwrap().total, 0);
}

#[test_log::test(tokio::test)]
async fn test_remove_empty_list_is_a_no_op() {
    let (backend, office) = mock_office();
    backend.seed("/open/region", [json!({"id": 1, "name": "West Lake"})]);

    office.regions.remove(&[]).await.unwrap();
    office.attractions.remove(&[]).await.unwrap();

    assert!(backend.recorded_requests().is_empty());
    assert_eq!(backend.deletion_count(), 0);
    assert_eq!(backend.records("/open/region").len(), 1);
}

#[test_log::test(tokio::test)]
async fn test_pages_match_total_over_size() {
    let (backend, office) = mock_office();
    backend.seed(
        "/open/guesthouseReservation",
        (1..=23).map(|id| {
            json!({"id": id, "regionId": 2, "guestsId": 100 + id, "roomId": 5, "realName": "Guest"})
        }),
    );

    for size in [1u64, 5, 10, 23, 50] {
        let query: PageQuery<GuesthouseReservationQuery> = PageQuery::unfiltered(Page::first(size));
        let page = office.reservations.list(&query).await.unwrap();
        assert_eq!(page.total, 23);
        assert_eq!(page.pages, 23u64.div_ceil(size));
        assert!(page.is_consistent());
    }

    let last = PageQuery::<GuesthouseReservationQuery>::unfiltered(Page::new(3, 10));
    let page = office.reservations.list(&last).await.unwrap();
    assert_eq!(page.records.len(), 3);
    assert!(!page.has_next());
}

#[test_log::test(tokio::test)]
async fn test_reservation_date_filter_is_sent_as_rfc3339() {
    let (backend, office) = mock_office();
    let query = PageQuery::new(
        Page::default(),
        GuesthouseReservationQuery {
            gmt_start: Some(Utc.with_ymd_and_hms(2026, 11, 1, 0, 0, 0).unwrap()),
            ..GuesthouseReservationQuery::default()
        },
    );
    office.reservations.list(&query).await.unwrap();

    let sent = backend.recorded_requests();
    assert_eq!(
        sent[0].body.as_ref().map(|b| b["queryBody"].clone()),
        Some(json!({"gmtStart": "2026-11-01T00:00:00Z"}))
    );
}

#[test_log::test(tokio::test)]
async fn test_transition_paths_across_domains() {
    let (backend, office) = mock_office();
    backend.seed("/open/regionActivity", [json!({"id": 3, "title": "Lantern Night"})]);
    backend.seed("/open/sysUser", [json!({"id": 8, "username": "ops"})]);

    office.region_activities.approve(3).await.unwrap();
    office.operators.disable(8).await.unwrap();
    office.menus.all_menus().await.unwrap();

    let sent: Vec<String> = backend
        .recorded_requests()
        .into_iter()
        .map(|r| format!("{} {}", r.method, r.path))
        .collect();
    assert_eq!(
        sent,
        vec![
            "PUT /open/regionActivity/approved/3",
            "PUT /open/sysUser/forbidden/8",
            "POST /open/sysMenu/list",
        ]
    );
}

#[test_log::test(tokio::test)]
async fn test_missing_record_surfaces_not_found() {
    let (_backend, office) = mock_office();
    let err = office.rooms.get_by_id(404).await.unwrap_err();
    assert!(err.is_not_found());
}
