//! End-to-end scenarios against a wiremock back office over real HTTP

use std::sync::{Arc, Mutex};

use serde_json::json;
use tourdesk_client::{ClientError, FileUpload, Page, PageQuery, ProgressFn};
use tourdesk_core::{AttractionLifecycle, AttractionQuery};
use tourdesk_portal::{AttractionGalleryQuery, GALLERY_QUERY_PATH};
use tourdesk_system::SysMenuCatalog;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

mod common;

use common::{http_office, TEST_TOKEN};

#[test_log::test(tokio::test)]
async fn test_attraction_list_passes_page_result_through() {
    let (server, office) = http_office().await;
    let page = json!({
        "records": [{
            "id": 42,
            "regionId": 7,
            "regionName": "West Lake",
            "locationInfo": {"lnglat": "120.14,30.23", "zoom": 12},
            "title": "Lakeside Pagoda",
            "publishStatus": "PENDING",
            "enableStatus": true
        }],
        "total": 11,
        "size": 10,
        "current": 1,
        "pages": 2
    });
    Mock::given(method("POST"))
        .and(path("/api/open/attraction/list"))
        .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .and(body_json(json!({
            "page": {"current": 1, "size": 10},
            "queryBody": {"regionId": 7, "title": "Lake"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(page))
        .expect(1)
        .mount(&server)
        .await;

    let query = PageQuery::new(
        Page::new(1, 10),
        AttractionQuery {
            region_id: Some(7),
            title: Some("Lake".to_string()),
            ..AttractionQuery::default()
        },
    );
    let result = office.attractions.list(&query).await.unwrap();

    assert_eq!(result.total, 11);
    assert_eq!(result.pages, 2);
    assert_eq!(result.size, 10);
    assert!(result.has_next());
    assert_eq!(result.records[0].title, "Lakeside Pagoda");
    assert_eq!(result.records[0].location_info.extra["zoom"], 12);
}

#[test_log::test(tokio::test)]
async fn test_publish_is_a_single_bodiless_put() {
    let (server, office) = http_office().await;
    Mock::given(method("PUT"))
        .and(path("/api/open/attraction/publish/42"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    office.attractions.publish(42).await.unwrap();

    let received = server.received_requests().await.unwrap_or_default();
    assert_eq!(received.len(), 1);
    assert!(received[0].body.is_empty());
}

#[test_log::test(tokio::test)]
async fn test_attraction_remove_posts_ids() {
    let (server, office) = http_office().await;
    Mock::given(method("POST"))
        .and(path("/api/open/attraction/remove"))
        .and(body_json(json!([3, 4])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    office.attractions.remove(&[3, 4]).await.unwrap();
}

#[test_log::test(tokio::test)]
async fn test_region_remove_uses_delete_and_empty_list_sends_nothing() {
    let (server, office) = http_office().await;
    Mock::given(method("DELETE"))
        .and(path("/api/open/region/remove"))
        .and(body_json(json!([9])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    office.regions.remove(&[]).await.unwrap();
    office.regions.remove(&[9]).await.unwrap();
}

#[test_log::test(tokio::test)]
async fn test_server_error_propagates_unchanged() {
    let (server, office) = http_office().await;
    Mock::given(method("POST"))
        .and(path("/api/open/sysMenu/list"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "menu table locked"})),
        )
        .mount(&server)
        .await;

    let err = office.menus.all_menus().await.unwrap_err();
    match err {
        ClientError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "menu table locked");
        }
        other => panic!("Expected status error, got {:?}", other),
    }
}

#[test_log::test(tokio::test)]
async fn test_current_user_info() {
    let (server, office) = http_office().await;
    Mock::given(method("GET"))
        .and(path("/api/open/sysUser/getUserInfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "userId": "1",
            "username": "admin",
            "realName": "Site Admin",
            "homePath": "/dashboard",
            "roles": ["super"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let info = office.user_info.current().await.unwrap();
    assert_eq!(info.home_path, "/dashboard");
}

#[test_log::test(tokio::test)]
async fn test_upload_reports_monotonic_progress() {
    let (server, office) = http_office().await;
    Mock::given(method("POST"))
        .and(path("/api/open/files/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fileName": "pier.jpg",
            "fileUrl": "https://cdn.example.com/pier.jpg"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let progress: ProgressFn = Arc::new(move |p| sink.lock().unwrap().push(p));

    let result = office
        .files
        .upload(
            FileUpload::new("pier.jpg", "image/jpeg", vec![7u8; 512 * 1024]),
            Some(progress),
        )
        .await
        .unwrap();

    assert_eq!(result.file_url, "https://cdn.example.com/pier.jpg");
    let seen = seen.lock().unwrap().clone();
    assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(seen.last(), Some(&100));
}

#[test_log::test(tokio::test)]
async fn test_gallery_query_uses_page_query_endpoint() {
    let (server, office) = http_office().await;
    Mock::given(method("POST"))
        .and(path(format!("/api{}", GALLERY_QUERY_PATH).as_str()))
        .and(body_json(json!({
            "page": {"current": 2, "size": 5},
            "queryBody": {"title": "Pagoda"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "records": [{
                "gmtModified": "2026-10-01 09:30:00",
                "locationInfo": {"latitude": 30.23, "longitude": 120.14},
                "regionId": 7,
                "regionName": "West Lake",
                "sortNo": 1,
                "title": "Lakeside Pagoda"
            }],
            "total": 6,
            "size": 5,
            "current": 2,
            "pages": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = PageQuery::new(
        Page::new(2, 5),
        AttractionGalleryQuery {
            title: Some("Pagoda".to_string()),
            ..AttractionGalleryQuery::default()
        },
    );
    let page = office.gallery.query(&query).await.unwrap();

    assert_eq!(page.pages, 2);
    assert!(!page.has_next());
    assert_eq!(page.records[0].region_name, "West Lake");
    assert_eq!(page.records[0].location_info.latitude, 30.23);
}

#[test_log::test(tokio::test)]
async fn test_app_user_enable_and_disable() {
    let (server, office) = http_office().await;
    Mock::given(method("PUT"))
        .and(path("/api/open/user/forbidden/11"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/open/user/normal/11"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    office.app_users.disable(11).await.unwrap();
    office.app_users.enable(11).await.unwrap();
}
