//! Notification inbox against a mocked backend

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

mod common;

use common::{api_path, clients, init_test_logging};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use transparency_console::state::NotificationCenter;
use transparency_core::types::{
    NotificationFilters, NotificationStatus, NotificationType, PageFilters,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn notification_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": "Supplier audit overdue",
        "message": "Supplier ACME has not uploaded its audit",
        "type": "compliance",
        "status": status,
        "priority": "high",
        "created_at": "2024-06-01T12:00:00Z"
    })
}

fn inbox_json(unread_count: u64) -> serde_json::Value {
    json!({
        "notifications": [
            notification_json("n1", "unread"),
            notification_json("n2", "read"),
        ],
        "total": 2,
        "unread_count": unread_count
    })
}

fn inbox(server: &MockServer) -> NotificationCenter {
    NotificationCenter::new(clients(server).notifications, NotificationFilters::default())
}

async fn mount_inbox(server: &MockServer, unread_count: u64, expected_loads: u64) {
    Mock::given(method("GET"))
        .and(path(api_path("/notifications")))
        .respond_with(ResponseTemplate::new(200).set_body_json(inbox_json(unread_count)))
        .expect(expected_loads)
        .mount(server)
        .await;
}

#[rstest]
#[case::mark_read("PUT", "/notifications/n1/read")]
#[case::archive("PUT", "/notifications/n1/archive")]
#[case::delete("DELETE", "/notifications/n1")]
#[tokio::test]
async fn test_transition_is_one_call_then_reloads_list_and_unread_count(
    #[case] verb: &str,
    #[case] route: &str,
) {
    init_test_logging();

    let server = MockServer::start().await;
    mount_inbox(&server, 3, 2).await;
    Mock::given(method(verb))
        .and(path(api_path(route)))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut center = inbox(&server);
    center.load().await;
    assert_eq!(center.unread_count(), 3);

    match verb {
        "DELETE" => center.delete("n1").await.unwrap(),
        _ if route.ends_with("/archive") => center.archive("n1").await.unwrap(),
        _ => center.mark_read("n1").await.unwrap(),
    }

    assert_eq!(center.notifications().len(), 2);
    assert_eq!(center.total_count(), 2);
    assert_eq!(center.unread_count(), 3);
    assert!(center.error().is_none());
}

#[tokio::test]
async fn test_failed_transition_sets_message_without_reload() {
    init_test_logging();

    let server = MockServer::start().await;
    mount_inbox(&server, 1, 1).await;
    Mock::given(method("PUT"))
        .and(path(api_path("/notifications/n1/read")))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut center = inbox(&server);
    center.load().await;

    let err = center.mark_read("n1").await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(center.error(), Some("Failed to update notification"));
    assert_eq!(center.notifications()[0].status, NotificationStatus::Unread);
    assert_eq!(center.unread_count(), 1);
}

#[tokio::test]
async fn test_failed_delete_has_its_own_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(api_path("/notifications/n9")))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let mut center = inbox(&server);

    assert!(center.delete("n9").await.is_err());
    assert_eq!(center.error(), Some("Failed to delete notification"));
}

#[tokio::test]
async fn test_filter_change_merges_and_returns_to_first_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/notifications")))
        .and(query_param("page", "1"))
        .and(query_param("status", "unread"))
        .and(query_param("type", "compliance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(inbox_json(5)))
        .expect(1)
        .mount(&server)
        .await;

    let filters = NotificationFilters {
        page: 4,
        notification_type: Some(NotificationType::Compliance),
        ..NotificationFilters::default()
    };
    let mut center = NotificationCenter::new(clients(&server).notifications, filters);

    center
        .change_filters(|f| f.status = Some(NotificationStatus::Unread))
        .await;

    assert_eq!(center.filters().page(), 1);
    assert_eq!(center.filters().notification_type, Some(NotificationType::Compliance));
    assert_eq!(center.unread_count(), 5);
}

#[tokio::test]
async fn test_refresh_unread_count_only_touches_the_badge() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/notifications/unread-count")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 7 })))
        .expect(1)
        .mount(&server)
        .await;

    let mut center = inbox(&server);
    center.refresh_unread_count().await;

    assert_eq!(center.unread_count(), 7);
    assert!(center.notifications().is_empty());
}
