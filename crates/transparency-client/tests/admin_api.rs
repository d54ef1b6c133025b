//! HTTP contract tests for `AdminApiClient`

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use pretty_assertions::assert_eq;
use serde_json::json;
use transparency_client::{AdminApiClient, ApiError};
use transparency_core::config::ApiConfig;
use transparency_core::types::{
    AuditLogExportRequest, AuditLogFilters, AuditSeverity, BulkRequest, ExportFormat,
    HealthStatus, NewTicketMessage, TicketFilters, TicketPriority, TicketStatus, UserCreate,
    UserFilters, UserRole, UserStatus, UserUpdate,
};
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PREFIX: &str = "/api/v1";

fn client(server: &MockServer, token: Option<&str>) -> AdminApiClient {
    let config = ApiConfig {
        base_url: format!("{}{PREFIX}", server.uri()),
        token: token.map(ToString::to_string),
        ..ApiConfig::default()
    };
    AdminApiClient::new(&config).unwrap()
}

fn user_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "email": format!("{id}@example.com"),
        "full_name": "Test User",
        "role": "viewer",
        "status": "active",
        "created_at": "2024-01-15T09:00:00Z"
    })
}

#[tokio::test]
async fn test_list_users_encodes_filters_and_sends_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{PREFIX}/admin/users")))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "25"))
        .and(query_param("role", "company_admin"))
        .and(query_param("search", "acme corp"))
        .and(query_param_is_missing("status"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [user_json("u1"), user_json("u2")],
            "total": 27
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filters = UserFilters {
        page: 2,
        per_page: 25,
        role: Some(UserRole::CompanyAdmin),
        search: Some("acme corp".to_string()),
        ..UserFilters::default()
    };

    let page = client(&server, Some("secret-token"))
        .list_users(&filters)
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[1].id, "u2");
    assert_eq!(page.total, 27);
    assert_eq!(page.total_pages(25), 2);
}

#[tokio::test]
async fn test_requests_without_token_carry_no_authorization_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{PREFIX}/admin/users/u1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("u1")))
        .mount(&server)
        .await;

    let user = client(&server, None).get_user("u1").await.unwrap();
    assert_eq!(user.email, "u1@example.com");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_non_success_status_carries_only_the_code() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{PREFIX}/admin/users/u9")))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"detail": "user owns open tickets"})),
        )
        .mount(&server)
        .await;

    let err = client(&server, None).delete_user("u9").await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 422 }));
    assert_eq!(err.to_string(), "API returned error status 422");
}

#[tokio::test]
async fn test_create_and_update_user_bodies() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{PREFIX}/admin/users")))
        .and(body_json(json!({
            "email": "new@example.com",
            "full_name": "New Person",
            "role": "analyst",
            "send_invite": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(user_json("u3")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(format!("{PREFIX}/admin/users/u3")))
        .and(body_json(json!({"status": "suspended"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, None);
    let created = api
        .create_user(&UserCreate {
            email: "new@example.com".to_string(),
            full_name: "New Person".to_string(),
            role: UserRole::Analyst,
            company_id: None,
            send_invite: true,
        })
        .await
        .unwrap();
    assert_eq!(created.id, "u3");

    api.update_user(
        "u3",
        &UserUpdate {
            status: Some(UserStatus::Suspended),
            ..UserUpdate::default()
        },
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_bulk_ticket_operation_is_a_single_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{PREFIX}/admin/tickets/bulk")))
        .and(body_json(json!({
            "operation": "close",
            "ticket_ids": ["t1", "t2", "t3"],
            "reason": "duplicates"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    client(&server, None)
        .bulk_ticket_operation(&BulkRequest {
            operation: "close".to_string(),
            ids: vec!["t1".into(), "t2".into(), "t3".into()],
            reason: "duplicates".to_string(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_tickets_and_add_message() {
    let server = MockServer::start().await;

    let ticket = json!({
        "id": "t1",
        "subject": "Supplier certificate rejected",
        "description": "Upload returns an error",
        "status": "open",
        "priority": "high",
        "created_at": "2024-05-02T08:30:00Z"
    });

    Mock::given(method("GET"))
        .and(path(format!("{PREFIX}/admin/tickets")))
        .and(query_param("status", "open"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"tickets": [ticket], "total": 1})),
        )
        .mount(&server)
        .await;

    let mut replied = ticket.clone();
    replied["status"] = json!("in_progress");
    replied["messages"] = json!([{
        "id": "m1",
        "ticket_id": "t1",
        "author_name": "Support",
        "content": "Looking into it",
        "is_internal": false,
        "created_at": "2024-05-02T09:00:00Z"
    }]);

    Mock::given(method("POST"))
        .and(path(format!("{PREFIX}/admin/tickets/t1/messages")))
        .and(body_json(json!({"content": "Looking into it", "is_internal": false})))
        .respond_with(ResponseTemplate::new(201).set_body_json(replied))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, None);
    let page = api
        .list_tickets(&TicketFilters {
            status: Some(TicketStatus::Open),
            ..TicketFilters::default()
        })
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].priority, TicketPriority::High);

    let updated = api
        .add_ticket_message(
            "t1",
            &NewTicketMessage {
                content: "Looking into it".to_string(),
                is_internal: false,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, TicketStatus::InProgress);
    assert_eq!(updated.messages.len(), 1);
}

#[tokio::test]
async fn test_audit_logs_list_and_export() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{PREFIX}/admin/audit-logs")))
        .and(query_param("severity", "critical"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "logs": [{
                "id": "a1",
                "timestamp": "2024-04-10T14:00:00Z",
                "user_email": "ops@example.com",
                "action": "user.delete",
                "resource_type": "user",
                "resource_id": "u7",
                "severity": "critical"
            }],
            "total": 1
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("{PREFIX}/admin/audit-logs/export")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"download_url": "https://files.example.com/audit.csv"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, None);
    let filters = AuditLogFilters {
        severity: Some(AuditSeverity::Critical),
        ..AuditLogFilters::default()
    };

    let page = api.list_audit_logs(&filters).await.unwrap();
    assert_eq!(page.items[0].action, "user.delete");
    assert!(page.items[0].success);

    let export = api
        .export_audit_logs(&AuditLogExportRequest {
            format: ExportFormat::Csv,
            filters,
        })
        .await
        .unwrap();
    assert_eq!(export.download_url, "https://files.example.com/audit.csv");

    let requests = server.received_requests().await.unwrap();
    let export_body: serde_json::Value = requests[1].body_json().unwrap();
    assert_eq!(export_body["format"], json!("csv"));
    assert_eq!(export_body["filters"]["severity"], json!("critical"));
}

#[tokio::test]
async fn test_system_endpoints() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{PREFIX}/admin/system/health")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "degraded",
            "uptime_seconds": 90061,
            "cpu_usage": 71.5,
            "services": [{"name": "database", "status": "healthy", "response_time_ms": 3.2}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(format!("{PREFIX}/admin/system/config/maintenance_mode")))
        .and(body_json(json!({"value": true})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("{PREFIX}/admin/system/alerts/al1/acknowledge")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, None);

    let health = api.get_system_health().await.unwrap();
    assert_eq!(health.status, HealthStatus::Degraded);
    assert_eq!(health.services.len(), 1);

    api.update_system_config("maintenance_mode", json!(true))
        .await
        .unwrap();
    api.acknowledge_alert("al1").await.unwrap();
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{PREFIX}/admin/dashboard/stats")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = client(&server, None).get_dashboard_stats().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
