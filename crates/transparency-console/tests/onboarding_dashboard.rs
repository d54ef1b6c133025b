//! Onboarding tracker and dashboard against a mocked backend

#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::float_cmp)]

mod common;

use common::{admin_client, api_path, clients, init_test_logging};
use pretty_assertions::assert_eq;
use serde_json::json;
use transparency_console::state::{DashboardState, OnboardingTracker};
use transparency_core::types::HealthStatus;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_complete_step_replaces_status_with_server_copy() {
    init_test_logging();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/onboarding/status")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "company_id": "c1",
            "current_step": "supplier_mapping",
            "completed_steps": ["company_profile"],
            "total_steps": 4,
            "is_complete": false
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api_path("/onboarding/steps/supplier_mapping/complete")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "company_id": "c1",
            "current_step": "certifications",
            "completed_steps": ["company_profile", "supplier_mapping", "product_catalog"],
            "total_steps": 4,
            "is_complete": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut tracker = OnboardingTracker::new(clients(&server).onboarding);
    assert_eq!(tracker.progress_percent(), 0.0);

    tracker.load().await;
    assert_eq!(tracker.progress_percent(), 25.0);

    tracker.complete_step("supplier_mapping").await.unwrap();

    let status = tracker.status().unwrap();
    assert_eq!(status.current_step.as_deref(), Some("certifications"));
    assert_eq!(
        status.completed_steps,
        vec!["company_profile", "supplier_mapping", "product_catalog"]
    );
    assert_eq!(tracker.progress_percent(), 75.0);
    assert!(tracker.error().is_none());
}

#[tokio::test]
async fn test_failed_step_keeps_status_and_sets_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/onboarding/status")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "completed_steps": ["company_profile"],
            "total_steps": 2,
            "is_complete": false
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api_path("/onboarding/steps/certifications/complete")))
        .respond_with(ResponseTemplate::new(422))
        .expect(1)
        .mount(&server)
        .await;

    let mut tracker = OnboardingTracker::new(clients(&server).onboarding);
    tracker.load().await;

    let err = tracker.complete_step("certifications").await.unwrap_err();

    assert_eq!(err.status(), Some(422));
    assert_eq!(tracker.error(), Some("Failed to complete onboarding step"));
    assert_eq!(tracker.status().unwrap().completed_steps, vec!["company_profile"]);
    assert_eq!(tracker.progress_percent(), 50.0);
}

#[tokio::test]
async fn test_dashboard_load_fills_stats() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/admin/dashboard/stats")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_users": 120,
            "active_users": 97,
            "total_companies": 14,
            "open_tickets": 9,
            "urgent_tickets": 2,
            "average_transparency_score": 72.5,
            "system_status": "degraded",
            "recent_activity": [{
                "id": "a1",
                "timestamp": "2024-05-02T08:00:00Z",
                "action": "company.verify",
                "resource_type": "company",
                "severity": "info"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut dashboard = DashboardState::new(admin_client(&server));
    dashboard.load().await;

    let stats = dashboard.stats().unwrap();
    assert_eq!(stats.active_users, 97);
    assert_eq!(stats.urgent_tickets, 2);
    assert_eq!(stats.total_products, 0);
    assert_eq!(stats.system_status, HealthStatus::Degraded);
    assert_eq!(stats.recent_activity[0].action, "company.verify");
    assert!(dashboard.error().is_none());
    assert!(!dashboard.loading());
}

#[tokio::test]
async fn test_dashboard_failure_sets_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/admin/dashboard/stats")))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut dashboard = DashboardState::new(admin_client(&server));
    dashboard.load().await;

    assert!(dashboard.stats().is_none());
    assert_eq!(dashboard.error(), Some("Failed to load dashboard statistics"));
}
