//! Integration tests for the wizard and brand proxy HTTP endpoints.
//!
//! The full router is driven with `tower::ServiceExt::oneshot` against the
//! in-memory brand lookup and document service, walking a session from
//! identity through confirmation.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use campaign_brief::adapters::brandfetch::{brand_details, search_hit, MockBrandLookup};
use campaign_brief::adapters::documents::{MockDocumentService, MOCK_DOCUMENT_URL};
use campaign_brief::adapters::http::{
    api_router, BrandHandlers, RouterSettings, WizardHandlers, PLACEHOLDER_LOGO_URL,
};
use campaign_brief::application::handlers::{FetchSuggestionsHandler, ResolveBrandHandler};
use campaign_brief::application::{WizardRegistry, WizardServices, WizardSettings};
use campaign_brief::domain::wizard::placeholders;
use campaign_brief::ports::{BrandDetails, BrandLookup, DocumentServiceError};

// =============================================================================
// Test Infrastructure
// =============================================================================

const ACME_LOGO: &str = "https://cdn.example.com/acme.png";

fn router(lookup: &MockBrandLookup, documents: &MockDocumentService) -> Router {
    let lookup: Arc<dyn BrandLookup> = Arc::new(lookup.clone());
    let brands = BrandHandlers::new(
        Arc::new(FetchSuggestionsHandler::new(Arc::clone(&lookup))),
        Arc::new(ResolveBrandHandler::new(Arc::clone(&lookup))),
    );
    let settings = WizardSettings {
        template_id: "template-1".to_string(),
        ..WizardSettings::default()
    };
    let registry = WizardRegistry::new(
        WizardServices::new(lookup, Arc::new(documents.clone())),
        settings,
    );
    api_router(
        brands,
        WizardHandlers::new(Arc::new(registry)),
        &RouterSettings::default(),
    )
}

fn acme_lookup() -> MockBrandLookup {
    MockBrandLookup::new()
        .with_search("acme", vec![search_hit("acme.com", "Acme")])
        .with_details("acme.com", brand_details("Acme", "Rockets and anvils", ACME_LOGO))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn create(app: &Router) -> String {
    let (status, view) = post(app, "/api/wizards", json!({})).await;
    assert_eq!(status, StatusCode::CREATED);
    view["id"].as_str().unwrap().to_string()
}

async fn intent(app: &Router, id: &str, body: Value) -> (StatusCode, Value) {
    post(app, &format!("/api/wizards/{}/intents", id), body).await
}

async fn ok_intent(app: &Router, id: &str, body: Value) -> Value {
    let (status, view) = intent(app, id, body.clone()).await;
    assert_eq!(status, StatusCode::OK, "intent {} failed: {}", body, view);
    view
}

/// Polls the session view until `done` holds.
async fn wait_for(app: &Router, id: &str, done: impl Fn(&Value) -> bool) -> Value {
    for _ in 0..200 {
        let (_, view) = get(app, &format!("/api/wizards/{}", id)).await;
        if done(&view) {
            return view;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("wizard {} never reached the expected state", id);
}

async fn through_campaign_details(app: &Router, id: &str) {
    ok_intent(app, id, json!({"type": "set_name", "value": "Ana"})).await;
    ok_intent(app, id, json!({"type": "set_email", "value": "ana@example.com"})).await;
    ok_intent(app, id, json!({"type": "advance"})).await;

    ok_intent(app, id, json!({"type": "input_website", "value": "acme.com"})).await;
    ok_intent(app, id, json!({"type": "fetch_brand_details"})).await;
    wait_for(app, id, |v| v["resolvedDomain"] == "acme.com" && v["resolving"] == false).await;

    ok_intent(app, id, json!({"type": "advance"})).await;
    let view = ok_intent(app, id, json!({"type": "advance"})).await;
    assert_eq!(view["step"], "campaign_details");

    ok_intent(app, id, json!({"type": "set_goal", "goal": "increase-sales", "selected": true}))
        .await;
    ok_intent(app, id, json!({"type": "set_deliverables", "value": "3 reels"})).await;
    ok_intent(app, id, json!({"type": "set_creator_profiles", "value": "fitness"})).await;
    let view = ok_intent(app, id, json!({"type": "set_target_audience", "value": "18-34"})).await;
    assert_eq!(view["canSubmit"], true);
}

// =============================================================================
// Wizard flow
// =============================================================================

#[tokio::test]
async fn full_flow_creates_document_and_confirms() {
    let documents = MockDocumentService::new();
    let app = router(&acme_lookup(), &documents);
    let id = create(&app).await;

    through_campaign_details(&app, &id).await;

    let (status, body) = get(&app, &format!("/api/wizards/{}/confirmation", id)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "NOT_CONFIRMED");

    ok_intent(&app, &id, json!({"type": "submit"})).await;
    let view = wait_for(&app, &id, |v| v["step"] == "confirmed").await;
    assert_eq!(view["submissionState"], "succeeded");

    let (status, body) = get(&app, &format!("/api/wizards/{}/confirmation", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["documentUrl"], MOCK_DOCUMENT_URL);
    assert_eq!(body["logoUrl"], ACME_LOGO);

    let requests = documents.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].template_id, "template-1");
    assert!(requests[0].title.starts_with("Acme Campaign Brief - "));
    assert_eq!(
        requests[0].replacements.get(placeholders::COMPANY_NAME).map(String::as_str),
        Some("Acme")
    );
    assert_eq!(requests[0].logo_url, ACME_LOGO);
}

#[tokio::test]
async fn brand_without_logo_confirms_with_placeholder() {
    let lookup = MockBrandLookup::new().with_details(
        "acme.com",
        BrandDetails {
            name: Some("Acme".to_string()),
            description: None,
            logos: vec![],
        },
    );
    let app = router(&lookup, &MockDocumentService::new());
    let id = create(&app).await;

    through_campaign_details(&app, &id).await;
    ok_intent(&app, &id, json!({"type": "advance"})).await;
    wait_for(&app, &id, |v| v["step"] == "confirmed").await;

    let (status, body) = get(&app, &format!("/api/wizards/{}/confirmation", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["logoUrl"], PLACEHOLDER_LOGO_URL);
}

#[tokio::test]
async fn rejected_submission_returns_to_campaign_details() {
    let documents = MockDocumentService::new().with_error(DocumentServiceError::Rejected {
        status: 500,
        message: Some("Template not found".to_string()),
    });
    let app = router(&acme_lookup(), &documents);
    let id = create(&app).await;

    through_campaign_details(&app, &id).await;
    ok_intent(&app, &id, json!({"type": "submit"})).await;

    let view = wait_for(&app, &id, |v| v["submissionState"] == "failed").await;
    assert_eq!(view["step"], "campaign_details");
    assert!(view["failureReason"]
        .as_str()
        .unwrap()
        .contains("Template not found"));
    assert_eq!(view["deliverables"], "3 reels");

    // Retry succeeds once the queued failure is consumed.
    ok_intent(&app, &id, json!({"type": "submit"})).await;
    wait_for(&app, &id, |v| v["step"] == "confirmed").await;
    assert_eq!(documents.call_count(), 2);
}

#[tokio::test]
async fn incomplete_step_is_rejected_with_validation_error() {
    let app = router(&acme_lookup(), &MockDocumentService::new());
    let id = create(&app).await;

    let (status, body) = intent(&app, &id, json!({"type": "advance"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_FAILED");

    let (_, view) = get(&app, &format!("/api/wizards/{}", id)).await;
    assert_eq!(view["step"], "identity");
    assert_eq!(view["canAdvance"], false);
}

#[tokio::test]
async fn back_from_first_step_is_an_invalid_transition() {
    let app = router(&acme_lookup(), &MockDocumentService::new());
    let id = create(&app).await;

    let (status, body) = intent(&app, &id, json!({"type": "back"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INVALID_STATE_TRANSITION");
}

#[tokio::test]
async fn confirmed_brief_can_no_longer_be_edited() {
    let app = router(&acme_lookup(), &MockDocumentService::new());
    let id = create(&app).await;

    through_campaign_details(&app, &id).await;
    ok_intent(&app, &id, json!({"type": "submit"})).await;
    wait_for(&app, &id, |v| v["step"] == "confirmed").await;

    for edit in [
        json!({"type": "set_deliverables", "value": "10 reels"}),
        json!({"type": "input_website", "value": "other.com"}),
    ] {
        let (status, body) = intent(&app, &id, edit).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "INVALID_STATE_TRANSITION");
    }

    let (_, view) = get(&app, &format!("/api/wizards/{}", id)).await;
    assert_eq!(view["deliverables"], "3 reels");
    assert_eq!(view["companyWebsite"], "acme.com");
}

// =============================================================================
// Session lookup
// =============================================================================

#[tokio::test]
async fn unknown_wizard_is_not_found() {
    let app = router(&acme_lookup(), &MockDocumentService::new());
    let missing = "00000000-0000-4000-8000-000000000000";

    let (status, body) = get(&app, &format!("/api/wizards/{}", missing)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "WIZARD_NOT_FOUND");
}

#[tokio::test]
async fn malformed_wizard_id_is_bad_request() {
    let app = router(&acme_lookup(), &MockDocumentService::new());

    let (status, body) = get(&app, "/api/wizards/not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn deleted_wizard_is_gone() {
    let app = router(&acme_lookup(), &MockDocumentService::new());
    let id = create(&app).await;
    let uri = format!("/api/wizards/{}", id);

    let delete = || Request::builder().method("DELETE").uri(&uri).body(Body::empty()).unwrap();

    let (status, _) = send(&app, delete()).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, delete()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Brand proxy
// =============================================================================

#[tokio::test]
async fn brand_search_returns_normalized_suggestions() {
    let app = router(&acme_lookup(), &MockDocumentService::new());

    let (status, body) = get(&app, "/api/brands/search?query=acme").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["domain"], "acme.com");
    assert_eq!(body[0]["displayName"], "Acme");
}

#[tokio::test]
async fn brand_search_requires_query() {
    let app = router(&acme_lookup(), &MockDocumentService::new());

    let (status, body) = get(&app, "/api/brands/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Query parameter is required");
}

#[tokio::test]
async fn brand_details_requires_domain() {
    let app = router(&acme_lookup(), &MockDocumentService::new());

    let (status, body) = get(&app, "/api/brands/details?domain=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Domain parameter is required");
}

#[tokio::test]
async fn brand_details_failure_is_bad_gateway() {
    let app = router(&acme_lookup(), &MockDocumentService::new());

    let (status, body) = get(&app, "/api/brands/details?domain=unknown.io").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Failed to fetch data from Brandfetch");
}
