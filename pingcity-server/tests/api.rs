//! End-to-end API tests over the in-process router
//!
//! Each test builds a fresh seeded state, so mutations never leak
//! between tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use pingcity_server::api;
use pingcity_server::core::{Config, ServerState};
use pingcity_server::engine::telemetry::FixedLoadProbe;

const TEST_SYSTEM_LOAD: u32 = 82;

fn test_app() -> Router {
    let state = ServerState::with_probe(
        Config::with_overrides(0),
        Arc::new(FixedLoadProbe(TEST_SYSTEM_LOAD)),
    );
    api::app(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

// ========== Issues ==========

#[tokio::test]
async fn list_issues_with_filters() {
    let app = test_app();

    let (status, body) = send(&app, get("/api/issues")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["total"], json!(3));

    let (status, body) = send(&app, get("/api/issues?department=water&priority=8")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], json!(1));
    assert_eq!(body["data"][0]["id"], json!(4514));
    assert_eq!(body["filters"]["department"], json!("water"));
}

#[tokio::test]
async fn malformed_priority_param_is_rejected() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/issues?priority=urgent")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn malformed_body_gets_the_error_envelope() {
    let app = test_app();

    // wrong type for a typed field
    let (status, body) = send(
        &app,
        post_json("/api/issues", json!({"priority": "high"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request body")
    );

    // syntactically broken JSON on an update path
    let request = Request::builder()
        .method("PUT")
        .uri("/api/issues/4512")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn overlong_text_fields_are_rejected() {
    let app = test_app();

    let (status, body) = send(
        &app,
        post_json(
            "/api/issues",
            json!({
                "title": "t".repeat(201),
                "description": "valid",
                "location": "valid",
                "department": "Roads"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("title is too long")
    );

    // nothing was appended
    let (_, body) = send(&app, get("/api/issues")).await;
    assert_eq!(body["total"], json!(3));

    // update paths enforce the same limits
    let (status, body) = send(
        &app,
        put_json("/api/users/4", json!({"name": "n".repeat(201)})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("name is too long")
    );
}

#[tokio::test]
async fn create_issue_assigns_next_id_and_defaults() {
    let app = test_app();
    let (status, body) = send(
        &app,
        post_json(
            "/api/issues",
            json!({
                "title": "Streetlight out",
                "description": "Dark corner at night",
                "location": "Sector 7",
                "department": "Lighting"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], json!(4515));
    assert_eq!(body["data"]["status"], json!("new"));
    assert_eq!(body["data"]["priority"], json!(5));
    assert_eq!(body["data"]["upvotes"], json!(0));

    let (status, body) = send(&app, get("/api/issues/4515")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], json!("Streetlight out"));
}

#[tokio::test]
async fn create_issue_reports_all_missing_fields() {
    let app = test_app();
    let (status, body) = send(
        &app,
        post_json(
            "/api/issues",
            json!({"title": "Only a title", "location": "  "}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(
        body["missingFields"],
        json!(["description", "location", "department"])
    );

    // nothing was appended
    let (_, body) = send(&app, get("/api/issues")).await;
    assert_eq!(body["total"], json!(3));
}

#[tokio::test]
async fn update_issue_merges_only_given_fields() {
    let app = test_app();
    let (status, body) = send(
        &app,
        put_json("/api/issues/4513", json!({"status": "assigned", "priority": 7})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], json!("assigned"));
    assert_eq!(body["data"]["priority"], json!(7));
    // untouched fields survive
    assert_eq!(body["data"]["title"], json!("Overflowing garbage bin"));
    assert_eq!(body["data"]["upvotes"], json!(8));
}

#[tokio::test]
async fn vote_and_unvote_round_trip() {
    let app = test_app();

    let (status, body) = send(&app, post_empty("/api/issues/4513/vote")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["issueId"], json!(4513));
    assert_eq!(body["data"]["newUpvoteCount"], json!(9));

    let (status, body) = send(&app, delete("/api/issues/4513/vote")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["newUpvoteCount"], json!(8));
}

#[tokio::test]
async fn unvote_floors_at_zero() {
    let app = test_app();
    let (_, body) = send(
        &app,
        post_json(
            "/api/issues",
            json!({
                "title": "Fresh issue",
                "description": "No votes yet",
                "location": "Sector 1",
                "department": "Roads"
            }),
        ),
    )
    .await;
    let id = body["data"]["id"].as_u64().unwrap();

    let (status, body) = send(&app, delete(&format!("/api/issues/{id}/vote"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["newUpvoteCount"], json!(0));
}

#[tokio::test]
async fn unknown_issue_is_404() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/issues/9999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn deleted_issue_id_is_never_reused() {
    let app = test_app();
    let (status, _) = send(&app, delete("/api/issues/4514")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(
        &app,
        post_json(
            "/api/issues",
            json!({
                "title": "After delete",
                "description": "x",
                "location": "y",
                "department": "Roads"
            }),
        ),
    )
    .await;
    assert_eq!(body["data"]["id"], json!(4515));
}

// ========== Users ==========

#[tokio::test]
async fn user_stats_cover_full_collection_even_when_filtered() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/users?role=staff")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], json!(2));
    assert_eq!(body["stats"]["total"], json!(5));
    assert_eq!(body["stats"]["byRole"]["staff"], json!(2));
    assert_eq!(body["stats"]["suspended"], json!(1));
}

#[tokio::test]
async fn create_user_derives_permissions_from_role() {
    let app = test_app();
    let (status, body) = send(
        &app,
        post_json(
            "/api/users",
            json!({"name": "Kiran Rao", "email": "kiran@example.com", "role": "staff"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], json!(6));
    assert_eq!(body["data"]["status"], json!("active"));
    assert_eq!(body["data"]["lastLogin"], json!("Never"));
    assert_eq!(
        body["data"]["permissions"],
        json!(["manage_issues", "update_status"])
    );
}

#[tokio::test]
async fn create_user_requires_name_email_role() {
    let app = test_app();
    let (status, body) = send(&app, post_json("/api/users", json!({"email": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["missingFields"], json!(["name", "email", "role"]));
}

#[tokio::test]
async fn reactivating_user_stamps_last_login() {
    let app = test_app();
    // user 5 is suspended
    let (status, body) = send(&app, put_json("/api/users/5", json!({"status": "active"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], json!("active"));
    assert_ne!(body["data"]["lastLogin"], json!("2024-04-22 11:02"));

    // active-to-active keeps the stamp
    let stamped = body["data"]["lastLogin"].clone();
    let (_, body) = send(&app, put_json("/api/users/5", json!({"status": "active"}))).await;
    assert_eq!(body["data"]["lastLogin"], stamped);
}

#[tokio::test]
async fn deleting_admin_is_forbidden() {
    let app = test_app();
    let (status, body) = send(&app, delete("/api/users/1")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], json!("Cannot delete admin users"));

    // collection untouched
    let (_, body) = send(&app, get("/api/users")).await;
    assert_eq!(body["stats"]["total"], json!(5));
}

#[tokio::test]
async fn deleting_citizen_succeeds() {
    let app = test_app();
    let (status, body) = send(&app, delete("/api/users/4")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], json!("Meera Patel"));

    let (status, _) = send(&app, get("/api/users/4")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ========== Communications ==========

#[tokio::test]
async fn communications_list_serves_both_collections_with_stats() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/communications")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["messages"].as_array().unwrap().len(), 3);
    assert_eq!(body["data"]["communications"].as_array().unwrap().len(), 2);
    assert_eq!(body["stats"]["totalMessages"], json!(3));
    assert_eq!(body["stats"]["sentMessages"], json!(1));
    assert_eq!(body["stats"]["totalEngagement"], json!(1904));
    assert_eq!(body["stats"]["averageReadRate"], json!(3.0));

    // type filter narrows messages only
    let (_, body) = send(&app, get("/api/communications?type=alert")).await;
    assert_eq!(body["data"]["messages"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["messages"][0]["id"], json!(102));
    assert_eq!(body["data"]["communications"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn create_message_applies_defaults() {
    let app = test_app();
    let (status, body) = send(
        &app,
        post_json(
            "/api/communications",
            json!({
                "title": "Road closure notice",
                "content": "Main Road closed Sunday morning",
                "type": "notification",
                "sender": "Roads",
                "recipients": ["Sector 2"]
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], json!(104));
    assert_eq!(body["data"]["status"], json!("draft"));
    assert_eq!(body["data"]["priority"], json!("medium"));
    assert_eq!(body["data"]["channels"], json!(["in-app"]));
    assert!(body["data"].get("sentAt").is_none());
}

#[tokio::test]
async fn create_message_reports_missing_fields() {
    let app = test_app();
    let (status, body) = send(
        &app,
        post_json("/api/communications", json!({"title": "No body"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["missingFields"],
        json!(["content", "type", "sender", "recipients"])
    );
}

#[tokio::test]
async fn sending_a_draft_stamps_sent_at() {
    let app = test_app();
    let (status, body) = send(&app, post_empty("/api/communications/102/send")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], json!("sent"));
    assert!(body["data"]["sentAt"].is_string());
}

#[tokio::test]
async fn double_send_is_rejected() {
    let app = test_app();
    // 101 is already sent in the seed
    let (status, body) = send(&app, post_empty("/api/communications/101/send")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Message already sent"));

    // original sentAt survives
    let (_, body) = send(&app, get("/api/communications/101")).await;
    assert_eq!(body["data"]["sentAt"], json!("2024-06-08T10:05:00Z"));
}

#[tokio::test]
async fn update_to_sent_status_stamps_sent_at() {
    let app = test_app();
    let (status, body) = send(
        &app,
        put_json("/api/communications/103", json!({"status": "sent"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], json!("sent"));
    assert!(body["data"]["sentAt"].is_string());
}

// ========== Activities ==========

#[tokio::test]
async fn activity_feed_is_newest_first() {
    let app = test_app();
    let (status, _) = send(
        &app,
        post_json(
            "/api/activities",
            json!({"user": "Anita Desai", "action": "suspended a user", "dept": "Administration"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, get("/api/activities")).await;
    assert_eq!(body["total"], json!(4));
    assert_eq!(body["data"][0]["user"], json!("Anita Desai"));
    assert_eq!(body["data"][0]["id"], json!(4));
}

#[tokio::test]
async fn activity_total_counts_matches_before_limit() {
    let app = test_app();
    let (_, body) = send(&app, get("/api/activities?limit=1")).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["total"], json!(3));
    assert_eq!(body["filters"]["limit"], json!(1));
}

#[tokio::test]
async fn create_activity_requires_all_fields() {
    let app = test_app();
    let (status, body) = send(
        &app,
        post_json("/api/activities", json!({"user": "Someone"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["missingFields"], json!(["action", "dept"]));
}

// ========== Dashboard / Trending / Search / Analytics ==========

#[tokio::test]
async fn dashboard_combines_kpi_seed_and_live_counters() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/dashboard")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["newReports"], json!(42));
    assert_eq!(body["data"]["realTimeStats"]["totalIssues"], json!(3));
    assert_eq!(body["data"]["realTimeStats"]["resolutionRate"], json!(0));
    assert_eq!(body["data"]["departmentStats"]["Roads"], json!(1));
    assert_eq!(body["data"]["priorityStats"]["high"], json!(2));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn trending_ranks_live_and_serves_static_list() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/trending")).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = body["data"]["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![4514, 4512, 4513]);
    assert_eq!(body["data"]["staticTrending"].as_array().unwrap().len(), 3);
    assert_eq!(body["data"]["timeframe"], json!("48h"));

    let (_, body) = send(&app, get("/api/trending?limit=1&timeframe=24h")).await;
    assert_eq!(body["data"]["issues"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["timeframe"], json!("24h"));
}

#[tokio::test]
async fn search_requires_a_query() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/search")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Search query is required"));
}

#[tokio::test]
async fn search_ranks_title_matches_above_department_matches() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/search?q=water")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], json!(2));
    assert_eq!(body["query"], json!("water"));
    assert_eq!(body["limit"], json!(20));
    // "Water supply disruption" has the title hit
    assert_eq!(body["data"][0]["id"], json!(4514));
}

#[tokio::test]
async fn analytics_uses_the_load_probe_and_fires_seed_insights() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/analytics")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["realTime"]["systemLoad"],
        json!(TEST_SYSTEM_LOAD)
    );
    assert_eq!(body["data"]["realTime"]["activeIssues"], json!(3));
    assert_eq!(body["data"]["realTime"]["activeUsers"], json!(4));

    // seed fires the declining-efficiency and volume rules
    let insights = body["insights"].as_array().unwrap();
    assert_eq!(insights.len(), 2);
    assert_eq!(insights[0]["type"], json!("warning"));
    assert_eq!(insights[1]["type"], json!("alert"));

    assert_eq!(body["metadata"]["timeframe"], json!("30d"));
    assert_eq!(body["metadata"]["dataPoints"], json!(3));
}

#[tokio::test]
async fn analytics_department_filter_adds_scoped_block() {
    let app = test_app();
    let (_, body) = send(&app, get("/api/analytics?department=water")).await;
    let block = &body["data"]["departmentSpecific"];
    assert_eq!(block["totalIssues"], json!(1));
    assert_eq!(block["resolvedIssues"], json!(0));
    assert_eq!(block["avgPriority"], json!(9.0));
    assert_eq!(block["topLocations"][0]["location"], json!("Residential Area Block A"));
    assert_eq!(body["metadata"]["department"], json!("water"));
}

// ========== System ==========

#[tokio::test]
async fn health_reports_collection_sizes() {
    let app = test_app();
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["collections"]["issues"], json!(3));
    assert_eq!(body["collections"]["users"], json!(5));
}

#[tokio::test]
async fn api_index_describes_endpoints() {
    let app = test_app();
    let (status, body) = send(&app, get("/api")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert!(body["data"]["endpoints"]["issues"].is_object());
}
