//! End-to-end API flows through the in-process router

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use chrono::NaiveDate;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use steppia_server::auth::password::hash_password;
use steppia_server::db::DbService;
use steppia_server::db::repository::{job, user};
use steppia_server::utils::time::FixedClock;
use steppia_server::{Config, ErrorCode, ServerState, build_app};

struct TestApp {
    router: Router,
    state: ServerState,
}

impl TestApp {
    async fn new() -> Self {
        let db = DbService::in_memory().await.expect("in-memory database");
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let state = ServerState::new(
            Config::with_overrides(":memory:", 0),
            db.pool,
            Arc::new(FixedClock(today)),
        );
        let router = build_app().with_state(state.clone());
        Self { router, state }
    }

    async fn send(&self, method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn signup(&self, username: &str) -> String {
        let (status, body) = self
            .send(
                "POST",
                "/api/auth/signup",
                None,
                Some(json!({ "username": username, "password": "correct-horse" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["token"].as_str().unwrap().to_string()
    }

    async fn admin_token(&self) -> String {
        let hash = hash_password("admin-password").unwrap();
        user::ensure_admin(&self.state.pool, "admin", &hash).await.unwrap();
        let (status, body) = self
            .send(
                "POST",
                "/api/auth/login",
                None,
                Some(json!({ "username": "admin", "password": "admin-password" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }

    async fn seed_job(&self, title: &str) -> i64 {
        job::create(
            &self.state.pool,
            &shared::models::JobCreate {
                title: title.into(),
                company: "ステッピア商事".into(),
                location: "大阪府".into(),
                salary: "時給1100円".into(),
                description: "週2日から".into(),
            },
        )
        .await
        .unwrap()
        .id
    }
}

fn error_code(body: &Value) -> u64 {
    body["code"].as_u64().unwrap()
}

#[tokio::test]
async fn health_reports_database_ok() {
    let app = TestApp::new().await;
    let (status, body) = app.send("GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn signup_login_and_me() {
    let app = TestApp::new().await;
    app.signup("hanako").await;

    let (status, body) = app
        .send("POST", "/api/auth/signup", None, Some(json!({ "username": "hanako", "password": "another-pass" })))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error_code(&body), ErrorCode::UsernameTaken.code() as u64);

    let (status, body) = app
        .send("POST", "/api/auth/login", None, Some(json!({ "username": "hanako", "password": "wrong-password" })))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&body), ErrorCode::InvalidCredentials.code() as u64);

    let (status, body) = app
        .send("POST", "/api/auth/login", None, Some(json!({ "username": "hanako", "password": "correct-horse" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = app.send("GET", "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "hanako");
    assert_eq!(body["is_admin"], false);
}

#[tokio::test]
async fn member_routes_require_a_token() {
    let app = TestApp::new().await;
    let (status, _) = app.send("GET", "/api/work-logs", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.send("GET", "/api/profile", Some("not-a-jwt"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn roulette_allows_one_spin_per_day() {
    let app = TestApp::new().await;
    let token = app.signup("spinner").await;

    let (_, body) = app.send("GET", "/api/roulette", Some(&token), None).await;
    assert_eq!(body["can_spin"], true);
    assert_eq!(body["today"], "2024-06-01");

    let (status, body) = app
        .send("POST", "/api/roulette/spin", Some(&token), Some(json!({ "result": "カフェ券" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["won"], true);
    assert_eq!(body["reward"]["prize_name"], "カフェ券");

    let (status, body) = app
        .send("POST", "/api/roulette/spin", Some(&token), Some(json!({ "result": "ハズレ" })))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error_code(&body), ErrorCode::SpinAlreadyUsedToday.code() as u64);

    let (_, body) = app.send("GET", "/api/roulette", Some(&token), None).await;
    assert_eq!(body["can_spin"], false);

    let (_, body) = app.send("GET", "/api/coupons", Some(&token), None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn server_draws_when_no_label_is_sent() {
    let app = TestApp::new().await;
    let token = app.signup("lucky").await;

    let (status, body) = app
        .send("POST", "/api/roulette/spin", Some(&token), Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::OK);
    let label = body["label"].as_str().unwrap();
    assert!(!label.is_empty());
    assert_eq!(body["won"].as_bool().unwrap(), body["reward"].is_object());
}

#[tokio::test]
async fn work_log_warns_once_the_day_crosses_the_cap() {
    let app = TestApp::new().await;
    let token = app.signup("worker").await;

    let (status, body) = app
        .send(
            "POST",
            "/api/work-logs",
            Some(&token),
            Some(json!({ "date": "2024-06-01", "amount": "3000", "hours": 1.5 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["show_warning"], false);
    assert_eq!(body["work_log"]["company_name"], "（未入力）");

    let (_, body) = app
        .send(
            "POST",
            "/api/work-logs",
            Some(&token),
            Some(json!({ "date": "2024-06-01", "amount": 1000, "company": "コンビニ" })),
        )
        .await;
    assert_eq!(body["show_warning"], true);
    assert_eq!(body["day_totals"]["earnings"], 4000);

    let (status, body) = app
        .send("POST", "/api/work-logs", Some(&token), Some(json!({ "date": "2024-06-02", "amount": "abc" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), ErrorCode::InvalidEarnings.code() as u64);

    let (_, body) = app.send("GET", "/api/work-logs", Some(&token), None).await;
    assert_eq!(body["logs"].as_array().unwrap().len(), 2);
    assert_eq!(body["totals"]["earnings"], 4000);
}

#[tokio::test]
async fn records_are_scoped_to_their_owner() {
    let app = TestApp::new().await;
    let alice = app.signup("alice").await;
    let bob = app.signup("bob").await;

    let (_, body) = app
        .send("POST", "/api/work-logs", Some(&alice), Some(json!({ "date": "2024-06-01", "amount": 500 })))
        .await;
    let id = body["work_log"]["id"].as_i64().unwrap();
    let uri = format!("/api/work-logs/{id}");

    let (status, body) = app.send("GET", &uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), ErrorCode::WorkLogNotFound.code() as u64);

    let (status, _) = app.send("DELETE", &uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = app.send("GET", "/api/work-logs", Some(&bob), None).await;
    assert!(body["logs"].as_array().unwrap().is_empty());

    let (status, _) = app.send("DELETE", &uri, Some(&alice), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn booking_consumes_a_coupon_once() {
    let app = TestApp::new().await;
    let token = app.signup("booker").await;

    let (status, body) = app
        .send("POST", "/api/bookings", Some(&token), Some(json!({ "date": "2024-06-10", "time": "14:00" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), ErrorCode::ConsultantNotSelected.code() as u64);

    let (status, _) = app
        .send("PUT", "/api/consultant", Some(&token), Some(json!({ "consultant": "佐藤" })))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, spin) = app
        .send("POST", "/api/roulette/spin", Some(&token), Some(json!({ "result": "コンサル面談券" })))
        .await;
    let coupon_id = spin["reward"]["id"].as_i64().unwrap();

    let (status, body) = app
        .send(
            "POST",
            "/api/bookings",
            Some(&token),
            Some(json!({ "date": "2024-06-10", "time": "14:00", "coupon_id": coupon_id })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["schedule"]["kind"], "BOOKING");
    assert_eq!(body["schedule"]["detail"], "佐藤 コンサル予約");

    let (status, body) = app
        .send(
            "POST",
            "/api/bookings",
            Some(&token),
            Some(json!({ "date": "2024-06-11", "time": "10:00", "coupon_id": coupon_id })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error_code(&body), ErrorCode::CouponAlreadyUsed.code() as u64);

    let (_, body) = app.send("GET", "/api/bookings", Some(&token), None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = app.send("GET", "/api/mypage", Some(&token), None).await;
    assert_eq!(body["consultant_name"], "佐藤");
    assert!(body["coupons"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn progress_follows_member_activity() {
    let app = TestApp::new().await;
    let token = app.signup("walker").await;
    let job_id = app.seed_job("品出しスタッフ").await;

    let (_, body) = app.send("GET", "/api/progress", Some(&token), None).await;
    assert_eq!(body["current_step"], 1);
    assert_eq!(body["map_position"], 1);

    let (status, body) = app
        .send("POST", &format!("/api/jobs/{job_id}/apply"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["created"], true);
    assert_eq!(body["consultant_name"], "担当コンサルタント");

    let (_, body) = app
        .send("POST", &format!("/api/jobs/{job_id}/apply"), Some(&token), None)
        .await;
    assert_eq!(body["created"], false);

    let (_, body) = app.send("GET", "/api/progress", Some(&token), None).await;
    assert_eq!(body["current_step"], 2);
    assert_eq!(body["predicates"]["has_applied"], true);
    assert_eq!(body["predicates"]["has_profile"], false);

    // no writes in between: same answer
    let (_, again) = app.send("GET", "/api/progress", Some(&token), None).await;
    assert_eq!(again, body);

    app.send("POST", "/api/work-logs", Some(&token), Some(json!({ "date": "2024-06-01", "amount": 800 })))
        .await;
    let (_, body) = app.send("GET", "/api/progress", Some(&token), None).await;
    assert_eq!(body["current_step"], 3);
    assert_eq!(body["map_position"], 2);
}

#[tokio::test]
async fn consult_answers_anonymous_and_logged_in_callers() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let token = app.signup("asker").await;

    let (status, body) = app
        .send("POST", "/api/consult", None, Some(json!({ "user_input": "履歴書の書き方を教えて" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "keyword");

    let (status, _) = app
        .send(
            "POST",
            "/api/consult/templates",
            Some(&token),
            Some(json!({ "question": "交通費は出ますか", "answer": "求人ごとに異なります" })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .send(
            "POST",
            "/api/consult/templates",
            Some(&admin),
            Some(json!({ "question": "交通費は出ますか", "answer": "求人ごとに異なります" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app
        .send("POST", "/api/consult", Some(&token), Some(json!({ "message": "交通費" })))
        .await;
    assert_eq!(body["source"], "template_partial");
    assert_eq!(body["response"], "求人ごとに異なります");

    let (status, _) = app
        .send("POST", "/api/consult", Some(&token), Some(json!({ "message": "   " })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.send("GET", "/api/consult/history", Some(&token), None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn only_admins_create_jobs() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let token = app.signup("seeker").await;

    let payload = json!({
        "title": "軽作業",
        "company": "倉庫",
        "location": "埼玉県",
        "salary": "日給8000円",
        "description": "未経験歓迎"
    });

    let (status, _) = app.send("POST", "/api/jobs", Some(&token), Some(payload.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app.send("POST", "/api/jobs", Some(&admin), Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_i64().unwrap();

    let (status, body) = app.send("GET", &format!("/api/jobs/{id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "軽作業");

    let (status, body) = app.send("GET", "/api/jobs/999999", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), ErrorCode::JobNotFound.code() as u64);
}
