pub mod dashboard;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::applications::handlers as applications;
use crate::auth::handlers as auth;
use crate::auth::middleware::require_session;
use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::profiles::handlers as profiles;
use crate::state::AppState;

/// Room for the text fields of a multipart application on top of the resume itself.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_resume_bytes + FORM_OVERHEAD_BYTES;

    let session_only = Router::new()
        .route("/api/v1/auth/me", get(auth::handle_me))
        .route(
            "/api/v1/profile",
            get(profiles::handle_get_profile).put(profiles::handle_save_profile),
        )
        .route(
            "/api/v1/recommendations",
            get(matching::handle_recommendations),
        )
        .route("/api/v1/dashboard", get(dashboard::handle_dashboard))
        .route(
            "/api/v1/jobs/:id/applications",
            post(applications::handle_submit_application),
        )
        .route_layer(from_fn_with_state(state.clone(), require_session));

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/auth/signup", post(auth::handle_signup))
        .route("/api/v1/auth/login", post(auth::handle_login))
        .route("/api/v1/auth/logout", post(auth::handle_logout))
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        .merge(session_only)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::SessionGate;
    use crate::config::Config;
    use crate::models::user::User;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::time::Duration;
    use tower::ServiceExt;

    const BOUNDARY: &str = "jobboard-test-boundary";

    fn test_app() -> Router {
        build_router(AppState::seeded(Config::default(), SessionGate::in_memory()))
    }

    fn test_state() -> AppState {
        AppState::seeded(Config::default(), SessionGate::in_memory())
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

    fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    fn multipart_request(uri: &str, token: &str, fields: &[(&str, &str)], resume: Option<&[u8]>) -> Request<Body> {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some(bytes) = resume {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"cv.pdf\"\r\nContent-Type: application/pdf\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body))
            .unwrap()
    }

    async fn login(app: &Router, email: &str) -> String {
        let (status, body) = send(
            app,
            json_request(
                "POST",
                "/api/v1/auth/login",
                None,
                json!({"email": email, "password": "whatever"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }

    const APPLICATION_FIELDS: &[(&str, &str)] = &[
        ("full_name", "Test User"),
        ("email", "test@example.com"),
        ("phone", "555-0100"),
        ("cover_letter", "Keen to help."),
        ("availability", "immediate"),
    ];

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&test_app(), get_request("/health", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_login_unknown_email_rejected() {
        let (status, body) = send(
            &test_app(),
            json_request(
                "POST",
                "/api/v1/auth/login",
                None,
                json!({"email": "ghost@example.com", "password": "secret1"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }

    #[tokio::test]
    async fn test_signup_duplicate_email_conflicts() {
        let (status, body) = send(
            &test_app(),
            json_request(
                "POST",
                "/api/v1/auth/signup",
                None,
                json!({
                    "name": "Again",
                    "email": "test@example.com",
                    "password": "secret1",
                    "confirm_password": "secret1"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "DUPLICATE_USER");
    }

    #[tokio::test]
    async fn test_signup_opens_session() {
        let app = test_app();
        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/v1/auth/signup",
                None,
                json!({
                    "name": "Sam Lee",
                    "email": "sam@example.com",
                    "password": "secret1",
                    "confirm_password": "secret1"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["user"]["id"], "3");
        assert_eq!(body["user"]["profile_completed"], false);

        let token = body["token"].as_str().unwrap();
        let (status, me) = send(&app, get_request("/api/v1/auth/me", Some(token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(me["email"], "sam@example.com");
    }

    #[tokio::test]
    async fn test_protected_routes_require_session() {
        let app = test_app();
        for uri in ["/api/v1/auth/me", "/api/v1/profile", "/api/v1/recommendations", "/api/v1/dashboard"] {
            let (status, body) = send(&app, get_request(uri, None)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
            assert_eq!(body["error"]["code"], "UNAUTHORIZED");
        }
        let (status, _) = send(&app, get_request("/api/v1/auth/me", Some("not-a-token"))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_session_for_unknown_user_is_ended() {
        // A snapshot can restore a session whose user was never re-seeded.
        let state = test_state();
        let ghost = User {
            id: "3".to_string(),
            name: "Gone".to_string(),
            email: "gone@example.com".to_string(),
            profile_completed: false,
        };
        let token = state.sessions.begin(ghost).await.unwrap().token.to_string();
        let app = build_router(state.clone());

        for uri in ["/api/v1/dashboard", "/api/v1/auth/me"] {
            // The first request ends the session; later ones see no session at all.
            let (status, _) = send(&app, get_request(uri, Some(&token))).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        }
        assert!(state.sessions.current().is_none());
    }

    #[tokio::test]
    async fn test_session_for_unknown_user_cannot_write_profile() {
        let state = test_state();
        let ghost = User {
            id: "3".to_string(),
            name: "Gone".to_string(),
            email: "gone@example.com".to_string(),
            profile_completed: false,
        };
        let token = state.sessions.begin(ghost).await.unwrap().token.to_string();
        let app = build_router(state.clone());

        let (status, _) = send(
            &app,
            json_request(
                "PUT",
                "/api/v1/profile",
                Some(&token),
                json!({"name": "Gone", "location": "Nowhere", "years_of_experience": 1}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(state.profiles.get("3").await.unwrap().is_none());

        // Whoever signs up next and receives id "3" starts without a profile.
        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/v1/auth/signup",
                None,
                json!({
                    "name": "Fresh",
                    "email": "fresh@example.com",
                    "password": "secret1",
                    "confirm_password": "secret1"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["user"]["id"], "3");
        assert_eq!(body["user"]["profile_completed"], false);
    }

    #[tokio::test]
    async fn test_logout_invalidates_token() {
        let app = test_app();
        let token = login(&app, "test@example.com").await;

        let (status, me) = send(&app, get_request("/api/v1/auth/me", Some(&token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(me["profile_completed"], true);

        let (status, _) = send(&app, json_request("POST", "/api/v1/auth/logout", None, json!({}))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, get_request("/api/v1/auth/me", Some(&token))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_second_login_replaces_first_session() {
        let app = test_app();
        let first = login(&app, "test@example.com").await;
        let second = login(&app, "jane@example.com").await;

        let (status, _) = send(&app, get_request("/api/v1/auth/me", Some(&first))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let (status, me) = send(&app, get_request("/api/v1/auth/me", Some(&second))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(me["id"], "2");
    }

    #[tokio::test]
    async fn test_job_listing_filters() {
        let (status, body) = send(
            &test_app(),
            get_request("/api/v1/jobs?search=react&job_type=remote", None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|j| j["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["1", "3", "7"]);
    }

    #[tokio::test]
    async fn test_get_job_by_id() {
        let app = test_app();
        let (status, body) = send(&app, get_request("/api/v1/jobs/4", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "UI/UX Designer");
        assert_eq!(body["job_type"], "onsite");

        let (status, body) = send(&app, get_request("/api/v1/jobs/42", None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_recommendations_for_seed_user() {
        let app = test_app();
        let token = login(&app, "test@example.com").await;

        let (status, body) = send(&app, get_request("/api/v1/recommendations", Some(&token))).await;
        assert_eq!(status, StatusCode::OK);
        let recs = body["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0]["job"]["id"], "3");
        assert_eq!(recs[0]["match_score"], 76);
        assert_eq!(
            recs[0]["matched_skills"],
            json!(["JavaScript", "React", "Node.js"])
        );
        assert_eq!(body["scorer_backend"], "weighted");
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_latency_applies_per_request() {
        let config = Config {
            simulated_latency_ms: 500,
            ..Config::default()
        };
        let app = build_router(AppState::seeded(config, SessionGate::in_memory()));
        let token = login(&app, "test@example.com").await;

        let started = tokio::time::Instant::now();
        let (status, _) = send(&app, get_request("/api/v1/jobs", None)).await;
        assert_eq!(status, StatusCode::OK);
        let jobs_elapsed = started.elapsed();
        assert!(jobs_elapsed >= Duration::from_millis(500), "{jobs_elapsed:?}");
        assert!(jobs_elapsed < Duration::from_millis(1000), "{jobs_elapsed:?}");

        // Recommendations wait once for the lookup and once more for scoring.
        let started = tokio::time::Instant::now();
        let (status, _) = send(&app, get_request("/api/v1/recommendations", Some(&token))).await;
        assert_eq!(status, StatusCode::OK);
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(1000), "{elapsed:?}");
    }

    #[tokio::test]
    async fn test_profile_save_enables_recommendations() {
        let app = test_app();
        let token = login(&app, "jane@example.com").await;

        let (status, _) = send(&app, get_request("/api/v1/recommendations", Some(&token))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, get_request("/api/v1/profile", Some(&token))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, saved) = send(
            &app,
            json_request(
                "PUT",
                "/api/v1/profile",
                Some(&token),
                json!({
                    "user_id": "1",
                    "name": "Jane Doe",
                    "location": "Boston, MA",
                    "years_of_experience": 4,
                    "skills": ["Python", "SQL", "Statistics"],
                    "preferred_job_type": "onsite"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved["user_id"], "2");

        let (_, me) = send(&app, get_request("/api/v1/auth/me", Some(&token))).await;
        assert_eq!(me["profile_completed"], true);

        let (status, body) = send(&app, get_request("/api/v1/recommendations", Some(&token))).await;
        assert_eq!(status, StatusCode::OK);
        // 3/5 skills, same city, onsite: 0.36 + 0.2 + 0.2
        assert_eq!(body["recommendations"][0]["job"]["id"], "6");
        assert_eq!(body["recommendations"][0]["match_score"], 76);
    }

    #[tokio::test]
    async fn test_profile_validation_error() {
        let app = test_app();
        let token = login(&app, "test@example.com").await;
        let (status, body) = send(
            &app,
            json_request(
                "PUT",
                "/api/v1/profile",
                Some(&token),
                json!({
                    "name": "Test User",
                    "location": "",
                    "years_of_experience": 3
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_dashboard_lists_first_three_jobs() {
        let app = test_app();
        let token = login(&app, "jane@example.com").await;
        let (status, body) = send(&app, get_request("/api/v1/dashboard", Some(&token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["id"], "2");
        assert!(body["profile"].is_null());
        let recent: Vec<_> = body["recent_jobs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|j| j["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(recent, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_submit_application() {
        let app = test_app();
        let token = login(&app, "test@example.com").await;

        let (status, body) = send(
            &app,
            multipart_request(
                "/api/v1/jobs/3/applications",
                &token,
                APPLICATION_FIELDS,
                Some(b"%PDF-1.4 resume"),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["job_id"], "3");
        assert_eq!(body["user_id"], "1");
        assert!(body["resume_url"].as_str().unwrap().starts_with("blob:"));
        assert!(body["submitted_at"].is_string());
    }

    #[tokio::test]
    async fn test_submit_application_without_resume() {
        let app = test_app();
        let token = login(&app, "test@example.com").await;
        let (status, body) = send(
            &app,
            multipart_request("/api/v1/jobs/3/applications", &token, APPLICATION_FIELDS, None),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Please upload your resume");
    }

    #[tokio::test]
    async fn test_submit_application_unknown_job() {
        let app = test_app();
        let token = login(&app, "test@example.com").await;
        let (status, _) = send(
            &app,
            multipart_request(
                "/api/v1/jobs/99/applications",
                &token,
                APPLICATION_FIELDS,
                Some(b"resume"),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
