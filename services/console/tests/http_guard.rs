mod common;

use axum::http::StatusCode;
use common::{app, location, read_json, session_cookie};
use http_helpers::get;
use tower::ServiceExt;

#[tokio::test]
async fn unauthenticated_settings_redirects_to_login() {
    let response = app()
        .oneshot(get("/dashboard/settings", None))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login?redirect=/dashboard/settings");
}

#[tokio::test]
async fn viewer_on_admin_redirects_home() {
    let cookie = session_cookie("Viewer");
    let response = app()
        .oneshot(get("/admin", Some(&cookie)))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn admin_on_admin_lists_users() {
    let cookie = session_cookie("Admin");
    let response = app()
        .oneshot(get("/admin", Some(&cookie)))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let users = body["users"].as_array().expect("users");
    assert_eq!(users.len(), 3);
    assert!(users.iter().all(|user| user.get("password").is_none()));
    assert_eq!(body["can_delete"], true);
}

#[tokio::test]
async fn unknown_role_is_sent_home_not_to_login() {
    let cookie = session_cookie("moderator");
    let response = app()
        .oneshot(get("/dashboard", Some(&cookie)))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn garbage_cookie_counts_as_signed_out() {
    let response = app()
        .oneshot(get("/dashboard", Some("user=not-a-session")))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login?redirect=/dashboard");
}

#[tokio::test]
async fn unprotected_paths_pass_the_guard() {
    let response = app()
        .oneshot(get("/about", None))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(response).await["code"], "not_found");

    let response = app()
        .oneshot(get("/v1/system/health", None))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["status"], "ok");

    let response = app()
        .oneshot(get("/v1/openapi.json", None))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert!(body["paths"].get("/dashboard").is_some());
}

#[tokio::test]
async fn unknown_protected_paths_are_guarded_before_404() {
    let response = app()
        .oneshot(get("/admin/unknown", None))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login?redirect=/admin/unknown");

    let cookie = session_cookie("Admin");
    let response = app()
        .oneshot(get("/admin/unknown", Some(&cookie)))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn analyst_reaches_dashboard_but_not_settings() {
    let cookie = session_cookie("Analyst");

    // The /dashboard prefix admits the analyst; the settings gate does not.
    let response = app()
        .oneshot(get("/dashboard/settings", Some(&cookie)))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(read_json(response).await["code"], "forbidden");

    let response = app()
        .oneshot(get("/settings", Some(&cookie)))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn admin_settings_are_editable() {
    let cookie = session_cookie("Admin");
    for path in ["/settings", "/dashboard/settings"] {
        let response = app()
            .oneshot(get(path, Some(&cookie)))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        let body = read_json(response).await;
        assert_eq!(body["editable"], true);
        assert_eq!(body["session_max_age_secs"], 86_400);
    }
}

#[tokio::test]
async fn viewer_dashboard_is_read_only() {
    let cookie = session_cookie("Viewer");
    let response = app()
        .oneshot(get("/dashboard", Some(&cookie)))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["principal"]["role"], "Viewer");

    let nav: Vec<&str> = body["navigation"]
        .as_array()
        .expect("navigation")
        .iter()
        .filter_map(|item| item["name"].as_str())
        .collect();
    assert!(nav.contains(&"Dashboard"));
    assert!(!nav.contains(&"User Management"));

    let panels = body["panels"].as_array().expect("panels");
    assert!(panels.iter().all(|panel| panel["create_button"].is_null()));
    assert!(panels.iter().all(|panel| panel["id"] != "users"));
}

#[tokio::test]
async fn permissions_are_sorted_strings() {
    let cookie = session_cookie("Analyst");
    let response = app()
        .oneshot(get("/dashboard/permissions", Some(&cookie)))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let permissions: Vec<&str> = body["permissions"]
        .as_array()
        .expect("permissions")
        .iter()
        .filter_map(|value| value.as_str())
        .collect();
    assert_eq!(permissions.len(), 11);
    let mut sorted = permissions.clone();
    sorted.sort_unstable();
    assert_eq!(permissions, sorted);
    assert!(permissions.contains(&"edit:agents"));
    assert!(!permissions.contains(&"delete:agents"));
    assert!(!body["features"]
        .as_array()
        .expect("features")
        .iter()
        .any(|feature| feature == "users"));
}
