mod common;

use edusite::models::UserRole;

#[tokio::test]
async fn login_returns_token_and_profile() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();
    common::seed_user(
        &app.db_pool,
        "admin@example.com",
        common::TEST_PASSWORD,
        UserRole::Admin,
    )
    .await;

    let response = client
        .post(format!("{}/auth/login", &app.address))
        .json(&serde_json::json!({
            "email": "admin@example.com",
            "password": common::TEST_PASSWORD,
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("body was not json");
    assert!(!body["item"]["token"].as_str().unwrap_or("").is_empty());
    assert_eq!(body["item"]["user"]["email"], "admin@example.com");
    assert_eq!(body["item"]["user"]["role"], "admin");
    assert!(body["item"]["user"].get("password_hash").is_none());

    let last_login: Option<chrono::DateTime<chrono::Utc>> =
        sqlx::query_scalar("SELECT last_login FROM users WHERE email = $1")
            .bind("admin@example.com")
            .fetch_one(&app.db_pool)
            .await
            .expect("Failed to read last_login");
    assert!(last_login.is_some());
}

#[tokio::test]
async fn login_normalizes_email_case_and_whitespace() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    common::seed_user(
        &app.db_pool,
        "editor@example.com",
        common::TEST_PASSWORD,
        UserRole::Editor,
    )
    .await;

    let token = common::login(&app.address, "  Editor@Example.COM ", common::TEST_PASSWORD).await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();
    common::seed_user(
        &app.db_pool,
        "admin@example.com",
        common::TEST_PASSWORD,
        UserRole::Admin,
    )
    .await;

    let unknown = client
        .post(format!("{}/auth/login", &app.address))
        .json(&serde_json::json!({"email": "nobody@example.com", "password": "whatever-pass"}))
        .send()
        .await
        .expect("Failed to execute request.");
    let wrong = client
        .post(format!("{}/auth/login", &app.address))
        .json(&serde_json::json!({"email": "admin@example.com", "password": "wrong-password"}))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(unknown.status().as_u16(), 401);
    assert_eq!(wrong.status().as_u16(), 401);

    let unknown_body: serde_json::Value = unknown.json().await.expect("body was not json");
    let wrong_body: serde_json::Value = wrong.json().await.expect("body was not json");
    assert_eq!(unknown_body, wrong_body);
    assert_eq!(unknown_body["error"], "Invalid email or password");
}

#[tokio::test]
async fn login_ignores_inactive_accounts() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();
    common::seed_user(
        &app.db_pool,
        "gone@example.com",
        common::TEST_PASSWORD,
        UserRole::Editor,
    )
    .await;
    sqlx::query("UPDATE users SET is_active = FALSE WHERE email = $1")
        .bind("gone@example.com")
        .execute(&app.db_pool)
        .await
        .expect("Failed to deactivate user");

    let response = client
        .post(format!("{}/auth/login", &app.address))
        .json(&serde_json::json!({
            "email": "gone@example.com",
            "password": common::TEST_PASSWORD,
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn register_requires_admin_role() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();
    let editor_token = common::auth_token(&app, "editor@example.com", UserRole::Editor).await;

    let payload = serde_json::json!({
        "email": "new@example.com",
        "password": "longenough-pass",
        "full_name": "New User",
    });

    let forbidden = client
        .post(format!("{}/auth/register", &app.address))
        .bearer_auth(&editor_token)
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(forbidden.status().as_u16(), 403);
    let body: serde_json::Value = forbidden.json().await.expect("body was not json");
    assert_eq!(body["error"], "Insufficient permissions");

    let unauthorized = client
        .post(format!("{}/auth/register", &app.address))
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(unauthorized.status().as_u16(), 401);
}

#[tokio::test]
async fn register_creates_account_and_rejects_duplicates() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();
    let admin_token = common::auth_token(&app, "admin@example.com", UserRole::Admin).await;

    let payload = serde_json::json!({
        "email": "staff@example.com",
        "password": "longenough-pass",
        "full_name": "Staff Member",
    });

    let created = client
        .post(format!("{}/auth/register", &app.address))
        .bearer_auth(&admin_token)
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(created.status().as_u16(), 201);
    let body: serde_json::Value = created.json().await.expect("body was not json");
    // Role falls back to editor when the caller didn't pick one.
    assert_eq!(body["item"]["user"]["role"], "editor");
    assert!(!body["item"]["token"].as_str().unwrap_or("").is_empty());

    // The fresh token works right away.
    let me = client
        .get(format!("{}/auth/me", &app.address))
        .bearer_auth(body["item"]["token"].as_str().unwrap())
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(me.status().is_success());

    let duplicate = client
        .post(format!("{}/auth/register", &app.address))
        .bearer_auth(&admin_token)
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(duplicate.status().as_u16(), 409);
    let body: serde_json::Value = duplicate.json().await.expect("body was not json");
    assert_eq!(body["error"], "User already exists with this email");
}

#[tokio::test]
async fn register_rejects_short_passwords() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();
    let admin_token = common::auth_token(&app, "admin@example.com", UserRole::Admin).await;

    let response = client
        .post(format!("{}/auth/register", &app.address))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({
            "email": "weak@example.com",
            "password": "short",
            "full_name": "Weak",
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn me_returns_the_callers_profile() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();
    let token = common::auth_token(&app, "viewer@example.com", UserRole::Viewer).await;

    let response = client
        .get(format!("{}/auth/me", &app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("body was not json");
    assert_eq!(body["item"]["email"], "viewer@example.com");
    assert_eq!(body["item"]["role"], "viewer");
    assert!(body["item"].get("password_hash").is_none());
}

#[tokio::test]
async fn garbage_tokens_never_reach_a_handler() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/auth/me", &app.address))
        .bearer_auth("definitely.not.a-jwt")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 401);
    let body: serde_json::Value = response.json().await.expect("body was not json");
    assert_eq!(body["error"], "Invalid token");
}

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/auth/me", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 401);
    let body: serde_json::Value = response.json().await.expect("body was not json");
    assert_eq!(body["error"], "Not authenticated");
}

#[tokio::test]
async fn change_password_verifies_the_current_one() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();
    let token = common::auth_token(&app, "editor@example.com", UserRole::Editor).await;

    let rejected = client
        .post(format!("{}/auth/change_password", &app.address))
        .bearer_auth(&token)
        .json(&serde_json::json!({
            "current_password": "not-the-password",
            "new_password": "brand-new-pass",
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(rejected.status().as_u16(), 400);
    let body: serde_json::Value = rejected.json().await.expect("body was not json");
    assert_eq!(body["error"], "Current password is incorrect");

    let accepted = client
        .post(format!("{}/auth/change_password", &app.address))
        .bearer_auth(&token)
        .json(&serde_json::json!({
            "current_password": common::TEST_PASSWORD,
            "new_password": "brand-new-pass",
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(accepted.status().is_success());

    // Old credential is dead, the new one works.
    let old = client
        .post(format!("{}/auth/login", &app.address))
        .json(&serde_json::json!({
            "email": "editor@example.com",
            "password": common::TEST_PASSWORD,
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(old.status().as_u16(), 401);

    let new = common::login(&app.address, "editor@example.com", "brand-new-pass").await;
    assert!(!new.is_empty());
}
