mod common;

use edusite::models::UserRole;

fn sample_product(slug: &str) -> serde_json::Value {
    serde_json::json!({
        "name": "Grade 10 Maths Package",
        "slug": slug,
        "description": "Weekly lessons with a dedicated tutor.",
        "price": 1499.0,
        "product_type": "tutoring",
        "category": "Mathematics",
    })
}

#[tokio::test]
async fn create_applies_defaults_and_round_trips() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();
    let token = common::auth_token(&app, "editor@example.com", UserRole::Editor).await;

    let created = client
        .post(format!("{}/products", &app.address))
        .bearer_auth(&token)
        .json(&sample_product("grade-10-maths"))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(created.status().as_u16(), 201);
    let created: serde_json::Value = created.json().await.expect("body was not json");
    assert_eq!(created["item"]["currency"], "R");
    assert_eq!(created["item"]["subjects_count"], 1);
    assert_eq!(created["item"]["is_active"], true);
    assert_eq!(created["item"]["is_featured"], false);

    let fetched = client
        .get(format!("{}/products/slug/grade-10-maths", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(fetched.status().is_success());
    let fetched: serde_json::Value = fetched.json().await.expect("body was not json");
    assert_eq!(fetched["item"]["name"], "Grade 10 Maths Package");
    assert_eq!(fetched["item"]["price"], 1499.0);
}

#[tokio::test]
async fn category_and_active_filters_combine_with_fixed_ordering() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();
    let token = common::auth_token(&app, "editor@example.com", UserRole::Editor).await;

    for (name, slug, category, order, active) in [
        ("Physics Later", "physics-later", "Sciences", 2, true),
        ("Physics First", "physics-first", "Sciences", 1, true),
        ("Physics Retired", "physics-retired", "Sciences", 0, false),
        ("Maths Only", "maths-only", "Mathematics", 0, true),
    ] {
        let mut product = sample_product(slug);
        product["name"] = serde_json::json!(name);
        product["category"] = serde_json::json!(category);
        product["display_order"] = serde_json::json!(order);
        product["is_active"] = serde_json::json!(active);
        let response = client
            .post(format!("{}/products", &app.address))
            .bearer_auth(&token)
            .json(&product)
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(response.status().as_u16(), 201);
    }

    let response = client
        .get(format!(
            "{}/products?category=Sciences&active=true",
            &app.address
        ))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("body was not json");
    let names: Vec<&str> = body["list"]
        .as_array()
        .expect("list missing")
        .iter()
        .map(|product| product["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Physics First", "Physics Later"]);

    // The dedicated category route only ever serves active records.
    let shelf = client
        .get(format!("{}/products/category/Sciences", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    let shelf: serde_json::Value = shelf.json().await.expect("body was not json");
    let shelf_names: Vec<&str> = shelf["list"]
        .as_array()
        .unwrap()
        .iter()
        .map(|product| product["name"].as_str().unwrap())
        .collect();
    assert_eq!(shelf_names, vec!["Physics First", "Physics Later"]);
}

#[tokio::test]
async fn duplicate_slugs_conflict() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();
    let token = common::auth_token(&app, "editor@example.com", UserRole::Editor).await;

    let first = client
        .post(format!("{}/products", &app.address))
        .bearer_auth(&token)
        .json(&sample_product("combo-deal"))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(first.status().as_u16(), 201);

    let second = client
        .post(format!("{}/products", &app.address))
        .bearer_auth(&token)
        .json(&sample_product("combo-deal"))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(second.status().as_u16(), 409);
    let body: serde_json::Value = second.json().await.expect("body was not json");
    assert_eq!(body["error"], "Slug already exists");
}

#[tokio::test]
async fn update_reprices_without_losing_the_rest() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();
    let token = common::auth_token(&app, "editor@example.com", UserRole::Editor).await;

    let created = client
        .post(format!("{}/products", &app.address))
        .bearer_auth(&token)
        .json(&sample_product("repriced"))
        .send()
        .await
        .expect("Failed to execute request.");
    let created: serde_json::Value = created.json().await.expect("body was not json");
    let id = created["id"].as_i64().unwrap();

    let updated = client
        .put(format!("{}/products/{}", &app.address, id))
        .bearer_auth(&token)
        .json(&serde_json::json!({"price": 1799.0, "is_featured": true}))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(updated.status().is_success());
    let updated: serde_json::Value = updated.json().await.expect("body was not json");
    assert_eq!(updated["item"]["price"], 1799.0);
    assert_eq!(updated["item"]["is_featured"], true);
    assert_eq!(updated["item"]["name"], created["item"]["name"]);
    assert_eq!(updated["item"]["currency"], "R");
}

#[tokio::test]
async fn delete_is_admin_only() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();
    let editor_token = common::auth_token(&app, "editor@example.com", UserRole::Editor).await;
    let admin_token = common::auth_token(&app, "admin@example.com", UserRole::Admin).await;

    let created = client
        .post(format!("{}/products", &app.address))
        .bearer_auth(&editor_token)
        .json(&sample_product("doomed"))
        .send()
        .await
        .expect("Failed to execute request.");
    let created: serde_json::Value = created.json().await.expect("body was not json");
    let id = created["id"].as_i64().unwrap();

    let forbidden = client
        .delete(format!("{}/products/{}", &app.address, id))
        .bearer_auth(&editor_token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(forbidden.status().as_u16(), 403);

    let deleted = client
        .delete(format!("{}/products/{}", &app.address, id))
        .bearer_auth(&admin_token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(deleted.status().is_success());

    let gone = client
        .get(format!("{}/products/{}", &app.address, id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(gone.status().as_u16(), 404);
    let body: serde_json::Value = gone.json().await.expect("body was not json");
    assert_eq!(body["error"], "Product not found");
}
