use edusite::configuration::{get_configuration, DatabaseSettings, Settings};
use edusite::models;
use sqlx::{Connection, Executor, PgConnection, PgPool};

pub const TEST_PASSWORD: &str = "test-password-123";

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

pub async fn spawn_app_with_configuration(mut configuration: Settings) -> Option<TestApp> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let server = edusite::startup::run(listener, connection_pool.clone(), configuration)
        .await
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    Some(TestApp {
        address,
        db_pool: connection_pool,
    })
}

pub async fn spawn_app() -> Option<TestApp> {
    let mut configuration = get_configuration().expect("Failed to get configuration");
    // Cheap hashes keep the suite fast.
    configuration.auth.bcrypt_cost = 4;

    spawn_app_with_configuration(configuration).await
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}

#[allow(dead_code)]
pub async fn seed_user(
    pool: &PgPool,
    email: &str,
    password: &str,
    role: models::UserRole,
) -> models::User {
    let password_hash = edusite::services::password::hash(password.to_string(), 4)
        .await
        .expect("Failed to hash password");

    let user = models::User {
        email: email.to_string(),
        password_hash,
        full_name: "Test User".to_string(),
        role,
        is_active: true,
        ..models::User::default()
    };

    edusite::db::user::insert(pool, user)
        .await
        .expect("Failed to seed user")
}

#[allow(dead_code)]
pub async fn login(address: &str, email: &str, password: &str) -> String {
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/auth/login", address))
        .json(&serde_json::json!({"email": email, "password": password}))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(
        response.status().is_success(),
        "login during test setup failed"
    );
    let body: serde_json::Value = response.json().await.expect("login response was not json");
    body["item"]["token"]
        .as_str()
        .expect("token missing from login response")
        .to_string()
}

/// Seeds an account with the given role and hands back a bearer token for it.
#[allow(dead_code)]
pub async fn auth_token(app: &TestApp, email: &str, role: models::UserRole) -> String {
    seed_user(&app.db_pool, email, TEST_PASSWORD, role).await;
    login(&app.address, email, TEST_PASSWORD).await
}
