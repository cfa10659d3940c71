// bcrypt is CPU heavy; both operations run on the blocking pool so the
// request executor is never stalled.

pub async fn hash(password: String, cost: u32) -> Result<String, String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|err| {
            tracing::error!("Password hashing task failed: {:?}", err);
            "Failed to hash password".to_string()
        })?
        .map_err(|err| {
            tracing::error!("Failed to hash password: {:?}", err);
            "Failed to hash password".to_string()
        })
}

pub async fn verify(password: String, hashed: String) -> Result<bool, String> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hashed))
        .await
        .map_err(|err| {
            tracing::error!("Password verification task failed: {:?}", err);
            "Failed to verify password".to_string()
        })?
        .map_err(|err| {
            tracing::error!("Failed to verify password: {:?}", err);
            "Failed to verify password".to_string()
        })
}
