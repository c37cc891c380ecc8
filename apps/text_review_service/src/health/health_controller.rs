use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct Health {
    pub message: &'static str,
}

pub async fn health() -> Json<Health> {
    Json(Health {
        message: "Hello from the text review service!",
    })
}
