use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::AppError;

#[derive(Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct Verification {
    pub email: String,
    pub code: String,
}

#[derive(Serialize)]
pub struct AuthReply {
    pub success: bool,
    pub message: String,
}

/// Root health check.
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "CyberShield server is running!")
}

/// Auth stubs: shape-check the payload and acknowledge. No credential store
/// exists yet; the client runs fully mocked against these.
pub async fn login_handler(
    Json(payload): Json<Credentials>,
) -> Result<Json<AuthReply>, AppError> {
    if payload.email.trim().is_empty() || payload.password.is_empty() {
        return Err(AppError::MalformedPayload);
    }
    info!("Login request for {}", payload.email);
    Ok(Json(AuthReply {
        success: true,
        message: "Signed in".to_string(),
    }))
}

pub async fn register_handler(
    Json(payload): Json<Registration>,
) -> Result<Json<AuthReply>, AppError> {
    if payload.name.trim().is_empty()
        || payload.email.trim().is_empty()
        || payload.phone.trim().is_empty()
        || payload.password.is_empty()
    {
        return Err(AppError::MalformedPayload);
    }
    info!("Registration request for {}", payload.email);
    Ok(Json(AuthReply {
        success: true,
        message: "Verification email sent".to_string(),
    }))
}

pub async fn verify_handler(
    Json(payload): Json<Verification>,
) -> Result<Json<AuthReply>, AppError> {
    if payload.email.trim().is_empty() || payload.code.trim().is_empty() {
        return Err(AppError::MalformedPayload);
    }
    info!("Verification request for {}", payload.email);
    Ok(Json(AuthReply {
        success: true,
        message: "Email verified".to_string(),
    }))
}
