use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::models::NewUser;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    let Json(body) = body?;
    let email = body.email.clone();

    state
        .auth_service
        .register(body.into_new_user())
        .await
        .map_err(|e| {
            tracing::warn!(email = %email, error = %e, "Registration rejected");
            ApiError::from(e)
        })?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        RegisterResponseData { email },
    ))
}

/// HTTP request body for registering an account (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    name: String,
    email: String,
    password: String,
}

impl RegisterRequestBody {
    fn into_new_user(self) -> NewUser {
        NewUser::new(self.name, self.email, self.password)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub email: String,
}
