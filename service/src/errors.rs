// catalog_service/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("I/O Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String), // For miscellaneous errors
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience in handlers
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<sqlx::Error>() {
      Ok(sqlx_err) => AppError::Sqlx(sqlx_err),
      Err(err) => AppError::Internal(format!("{:#}", err)),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::Config(_) | AppError::Sqlx(_) | AppError::Io(_) | AppError::Internal(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    // Same envelope as the catalog replies; details stay in the log.
    let message = match self {
      AppError::Validation(m) => m.as_str(),
      _ => "Internal server error",
    };
    HttpResponse::build(self.status_code()).json(json!({ "success": false, "message": message }))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::body::to_bytes;

  async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.error_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body()).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  #[actix_web::test]
  async fn validation_errors_are_client_errors() {
    let (status, body) = body_json(AppError::Validation("Invalid query string".to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "success": false, "message": "Invalid query string" }));
  }

  #[actix_web::test]
  async fn server_side_errors_hide_their_detail() {
    for err in [
      AppError::Config("DATABASE_URL points at prod".to_string()),
      AppError::Sqlx(sqlx::Error::PoolTimedOut),
      AppError::Internal("relation \"products\" does not exist".to_string()),
    ] {
      let (status, body) = body_json(err).await;
      assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
      assert_eq!(body, json!({ "success": false, "message": "Internal server error" }));
    }
  }

  #[test]
  fn anyhow_keeps_sqlx_errors_typed() {
    let err: AppError = anyhow::Error::new(sqlx::Error::PoolClosed).into();
    assert!(matches!(err, AppError::Sqlx(sqlx::Error::PoolClosed)));

    let err: AppError = anyhow::anyhow!("boom").into();
    assert!(matches!(err, AppError::Internal(ref m) if m == "boom"));
  }
}
