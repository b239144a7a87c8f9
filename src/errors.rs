use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    NotFoundWhileUpdating(String),

    #[error("{message}")]
    Conflict { code: &'static str, message: String },

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::NotFoundWhileUpdating(_) => "NOT_FOUND_WHILE_UPDATING",
            AppError::Conflict { code, .. } => *code,
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Internal(_) => "INTERNAL",
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        let message = e.to_string();
        match e {
            DomainError::NotFound(_) => AppError::NotFound(message),
            DomainError::NotFoundWhileUpdating(_) => AppError::NotFoundWhileUpdating(message),
            DomainError::ExistsByName(_) => AppError::Conflict {
                code: "EXISTS_BY_NAME",
                message,
            },
            DomainError::ExistsByPhone(_) => AppError::Conflict {
                code: "EXISTS_BY_PHONE",
                message,
            },
            DomainError::InvalidInput(msg) => AppError::BadRequest(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::NotFoundWhileUpdating(_) => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Internal(detail) => {
                log::error!("Request failed: {}", detail);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": message,
            "code": self.code(),
        }))
    }
}

/// Failures while bringing the service up.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to create database connection pool: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Failed to run database migrations: {0}")]
    Migrations(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(err: AppError) -> serde_json::Value {
        let body = to_bytes(err.error_response().into_body())
            .await
            .expect("readable body");
        serde_json::from_slice(&body).expect("json body")
    }

    #[test]
    fn not_found_returns_404() {
        let err: AppError = DomainError::NotFound(404).into();
        assert_eq!(err.error_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn not_found_while_updating_is_distinct_from_read_miss() {
        let err: AppError = DomainError::NotFoundWhileUpdating(404).into();
        assert_eq!(err.error_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "NOT_FOUND_WHILE_UPDATING");
        assert_eq!(
            err.to_string(),
            "Manufacturer with id 404 not found while updating"
        );
    }

    #[test]
    fn name_conflict_returns_409() {
        let err: AppError = DomainError::ExistsByName("TestName".to_string()).into();
        assert_eq!(err.error_response().status(), StatusCode::CONFLICT);
        assert_eq!(err.code(), "EXISTS_BY_NAME");
        assert_eq!(
            err.to_string(),
            "Manufacturer with name 'TestName' already exists"
        );
    }

    #[test]
    fn phone_conflict_returns_409() {
        let err: AppError = DomainError::ExistsByPhone("+123456789".to_string()).into();
        assert_eq!(err.error_response().status(), StatusCode::CONFLICT);
        assert_eq!(err.code(), "EXISTS_BY_PHONE");
    }

    #[test]
    fn invalid_input_returns_400() {
        let err: AppError = DomainError::InvalidInput("name must not be blank".to_string()).into();
        assert_eq!(err.error_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "name must not be blank");
    }

    #[test]
    fn internal_error_returns_500() {
        let err: AppError = DomainError::Internal("oops".to_string()).into();
        assert_eq!(
            err.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn internal_error_body_hides_details() {
        let body = body_json(AppError::Internal("password=hunter2".to_string())).await;
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["code"], "INTERNAL");
    }

    #[actix_web::test]
    async fn conflict_body_names_the_field() {
        let body = body_json(DomainError::ExistsByPhone("+1".to_string()).into()).await;
        assert_eq!(body["code"], "EXISTS_BY_PHONE");
        assert_eq!(body["error"], "Manufacturer with phone number '+1' already exists");
    }
}
