use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use chrono::NaiveDate;
use derive_more::Display;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Display)]
pub enum AnalyticsError {
    #[display(fmt = "database error: {}", _0)]
    Database(Arc<sqlx::Error>),

    #[display(fmt = "invalid date range: {} is after {}", from, to)]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    #[display(fmt = "failed to encode chart configuration: {}", _0)]
    Encode(serde_json::Error),
}

impl std::error::Error for AnalyticsError {}

impl From<sqlx::Error> for AnalyticsError {
    fn from(e: sqlx::Error) -> Self {
        AnalyticsError::Database(Arc::new(e))
    }
}

impl From<serde_json::Error> for AnalyticsError {
    fn from(e: serde_json::Error) -> Self {
        AnalyticsError::Encode(e)
    }
}

impl ResponseError for AnalyticsError {
    fn status_code(&self) -> StatusCode {
        match self {
            AnalyticsError::InvalidRange { .. } => StatusCode::BAD_REQUEST,
            AnalyticsError::Database(_) | AnalyticsError::Encode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AnalyticsError::InvalidRange { .. } => {
                HttpResponse::BadRequest().json(json!({ "message": self.to_string() }))
            }
            // details stay in the log
            _ => {
                tracing::error!(error = %self, "Analytics request failed");
                HttpResponse::build(self.status_code())
                    .json(json!({ "message": "Internal Server Error" }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn invalid_range_is_a_bad_request_with_reason() {
        let err = AnalyticsError::InvalidRange {
            from: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        };
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            value["message"],
            "invalid date range: 2026-02-01 is after 2026-01-01"
        );
    }

    #[actix_web::test]
    async fn database_error_hides_details() {
        let err = AnalyticsError::from(sqlx::Error::RowNotFound);
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["message"], "Internal Server Error");
    }
}
