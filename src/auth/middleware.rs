use crate::auth::auth::AuthUser;
use crate::auth::jwt::verify_token;
use crate::config::Config;
use crate::model::role::Role;
use actix_web::middleware::Next;
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header::AUTHORIZATION,
    web::Data,
};
use serde_json::json;
use tracing::{debug, warn};

/// Why a request was turned away before reaching an analytics handler.
#[derive(Debug, PartialEq, Eq)]
enum Rejection {
    MissingHeader,
    MalformedHeader,
    InvalidToken,
    UnknownRole(u8),
    Forbidden(Role),
}

impl Rejection {
    fn into_response(self) -> HttpResponse {
        match self {
            Rejection::MissingHeader => {
                HttpResponse::Unauthorized().json(json!({"error": "Missing Authorization header"}))
            }
            Rejection::MalformedHeader => HttpResponse::Unauthorized()
                .json(json!({"error": "Authorization header must be a Bearer token"})),
            Rejection::InvalidToken => {
                HttpResponse::Unauthorized().json(json!({"error": "Invalid or expired token"}))
            }
            Rejection::UnknownRole(_) => {
                HttpResponse::Unauthorized().json(json!({"error": "Invalid role"}))
            }
            Rejection::Forbidden(_) => {
                HttpResponse::Forbidden().json(json!({"error": "HR/Admin only"}))
            }
        }
    }
}

/// Resolves the caller from the bearer token and checks the analytics role gate.
fn authorize(header: Option<&str>, secret: &str) -> Result<AuthUser, Rejection> {
    let token = header
        .ok_or(Rejection::MissingHeader)?
        .strip_prefix("Bearer ")
        .ok_or(Rejection::MalformedHeader)?;

    let claims = verify_token(token, secret).map_err(|e| {
        // token errors stay in the log
        debug!(error = %e, "Rejected bearer token");
        Rejection::InvalidToken
    })?;

    let role = Role::from_id(claims.role).ok_or(Rejection::UnknownRole(claims.role))?;

    if !role.can_read_analytics() {
        return Err(Rejection::Forbidden(role));
    }

    Ok(AuthUser {
        user_id: claims.user_id,
        username: claims.sub,
        role,
    })
}

pub async fn auth_middleware(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let config = req
        .app_data::<Data<Config>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("App config missing"))?;

    let header = req
        .headers()
        .get(AUTHORIZATION)
        .map(|h| h.to_str().unwrap_or_default());

    match authorize(header, &config.jwt_secret) {
        Ok(auth_user) => {
            req.extensions_mut().insert(auth_user);
            next.call(req).await
        }
        Err(rejection) => {
            warn!(path = %req.path(), reason = ?rejection, "Analytics request rejected");
            let resp = rejection.into_response();
            Ok(req.into_response(resp.map_into_boxed_body()))
        }
    }
}
