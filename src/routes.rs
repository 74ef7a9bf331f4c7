use crate::{api::analytics, auth::middleware::auth_middleware, config::Config};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};
use std::sync::Arc;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-scope limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let requests_per_min = requests_per_min.max(1);
        let per_ms = (60_000 / requests_per_min as u64).max(1);
        let cfg = GovernorConfigBuilder::default()
            .milliseconds_per_request(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .expect("period and burst size are non-zero");
        Governor::new(&cfg)
    }

    let protected_limiter = Arc::new(build_limiter(config.rate_protected_per_min));

    // Protected routes
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(from_fn(auth_middleware)) // authentication
            .wrap(protected_limiter) // rate limiting
            .service(
                web::scope("/analytics")
                    .service(web::resource("/summary").route(web::get().to(analytics::summary)))
                    .service(web::resource("/charts").route(web::get().to(analytics::charts)))
                    .service(web::resource("/records").route(web::get().to(analytics::records)))
                    .service(
                        web::resource("/categories").route(web::get().to(analytics::categories)),
                    )
                    .service(
                        web::resource("/employees").route(web::get().to(analytics::employees)),
                    )
                    .service(
                        web::resource("/dashboard").route(web::get().to(analytics::dashboard)),
                    )
                    .service(web::resource("/refresh").route(web::post().to(analytics::refresh))),
            ),
    );
}

// REQUEST
//  └─ rate limiter (per peer IP)
//       └─ Authorization: Bearer access_token, HR or Admin role only
//            └─ handler
