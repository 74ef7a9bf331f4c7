use crate::{
    analytics::{
        charts::ChartConfig,
        dashboard::{Theme, render_dashboard},
        service::{AnalyticsService, AnalyticsView, DateRange},
        tables::{CategoryRow, DetailRow},
    },
    auth::auth::AuthUser,
    config::Config,
    model::employee::Employee,
};
use actix_web::{HttpResponse, Responder, http::header::ContentType, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RangeQuery {
    /// Only records on or after this date
    #[param(example = "2026-01-01", value_type = Option<String>, format = "date")]
    pub from: Option<NaiveDate>,
    /// Only records on or before this date
    #[param(example = "2026-01-31", value_type = Option<String>, format = "date")]
    pub to: Option<NaiveDate>,
}

impl RangeQuery {
    fn range(&self) -> actix_web::Result<DateRange> {
        Ok(DateRange::new(self.from, self.to)?)
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DashboardQuery {
    #[param(example = "2026-01-01", value_type = Option<String>, format = "date")]
    pub from: Option<NaiveDate>,
    #[param(example = "2026-01-31", value_type = Option<String>, format = "date")]
    pub to: Option<NaiveDate>,
    /// `light` (default) or `dark`
    #[param(inline)]
    pub theme: Option<Theme>,
}

#[derive(Serialize, ToSchema)]
pub struct ChartsResponse {
    pub bar: ChartConfig,
    pub pie: ChartConfig,
}

#[derive(Serialize, ToSchema)]
pub struct RecordsResponse {
    pub data: Vec<DetailRow>,
    #[schema(example = 4)]
    pub total: usize,
}

#[derive(Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub data: Vec<CategoryRow>,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeesResponse {
    pub data: Vec<Employee>,
    #[schema(example = 3)]
    pub total: usize,
}

/// Category counts and names
#[utoipa::path(
    get,
    path = "/api/analytics/summary",
    params(RangeQuery),
    responses(
        (status = 200, description = "Attendance summary", body = Summary),
        (status = 400, description = "Invalid date range", body = Object, example = json!({
            "message": "invalid date range: 2026-02-01 is after 2026-01-01"
        })),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Analytics"
)]
#[instrument(skip_all, fields(user_id = auth.user_id, user = %auth.username, role = auth.role.as_ref()))]
pub async fn summary(
    auth: AuthUser,
    service: web::Data<AnalyticsService>,
    query: web::Query<RangeQuery>,
) -> actix_web::Result<impl Responder> {
    let range = query.range()?;

    let snapshot = service.snapshot().await?;
    let view = AnalyticsView::build(&snapshot, range);

    debug!(records = view.records.len(), "Serving attendance summary");
    Ok(HttpResponse::Ok().json(view.summary()))
}

/// Bar and pie chart configurations
#[utoipa::path(
    get,
    path = "/api/analytics/charts",
    params(RangeQuery),
    responses(
        (status = 200, description = "Chart.js configurations", body = ChartsResponse),
        (status = 400, description = "Invalid date range"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Analytics"
)]
#[instrument(skip_all, fields(user = %auth.username))]
pub async fn charts(
    auth: AuthUser,
    service: web::Data<AnalyticsService>,
    query: web::Query<RangeQuery>,
) -> actix_web::Result<impl Responder> {
    let range = query.range()?;

    let snapshot = service.snapshot().await?;
    let view = AnalyticsView::build(&snapshot, range);

    Ok(HttpResponse::Ok().json(ChartsResponse {
        bar: view.bar_chart(),
        pie: view.pie_chart(),
    }))
}

/// Attendance detail rows
#[utoipa::path(
    get,
    path = "/api/analytics/records",
    params(RangeQuery),
    responses(
        (status = 200, description = "One row per attendance record", body = RecordsResponse),
        (status = 400, description = "Invalid date range"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Analytics"
)]
#[instrument(skip_all, fields(user = %auth.username))]
pub async fn records(
    auth: AuthUser,
    service: web::Data<AnalyticsService>,
    query: web::Query<RangeQuery>,
) -> actix_web::Result<impl Responder> {
    let range = query.range()?;

    let snapshot = service.snapshot().await?;
    let data = AnalyticsView::build(&snapshot, range).detail_rows();

    Ok(HttpResponse::Ok().json(RecordsResponse {
        total: data.len(),
        data,
    }))
}

/// Employee names per category
#[utoipa::path(
    get,
    path = "/api/analytics/categories",
    params(RangeQuery),
    responses(
        (status = 200, description = "One row per category", body = CategoriesResponse),
        (status = 400, description = "Invalid date range"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Analytics"
)]
#[instrument(skip_all, fields(user = %auth.username))]
pub async fn categories(
    auth: AuthUser,
    service: web::Data<AnalyticsService>,
    query: web::Query<RangeQuery>,
) -> actix_web::Result<impl Responder> {
    let range = query.range()?;

    let snapshot = service.snapshot().await?;
    let data = AnalyticsView::build(&snapshot, range).category_rows();

    Ok(HttpResponse::Ok().json(CategoriesResponse { data }))
}

/// Employee roster
#[utoipa::path(
    get,
    path = "/api/analytics/employees",
    responses(
        (status = 200, description = "Employees known to the HR database", body = EmployeesResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Analytics"
)]
#[instrument(skip_all, fields(user = %auth.username))]
pub async fn employees(
    auth: AuthUser,
    service: web::Data<AnalyticsService>,
) -> actix_web::Result<impl Responder> {
    let snapshot = service.snapshot().await?;

    Ok(HttpResponse::Ok().json(EmployeesResponse {
        total: snapshot.employees.len(),
        data: snapshot.employees.clone(),
    }))
}

/// HTML dashboard
#[utoipa::path(
    get,
    path = "/api/analytics/dashboard",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Rendered dashboard", content_type = "text/html", body = String),
        (status = 400, description = "Invalid date range"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Analytics"
)]
#[instrument(skip_all, fields(user = %auth.username))]
pub async fn dashboard(
    auth: AuthUser,
    service: web::Data<AnalyticsService>,
    config: web::Data<Config>,
    query: web::Query<DashboardQuery>,
) -> actix_web::Result<impl Responder> {
    let range = DateRange::new(query.from, query.to)?;

    let snapshot = service.snapshot().await?;
    let view = AnalyticsView::build(&snapshot, range);
    let html = render_dashboard(
        &view,
        query.theme.unwrap_or_default(),
        &config.chart_js_url,
    )?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}

/// Reload both collections, bypassing the cache
#[utoipa::path(
    post,
    path = "/api/analytics/refresh",
    responses(
        (status = 200, description = "Summary of the fresh snapshot", body = Summary),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error", body = Object, example = json!({
            "message": "Internal Server Error"
        }))
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Analytics"
)]
#[instrument(skip_all, fields(user = %auth.username))]
pub async fn refresh(
    auth: AuthUser,
    service: web::Data<AnalyticsService>,
) -> actix_web::Result<impl Responder> {
    let snapshot = service.refresh().await?;
    let view = AnalyticsView::build(&snapshot, DateRange::default());

    Ok(HttpResponse::Ok().json(view.summary()))
}
