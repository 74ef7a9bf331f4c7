use crate::analytics::charts::{
    Axis, ChartConfig, ChartData, ChartKind, ChartOptions, Dataset, Legend, Plugins, Scales,
    Tooltip,
};
use crate::analytics::classification::{Category, CategoryCounts, Classification};
use crate::analytics::dashboard::Theme;
use crate::analytics::service::{DateRange, Summary};
use crate::analytics::tables::{CategoryRow, DetailRow};
use crate::api::analytics::{
    CategoriesResponse, ChartsResponse, EmployeesResponse, RecordsResponse,
};
use crate::model::attendance::AttendanceRecord;
use crate::model::employee::Employee;
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HR Attendance Analytics API",
        version = "1.0.0",
        description = r#"
## HR Attendance Analytics

Read-only analytics over the HR attendance records.

### Categories
- **Present**: not absent, or worked overtime
- **Absent**: absent without overtime
- **Overtime**: more than zero overtime hours

Present and absent split every record. Overtime is a subset of present.

### Views
- Category summary with counts and employee names
- Chart.js bar and pie configurations
- Attendance detail and category tables
- Server-rendered HTML dashboard

### Security
Every analytics endpoint needs a **JWT Bearer** access token with the **HR** or **Admin** role.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::analytics::summary,
        crate::api::analytics::charts,
        crate::api::analytics::records,
        crate::api::analytics::categories,
        crate::api::analytics::employees,
        crate::api::analytics::dashboard,
        crate::api::analytics::refresh
    ),
    components(
        schemas(
            Summary,
            DateRange,
            Category,
            CategoryCounts,
            Classification,
            ChartsResponse,
            ChartConfig,
            ChartKind,
            ChartData,
            Dataset,
            ChartOptions,
            Plugins,
            Legend,
            Tooltip,
            Scales,
            Axis,
            RecordsResponse,
            DetailRow,
            CategoriesResponse,
            CategoryRow,
            EmployeesResponse,
            Employee,
            AttendanceRecord,
            Theme
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Analytics", description = "Attendance analytics APIs"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
