use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "full_name": "John Doe",
        "document": "CC-1020304",
        "position": "Warehouse lead",
        "status": "active"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "John Doe")]
    pub full_name: String,

    #[schema(example = "CC-1020304")]
    pub document: String,

    #[schema(example = "Warehouse lead", nullable = true)]
    pub position: Option<String>,

    #[schema(example = "active")]
    pub status: String,
}
