use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MaintenanceLogDto {
    pub id: i32,
    pub task: String,
    pub performed_at: NaiveDateTime,
    pub notes: Option<String>,
}
