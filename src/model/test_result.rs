use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TestResultDto {
    pub id: i32,
    pub test_type: String,
    pub value: f64,
    pub unit: String,
    pub tested_at: NaiveDateTime,
    pub notes: Option<String>,
}
