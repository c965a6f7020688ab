use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LivestockDto {
    pub id: i32,
    pub species: String,
    pub common_name: Option<String>,
    pub quantity: i32,
    pub health_status: String,
    pub date_added: NaiveDate,
    pub notes: Option<String>,
}

/// Minimal livestock row used to total headcounts per tank on the dashboard
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LivestockSummaryDto {
    pub tank_id: i32,
    pub quantity: i32,
}
