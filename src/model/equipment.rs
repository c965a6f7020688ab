use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct EquipmentDto {
    pub id: i32,
    pub name: String,
    pub equipment_type: String,
    pub status: String,
    pub install_date: NaiveDate,
    pub notes: Option<String>,
}
