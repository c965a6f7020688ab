use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Measurement system an aquarium's volumes are displayed in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Imperial,
    Metric,
}

impl UnitSystem {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "imperial" => Some(UnitSystem::Imperial),
            "metric" => Some(UnitSystem::Metric),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "imperial",
            UnitSystem::Metric => "metric",
        }
    }

    /// Unit label shown next to tank volumes
    pub fn volume_unit(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "gallons",
            UnitSystem::Metric => "liters",
        }
    }

    /// Option label for the unit preference select
    pub fn label(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "Imperial (gallons)",
            UnitSystem::Metric => "Metric (liters)",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AquariumDto {
    pub id: i32,
    pub name: String,
    pub preferred_units: UnitSystem,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateAquariumDto {
    pub name: String,
    pub preferred_units: UnitSystem,
}
