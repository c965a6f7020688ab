use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{aquarium::UnitSystem, display::title_case};

/// Built-in tank classifications, stored as snake_case strings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TankKind {
    Freshwater,
    FreshwaterPlanted,
    Brackish,
    SaltwaterFishOnly,
    SaltwaterFowlr,
    SaltwaterReef,
    Other,
}

/// Every selectable kind, in the order the new tank form lists them
pub const TANK_KINDS: [TankKind; 7] = [
    TankKind::Freshwater,
    TankKind::FreshwaterPlanted,
    TankKind::Brackish,
    TankKind::SaltwaterFishOnly,
    TankKind::SaltwaterFowlr,
    TankKind::SaltwaterReef,
    TankKind::Other,
];

impl TankKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "freshwater" => Some(TankKind::Freshwater),
            "freshwater_planted" => Some(TankKind::FreshwaterPlanted),
            "brackish" => Some(TankKind::Brackish),
            "saltwater_fish_only" => Some(TankKind::SaltwaterFishOnly),
            "saltwater_fowlr" => Some(TankKind::SaltwaterFowlr),
            "saltwater_reef" => Some(TankKind::SaltwaterReef),
            "other" => Some(TankKind::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TankKind::Freshwater => "freshwater",
            TankKind::FreshwaterPlanted => "freshwater_planted",
            TankKind::Brackish => "brackish",
            TankKind::SaltwaterFishOnly => "saltwater_fish_only",
            TankKind::SaltwaterFowlr => "saltwater_fowlr",
            TankKind::SaltwaterReef => "saltwater_reef",
            TankKind::Other => "other",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

/// A tank's classification as resolved for display
///
/// Collapses the stored `tank_type` and `custom_type` column pair into one
/// value so views never branch on the raw strings.
#[derive(Clone, Debug, PartialEq)]
pub enum TankType {
    Known(TankKind),
    Custom(String),
}

impl TankType {
    /// Resolve the stored column pair into a display type
    ///
    /// A tank stored as `other` falls back to [`TankKind::Other`] when its
    /// custom label is missing or blank. Unrecognized stored values are
    /// treated as custom labels and shown verbatim.
    pub fn from_parts(tank_type: &str, custom_type: Option<&str>) -> Self {
        if tank_type == "other" {
            if let Some(custom) = custom_type.filter(|value| !value.trim().is_empty()) {
                return TankType::Custom(custom.to_string());
            }
        }

        match TankKind::parse(tank_type) {
            Some(kind) => TankType::Known(kind),
            None => TankType::Custom(tank_type.to_string()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            TankType::Known(kind) => kind.label(),
            TankType::Custom(name) => name.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TankDto {
    pub id: i32,
    pub aquarium_id: i32,
    pub name: String,
    pub volume: f64,
    pub tank_type: String,
    pub custom_type: Option<String>,
    /// Unit preference of the owning aquarium, included so volume labels
    /// never require a second fetch
    pub preferred_units: UnitSystem,
    pub created_at: NaiveDateTime,
}

impl TankDto {
    /// Display label for the tank's type
    pub fn type_label(&self) -> String {
        TankType::from_parts(&self.tank_type, self.custom_type.as_deref()).label()
    }

    /// Unit label for the tank's volume
    pub fn volume_unit(&self) -> &'static str {
        self.preferred_units.volume_unit()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateTankDto {
    pub aquarium_id: i32,
    pub name: String,
    pub volume: f64,
    pub tank_type: String,
    pub custom_type: Option<String>,
}
