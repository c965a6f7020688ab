//! Form validation shared by the client forms and server-side re-checks
//!
//! Checks run in the order the fields appear on the form and only the first
//! failure is reported.

use crate::model::{
    aquarium::{CreateAquariumDto, UnitSystem},
    tank::CreateTankDto,
};

/// Raw field state of the new tank form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TankForm {
    pub aquarium_id: String,
    pub name: String,
    pub volume: String,
    pub tank_type: String,
    pub custom_type: String,
}

/// Raw field state of the new aquarium form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AquariumForm {
    pub name: String,
    pub preferred_units: String,
}

/// Validate the new tank form, producing the create request on success
pub fn validate_tank_form(form: &TankForm) -> Result<CreateTankDto, String> {
    let aquarium_id: i32 = match form.aquarium_id.parse() {
        Ok(id) => id,
        Err(_) => return Err("Please select an aquarium".to_string()),
    };

    let name = form.name.trim();
    if name.is_empty() {
        return Err("Tank name is required".to_string());
    }

    let volume: f64 = form.volume.trim().parse().unwrap_or(f64::NAN);
    if !volume.is_finite() || volume <= 0.0 {
        return Err("Please enter a valid volume".to_string());
    }

    if form.tank_type.is_empty() {
        return Err("Please select a tank type".to_string());
    }

    let custom_type = if form.tank_type == "other" {
        let custom = form.custom_type.trim();
        if custom.is_empty() {
            return Err("Please specify the custom tank type".to_string());
        }
        Some(custom.to_string())
    } else {
        None
    };

    Ok(CreateTankDto {
        aquarium_id,
        name: name.to_string(),
        volume,
        tank_type: form.tank_type.clone(),
        custom_type,
    })
}

/// Validate the new aquarium form, producing the create request on success
pub fn validate_aquarium_form(form: &AquariumForm) -> Result<CreateAquariumDto, String> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err("Aquarium name is required".to_string());
    }

    let preferred_units = match UnitSystem::parse(&form.preferred_units) {
        Some(units) => units,
        None => return Err("Please select your preferred units".to_string()),
    };

    Ok(CreateAquariumDto {
        name: name.to_string(),
        preferred_units,
    })
}

/// Validate and normalize a sign-in email address
pub fn validate_email(email: &str) -> Result<String, String> {
    let email = email.trim();

    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    let has_name_and_domain = email
        .split_once('@')
        .is_some_and(|(name, domain)| !name.is_empty() && !domain.is_empty());
    if !has_name_and_domain {
        return Err("Please enter a valid email address".to_string());
    }

    Ok(email.to_lowercase())
}
