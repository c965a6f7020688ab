use sea_orm::DatabaseConnection;

use crate::{
    model::{
        aquarium::UnitSystem,
        tank::{CreateTankDto, TankDto, TankKind},
    },
    server::{
        data::{aquarium::AquariumRepository, tank::TankRepository},
        error::{validation::ValidationError, Error},
    },
};

pub struct TankService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TankService<'a> {
    /// Creates a new instance of [`TankService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all of a user's tanks ordered by name
    pub async fn get_tanks(&self, user_id: i32) -> Result<Vec<TankDto>, Error> {
        let tank_repository = TankRepository::new(self.db);

        let tanks = tank_repository.get_many_by_user_id(user_id).await?;

        Ok(tanks
            .into_iter()
            .map(|(tank, aquarium)| tank_to_dto(tank, aquarium))
            .collect())
    }

    /// Gets a single tank when it is owned by the user
    pub async fn get_tank(&self, tank_id: i32, user_id: i32) -> Result<Option<TankDto>, Error> {
        let tank_repository = TankRepository::new(self.db);

        let tank = tank_repository.get_for_user(tank_id, user_id).await?;

        Ok(tank.map(|(tank, aquarium)| tank_to_dto(tank, aquarium)))
    }

    /// Creates a tank after validating the form fields and aquarium ownership
    ///
    /// A custom label is only kept for tanks typed `other`; for built-in types
    /// it is discarded.
    ///
    /// # Returns
    /// Returns a Result containing:
    /// - [`TankDto`]: The created tank
    /// - [`Error`]: An error if validation, ownership, or the database fails
    pub async fn create_tank(&self, user_id: i32, dto: CreateTankDto) -> Result<TankDto, Error> {
        let name = dto.name.trim();
        if name.is_empty() {
            return Err(ValidationError::TankNameRequired.into());
        }

        if !dto.volume.is_finite() || dto.volume <= 0.0 {
            return Err(ValidationError::VolumeNotPositive.into());
        }

        let Some(kind) = TankKind::parse(&dto.tank_type) else {
            return Err(ValidationError::TankTypeRequired.into());
        };

        let custom_type = match kind {
            TankKind::Other => {
                let custom = dto
                    .custom_type
                    .as_deref()
                    .map(str::trim)
                    .filter(|value| !value.is_empty());
                match custom {
                    Some(custom) => Some(custom.to_string()),
                    None => return Err(ValidationError::CustomTypeRequired.into()),
                }
            }
            _ => None,
        };

        let aquarium_repository = AquariumRepository::new(self.db);
        let Some(aquarium) = aquarium_repository
            .get_for_user(dto.aquarium_id, user_id)
            .await?
        else {
            return Err(ValidationError::AquariumNotFound.into());
        };

        let tank_repository = TankRepository::new(self.db);
        let tank = tank_repository
            .create(
                aquarium.id,
                name,
                dto.volume,
                kind.as_str(),
                custom_type.as_deref(),
            )
            .await?;

        Ok(tank_to_dto(tank, Some(aquarium)))
    }
}

fn tank_to_dto(tank: entity::tank::Model, aquarium: Option<entity::aquarium::Model>) -> TankDto {
    let preferred_units = aquarium
        .and_then(|aquarium| UnitSystem::parse(&aquarium.preferred_units))
        .unwrap_or_default();

    TankDto {
        id: tank.id,
        aquarium_id: tank.aquarium_id,
        name: tank.name,
        volume: tank.volume,
        tank_type: tank.tank_type,
        custom_type: tank.custom_type,
        preferred_units,
        created_at: tank.created_at,
    }
}
