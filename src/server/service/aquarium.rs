use sea_orm::DatabaseConnection;

use crate::{
    model::aquarium::{AquariumDto, CreateAquariumDto, UnitSystem},
    server::{
        data::aquarium::AquariumRepository,
        error::{validation::ValidationError, Error},
    },
};

pub struct AquariumService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AquariumService<'a> {
    /// Creates a new instance of [`AquariumService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all of a user's aquariums ordered by name
    pub async fn get_aquariums(&self, user_id: i32) -> Result<Vec<AquariumDto>, Error> {
        let aquarium_repository = AquariumRepository::new(self.db);

        let aquariums = aquarium_repository.get_many_by_user_id(user_id).await?;

        Ok(aquariums.into_iter().map(aquarium_to_dto).collect())
    }

    /// Creates an aquarium after validating its name
    ///
    /// # Returns
    /// Returns a Result containing:
    /// - [`AquariumDto`]: The created aquarium
    /// - [`Error`]: An error if validation or the database fails
    pub async fn create_aquarium(
        &self,
        user_id: i32,
        dto: CreateAquariumDto,
    ) -> Result<AquariumDto, Error> {
        let name = dto.name.trim();
        if name.is_empty() {
            return Err(ValidationError::AquariumNameRequired.into());
        }

        let aquarium_repository = AquariumRepository::new(self.db);
        let aquarium = aquarium_repository
            .create(user_id, name, dto.preferred_units.as_str())
            .await?;

        Ok(aquarium_to_dto(aquarium))
    }
}

fn aquarium_to_dto(aquarium: entity::aquarium::Model) -> AquariumDto {
    AquariumDto {
        id: aquarium.id,
        name: aquarium.name,
        preferred_units: UnitSystem::parse(&aquarium.preferred_units).unwrap_or_default(),
        created_at: aquarium.created_at,
    }
}
