//! Room catalog operations.

use std::sync::Arc;

use cinemax_domain::{ReferenceKind, Room, RoomId, RoomType};

use crate::infrastructure::ports::{EntityRef, RepoError, RoomRepo, ShowtimeRepo};

use super::CatalogError;

/// Input for registering a room.
#[derive(Debug, Clone)]
pub struct RegisterRoom {
    pub name: String,
    pub capacity: i64,
    pub room_type: RoomType,
}

pub struct RoomCatalog {
    rooms: Arc<dyn RoomRepo>,
    showtimes: Arc<dyn ShowtimeRepo>,
}

impl RoomCatalog {
    pub fn new(rooms: Arc<dyn RoomRepo>, showtimes: Arc<dyn ShowtimeRepo>) -> Self {
        Self { rooms, showtimes }
    }

    pub async fn register(&self, input: RegisterRoom) -> Result<Room, CatalogError> {
        let room = Room::new(input.name, input.capacity, input.room_type)?;
        self.rooms.save(&room).await.map_err(|e| match e {
            RepoError::ConstraintViolation(_) => {
                CatalogError::InvalidInput("The name of the room already exists".into())
            }
            other => CatalogError::Repo(other),
        })?;
        tracing::info!(room_id = %room.id, name = %room.name, "Room registered");
        Ok(room)
    }

    pub async fn list(&self) -> Result<Vec<Room>, CatalogError> {
        Ok(self.rooms.list().await?)
    }

    pub async fn get(&self, id: RoomId) -> Result<Room, CatalogError> {
        self.rooms
            .get(id)
            .await?
            .ok_or(CatalogError::NotFound(ReferenceKind::Room))
    }

    /// Delete a room no showtime refers to.
    pub async fn delete(&self, id: RoomId) -> Result<(), CatalogError> {
        self.get(id).await?;
        if self
            .showtimes
            .count_referencing(EntityRef::Room(id))
            .await?
            > 0
        {
            return Err(CatalogError::InUse(ReferenceKind::Room));
        }
        self.rooms.delete(id).await?;
        tracing::info!(room_id = %id, "Room deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockRoomRepo, MockShowtimeRepo};

    fn input(name: &str, capacity: i64) -> RegisterRoom {
        RegisterRoom {
            name: name.into(),
            capacity,
            room_type: RoomType::Vip,
        }
    }

    #[tokio::test]
    async fn duplicate_name_is_invalid_input() {
        let mut rooms = MockRoomRepo::new();
        rooms
            .expect_save()
            .returning(|_| Err(RepoError::constraint("UNIQUE constraint failed: rooms.name")));

        let result = RoomCatalog::new(Arc::new(rooms), Arc::new(MockShowtimeRepo::new()))
            .register(input("Sala VIP", 40))
            .await;

        assert!(
            matches!(result, Err(CatalogError::InvalidInput(ref msg)) if msg == "The name of the room already exists")
        );
    }

    #[tokio::test]
    async fn non_positive_capacity_never_reaches_the_store() {
        let result = RoomCatalog::new(
            Arc::new(MockRoomRepo::new()),
            Arc::new(MockShowtimeRepo::new()),
        )
        .register(input("Sala 2", 0))
        .await;

        assert!(matches!(result, Err(CatalogError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn referenced_room_cannot_be_deleted() {
        let room = Room::new("Sala 1", 100, RoomType::TwoD).unwrap();
        let id = room.id;

        let mut rooms = MockRoomRepo::new();
        rooms.expect_get().returning(move |_| Ok(Some(room.clone())));
        let mut showtimes = MockShowtimeRepo::new();
        showtimes
            .expect_count_referencing()
            .withf(move |reference| *reference == EntityRef::Room(id))
            .returning(|_| Ok(1));

        let result = RoomCatalog::new(Arc::new(rooms), Arc::new(showtimes))
            .delete(id)
            .await;
        assert!(matches!(result, Err(CatalogError::InUse(ReferenceKind::Room))));
    }
}
