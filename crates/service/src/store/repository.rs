use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::store;

use crate::errors::ServiceError;

/// Data access for stores. Implementations decide how ids are assigned.
#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn insert(&self, name: &str) -> Result<store::Model, ServiceError>;
    async fn find(&self, id: i32) -> Result<Option<store::Model>, ServiceError>;
    /// Returns `false` when no store had that id.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmStoreRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmStoreRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl StoreRepository for SeaOrmStoreRepository {
    async fn insert(&self, name: &str) -> Result<store::Model, ServiceError> {
        Ok(store::create(&self.db, name).await?)
    }

    async fn find(&self, id: i32) -> Result<Option<store::Model>, ServiceError> {
        Ok(store::find(&self.db, id).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(store::delete(&self.db, id).await?)
    }
}
