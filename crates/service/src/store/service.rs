use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use models::store;

use crate::errors::ServiceError;
use crate::store::repository::StoreRepository;

/// Store operations consumed by the HTTP layer.
///
/// Errors are reported as [`ServiceError`] variants the caller can map:
/// `StoreNameCannotBeEmpty` from `create`, `ModelNotFound` from `get_store`
/// and `StoreNotFound` from `delete_store_by_id`.
#[async_trait]
pub trait StoreService: Send + Sync {
    async fn create(&self, name: &str) -> Result<store::Model, ServiceError>;
    async fn get_store(&self, id: i32) -> Result<store::Model, ServiceError>;
    async fn delete_store_by_id(&self, id: i32) -> Result<(), ServiceError>;
}

/// Application service encapsulating store business rules over a repository.
pub struct RepositoryStoreService<R: StoreRepository> {
    repo: Arc<R>,
}

impl<R: StoreRepository> RepositoryStoreService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }
}

#[async_trait]
impl<R: StoreRepository + 'static> StoreService for RepositoryStoreService<R> {
    #[instrument(skip(self))]
    async fn create(&self, name: &str) -> Result<store::Model, ServiceError> {
        if name.is_empty() {
            return Err(ServiceError::StoreNameCannotBeEmpty);
        }
        let created = self.repo.insert(name).await?;
        info!(id = created.id, "store created");
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn get_store(&self, id: i32) -> Result<store::Model, ServiceError> {
        self.repo.find(id).await?.ok_or(ServiceError::ModelNotFound(id))
    }

    #[instrument(skip(self))]
    async fn delete_store_by_id(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::StoreNotFound(id));
        }
        info!(id, "store deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStoreRepository;

    fn service() -> (RepositoryStoreService<InMemoryStoreRepository>, Arc<InMemoryStoreRepository>) {
        let repo = Arc::new(InMemoryStoreRepository::new());
        (RepositoryStoreService::new(Arc::clone(&repo)), repo)
    }

    #[tokio::test]
    async fn create_returns_assigned_id() -> Result<(), anyhow::Error> {
        let (svc, _) = service();
        let created = svc.create("Boulangerie").await?;
        assert_eq!(created.id, 1);
        assert_eq!(created.name, "Boulangerie");
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_empty_name_without_persisting() -> Result<(), anyhow::Error> {
        let (svc, repo) = service();
        let err = svc.create("").await.unwrap_err();
        assert!(matches!(err, ServiceError::StoreNameCannotBeEmpty));
        assert_eq!(err.to_string(), "name cannot be empty");
        assert!(repo.is_empty().await);
        Ok(())
    }

    #[tokio::test]
    async fn create_accepts_whitespace_name() -> Result<(), anyhow::Error> {
        let (svc, _) = service();
        let created = svc.create(" ").await?;
        assert_eq!(created.name, " ");
        Ok(())
    }

    #[tokio::test]
    async fn get_store_missing_is_model_not_found() -> Result<(), anyhow::Error> {
        let (svc, _) = service();
        let err = svc.get_store(13).await.unwrap_err();
        assert!(matches!(err, ServiceError::ModelNotFound(13)));
        Ok(())
    }

    #[tokio::test]
    async fn delete_then_get_and_delete_again() -> Result<(), anyhow::Error> {
        let (svc, _) = service();
        let created = svc.create("boulangerie").await?;
        assert_eq!(svc.get_store(created.id).await?, created);

        svc.delete_store_by_id(created.id).await?;
        assert!(matches!(svc.get_store(created.id).await, Err(ServiceError::ModelNotFound(_))));
        let err = svc.delete_store_by_id(created.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::StoreNotFound(id) if id == created.id));
        Ok(())
    }

    #[tokio::test]
    async fn works_over_seaorm_repository() -> Result<(), anyhow::Error> {
        use crate::store::repository::SeaOrmStoreRepository;
        let db = crate::test_support::memory_db().await?;
        let svc = RepositoryStoreService::new(Arc::new(SeaOrmStoreRepository::new(db)));

        let created = svc.create("Boulangerie").await?;
        assert_eq!(svc.get_store(created.id).await?.name, "Boulangerie");
        assert!(matches!(svc.create("").await, Err(ServiceError::StoreNameCannotBeEmpty)));
        svc.delete_store_by_id(created.id).await?;
        assert!(matches!(svc.delete_store_by_id(created.id).await, Err(ServiceError::StoreNotFound(id)) if id == created.id));
        Ok(())
    }
}
