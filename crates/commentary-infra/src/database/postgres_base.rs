use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseTransaction, DbErr, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait, SqlErr,
};
use uuid::Uuid;

use commentary_core::domain::Entity;
use commentary_core::error::RepoError;
use commentary_core::ports::Repository;

/// Generic PostgreSQL repository bound to one open transaction.
///
/// Every repository of a unit of work shares the same transaction, so
/// writes stay invisible to other connections until it commits.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) tx: Arc<DatabaseTransaction>,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(tx: Arc<DatabaseTransaction>) -> Self {
        Self {
            tx,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E, T> Repository<T> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = Uuid>,
    T: Entity + From<E::Model> + Into<E::ActiveModel>,
{
    async fn get_all(&self) -> Result<Vec<T>, RepoError> {
        let rows = E::find()
            .all(self.tx.as_ref())
            .await
            .map_err(classify_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        if id.is_nil() {
            return Err(RepoError::InvalidIdentity(id));
        }

        let result = E::find_by_id(id)
            .one(self.tx.as_ref())
            .await
            .map_err(classify_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, entity: T) -> Result<T, RepoError> {
        let active_model: E::ActiveModel = entity.into();
        let model = active_model
            .insert(self.tx.as_ref())
            .await
            .map_err(classify_db_err)?;

        Ok(model.into())
    }

    async fn update(&self, entity: T) -> Result<T, RepoError> {
        let active_model: E::ActiveModel = entity.into();
        let model = active_model
            .update(self.tx.as_ref())
            .await
            .map_err(classify_db_err)?;

        Ok(model.into())
    }

    async fn remove(&self, entity: T) -> Result<(), RepoError> {
        let result = E::delete_by_id(entity.id())
            .exec(self.tx.as_ref())
            .await
            .map_err(classify_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

/// Sort a SeaORM error into the repository taxonomy.
pub(crate) fn classify_db_err(err: DbErr) -> RepoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg))
        | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            return RepoError::Constraint(msg);
        }
        _ => {}
    }

    match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}
