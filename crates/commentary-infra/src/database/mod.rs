//! PostgreSQL storage: connection setup, SeaORM entities, repositories and
//! the transaction-backed unit of work.

mod connections;

#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;
#[cfg(feature = "postgres")]
mod unit_of_work;

#[cfg(feature = "postgres")]
pub mod entity;

pub use connections::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use connections::connect;
#[cfg(feature = "postgres")]
pub use postgres_base::PostgresBaseRepository;
#[cfg(feature = "postgres")]
pub use postgres_repo::{
    PostgresCommentRepository, PostgresPostRepository, PostgresUserRepository,
};
#[cfg(feature = "postgres")]
pub use unit_of_work::{PostgresUnitOfWork, PostgresUnitOfWorkFactory};
