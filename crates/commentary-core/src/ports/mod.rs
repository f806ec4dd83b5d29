//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod repository;
mod unit_of_work;

pub use repository::{CommentRepository, PostRepository, Repository, UserRepository};
pub use unit_of_work::{UnitOfWork, UnitOfWorkFactory};
