use crate::domain::{NewPerson, Person};
use async_trait::async_trait;
use thiserror::Error;

pub mod sqlite;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;

// a PersonRepository is shared between request handlers behind an Arc
// sqlx::Pool is thread safe, so implementations hold the pool directly
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// At most `limit` people in storage order. No rows is an empty vec, not an error.
    async fn list_people(&self, limit: u32) -> RepoResult<Vec<Person>>;

    /// `Ok(None)` when no row has this id.
    async fn get_person(&self, id: i64) -> RepoResult<Option<Person>>;

    // write operations, each in its own transaction
    async fn create_person(&self, person: &NewPerson) -> RepoResult<Person>;

    /// Returns the number of rows overwritten (0 or 1).
    async fn update_person(&self, id: i64, person: &NewPerson) -> RepoResult<u64>;

    /// Returns the number of rows removed (0 or 1).
    async fn delete_person(&self, id: i64) -> RepoResult<u64>;
}
