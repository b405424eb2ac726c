use crate::config::PersonwebConfig;
use crate::database::{PersonRepository, RepoResult};
use crate::domain::{NewPerson, Person};
use crate::features::people::model::DbPerson;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Opens the database named by the config, creating the file if needed,
    /// and makes sure the `people` table exists.
    pub async fn connect(config: &PersonwebConfig) -> Result<Self> {
        // verify db exists
        let exists = Sqlite::database_exists(&config.database_url)
            .await
            .unwrap_or(false);

        if !exists {
            tracing::info!(url = %config.database_url, "database not found, creating");
            Sqlite::create_database(&config.database_url)
                .await
                .with_context(|| {
                    format!("Unable to create database at {}", config.database_url)
                })?;
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .with_context(|| format!("Failed to create pool on {}", config.database_url))?;

        sqlx::migrate!()
            .run(&pool)
            .await
            .context("Failed to bootstrap the people table")?;

        tracing::info!(url = %config.database_url, "database ready");

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}

#[async_trait]
impl PersonRepository for SqliteRepository {
    async fn list_people(&self, limit: u32) -> RepoResult<Vec<Person>> {
        let rows = sqlx::query_as::<_, DbPerson>(
            r#"
            SELECT id, first_name, last_name, email, ip_address
            FROM people
            ORDER BY id
            LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Person::from).collect())
    }

    async fn get_person(&self, id: i64) -> RepoResult<Option<Person>> {
        let row = sqlx::query_as::<_, DbPerson>(
            r#"
            SELECT id, first_name, last_name, email, ip_address
            FROM people
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Person::from))
    }

    async fn create_person(&self, person: &NewPerson) -> RepoResult<Person> {
        // dropping an uncommitted transaction rolls it back
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO people (first_name, last_name, email, ip_address)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(person.first_name())
        .bind(person.last_name())
        .bind(person.email())
        .bind(person.ip_address())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(person.clone().with_id(result.last_insert_rowid()))
    }

    async fn update_person(&self, id: i64, person: &NewPerson) -> RepoResult<u64> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE people
            SET
                first_name = ?,
                last_name = ?,
                email = ?,
                ip_address = ?
            WHERE id = ?
            "#,
        )
        .bind(person.first_name())
        .bind(person.last_name())
        .bind(person.email())
        .bind(person.ip_address())
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(result.rows_affected())
    }

    async fn delete_person(&self, id: i64) -> RepoResult<u64> {
        let mut tx = self.pool.begin().await?;

        let result = match sqlx::query("DELETE FROM people WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
        {
            Ok(result) => result,
            Err(e) => {
                // the statement error is what the caller needs to see
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(id, "rollback after failed delete also failed: {}", rollback_err);
                }
                return Err(e.into());
            }
        };

        tx.commit().await?;

        Ok(result.rows_affected())
    }
}
