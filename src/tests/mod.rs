mod integration_startup;

use crate::config::PersonwebConfig;
use crate::database::sqlite::SqliteRepository;
use crate::domain::NewPerson;
use crate::AppState;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

// create a sqlite database in memory to test against
// one connection only: every new in-memory connection would be a fresh, empty database
pub async fn setup_test_db() -> SqliteRepository {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    SqliteRepository::new(pool)
}

pub fn test_config(list_limit: u32) -> Arc<PersonwebConfig> {
    Arc::new(PersonwebConfig {
        database_url: "sqlite::memory:".into(),
        max_connections: 1,
        list_limit,
        ..PersonwebConfig::default()
    })
}

pub async fn setup_api_state() -> AppState {
    AppState {
        repo: Arc::new(setup_test_db().await),
        config: test_config(crate::config::DEFAULT_LIST_LIMIT),
    }
}

pub fn mock_person(first_name: &str, last_name: &str) -> NewPerson {
    NewPerson::new(
        Some(first_name.to_string()),
        Some(last_name.to_string()),
        Some(format!("{}.{}@example.com", first_name, last_name).to_lowercase()),
        Some("192.168.0.1".to_string()),
    )
    .expect("mock person is valid")
}
