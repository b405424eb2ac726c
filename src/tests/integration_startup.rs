use crate::config::PersonwebConfig;
use crate::database::sqlite::SqliteRepository;
use crate::database::PersonRepository;
use crate::tests::mock_person;
use tempfile::TempDir;

fn file_config(dir: &TempDir) -> PersonwebConfig {
    PersonwebConfig {
        database_url: format!("sqlite://{}", dir.path().join("names.db").display()),
        max_connections: 2,
        ..PersonwebConfig::default()
    }
}

// a missing database file is created and bootstrapped
#[tokio::test]
async fn test_connect_creates_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir);

    let repo = SqliteRepository::connect(&config).await.expect("Should connect");

    assert!(dir.path().join("names.db").exists());
    assert!(repo.list_people(10).await.unwrap().is_empty());
}

// rows survive a reconnect, and bootstrapping twice is harmless
#[tokio::test]
async fn test_data_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir);

    let created = {
        let repo = SqliteRepository::connect(&config).await.unwrap();
        let created = repo.create_person(&mock_person("Disk", "Bound")).await.unwrap();
        repo.pool().close().await;
        created
    };

    let repo = SqliteRepository::connect(&config).await.unwrap();
    let retrieved = repo.get_person(created.id).await.unwrap();
    assert_eq!(retrieved, Some(created));
}

// an unopenable location is a startup fault
#[tokio::test]
async fn test_connect_fails_for_unreachable_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = PersonwebConfig {
        database_url: format!(
            "sqlite://{}",
            dir.path().join("missing").join("deeper").join("names.db").display()
        ),
        ..PersonwebConfig::default()
    };

    assert!(SqliteRepository::connect(&config).await.is_err());
}
