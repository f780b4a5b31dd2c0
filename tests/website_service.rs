use tempfile::NamedTempFile;
use website_store::{Lifecycle, RepositoryError, SqliteConfig, Website, WebsiteService};

async fn started_service() -> WebsiteService {
    let service = WebsiteService::new(SqliteConfig::in_memory());
    service.start().await.unwrap();
    service
}

#[tokio::test]
async fn test_operations_before_start() {
    let service = WebsiteService::new(SqliteConfig::in_memory());

    assert!(matches!(
        service.all().await,
        Err(RepositoryError::NotStarted)
    ));
    assert!(matches!(
        service.create(Website::new("go.dev", "https://go.dev", 1)).await,
        Err(RepositoryError::NotStarted)
    ));
}

#[tokio::test]
async fn test_crud_through_service() {
    let service = started_service().await;

    let created = service
        .create(Website::new("go.dev", "https://go.dev", 1))
        .await
        .unwrap();
    assert_eq!(created.id, 1);
    assert!(matches!(
        service.create(Website::new("go.dev", "https://go.dev", 1)).await,
        Err(RepositoryError::Duplicate)
    ));

    let updated = service
        .update(created.id, Website::new("go.dev", "https://go.dev/blog", 4))
        .await
        .unwrap();
    assert_eq!(updated.url, "https://go.dev/blog");
    assert_eq!(
        service.get_by_name("go.dev").await.unwrap().rank,
        4
    );

    service.delete(created.id).await.unwrap();
    assert!(service.all().await.unwrap().is_empty());
    assert!(matches!(
        service.update(0, created).await,
        Err(RepositoryError::InvalidArgument)
    ));
}

#[tokio::test]
async fn test_start_twice_keeps_connection() {
    let service = started_service().await;
    service
        .create(Website::new("docs.rs", "https://docs.rs", 2))
        .await
        .unwrap();

    service.start().await.unwrap();
    assert_eq!(service.all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_stop_releases_connection() {
    let service = started_service().await;
    service.stop().await.unwrap();
    service.stop().await.unwrap();

    assert!(matches!(
        service.get_by_name("go.dev").await,
        Err(RepositoryError::NotStarted)
    ));
}

#[tokio::test]
async fn test_restart_with_file_database() {
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path().to_str().unwrap();
    let service = WebsiteService::new(SqliteConfig::new(path));
    assert_eq!(service.path(), path);

    service.start().await.unwrap();
    service
        .create(Website::new("crates.io", "https://crates.io", 3))
        .await
        .unwrap();
    service.stop().await.unwrap();

    service.start().await.unwrap();
    let website = service.get_by_name("crates.io").await.unwrap();
    assert_eq!(website.url, "https://crates.io");
}

#[tokio::test]
async fn test_config_from_json() {
    let config: SqliteConfig =
        serde_json::from_str(r#"{"db_path":":memory:"}"#).unwrap();
    assert!(config.is_in_memory());

    let website: Website =
        serde_json::from_str(r#"{"id":0,"name":"go.dev","url":"https://go.dev","rank":1}"#)
            .unwrap();
    assert_eq!(website, Website::new("go.dev", "https://go.dev", 1));
}
