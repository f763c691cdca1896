mod common;

use foobar_service::{apply_migrations, DbDriver, FoobarPayload, FoobarRepository, SqlFoobarRepository};

#[tokio::test]
async fn create_and_get_roundtrip() {
    let repo = SqlFoobarRepository::new(common::memory_pool().await);

    let created = repo.create(&FoobarPayload::with_content("first")).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.foobar_content, "first");
    assert_eq!(created.created_at, created.updated_at);

    let loaded = repo.get_by_id(created.id).await.unwrap();
    assert_eq!(loaded, created);
}

#[tokio::test]
async fn fetch_returns_rows_in_id_order() {
    let repo = SqlFoobarRepository::new(common::memory_pool().await);
    assert!(repo.fetch().await.unwrap().is_empty());

    for content in ["a", "b", "c"] {
        repo.create(&FoobarPayload::with_content(content)).await.unwrap();
    }
    let rows = repo.fetch().await.unwrap();
    let contents: Vec<&str> = rows.iter().map(|r| r.foobar_content.as_str()).collect();
    assert_eq!(contents, vec!["a", "b", "c"]);
    assert!(rows.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
async fn update_changes_content_and_keeps_identity() {
    let repo = SqlFoobarRepository::new(common::memory_pool().await);
    let created = repo.create(&FoobarPayload::with_content("draft")).await.unwrap();

    let mut changed = created.clone();
    changed.foobar_content = "final".into();
    let updated = repo.update(&changed).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.foobar_content, "final");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn missing_rows_are_not_found() {
    let repo = SqlFoobarRepository::new(common::memory_pool().await);
    assert!(repo.get_by_id(42).await.unwrap_err().is_not_found());
    assert!(repo.delete(42).await.unwrap_err().is_not_found());

    let mut ghost = repo.create(&FoobarPayload::with_content("x")).await.unwrap();
    ghost.id = 4242;
    assert!(repo.update(&ghost).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn delete_removes_row() {
    let repo = SqlFoobarRepository::new(common::memory_pool().await);
    let created = repo.create(&FoobarPayload::with_content("bye")).await.unwrap();
    repo.delete(created.id).await.unwrap();
    assert!(repo.get_by_id(created.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn create_without_content_is_rejected() {
    let repo = SqlFoobarRepository::new(common::memory_pool().await);
    assert!(repo.create(&FoobarPayload::default()).await.is_err());
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let pool = common::memory_pool().await;
    apply_migrations(&pool, DbDriver::Sqlite).await.unwrap();
    let repo = SqlFoobarRepository::new(pool);
    repo.create(&FoobarPayload::with_content("still works")).await.unwrap();
}
