use figurekit_storage::{ApiRequest, DocumentBackend, DocumentStore, FigureDoc, FileStore};
use tempfile::TempDir;

#[tokio::test]
async fn test_file_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    let response = store
        .handle(ApiRequest::store("acc1", "drawing", FigureDoc::default()))
        .await;
    assert!(response.is_ok(), "{}", response.error);
    assert!(dir.path().join("acc1").join("drawing.json").exists());

    let loaded = store.handle(ApiRequest::load("acc1", "drawing")).await;
    let doc: FigureDoc = serde_json::from_str(&loaded.value).unwrap();
    assert!(doc.figures.is_empty());
}

#[tokio::test]
async fn test_file_store_lists_only_json_documents() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());
    store.put("acc1", "b", "{}").await.unwrap();
    store.put("acc1", "a", "{}").await.unwrap();
    std::fs::write(dir.path().join("acc1").join("notes.txt"), "x").unwrap();

    assert_eq!(store.names("acc1").await.unwrap(), vec!["a", "b"]);
    assert!(store.names("empty").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_file_store_rejects_path_traversal() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    assert!(store.put("../escape", "doc", "{}").await.is_err());
    let response = store
        .handle(ApiRequest::store("acc1", "../../doc", FigureDoc::default()))
        .await;
    assert!(!response.is_ok());
    assert!(response.error.starts_with("Invalid name"));
}

#[tokio::test]
async fn test_file_store_missing_document() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());
    assert_eq!(store.get("acc1", "nothing").await.unwrap(), None);
}
