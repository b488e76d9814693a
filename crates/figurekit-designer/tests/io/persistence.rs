use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use figurekit_core::{
    BoundingBox, Color, DrawingError, DrawingEvent, Error, PersistenceError, SharedListener,
};
use figurekit_designer::{ApiService, Drawing, Figure, PersistenceService, Stroke};
use figurekit_storage::{ApiRequest, ApiResponse, DocumentBackend, FileStore, MemoryStore};

fn rect(x: f64, y: f64) -> Figure {
    Figure::rectangle(BoundingBox::new(x, y, 20.0, 20.0), Color::BLACK, Stroke::default(), true)
}

fn memory_service() -> Arc<ApiService> {
    Arc::new(ApiService::with_backend(Arc::new(MemoryStore::new())))
}

fn record_events(drawing: &mut Drawing) -> Arc<Mutex<Vec<DrawingEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let listener: SharedListener = Arc::new(move |event: &DrawingEvent| {
        sink.lock().unwrap().push(*event);
    });
    drawing.add_listener(listener);
    events
}

/// Backend that answers every request with the same response.
struct CannedBackend(ApiResponse);

#[async_trait]
impl DocumentBackend for CannedBackend {
    async fn handle(&self, _request: ApiRequest) -> ApiResponse {
        self.0.clone()
    }
}

#[tokio::test]
async fn test_store_list_load() {
    let service = memory_service();
    let figures = vec![rect(0.0, 0.0), rect(50.0, 50.0)];

    let written = service.store("alice", "sketch", &figures).await.unwrap();
    assert!(written > 0);
    service.store("alice", "another", &figures[..1]).await.unwrap();

    let names = service.list("alice").await.unwrap();
    assert_eq!(names, vec!["another".to_string(), "sketch".to_string()]);
    assert!(service.list("bob").await.unwrap().is_empty());

    let loaded = service.load("alice", "sketch").await.unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(*loaded[1].bbox(), BoundingBox::new(50.0, 50.0, 20.0, 20.0));
    assert_eq!(loaded[0].shape(), figures[0].shape());
}

#[tokio::test]
async fn test_missing_parameters() {
    let service = memory_service();

    assert!(matches!(
        service.store("", "sketch", &[]).await,
        Err(PersistenceError::MissingParameters)
    ));
    assert!(matches!(
        service.store("alice", "", &[]).await,
        Err(PersistenceError::MissingParameters)
    ));
    assert!(matches!(
        service.list("").await,
        Err(PersistenceError::NoAccount)
    ));
    assert!(matches!(
        service.load("alice", "").await,
        Err(PersistenceError::MissingParameters)
    ));
}

#[tokio::test]
async fn test_missing_document_loads_empty() {
    let service = memory_service();
    assert!(service.load("alice", "nothing").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_remote_error_is_reported() {
    let service = ApiService::with_backend(Arc::new(CannedBackend(ApiResponse::failed(
        "",
        "disk full",
    ))));

    let err = service.load("alice", "sketch").await.unwrap_err();
    assert!(matches!(err, PersistenceError::Remote { ref message } if message == "disk full"));
}

#[tokio::test]
async fn test_garbage_response_is_invalid() {
    let service = ApiService::with_backend(Arc::new(CannedBackend(ApiResponse::ok("<html>"))));

    assert!(matches!(
        service.load("alice", "sketch").await,
        Err(PersistenceError::InvalidResponse { ref command, .. }) if command == "load"
    ));
    assert!(matches!(
        service.store("alice", "sketch", &[]).await,
        Err(PersistenceError::InvalidResponse { ref command, .. }) if command == "store"
    ));
}

#[tokio::test]
async fn test_drawing_without_service() {
    let mut drawing = Drawing::new();

    let err = drawing.save("alice", "sketch").await.unwrap_err();
    assert!(matches!(err, Error::Drawing(DrawingError::NoPersistence)));
    assert!(drawing.list("alice").await.is_err());
}

#[tokio::test]
async fn test_drawing_save_and_open() {
    let service = memory_service();
    let mut drawing = Drawing::new().with_persistence(service.clone());
    drawing.add_figure(rect(0.0, 0.0), true);
    drawing.add_figure(rect(30.0, 30.0), true);
    let events = record_events(&mut drawing);

    drawing.save("alice", "sketch").await.unwrap();
    assert_eq!(*events.lock().unwrap(), vec![DrawingEvent::DrawingSaved]);
    assert_eq!(drawing.list("alice").await.unwrap(), vec!["sketch".to_string()]);

    let mut other = Drawing::new().with_persistence(service);
    other.add_figure(rect(99.0, 99.0), true);
    let other_events = record_events(&mut other);

    assert_eq!(other.open("alice", "sketch").await.unwrap(), 2);
    assert_eq!(other.len(), 2);
    assert!(!other.can_undo());
    assert!(!other.can_redo());
    assert_eq!(*other_events.lock().unwrap(), vec![DrawingEvent::DrawingLoaded]);
}

#[tokio::test]
async fn test_failed_open_keeps_figures() {
    let service = Arc::new(ApiService::with_backend(Arc::new(CannedBackend(
        ApiResponse::failed("", "no such account"),
    ))));
    let mut drawing = Drawing::new().with_persistence(service);
    let id = drawing.add_figure(rect(0.0, 0.0), true);
    let events = record_events(&mut drawing);

    let err = drawing.open("alice", "sketch").await.unwrap_err();

    assert!(err.is_persistence_error());
    assert_eq!(drawing.len(), 1);
    assert!(drawing.figure(id).is_some());
    assert!(drawing.can_undo());
    assert!(events.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let service = Arc::new(ApiService::with_backend(Arc::new(FileStore::new(dir.path()))));

    let mut drawing = Drawing::new().with_persistence(service.clone());
    let mut group = Figure::group();
    group.add_child(rect(0.0, 0.0));
    group.add_child(rect(40.0, 40.0));
    drawing.add_figure(group, false);
    drawing.add_figure(
        Figure::line(BoundingBox::new(5.0, 5.0, 10.0, -5.0), Color::rgb(0, 0, 255), Stroke::solid(3.0)),
        false,
    );
    drawing.save("alice", "on disk").await.unwrap();

    let mut reopened = Drawing::new().with_persistence(service);
    assert_eq!(reopened.open("alice", "on disk").await.unwrap(), 2);

    let group = &reopened.figures()[0];
    assert!(group.is_group());
    assert_eq!(group.children().len(), 2);
    assert_eq!(*group.bbox(), BoundingBox::new(0.0, 0.0, 60.0, 60.0));
    assert_eq!(reopened.figures()[1].color(), Color::rgb(0, 0, 255));
}
