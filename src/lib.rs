//! # FigureKit
//!
//! A vector figure editor core:
//! - Lines, rectangles, ellipses, hexagons and text, nestable in groups
//! - Point and region selection, move and eight-handle resize
//! - Undo/redo of every user edit
//! - Per-account drawing storage in memory or on disk
//!
//! ## Architecture
//!
//! FigureKit is organized as a workspace with multiple crates:
//!
//! 1. **figurekit-core** - Geometry, colors, paint surface, events, errors
//! 2. **figurekit-storage** - Document protocol and store backends
//! 3. **figurekit-designer** - Figures, drawing, history, serialization, tools
//! 4. **figurekit-settings** - Editor, storage and logging configuration
//! 5. **figurekit** - Wiring and the command line front end
//!
//! ## Usage
//!
//! ```no_run
//! use figurekit::{build_drawing, Config};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::default();
//! let mut drawing = build_drawing(&config);
//! let names = drawing.list(&config.storage.account).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

pub use figurekit_core::{
    BoundingBox, Color, DrawingEvent, DrawingListener, Error, FigureId, PaintSurface, Point,
    RecordingSurface, Result, Size,
};
pub use figurekit_designer as designer;
pub use figurekit_designer::{
    ApiService, CreationTool, Drawing, Figure, FigureRegistry, FigureStyle, PersistenceService,
    SelectionTool, Shape, ShapeType, Stroke, Tool, UndoHelper,
};
pub use figurekit_settings::{
    Config, EditorSettings, LoggingSettings, StorageBackend, StorageSettings,
};
pub use figurekit_storage::{DocumentBackend, FileStore, MemoryStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging from the logging settings
///
/// `RUST_LOG` takes precedence over the configured level. Output goes to
/// stderr, pretty-printed or as JSON lines.
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    if settings.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.pretty())
            .try_init()?;
    }

    Ok(())
}

/// Creation style from the editor defaults
pub fn figure_style(editor: &EditorSettings) -> FigureStyle {
    FigureStyle {
        color: editor.default_color,
        stroke: Stroke::new(editor.line_thickness, editor.line_style.clone()),
        fill: editor.fill,
        font_size: editor.font_size.clone(),
        font_family: editor.font_family.clone(),
    }
}

/// Document backend selected by the storage settings
pub fn open_backend(storage: &StorageSettings) -> Arc<dyn DocumentBackend> {
    match storage.backend {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::File => Arc::new(FileStore::new(&storage.directory)),
    }
}

/// Empty drawing with the configured undo depth and storage
pub fn build_drawing(config: &Config) -> Drawing {
    let service = ApiService::with_backend(open_backend(&config.storage));
    Drawing::with_history(UndoHelper::with_depth(config.editor.undo_depth))
        .with_persistence(Arc::new(service))
}
