//! # FigureKit Designer
//!
//! The editing model of FigureKit: figures, the drawing that owns them,
//! the undo/redo log and the bridge to persistent storage.
//!
//! ## Core Components
//!
//! ### Figures
//! - **Shapes**: Lines, rectangles, ellipses, hexagons and text
//! - **Groups**: Composite figures whose box covers their children
//! - **Control points**: Eight resize handles per figure
//!
//! ### Editing
//! - **Drawing**: Ordered figure list, selection, change notification
//! - **History**: Reversible edits with bounded undo/redo stacks
//! - **Tools**: Pointer gestures mapped onto drawing operations
//!
//! ### Storage
//! - **Serialization**: Tagged `{clazz, object}` records and a factory registry
//! - **Persistence**: Async store/list/load client over a document backend
//!
//! ## Architecture
//!
//! ```text
//! Tool (pointer gestures)
//!   └── Drawing (figures, listeners)
//!         ├── Figure (shape + children)
//!         ├── UndoHelper (DrawingEdit stacks)
//!         └── PersistenceService
//!               └── ApiService → FigureRegistry + DocumentBackend
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use figurekit_designer::{Drawing, Figure, Stroke};
//! use figurekit_core::{BoundingBox, Color};
//!
//! let mut drawing = Drawing::new();
//! let id = drawing.add_figure(
//!     Figure::rectangle(BoundingBox::new(10.0, 10.0, 50.0, 50.0), Color::BLACK, Stroke::default(), false),
//!     true,
//! );
//! drawing.set_figure_color(id, Color::rgb(255, 0, 0), true);
//! drawing.undo();
//! ```

pub mod commands;
pub mod drawing;
pub mod history;
pub mod model;
pub mod persistence;
pub mod serialization;
pub mod tools;

pub use commands::{DrawingEdit, GroupFigures};
pub use drawing::Drawing;
pub use history::{UndoHelper, DEFAULT_UNDO_DEPTH};
pub use model::{
    Cardinal, ControlPoint, DesignEllipse, DesignGroup, DesignHexagon, DesignLine,
    DesignRectangle, DesignText, Figure, FigureShape, Shape, ShapeType, Stroke,
};
pub use persistence::{ApiService, PersistenceService};
pub use serialization::{FigureFactory, FigureRegistry};
pub use tools::{CreationTool, FigureStyle, SelectionTool, Tool};
