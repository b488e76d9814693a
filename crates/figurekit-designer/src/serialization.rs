//! Tagged figure records
//!
//! Every figure travels as `{"clazz": <tag>, "object": {...}}`. The
//! [`FigureRegistry`] maps each tag to a factory that rebuilds the figure
//! from its object; encoding is driven by the figure's own shape.
//!
//! Object fields use the camelCase names of the stored documents:
//! `bbox`, `color`, `lineThickness`, `lineStyle`, `fillColor`, `userText`,
//! `userSizeText`, `userTextSerif`. A group stores `{color, children}` and
//! recomputes its box from the children on decode.

use std::collections::HashMap;
use std::fmt;

use figurekit_core::{BoundingBox, Color, SerializationError, SerializationResult};
use figurekit_storage::{FigureDoc, JsonFigure};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::text::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};
use crate::model::{DesignGroup, DesignText, Figure, Shape, ShapeType, Stroke};

/// Rebuilds a figure from the object of a tagged record.
///
/// The registry is passed in so composite factories can decode their
/// children.
pub type FigureFactory =
    Box<dyn Fn(&FigureRegistry, &Value) -> SerializationResult<Figure> + Send + Sync>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StrokedRecord {
    bbox: BoundingBox,
    color: Color,
    #[serde(default = "default_line_thickness")]
    line_thickness: f64,
    #[serde(default)]
    line_style: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fill_color: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextRecord {
    bbox: BoundingBox,
    color: Color,
    #[serde(default)]
    user_text: String,
    #[serde(default = "default_font_size")]
    user_size_text: String,
    #[serde(default = "default_font_family")]
    user_text_serif: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GroupRecord {
    #[serde(default = "default_group_color")]
    color: Color,
    #[serde(default)]
    children: Vec<JsonFigure>,
}

fn default_line_thickness() -> f64 {
    Stroke::default().line_thickness
}

fn default_font_size() -> String {
    DEFAULT_FONT_SIZE.to_string()
}

fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.to_string()
}

fn default_group_color() -> Color {
    Color::TRANSPARENT
}

fn parse<T: DeserializeOwned>(clazz: &str, object: &Value) -> SerializationResult<T> {
    T::deserialize(object).map_err(|err| SerializationError::MalformedRecord {
        clazz: clazz.to_string(),
        reason: err.to_string(),
    })
}

fn stroked(record: &StrokedRecord) -> Stroke {
    Stroke::new(record.line_thickness, record.line_style.clone())
}

/// Maps class tags to figure factories.
pub struct FigureRegistry {
    factories: HashMap<String, FigureFactory>,
}

impl Default for FigureRegistry {
    fn default() -> Self {
        Self::with_builtin_factories()
    }
}

impl fmt::Debug for FigureRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        tags.sort_unstable();
        f.debug_struct("FigureRegistry").field("tags", &tags).finish()
    }
}

impl FigureRegistry {
    /// Registry with no factories.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registry with a factory for every built-in shape.
    pub fn with_builtin_factories() -> Self {
        let mut registry = Self::new();
        for kind in ShapeType::ALL {
            registry.register(kind.tag(), builtin_factory(kind));
        }
        registry
    }

    /// Registers `factory` under `tag`, replacing any previous one.
    pub fn register(&mut self, tag: impl Into<String>, factory: FigureFactory) {
        let tag = tag.into();
        tracing::debug!("Registering factory for {}", tag);
        self.factories.insert(tag, factory);
    }

    pub fn is_registered(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Encodes a figure, its children included.
    pub fn encode(&self, figure: &Figure) -> SerializationResult<JsonFigure> {
        let clazz = figure.tag().to_string();
        let bbox = *figure.bbox();
        let color = figure.color();

        let object = match figure.shape() {
            Shape::Line(line) => serde_json::to_value(StrokedRecord {
                bbox,
                color,
                line_thickness: line.stroke.line_thickness,
                line_style: line.stroke.line_style.clone(),
                fill_color: None,
            })?,
            Shape::Rectangle(_) | Shape::Ellipse(_) | Shape::Hexagon(_) => {
                let stroke = figure.shape().stroke().cloned().unwrap_or_default();
                serde_json::to_value(StrokedRecord {
                    bbox,
                    color,
                    line_thickness: stroke.line_thickness,
                    line_style: stroke.line_style,
                    fill_color: figure.shape().fill(),
                })?
            }
            Shape::Text(text) => serde_json::to_value(TextRecord {
                bbox,
                color,
                user_text: text.text.clone(),
                user_size_text: text.font_size.clone(),
                user_text_serif: text.font_family.clone(),
            })?,
            Shape::Group(_) => {
                let children = figure
                    .children()
                    .iter()
                    .map(|child| self.encode(child))
                    .collect::<SerializationResult<Vec<_>>>()?;
                serde_json::to_value(GroupRecord { color, children })?
            }
        };

        Ok(JsonFigure { clazz, object })
    }

    /// Rebuilds a figure with the factory registered for its tag.
    pub fn decode(&self, record: &JsonFigure) -> SerializationResult<Figure> {
        let factory =
            self.factories
                .get(&record.clazz)
                .ok_or_else(|| SerializationError::UnregisteredFactory {
                    clazz: record.clazz.clone(),
                })?;
        factory(self, &record.object)
    }

    pub fn encode_document(&self, figures: &[Figure]) -> SerializationResult<FigureDoc> {
        let figures = figures
            .iter()
            .map(|figure| self.encode(figure))
            .collect::<SerializationResult<Vec<_>>>()?;
        Ok(FigureDoc { figures })
    }

    /// Decodes every record it can; the rest are logged and skipped.
    pub fn decode_document(&self, doc: &FigureDoc) -> Vec<Figure> {
        self.decode_all(&doc.figures)
    }

    fn decode_all(&self, records: &[JsonFigure]) -> Vec<Figure> {
        records
            .iter()
            .filter_map(|record| match self.decode(record) {
                Ok(figure) => Some(figure),
                Err(err) => {
                    tracing::warn!("Skipping {} record: {}", record.clazz, err);
                    None
                }
            })
            .collect()
    }
}

fn builtin_factory(kind: ShapeType) -> FigureFactory {
    match kind {
        ShapeType::Line => Box::new(|_: &FigureRegistry, object: &Value| {
            let record: StrokedRecord = parse("Line", object)?;
            Ok(Figure::line(record.bbox, record.color, stroked(&record)))
        }),
        ShapeType::Rectangle => Box::new(|_: &FigureRegistry, object: &Value| {
            let record: StrokedRecord = parse("Rectangle", object)?;
            let fill = record.fill_color.unwrap_or(false);
            Ok(Figure::rectangle(record.bbox, record.color, stroked(&record), fill))
        }),
        ShapeType::Ellipse => Box::new(|_: &FigureRegistry, object: &Value| {
            let record: StrokedRecord = parse("Ellipse", object)?;
            let fill = record.fill_color.unwrap_or(false);
            Ok(Figure::ellipse(record.bbox, record.color, stroked(&record), fill))
        }),
        ShapeType::Hexagon => Box::new(|_: &FigureRegistry, object: &Value| {
            let record: StrokedRecord = parse("Hexagon", object)?;
            let fill = record.fill_color.unwrap_or(false);
            Ok(Figure::hexagon(record.bbox, record.color, stroked(&record), fill))
        }),
        ShapeType::Text => Box::new(|_: &FigureRegistry, object: &Value| {
            let record: TextRecord = parse("Text", object)?;
            let text = DesignText::new(record.user_text)
                .with_font(record.user_size_text, record.user_text_serif);
            Ok(Figure::text(record.bbox, record.color, text))
        }),
        ShapeType::Group => Box::new(|registry: &FigureRegistry, object: &Value| {
            let record: GroupRecord = parse("Group", object)?;
            // Children keep their own colors.
            let mut group = Figure::new(
                Shape::Group(DesignGroup),
                BoundingBox::default(),
                record.color,
            );
            for child in registry.decode_all(&record.children) {
                group.add_child(child);
            }
            Ok(group)
        }),
    }
}
