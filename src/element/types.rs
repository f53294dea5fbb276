//! Element value types handed to the host document model

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::id::ElementId;
use crate::catalog::PrimitiveKind;

/// A fully populated document element
///
/// Serializes as `{"id": ..., "type": ..., <variant fields>, "hiddenFor": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    #[serde(flatten)]
    pub body: ElementBody,
    /// Viewer contexts in which this element is not rendered
    #[serde(rename = "hiddenFor", default)]
    pub hidden_for: BTreeSet<String>,
}

impl Element {
    pub fn new(id: ElementId, body: ElementBody) -> Self {
        Self {
            id,
            body,
            hidden_for: BTreeSet::new(),
        }
    }

    /// The variant discriminant
    pub fn kind(&self) -> PrimitiveKind {
        self.body.kind()
    }
}

/// Variant-specific payload, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ElementBody {
    Header {
        content: String,
        level: u8,
    },
    Text {
        content: String,
        style: TextStyle,
    },
    Badge {
        content: String,
        variant: String,
    },
    Installation {
        content: String,
    },
    CodeBlock {
        content: String,
        language: String,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    TechStack {
        technologies: Vec<String>,
        layout: String,
    },
    GitContribution {
        username: String,
        repository: String,
    },
    Divider {
        #[serde(rename = "dividerStyle")]
        divider_style: String,
    },
    Banner {
        content: String,
        variant: String,
        color: String,
    },
    Image(ImageElement),
}

impl ElementBody {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            ElementBody::Header { .. } => PrimitiveKind::Header,
            ElementBody::Text { .. } => PrimitiveKind::Text,
            ElementBody::Badge { .. } => PrimitiveKind::Badge,
            ElementBody::Installation { .. } => PrimitiveKind::Installation,
            ElementBody::CodeBlock { .. } => PrimitiveKind::CodeBlock,
            ElementBody::Table { .. } => PrimitiveKind::Table,
            ElementBody::TechStack { .. } => PrimitiveKind::TechStack,
            ElementBody::GitContribution { .. } => PrimitiveKind::GitContribution,
            ElementBody::Divider { .. } => PrimitiveKind::Divider,
            ElementBody::Banner { .. } => PrimitiveKind::Banner,
            ElementBody::Image(_) => PrimitiveKind::Image,
        }
    }
}

/// Image (media) payload, also the target of every API-backed kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageElement {
    pub src: String,
    pub alt: String,
    pub width: String,
    pub height: String,
}

/// Typography of a text element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_size: String,
    pub font_weight: String,
    pub text_align: TextAlign,
    /// Theme color token
    pub color: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: "md".to_string(),
            font_weight: "normal".to_string(),
            text_align: TextAlign::Left,
            color: "text-foreground".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}
