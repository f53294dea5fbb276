//! Element kind identifiers

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// The closed set of element variants the builder knows how to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrimitiveKind {
    Header,
    Text,
    Badge,
    Installation,
    CodeBlock,
    Table,
    TechStack,
    GitContribution,
    Divider,
    Banner,
    Image,
}

impl PrimitiveKind {
    /// Every primitive kind, in palette display order
    pub const ALL: [PrimitiveKind; 11] = [
        PrimitiveKind::Header,
        PrimitiveKind::Text,
        PrimitiveKind::Badge,
        PrimitiveKind::Installation,
        PrimitiveKind::CodeBlock,
        PrimitiveKind::Table,
        PrimitiveKind::TechStack,
        PrimitiveKind::GitContribution,
        PrimitiveKind::Divider,
        PrimitiveKind::Banner,
        PrimitiveKind::Image,
    ];

    /// The `type` tag used in the document model
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveKind::Header => "header",
            PrimitiveKind::Text => "text",
            PrimitiveKind::Badge => "badge",
            PrimitiveKind::Installation => "installation",
            PrimitiveKind::CodeBlock => "code-block",
            PrimitiveKind::Table => "table",
            PrimitiveKind::TechStack => "tech-stack",
            PrimitiveKind::GitContribution => "git-contribution",
            PrimitiveKind::Divider => "divider",
            PrimitiveKind::Banner => "banner",
            PrimitiveKind::Image => "image",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no primitive kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPrimitive(pub String);

impl FromStr for PrimitiveKind {
    type Err = UnknownPrimitive;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownPrimitive(s.to_string()))
    }
}

/// Kind of a catalog entry
///
/// API-backed kinds are open-ended: they are declared by catalog data and
/// always produce image elements, so the builder never needs to know them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Primitive(PrimitiveKind),
    ApiBacked(String),
}

impl ElementKind {
    pub fn as_str(&self) -> &str {
        match self {
            ElementKind::Primitive(kind) => kind.as_str(),
            ElementKind::ApiBacked(name) => name,
        }
    }

    pub fn is_api_backed(&self) -> bool {
        matches!(self, ElementKind::ApiBacked(_))
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
