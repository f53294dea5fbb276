//! Catalog storage, lookup and palette listing

use std::collections::HashMap;
use std::path::Path;

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::kind::{ElementKind, PrimitiveKind};
use crate::error::PaletteError;

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A basic entry names a kind the builder cannot construct
    #[error("basic catalog entry {kind} is not a primitive element kind")]
    NotPrimitive { kind: String },

    /// An advanced entry has nothing to resolve into an image source
    #[error("advanced catalog entry {kind} has no URL template")]
    MissingTemplate { kind: String },

    /// An advanced entry names a primitive kind
    #[error("advanced catalog entry {kind} is not an API-backed kind")]
    NotApiBacked { kind: String },

    #[error("duplicate catalog entry: {kind}")]
    Duplicate { kind: String },
}

/// Static metadata for one element kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub kind: ElementKind,
    /// Human readable label, also used to derive sample content
    pub label: String,
    /// Opaque glyph reference shown next to the label
    pub icon: String,
    /// Grouping key for API-backed kinds; presentation only
    pub category: Option<String>,
    /// URL template with `{name}` placeholders
    pub url_template: Option<String>,
}

/// Which tab of the palette an entry is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteGroup {
    Basic,
    Advanced,
}

/// What a host UI needs to draw one palette button
///
/// Templates and build logic deliberately stay out of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteItem {
    pub kind: String,
    pub label: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub group: PaletteGroup,
    /// Secondary line under the label
    pub subtitle: String,
    /// Tooltip text
    pub hint: String,
}

#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    basic: Vec<TomlEntry>,
    #[serde(default)]
    advanced: Vec<TomlEntry>,
}

#[derive(Deserialize)]
struct TomlEntry {
    kind: String,
    label: String,
    icon: String,
    category: Option<String>,
    template: Option<String>,
}

/// Built-in palette: primitive elements plus GitHub API cards
const DEFAULT_CATALOG: &str = r#"
[[basic]]
kind = "header"
label = "Project Header"
icon = "📝"

[[basic]]
kind = "text"
label = "Description"
icon = "📄"

[[basic]]
kind = "badge"
label = "Badge"
icon = "🏷️"

[[basic]]
kind = "installation"
label = "Installation"
icon = "⚙️"

[[basic]]
kind = "code-block"
label = "Code Block"
icon = "💻"

[[basic]]
kind = "table"
label = "Feature Table"
icon = "📊"

[[basic]]
kind = "tech-stack"
label = "Tech Stack"
icon = "🔧"

[[basic]]
kind = "git-contribution"
label = "Git Contribution"
icon = "🐙"

[[basic]]
kind = "divider"
label = "Divider"
icon = "➖"

[[basic]]
kind = "banner"
label = "Banner"
icon = "📢"

[[basic]]
kind = "image"
label = "Image"
icon = "🖼️"

[[advanced]]
kind = "github-contribution-graph"
label = "Contribution Graph"
icon = "📊"
category = "graphs"
template = "https://github-readme-activity-graph.vercel.app/graph?username={username}&theme=react-dark&hide_border=false"

[[advanced]]
kind = "github-profile-summary"
label = "Profile Summary"
icon = "📋"
category = "graphs"
template = "https://github-profile-summary-cards.vercel.app/api/cards/profile-details?username={username}&theme=radical"

[[advanced]]
kind = "github-stats-card"
label = "Stats Card"
icon = "🎴"
category = "stats"
template = "https://github-readme-stats.vercel.app/api?username={username}&show_icons=true&locale=en&theme=tokyonight"

[[advanced]]
kind = "github-language-stats"
label = "Language Stats"
icon = "🌐"
category = "languages"
template = "https://github-readme-stats.vercel.app/api/top-langs/?username={username}&layout=compact&theme=radical"

[[advanced]]
kind = "github-streak-stats"
label = "Streak Stats"
icon = "🔥"
category = "stats"
template = "https://github-readme-streak-stats.herokuapp.com/?user={username}&theme=dark&hide_border=true"

[[advanced]]
kind = "github-trophy"
label = "GitHub Trophy"
icon = "🏆"
category = "stats"
template = "https://github-profile-trophy.vercel.app/?username={username}&theme=onedark"
"#;

/// Immutable, ordered registry of element kinds
#[derive(Debug, Clone)]
pub struct Catalog {
    basic: Vec<CatalogEntry>,
    advanced: Vec<CatalogEntry>,
    index: HashMap<String, (PaletteGroup, usize)>,
}

impl Catalog {
    /// Build a catalog from basic and advanced groups
    ///
    /// Basic entries must be primitive kinds; advanced entries must be
    /// API-backed and carry a URL template.
    pub fn new(
        basic: Vec<CatalogEntry>,
        advanced: Vec<CatalogEntry>,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::new();
        let groups = [(PaletteGroup::Basic, &basic), (PaletteGroup::Advanced, &advanced)];
        for (group, entries) in groups {
            for (pos, entry) in entries.iter().enumerate() {
                let kind = entry.kind.as_str().to_string();
                match (group, &entry.kind) {
                    (PaletteGroup::Basic, ElementKind::ApiBacked(_)) => {
                        return Err(CatalogError::NotPrimitive { kind });
                    }
                    (PaletteGroup::Advanced, ElementKind::Primitive(_)) => {
                        return Err(CatalogError::NotApiBacked { kind });
                    }
                    (PaletteGroup::Advanced, _) if entry.url_template.is_none() => {
                        return Err(CatalogError::MissingTemplate { kind });
                    }
                    _ => {}
                }
                if index.insert(kind.clone(), (group, pos)).is_some() {
                    return Err(CatalogError::Duplicate { kind });
                }
            }
        }

        Ok(Self {
            basic,
            advanced,
            index,
        })
    }

    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        debug!(path:? = path; "Loading catalog file");
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a catalog from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        let parsed: TomlCatalog = toml::from_str(content)?;

        let basic = parsed
            .basic
            .into_iter()
            .map(|raw| -> Result<CatalogEntry, CatalogError> {
                let kind = raw
                    .kind
                    .parse::<PrimitiveKind>()
                    .map_err(|e| CatalogError::NotPrimitive { kind: e.0 })?;
                Ok(CatalogEntry {
                    kind: ElementKind::Primitive(kind),
                    label: raw.label,
                    icon: raw.icon,
                    category: raw.category,
                    url_template: raw.template,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let advanced = parsed
            .advanced
            .into_iter()
            .map(|raw| -> Result<CatalogEntry, CatalogError> {
                let Some(template) = raw.template else {
                    return Err(CatalogError::MissingTemplate { kind: raw.kind });
                };
                Ok(CatalogEntry {
                    kind: ElementKind::ApiBacked(raw.kind),
                    label: raw.label,
                    icon: raw.icon,
                    category: raw.category,
                    url_template: Some(template),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = Self::new(basic, advanced)?;
        debug!(
            basic = catalog.basic.len(),
            advanced = catalog.advanced.len();
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Find the entry for a kind in either group
    pub fn lookup(&self, kind: &str) -> Result<&CatalogEntry, PaletteError> {
        trace!(kind; "Catalog lookup");
        match self.index.get(kind) {
            Some((PaletteGroup::Basic, pos)) => Ok(&self.basic[*pos]),
            Some((PaletteGroup::Advanced, pos)) => Ok(&self.advanced[*pos]),
            None => Err(PaletteError::unknown_kind(kind)),
        }
    }

    /// Check if a kind is declared
    pub fn contains(&self, kind: &str) -> bool {
        self.index.contains_key(kind)
    }

    /// Primitive entries in display order
    pub fn basic(&self) -> &[CatalogEntry] {
        &self.basic
    }

    /// API-backed entries in display order
    pub fn advanced(&self) -> &[CatalogEntry] {
        &self.advanced
    }

    /// All entries, basic group first
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.basic.iter().chain(self.advanced.iter())
    }

    /// Advanced entries grouped by category, in order of first appearance
    pub fn advanced_by_category(&self) -> Vec<(Option<&str>, Vec<&CatalogEntry>)> {
        let mut groups: Vec<(Option<&str>, Vec<&CatalogEntry>)> = Vec::new();
        for entry in &self.advanced {
            let category = entry.category.as_deref();
            match groups.iter_mut().find(|(c, _)| *c == category) {
                Some((_, entries)) => entries.push(entry),
                None => groups.push((category, vec![entry])),
            }
        }
        groups
    }

    /// Palette buttons for the host UI, basic group first
    pub fn listing(&self) -> Vec<PaletteItem> {
        let basic = self.basic.iter().map(|e| palette_item(e, PaletteGroup::Basic));
        let advanced = self
            .advanced
            .iter()
            .map(|e| palette_item(e, PaletteGroup::Advanced));
        basic.chain(advanced).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_str(DEFAULT_CATALOG).expect("Built-in catalog should be valid TOML")
    }
}

fn palette_item(entry: &CatalogEntry, group: PaletteGroup) -> PaletteItem {
    let label = entry.label.to_lowercase();
    let (subtitle, hint) = match (group, &entry.kind) {
        (PaletteGroup::Advanced, _) => (
            "GitHub API Element".to_string(),
            format!("Click to add a {} element (GitHub API)", label),
        ),
        (PaletteGroup::Basic, ElementKind::Primitive(PrimitiveKind::TechStack)) => (
            entry.kind.to_string(),
            "Add a basic tech stack list - for advanced features use the Advanced tab".to_string(),
        ),
        (PaletteGroup::Basic, kind) => (
            kind.to_string(),
            format!("Click to add a {} element", label),
        ),
    };

    PaletteItem {
        kind: entry.kind.to_string(),
        label: entry.label.clone(),
        icon: entry.icon.clone(),
        category: entry.category.clone(),
        group,
        subtitle,
        hint,
    }
}
