//! README Palette - element registry and factory for a README composer
//!
//! This library maps element kinds picked from a palette to fully populated
//! document elements. Primitive kinds (headers, tables, badges, ...) get
//! deterministic sample content; API-backed kinds (GitHub stats cards and
//! friends) become image elements whose source is resolved from a URL
//! template.
//!
//! # Example
//!
//! ```rust
//! use readme_palette::{Element, Palette, PrimitiveKind};
//!
//! let palette = Palette::default();
//! let mut document: Vec<Element> = Vec::new();
//!
//! palette.select("table", &mut |e: Element| document.push(e)).unwrap();
//! palette.select("github-trophy", &mut |e: Element| document.push(e)).unwrap();
//!
//! assert_eq!(document[0].kind(), PrimitiveKind::Table);
//! assert_eq!(document[1].kind(), PrimitiveKind::Image);
//! ```

pub mod catalog;
pub mod config;
pub mod element;
pub mod error;
pub mod palette;
pub mod template;

pub use catalog::{Catalog, CatalogEntry, CatalogError, ElementKind, PaletteItem, PrimitiveKind};
pub use config::{ConfigError, PaletteConfig};
pub use element::{Element, ElementBody, ElementId, IdGenerator};
pub use error::PaletteError;
pub use palette::{ElementSink, Palette};
pub use template::{resolve, Bindings};

/// Create a palette from optional catalog and config files
///
/// Missing paths fall back to the built-in catalog and default config.
pub fn load_palette(
    catalog: Option<&std::path::Path>,
    config: Option<&std::path::Path>,
) -> Result<Palette, LoadError> {
    let catalog = match catalog {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::default(),
    };
    let config = match config {
        Some(path) => PaletteConfig::from_file(path)?,
        None => PaletteConfig::default(),
    };
    Ok(Palette::with_config(catalog, &config))
}

/// Errors that can occur while loading palette inputs
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
