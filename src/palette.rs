//! Palette facade: turns a selected kind into an element for the host
//!
//! The primitive path builds a default element from the catalog label. The
//! API-backed path resolves the entry's URL template and wraps the result as
//! an image element. Either way the host sink is called exactly once on
//! success and never on failure.

use log::{debug, warn};

use crate::catalog::{Catalog, CatalogEntry, ElementKind};
use crate::config::PaletteConfig;
use crate::element::{build, build_media, Element, IdGenerator};
use crate::error::PaletteError;
use crate::template::{resolve, Bindings};

/// Receiver of newly created elements, usually the host document model
pub trait ElementSink {
    fn on_add_element(&mut self, element: Element);
}

impl<F: FnMut(Element)> ElementSink for F {
    fn on_add_element(&mut self, element: Element) {
        self(element)
    }
}

impl ElementSink for Vec<Element> {
    fn on_add_element(&mut self, element: Element) {
        self.push(element)
    }
}

/// Element factory over an immutable catalog
#[derive(Debug)]
pub struct Palette {
    catalog: Catalog,
    bindings: Bindings,
    ids: IdGenerator,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl Palette {
    /// Create a palette with the default configuration
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, &PaletteConfig::default())
    }

    /// Create a palette with template bindings and id salt from `config`
    ///
    /// Without a configured salt every palette gets a random session salt.
    /// A configured salt makes ids reproducible across runs instead.
    pub fn with_config(catalog: Catalog, config: &PaletteConfig) -> Self {
        let ids = match &config.id_salt {
            Some(salt) => IdGenerator::with_salt(salt.clone()),
            None => IdGenerator::new(),
        };
        debug!(salt = ids.salt(); "Palette ready");
        Self {
            catalog,
            bindings: Bindings::from_config(config),
            ids,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Add a primitive element of `kind`
    pub fn add_element<S: ElementSink + ?Sized>(
        &self,
        kind: &str,
        sink: &mut S,
    ) -> Result<(), PaletteError> {
        let entry = self.catalog.lookup(kind)?;
        let element = self.build_primitive(entry)?;
        emit(element, sink);
        Ok(())
    }

    /// Add an API-backed image element of `kind`
    pub fn add_advanced_element<S: ElementSink + ?Sized>(
        &self,
        kind: &str,
        sink: &mut S,
    ) -> Result<(), PaletteError> {
        let entry = self.catalog.lookup(kind)?;
        let element = self.build_api_backed(entry)?;
        emit(element, sink);
        Ok(())
    }

    /// Add an element of `kind`, choosing the path from its catalog entry
    pub fn select<S: ElementSink + ?Sized>(
        &self,
        kind: &str,
        sink: &mut S,
    ) -> Result<(), PaletteError> {
        let element = self.create(kind)?;
        emit(element, sink);
        Ok(())
    }

    /// Build the element [`Palette::select`] would emit, without emitting it
    pub fn create(&self, kind: &str) -> Result<Element, PaletteError> {
        let entry = self.catalog.lookup(kind)?;
        match entry.kind {
            ElementKind::Primitive(_) => self.build_primitive(entry),
            ElementKind::ApiBacked(_) => self.build_api_backed(entry),
        }
    }

    fn build_primitive(&self, entry: &CatalogEntry) -> Result<Element, PaletteError> {
        match &entry.kind {
            ElementKind::Primitive(kind) => Ok(build(*kind, &entry.label, &self.ids)),
            ElementKind::ApiBacked(name) => {
                warn!(kind = name.as_str(); "API-backed kind requested as primitive");
                Err(PaletteError::unsupported(name.as_str()))
            }
        }
    }

    fn build_api_backed(&self, entry: &CatalogEntry) -> Result<Element, PaletteError> {
        let template = entry
            .url_template
            .as_deref()
            .ok_or_else(|| PaletteError::MissingTemplate {
                kind: entry.kind.to_string(),
            })?;
        let src = resolve(template, &self.bindings);
        Ok(build_media(entry.kind.as_str(), src, &entry.label, &self.ids))
    }
}

fn emit<S: ElementSink + ?Sized>(element: Element, sink: &mut S) {
    debug!(id = element.id.as_str(), kind = element.kind().as_str(); "Emitting element");
    sink.on_add_element(element);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PrimitiveKind;
    use crate::element::{ElementBody, ImageElement};
    use pretty_assertions::assert_eq;

    fn palette() -> Palette {
        Palette::with_config(Catalog::default(), &PaletteConfig::new().with_id_salt("t"))
    }

    #[test]
    fn test_add_primitive() {
        let palette = palette();
        let mut added = Vec::new();
        palette
            .add_element("table", &mut |e: Element| added.push(e))
            .expect("table is primitive");

        assert_eq!(added.len(), 1);
        assert_eq!(added[0].kind(), PrimitiveKind::Table);
        assert_eq!(added[0].id.as_str(), "table-t-1");
    }

    #[test]
    fn test_add_advanced_with_fallback_username() {
        let palette = palette();
        let mut added = Vec::new();
        palette
            .add_advanced_element("github-stats-card", &mut |e: Element| added.push(e))
            .expect("stats card is advanced");

        assert_eq!(added.len(), 1);
        let element = &added[0];
        assert_eq!(element.id.as_str(), "github-stats-card-t-1");
        assert_eq!(
            element.body,
            ElementBody::Image(ImageElement {
                src: "https://github-readme-stats.vercel.app/api?username=your-username&show_icons=true&locale=en&theme=tokyonight".to_string(),
                alt: "Stats Card".to_string(),
                width: "100%".to_string(),
                height: "auto".to_string(),
            })
        );
    }

    #[test]
    fn test_real_username_binding() {
        let config = PaletteConfig::new().with_username("octocat");
        let palette = Palette::with_config(Catalog::default(), &config);
        let element = palette.create("github-streak-stats").unwrap();
        match element.body {
            ElementBody::Image(image) => {
                assert!(image.src.contains("user=octocat"));
                assert!(!image.src.contains("your-username"));
            }
            other => panic!("expected image, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_kind_not_emitted() {
        let palette = palette();
        let mut calls = 0;
        let result = palette.select("carousel", &mut |_: Element| calls += 1);
        assert_eq!(
            result,
            Err(PaletteError::UnknownKind {
                kind: "carousel".to_string()
            })
        );
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_advanced_kind_on_primitive_path() {
        let palette = palette();
        let mut calls = 0;
        let result = palette.add_element("github-trophy", &mut |_: Element| calls += 1);
        assert_eq!(
            result,
            Err(PaletteError::UnsupportedElementType {
                kind: "github-trophy".to_string()
            })
        );
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_primitive_kind_on_advanced_path() {
        let palette = palette();
        let mut calls = 0;
        let result = palette.add_advanced_element("badge", &mut |_: Element| calls += 1);
        assert_eq!(
            result,
            Err(PaletteError::MissingTemplate {
                kind: "badge".to_string()
            })
        );
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_select_routes_by_entry() {
        let palette = palette();
        let mut added = Vec::new();
        palette.select("header", &mut |e: Element| added.push(e)).unwrap();
        palette.select("github-trophy", &mut |e: Element| added.push(e)).unwrap();

        assert_eq!(added[0].kind(), PrimitiveKind::Header);
        assert_eq!(added[1].kind(), PrimitiveKind::Image);
        assert_ne!(added[0].id, added[1].id);
    }

    #[test]
    fn test_vec_sink() {
        let palette = Palette::default();
        let mut doc: Vec<Element> = Vec::new();
        palette.select("table", &mut doc).unwrap();
        palette.add_advanced_element("github-trophy", &mut doc).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc[0].kind(), PrimitiveKind::Table);
        assert_eq!(doc[1].kind(), PrimitiveKind::Image);
    }

    #[test]
    fn test_session_salt_unless_configured() {
        let a = Palette::default().create("divider").unwrap();
        let b = Palette::default().create("divider").unwrap();
        assert_ne!(a.id, b.id);

        let a = palette().create("divider").unwrap();
        let b = palette().create("divider").unwrap();
        assert_eq!(a.id, b.id);
    }

    struct Document {
        elements: Vec<Element>,
    }

    impl ElementSink for Document {
        fn on_add_element(&mut self, element: Element) {
            self.elements.push(element);
        }
    }

    #[test]
    fn test_struct_sink() {
        let palette = palette();
        let mut doc = Document { elements: Vec::new() };
        palette.select("divider", &mut doc).unwrap();
        palette.select("image", &mut doc).unwrap();
        assert_eq!(doc.elements.len(), 2);

        let sink: &mut dyn ElementSink = &mut doc;
        palette.select("badge", sink).unwrap();
        assert_eq!(doc.elements.len(), 3);
    }
}
