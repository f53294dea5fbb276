//! Default element construction per kind

use log::debug;

use super::id::IdGenerator;
use super::types::{Element, ElementBody, ImageElement, TextStyle};
use crate::catalog::PrimitiveKind;
use crate::error::PaletteError;

/// Build a default element of `kind`
///
/// `label` is the catalog label; header, text and banner derive their sample
/// content from it.
pub fn build(kind: PrimitiveKind, label: &str, ids: &IdGenerator) -> Element {
    let label = label.to_lowercase();
    let body = match kind {
        PrimitiveKind::Header => ElementBody::Header {
            content: format!("Sample {} content", label),
            level: 2,
        },
        PrimitiveKind::Text => ElementBody::Text {
            content: format!("Sample {} content", label),
            style: TextStyle::default(),
        },
        PrimitiveKind::Banner => ElementBody::Banner {
            content: format!("Sample {} banner", label),
            variant: "default".to_string(),
            color: "blue".to_string(),
        },
        PrimitiveKind::Badge => ElementBody::Badge {
            content: "Sample badge".to_string(),
            variant: "default".to_string(),
        },
        PrimitiveKind::CodeBlock => ElementBody::CodeBlock {
            content: r#"console.log("Hello world");"#.to_string(),
            language: "javascript".to_string(),
        },
        PrimitiveKind::Table => ElementBody::Table {
            headers: vec!["Column 1".to_string(), "Column 2".to_string()],
            rows: vec![vec!["Row 1 Col 1".to_string(), "Row 1 Col 2".to_string()]],
        },
        PrimitiveKind::TechStack => ElementBody::TechStack {
            technologies: vec!["React".to_string(), "TypeScript".to_string()],
            layout: "badges".to_string(),
        },
        PrimitiveKind::GitContribution => ElementBody::GitContribution {
            username: "your-username".to_string(),
            repository: "your-repo".to_string(),
        },
        PrimitiveKind::Divider => ElementBody::Divider {
            divider_style: "line".to_string(),
        },
        PrimitiveKind::Installation => ElementBody::Installation {
            content: "npm install your-package".to_string(),
        },
        PrimitiveKind::Image => ElementBody::Image(ImageElement {
            src: "https://example.com/image.png".to_string(),
            alt: "Example image".to_string(),
            width: "100%".to_string(),
            height: "auto".to_string(),
        }),
    };

    let element = Element::new(ids.next(kind.as_str()), body);
    debug!(kind = kind.as_str(), id = element.id.as_str(); "Built element");
    element
}

/// Build from a kind name, failing for names the builder has no case for
pub fn build_named(kind: &str, label: &str, ids: &IdGenerator) -> Result<Element, PaletteError> {
    let primitive = kind
        .parse::<PrimitiveKind>()
        .map_err(|_| PaletteError::unsupported(kind))?;
    Ok(build(primitive, label, ids))
}

/// Wrap an external image source as an image element
///
/// `id_kind` names the identifier after the originating kind (for example
/// `github-trophy`) even though the element itself is an image.
pub fn build_media(id_kind: &str, src: String, alt: &str, ids: &IdGenerator) -> Element {
    let element = Element::new(
        ids.next(id_kind),
        ElementBody::Image(ImageElement {
            src,
            alt: alt.to_string(),
            width: "100%".to_string(),
            height: "auto".to_string(),
        }),
    );
    debug!(kind = id_kind, id = element.id.as_str(); "Built media element");
    element
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids() -> IdGenerator {
        IdGenerator::with_salt("test")
    }

    #[test]
    fn test_header_content_from_label() {
        let element = build(PrimitiveKind::Header, "Project Header", &ids());
        assert_eq!(
            element.body,
            ElementBody::Header {
                content: "Sample project header content".to_string(),
                level: 2,
            }
        );
        assert_eq!(element.id.as_str(), "header-test-1");
        assert!(element.hidden_for.is_empty());
    }

    #[test]
    fn test_text_default_style() {
        let element = build(PrimitiveKind::Text, "Description", &ids());
        match element.body {
            ElementBody::Text { content, style } => {
                assert_eq!(content, "Sample description content");
                assert_eq!(style.font_size, "md");
                assert_eq!(style.font_weight, "normal");
                assert_eq!(style.color, "text-foreground");
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_banner_content() {
        let element = build(PrimitiveKind::Banner, "Banner", &ids());
        assert_eq!(
            element.body,
            ElementBody::Banner {
                content: "Sample banner banner".to_string(),
                variant: "default".to_string(),
                color: "blue".to_string(),
            }
        );
    }

    #[test]
    fn test_table_defaults() {
        let element = build(PrimitiveKind::Table, "Feature Table", &ids());
        assert_eq!(
            element.body,
            ElementBody::Table {
                headers: vec!["Column 1".to_string(), "Column 2".to_string()],
                rows: vec![vec!["Row 1 Col 1".to_string(), "Row 1 Col 2".to_string()]],
            }
        );
    }

    #[test]
    fn test_every_kind_matches_discriminant() {
        let ids = ids();
        for kind in PrimitiveKind::ALL {
            let element = build(kind, "Label", &ids);
            assert_eq!(element.kind(), kind);
            assert!(element.id.as_str().starts_with(kind.as_str()));
        }
    }

    #[test]
    fn test_same_inputs_differ_only_by_id() {
        let ids = ids();
        for kind in PrimitiveKind::ALL {
            let a = build(kind, "Same", &ids);
            let b = build(kind, "Same", &ids);
            assert_ne!(a.id, b.id);
            assert_eq!(a.body, b.body);
            assert_eq!(a.hidden_for, b.hidden_for);
        }
    }

    #[test]
    fn test_build_named_unsupported() {
        let result = build_named("github-trophy", "GitHub Trophy", &ids());
        assert_eq!(
            result,
            Err(PaletteError::UnsupportedElementType {
                kind: "github-trophy".to_string()
            })
        );
    }

    #[test]
    fn test_build_named_known() {
        let element = build_named("divider", "Divider", &ids()).unwrap();
        assert_eq!(
            element.body,
            ElementBody::Divider {
                divider_style: "line".to_string()
            }
        );
    }

    #[test]
    fn test_build_media() {
        let element = build_media(
            "github-trophy",
            "https://example.com/t.svg".to_string(),
            "GitHub Trophy",
            &ids(),
        );
        assert_eq!(element.id.as_str(), "github-trophy-test-1");
        assert_eq!(
            element.body,
            ElementBody::Image(ImageElement {
                src: "https://example.com/t.svg".to_string(),
                alt: "GitHub Trophy".to_string(),
                width: "100%".to_string(),
                height: "auto".to_string(),
            })
        );
    }
}
