//! Lint checks for URL templates.
//!
//! Template resolution never fails; this module reports what resolution
//! would silently accept: placeholders without a value, placeholders that
//! fall back to a stand-in value, and braces that are not part of a
//! placeholder.

use std::fmt;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use super::lexer::{lex, Span, Token};
use super::substitute::{Binding, Bindings};

/// A lint warning about a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateWarning {
    pub category: LintCategory,
    pub message: String,
    pub span: Span,
}

/// Category of template defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    Unbound,
    Fallback,
    StrayBrace,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Unbound => write!(f, "unbound"),
            LintCategory::Fallback => write!(f, "fallback"),
            LintCategory::StrayBrace => write!(f, "stray-brace"),
        }
    }
}

impl fmt::Display for TemplateWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} at {:?}", self.category, self.message, self.span)
    }
}

impl TemplateWarning {
    /// Format the warning with template context using ariadne
    pub fn format(&self, template: &str, name: &str) -> String {
        let color = match self.category {
            LintCategory::Unbound | LintCategory::StrayBrace => Color::Yellow,
            LintCategory::Fallback => Color::Blue,
        };

        let title = match self.category {
            LintCategory::Unbound => "unbound placeholder",
            LintCategory::Fallback => "fallback placeholder",
            LintCategory::StrayBrace => "stray brace",
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Warning, name, self.span.start)
            .with_config(Config::default().with_color(false))
            .with_message(title)
            .with_label(
                Label::new((name, self.span.clone()))
                    .with_message(&self.message)
                    .with_color(color),
            )
            .finish()
            .write((name, Source::from(template)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// Run all lint checks on a template
pub fn check(template: &str, bindings: &Bindings) -> Vec<TemplateWarning> {
    let mut warnings = Vec::new();
    for (token, span) in lex(template) {
        match token {
            Token::Placeholder(name) => match bindings.get(&name) {
                Binding::Bound(_) => {}
                Binding::Fallback(value) => warnings.push(TemplateWarning {
                    category: LintCategory::Fallback,
                    message: format!("{{{}}} falls back to \"{}\"", name, value),
                    span,
                }),
                Binding::Unbound => warnings.push(TemplateWarning {
                    category: LintCategory::Unbound,
                    message: format!("{{{}}} has no value and is left as written", name),
                    span,
                }),
            },
            Token::OpenBrace => warnings.push(TemplateWarning {
                category: LintCategory::StrayBrace,
                message: "'{' does not open a placeholder".to_string(),
                span,
            }),
            Token::CloseBrace => warnings.push(TemplateWarning {
                category: LintCategory::StrayBrace,
                message: "'}' does not close a placeholder".to_string(),
                span,
            }),
            Token::Text => {}
        }
    }
    warnings
}
