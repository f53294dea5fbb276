//! Placeholder substitution for URL templates

use std::collections::HashMap;

use log::trace;

use super::lexer::{lex, Token};
use crate::config::PaletteConfig;

/// Named values for template placeholders
///
/// A bound value always wins over a fallback. Placeholders with neither are
/// left in the output as written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: HashMap<String, String>,
    fallbacks: HashMap<String, String>,
}

/// Where a substituted value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding<'a> {
    Bound(&'a str),
    Fallback(&'a str),
    Unbound,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bindings and fallbacks taken from a palette configuration
    pub fn from_config(config: &PaletteConfig) -> Self {
        Self {
            values: config.bindings.clone().into_iter().collect(),
            fallbacks: config.fallbacks.clone().into_iter().collect(),
        }
    }

    /// Bind a placeholder to a value
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Set the value used when a placeholder is not bound
    pub fn fallback(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fallbacks.insert(name.into(), value.into());
        self
    }

    /// Look up the value for a placeholder
    pub fn get(&self, name: &str) -> Binding<'_> {
        if let Some(value) = self.values.get(name) {
            Binding::Bound(value)
        } else if let Some(value) = self.fallbacks.get(name) {
            Binding::Fallback(value)
        } else {
            Binding::Unbound
        }
    }
}

/// Replace every `{name}` placeholder in `template`
///
/// Substitution is purely textual: no escaping, no URL validation. Stray
/// braces are copied through unchanged.
pub fn resolve(template: &str, bindings: &Bindings) -> String {
    let mut out = String::with_capacity(template.len());
    for (token, span) in lex(template) {
        match token {
            Token::Placeholder(name) => match bindings.get(&name) {
                Binding::Bound(value) | Binding::Fallback(value) => out.push_str(value),
                Binding::Unbound => out.push_str(&template[span]),
            },
            Token::Text | Token::OpenBrace | Token::CloseBrace => out.push_str(&template[span]),
        }
    }
    trace!(template, resolved = out.as_str(); "Resolved template");
    out
}

/// Distinct placeholder names in order of first appearance
pub fn placeholders(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for (token, _) in lex(template) {
        if let Token::Placeholder(name) = token {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_single_placeholder() {
        let bindings = Bindings::new().bind("username", "alice");
        assert_eq!(resolve("https://x/?u={username}", &bindings), "https://x/?u=alice");
    }

    #[test]
    fn test_repeated_placeholder() {
        let bindings = Bindings::new().bind("username", "bob");
        assert_eq!(
            resolve("https://x/?u={username}&v={username}", &bindings),
            "https://x/?u=bob&v=bob"
        );
    }

    #[test]
    fn test_fallback_used_when_unbound() {
        let bindings = Bindings::new().fallback("username", "your-username");
        assert_snapshot!(
            resolve("https://github-profile-trophy.vercel.app/?username={username}&theme=onedark", &bindings),
            @"https://github-profile-trophy.vercel.app/?username=your-username&theme=onedark"
        );
    }

    #[test]
    fn test_binding_beats_fallback() {
        let bindings = Bindings::new()
            .fallback("username", "your-username")
            .bind("username", "carol");
        assert_eq!(resolve("{username}", &bindings), "carol");
        assert_eq!(bindings.get("username"), Binding::Bound("carol"));
    }

    #[test]
    fn test_unbound_left_in_place() {
        let bindings = Bindings::new().bind("username", "dave");
        assert_eq!(
            resolve("https://x/{username}/{repo}", &bindings),
            "https://x/dave/{repo}"
        );
    }

    #[test]
    fn test_malformed_passes_through() {
        let bindings = Bindings::new().bind("username", "erin");
        assert_eq!(resolve("https://x/{username", &bindings), "https://x/{username");
        assert_eq!(resolve("}{username}{", &bindings), "}erin{");
        assert_eq!(
            resolve("https://x/{user name}?u={username}", &bindings),
            "https://x/{user name}?u=erin"
        );
        assert_eq!(resolve("a{b-c&d={username}", &bindings), "a{b-c&d=erin");
    }

    #[test]
    fn test_order_independent() {
        let a = Bindings::new().bind("x", "1").bind("y", "2");
        let b = Bindings::new().bind("y", "2").bind("x", "1");
        assert_eq!(resolve("{y}{x}{y}", &a), resolve("{y}{x}{y}", &b));
        assert_eq!(resolve("{y}{x}{y}", &a), "212");
    }

    #[test]
    fn test_from_config() {
        let config = PaletteConfig::default().with_username("frank");
        let bindings = Bindings::from_config(&config);
        assert_eq!(bindings.get("username"), Binding::Bound("frank"));

        let defaults = Bindings::from_config(&PaletteConfig::default());
        assert_eq!(defaults.get("username"), Binding::Fallback("your-username"));
        assert_eq!(defaults.get("theme"), Binding::Unbound);
    }

    #[test]
    fn test_placeholders_distinct_in_order() {
        assert_eq!(
            placeholders("{b}/{a}/{b}/{c"),
            vec!["b".to_string(), "a".to_string()]
        );
        assert!(placeholders("https://example.com").is_empty());
    }
}
