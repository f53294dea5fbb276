//! URL template substitution for API-backed elements
//!
//! A template is plain text with `{name}` placeholders, where `name` matches
//! `[A-Za-z_][A-Za-z0-9_-]*`. Resolution replaces every placeholder with its
//! bound value, or its fallback value, or leaves it as written. Any brace that
//! is not part of a placeholder is literal text.
//!
//! # Example
//!
//! ```rust
//! use readme_palette::template::{resolve, Bindings};
//!
//! let bindings = Bindings::new().fallback("username", "your-username");
//! let url = resolve("https://github-readme-stats.vercel.app/api?username={username}", &bindings);
//! assert_eq!(url, "https://github-readme-stats.vercel.app/api?username=your-username");
//! ```

pub mod lexer;
pub mod lint;
mod substitute;

pub use lint::{check, LintCategory, TemplateWarning};
pub use substitute::{placeholders, resolve, Binding, Bindings};
