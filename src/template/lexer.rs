//! Lexer for URL templates using logos
//!
//! Every byte of a template lands in exactly one token, so concatenating the
//! token slices reproduces the input.

use logos::Logos;

/// Byte range in template text
pub type Span = std::ops::Range<usize>;

/// Template token
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// `{name}`, carrying the name without braces
    Placeholder(String),

    /// Literal run without braces
    Text,

    /// Brace that does not open a placeholder
    OpenBrace,

    /// Brace that does not close a placeholder
    CloseBrace,
}

/// Brace-level tokens; placeholders are assembled from these in [`lex`]
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum Raw {
    #[token("{")]
    Open,

    #[token("}")]
    Close,

    #[regex(r"[^{}]+")]
    Text,
}

fn is_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Tokenize a template into spanned tokens
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> {
    // The three raw patterns cover every byte, so errors cannot occur; map
    // them to text anyway so no input is ever dropped.
    let raw: Vec<(Raw, Span)> = Raw::lexer(input)
        .spanned()
        .map(|(tok, span)| (tok.unwrap_or(Raw::Text), span))
        .collect();

    let mut tokens = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        if let [(Raw::Open, open), (Raw::Text, name), (Raw::Close, close), ..] = &raw[i..] {
            let name = &input[name.clone()];
            if is_name(name) {
                tokens.push((Token::Placeholder(name.to_string()), open.start..close.end));
                i += 3;
                continue;
            }
        }
        let (tok, span) = &raw[i];
        let token = match tok {
            Raw::Open => Token::OpenBrace,
            Raw::Close => Token::CloseBrace,
            Raw::Text => Token::Text,
        };
        tokens.push((token, span.clone()));
        i += 1;
    }
    tokens.into_iter()
}
