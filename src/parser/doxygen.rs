//! Comment-block metadata parser.
//!
//! Turns a block like
//!
//! ```text
//! ## @description Print a greeting
//! ## spanning two lines
//! ## @usage greet <name>
//! ## @params
//! ## -@name Who to greet
//! ```
//!
//! into `{ description, usage, params: { name } }`. Every `@key` line opens a
//! free-text section; `@params` hands the rest of the block to
//! [`params::decode`].

use crate::model::{MetaValue, Metadata};
use crate::parser::{normalize, params, ParseOptions};

/// Section whose body is decoded as a nested parameter tree.
pub const PARAMS_SECTION: &str = "params";

/// Parse one raw comment block into its metadata tree.
pub fn parse(block: &str, options: &ParseOptions) -> Metadata {
    let lines = normalize::normalize(block, options.marker);
    split_sections(&lines)
}

/// Fold normalized lines into sections.
pub fn split_sections(lines: &[String]) -> Metadata {
    let mut meta = Metadata::new();
    let mut current: Option<String> = None;

    for (index, line) in lines.iter().enumerate() {
        let (token, rest) = match line.split_once(char::is_whitespace) {
            Some((token, rest)) => (token, rest.trim()),
            None => (line.as_str(), ""),
        };

        if let Some(key) = token.strip_prefix('@') {
            let value = if key == PARAMS_SECTION {
                MetaValue::Tree(params::decode(&lines[index + 1..], 1))
            } else {
                MetaValue::Text(rest.to_string())
            };
            meta.insert(key.to_string(), value);
            // A bare `@` records an empty key but opens no section
            current = (!key.is_empty()).then(|| key.to_string());
            continue;
        }

        match current.as_deref() {
            Some(section) if section != PARAMS_SECTION => append_text(&mut meta, section, line),
            _ => {}
        }
    }

    meta
}

/// Continue a free-text section. Blank lines still add a separator.
fn append_text(meta: &mut Metadata, section: &str, line: &str) {
    if let Some(MetaValue::Text(text)) = meta.get_mut(section) {
        if !text.is_empty() {
            text.push(' ');
            text.push_str(line);
            return;
        }
    }
    meta.insert(section.to_string(), MetaValue::Text(line.to_string()));
}
