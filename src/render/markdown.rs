//! GitHub-flavored markdown renderer.

use crate::model::*;
use crate::parser::doxygen::PARAMS_SECTION;
use crate::render::Renderer;
use anyhow::Result;

pub struct MarkdownRenderer;

/// Sections rendered in their own block instead of the details list.
const DEDICATED_SECTIONS: &[&str] = &["description", "usage", PARAMS_SECTION];

impl Renderer for MarkdownRenderer {
    fn render(&self, script: &Script) -> Result<String> {
        let mut output = String::new();

        if !script.functions.is_empty() {
            output.push_str("## Index\n\n");
            for func in &script.functions {
                output.push_str(&format!("* [{}](#{})\n", func.name, anchor(&func.name)));
            }
            output.push('\n');
        }

        for func in &script.functions {
            output.push_str(&render_function(func));
            output.push('\n');
        }

        Ok(output)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Render a single function's documentation block.
fn render_function(func: &FunctionNode) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### {}\n", func.name));

    if let Some(desc) = func.section("description").filter(|d| !d.is_empty()) {
        lines.push(desc.to_string());
        lines.push(String::new());
    }

    if let Some(usage) = func.section("usage").filter(|u| !u.is_empty()) {
        lines.push("#### Usage\n".to_string());
        lines.push(format!("`{}`", usage));
        lines.push(String::new());
    }

    if let Some(params) = func.params().filter(|p| !p.is_empty()) {
        lines.push("#### Parameters\n".to_string());
        render_tree(&mut lines, params, 0);
        lines.push(String::new());
    }

    if let Some(meta) = &func.doxygen {
        let details: Vec<String> = meta
            .iter()
            .filter(|(key, _)| !DEDICATED_SECTIONS.contains(&key.as_str()))
            .filter_map(|(key, value)| match value {
                MetaValue::Text(text) if text.is_empty() => Some(format!("* **{}**", key)),
                MetaValue::Text(text) => Some(format!("* **{}**: {}", key, text)),
                MetaValue::Tree(_) => None,
            })
            .collect();
        if !details.is_empty() {
            lines.push("#### Details\n".to_string());
            lines.extend(details);
            lines.push(String::new());
        }
    }

    if !func.body.is_empty() {
        lines.push("#### Source\n".to_string());
        lines.push("```zsh".to_string());
        lines.push(func.body.clone());
        lines.push("```".to_string());
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Nested bullet list, two spaces per level.
fn render_tree(lines: &mut Vec<String>, tree: &ParamTree, level: usize) {
    let indent = "  ".repeat(level);
    for (key, value) in tree {
        match value {
            MetaValue::Text(text) => lines.push(format!("{}* **{}**: {}", indent, key, text)),
            MetaValue::Tree(children) => {
                lines.push(format!("{}* **{}**", indent, key));
                render_tree(lines, children, level + 1);
            }
        }
    }
}

/// GitHub heading anchor: lowercase, keep alphanumerics and hyphens, spaces
/// become hyphens, everything else is dropped.
fn anchor(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            c if c.is_alphanumeric() || c == '-' => Some(c),
            _ => None,
        })
        .collect()
}
