//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the Script model directly; metadata keys keep source order.

use crate::model::*;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, script: &Script) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(script).context("failed to serialize script")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{script, ParseOptions};

    #[test]
    fn preserves_param_order() {
        let input = "## @params\n## -@zeta z\n## -@alpha a\nf() {\n}\n";
        let parsed = script::parse(input, &ParseOptions::default());
        let out = JsonRenderer.render(&parsed).unwrap();
        let zeta = out.find("\"zeta\"").unwrap();
        let alpha = out.find("\"alpha\"").unwrap();
        assert!(zeta < alpha, "got: {out}");
    }

    #[test]
    fn output_is_valid_json() {
        let parsed = script::parse("## @brief \"quoted\"\nf() {\n  echo\n}\n", &ParseOptions::default());
        let out = JsonRenderer.render(&parsed).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["type"], "ZshScript");
        assert_eq!(value["functions"][0]["doxygen"]["brief"], "\"quoted\"");
    }
}
