//! Data model for parsed scripts — format-agnostic.

use indexmap::IndexMap;
use serde::Serialize;

/// Ordered key → value tree decoded from a `@params` section.
pub type ParamTree = IndexMap<String, MetaValue>;

/// Top-level metadata of one comment block, keyed by section name.
pub type Metadata = IndexMap<String, MetaValue>;

/// A section or parameter value: free text or a nested tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetaValue {
    Text(String),
    Tree(ParamTree),
}

impl MetaValue {
    /// Leaf value for a parameter line: the trimmed text, or `{}` when blank.
    pub fn leaf(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => MetaValue::Text(v.to_string()),
            _ => MetaValue::Tree(ParamTree::new()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetaValue::Text(s) => Some(s),
            MetaValue::Tree(_) => None,
        }
    }

    pub fn as_tree(&self) -> Option<&ParamTree> {
        match self {
            MetaValue::Tree(t) => Some(t),
            MetaValue::Text(_) => None,
        }
    }
}

/// All documented functions found in one script.
#[derive(Debug, Default, Serialize)]
#[serde(tag = "type", rename = "ZshScript")]
pub struct Script {
    pub functions: Vec<FunctionNode>,
}

/// A single function definition with its optional doc metadata.
#[derive(Debug, Default, Serialize)]
#[serde(tag = "type", rename = "Function")]
pub struct FunctionNode {
    pub name: String,
    /// 1-based line of the function header
    pub line: usize,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doxygen: Option<Metadata>,
}

impl FunctionNode {
    /// Free-text section value, if the function has one under `key`.
    pub fn section(&self, key: &str) -> Option<&str> {
        self.doxygen.as_ref()?.get(key)?.as_text()
    }

    pub fn params(&self) -> Option<&ParamTree> {
        self.doxygen.as_ref()?.get("params")?.as_tree()
    }
}
