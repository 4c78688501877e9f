//! Nested `@params` decoder.
//!
//! Nesting is encoded by dash runs in front of `@`:
//!
//! ```text
//! -@level1 Top level
//! --@level2 Nested param
//! ---@level3 Deepest level
//! ```
//!
//! A key whose children decode to a non-empty tree takes the tree; its own
//! inline text is dropped.

use crate::model::{MetaValue, ParamTree};
use regex::Regex;
use std::sync::LazyLock;

static RE_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-+)@([a-zA-Z0-9_]+)\s*(.*)$").unwrap());

/// Decode `lines` at nesting `depth` (1 for the top of a `@params` section).
///
/// Lines that are not a marker of exactly this depth are skipped here; deeper
/// ones are picked up by the recursive call for their parent.
pub fn decode<S: AsRef<str>>(lines: &[S], depth: usize) -> ParamTree {
    let mut tree = ParamTree::new();

    for (index, line) in lines.iter().enumerate() {
        let Some((key, value)) = match_marker(line.as_ref(), depth) else {
            continue;
        };

        let rest = &lines[index + 1..];
        let end = rest
            .iter()
            .position(|l| dash_run(l.as_ref()) == depth)
            .unwrap_or(rest.len());
        let children = &rest[..end];

        let subtree = if children.is_empty() {
            ParamTree::new()
        } else {
            decode(children, depth + 1)
        };

        let value = if subtree.is_empty() {
            MetaValue::leaf(Some(value))
        } else {
            MetaValue::Tree(subtree)
        };
        tree.insert(key.to_string(), value);
    }

    tree
}

/// Split a `-@key value` line of exactly `depth` dashes into key and value.
fn match_marker(line: &str, depth: usize) -> Option<(&str, &str)> {
    let caps = RE_PARAM.captures(line.trim())?;
    if caps.get(1)?.as_str().len() != depth {
        return None;
    }
    let key = caps.get(2)?.as_str();
    let value = caps.get(3).map_or("", |m| m.as_str());
    Some((key, value))
}

/// Number of leading dashes on the trimmed line.
fn dash_run(line: &str) -> usize {
    line.trim().bytes().take_while(|b| *b == b'-').count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode_json(lines: &[&str]) -> serde_json::Value {
        serde_json::to_value(decode(lines, 1)).unwrap()
    }

    #[test]
    fn flat_leaf() {
        assert_eq!(decode_json(&["-@a x"]), json!({ "a": "x" }));
    }

    #[test]
    fn children_replace_inline_value() {
        assert_eq!(
            decode_json(&["-@a x", "--@b y"]),
            json!({ "a": { "b": "y" } })
        );
    }

    #[test]
    fn siblings_scope_their_children() {
        assert_eq!(
            decode_json(&["-@a 1", "--@x", "--@y", "-@b 2"]),
            json!({ "a": { "x": {}, "y": {} }, "b": "2" })
        );
    }

    #[test]
    fn three_levels_with_indentation() {
        assert_eq!(
            decode_json(&[
                "   -@level1 Top level",
                "       --@level2 Nested param",
                "           ---@level3 Deepest level",
            ]),
            json!({ "level1": { "level2": { "level3": "Deepest level" } } })
        );
    }

    #[test]
    fn missing_value_is_empty_tree() {
        assert_eq!(decode_json(&["-@flag", "-@other   "]), json!({ "flag": {}, "other": {} }));
    }

    #[test]
    fn deeper_lines_are_not_direct_matches() {
        // --@orphan has no depth-1 parent, so nothing picks it up
        assert_eq!(
            decode_json(&["--@orphan x", "-@a 1"]),
            json!({ "a": "1" })
        );
    }

    #[test]
    fn bare_dash_line_closes_children_region() {
        // "- note" has a depth-1 dash run, so --@b falls outside a's children
        assert_eq!(decode_json(&["-@a x", "- note", "--@b y"]), json!({ "a": "x" }));
    }

    #[test]
    fn skipped_depth_leaves_parent_as_leaf() {
        // ---@c is two levels below -@a; the depth-2 pass finds nothing
        assert_eq!(decode_json(&["-@a keep", "---@c lost"]), json!({ "a": "keep" }));
    }

    #[test]
    fn noise_lines_are_ignored() {
        assert_eq!(
            decode_json(&["some text", "-@a 1", "@usage foo", "-@ bad", "-@b 2"]),
            json!({ "a": "1", "b": "2" })
        );
    }

    #[test]
    fn repeated_key_keeps_first_position_last_value() {
        let tree = decode(&["-@a 1", "-@b 2", "-@a 3"], 1);
        let keys: Vec<&str> = tree.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(tree["a"], MetaValue::Text("3".into()));
    }

    #[test]
    fn repeated_key_replaces_tree_wholesale() {
        assert_eq!(
            decode_json(&["-@a", "--@x 1", "-@a", "--@y 2"]),
            json!({ "a": { "y": "2" } })
        );
    }

    #[test]
    fn keys_follow_source_order() {
        let tree = decode(&["-@zeta", "-@alpha", "-@mid"], 1);
        let keys: Vec<&str> = tree.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn text_after_identifier_is_value() {
        assert_eq!(decode_json(&["-@key.rest of it"]), json!({ "key": ".rest of it" }));
    }

    #[test]
    fn empty_input() {
        let empty: [&str; 0] = [];
        assert!(decode(&empty, 1).is_empty());
    }

    #[test]
    fn dash_run_counts_leading_dashes() {
        assert_eq!(dash_run("  ---@x"), 3);
        assert_eq!(dash_run("@x"), 0);
        assert_eq!(dash_run("- -@x"), 1);
    }
}
