//! Shell script scanner — line-by-line state machine.
//!
//! Collects `##` doc lines, attaches them to the next function header and
//! records the function body up to its closing `}`.

use crate::model::*;
use crate::parser::{doxygen, ParseOptions};
use regex::Regex;
use std::sync::LazyLock;

// `name() {`, `function name {`, `function name() {`
static RE_FUNC_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:function[[:blank:]]+([a-zA-Z0-9_:.-]+)[[:blank:]]*(?:\([[:blank:]]*\))?",
        r"|([a-zA-Z0-9_:.-]+)[[:blank:]]*\([[:blank:]]*\))",
        r"[[:blank:]]*\{"
    ))
    .unwrap()
});

#[derive(Default)]
struct ScannerState {
    functions: Vec<FunctionNode>,
    /// Doc lines seen since the last header, prefix already stripped
    comments: Vec<String>,
    current: Option<FunctionNode>,
}

/// Scan a script and return every closed function in source order.
pub fn parse(input: &str, options: &ParseOptions) -> Script {
    let prefix = options.doc_prefix();
    let mut state = ScannerState::default();

    for (index, line) in input.lines().enumerate() {
        process_line(&mut state, line.trim(), index + 1, &prefix, options);
    }

    // Unclosed function at EOF is dropped
    Script {
        functions: state.functions,
    }
}

fn process_line(
    s: &mut ScannerState,
    line: &str,
    line_no: usize,
    prefix: &str,
    options: &ParseOptions,
) {
    // 1. Doc comment
    if let Some(rest) = line.strip_prefix(prefix) {
        s.comments.push(rest.trim_start().to_string());
        return;
    }

    // 2. Function header; an unclosed previous function is replaced
    if let Some(name) = header_name(line) {
        let doxygen = if s.comments.is_empty() {
            None
        } else {
            Some(doxygen::parse(&s.comments.join("\n"), options))
        };
        s.comments.clear();
        s.current = Some(FunctionNode {
            name,
            line: line_no,
            body: String::new(),
            doxygen,
        });
        return;
    }

    // 3. Closing brace
    if line == "}" {
        if let Some(func) = s.current.take() {
            s.functions.push(func);
            s.comments.clear();
            return;
        }
    }

    // 4. Body
    if let Some(func) = s.current.as_mut() {
        if !line.is_empty() {
            if !func.body.is_empty() {
                func.body.push('\n');
            }
            func.body.push_str(line);
        }
    }
}

/// Extract the function name from a header line.
fn header_name(line: &str) -> Option<String> {
    let caps = RE_FUNC_HEADER.captures(line)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}
