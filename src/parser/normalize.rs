//! Line normalizer: strip comment markers and surrounding whitespace.

/// Normalize every line of a comment block.
///
/// Blank lines are kept as empty strings so that indices into the result
/// line up with the raw block.
pub fn normalize(block: &str, marker: char) -> Vec<String> {
    block
        .split('\n')
        .map(|line| normalize_line(line, marker))
        .collect()
}

/// Drop a leading run of `marker` plus the whitespace around it.
pub fn normalize_line(line: &str, marker: char) -> String {
    line.trim_start()
        .trim_start_matches(marker)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_marker_run() {
        assert_eq!(normalize_line("## @usage foo", '#'), "@usage foo");
        assert_eq!(normalize_line("#@brief x", '#'), "@brief x");
        assert_eq!(normalize_line("   ###   text  ", '#'), "text");
    }

    #[test]
    fn unmarked_line_is_trimmed() {
        assert_eq!(normalize_line("  -@param1 Desc ", '#'), "-@param1 Desc");
    }

    #[test]
    fn keeps_blank_lines() {
        let lines = normalize("# a\n\n#\n   \n# b", '#');
        assert_eq!(lines, vec!["a", "", "", "", "b"]);
    }

    #[test]
    fn custom_marker() {
        assert_eq!(normalize_line(";; @usage run", ';'), "@usage run");
        assert_eq!(normalize_line("## kept", ';'), "## kept");
    }

    #[test]
    fn handles_crlf() {
        assert_eq!(normalize("# a\r\n# b\r", '#'), vec!["a", "b"]);
    }
}
