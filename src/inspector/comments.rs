const COMMENT_MARKER: char = '#';

/// Line-based comment scan.
///
/// Takes whatever follows the first `#` on each line. String literals are
/// not recognized, so `s = "a#b"` yields `b"`.
pub(crate) fn collect_comments(source: &str) -> Vec<String> {
    source
        .split('\n')
        .filter_map(|line| line.split_once(COMMENT_MARKER))
        .map(|(_, comment)| comment.trim())
        .filter(|comment| !comment.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_comment() {
        assert_eq!(collect_comments("x = 1  # set x"), vec!["set x"]);
    }

    #[test]
    fn test_empty_marker_is_skipped() {
        assert!(collect_comments("#\n#   \nx = 1\n").is_empty());
    }

    #[test]
    fn test_text_after_first_marker_only() {
        assert_eq!(collect_comments("# a # b"), vec!["a # b"]);
    }

    #[test]
    fn test_crlf_lines_are_trimmed() {
        assert_eq!(
            collect_comments("# one\r\n# two\r\n"),
            vec!["one", "two"]
        );
    }
}
