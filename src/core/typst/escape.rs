//! Escaping of user text placed inside Typst content blocks

/// Characters with markup meaning inside `[...]`: `#` starts an expression,
/// brackets open and close content blocks.
const INLINE_ESCAPE_CHARS: [char; 3] = ['#', '[', ']'];

/// Escape `#`, `[` and `]` with a backslash unless already escaped
///
/// A marker counts as escaped when an odd number of backslashes directly
/// precedes it. The scan is a single left-to-right pass, so escaping is
/// idempotent: `escape(escape(s)) == escape(s)`. Line endings are normalized
/// to `\n` first.
pub fn escape_typst_inline(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let normalized = value.replace("\r\n", "\n").replace('\r', "\n");
    let mut result = String::with_capacity(normalized.len() + 4);
    let mut backslashes = 0usize;

    for ch in normalized.chars() {
        if INLINE_ESCAPE_CHARS.contains(&ch) && backslashes % 2 == 0 {
            result.push('\\');
        }
        result.push(ch);

        if ch == '\\' {
            backslashes += 1;
        } else {
            backslashes = 0;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_markers() {
        assert_eq!(escape_typst_inline("a#b"), r"a\#b");
        assert_eq!(
            escape_typst_inline("Literal # and [brackets]"),
            r"Literal \# and \[brackets\]"
        );
    }

    #[test]
    fn test_keeps_existing_escapes() {
        assert_eq!(escape_typst_inline(r"a\#b"), r"a\#b");
        assert_eq!(escape_typst_inline(r"Already \] ok"), r"Already \] ok");
    }

    #[test]
    fn test_even_backslash_run_is_not_an_escape() {
        // `\\` is an escaped backslash, so the `#` after it is still bare
        assert_eq!(escape_typst_inline(r"a\\#b"), r"a\\\#b");
    }

    #[test]
    fn test_trailing_backslash_is_left_alone() {
        // Known limitation: a lone trailing backslash escapes the closing
        // bracket of the surrounding content block.
        assert_eq!(escape_typst_inline(r"C:\"), r"C:\");
        assert_eq!(escape_typst_inline(r"C:\\"), r"C:\\");
    }

    #[test]
    fn test_idempotent() {
        for input in ["#[]", r"\#", r"\\[", "x]]#", "plain", ""] {
            let once = escape_typst_inline(input);
            assert_eq!(escape_typst_inline(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_normalizes_line_endings() {
        assert_eq!(escape_typst_inline("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn test_other_characters_untouched() {
        assert_eq!(escape_typst_inline("*bold* _x_ $y$"), "*bold* _x_ $y$");
        assert_eq!(escape_typst_inline("naïve — ok"), "naïve — ok");
    }
}
