//! Fixed dialect tokens.
//!
//! Generated scripts are compiled against a host that provides `Context` and
//! the exception type below, so these strings must match it exactly.

/// Return-type keyword for aliases whose target returns nothing.
pub const VOID: &str = "void";

/// Visibility of every generated alias.
pub const PUBLIC: &str = "public";

/// Visibility of generated backing fields.
pub const PRIVATE: &str = "private";

/// Identifier passed in place of the receiver parameter at call sites.
pub const CONTEXT: &str = "Context";

/// Exception thrown by aliases whose target is obsolete with `is_error`.
pub const OBSOLETE_EXCEPTION: &str = "Cake.ScriptServer.CakeException";

/// Call used to log the deprecation warning of an obsolete alias.
pub const LOG_WARNING: &str = "Context.Log.Warning";

/// Prefix of the logged deprecation warning.
pub const WARNING_PREFIX: &str = "Warning: ";

/// Silences "member is obsolete" diagnostics around the wrapped invocation.
pub const PRAGMA_DISABLE_OBSOLETE: &str = "#pragma warning disable 0618";

pub const PRAGMA_RESTORE_OBSOLETE: &str = "#pragma warning restore 0618";

/// Escape `text` for use inside a double-quoted string literal.
pub fn escape_string_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        push_escaped(&mut escaped, ch, '"');
    }
    escaped
}

/// Escape a character for use inside a single-quoted character literal.
pub fn escape_char_literal(ch: char) -> String {
    let mut escaped = String::with_capacity(2);
    push_escaped(&mut escaped, ch, '\'');
    escaped
}

fn push_escaped(out: &mut String, ch: char, quote: char) {
    match ch {
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\0' => out.push_str("\\0"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        c => out.push(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_string_literal() {
        assert_eq!(escape_string_literal("plain"), "plain");
        assert_eq!(escape_string_literal(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_string_literal("a\\b\nc"), "a\\\\b\\nc");
        assert_eq!(escape_string_literal("it's"), "it's");
    }

    #[test]
    fn test_escape_char_literal() {
        assert_eq!(escape_char_literal('x'), "x");
        assert_eq!(escape_char_literal('\''), "\\'");
        assert_eq!(escape_char_literal('"'), "\"");
        assert_eq!(escape_char_literal('\t'), "\\t");
    }
}
