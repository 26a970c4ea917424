// ─── Argument Tokenizer ───
// Splits a shell-like option string into discrete launch arguments.
//
// Quote characters are kept in the emitted token: `a "b c"` becomes
// `a` and `"b c"`. Callers that hand tokens straight to a process
// launcher rely on this, so it must not be "fixed" into shell unquoting.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Separator {
    Whitespace,
    Quote(char),
}

fn is_quote(ch: char) -> bool {
    ch == '"' || ch == '\''
}

/// Only ASCII whitespace separates tokens; a no-break space stays inside
/// the token it appears in.
fn is_separator(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Strip leading and trailing spaces and control characters.
fn trim_control(raw: &str) -> &str {
    raw.trim_matches(|ch: char| ch <= ' ')
}

/// Split `raw` on whitespace runs, keeping `"..."` and `'...'` spans intact.
///
/// Never fails: an unterminated quote simply extends to the end of input.
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut separator = Separator::Whitespace;

    for ch in trim_control(raw).chars() {
        match separator {
            Separator::Whitespace if is_separator(ch) => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            Separator::Whitespace => {
                if is_quote(ch) {
                    separator = Separator::Quote(ch);
                }
                current.push(ch);
            }
            Separator::Quote(quote) => {
                current.push(ch);
                if ch == quote {
                    separator = Separator::Whitespace;
                }
            }
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Tokenize each raw string independently and concatenate in input order.
pub fn tokenize_all<I, S>(raw_strings: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw_strings
        .into_iter()
        .flat_map(|raw| tokenize(raw.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_runs() {
        assert_eq!(
            tokenize("  -Xmx512m \t -Dfoo=bar\n--verbose  "),
            vec!["-Xmx512m", "-Dfoo=bar", "--verbose"]
        );
    }

    #[test]
    fn keeps_quotes_in_quoted_tokens() {
        assert_eq!(tokenize("a \"b c\" d"), vec!["a", "\"b c\"", "d"]);
        assert_eq!(tokenize("-Dname='John Doe'"), vec!["-Dname='John Doe'"]);
    }

    #[test]
    fn other_quote_kind_is_literal_inside_a_span() {
        assert_eq!(tokenize("\"it's fine\" x"), vec!["\"it's fine\"", "x"]);
    }

    #[test]
    fn closing_quote_does_not_end_the_token() {
        assert_eq!(tokenize("\"a b\"c d"), vec!["\"a b\"c", "d"]);
    }

    #[test]
    fn unterminated_quote_extends_to_end() {
        assert_eq!(tokenize("'unterminated"), vec!["'unterminated"]);
        assert_eq!(tokenize("x \"y z  "), vec!["x", "\"y z"]);
    }

    #[test]
    fn surrounding_control_characters_are_trimmed() {
        assert_eq!(tokenize("\u{0}\x0B-ea 'a b \x0C"), vec!["-ea", "'a b"]);
    }

    #[test]
    fn no_break_space_does_not_split() {
        assert_eq!(tokenize("-Dname=a\u{00A0}b -ea"), vec!["-Dname=a\u{00A0}b", "-ea"]);
    }

    #[test]
    fn vertical_tab_and_form_feed_split_tokens() {
        assert_eq!(tokenize("a\x0Bb\x0Cc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_and_blank_input_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\r\n ").is_empty());
    }

    #[test]
    fn tokenizing_is_idempotent_for_the_same_input() {
        let raw = "--flag 'one two' three";
        assert_eq!(tokenize(raw), tokenize(raw));
    }

    #[test]
    fn tokenize_all_concatenates_in_order() {
        let options = vec!["-Xms64m -Xmx1g".to_string(), "-Dk=v".to_string()];
        assert_eq!(tokenize_all(&options), vec!["-Xms64m", "-Xmx1g", "-Dk=v"]);
    }
}
