//! Lexical analysis (tokenization) of a single input line.
//!
//! The language is deliberately flat: a token is a maximal run of characters that are
//! not delimiters. There is no quoting, escaping or substitution, so `"a b"` yields the
//! two tokens `"a` and `b"`.

/// Characters that separate tokens. Consecutive delimiters collapse.
const DELIMITERS: [char; 3] = [' ', '\t', '\n'];

fn is_delimiter(ch: char) -> bool {
    DELIMITERS.contains(&ch)
}

/// Split `line` into tokens.
///
/// Leading and trailing delimiters are discarded and never produce empty tokens, so an
/// empty or blank line yields an empty vector. Each call returns freshly owned strings.
///
/// # Example
/// ```
/// use tiny_shell::lexer::tokenize;
/// assert_eq!(tokenize("  echo\thello   world\n"), vec!["echo", "hello", "world"]);
/// assert!(tokenize(" \t ").is_empty());
/// ```
pub fn tokenize(line: &str) -> Vec<String> {
    line.split(is_delimiter)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
