//! Query tokenizing and name normalization.
//!
//! Query arguments and directory names are both reduced to the same canonical
//! form before comparison, so punctuation, spacing and casing never cause a
//! missed match.

/// Normalize a string for matching
///
/// Lower-cases the input and keeps only letters and digits.
///
/// # Examples
/// ```ignore
/// assert_eq!(normalize("MyApp-V1"), "myappv1");
/// assert_eq!(normalize("10.6.3 (Beta)"), "1063beta");
/// assert_eq!(normalize("--"), "");
/// ```
pub fn normalize(s: &str) -> String {
    // Lower-case first: some lower-case mappings emit combining marks that
    // must then be filtered, otherwise normalize would not be idempotent.
    s.to_lowercase()
        .chars()
        .filter(|c| is_letter_or_digit(*c))
        .collect()
}

/// Letters and decimal digits survive normalization
///
/// Numeric symbols such as superscripts, fractions and roman numerals are
/// dropped. Only ASCII digits count as digits.
fn is_letter_or_digit(c: char) -> bool {
    c.is_ascii_digit() || (c.is_alphabetic() && !c.is_numeric())
}

/// A normalized search query
///
/// Tokens form a set: empty tokens are dropped and duplicates collapse, in
/// first-seen order. A query with no tokens matches every name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    tokens: Vec<String>,
}

impl Query {
    /// Build a query from raw user arguments
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens: Vec<String> = Vec::new();
        for arg in args {
            let token = normalize(arg.as_ref());
            if !token.is_empty() && !tokens.contains(&token) {
                tokens.push(token);
            }
        }
        Self { tokens }
    }

    /// Build a query from a single option value, splitting it on whitespace
    pub fn from_option(value: &str) -> Self {
        Self::new(value.split_whitespace())
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Check whether every token is a substring of an already normalized name
    pub fn matches(&self, normalized_name: &str) -> bool {
        self.tokens
            .iter()
            .all(|token| normalized_name.contains(token.as_str()))
    }
}
