/// The tokens of a failed parse, pointing at the offending token.
///
/// ### Example
/// ```
/// use adder_parser::ErrorContext;
///
/// let context = ErrorContext::new(1, &["add", "--a=foo", "--b=1"]);
/// assert_eq!(context.to_string(), "add --a=foo --b=1\n    ^");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    offset: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    /// Point at the token at index `offset`.
    /// An offset past the final token points to the end of the input.
    pub fn new(offset: usize, tokens: &[&str]) -> Self {
        Self {
            offset,
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The index of the offending token.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let projection = self.tokens.join(" ");
        let width = if self.offset < self.tokens.len() {
            // Each preceding token, plus its separating space.
            self.tokens[..self.offset]
                .iter()
                .map(|token| token.chars().count() + 1)
                .sum::<usize>()
        } else if self.tokens.is_empty() {
            0
        } else {
            projection.chars().count() + 1
        };

        write!(f, "{projection}\n{:width$}^", "")
    }
}
