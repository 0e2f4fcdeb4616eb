/// Knobs for a single conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Indent the rendered JSON.
    pub pretty: bool,
    /// Drop one pair of enclosing double quotes from the raw criteria.
    pub strip_quotes: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { pretty: true, strip_quotes: true }
    }
}

impl Options {
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    pub fn keep_quotes(mut self) -> Self {
        self.strip_quotes = false;
        self
    }

    /// Apply the input-side options to a raw criteria string.
    pub(crate) fn prepare<'a>(&self, criteria: &'a str) -> &'a str {
        if !self.strip_quotes {
            return criteria;
        }
        criteria
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_one_pair_of_quotes() {
        let opts = Options::default();
        assert_eq!(opts.prepare(r#""[A] = 1""#), "[A] = 1");
        assert_eq!(opts.prepare(r#"""[A]"""#), r#""[A]""#);
        assert_eq!(opts.prepare(r#""[A]"#), r#""[A]"#);
    }

    #[test]
    fn keep_quotes_leaves_input_alone() {
        let opts = Options::default().keep_quotes();
        assert_eq!(opts.prepare(r#""[A]""#), r#""[A]""#);
    }
}
