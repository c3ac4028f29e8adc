/// The raw value matched to an option, along with the index of the token it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct MatchToken {
    pub name: String,
    pub offset: usize,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct OptionConfig {
    name: String,
    short: Option<char>,
}

impl OptionConfig {
    pub(crate) fn new(name: impl Into<String>, short: Option<char>) -> Self {
        Self {
            name: name.into(),
            short,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn short(&self) -> Option<char> {
        self.short
    }
}

/// An option flag which has been introduced, but has not yet received its value.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct MatchBuffer {
    name: String,
    offset: usize,
}

impl MatchBuffer {
    pub(super) fn new(name: impl Into<String>, offset: usize) -> Self {
        Self {
            name: name.into(),
            offset,
        }
    }

    pub(super) fn name(&self) -> &str {
        &self.name
    }

    pub(super) fn offset(&self) -> usize {
        self.offset
    }

    /// Close the buffer with its value, consuming the buffer.
    pub(super) fn close(self, offset: usize, value: impl Into<String>) -> MatchToken {
        MatchToken {
            name: self.name,
            offset,
            value: value.into(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Matches {
    pub values: Vec<MatchToken>,
}
