use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::trace;

use crate::constant::*;
use crate::matcher::model::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum TokenMatcherError {
    #[error("Cannot duplicate the option '{0}'.")]
    DuplicateOption(String),

    #[error("Cannot duplicate the short option '{0}'.")]
    DuplicateShortOption(char),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum MatchError {
    #[error("Unknown flag '{0}'.")]
    UnknownFlag(String),

    #[error("Unexpected argument '{0}'; expected an option such as '--NAME'.")]
    UnexpectedArgument(String),

    #[error("Option '{0}' cannot be specified more than once.")]
    DuplicateOption(String),

    #[error("Option '{0}' expects a value.")]
    MissingValue(String),
}

/// Aligns tokens to options.
///
/// The matcher is either *idle* (the next token must introduce an option), or *awaiting a value* for an introduced option.
/// When awaiting a value, the next token is captured as that value without classifying it.
#[derive(Debug)]
pub(crate) struct TokenMatcher {
    options: HashSet<String>,
    short_options: HashMap<char, String>,
    specified: HashSet<String>,
    fed: usize,
    matches: Vec<MatchToken>,
    buffer: Option<MatchBuffer>,
}

impl TokenMatcher {
    pub(crate) fn new(
        options: impl IntoIterator<Item = OptionConfig>,
    ) -> Result<Self, TokenMatcherError> {
        let mut option_names = HashSet::default();
        let mut short_options = HashMap::default();

        for option_config in options.into_iter() {
            if !option_names.insert(option_config.name().to_string()) {
                return Err(TokenMatcherError::DuplicateOption(
                    option_config.name().to_string(),
                ));
            }

            if let Some(short) = option_config.short() {
                if short_options
                    .insert(short, option_config.name().to_string())
                    .is_some()
                {
                    return Err(TokenMatcherError::DuplicateShortOption(short));
                }
            }
        }

        Ok(Self {
            options: option_names,
            short_options,
            specified: HashSet::default(),
            fed: 0,
            matches: Vec::default(),
            buffer: None,
        })
    }

    pub(crate) fn feed(&mut self, token: &str) -> Result<(), MatchError> {
        let offset = self.fed;
        self.fed += 1;

        // 1. Capture the value of an introduced option, regardless of what it looks like:
        //  --b -2
        //  --b --a
        //  --b ''
        if let Some(match_buffer) = self.buffer.take() {
            trace!("Token {offset} '{token}' is the value for '{}'.", match_buffer.name());
            self.matches.push(match_buffer.close(offset, token));
            return Ok(());
        }

        // 2. Find a 'long' flag, such as:
        //  --initial
        //  --initial=..
        // 3. Find a 'short' flag, such as (-i is an example short flag):
        //  -i
        //  -i=..
        //  -i..
        // 4. Everything else is unexpected; there are no positional arguments.
        if let Some(flag) = token.strip_prefix(LONG_PREFIX) {
            self.match_option(offset, token, split_equals_delimiter(flag))
        } else if let Some(flag) = token
            .strip_prefix(SHORT_PREFIX)
            .filter(|flag| !flag.is_empty())
        {
            self.match_option_short(offset, token, flag)
        } else {
            Err(MatchError::UnexpectedArgument(token.to_string()))
        }
    }

    fn match_option(
        &mut self,
        offset: usize,
        token: &str,
        (option_name, single_argument): (&str, Option<&str>),
    ) -> Result<(), MatchError> {
        if self.options.contains(option_name) {
            trace!("Token {offset} '{token}' introduces '{option_name}'.");
            self.introduce(offset, option_name.to_string(), single_argument)
        } else {
            Err(MatchError::UnknownFlag(token.to_string()))
        }
    }

    fn match_option_short(
        &mut self,
        offset: usize,
        token: &str,
        short_option: &str,
    ) -> Result<(), MatchError> {
        let mut characters = short_option.chars();
        let single = characters
            .next()
            .expect("internal error - short option must contain at least one character");

        match self.short_options.get(&single) {
            Some(name) => {
                let name = name.clone();
                let remaining = characters.as_str();
                // Either '-i', '-i=..', or '-i..'.
                let single_argument = if remaining.is_empty() {
                    None
                } else {
                    Some(remaining.strip_prefix(VALUE_DELIMITER).unwrap_or(remaining))
                };
                trace!("Token {offset} '{token}' introduces '{name}'.");
                self.introduce(offset, name, single_argument)
            }
            None => Err(MatchError::UnknownFlag(token.to_string())),
        }
    }

    fn introduce(
        &mut self,
        offset: usize,
        name: String,
        single_argument: Option<&str>,
    ) -> Result<(), MatchError> {
        if !self.specified.insert(name.clone()) {
            return Err(MatchError::DuplicateOption(name));
        }

        match single_argument {
            // Options using k=v syntax are closed right away.
            Some(value) => {
                self.matches.push(MatchBuffer::new(name, offset).close(offset, value));
            }
            None => {
                if self.buffer.replace(MatchBuffer::new(name, offset)).is_some() {
                    unreachable!("internal error - the buffer is expected to be None");
                }
            }
        };

        Ok(())
    }

    pub(crate) fn close(self) -> Result<Matches, (usize, MatchError)> {
        match self.buffer {
            Some(match_buffer) => Err((
                match_buffer.offset(),
                MatchError::MissingValue(match_buffer.name().to_string()),
            )),
            None => Ok(Matches {
                values: self.matches,
            }),
        }
    }
}

fn split_equals_delimiter(token: &str) -> (&str, Option<&str>) {
    match token.split_once(VALUE_DELIMITER) {
        Some((n, v)) => (n, Some(v)),
        None => (token, None),
    }
}
