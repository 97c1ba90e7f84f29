use std::rc::Rc;

use thiserror::Error;

use crate::chars::Char;
use crate::recipes::Charset;
use crate::transliterators::TransliteratorConfig;

/// A lazily evaluated character stream.
pub type CharIter<'a> = Box<dyn Iterator<Item = Rc<Char>> + 'a>;

/// A transliterator stage: a pure stream-to-stream transformer. The stage
/// value itself is immutable configuration; per-call state (lookahead
/// buffers, last-character trackers) lives in the returned iterator.
pub trait Transliterate {
    fn transliterate<'a>(&'a self, input: CharIter<'a>) -> CharIter<'a>;
}

/// Errors surfaced at pipeline construction, before any input is processed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least one transliterator must be specified")]
    EmptyChain,
    #[error("transliterator not found: {0}")]
    UnknownTransliterator(String),
    #[error("to_fullwidth and to_halfwidth are mutually exclusive")]
    MutuallyExclusiveOptions,
    #[error("charset {0} is not supported by the ivs-svs-base transliterator")]
    UnsupportedCharset(Charset),
}

/// An ordered, non-empty chain of stages composed by function composition
/// over the character stream.
pub struct ChainedTransliterator {
    stages: Vec<Box<dyn Transliterate>>,
}

impl ChainedTransliterator {
    pub fn new<I>(configs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = TransliteratorConfig>,
    {
        let stages = configs
            .into_iter()
            .map(|config| config.instantiate())
            .collect::<Result<Vec<_>, _>>()?;
        if stages.is_empty() {
            return Err(ConfigError::EmptyChain);
        }
        Ok(ChainedTransliterator { stages })
    }
}

impl Transliterate for ChainedTransliterator {
    fn transliterate<'a>(&'a self, input: CharIter<'a>) -> CharIter<'a> {
        let mut chars = input;
        for stage in &self.stages {
            chars = stage.transliterate(chars);
        }
        chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{build_char_list, from_chars};

    #[test]
    fn empty_chain_is_rejected() {
        assert_eq!(
            ChainedTransliterator::new(vec![]).err(),
            Some(ConfigError::EmptyChain)
        );
    }

    #[test]
    fn stages_compose_left_to_right() {
        let chain = ChainedTransliterator::new(vec![
            TransliteratorConfig::Spaces,
            TransliteratorConfig::Radicals,
        ])
        .unwrap();
        let chars = build_char_list("⼀\u{3000}⼆");
        let result = from_chars(chain.transliterate(Box::new(chars.into_iter())));
        assert_eq!(result, "一 二");
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        assert_eq!(
            TransliteratorConfig::from_identifier("invalid-name").err(),
            Some(ConfigError::UnknownTransliterator("invalid-name".to_owned()))
        );
    }
}
