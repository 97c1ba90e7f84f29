//! Substitute commoner counterparts for hyphens and a number of symbols,
//! picking the first applicable variant in the configured precedence order.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::chars::{Char, CharExt};
use crate::intrinsics::{CharIter, Transliterate};
use crate::transliterators::hyphens_data::HYPHENS_MAPPINGS;

/// Replacement alternatives for one hyphen-like character. Fields are `None`
/// when the target character set has no counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HyphensRecord {
    pub ascii: Option<&'static str>,
    pub jisx0201: Option<&'static str>,
    pub jisx0208_90: Option<&'static str>,
    pub jisx0208_90_windows: Option<&'static str>,
    pub jisx0208_verbatim: Option<&'static str>,
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HyphensPrecedence {
    #[serde(rename = "ascii")]
    Ascii,
    #[serde(rename = "jisx0201")]
    Jisx0201,
    #[serde(rename = "jisx0208_90")]
    Jisx0208_90,
    #[serde(rename = "jisx0208_90_windows")]
    Jisx0208_90Windows,
    #[serde(rename = "jisx0208_verbatim")]
    Jisx0208Verbatim,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HyphensOptions {
    pub precedence: Vec<HyphensPrecedence>,
}

impl Default for HyphensOptions {
    fn default() -> Self {
        HyphensOptions {
            precedence: vec![HyphensPrecedence::Jisx0208_90],
        }
    }
}

static TABLE: Lazy<HashMap<char, HyphensRecord>> =
    Lazy::new(|| HYPHENS_MAPPINGS.iter().copied().collect());

pub struct Hyphens {
    precedence: Vec<HyphensPrecedence>,
}

impl Hyphens {
    pub fn new(options: HyphensOptions) -> Self {
        Hyphens {
            precedence: options.precedence,
        }
    }

    fn replacement(&self, record: &HyphensRecord) -> Option<&'static str> {
        self.precedence.iter().find_map(|variant| match variant {
            HyphensPrecedence::Ascii => record.ascii,
            HyphensPrecedence::Jisx0201 => record.jisx0201,
            HyphensPrecedence::Jisx0208_90 => record.jisx0208_90,
            HyphensPrecedence::Jisx0208_90Windows => record.jisx0208_90_windows,
            HyphensPrecedence::Jisx0208Verbatim => record.jisx0208_verbatim,
        })
    }
}

impl Transliterate for Hyphens {
    fn transliterate<'a>(&'a self, input: CharIter<'a>) -> CharIter<'a> {
        let mut offset = 0;
        Box::new(input.map(move |c| {
            let replacement = c
                .as_single_char()
                .and_then(|ch| TABLE.get(&ch))
                .and_then(|record| self.replacement(record))
                .filter(|replacement| *replacement != c.c);
            let out = match replacement {
                Some(replacement) => Char::derived(replacement, offset, &c),
                None => c.with_offset(offset),
            };
            offset += out.scalar_len();
            out
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{build_char_list, from_chars};

    fn transliterate_with(precedence: Vec<HyphensPrecedence>, input: &str) -> String {
        let stage = Hyphens::new(HyphensOptions { precedence });
        let chars = build_char_list(input);
        from_chars(stage.transliterate(Box::new(chars.into_iter())))
    }

    fn transliterate(input: &str) -> String {
        transliterate_with(HyphensOptions::default().precedence, input)
    }

    #[test]
    fn default_precedence_is_jisx0208_90() {
        assert_eq!(transliterate("-"), "−");
        assert_eq!(transliterate("—"), "—");
        assert_eq!(transliterate("–"), "―");
        assert_eq!(transliterate("~"), "〜");
    }

    #[test]
    fn windows_precedence() {
        let precedence = vec![HyphensPrecedence::Jisx0208_90Windows];
        assert_eq!(transliterate_with(precedence.clone(), "—"), "―");
        assert_eq!(transliterate_with(precedence.clone(), "~"), "～");
        assert_eq!(transliterate_with(precedence, "−"), "－");
    }

    #[test]
    fn ascii_precedence() {
        let precedence = vec![HyphensPrecedence::Ascii];
        assert_eq!(transliterate_with(precedence.clone(), "—"), "-");
        assert_eq!(transliterate_with(precedence.clone(), "–"), "-");
        assert_eq!(transliterate_with(precedence.clone(), "2019—2020"), "2019-2020");
        // No ASCII alternative registered for the middle dot.
        assert_eq!(transliterate_with(precedence, "・"), "・");
    }

    #[test]
    fn precedence_falls_through_to_next_variant() {
        let precedence = vec![HyphensPrecedence::Ascii, HyphensPrecedence::Jisx0201];
        assert_eq!(transliterate_with(precedence, "・"), "･");
    }

    #[test]
    fn long_dashes_expand() {
        assert_eq!(transliterate_with(vec![HyphensPrecedence::Ascii], "⸺"), "--");
        assert_eq!(
            transliterate_with(vec![HyphensPrecedence::Jisx0208_90Windows], "⸻"),
            "―――"
        );
    }

    #[test]
    fn identical_replacement_passes_through() {
        // ー maps to itself under jisx0208_90; provenance must stay clean.
        let stage = Hyphens::new(HyphensOptions::default());
        let chars = build_char_list("ー");
        let out: Vec<_> = stage.transliterate(Box::new(chars.into_iter())).collect();
        assert!(!out[0].is_transliterated());
        assert_eq!(out[0].c, "ー");
    }

    #[test]
    fn unmapped_passes_through() {
        assert_eq!(transliterate("hello"), "hello");
    }
}
