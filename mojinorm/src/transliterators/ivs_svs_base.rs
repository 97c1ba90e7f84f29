//! Add or remove Ideographic/Standardized Variation Sequence selectors.
//!
//! In `ivs-or-svs` mode, base kanji with a registered variation sequence gain
//! the selector; in `base` mode, registered sequences collapse back to the
//! base character of the configured charset.

use std::collections::HashMap;
use std::rc::Rc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::chars::Char;
use crate::intrinsics::{CharIter, ConfigError, Transliterate};
use crate::recipes::Charset;
use crate::transliterators::ivs_svs_base_data::IVS_SVS_BASE_RECORDS;

/// One registered variation sequence: the IVS form, the SVS form where one
/// exists, and the plain codepoints the glyph corresponds to in the JIS90 and
/// JIS2004 charsets, where defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IvsSvsBaseRecord {
    pub ivs: &'static str,
    pub svs: Option<&'static str>,
    pub base90: Option<char>,
    pub base2004: Option<char>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IvsSvsMode {
    IvsOrSvs,
    Base,
}

impl Default for IvsSvsMode {
    fn default() -> Self {
        IvsSvsMode::Base
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IvsSvsBaseOptions {
    pub mode: IvsSvsMode,
    /// In `base` mode, strip any remaining variation selector even when the
    /// sequence has no record.
    pub drop_selectors_altogether: bool,
    pub charset: Charset,
    /// In `ivs-or-svs` mode, prefer the SVS form when one is defined.
    pub prefer_svs: bool,
}

impl Default for IvsSvsBaseOptions {
    fn default() -> Self {
        IvsSvsBaseOptions {
            mode: IvsSvsMode::default(),
            drop_selectors_altogether: false,
            charset: Charset::default(),
            prefer_svs: false,
        }
    }
}

static BASE_TO_VARIANTS_2004: Lazy<HashMap<char, &'static IvsSvsBaseRecord>> = Lazy::new(|| {
    let mut mappings = HashMap::new();
    for record in IVS_SVS_BASE_RECORDS {
        if let Some(base) = record.base2004 {
            mappings.entry(base).or_insert(record);
        }
    }
    mappings
});

static BASE_TO_VARIANTS_90: Lazy<HashMap<char, &'static IvsSvsBaseRecord>> = Lazy::new(|| {
    let mut mappings = HashMap::new();
    for record in IVS_SVS_BASE_RECORDS {
        if let Some(base) = record.base90 {
            mappings.entry(base).or_insert(record);
        }
    }
    mappings
});

static VARIANTS_TO_BASE: Lazy<HashMap<&'static str, &'static IvsSvsBaseRecord>> = Lazy::new(|| {
    let mut mappings = HashMap::new();
    for record in IVS_SVS_BASE_RECORDS {
        mappings.insert(record.ivs, record);
        if let Some(svs) = record.svs {
            mappings.insert(svs, record);
        }
    }
    mappings
});

fn supported_charset(charset: Charset) -> Result<Charset, ConfigError> {
    match charset {
        Charset::Unijis90 | Charset::Unijis2004 => Ok(charset),
        Charset::AdobeJapan1 => Err(ConfigError::UnsupportedCharset(charset)),
    }
}

enum Direction {
    Forward {
        table: &'static HashMap<char, &'static IvsSvsBaseRecord>,
        prefer_svs: bool,
    },
    Reverse {
        charset: Charset,
        drop_selectors_altogether: bool,
    },
}

pub struct IvsSvsBase {
    direction: Direction,
}

impl IvsSvsBase {
    pub fn new(options: IvsSvsBaseOptions) -> Result<Self, ConfigError> {
        let charset = supported_charset(options.charset)?;
        let direction = match options.mode {
            IvsSvsMode::IvsOrSvs => Direction::Forward {
                table: match charset {
                    Charset::Unijis2004 => &BASE_TO_VARIANTS_2004,
                    _ => &BASE_TO_VARIANTS_90,
                },
                prefer_svs: options.prefer_svs,
            },
            IvsSvsMode::Base => Direction::Reverse {
                charset,
                drop_selectors_altogether: options.drop_selectors_altogether,
            },
        };
        Ok(IvsSvsBase { direction })
    }
}

fn trailing_selector(c: &Char) -> Option<char> {
    let mut chars = c.c.chars();
    let base = chars.next()?;
    let second = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    match second as u32 {
        0xFE00..=0xFE0F | 0xE0100..=0xE01EF => Some(base),
        _ => None,
    }
}

impl Transliterate for IvsSvsBase {
    fn transliterate<'a>(&'a self, input: CharIter<'a>) -> CharIter<'a> {
        let mut offset = 0;
        Box::new(input.map(move |c| {
            let replacement: Option<String> = match &self.direction {
                Direction::Forward { table, prefer_svs } => c
                    .as_single_char()
                    .and_then(|base| table.get(&base))
                    .map(|record| {
                        if *prefer_svs {
                            record.svs.unwrap_or(record.ivs).to_owned()
                        } else {
                            record.ivs.to_owned()
                        }
                    }),
                Direction::Reverse {
                    charset,
                    drop_selectors_altogether,
                } => {
                    let base = VARIANTS_TO_BASE.get(c.c.as_str()).and_then(|record| {
                        match charset {
                            Charset::Unijis2004 => record.base2004,
                            _ => record.base90,
                        }
                    });
                    match base {
                        Some(base) => Some(base.to_string()),
                        None if *drop_selectors_altogether => {
                            trailing_selector(&c).map(|base| base.to_string())
                        }
                        None => None,
                    }
                }
            };
            let out = match replacement {
                Some(replacement) => Char::derived(replacement, offset, &c),
                // Pass-throughs keep the input's own provenance so no-op
                // bracketing does not register as a transformation.
                None => Rc::new(Char {
                    c: c.c.clone(),
                    offset,
                    source: c.source.clone(),
                }),
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

    fn transliterate(options: IvsSvsBaseOptions, input: &str) -> String {
        let stage = IvsSvsBase::new(options).unwrap();
        let chars = build_char_list(input);
        from_chars(stage.transliterate(Box::new(chars.into_iter())))
    }

    fn forward() -> IvsSvsBaseOptions {
        IvsSvsBaseOptions {
            mode: IvsSvsMode::IvsOrSvs,
            ..IvsSvsBaseOptions::default()
        }
    }

    #[test]
    fn forward_adds_selectors() {
        assert_eq!(
            transliterate(forward(), "\u{9038}\u{70ba}"),
            "\u{9038}\u{e0100}\u{70ba}\u{e0100}"
        );
        assert_eq!(transliterate(forward(), "\u{8fbb}"), "\u{8fbb}\u{e0101}");
    }

    #[test]
    fn forward_prefers_svs_on_request() {
        let options = IvsSvsBaseOptions {
            prefer_svs: true,
            ..forward()
        };
        assert_eq!(transliterate(options, "\u{9038}"), "\u{9038}\u{fe00}");
        // No SVS registered: falls back to the IVS.
        assert_eq!(transliterate(options, "\u{820a}"), "\u{820a}\u{e0100}");
    }

    #[test]
    fn reverse_removes_selectors() {
        let options = IvsSvsBaseOptions::default();
        assert_eq!(
            transliterate(options, "\u{9038}\u{e0100}\u{70ba}\u{e0100}"),
            "\u{9038}\u{70ba}"
        );
        assert_eq!(transliterate(options, "\u{8fbb}\u{e0101}"), "\u{8fbb}");
    }

    #[test]
    fn reverse_keeps_unmapped_selectors() {
        // The JIS90 glyph has no JIS2004 base, so the sequence is kept.
        let options = IvsSvsBaseOptions::default();
        assert_eq!(
            transliterate(options, "\u{8fbb}\u{e0100}"),
            "\u{8fbb}\u{e0100}"
        );
    }

    #[test]
    fn reverse_charset_90() {
        let options = IvsSvsBaseOptions {
            charset: Charset::Unijis90,
            ..IvsSvsBaseOptions::default()
        };
        assert_eq!(transliterate(options, "\u{8fbb}\u{e0100}"), "\u{8fbb}");
    }

    #[test]
    fn drop_selectors_altogether() {
        let options = IvsSvsBaseOptions {
            drop_selectors_altogether: true,
            ..IvsSvsBaseOptions::default()
        };
        assert_eq!(transliterate(options, "\u{8fbb}\u{e0100}"), "\u{8fbb}");
        assert_eq!(transliterate(options, "\u{8fbb}\u{e0101}"), "\u{8fbb}");
        assert_eq!(transliterate(options, "a\u{fe0e}"), "a");
    }

    #[test]
    fn forward_then_reverse_round_trips() {
        let fwd = IvsSvsBase::new(forward()).unwrap();
        let rev = IvsSvsBase::new(IvsSvsBaseOptions::default()).unwrap();
        for input in &["\u{9038}", "\u{70ba}", "\u{8fbb}", "\u{845b}"] {
            let chars = build_char_list(input);
            let out = from_chars(
                rev.transliterate(fwd.transliterate(Box::new(chars.into_iter()))),
            );
            assert_eq!(out, *input);
        }
    }

    #[test]
    fn adobe_japan1_is_rejected() {
        let options = IvsSvsBaseOptions {
            charset: Charset::AdobeJapan1,
            ..IvsSvsBaseOptions::default()
        };
        assert_eq!(
            IvsSvsBase::new(options).err(),
            Some(ConfigError::UnsupportedCharset(Charset::AdobeJapan1))
        );
    }
}
