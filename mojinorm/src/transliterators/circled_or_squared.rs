//! Replace circled or squared characters with template-wrapped renderings,
//! e.g. ① becomes (1) and 🅰 becomes [A].

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::chars::{Char, CharExt};
use crate::intrinsics::{CharIter, Transliterate};
use crate::transliterators::circled_or_squared_data::CIRCLED_OR_SQUARED_MAPPINGS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Circle,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircledOrSquaredRecord {
    pub rendering: &'static str,
    pub kind: Kind,
    pub emoji: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircledOrSquaredOptions {
    /// Templates whose `?` is replaced by the rendering.
    pub templates: Templates,
    /// Whether characters the data set marks as emoji are processed.
    pub include_emojis: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Templates {
    pub circle: String,
    pub square: String,
}

impl Default for Templates {
    fn default() -> Self {
        Templates {
            circle: "(?)".to_owned(),
            square: "[?]".to_owned(),
        }
    }
}

impl Default for CircledOrSquaredOptions {
    fn default() -> Self {
        CircledOrSquaredOptions {
            templates: Templates::default(),
            include_emojis: false,
        }
    }
}

static TABLE: Lazy<HashMap<char, CircledOrSquaredRecord>> =
    Lazy::new(|| CIRCLED_OR_SQUARED_MAPPINGS.iter().copied().collect());

pub struct CircledOrSquared {
    options: CircledOrSquaredOptions,
}

impl CircledOrSquared {
    pub fn new(options: CircledOrSquaredOptions) -> Self {
        CircledOrSquared { options }
    }

    fn template(&self, kind: Kind) -> &str {
        match kind {
            Kind::Circle => &self.options.templates.circle,
            Kind::Square => &self.options.templates.square,
        }
    }
}

impl Transliterate for CircledOrSquared {
    fn transliterate<'a>(&'a self, input: CharIter<'a>) -> CharIter<'a> {
        let mut offset = 0;
        Box::new(input.flat_map(move |c| {
            let record = c.as_single_char().and_then(|ch| TABLE.get(&ch));
            match record {
                Some(record) if !record.emoji || self.options.include_emojis => {
                    let replacement = self.template(record.kind).replace('?', record.rendering);
                    replacement
                        .chars()
                        .map(|part| {
                            let out = Char::derived(part, offset, &c);
                            offset += 1;
                            out
                        })
                        .collect::<Vec<_>>()
                }
                _ => {
                    let out = c.with_offset(offset);
                    offset += out.scalar_len();
                    vec![out]
                }
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{build_char_list, from_chars};

    fn transliterate_with(options: CircledOrSquaredOptions, input: &str) -> String {
        let stage = CircledOrSquared::new(options);
        let chars = build_char_list(input);
        from_chars(stage.transliterate(Box::new(chars.into_iter())))
    }

    fn transliterate(input: &str) -> String {
        transliterate_with(CircledOrSquaredOptions::default(), input)
    }

    #[test]
    fn circled_numbers() {
        assert_eq!(transliterate("①"), "(1)");
        assert_eq!(transliterate("⑳"), "(20)");
        assert_eq!(transliterate("⓪"), "(0)");
        assert_eq!(transliterate("㊱㊲㊳"), "(36)(37)(38)");
        assert_eq!(transliterate("㊿"), "(50)");
        assert_eq!(transliterate("①②③④⑤"), "(1)(2)(3)(4)(5)");
    }

    #[test]
    fn circled_letters() {
        assert_eq!(transliterate("Ⓐ"), "(A)");
        assert_eq!(transliterate("Ⓩ"), "(Z)");
        assert_eq!(transliterate("ⓐ"), "(a)");
        assert_eq!(transliterate("ⓩ"), "(z)");
        assert_eq!(transliterate("ⒶⒷⒸ"), "(A)(B)(C)");
    }

    #[test]
    fn circled_ideographs_and_katakana() {
        assert_eq!(transliterate("㊀"), "(一)");
        assert_eq!(transliterate("㊀㊁㊂㊃㊄"), "(一)(二)(三)(四)(五)");
        assert_eq!(transliterate("㋐"), "(ア)");
        assert_eq!(transliterate("㋾"), "(ヲ)");
    }

    #[test]
    fn squared_letters() {
        assert_eq!(transliterate("🅰"), "[A]");
        assert_eq!(transliterate("🆉"), "[Z]");
        assert_eq!(transliterate("🄴🅂"), "[E][S]");
        assert_eq!(transliterate("🇦"), "[A]");
        assert_eq!(transliterate("🇿"), "[Z]");
        assert_eq!(transliterate("🆂🅾🆂"), "[S][O][S]");
        assert_eq!(transliterate("①🅰②🅱"), "(1)[A](2)[B]");
    }

    #[test]
    fn emojis_require_opt_in() {
        assert_eq!(transliterate("🆘"), "🆘");
        let options = CircledOrSquaredOptions {
            include_emojis: true,
            ..CircledOrSquaredOptions::default()
        };
        assert_eq!(transliterate_with(options, "🆘"), "[SOS]");
    }

    #[test]
    fn custom_templates() {
        let options = CircledOrSquaredOptions {
            templates: Templates {
                circle: "〔?〕".to_owned(),
                square: "【?】".to_owned(),
            },
            include_emojis: false,
        };
        assert_eq!(transliterate_with(options.clone(), "①"), "〔1〕");
        assert_eq!(transliterate_with(options.clone(), "🅰"), "【A】");
        assert_eq!(transliterate_with(options, "㊀"), "〔一〕");
    }

    #[test]
    fn mixed_content() {
        assert_eq!(
            transliterate("項目①は重要で、項目②は補足です。"),
            "項目(1)は重要で、項目(2)は補足です。"
        );
        assert_eq!(transliterate("①準備\n②実行\n③確認"), "(1)準備\n(2)実行\n(3)確認");
    }

    #[test]
    fn unmapped_passes_through() {
        let input = "hello world 123 abc こんにちは";
        assert_eq!(transliterate(input), input);
    }
}
