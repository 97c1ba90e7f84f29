//! Whole-script conversion between hiragana and katakana.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::chars::Char;
use crate::intrinsics::{CharIter, Transliterate};
use crate::transliterators::hira_kata_table::{
    HIRAGANA_KATAKANA_SMALL_TABLE, HIRAGANA_KATAKANA_TABLE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HiraKataMode {
    HiraToKata,
    KataToHira,
}

impl Default for HiraKataMode {
    fn default() -> Self {
        HiraKataMode::HiraToKata
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HiraKataOptions {
    pub mode: HiraKataMode,
}

fn build_table(mode: HiraKataMode) -> HashMap<char, char> {
    let mut mapping = HashMap::new();
    for row in HIRAGANA_KATAKANA_TABLE {
        let (from, to) = match mode {
            HiraKataMode::HiraToKata => (row.hiragana, row.katakana),
            HiraKataMode::KataToHira => (row.katakana, row.hiragana),
        };
        mapping.insert(from.base, to.base);
        if let (Some(from_voiced), Some(to_voiced)) = (from.voiced, to.voiced) {
            mapping.insert(from_voiced, to_voiced);
        }
        if let (Some(from_semi), Some(to_semi)) = (from.semi_voiced, to.semi_voiced) {
            mapping.insert(from_semi, to_semi);
        }
    }
    for (hiragana, katakana, _) in HIRAGANA_KATAKANA_SMALL_TABLE {
        match mode {
            HiraKataMode::HiraToKata => mapping.insert(*hiragana, *katakana),
            HiraKataMode::KataToHira => mapping.insert(*katakana, *hiragana),
        };
    }
    mapping
}

// Built once per direction and shared by every stage instance.
static HIRA_TO_KATA: Lazy<HashMap<char, char>> =
    Lazy::new(|| build_table(HiraKataMode::HiraToKata));
static KATA_TO_HIRA: Lazy<HashMap<char, char>> =
    Lazy::new(|| build_table(HiraKataMode::KataToHira));

pub struct HiraKata {
    table: &'static HashMap<char, char>,
}

impl HiraKata {
    pub fn new(options: HiraKataOptions) -> Self {
        let table = match options.mode {
            HiraKataMode::HiraToKata => &*HIRA_TO_KATA,
            HiraKataMode::KataToHira => &*KATA_TO_HIRA,
        };
        HiraKata { table }
    }
}

impl Transliterate for HiraKata {
    fn transliterate<'a>(&'a self, input: CharIter<'a>) -> CharIter<'a> {
        let table = self.table;
        Box::new(input.map(move |c| {
            match c.as_single_char().and_then(|ch| table.get(&ch)) {
                Some(mapped) => Char::derived(*mapped, c.offset, &c),
                None => c,
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{build_char_list, from_chars};

    fn transliterate(mode: HiraKataMode, input: &str) -> String {
        let stage = HiraKata::new(HiraKataOptions { mode });
        let chars = build_char_list(input);
        from_chars(stage.transliterate(Box::new(chars.into_iter())))
    }

    #[test]
    fn hira_to_kata() {
        assert_eq!(
            transliterate(HiraKataMode::HiraToKata, "あいうえお"),
            "アイウエオ"
        );
        assert_eq!(
            transliterate(HiraKataMode::HiraToKata, "がぎぐげご"),
            "ガギグゲゴ"
        );
        assert_eq!(
            transliterate(HiraKataMode::HiraToKata, "ぱぴぷぺぽ"),
            "パピプペポ"
        );
        assert_eq!(
            transliterate(HiraKataMode::HiraToKata, "ぁぃぅぇぉっゃゅょ"),
            "ァィゥェォッャュョ"
        );
    }

    #[test]
    fn hira_to_kata_leaves_other_scripts() {
        assert_eq!(
            transliterate(HiraKataMode::HiraToKata, "あいうえお123ABCアイウエオ"),
            "アイウエオ123ABCアイウエオ"
        );
        assert_eq!(
            transliterate(HiraKataMode::HiraToKata, "こんにちは、世界！"),
            "コンニチハ、世界！"
        );
    }

    #[test]
    fn kata_to_hira() {
        assert_eq!(
            transliterate(HiraKataMode::KataToHira, "アイウエオ"),
            "あいうえお"
        );
        assert_eq!(
            transliterate(HiraKataMode::KataToHira, "ガギグゲゴ"),
            "がぎぐげご"
        );
        assert_eq!(
            transliterate(HiraKataMode::KataToHira, "コンニチハ、世界！"),
            "こんにちは、世界！"
        );
    }

    #[test]
    fn vu_maps_both_ways() {
        assert_eq!(transliterate(HiraKataMode::KataToHira, "ヴ"), "ゔ");
        assert_eq!(transliterate(HiraKataMode::HiraToKata, "ゔ"), "ヴ");
    }

    #[test]
    fn voiced_w_column_has_no_hiragana_counterpart() {
        assert_eq!(
            transliterate(HiraKataMode::KataToHira, "ヷヸヹヺ"),
            "ヷヸヹヺ"
        );
    }
}
