//! Replace Japanese iteration marks (ゝゞヽヾ〱〲〳〴々) with the expansion
//! of the immediately preceding character, voicing or unvoicing it as the
//! mark demands. The emitted character becomes the new "previous" character,
//! so runs of marks cascade.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::chars::{Char, CharExt};
use crate::intrinsics::{CharIter, Transliterate};
use crate::transliterators::hira_kata_table::HIRAGANA_KATAKANA_TABLE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    HiraganaRepeat,
    HiraganaVoicedRepeat,
    KatakanaRepeat,
    KatakanaVoicedRepeat,
    KanjiRepeat,
}

fn mark_of(c: &Char) -> Option<Mark> {
    match c.c.as_str() {
        "ゝ" | "〱" => Some(Mark::HiraganaRepeat),
        "ゞ" | "〲" => Some(Mark::HiraganaVoicedRepeat),
        "ヽ" | "〳" => Some(Mark::KatakanaRepeat),
        "ヾ" | "〴" => Some(Mark::KatakanaVoicedRepeat),
        "々" => Some(Mark::KanjiRepeat),
        _ => None,
    }
}

const SEMI_VOICED_CHARS: &[char] = &[
    'ぱ', 'ぴ', 'ぷ', 'ぺ', 'ぽ', 'パ', 'ピ', 'プ', 'ペ', 'ポ',
];
const HATSUON_CHARS: &[char] = &['ん', 'ン'];
const SOKUON_CHARS: &[char] = &['っ', 'ッ'];

static HIRAGANA_VOICING: Lazy<HashMap<char, char>> = Lazy::new(|| {
    let mut mapping: HashMap<char, char> = HIRAGANA_KATAKANA_TABLE
        .iter()
        .filter_map(|row| row.hiragana.voiced.map(|voiced| (row.hiragana.base, voiced)))
        .collect();
    mapping.insert('ゝ', 'ゞ');
    mapping
});

static KATAKANA_VOICING: Lazy<HashMap<char, char>> = Lazy::new(|| {
    let mut mapping: HashMap<char, char> = HIRAGANA_KATAKANA_TABLE
        .iter()
        .filter_map(|row| row.katakana.voiced.map(|voiced| (row.katakana.base, voiced)))
        .collect();
    mapping.insert('ヽ', 'ヾ');
    mapping
});

static HIRAGANA_UNVOICING: Lazy<HashMap<char, char>> = Lazy::new(|| {
    HIRAGANA_VOICING.iter().map(|(k, v)| (*v, *k)).collect()
});

static KATAKANA_UNVOICING: Lazy<HashMap<char, char>> = Lazy::new(|| {
    KATAKANA_VOICING.iter().map(|(k, v)| (*v, *k)).collect()
});

static VOICED_CHARS: Lazy<HashSet<char>> = Lazy::new(|| {
    HIRAGANA_VOICING
        .values()
        .chain(KATAKANA_VOICING.values())
        .copied()
        .collect()
});

fn is_hiragana(c: char) -> bool {
    matches!(c as u32, 0x3041..=0x309F)
}

fn is_katakana(c: char) -> bool {
    matches!(c as u32, 0x30A0..=0x30FF)
}

fn is_kanji(c: char) -> bool {
    matches!(c as u32, 0x4E00..=0x9FFF)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JapaneseIterationMarksOptions {
    pub skip_already_transliterated_chars: bool,
}

pub struct JapaneseIterationMarks {
    options: JapaneseIterationMarksOptions,
}

impl JapaneseIterationMarks {
    pub fn new(options: JapaneseIterationMarksOptions) -> Self {
        JapaneseIterationMarks { options }
    }

    fn replacement(&self, mark: Mark, prev: &str) -> Option<String> {
        let first = prev.chars().next()?;
        if SEMI_VOICED_CHARS.contains(&first)
            || HATSUON_CHARS.contains(&first)
            || SOKUON_CHARS.contains(&first)
        {
            return None;
        }
        match mark {
            Mark::HiraganaRepeat => {
                if !is_hiragana(first) {
                    return None;
                }
                if VOICED_CHARS.contains(&first) {
                    HIRAGANA_UNVOICING.get(&first).map(|c| c.to_string())
                } else {
                    Some(prev.to_owned())
                }
            }
            Mark::HiraganaVoicedRepeat => {
                if !is_hiragana(first) {
                    return None;
                }
                if VOICED_CHARS.contains(&first) {
                    Some(prev.to_owned())
                } else {
                    HIRAGANA_VOICING.get(&first).map(|c| c.to_string())
                }
            }
            Mark::KatakanaRepeat => {
                if !is_katakana(first) {
                    return None;
                }
                if VOICED_CHARS.contains(&first) {
                    KATAKANA_UNVOICING.get(&first).map(|c| c.to_string())
                } else {
                    Some(prev.to_owned())
                }
            }
            Mark::KatakanaVoicedRepeat => {
                if !is_katakana(first) {
                    return None;
                }
                if VOICED_CHARS.contains(&first) {
                    Some(prev.to_owned())
                } else {
                    KATAKANA_VOICING.get(&first).map(|c| c.to_string())
                }
            }
            Mark::KanjiRepeat => {
                if is_kanji(first) {
                    Some(prev.to_owned())
                } else {
                    None
                }
            }
        }
    }
}

impl Transliterate for JapaneseIterationMarks {
    fn transliterate<'a>(&'a self, input: CharIter<'a>) -> CharIter<'a> {
        let mut offset = 0;
        let mut last_content: Option<String> = None;
        Box::new(input.map(move |c| {
            if let Some(mark) = mark_of(&c) {
                let should_process = !self.options.skip_already_transliterated_chars
                    || !c.is_transliterated();
                if should_process {
                    if let Some(prev) = &last_content {
                        if let Some(replacement) = self.replacement(mark, prev) {
                            let out = Char::derived(replacement.clone(), offset, &c);
                            offset += out.scalar_len();
                            // The expansion becomes the previous character for
                            // any following mark.
                            last_content = Some(replacement);
                            return out;
                        }
                    }
                }
            }
            let out = c.with_offset(offset);
            offset += out.scalar_len();
            if !c.is_sentinel() {
                last_content = Some(c.c.clone());
            }
            out
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{build_char_list, from_chars};

    fn transliterate(input: &str) -> String {
        let stage = JapaneseIterationMarks::new(JapaneseIterationMarksOptions::default());
        let chars = build_char_list(input);
        from_chars(stage.transliterate(Box::new(chars.into_iter())))
    }

    #[test]
    fn hiragana_repeat() {
        let cases = [
            ("かゝ", "かか"),
            ("きゝ", "きき"),
            ("すゝ", "すす"),
            ("わゝ", "わわ"),
            ("んゝ", "んゝ"),
            ("っゝ", "っゝ"),
            ("ぱゝ", "ぱゝ"),
            ("がゝ", "がか"),
            ("づゝ", "づつ"),
        ];
        for (input, expected) in &cases {
            assert_eq!(transliterate(input), *expected, "input {:?}", input);
        }
    }

    #[test]
    fn hiragana_voiced_repeat() {
        let cases = [
            ("かゞ", "かが"),
            ("しゞ", "しじ"),
            ("はゞ", "はば"),
            ("あゞ", "あゞ"),
            ("んゞ", "んゞ"),
            ("っゞ", "っゞ"),
            ("がゞ", "がが"),
        ];
        for (input, expected) in &cases {
            assert_eq!(transliterate(input), *expected, "input {:?}", input);
        }
    }

    #[test]
    fn katakana_repeat() {
        let cases = [
            ("カヽ", "カカ"),
            ("ンヽ", "ンヽ"),
            ("ッヽ", "ッヽ"),
            ("パヽ", "パヽ"),
            ("ガヽ", "ガカ"),
            ("カヾ", "カガ"),
            ("アヾ", "アヾ"),
            ("ガヾ", "ガガ"),
        ];
        for (input, expected) in &cases {
            assert_eq!(transliterate(input), *expected, "input {:?}", input);
        }
    }

    #[test]
    fn kanji_repeat() {
        let cases = [
            ("人々", "人人"),
            ("山々", "山山"),
            ("日々", "日日"),
            ("か々", "か々"),
            ("カ々", "カ々"),
            ("人々山々", "人人山山"),
        ];
        for (input, expected) in &cases {
            assert_eq!(transliterate(input), *expected, "input {:?}", input);
        }
    }

    #[test]
    fn vertical_marks() {
        let cases = [
            ("か〱", "かか"),
            ("が〱", "がか"),
            ("ん〱", "ん〱"),
            ("か〲", "かが"),
            ("が〲", "がが"),
            ("カ〳", "カカ"),
            ("ガ〳", "ガカ"),
            ("カ〴", "カガ"),
            ("ア〴", "ア〴"),
            ("こ〱もコ〳ロも", "ここもココロも"),
            ("は〲とハ〴", "はばとハバ"),
        ];
        for (input, expected) in &cases {
            assert_eq!(transliterate(input), *expected, "input {:?}", input);
        }
    }

    #[test]
    fn mark_without_previous_character() {
        for input in &["ゝ", "ゞ", "ヽ", "ヾ", "々", "〱", "〲", "〳", "〴"] {
            assert_eq!(transliterate(input), *input);
        }
    }

    #[test]
    fn sentences() {
        assert_eq!(transliterate("時々"), "時時");
        assert_eq!(transliterate("いすゞ"), "いすず");
        assert_eq!(transliterate("私はこゝで勉強します"), "私はここで勉強します");
        assert_eq!(transliterate("トヽロのキヽ"), "トトロのキキ");
        assert_eq!(transliterate("こゝろ、コヽロ、其々"), "こころ、ココロ、其其");
    }

    #[test]
    fn marks_cascade_over_expansions() {
        assert_eq!(transliterate("かゝゝ"), "かかか");
        assert_eq!(transliterate("かゝきゝ"), "かかきき");
        assert_eq!(transliterate("カヾキヾ"), "カガキギ");
    }
}
