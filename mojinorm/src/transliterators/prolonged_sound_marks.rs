//! Canonicalize hyphen-like characters that follow prolongable Japanese
//! characters into prolonged sound marks (ー or ｰ), and optionally the
//! reverse for marks stranded between alphanumerics.

use std::collections::VecDeque;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::chars::{Char, CharExt};
use crate::intrinsics::{CharIter, Transliterate};

/// Character classification: a family in the upper bits plus width and
/// phonetic flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CharType(u32);

impl CharType {
    const OTHER: CharType = CharType(0x00);
    const HIRAGANA: CharType = CharType(0x20);
    const KATAKANA: CharType = CharType(0x40);
    const ALPHABET: CharType = CharType(0x60);
    const DIGIT: CharType = CharType(0x80);
    const EITHER: CharType = CharType(0xA0);

    const HALFWIDTH: u32 = 1 << 0;
    const VOWEL_ENDED: u32 = 1 << 1;
    const HATSUON: u32 = 1 << 2;
    const SOKUON: u32 = 1 << 3;
    const PROLONGED_SOUND_MARK: u32 = 1 << 4;

    const fn with(self, flags: u32) -> CharType {
        CharType(self.0 | flags)
    }

    fn family(self) -> u32 {
        self.0 & 0xE0
    }

    fn is_alnum(self) -> bool {
        self.family() == CharType::ALPHABET.0 || self.family() == CharType::DIGIT.0
    }

    fn is_halfwidth(self) -> bool {
        self.0 & CharType::HALFWIDTH != 0
    }

    fn intersects(self, flags: u32) -> bool {
        self.0 & flags != 0
    }

    fn from_codepoint(codepoint: u32) -> CharType {
        match codepoint {
            0x30..=0x39 => return CharType::DIGIT.with(CharType::HALFWIDTH),
            0xFF10..=0xFF19 => return CharType::DIGIT,
            0x41..=0x5A | 0x61..=0x7A => return CharType::ALPHABET.with(CharType::HALFWIDTH),
            0xFF21..=0xFF3A | 0xFF41..=0xFF5A => return CharType::ALPHABET,
            _ => {}
        }
        match codepoint {
            0xFF70 => {
                CharType::KATAKANA.with(CharType::PROLONGED_SOUND_MARK | CharType::HALFWIDTH)
            }
            0x30FC => CharType::EITHER.with(CharType::PROLONGED_SOUND_MARK),
            0x3063 => CharType::HIRAGANA.with(CharType::SOKUON),
            0x3093 => CharType::HIRAGANA.with(CharType::HATSUON),
            0x30C3 => CharType::KATAKANA.with(CharType::SOKUON),
            0x30F3 => CharType::KATAKANA.with(CharType::HATSUON),
            0xFF6F => CharType::KATAKANA.with(CharType::SOKUON | CharType::HALFWIDTH),
            0xFF9D => CharType::KATAKANA.with(CharType::HATSUON | CharType::HALFWIDTH),
            0x3041..=0x309C | 0x309F => CharType::HIRAGANA.with(CharType::VOWEL_ENDED),
            0x30A1..=0x30FA | 0x30FD..=0x30FF => CharType::KATAKANA.with(CharType::VOWEL_ENDED),
            0xFF66..=0xFF6F | 0xFF71..=0xFF9F => {
                CharType::KATAKANA.with(CharType::VOWEL_ENDED | CharType::HALFWIDTH)
            }
            _ => CharType::OTHER,
        }
    }
}

fn char_type_of(c: &Char) -> CharType {
    match c.c.chars().next() {
        Some(first) => CharType::from_codepoint(first as u32),
        None => CharType::OTHER,
    }
}

fn is_hyphen_like(c: &Char) -> bool {
    matches!(
        c.c.as_str(),
        "\u{002d}" | "\u{2010}" | "\u{2014}" | "\u{2015}" | "\u{2212}" | "\u{ff0d}" | "\u{ff70}"
            | "\u{30fc}"
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProlongedSoundMarksOptions {
    /// Treat characters whose provenance already shows a transformation as
    /// opaque.
    pub skip_already_transliterated_chars: bool,
    /// Include hatsuon (ん/ン/ﾝ) in the prolongable set.
    pub allow_prolonged_hatsuon: bool,
    /// Include sokuon (っ/ッ/ｯ) in the prolongable set.
    pub allow_prolonged_sokuon: bool,
    /// Convert prolonged marks between alphanumerics into hyphen-minus.
    pub replace_prolonged_marks_following_alnums: bool,
}

pub struct ProlongedSoundMarks {
    options: ProlongedSoundMarksOptions,
    prolongables: u32,
}

impl ProlongedSoundMarks {
    pub fn new(options: ProlongedSoundMarksOptions) -> Self {
        let mut prolongables = CharType::VOWEL_ENDED | CharType::PROLONGED_SOUND_MARK;
        if options.allow_prolonged_hatsuon {
            prolongables |= CharType::HATSUON;
        }
        if options.allow_prolonged_sokuon {
            prolongables |= CharType::SOKUON;
        }
        ProlongedSoundMarks {
            options,
            prolongables,
        }
    }
}

impl Transliterate for ProlongedSoundMarks {
    fn transliterate<'a>(&'a self, input: CharIter<'a>) -> CharIter<'a> {
        Box::new(ProlongedSoundMarksIter {
            stage: self,
            input,
            out: VecDeque::new(),
            lookahead: Vec::new(),
            last_non_prolonged: None,
            processed_chars_in_lookahead: false,
            offset: 0,
        })
    }
}

struct ProlongedSoundMarksIter<'a> {
    stage: &'a ProlongedSoundMarks,
    input: CharIter<'a>,
    out: VecDeque<Rc<Char>>,
    lookahead: Vec<Rc<Char>>,
    last_non_prolonged: Option<(Rc<Char>, CharType)>,
    processed_chars_in_lookahead: bool,
    offset: usize,
}

impl<'a> ProlongedSoundMarksIter<'a> {
    fn emit(&mut self, c: Rc<Char>) {
        self.offset += c.scalar_len();
        self.out.push_back(c);
    }

    fn flush_lookahead(&mut self, terminator: Rc<Char>) {
        let options = &self.stage.options;
        let prev = self.last_non_prolonged.take();
        let terminator_type = char_type_of(&terminator);
        let prev_is_alnum = prev.as_ref().map(|(_, t)| t.is_alnum()).unwrap_or(true);
        let should_replace = prev_is_alnum
            && (!options.skip_already_transliterated_chars || !self.processed_chars_in_lookahead);
        if should_replace {
            let halfwidth = match &prev {
                Some((_, prev_type)) => prev_type.is_halfwidth(),
                None => terminator_type.is_halfwidth(),
            };
            let replacement = if halfwidth { "\u{002d}" } else { "\u{ff0d}" };
            let buffered: Vec<_> = self.lookahead.drain(..).collect();
            for c in buffered {
                let offset = self.offset;
                self.emit(Char::derived(replacement, offset, &c));
            }
        } else {
            let buffered: Vec<_> = self.lookahead.drain(..).collect();
            for c in buffered {
                let offset = self.offset;
                self.emit(c.with_offset(offset));
            }
        }
        let offset = self.offset;
        self.emit(terminator.with_offset(offset));
        self.last_non_prolonged = Some((Rc::clone(&terminator), terminator_type));
        self.processed_chars_in_lookahead = false;
    }

    fn step(&mut self, c: Rc<Char>) {
        let options = &self.stage.options;
        if !self.lookahead.is_empty() {
            if is_hyphen_like(&c) {
                if c.source.is_some() {
                    self.processed_chars_in_lookahead = true;
                }
                self.lookahead.push(c);
                return;
            }
            self.flush_lookahead(c);
            return;
        }

        if is_hyphen_like(&c) {
            let should_process =
                !options.skip_already_transliterated_chars || !c.is_transliterated();
            if should_process {
                if let Some((_, last_type)) = &self.last_non_prolonged {
                    if last_type.intersects(self.stage.prolongables) {
                        let replacement = if last_type.is_halfwidth() {
                            "\u{ff70}"
                        } else {
                            "\u{30fc}"
                        };
                        let offset = self.offset;
                        self.emit(Char::derived(replacement, offset, &c));
                        return;
                    }
                    if options.replace_prolonged_marks_following_alnums && last_type.is_alnum() {
                        self.lookahead.push(c);
                        return;
                    }
                }
            }
        } else {
            self.last_non_prolonged = Some((Rc::clone(&c), char_type_of(&c)));
        }
        let offset = self.offset;
        self.emit(c.with_offset(offset));
    }
}

impl<'a> Iterator for ProlongedSoundMarksIter<'a> {
    type Item = Rc<Char>;

    fn next(&mut self) -> Option<Rc<Char>> {
        loop {
            if let Some(c) = self.out.pop_front() {
                return Some(c);
            }
            match self.input.next() {
                Some(c) => self.step(c),
                None => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{build_char_list, from_chars};

    fn transliterate_with(options: ProlongedSoundMarksOptions, input: &str) -> String {
        let stage = ProlongedSoundMarks::new(options);
        let chars = build_char_list(input);
        from_chars(stage.transliterate(Box::new(chars.into_iter())))
    }

    fn transliterate(input: &str) -> String {
        transliterate_with(ProlongedSoundMarksOptions::default(), input)
    }

    #[test]
    fn hyphen_after_katakana_becomes_prolonged_mark() {
        assert_eq!(transliterate("イ\u{ff0d}ハト\u{ff0d}ヴォ"), "イ\u{30fc}ハト\u{30fc}ヴォ");
        assert_eq!(transliterate("カトラリ\u{ff0d}"), "カトラリ\u{30fc}");
        assert_eq!(transliterate("イ\u{002d}ハト\u{002d}ヴォ"), "イ\u{30fc}ハト\u{30fc}ヴォ");
        assert_eq!(transliterate("あいう\u{002d}かきく\u{ff0d}"), "あいう\u{30fc}かきく\u{30fc}");
    }

    #[test]
    fn various_hyphen_shapes() {
        assert_eq!(
            transliterate("ア\u{002d}イ\u{2010}ウ\u{2014}エ\u{2015}オ\u{2212}カ\u{ff0d}"),
            "ア\u{30fc}イ\u{30fc}ウ\u{30fc}エ\u{30fc}オ\u{30fc}カ\u{30fc}"
        );
        assert_eq!(transliterate("ア\u{002d}\u{002d}\u{002d}イ"), "ア\u{30fc}\u{30fc}\u{30fc}イ");
    }

    #[test]
    fn halfwidth_katakana_gets_halfwidth_mark() {
        assert_eq!(transliterate("ｱｲｳ\u{002d}"), "ｱｲｳ\u{ff70}");
        assert_eq!(transliterate("ｱｲｳ\u{ff0d}"), "ｱｲｳ\u{ff70}");
    }

    #[test]
    fn alnum_context_is_left_alone_by_default() {
        assert_eq!(transliterate("ABC\u{002d}123\u{ff0d}"), "ABC\u{002d}123\u{ff0d}");
        assert_eq!(transliterate("1\u{30fc}\u{ff0d}2\u{30fc}3"), "1\u{30fc}\u{ff0d}2\u{30fc}3");
    }

    #[test]
    fn replace_marks_following_alnums() {
        let options = ProlongedSoundMarksOptions {
            replace_prolonged_marks_following_alnums: true,
            ..ProlongedSoundMarksOptions::default()
        };
        assert_eq!(
            transliterate_with(options, "1\u{30fc}\u{ff0d}2\u{30fc}3"),
            "1\u{002d}\u{002d}2\u{002d}3"
        );
        assert_eq!(
            transliterate_with(options, "\u{ff11}\u{30fc}\u{ff0d}\u{ff12}\u{30fc}\u{ff13}"),
            "\u{ff11}\u{ff0d}\u{ff0d}\u{ff12}\u{ff0d}\u{ff13}"
        );
        assert_eq!(
            transliterate_with(options, "A\u{30fc}B\u{ff0d}アイウ\u{002d}123\u{30fc}"),
            "A\u{002d}B\u{002d}アイウ\u{30fc}123\u{002d}"
        );
        assert_eq!(
            transliterate_with(options, "A\u{002d}1\u{30fc}ａ\u{ff70}１"),
            "A\u{002d}1\u{002d}ａ\u{ff0d}１"
        );
    }

    #[test]
    fn buffered_marks_flush_at_end_of_stream() {
        let options = ProlongedSoundMarksOptions {
            replace_prolonged_marks_following_alnums: true,
            ..ProlongedSoundMarksOptions::default()
        };
        assert_eq!(
            transliterate_with(options, "Ａ\u{002d}Ｂ\u{002d}Ｃ\u{002d}"),
            "Ａ\u{ff0d}Ｂ\u{ff0d}Ｃ\u{ff0d}"
        );
        assert_eq!(
            transliterate_with(options, "A\u{002d}B\u{002d}C\u{002d}"),
            "A\u{002d}B\u{002d}C\u{002d}"
        );
    }

    #[test]
    fn sokuon_and_hatsuon_options() {
        assert_eq!(transliterate("ウッ\u{ff0d}ウン\u{ff0d}"), "ウッ\u{ff0d}ウン\u{ff0d}");
        let sokuon = ProlongedSoundMarksOptions {
            allow_prolonged_sokuon: true,
            ..ProlongedSoundMarksOptions::default()
        };
        assert_eq!(transliterate_with(sokuon, "ウッ\u{ff0d}ウン\u{ff0d}"), "ウッ\u{30fc}ウン\u{ff0d}");
        let hatsuon = ProlongedSoundMarksOptions {
            allow_prolonged_hatsuon: true,
            ..ProlongedSoundMarksOptions::default()
        };
        assert_eq!(transliterate_with(hatsuon, "ウッ\u{ff0d}ウン\u{ff0d}"), "ウッ\u{ff0d}ウン\u{30fc}");
        let both = ProlongedSoundMarksOptions {
            allow_prolonged_sokuon: true,
            allow_prolonged_hatsuon: true,
            ..ProlongedSoundMarksOptions::default()
        };
        assert_eq!(transliterate_with(both, "ウッ\u{ff0d}ウン\u{ff0d}"), "ウッ\u{30fc}ウン\u{30fc}");
        let halfwidth_sokuon = ProlongedSoundMarksOptions {
            allow_prolonged_sokuon: true,
            ..ProlongedSoundMarksOptions::default()
        };
        assert_eq!(transliterate_with(halfwidth_sokuon, "ｳｯ\u{002d}"), "ｳｯ\u{ff70}");
    }

    #[test]
    fn hiragana_sokuon_and_hatsuon() {
        assert_eq!(transliterate("あっ\u{002d}"), "あっ\u{002d}");
        assert_eq!(transliterate("あん\u{002d}"), "あん\u{002d}");
        let sokuon = ProlongedSoundMarksOptions {
            allow_prolonged_sokuon: true,
            ..ProlongedSoundMarksOptions::default()
        };
        assert_eq!(transliterate_with(sokuon, "あっ\u{002d}"), "あっ\u{30fc}");
        let hatsuon = ProlongedSoundMarksOptions {
            allow_prolonged_hatsuon: true,
            ..ProlongedSoundMarksOptions::default()
        };
        assert_eq!(transliterate_with(hatsuon, "あん\u{002d}"), "あん\u{30fc}");
    }

    #[test]
    fn existing_prolonged_marks_stay() {
        assert_eq!(transliterate("ア\u{30fc}Ａ\u{ff70}Ｂ"), "ア\u{30fc}Ａ\u{ff70}Ｂ");
        assert_eq!(transliterate("ア\u{30fc}ン\u{ff70}ウ"), "ア\u{30fc}ン\u{ff70}ウ");
    }

    #[test]
    fn character_type_transitions() {
        assert_eq!(
            transliterate("あ\u{002d}ア\u{002d}A\u{002d}1\u{002d}ａ\u{002d}１"),
            "あ\u{30fc}ア\u{30fc}A\u{002d}1\u{002d}ａ\u{002d}１"
        );
    }

    #[test]
    fn edge_cases() {
        assert_eq!(transliterate(""), "");
        assert_eq!(transliterate("こんにちは世界"), "こんにちは世界");
        assert_eq!(transliterate("\u{002d}アイウ"), "\u{002d}アイウ");
        assert_eq!(
            transliterate("\u{002d}\u{ff0d}\u{2010}\u{2014}\u{2015}\u{2212}"),
            "\u{002d}\u{ff0d}\u{2010}\u{2014}\u{2015}\u{2212}"
        );
        assert_eq!(transliterate("ア\n\u{002d}\tイ\u{ff0d}"), "ア\n\u{002d}\tイ\u{30fc}");
        assert_eq!(transliterate("😀\u{002d}😊\u{ff0d}"), "😀\u{002d}😊\u{ff0d}");
        assert_eq!(
            transliterate("\u{1f600}ア\u{002d}\u{1f601}イ\u{ff0d}"),
            "\u{1f600}ア\u{30fc}\u{1f601}イ\u{30fc}"
        );
    }

    #[test]
    fn digits_and_alphabets_without_replace_option() {
        assert_eq!(
            transliterate("0\u{002d}1\u{002d}2\u{002d}"),
            "0\u{002d}1\u{002d}2\u{002d}"
        );
        assert_eq!(
            transliterate("Ａ\u{002d}Ｂ\u{002d}"),
            "Ａ\u{002d}Ｂ\u{002d}"
        );
    }

    #[test]
    fn fullwidth_digits_with_replace_option() {
        let options = ProlongedSoundMarksOptions {
            replace_prolonged_marks_following_alnums: true,
            ..ProlongedSoundMarksOptions::default()
        };
        assert_eq!(
            transliterate_with(options, "０\u{002d}１\u{002d}２\u{002d}"),
            "０\u{ff0d}１\u{ff0d}２\u{ff0d}"
        );
    }

    #[test]
    fn vowel_ended_rows() {
        assert_eq!(
            transliterate("あ\u{002d}か\u{002d}さ\u{002d}た\u{002d}な\u{002d}は\u{002d}ま\u{002d}や\u{002d}ら\u{002d}わ\u{002d}"),
            "あ\u{30fc}か\u{30fc}さ\u{30fc}た\u{30fc}な\u{30fc}は\u{30fc}ま\u{30fc}や\u{30fc}ら\u{30fc}わ\u{30fc}"
        );
        assert_eq!(
            transliterate("ｱ\u{002d}ｶ\u{002d}ｻ\u{002d}ﾀ\u{002d}ﾅ\u{002d}ﾊ\u{002d}ﾏ\u{002d}ﾔ\u{002d}ﾗ\u{002d}ﾜ\u{002d}"),
            "ｱ\u{ff70}ｶ\u{ff70}ｻ\u{ff70}ﾀ\u{ff70}ﾅ\u{ff70}ﾊ\u{ff70}ﾏ\u{ff70}ﾔ\u{ff70}ﾗ\u{ff70}ﾜ\u{ff70}"
        );
    }

    #[test]
    fn skip_already_transliterated_fresh_chars_still_processed() {
        let options = ProlongedSoundMarksOptions {
            skip_already_transliterated_chars: true,
            ..ProlongedSoundMarksOptions::default()
        };
        assert_eq!(transliterate_with(options, "ア\u{002d}イ\u{ff0d}"), "ア\u{30fc}イ\u{30fc}");
    }
}
