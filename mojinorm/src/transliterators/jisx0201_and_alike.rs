//! Bidirectional conversion between the JIS X 0201 halfwidth repertoire and
//! its fullwidth counterparts: the GL (ASCII) range, the GR (katakana) range
//! with voice-mark decomposition/composition, and optionally hiragana.

use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::chars::{Char, CharExt};
use crate::intrinsics::{CharIter, Transliterate};
use crate::transliterators::hira_kata_table::{
    HIRAGANA_KATAKANA_SMALL_TABLE, HIRAGANA_KATAKANA_TABLE,
};

// GL area (fullwidth, halfwidth): ideographic space plus U+FF01..U+FF5D
// against U+0021..U+007D. U+FF3C is governed by the u005c flags instead.
static JISX0201_GL_TABLE: Lazy<Vec<(char, char)>> = Lazy::new(|| {
    let mut pairs = vec![('\u{3000}', '\u{0020}')];
    for cp in 0xFF01..=0xFF5Du32 {
        if cp == 0xFF3C {
            continue;
        }
        let fullwidth = char::from_u32(cp).unwrap();
        let halfwidth = char::from_u32(cp - 0xFF01 + 0x21).unwrap();
        pairs.push((fullwidth, halfwidth));
    }
    pairs
});

const GL_OVERRIDE_FLAGS: &[Override] = &[
    Override::U005cAsYenSign,
    Override::U005cAsBackslash,
    Override::U007eAsFullwidthTilde,
    Override::U007eAsWaveDash,
    Override::U007eAsOverline,
    Override::U007eAsFullwidthMacron,
    Override::U00a5AsYenSign,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Override {
    U005cAsYenSign,
    U005cAsBackslash,
    U007eAsFullwidthTilde,
    U007eAsWaveDash,
    U007eAsOverline,
    U007eAsFullwidthMacron,
    U00a5AsYenSign,
}

fn override_pairs(o: Override) -> &'static [(char, char)] {
    match o {
        Override::U005cAsYenSign => &[('\u{ffe5}', '\u{005c}')],
        Override::U005cAsBackslash => &[('\u{ff3c}', '\u{005c}')],
        Override::U007eAsFullwidthTilde => &[('\u{ff5e}', '\u{007e}')],
        Override::U007eAsWaveDash => &[('\u{301c}', '\u{007e}')],
        Override::U007eAsOverline => &[('\u{203e}', '\u{007e}')],
        Override::U007eAsFullwidthMacron => &[('\u{ffe3}', '\u{007e}')],
        Override::U00a5AsYenSign => &[('\u{ffe5}', '\u{00a5}')],
    }
}

// GR area punctuation (fullwidth, halfwidth); katakana pairs are derived
// from the shared table below.
const JISX0201_GR_PUNCTUATION: &[(char, char)] = &[
    ('\u{3002}', '\u{ff61}'),
    ('\u{300c}', '\u{ff62}'),
    ('\u{300d}', '\u{ff63}'),
    ('\u{3001}', '\u{ff64}'),
    ('\u{30fb}', '\u{ff65}'),
    ('\u{30fc}', '\u{ff70}'),
    ('\u{309b}', '\u{ff9e}'),
    ('\u{309c}', '\u{ff9f}'),
];

const SPECIAL_PUNCTUATIONS_TABLE: &[(char, char)] = &[('\u{30a0}', '\u{003d}')];

static JISX0201_GR_TABLE: Lazy<Vec<(char, char)>> = Lazy::new(|| {
    let mut pairs: Vec<(char, char)> = JISX0201_GR_PUNCTUATION.to_vec();
    for row in HIRAGANA_KATAKANA_TABLE {
        if let Some(halfwidth) = row.halfwidth {
            pairs.push((row.katakana.base, halfwidth));
        }
    }
    for (_, katakana, halfwidth) in HIRAGANA_KATAKANA_SMALL_TABLE {
        if let Some(halfwidth) = halfwidth {
            pairs.push((*katakana, *halfwidth));
        }
    }
    pairs
});

// Composed katakana to halfwidth base plus voice mark.
static VOICED_LETTERS_TABLE: Lazy<Vec<(char, String)>> = Lazy::new(|| {
    let mut pairs = Vec::new();
    for row in HIRAGANA_KATAKANA_TABLE {
        if let Some(halfwidth) = row.halfwidth {
            if let Some(voiced) = row.katakana.voiced {
                pairs.push((voiced, format!("{}\u{ff9e}", halfwidth)));
            }
            if let Some(semi_voiced) = row.katakana.semi_voiced {
                pairs.push((semi_voiced, format!("{}\u{ff9f}", halfwidth)));
            }
        }
    }
    pairs
});

static HIRAGANA_MAPPINGS: Lazy<HashMap<char, String>> = Lazy::new(|| {
    let mut mappings = HashMap::new();
    for row in HIRAGANA_KATAKANA_TABLE {
        if let Some(halfwidth) = row.halfwidth {
            mappings.insert(row.hiragana.base, halfwidth.to_string());
            if let Some(voiced) = row.hiragana.voiced {
                mappings.insert(voiced, format!("{}\u{ff9e}", halfwidth));
            }
            if let Some(semi_voiced) = row.hiragana.semi_voiced {
                mappings.insert(semi_voiced, format!("{}\u{ff9f}", halfwidth));
            }
        }
    }
    for (hiragana, _, halfwidth) in HIRAGANA_KATAKANA_SMALL_TABLE {
        if let Some(halfwidth) = halfwidth {
            mappings.insert(*hiragana, halfwidth.to_string());
        }
    }
    mappings
});

// Halfwidth kana -> voice mark -> composed fullwidth kana.
static VOICED_REV_MAPPINGS: Lazy<HashMap<char, HashMap<char, char>>> = Lazy::new(|| {
    let mut mappings: HashMap<char, HashMap<char, char>> = HashMap::new();
    for (fullwidth, halfwidth) in VOICED_LETTERS_TABLE.iter() {
        let mut chars = halfwidth.chars();
        let base = chars.next().unwrap();
        let mark = chars.next().unwrap();
        mappings.entry(base).or_default().insert(mark, *fullwidth);
    }
    mappings
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Jisx0201AndAlikeOptions {
    pub fullwidth_to_halfwidth: bool,
    pub convert_gl: bool,
    pub convert_gr: bool,
    /// Fold hiragana to halfwidth katakana (fullwidth-to-halfwidth only).
    pub convert_hiraganas: bool,
    /// Compose a halfwidth kana with a following U+FF9E/U+FF9F
    /// (halfwidth-to-fullwidth only).
    pub combine_voiced_sound_marks: bool,
    /// U+30A0 vs U+003D. Defaults to true when folding to halfwidth, false
    /// in the other direction.
    pub convert_unsafe_specials: Option<bool>,
    pub u005c_as_yen_sign: Option<bool>,
    pub u005c_as_backslash: Option<bool>,
    pub u007e_as_fullwidth_tilde: Option<bool>,
    pub u007e_as_wave_dash: Option<bool>,
    pub u007e_as_overline: Option<bool>,
    pub u007e_as_fullwidth_macron: Option<bool>,
    pub u00a5_as_yen_sign: Option<bool>,
}

impl Default for Jisx0201AndAlikeOptions {
    fn default() -> Self {
        Jisx0201AndAlikeOptions {
            fullwidth_to_halfwidth: true,
            convert_gl: true,
            convert_gr: true,
            convert_hiraganas: false,
            combine_voiced_sound_marks: true,
            convert_unsafe_specials: None,
            u005c_as_yen_sign: None,
            u005c_as_backslash: None,
            u007e_as_fullwidth_tilde: None,
            u007e_as_wave_dash: None,
            u007e_as_overline: None,
            u007e_as_fullwidth_macron: None,
            u00a5_as_yen_sign: None,
        }
    }
}

/// Disambiguation flags with their direction-dependent defaults applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ResolvedOptions {
    convert_gl: bool,
    convert_gr: bool,
    convert_hiraganas: bool,
    convert_unsafe_specials: bool,
    u005c_as_yen_sign: bool,
    u005c_as_backslash: bool,
    u007e_as_fullwidth_tilde: bool,
    u007e_as_wave_dash: bool,
    u007e_as_overline: bool,
    u007e_as_fullwidth_macron: bool,
    u00a5_as_yen_sign: bool,
}

impl ResolvedOptions {
    fn forward(options: &Jisx0201AndAlikeOptions) -> Self {
        ResolvedOptions {
            convert_gl: options.convert_gl,
            convert_gr: options.convert_gr,
            convert_hiraganas: options.convert_hiraganas,
            convert_unsafe_specials: options.convert_unsafe_specials.unwrap_or(true),
            u005c_as_yen_sign: options
                .u005c_as_yen_sign
                .unwrap_or_else(|| options.u00a5_as_yen_sign.is_none()),
            u005c_as_backslash: options.u005c_as_backslash.unwrap_or(false),
            u007e_as_fullwidth_tilde: options.u007e_as_fullwidth_tilde.unwrap_or(true),
            u007e_as_wave_dash: options.u007e_as_wave_dash.unwrap_or(true),
            u007e_as_overline: options.u007e_as_overline.unwrap_or(false),
            u007e_as_fullwidth_macron: options.u007e_as_fullwidth_macron.unwrap_or(false),
            u00a5_as_yen_sign: options.u00a5_as_yen_sign.unwrap_or(false),
        }
    }

    fn reverse(options: &Jisx0201AndAlikeOptions) -> Self {
        ResolvedOptions {
            convert_gl: options.convert_gl,
            convert_gr: options.convert_gr,
            convert_hiraganas: false,
            convert_unsafe_specials: options.convert_unsafe_specials.unwrap_or(false),
            u005c_as_yen_sign: options
                .u005c_as_yen_sign
                .unwrap_or_else(|| options.u005c_as_backslash.is_none()),
            u005c_as_backslash: options.u005c_as_backslash.unwrap_or(false),
            u007e_as_fullwidth_tilde: options.u007e_as_fullwidth_tilde.unwrap_or_else(|| {
                options.u007e_as_wave_dash.is_none()
                    && options.u007e_as_overline.is_none()
                    && options.u007e_as_fullwidth_macron.is_none()
            }),
            u007e_as_wave_dash: options.u007e_as_wave_dash.unwrap_or(false),
            u007e_as_overline: options.u007e_as_overline.unwrap_or(false),
            u007e_as_fullwidth_macron: options.u007e_as_fullwidth_macron.unwrap_or(false),
            u00a5_as_yen_sign: options.u00a5_as_yen_sign.unwrap_or(true),
        }
    }

    fn overrides(&self) -> Vec<Override> {
        let mut enabled = Vec::new();
        for flag in GL_OVERRIDE_FLAGS {
            let on = match flag {
                Override::U005cAsYenSign => self.u005c_as_yen_sign,
                Override::U005cAsBackslash => self.u005c_as_backslash,
                Override::U007eAsFullwidthTilde => self.u007e_as_fullwidth_tilde,
                Override::U007eAsWaveDash => self.u007e_as_wave_dash,
                Override::U007eAsOverline => self.u007e_as_overline,
                Override::U007eAsFullwidthMacron => self.u007e_as_fullwidth_macron,
                Override::U00a5AsYenSign => self.u00a5_as_yen_sign,
            };
            if on {
                enabled.push(*flag);
            }
        }
        enabled
    }
}

fn build_fwd_mappings(options: &ResolvedOptions) -> HashMap<char, String> {
    let mut mappings = HashMap::new();
    if options.convert_gl {
        for (fullwidth, halfwidth) in JISX0201_GL_TABLE.iter() {
            mappings.insert(*fullwidth, halfwidth.to_string());
        }
        for flag in options.overrides() {
            for (fullwidth, halfwidth) in override_pairs(flag) {
                mappings.insert(*fullwidth, halfwidth.to_string());
            }
        }
        if options.convert_unsafe_specials {
            for (fullwidth, halfwidth) in SPECIAL_PUNCTUATIONS_TABLE {
                mappings.insert(*fullwidth, halfwidth.to_string());
            }
        }
    }
    if options.convert_gr {
        for (fullwidth, halfwidth) in JISX0201_GR_TABLE.iter() {
            mappings.insert(*fullwidth, halfwidth.to_string());
        }
        for (fullwidth, halfwidth) in VOICED_LETTERS_TABLE.iter() {
            mappings.insert(*fullwidth, halfwidth.clone());
        }
        mappings.insert('\u{3099}', "\u{ff9e}".to_owned());
        mappings.insert('\u{309a}', "\u{ff9f}".to_owned());
        if options.convert_hiraganas {
            for (hiragana, halfwidth) in HIRAGANA_MAPPINGS.iter() {
                mappings.insert(*hiragana, halfwidth.clone());
            }
        }
    }
    mappings
}

fn build_rev_mappings(options: &ResolvedOptions) -> HashMap<char, char> {
    let mut mappings = HashMap::new();
    if options.convert_gl {
        for (fullwidth, halfwidth) in JISX0201_GL_TABLE.iter() {
            mappings.insert(*halfwidth, *fullwidth);
        }
        for flag in options.overrides() {
            for (fullwidth, halfwidth) in override_pairs(flag) {
                mappings.insert(*halfwidth, *fullwidth);
            }
        }
        if options.convert_unsafe_specials {
            for (fullwidth, halfwidth) in SPECIAL_PUNCTUATIONS_TABLE {
                mappings.insert(*halfwidth, *fullwidth);
            }
        }
    }
    if options.convert_gr {
        for (fullwidth, halfwidth) in JISX0201_GR_TABLE.iter() {
            mappings.insert(*halfwidth, *fullwidth);
        }
    }
    mappings
}

// The synthesized tables only depend on the resolved option set, so they are
// cached process-wide.
static FWD_CACHE: Lazy<Mutex<HashMap<ResolvedOptions, Arc<HashMap<char, String>>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));
static REV_CACHE: Lazy<Mutex<HashMap<ResolvedOptions, Arc<HashMap<char, char>>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

enum Direction {
    Forward {
        mappings: Arc<HashMap<char, String>>,
    },
    Reverse {
        mappings: Arc<HashMap<char, char>>,
        combine_voiced_sound_marks: bool,
    },
}

pub struct Jisx0201AndAlike {
    direction: Direction,
}

impl Jisx0201AndAlike {
    pub fn new(options: Jisx0201AndAlikeOptions) -> Self {
        let direction = if options.fullwidth_to_halfwidth {
            let resolved = ResolvedOptions::forward(&options);
            let mappings = FWD_CACHE
                .lock()
                .unwrap()
                .entry(resolved)
                .or_insert_with(|| Arc::new(build_fwd_mappings(&resolved)))
                .clone();
            Direction::Forward { mappings }
        } else {
            let resolved = ResolvedOptions::reverse(&options);
            let mappings = REV_CACHE
                .lock()
                .unwrap()
                .entry(resolved)
                .or_insert_with(|| Arc::new(build_rev_mappings(&resolved)))
                .clone();
            Direction::Reverse {
                mappings,
                combine_voiced_sound_marks: options.combine_voiced_sound_marks
                    && options.convert_gr,
            }
        };
        Jisx0201AndAlike { direction }
    }
}

impl Transliterate for Jisx0201AndAlike {
    fn transliterate<'a>(&'a self, input: CharIter<'a>) -> CharIter<'a> {
        match &self.direction {
            Direction::Forward { mappings } => {
                let mut offset = 0;
                Box::new(input.map(move |c| {
                    let mapped = c.as_single_char().and_then(|ch| mappings.get(&ch));
                    let out = match mapped {
                        Some(mapped) => Char::derived(mapped.clone(), offset, &c),
                        None => c.with_offset(offset),
                    };
                    offset += out.scalar_len();
                    out
                }))
            }
            Direction::Reverse {
                mappings,
                combine_voiced_sound_marks,
            } => Box::new(ReverseIter {
                mappings: Arc::clone(mappings),
                combine_voiced_sound_marks: *combine_voiced_sound_marks,
                input,
                pending: None,
                out: VecDeque::new(),
                offset: 0,
                input_done: false,
            }),
        }
    }
}

struct ReverseIter<'a> {
    mappings: Arc<HashMap<char, char>>,
    combine_voiced_sound_marks: bool,
    input: CharIter<'a>,
    pending: Option<Rc<Char>>,
    out: VecDeque<Rc<Char>>,
    offset: usize,
    input_done: bool,
}

impl<'a> ReverseIter<'a> {
    fn emit_mapped(&mut self, c: Rc<Char>) {
        let mapped = c.as_single_char().and_then(|ch| self.mappings.get(&ch));
        let out = match mapped {
            Some(mapped) => Char::derived(*mapped, self.offset, &c),
            None => c.with_offset(self.offset),
        };
        self.offset += out.scalar_len();
        self.out.push_back(out);
    }

    fn voiced_compositions(&self, c: &Char) -> Option<&'static HashMap<char, char>> {
        if !self.combine_voiced_sound_marks {
            return None;
        }
        c.as_single_char().and_then(|ch| VOICED_REV_MAPPINGS.get(&ch))
    }

    fn step(&mut self, c: Rc<Char>) {
        if let Some(pending) = self.pending.take() {
            let composed = self
                .voiced_compositions(&pending)
                .and_then(|compositions| c.as_single_char().and_then(|mark| compositions.get(&mark)));
            if let Some(composed) = composed {
                let out = Char::derived(*composed, self.offset, &pending);
                self.offset += out.scalar_len();
                self.out.push_back(out);
                return;
            }
            self.emit_mapped(pending);
        }
        if self.voiced_compositions(&c).is_some() {
            self.pending = Some(c);
        } else {
            self.emit_mapped(c);
        }
    }
}

impl<'a> Iterator for ReverseIter<'a> {
    type Item = Rc<Char>;

    fn next(&mut self) -> Option<Rc<Char>> {
        loop {
            if let Some(c) = self.out.pop_front() {
                return Some(c);
            }
            if self.input_done {
                return None;
            }
            match self.input.next() {
                Some(c) => self.step(c),
                None => {
                    self.input_done = true;
                    if let Some(pending) = self.pending.take() {
                        self.emit_mapped(pending);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{build_char_list, from_chars};

    fn transliterate(options: Jisx0201AndAlikeOptions, input: &str) -> String {
        let stage = Jisx0201AndAlike::new(options);
        let chars = build_char_list(input);
        from_chars(stage.transliterate(Box::new(chars.into_iter())))
    }

    fn forward() -> Jisx0201AndAlikeOptions {
        Jisx0201AndAlikeOptions::default()
    }

    fn reverse() -> Jisx0201AndAlikeOptions {
        Jisx0201AndAlikeOptions {
            fullwidth_to_halfwidth: false,
            ..Jisx0201AndAlikeOptions::default()
        }
    }

    #[test]
    fn forward_gl() {
        let options = Jisx0201AndAlikeOptions {
            convert_gr: false,
            ..forward()
        };
        assert_eq!(
            transliterate(options, "字！＃０９：；ＡＺ［￥］ａｚ｛｝〜\u{30a0}"),
            "字!#09:;AZ[\\]az{}~="
        );
        assert_eq!(transliterate(options, "Ａ\u{3000}Ｂ"), "A B");
    }

    #[test]
    fn forward_gr() {
        let options = Jisx0201AndAlikeOptions {
            convert_gl: false,
            ..forward()
        };
        assert_eq!(
            transliterate(options, "アガパピョッンー、。「」・"),
            "ｱｶﾞﾊﾟﾋﾟｮｯﾝｰ､｡｢｣･"
        );
        // Fullwidth GL characters are untouched without convert_gl.
        assert_eq!(transliterate(options, "Ａ！"), "Ａ！");
        // ヵ and ヶ have no halfwidth counterpart.
        assert_eq!(transliterate(options, "ヵヶ"), "ヵヶ");
    }

    #[test]
    fn forward_voiced_decomposition() {
        assert_eq!(transliterate(forward(), "ガギグゲゴ"), "ｶﾞｷﾞｸﾞｹﾞｺﾞ");
        assert_eq!(transliterate(forward(), "パピプペポ"), "ﾊﾟﾋﾟﾌﾟﾍﾟﾎﾟ");
        assert_eq!(transliterate(forward(), "ヴ"), "ｳﾞ");
    }

    #[test]
    fn forward_combining_marks() {
        assert_eq!(transliterate(forward(), "\u{3099}\u{309a}"), "\u{ff9e}\u{ff9f}");
    }

    #[test]
    fn forward_disabled_does_nothing() {
        let options = Jisx0201AndAlikeOptions {
            convert_gl: false,
            convert_gr: false,
            ..forward()
        };
        let input = "字！Ａアー\u{30a0}";
        assert_eq!(transliterate(options, input), input);
    }

    #[test]
    fn forward_hiraganas() {
        let base = Jisx0201AndAlikeOptions {
            convert_unsafe_specials: Some(false),
            ..forward()
        };
        // Preserved by default.
        assert_eq!(transliterate(base, "あがぱ"), "あがぱ");
        let options = Jisx0201AndAlikeOptions {
            convert_hiraganas: true,
            ..base
        };
        assert_eq!(transliterate(options, "ぁあがぱんー"), "ｧｱｶﾞﾊﾟﾝｰ");
    }

    #[test]
    fn forward_unsafe_specials_flag() {
        let off = Jisx0201AndAlikeOptions {
            convert_unsafe_specials: Some(false),
            ..forward()
        };
        assert_eq!(transliterate(off, "\u{30a0}"), "\u{30a0}");
        assert_eq!(transliterate(forward(), "\u{30a0}"), "=");
    }

    #[test]
    fn forward_backslash_option() {
        let options = Jisx0201AndAlikeOptions {
            u005c_as_backslash: Some(true),
            ..forward()
        };
        assert_eq!(transliterate(options, "＼"), "\\");
    }

    #[test]
    fn reverse_gr_without_combining() {
        let options = Jisx0201AndAlikeOptions {
            convert_gl: false,
            combine_voiced_sound_marks: false,
            ..reverse()
        };
        assert_eq!(
            transliterate(options, "ｶﾞｷﾞｺﾞﾊﾟｰ"),
            "カ\u{309b}キ\u{309b}コ\u{309b}ハ\u{309c}ー"
        );
    }

    #[test]
    fn reverse_gr_with_combining() {
        let options = Jisx0201AndAlikeOptions {
            convert_gl: false,
            ..reverse()
        };
        assert_eq!(transliterate(options, "ｶﾞｷﾞｸﾞｹﾞｺﾞ"), "ガギグゲゴ");
        assert_eq!(transliterate(options, "ﾊﾟﾋﾟﾌﾟﾍﾟﾎﾟ"), "パピプペポ");
        assert_eq!(transliterate(options, "ｳﾞ"), "ヴ");
        assert_eq!(transliterate(options, "ｱｲｳｴｵｯﾝｰ､｡"), "アイウエオッンー、。");
    }

    #[test]
    fn reverse_pending_flushes_without_mark() {
        let options = Jisx0201AndAlikeOptions {
            convert_gl: false,
            ..reverse()
        };
        assert_eq!(transliterate(options, "ｶｷｸ"), "カキク");
        assert_eq!(transliterate(options, "ｶ"), "カ");
        assert_eq!(transliterate(options, "ｶa"), "カa");
    }

    #[test]
    fn reverse_gl() {
        assert_eq!(
            transliterate(reverse(), "!9Az{|}~\\\u{00a5}"),
            "！９Ａｚ｛｜｝\u{ff5e}￥￥"
        );
        assert_eq!(transliterate(reverse(), " "), "\u{3000}");
    }

    #[test]
    fn reverse_backslash_option() {
        let options = Jisx0201AndAlikeOptions {
            u005c_as_backslash: Some(true),
            ..reverse()
        };
        assert_eq!(transliterate(options, "\\"), "＼");
    }

    #[test]
    fn reverse_tilde_options() {
        let wave = Jisx0201AndAlikeOptions {
            u007e_as_wave_dash: Some(true),
            ..reverse()
        };
        assert_eq!(transliterate(wave, "~"), "\u{301c}");
        let overline = Jisx0201AndAlikeOptions {
            u007e_as_overline: Some(true),
            ..reverse()
        };
        assert_eq!(transliterate(overline, "~"), "\u{203e}");
        // Sibling flags suppress the fullwidth-tilde default.
        let wave_only = Jisx0201AndAlikeOptions {
            u007e_as_wave_dash: Some(false),
            ..reverse()
        };
        assert_eq!(transliterate(wave_only, "~"), "~");
    }

    #[test]
    fn reverse_unsafe_specials_defaults_off() {
        assert_eq!(transliterate(reverse(), "="), "＝");
        let options = Jisx0201AndAlikeOptions {
            convert_unsafe_specials: Some(true),
            ..reverse()
        };
        assert_eq!(transliterate(options, "="), "\u{30a0}");
    }
}
