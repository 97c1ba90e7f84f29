//! Combine a base kana with a following voice mark into the composed kana,
//! e.g. か + ゛ becomes が.

use std::collections::HashMap;
use std::rc::Rc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::chars::{Char, CharExt};
use crate::intrinsics::{CharIter, Transliterate};
use crate::transliterators::hira_kata_table::{SEMI_VOICED_CHARACTERS, VOICED_CHARACTERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HiraKataCompositionOptions {
    /// Also recognize the non-combining marks U+309B and U+309C beside the
    /// combining ones U+3099 and U+309A.
    pub compose_non_combining_marks: bool,
}

static VOICED_TABLE: Lazy<HashMap<char, char>> =
    Lazy::new(|| VOICED_CHARACTERS.iter().copied().collect());
static SEMI_VOICED_TABLE: Lazy<HashMap<char, char>> =
    Lazy::new(|| SEMI_VOICED_CHARACTERS.iter().copied().collect());

pub struct HiraKataComposition {
    compose_non_combining_marks: bool,
}

impl HiraKataComposition {
    pub fn new(options: HiraKataCompositionOptions) -> Self {
        HiraKataComposition {
            compose_non_combining_marks: options.compose_non_combining_marks,
        }
    }

    fn table_for_mark(&self, mark: char) -> Option<&'static HashMap<char, char>> {
        match mark {
            '\u{3099}' => Some(&VOICED_TABLE),
            '\u{309a}' => Some(&SEMI_VOICED_TABLE),
            '\u{309b}' if self.compose_non_combining_marks => Some(&VOICED_TABLE),
            '\u{309c}' if self.compose_non_combining_marks => Some(&SEMI_VOICED_TABLE),
            _ => None,
        }
    }
}

impl Transliterate for HiraKataComposition {
    fn transliterate<'a>(&'a self, input: CharIter<'a>) -> CharIter<'a> {
        Box::new(CompositionIter {
            stage: self,
            input,
            pending: None,
            offset: 0,
        })
    }
}

struct CompositionIter<'a> {
    stage: &'a HiraKataComposition,
    input: CharIter<'a>,
    pending: Option<Rc<Char>>,
    offset: usize,
}

impl<'a> Iterator for CompositionIter<'a> {
    type Item = Rc<Char>;

    fn next(&mut self) -> Option<Rc<Char>> {
        loop {
            match self.input.next() {
                Some(c) => {
                    if let Some(pending) = self.pending.take() {
                        let composed = c
                            .as_single_char()
                            .and_then(|mark| self.stage.table_for_mark(mark))
                            .and_then(|table| {
                                pending.as_single_char().and_then(|base| table.get(&base))
                            });
                        if let Some(composed) = composed {
                            let out = Char::derived(*composed, self.offset, &pending);
                            self.offset += out.scalar_len();
                            return Some(out);
                        }
                        let out = pending.with_offset(self.offset);
                        self.offset += out.scalar_len();
                        self.pending = Some(c);
                        return Some(out);
                    }
                    self.pending = Some(c);
                }
                None => {
                    let pending = self.pending.take()?;
                    let out = pending.with_offset(self.offset);
                    self.offset += out.scalar_len();
                    return Some(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{build_char_list, from_chars};

    fn transliterate(input: &str, compose_non_combining_marks: bool) -> String {
        let stage = HiraKataComposition::new(HiraKataCompositionOptions {
            compose_non_combining_marks,
        });
        let chars = build_char_list(input);
        from_chars(stage.transliterate(Box::new(chars.into_iter())))
    }

    #[test]
    fn combining_marks_compose() {
        let cases = [
            ("\u{30ab}\u{3099}\u{30ac}\u{30ad}\u{30ad}\u{3099}\u{30af}", "ガガキギク"),
            (
                "\u{30cf}\u{30cf}\u{3099}\u{30cf}\u{309a}\u{30d2}\u{30d5}\u{30d8}\u{30db}",
                "ハバパヒフヘホ",
            ),
            ("\u{304b}\u{3099}\u{304c}\u{304d}\u{304d}\u{3099}\u{304f}", "ががきぎく"),
            ("\u{3046}\u{3099}", "ゔ"),
            ("\u{30a6}\u{3099}", "ヴ"),
            ("\u{30ef}\u{3099}", "ヷ"),
            ("\u{30f0}\u{3099}", "ヸ"),
            ("\u{30f1}\u{3099}", "ヹ"),
            ("\u{30f2}\u{3099}", "ヺ"),
        ];
        for (input, expected) in &cases {
            assert_eq!(transliterate(input, false), *expected);
        }
    }

    #[test]
    fn iteration_marks_compose() {
        assert_eq!(transliterate("\u{309d}\u{3099}", false), "ゞ");
        assert_eq!(transliterate("\u{30fd}\u{3099}", false), "ヾ");
        assert_eq!(transliterate("\u{3031}\u{3099}", false), "〲");
        assert_eq!(transliterate("\u{3033}\u{3099}", false), "〴");
    }

    #[test]
    fn non_combining_marks_require_option() {
        let input = "\u{30cf}\u{309b}";
        assert_eq!(transliterate(input, false), input);
        assert_eq!(transliterate(input, true), "バ");
        assert_eq!(transliterate("\u{309d}\u{309b}", true), "ゞ");
    }

    #[test]
    fn non_composable_passes_through() {
        assert_eq!(transliterate("\u{3042}\u{3099}", false), "\u{3042}\u{3099}");
    }

    #[test]
    fn multiple_compositions() {
        assert_eq!(
            transliterate(
                "\u{304b}\u{3099}\u{304d}\u{3099}\u{304f}\u{3099}\u{3051}\u{3099}\u{3053}\u{3099}",
                false
            ),
            "がぎぐげご"
        );
    }

    #[test]
    fn mixed_text() {
        assert_eq!(
            transliterate("テスト\u{309d}\u{3099}カタカナ\u{30fd}\u{3099}", false),
            "テスト\u{309e}カタカナ\u{30fe}"
        );
    }

    #[test]
    fn offsets_are_recomputed() {
        let stage = HiraKataComposition::new(HiraKataCompositionOptions::default());
        let chars = build_char_list("あ\u{304b}\u{3099}い");
        let out: Vec<_> = stage
            .transliterate(Box::new(chars.into_iter()))
            .collect();
        let offsets: Vec<_> = out.iter().map(|c| c.offset).collect();
        assert_eq!(offsets, vec![0, 1, 2, 3]);
        assert_eq!(from_chars(out), "あがい");
    }
}
