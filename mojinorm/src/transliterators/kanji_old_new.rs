//! Replace old-form kanji (旧字体) with their modern equivalents (新字体).
//!
//! The table is keyed on two-scalar ideographic variation sequences, so this
//! stage only takes effect on characters that carry IVS selectors; the recipe
//! compiler brackets it between ivs-svs-base stages for that reason.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::chars::{Char, CharExt};
use crate::intrinsics::{CharIter, Transliterate};
use crate::transliterators::kanji_old_new_data::KANJI_OLD_NEW_MAPPINGS;

static TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| KANJI_OLD_NEW_MAPPINGS.iter().copied().collect());

pub struct KanjiOldNew;

impl Transliterate for KanjiOldNew {
    fn transliterate<'a>(&'a self, input: CharIter<'a>) -> CharIter<'a> {
        let mut offset = 0;
        Box::new(input.map(move |c| {
            let out = match TABLE.get(c.c.as_str()) {
                Some(replacement) => Char::derived(*replacement, offset, &c),
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

    fn transliterate(input: &str) -> String {
        let chars = build_char_list(input);
        from_chars(KanjiOldNew.transliterate(Box::new(chars.into_iter())))
    }

    #[test]
    fn old_form_with_selector_is_replaced() {
        assert_eq!(
            transliterate("\u{6a9c}\u{e0100}"),
            "\u{6867}\u{e0100}"
        );
        assert_eq!(
            transliterate("\u{820a}\u{e0100}\u{5b57}"),
            "\u{65e7}\u{e0100}\u{5b57}"
        );
    }

    #[test]
    fn selector_only_variant_pairs() {
        assert_eq!(transliterate("\u{8fbb}\u{e0101}"), "\u{8fbb}\u{e0100}");
    }

    #[test]
    fn bare_kanji_is_untouched() {
        assert_eq!(transliterate("舊字體"), "舊字體");
    }
}
