//! Replace mathematical styled letters and digits with their plain
//! counterparts.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::chars::{Char, CharExt};
use crate::intrinsics::{CharIter, Transliterate};
use crate::transliterators::mathematical_alphanumerics_data::MATHEMATICAL_ALPHANUMERICS_MAPPINGS;

static TABLE: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| MATHEMATICAL_ALPHANUMERICS_MAPPINGS.iter().copied().collect());

pub struct MathematicalAlphanumerics;

impl Transliterate for MathematicalAlphanumerics {
    fn transliterate<'a>(&'a self, input: CharIter<'a>) -> CharIter<'a> {
        let mut offset = 0;
        Box::new(input.map(move |c| {
            let replacement = c.as_single_char().and_then(|ch| TABLE.get(&ch));
            let out = match replacement {
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
        from_chars(MathematicalAlphanumerics.transliterate(Box::new(chars.into_iter())))
    }

    #[test]
    fn bold_letters() {
        assert_eq!(transliterate("𝐀𝐁𝐂"), "ABC");
        assert_eq!(transliterate("𝐇𝐞𝐥𝐥𝐨"), "Hello");
    }

    #[test]
    fn bold_digits() {
        assert_eq!(transliterate("𝟏𝟐𝟑"), "123");
    }

    #[test]
    fn double_struck_and_monospace() {
        assert_eq!(transliterate("𝔸𝕓"), "Ab");
        assert_eq!(transliterate("𝚊𝚋𝚌"), "abc");
    }

    #[test]
    fn unmapped_passes_through() {
        assert_eq!(transliterate("plain ascii"), "plain ascii");
    }
}
