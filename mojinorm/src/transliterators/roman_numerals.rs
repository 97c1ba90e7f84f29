//! Replace roman numeral characters with their ASCII letter equivalents,
//! one output character per letter.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::chars::{Char, CharExt};
use crate::intrinsics::{CharIter, Transliterate};
use crate::transliterators::roman_numerals_data::ROMAN_NUMERAL_MAPPINGS;

static TABLE: Lazy<HashMap<char, &'static [&'static str]>> =
    Lazy::new(|| ROMAN_NUMERAL_MAPPINGS.iter().copied().collect());

pub struct RomanNumerals;

impl Transliterate for RomanNumerals {
    fn transliterate<'a>(&'a self, input: CharIter<'a>) -> CharIter<'a> {
        let mut offset = 0;
        Box::new(input.flat_map(move |c| {
            let replacement = c.as_single_char().and_then(|ch| TABLE.get(&ch));
            match replacement {
                Some(letters) => letters
                    .iter()
                    .map(|letter| {
                        let out = Char::derived(*letter, offset, &c);
                        offset += out.scalar_len();
                        out
                    })
                    .collect::<Vec<_>>(),
                None => {
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

    fn transliterate(input: &str) -> String {
        let chars = build_char_list(input);
        from_chars(RomanNumerals.transliterate(Box::new(chars.into_iter())))
    }

    #[test]
    fn uppercase() {
        let cases = [
            ("Ⅰ", "I"),
            ("Ⅲ", "III"),
            ("Ⅳ", "IV"),
            ("Ⅸ", "IX"),
            ("Ⅻ", "XII"),
            ("Ⅼ", "L"),
            ("Ⅿ", "M"),
        ];
        for (input, expected) in &cases {
            assert_eq!(transliterate(input), *expected);
        }
    }

    #[test]
    fn lowercase() {
        let cases = [("ⅰ", "i"), ("ⅸ", "ix"), ("ⅻ", "xii"), ("ⅿ", "m")];
        for (input, expected) in &cases {
            assert_eq!(transliterate(input), *expected);
        }
    }

    #[test]
    fn mixed_text() {
        assert_eq!(transliterate("Chapter Ⅳ, part ⅱ"), "Chapter IV, part ii");
    }
}
