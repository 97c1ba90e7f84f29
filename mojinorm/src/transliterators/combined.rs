//! Replace each combined character with its corresponding individual
//! characters, e.g. ㈱ becomes (株).

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::chars::{Char, CharExt};
use crate::intrinsics::{CharIter, Transliterate};
use crate::transliterators::combined_data::COMBINED_MAPPINGS;

static TABLE: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| COMBINED_MAPPINGS.iter().copied().collect());

pub struct Combined;

impl Transliterate for Combined {
    fn transliterate<'a>(&'a self, input: CharIter<'a>) -> CharIter<'a> {
        let mut offset = 0;
        Box::new(input.flat_map(move |c| {
            let replacement = c.as_single_char().and_then(|ch| TABLE.get(&ch));
            match replacement {
                Some(replacement) => replacement
                    .chars()
                    .map(|part| {
                        let out = Char::derived(part, offset, &c);
                        offset += 1;
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
        from_chars(Combined.transliterate(Box::new(chars.into_iter())))
    }

    #[test]
    fn control_pictures() {
        assert_eq!(transliterate("␀"), "NUL");
        assert_eq!(transliterate("␈"), "BS");
        assert_eq!(transliterate("␍"), "CR");
        assert_eq!(transliterate("␠"), "SP");
        assert_eq!(transliterate("␡"), "DEL");
        assert_eq!(transliterate("␀␁␂␃␄"), "NULSOHSTXETXEOT");
    }

    #[test]
    fn parenthesized_numbers_and_letters() {
        assert_eq!(transliterate("⑴"), "(1)");
        assert_eq!(transliterate("⒇"), "(20)");
        assert_eq!(transliterate("⒈"), "1.");
        assert_eq!(transliterate("⒛"), "20.");
        assert_eq!(transliterate("⒜"), "(a)");
        assert_eq!(transliterate("⒵"), "(z)");
    }

    #[test]
    fn parenthesized_ideographs() {
        assert_eq!(transliterate("㈠"), "(一)");
        assert_eq!(transliterate("㈪"), "(月)");
        assert_eq!(transliterate("㈱"), "(株)");
    }

    #[test]
    fn squared_words_and_units() {
        assert_eq!(transliterate("㌀"), "アパート");
        assert_eq!(transliterate("㌔"), "キロ");
        assert_eq!(transliterate("㍍"), "メートル");
        assert_eq!(transliterate("㍱"), "hPa");
        assert_eq!(transliterate("㎑"), "kHz");
        assert_eq!(transliterate("㎏"), "kg");
        assert_eq!(transliterate("\u{3378}\u{3379}\u{337a}"), "dm2dm3IU");
    }

    #[test]
    fn japanese_eras_and_months() {
        assert_eq!(transliterate("㍻"), "平成");
        assert_eq!(transliterate("㍿"), "株式会社");
        assert_eq!(transliterate("㋿"), "令和");
        assert_eq!(transliterate("㋀㋁㋂"), "1月2月3月");
    }

    #[test]
    fn mixed_with_regular_text() {
        assert_eq!(transliterate("Hello ⑴ World ␉"), "Hello (1) World HT");
        assert_eq!(transliterate("␉⑴␠⒈"), "HT(1)SP1.");
    }

    #[test]
    fn unmapped_passes_through() {
        let input = "hello world 123 abc こんにちは";
        assert_eq!(transliterate(input), input);
    }
}
