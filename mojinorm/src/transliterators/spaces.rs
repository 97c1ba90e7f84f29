//! Replace various space characters with plain whitespace.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::chars::{Char, CharExt};
use crate::intrinsics::{CharIter, Transliterate};
use crate::transliterators::spaces_data::SPACES_MAPPINGS;

static TABLE: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| SPACES_MAPPINGS.iter().copied().collect());

pub struct Spaces;

impl Transliterate for Spaces {
    fn transliterate<'a>(&'a self, input: CharIter<'a>) -> CharIter<'a> {
        let mut offset = 0;
        Box::new(input.map(move |c| {
            let replacement = c.as_single_char().and_then(|ch| TABLE.get(&ch));
            match replacement {
                Some(replacement) => {
                    let out = Char::derived(*replacement, offset, &c);
                    offset += out.scalar_len();
                    out
                }
                None => {
                    let out = c.with_offset(offset);
                    offset += out.scalar_len();
                    out
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
        from_chars(Spaces.transliterate(Box::new(chars.into_iter())))
    }

    #[test]
    fn ideographic_space() {
        assert_eq!(transliterate("hello\u{3000}world"), "hello world");
    }

    #[test]
    fn no_break_space() {
        assert_eq!(transliterate("A\u{00a0}B"), "A B");
    }

    #[test]
    fn zero_width_markers_are_removed() {
        assert_eq!(transliterate("a\u{feff}b\u{180e}c"), "abc");
    }

    #[test]
    fn unmapped_passes_through() {
        assert_eq!(transliterate("such text"), "such text");
    }
}
