//! Replace ideographic annotation marks used in the traditional method of
//! Chinese-to-Japanese translation with their plain ideograph counterparts.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::chars::{Char, CharExt};
use crate::intrinsics::{CharIter, Transliterate};
use crate::transliterators::ideographic_annotations_data::IDEOGRAPHIC_ANNOTATIONS_MAPPINGS;

static TABLE: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| IDEOGRAPHIC_ANNOTATIONS_MAPPINGS.iter().copied().collect());

pub struct IdeographicAnnotations;

impl Transliterate for IdeographicAnnotations {
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
        from_chars(IdeographicAnnotations.transliterate(Box::new(chars.into_iter())))
    }

    #[test]
    fn annotation_marks() {
        assert_eq!(transliterate("\u{3196}\u{3198}"), "上下");
        assert_eq!(transliterate("\u{3192}\u{3193}\u{3194}"), "一二三");
    }

    #[test]
    fn unmapped_passes_through() {
        assert_eq!(transliterate("上下"), "上下");
    }
}
