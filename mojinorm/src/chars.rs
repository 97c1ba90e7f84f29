use std::rc::Rc;

/// A logical character flowing through a transliterator chain.
///
/// Carries the character content (one scalar value, or a base scalar plus a
/// trailing variation selector), the offset the content will occupy once the
/// stream is re-serialized, and a link to the character it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Char {
    /// The character content. Empty for the sentinel that terminates every
    /// stream.
    pub c: String,
    /// Offset of this character in the output text, counted in scalar values.
    pub offset: usize,
    /// The character this one was derived from, if any. Walking `source`
    /// links reveals the transformation history.
    pub source: Option<Rc<Char>>,
}

impl Char {
    pub fn new(c: impl Into<String>, offset: usize) -> Rc<Char> {
        Rc::new(Char {
            c: c.into(),
            offset,
            source: None,
        })
    }

    /// A character produced by a stage from `source`, carrying provenance.
    pub fn derived(c: impl Into<String>, offset: usize, source: &Rc<Char>) -> Rc<Char> {
        Rc::new(Char {
            c: c.into(),
            offset,
            source: Some(Rc::clone(source)),
        })
    }

    /// True if any ancestor along the `source` chain has content different
    /// from its descendant.
    pub fn is_transliterated(&self) -> bool {
        let mut current = self;
        while let Some(source) = &current.source {
            if source.c != current.c {
                return true;
            }
            current = source;
        }
        false
    }

    /// Content length in scalar values.
    pub fn scalar_len(&self) -> usize {
        self.c.chars().count()
    }

    pub fn is_sentinel(&self) -> bool {
        self.c.is_empty()
    }

    /// The content as a single scalar value, if that is what it holds.
    pub fn as_single_char(&self) -> Option<char> {
        let mut chars = self.c.chars();
        let first = chars.next()?;
        match chars.next() {
            Some(_) => None,
            None => Some(first),
        }
    }
}

/// Provenance-preserving helpers on shared characters.
pub trait CharExt {
    /// The same content at a new offset, with `source` pointing back at the
    /// original.
    fn with_offset(&self, offset: usize) -> Rc<Char>;
}

impl CharExt for Rc<Char> {
    fn with_offset(&self, offset: usize) -> Rc<Char> {
        Rc::new(Char {
            c: self.c.clone(),
            offset,
            source: Some(Rc::clone(self)),
        })
    }
}

fn is_variation_selector(c: char) -> bool {
    matches!(c as u32, 0xFE00..=0xFE0F | 0xE0100..=0xE01EF)
}

/// Split an input string into a character list, bundling a base scalar with
/// an immediately following variation selector (U+FE00..U+FE0F or
/// U+E0100..U+E01EF) into a single [`Char`]. A sentinel with empty content is
/// appended at the end.
pub fn build_char_list(input: &str) -> Vec<Rc<Char>> {
    let mut result = Vec::with_capacity(input.chars().count() + 1);
    let mut offset = 0;
    let mut pending: Option<char> = None;

    for c in input.chars() {
        match pending.take() {
            Some(prev) if is_variation_selector(c) => {
                let mut combined = String::with_capacity(prev.len_utf8() + c.len_utf8());
                combined.push(prev);
                combined.push(c);
                result.push(Char::new(combined, offset));
                offset += 2;
            }
            Some(prev) => {
                result.push(Char::new(prev, offset));
                offset += 1;
                pending = Some(c);
            }
            None => {
                pending = Some(c);
            }
        }
    }
    if let Some(prev) = pending {
        result.push(Char::new(prev, offset));
        offset += 1;
    }
    result.push(Char::new("", offset));
    result
}

/// Concatenate a character stream back into a string, dropping sentinels.
pub fn from_chars<I>(chars: I) -> String
where
    I: IntoIterator<Item = Rc<Char>>,
{
    let mut out = String::new();
    for c in chars {
        out.push_str(&c.c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple() {
        let result = build_char_list("hello");
        assert_eq!(result.len(), 6);
        assert_eq!(result[0].c, "h");
        assert_eq!(result[0].offset, 0);
        assert_eq!(result[4].c, "o");
        assert_eq!(result[4].offset, 4);
        assert_eq!(result[5].c, "");
        assert_eq!(result[5].offset, 5);
    }

    #[test]
    fn empty() {
        let result = build_char_list("");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].c, "");
        assert_eq!(result[0].offset, 0);
    }

    #[test]
    fn standardized_variation_sequence() {
        let result = build_char_list("a\u{fe0e}b");
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].c, "a\u{fe0e}");
        assert_eq!(result[0].offset, 0);
        assert_eq!(result[1].c, "b");
        assert_eq!(result[1].offset, 2);
        assert_eq!(result[2].c, "");
        assert_eq!(result[2].offset, 3);
    }

    #[test]
    fn ideographic_variation_sequence() {
        let result = build_char_list("漢\u{e0100}字");
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].c, "漢\u{e0100}");
        assert_eq!(result[1].c, "字");
        assert_eq!(result[1].offset, 2);
        assert_eq!(result[2].offset, 3);
    }

    #[test]
    fn consecutive_selectors_bundle_pairwise() {
        let result = build_char_list("a\u{fe0f}b\u{fe0e}c");
        assert_eq!(result.len(), 4);
        assert_eq!(result[0].c, "a\u{fe0f}");
        assert_eq!(result[1].c, "b\u{fe0e}");
        assert_eq!(result[1].offset, 2);
        assert_eq!(result[2].c, "c");
        assert_eq!(result[2].offset, 4);
    }

    #[test]
    fn selector_range_boundaries() {
        for cp in &[0xFE00u32, 0xFE0F, 0xE0100, 0xE01EF] {
            let selector = char::from_u32(*cp).unwrap();
            let input = format!("漢{}字", selector);
            let result = build_char_list(&input);
            assert_eq!(result.len(), 3);
            assert_eq!(result[0].c, format!("漢{}", selector));
        }
    }

    #[test]
    fn from_chars_drops_sentinels() {
        let chars = vec![
            Char::new("h", 0),
            Char::new("e", 1),
            Char::new("", 2),
            Char::new("l", 2),
            Char::new("o", 3),
            Char::new("", 4),
        ];
        assert_eq!(from_chars(chars), "helo");
    }

    #[test]
    fn round_trip() {
        for input in &[
            "hello",
            "漢字",
            "a\u{fe0e}b",
            "漢\u{e0100}字",
            "",
            "mixed\u{fe0f}漢\u{e0101}字abc",
        ] {
            assert_eq!(from_chars(build_char_list(input)), *input);
        }
    }

    #[test]
    fn transliterated_detection() {
        let original = Char::new("あ", 0);
        let unchanged = original.with_offset(4);
        assert!(!unchanged.is_transliterated());
        let replaced = Char::derived("ア", 0, &original);
        assert!(replaced.is_transliterated());
        let carried = replaced.with_offset(2);
        assert!(carried.is_transliterated());
    }
}
