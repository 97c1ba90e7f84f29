//! Replace Kangxi radical and CJK radical variant codepoints with the CJK
//! ideographs whose glyphs they resemble.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::chars::{Char, CharExt};
use crate::intrinsics::{CharIter, Transliterate};
use crate::transliterators::radicals_data::RADICALS_MAPPINGS;

static TABLE: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| RADICALS_MAPPINGS.iter().copied().collect());

pub struct Radicals;

impl Transliterate for Radicals {
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
        from_chars(Radicals.transliterate(Box::new(chars.into_iter())))
    }

    #[test]
    fn cjk_radicals_supplement() {
        assert_eq!(transliterate("⺀⺁⺂⺃⺄⺅⺆"), "冫厂乛乚乙亻冂");
        assert_eq!(transliterate("⺉⺊⺋"), "刂卜㔾");
        assert_eq!(transliterate("⺖⺘⺙⺡⺣⺥⺨⺭⺯⺰"), "忄扌攵氵灬爫犭礻糹纟");
        assert_eq!(transliterate("⻈⻉⻋⻐⻢⻥⻦"), "讠贝车钅马鱼鸟");
    }

    #[test]
    fn grass_radical_variants() {
        assert_eq!(transliterate("⺾⺿⻀⾋"), "艹艹艹艸");
    }

    #[test]
    fn walk_city_and_mound() {
        assert_eq!(transliterate("⻍⻏⻖⻟⻠"), "辶阝阝飠饣");
    }

    #[test]
    fn kangxi_radicals() {
        assert_eq!(transliterate("⼀⼆⼃⼄⼅⼆⼇⼈⼉⼊"), "一二丿乙亅二亠人儿入");
        assert_eq!(transliterate("⼾⼿⽀"), "戶手支");
        assert_eq!(transliterate("⾔⾨⾷"), "言門食");
    }

    #[test]
    fn radicals_in_context() {
        assert_eq!(transliterate("⼭の⽊を⽔で育てる"), "山の木を水で育てる");
        assert_eq!(transliterate("部首⺀漢字⼀"), "部首冫漢字一");
    }

    #[test]
    fn unmapped_passes_through() {
        let input = "hello world 123 abc こんにちは 漢字";
        assert_eq!(transliterate(input), input);
    }
}
