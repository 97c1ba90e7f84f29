//! String-to-string frontend over the character-stream pipeline.

use crate::chars::{build_char_list, from_chars};
use crate::intrinsics::{ChainedTransliterator, ConfigError, Transliterate};
use crate::recipes::{build_transliterator_configs_from_recipe, TransliterationRecipe};
use crate::transliterators::TransliteratorConfig;

/// A compiled transliteration pipeline. Construction validates the whole
/// configuration; transliteration itself cannot fail.
pub struct Transliterator {
    chain: ChainedTransliterator,
}

impl Transliterator {
    pub fn transliterate(&self, input: &str) -> String {
        let chars = build_char_list(input);
        from_chars(self.chain.transliterate(Box::new(chars.into_iter())))
    }
}

/// Build a transliterator from an explicit, ordered stage list.
pub fn make_transliterator<I>(configs: I) -> Result<Transliterator, ConfigError>
where
    I: IntoIterator<Item = TransliteratorConfig>,
{
    Ok(Transliterator {
        chain: ChainedTransliterator::new(configs)?,
    })
}

/// Build a transliterator from a recipe.
pub fn make_transliterator_from_recipe(
    recipe: &TransliterationRecipe,
) -> Result<Transliterator, ConfigError> {
    make_transliterator(build_transliterator_configs_from_recipe(recipe)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::{
        Charset, CircledOrSquaredRecipeOption, ReplaceHyphensOption, ToFullwidthOption,
        ToHalfwidthOption,
    };
    use crate::transliterators::{HiraKataMode, HyphensOptions, HyphensPrecedence};

    #[test]
    fn empty_recipe_is_rejected() {
        assert_eq!(
            make_transliterator_from_recipe(&TransliterationRecipe::default()).err(),
            Some(ConfigError::EmptyChain)
        );
    }

    #[test]
    fn empty_config_list_is_rejected() {
        assert_eq!(
            make_transliterator(vec![]).err(),
            Some(ConfigError::EmptyChain)
        );
    }

    #[test]
    fn mutually_exclusive_widths_are_rejected() {
        let recipe = TransliterationRecipe {
            to_fullwidth: ToFullwidthOption::Enabled,
            to_halfwidth: ToHalfwidthOption::Enabled,
            ..TransliterationRecipe::default()
        };
        assert_eq!(
            make_transliterator_from_recipe(&recipe).err(),
            Some(ConfigError::MutuallyExclusiveOptions)
        );
    }

    #[test]
    fn adobe_japan1_charset_fails_at_construction() {
        let recipe = TransliterationRecipe {
            kanji_old_new: true,
            charset: Charset::AdobeJapan1,
            ..TransliterationRecipe::default()
        };
        assert_eq!(
            make_transliterator_from_recipe(&recipe).err(),
            Some(ConfigError::UnsupportedCharset(Charset::AdobeJapan1))
        );
    }

    #[test]
    fn spaces_recipe() {
        let recipe = TransliterationRecipe {
            replace_spaces: true,
            ..TransliterationRecipe::default()
        };
        let transliterator = make_transliterator_from_recipe(&recipe).unwrap();
        assert_eq!(
            transliterator.transliterate("hello\u{3000}world"),
            "hello world"
        );
    }

    #[test]
    fn explicit_stage_list() {
        let transliterator = make_transliterator(vec![TransliteratorConfig::Spaces]).unwrap();
        assert_eq!(
            transliterator.transliterate("hello\u{3000}world"),
            "hello world"
        );
    }

    #[test]
    fn identity_when_nothing_matches() {
        let transliterator = make_transliterator(vec![TransliteratorConfig::Radicals]).unwrap();
        let input = "nothing to do here 漢字 123";
        assert_eq!(transliterator.transliterate(input), input);
    }

    #[test]
    fn circled_or_squared_recipe() {
        let recipe = TransliterationRecipe {
            replace_circled_or_squared_characters: CircledOrSquaredRecipeOption::Enabled,
            ..TransliterationRecipe::default()
        };
        let transliterator = make_transliterator_from_recipe(&recipe).unwrap();
        assert_eq!(transliterator.transliterate("①②③"), "(1)(2)(3)");
        assert_eq!(transliterator.transliterate("🆘"), "[SOS]");

        let recipe = TransliterationRecipe {
            replace_circled_or_squared_characters: CircledOrSquaredRecipeOption::ExcludeEmojis,
            ..TransliterationRecipe::default()
        };
        let transliterator = make_transliterator_from_recipe(&recipe).unwrap();
        assert_eq!(transliterator.transliterate("①"), "(1)");
        assert_eq!(transliterator.transliterate("Ⓐ"), "(A)");
        assert_eq!(transliterator.transliterate("🅰"), "[A]");
        assert_eq!(transliterator.transliterate("🆘"), "🆘");
    }

    #[test]
    fn iteration_marks_recipe() {
        let recipe = TransliterationRecipe {
            replace_japanese_iteration_marks: true,
            ..TransliterationRecipe::default()
        };
        let transliterator = make_transliterator_from_recipe(&recipe).unwrap();
        assert_eq!(transliterator.transliterate("時々"), "時時");
        assert_eq!(transliterator.transliterate("いすゞ"), "いすず");
        assert_eq!(transliterator.transliterate("ん々"), "ん々");
    }

    #[test]
    fn prolonged_sound_marks_recipe() {
        let recipe = TransliterationRecipe {
            replace_suspicious_hyphens_to_prolonged_sound_marks: true,
            ..TransliterationRecipe::default()
        };
        let transliterator = make_transliterator_from_recipe(&recipe).unwrap();
        assert_eq!(
            transliterator.transliterate("1\u{30fc}\u{ff0d}2\u{30fc}3"),
            "1\u{002d}\u{002d}2\u{002d}3"
        );
        assert_eq!(transliterator.transliterate("スーパ\u{2212}"), "スーパー");
    }

    #[test]
    fn hyphens_recipe() {
        let recipe = TransliterationRecipe {
            replace_hyphens: ReplaceHyphensOption::Enabled,
            ..TransliterationRecipe::default()
        };
        let transliterator = make_transliterator_from_recipe(&recipe).unwrap();
        assert_eq!(transliterator.transliterate("\u{2014}"), "\u{2015}");

        let transliterator = make_transliterator(vec![TransliteratorConfig::Hyphens(
            HyphensOptions {
                precedence: vec![HyphensPrecedence::Ascii],
            },
        )])
        .unwrap();
        assert_eq!(transliterator.transliterate("\u{2014}"), "-");
    }

    #[test]
    fn kanji_old_new_recipe() {
        let recipe = TransliterationRecipe {
            kanji_old_new: true,
            ..TransliterationRecipe::default()
        };
        let transliterator = make_transliterator_from_recipe(&recipe).unwrap();
        assert_eq!(transliterator.transliterate("舊字體の變換"), "旧字体の変換");
        assert_eq!(transliterator.transliterate("檜舞台"), "桧舞台");
    }

    #[test]
    fn remove_ivs_svs_recipe() {
        let recipe = TransliterationRecipe {
            remove_ivs_svs: crate::recipes::RemoveIvsSvsOption::Enabled,
            ..TransliterationRecipe::default()
        };
        let transliterator = make_transliterator_from_recipe(&recipe).unwrap();
        assert_eq!(
            transliterator.transliterate("葛\u{e0100}飾区"),
            "葛飾区"
        );

        let recipe = TransliterationRecipe {
            remove_ivs_svs: crate::recipes::RemoveIvsSvsOption::DropAllSelectors,
            ..TransliterationRecipe::default()
        };
        let transliterator = make_transliterator_from_recipe(&recipe).unwrap();
        assert_eq!(
            transliterator.transliterate("辻\u{e0101}堂a\u{fe0e}"),
            "辻堂a"
        );
    }

    #[test]
    fn hira_kata_recipe() {
        let recipe = TransliterationRecipe {
            hira_kata: Some(HiraKataMode::HiraToKata),
            ..TransliterationRecipe::default()
        };
        let transliterator = make_transliterator_from_recipe(&recipe).unwrap();
        assert_eq!(transliterator.transliterate("ひらがな"), "ヒラガナ");
    }

    #[test]
    fn to_fullwidth_then_kata_to_hira() {
        let recipe = TransliterationRecipe {
            to_fullwidth: ToFullwidthOption::Enabled,
            hira_kata: Some(HiraKataMode::KataToHira),
            ..TransliterationRecipe::default()
        };
        let transliterator = make_transliterator_from_recipe(&recipe).unwrap();
        assert_eq!(transliterator.transliterate("ｶﾀｶﾅ"), "かたかな");
    }

    #[test]
    fn to_halfwidth_recipe() {
        let recipe = TransliterationRecipe {
            to_halfwidth: ToHalfwidthOption::Enabled,
            ..TransliterationRecipe::default()
        };
        let transliterator = make_transliterator_from_recipe(&recipe).unwrap();
        assert_eq!(transliterator.transliterate("ＡＢＣ１２３"), "ABC123");
        assert_eq!(transliterator.transliterate("カタカナ"), "カタカナ");

        let recipe = TransliterationRecipe {
            to_halfwidth: ToHalfwidthOption::HankakuKana,
            ..TransliterationRecipe::default()
        };
        let transliterator = make_transliterator_from_recipe(&recipe).unwrap();
        assert_eq!(transliterator.transliterate("カタカナ"), "ｶﾀｶﾅ");
    }

    #[test]
    fn functional_mixed_recipe() {
        let recipe = TransliterationRecipe {
            replace_circled_or_squared_characters: CircledOrSquaredRecipeOption::Enabled,
            replace_combined_characters: true,
            replace_spaces: true,
            replace_mathematical_alphanumerics: true,
            replace_roman_numerals: true,
            ..TransliterationRecipe::default()
        };
        let transliterator = make_transliterator_from_recipe(&recipe).unwrap();
        let cases = [
            ("①", "(1)"),
            ("⑴", "(1)"),
            ("𝐇𝐞𝐥𝐥𝐨", "Hello"),
            ("\u{3000}", " "),
            ("Ⅲ", "III"),
            ("ⅸ", "ix"),
        ];
        for (input, expected) in &cases {
            assert_eq!(transliterator.transliterate(input), *expected);
        }
    }

    #[test]
    fn full_recipe_end_to_end() {
        let recipe = TransliterationRecipe {
            kanji_old_new: true,
            replace_spaces: true,
            replace_circled_or_squared_characters: CircledOrSquaredRecipeOption::Enabled,
            replace_combined_characters: true,
            replace_japanese_iteration_marks: true,
            to_fullwidth: ToFullwidthOption::Enabled,
            ..TransliterationRecipe::default()
        };
        let transliterator = make_transliterator_from_recipe(&recipe).unwrap();
        assert_eq!(
            transliterator.transliterate("①②③\u{3000}ⒶⒷⒸ\u{3000}㍿㍑㌠㋿"),
            "（１）（２）（３）\u{3000}（Ａ）（Ｂ）（Ｃ）\u{3000}株式会社リットルサンチーム令和"
        );
    }

    #[test]
    fn output_is_deterministic() {
        let recipe = TransliterationRecipe {
            replace_spaces: true,
            replace_radicals: true,
            ..TransliterationRecipe::default()
        };
        let transliterator = make_transliterator_from_recipe(&recipe).unwrap();
        let input = "⼀\u{3000}⼆ repeated";
        let first = transliterator.transliterate(input);
        let second = transliterator.transliterate(input);
        assert_eq!(first, second);
        assert_eq!(first, "一 二 repeated");
    }
}
