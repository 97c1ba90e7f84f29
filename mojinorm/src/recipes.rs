//! Declarative recipe configuration compiled into an ordered stage list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::intrinsics::ConfigError;
use crate::transliterators::{
    CircledOrSquaredOptions, HiraKataCompositionOptions, HiraKataMode, HiraKataOptions,
    HyphensOptions, HyphensPrecedence, IvsSvsBaseOptions, IvsSvsMode,
    JapaneseIterationMarksOptions, Jisx0201AndAlikeOptions, ProlongedSoundMarksOptions,
    TransliteratorConfig,
};

/// Charset assumed during IVS/SVS transliteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Charset {
    #[serde(rename = "unijis_90")]
    Unijis90,
    #[serde(rename = "unijis_2004")]
    Unijis2004,
    #[serde(rename = "adobe_japan1")]
    AdobeJapan1,
}

impl Default for Charset {
    fn default() -> Self {
        Charset::Unijis2004
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Charset::Unijis90 => "unijis_90",
            Charset::Unijis2004 => "unijis_2004",
            Charset::AdobeJapan1 => "adobe_japan1",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CircledOrSquaredRecipeOption {
    Disabled,
    Enabled,
    ExcludeEmojis,
}

impl Default for CircledOrSquaredRecipeOption {
    fn default() -> Self {
        CircledOrSquaredRecipeOption::Disabled
    }
}

impl CircledOrSquaredRecipeOption {
    pub fn is_enabled(self) -> bool {
        self != CircledOrSquaredRecipeOption::Disabled
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplaceHyphensOption {
    Disabled,
    Enabled,
    Precedence(Vec<HyphensPrecedence>),
}

impl Default for ReplaceHyphensOption {
    fn default() -> Self {
        ReplaceHyphensOption::Disabled
    }
}

impl ReplaceHyphensOption {
    pub fn is_enabled(&self) -> bool {
        *self != ReplaceHyphensOption::Disabled
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToFullwidthOption {
    Disabled,
    Enabled,
    U005cAsYenSign,
}

impl Default for ToFullwidthOption {
    fn default() -> Self {
        ToFullwidthOption::Disabled
    }
}

impl ToFullwidthOption {
    pub fn is_enabled(self) -> bool {
        self != ToFullwidthOption::Disabled
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToHalfwidthOption {
    Disabled,
    Enabled,
    HankakuKana,
}

impl Default for ToHalfwidthOption {
    fn default() -> Self {
        ToHalfwidthOption::Disabled
    }
}

impl ToHalfwidthOption {
    pub fn is_enabled(self) -> bool {
        self != ToHalfwidthOption::Disabled
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemoveIvsSvsOption {
    Disabled,
    Enabled,
    DropAllSelectors,
}

impl Default for RemoveIvsSvsOption {
    fn default() -> Self {
        RemoveIvsSvsOption::Disabled
    }
}

impl RemoveIvsSvsOption {
    pub fn is_enabled(self) -> bool {
        self != RemoveIvsSvsOption::Disabled
    }
}

/// Configuration recipe for building transliterator chains. All fields
/// default to disabled.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransliterationRecipe {
    /// Replace old-style kanji glyphs (旧字体) with modern ones (新字体).
    pub kanji_old_new: bool,
    /// Convert between hiragana and katakana scripts.
    pub hira_kata: Option<HiraKataMode>,
    /// Replace iteration marks with the characters they repeat.
    pub replace_japanese_iteration_marks: bool,
    /// Replace "suspicious" hyphens with prolonged sound marks and vice
    /// versa.
    pub replace_suspicious_hyphens_to_prolonged_sound_marks: bool,
    /// Replace combined characters like ㍻ or ㈱ with their parts.
    pub replace_combined_characters: bool,
    /// Replace circled or squared characters like ① or 🅰.
    pub replace_circled_or_squared_characters: CircledOrSquaredRecipeOption,
    /// Replace ideographic annotation marks.
    pub replace_ideographic_annotations: bool,
    /// Replace Kangxi radical codepoints with their ideograph counterparts.
    pub replace_radicals: bool,
    /// Replace various space characters with plain whitespace.
    pub replace_spaces: bool,
    /// Replace dash and hyphen symbols with those common in Japanese
    /// writing.
    pub replace_hyphens: ReplaceHyphensOption,
    /// Replace mathematical styled alphanumerics with plain ASCII.
    pub replace_mathematical_alphanumerics: bool,
    /// Replace roman numeral characters with ASCII letters.
    pub replace_roman_numerals: bool,
    /// Combine decomposed hiragana/katakana with following voice marks.
    pub combine_decomposed_hiraganas_and_katakanas: bool,
    /// Replace halfwidth characters with fullwidth equivalents.
    pub to_fullwidth: ToFullwidthOption,
    /// Replace fullwidth characters with halfwidth equivalents.
    pub to_halfwidth: ToHalfwidthOption,
    /// Collapse IVS/SVS sequences back to plain codepoints.
    pub remove_ivs_svs: RemoveIvsSvsOption,
    /// Charset assumed during IVS/SVS transliteration.
    pub charset: Charset,
}

/// Orders stage configurations into head and tail slots. Middle insertions
/// prepend to the tail, so later-applied middles execute earlier.
#[derive(Default)]
struct ConfigListBuilder {
    head: Vec<TransliteratorConfig>,
    tail: Vec<TransliteratorConfig>,
}

impl ConfigListBuilder {
    fn insert_head(&mut self, config: TransliteratorConfig, force_replace: bool) {
        match position_of(&self.head, &config) {
            Some(i) if force_replace => self.head[i] = config,
            Some(_) => {}
            None => self.head.push(config),
        }
    }

    fn insert_middle(&mut self, config: TransliteratorConfig, force_replace: bool) {
        match position_of(&self.tail, &config) {
            Some(i) if force_replace => self.tail[i] = config,
            Some(_) => {}
            None => self.tail.insert(0, config),
        }
    }

    fn insert_tail(&mut self, config: TransliteratorConfig, force_replace: bool) {
        match position_of(&self.tail, &config) {
            Some(i) if force_replace => self.tail[i] = config,
            Some(_) => {}
            None => self.tail.push(config),
        }
    }

    fn build(self) -> Vec<TransliteratorConfig> {
        let mut configs = self.head;
        configs.extend(self.tail);
        configs
    }
}

fn position_of(configs: &[TransliteratorConfig], config: &TransliteratorConfig) -> Option<usize> {
    configs
        .iter()
        .position(|existing| existing.identifier() == config.identifier())
}

fn insert_remove_ivs_svs(
    ctx: &mut ConfigListBuilder,
    drop_selectors_altogether: bool,
    charset: Charset,
) {
    ctx.insert_head(
        TransliteratorConfig::IvsSvsBase(IvsSvsBaseOptions {
            mode: IvsSvsMode::IvsOrSvs,
            ..IvsSvsBaseOptions::default()
        }),
        true,
    );
    ctx.insert_tail(
        TransliteratorConfig::IvsSvsBase(IvsSvsBaseOptions {
            mode: IvsSvsMode::Base,
            drop_selectors_altogether,
            charset,
            ..IvsSvsBaseOptions::default()
        }),
        true,
    );
}

/// Build the ordered stage list for a recipe.
///
/// The application order below encodes the non-commutative dependencies
/// between stages; it must not be reordered.
pub fn build_transliterator_configs_from_recipe(
    recipe: &TransliterationRecipe,
) -> Result<Vec<TransliteratorConfig>, ConfigError> {
    if recipe.to_fullwidth.is_enabled() && recipe.to_halfwidth.is_enabled() {
        return Err(ConfigError::MutuallyExclusiveOptions);
    }

    let mut ctx = ConfigListBuilder::default();

    if recipe.kanji_old_new {
        insert_remove_ivs_svs(&mut ctx, false, recipe.charset);
        ctx.insert_middle(TransliteratorConfig::KanjiOldNew, false);
    }

    if recipe.replace_suspicious_hyphens_to_prolonged_sound_marks {
        ctx.insert_middle(
            TransliteratorConfig::ProlongedSoundMarks(ProlongedSoundMarksOptions {
                replace_prolonged_marks_following_alnums: true,
                ..ProlongedSoundMarksOptions::default()
            }),
            false,
        );
    }

    if recipe.replace_circled_or_squared_characters.is_enabled() {
        ctx.insert_middle(
            TransliteratorConfig::CircledOrSquared(CircledOrSquaredOptions {
                include_emojis: recipe.replace_circled_or_squared_characters
                    != CircledOrSquaredRecipeOption::ExcludeEmojis,
                ..CircledOrSquaredOptions::default()
            }),
            false,
        );
    }

    if recipe.replace_combined_characters {
        ctx.insert_middle(TransliteratorConfig::Combined, false);
    }

    if recipe.replace_ideographic_annotations {
        ctx.insert_middle(TransliteratorConfig::IdeographicAnnotations, false);
    }

    if recipe.replace_radicals {
        ctx.insert_middle(TransliteratorConfig::Radicals, false);
    }

    if recipe.replace_spaces {
        ctx.insert_middle(TransliteratorConfig::Spaces, false);
    }

    if recipe.replace_hyphens.is_enabled() {
        let precedence = match &recipe.replace_hyphens {
            ReplaceHyphensOption::Precedence(precedence) => precedence.clone(),
            _ => vec![
                HyphensPrecedence::Jisx0208_90Windows,
                HyphensPrecedence::Jisx0201,
            ],
        };
        ctx.insert_middle(
            TransliteratorConfig::Hyphens(HyphensOptions { precedence }),
            false,
        );
    }

    if recipe.replace_mathematical_alphanumerics {
        ctx.insert_middle(TransliteratorConfig::MathematicalAlphanumerics, false);
    }

    if recipe.replace_roman_numerals {
        ctx.insert_middle(TransliteratorConfig::RomanNumerals, false);
    }

    if recipe.combine_decomposed_hiraganas_and_katakanas {
        ctx.insert_middle(
            TransliteratorConfig::HiraKataComposition(HiraKataCompositionOptions {
                compose_non_combining_marks: true,
            }),
            false,
        );
    }

    if recipe.to_fullwidth.is_enabled() {
        ctx.insert_tail(
            TransliteratorConfig::Jisx0201AndAlike(Jisx0201AndAlikeOptions {
                fullwidth_to_halfwidth: false,
                combine_voiced_sound_marks: true,
                u005c_as_yen_sign: Some(recipe.to_fullwidth == ToFullwidthOption::U005cAsYenSign),
                ..Jisx0201AndAlikeOptions::default()
            }),
            false,
        );
    }

    if let Some(mode) = recipe.hira_kata {
        ctx.insert_tail(
            TransliteratorConfig::HiraKata(HiraKataOptions { mode }),
            false,
        );
    }

    if recipe.replace_japanese_iteration_marks {
        // Compose decomposed forms first so marks see composed kana.
        ctx.insert_head(
            TransliteratorConfig::HiraKataComposition(HiraKataCompositionOptions {
                compose_non_combining_marks: true,
            }),
            false,
        );
        ctx.insert_middle(
            TransliteratorConfig::JapaneseIterationMarks(
                JapaneseIterationMarksOptions::default(),
            ),
            false,
        );
    }

    if recipe.to_halfwidth.is_enabled() {
        ctx.insert_tail(
            TransliteratorConfig::Jisx0201AndAlike(Jisx0201AndAlikeOptions {
                fullwidth_to_halfwidth: true,
                convert_gl: true,
                convert_gr: recipe.to_halfwidth == ToHalfwidthOption::HankakuKana,
                ..Jisx0201AndAlikeOptions::default()
            }),
            false,
        );
    }

    if recipe.remove_ivs_svs.is_enabled() {
        insert_remove_ivs_svs(
            &mut ctx,
            recipe.remove_ivs_svs == RemoveIvsSvsOption::DropAllSelectors,
            recipe.charset,
        );
    }

    Ok(ctx.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identifiers(configs: &[TransliteratorConfig]) -> Vec<&'static str> {
        configs.iter().map(|c| c.identifier()).collect()
    }

    #[test]
    fn empty_recipe_builds_no_configs() {
        let configs =
            build_transliterator_configs_from_recipe(&TransliterationRecipe::default()).unwrap();
        assert!(configs.is_empty());
    }

    #[test]
    fn defaults() {
        let recipe = TransliterationRecipe::default();
        assert!(!recipe.kanji_old_new);
        assert_eq!(recipe.hira_kata, None);
        assert_eq!(
            recipe.replace_circled_or_squared_characters,
            CircledOrSquaredRecipeOption::Disabled
        );
        assert_eq!(recipe.replace_hyphens, ReplaceHyphensOption::Disabled);
        assert_eq!(recipe.to_fullwidth, ToFullwidthOption::Disabled);
        assert_eq!(recipe.to_halfwidth, ToHalfwidthOption::Disabled);
        assert_eq!(recipe.remove_ivs_svs, RemoveIvsSvsOption::Disabled);
        assert_eq!(recipe.charset, Charset::Unijis2004);
    }

    #[test]
    fn kanji_old_new_brackets_ivs_svs() {
        let recipe = TransliterationRecipe {
            kanji_old_new: true,
            ..TransliterationRecipe::default()
        };
        let configs = build_transliterator_configs_from_recipe(&recipe).unwrap();
        assert_eq!(
            identifiers(&configs),
            vec!["ivs-svs-base", "kanji-old-new", "ivs-svs-base"]
        );
        match (&configs[0], &configs[2]) {
            (
                TransliteratorConfig::IvsSvsBase(head),
                TransliteratorConfig::IvsSvsBase(tail),
            ) => {
                assert_eq!(head.mode, IvsSvsMode::IvsOrSvs);
                assert_eq!(tail.mode, IvsSvsMode::Base);
                assert!(!tail.drop_selectors_altogether);
            }
            other => panic!("unexpected configs: {:?}", other),
        }
    }

    #[test]
    fn prolonged_sound_marks_config() {
        let recipe = TransliterationRecipe {
            replace_suspicious_hyphens_to_prolonged_sound_marks: true,
            ..TransliterationRecipe::default()
        };
        let configs = build_transliterator_configs_from_recipe(&recipe).unwrap();
        match &configs[0] {
            TransliteratorConfig::ProlongedSoundMarks(options) => {
                assert!(options.replace_prolonged_marks_following_alnums);
            }
            other => panic!("unexpected config: {:?}", other),
        }
    }

    #[test]
    fn circled_or_squared_emoji_flag() {
        let recipe = TransliterationRecipe {
            replace_circled_or_squared_characters: CircledOrSquaredRecipeOption::Enabled,
            ..TransliterationRecipe::default()
        };
        let configs = build_transliterator_configs_from_recipe(&recipe).unwrap();
        match &configs[0] {
            TransliteratorConfig::CircledOrSquared(options) => assert!(options.include_emojis),
            other => panic!("unexpected config: {:?}", other),
        }

        let recipe = TransliterationRecipe {
            replace_circled_or_squared_characters: CircledOrSquaredRecipeOption::ExcludeEmojis,
            ..TransliterationRecipe::default()
        };
        let configs = build_transliterator_configs_from_recipe(&recipe).unwrap();
        match &configs[0] {
            TransliteratorConfig::CircledOrSquared(options) => assert!(!options.include_emojis),
            other => panic!("unexpected config: {:?}", other),
        }
    }

    #[test]
    fn hyphens_default_precedence() {
        let recipe = TransliterationRecipe {
            replace_hyphens: ReplaceHyphensOption::Enabled,
            ..TransliterationRecipe::default()
        };
        let configs = build_transliterator_configs_from_recipe(&recipe).unwrap();
        match &configs[0] {
            TransliteratorConfig::Hyphens(options) => assert_eq!(
                options.precedence,
                vec![
                    HyphensPrecedence::Jisx0208_90Windows,
                    HyphensPrecedence::Jisx0201,
                ]
            ),
            other => panic!("unexpected config: {:?}", other),
        }
    }

    #[test]
    fn hyphens_custom_precedence() {
        let precedence = vec![HyphensPrecedence::Jisx0201, HyphensPrecedence::Ascii];
        let recipe = TransliterationRecipe {
            replace_hyphens: ReplaceHyphensOption::Precedence(precedence.clone()),
            ..TransliterationRecipe::default()
        };
        let configs = build_transliterator_configs_from_recipe(&recipe).unwrap();
        match &configs[0] {
            TransliteratorConfig::Hyphens(options) => {
                assert_eq!(options.precedence, precedence)
            }
            other => panic!("unexpected config: {:?}", other),
        }
    }

    #[test]
    fn to_fullwidth_configs() {
        let recipe = TransliterationRecipe {
            to_fullwidth: ToFullwidthOption::Enabled,
            ..TransliterationRecipe::default()
        };
        let configs = build_transliterator_configs_from_recipe(&recipe).unwrap();
        match &configs[0] {
            TransliteratorConfig::Jisx0201AndAlike(options) => {
                assert!(!options.fullwidth_to_halfwidth);
                assert_eq!(options.u005c_as_yen_sign, Some(false));
            }
            other => panic!("unexpected config: {:?}", other),
        }

        let recipe = TransliterationRecipe {
            to_fullwidth: ToFullwidthOption::U005cAsYenSign,
            ..TransliterationRecipe::default()
        };
        let configs = build_transliterator_configs_from_recipe(&recipe).unwrap();
        match &configs[0] {
            TransliteratorConfig::Jisx0201AndAlike(options) => {
                assert_eq!(options.u005c_as_yen_sign, Some(true));
            }
            other => panic!("unexpected config: {:?}", other),
        }
    }

    #[test]
    fn to_halfwidth_configs() {
        let recipe = TransliterationRecipe {
            to_halfwidth: ToHalfwidthOption::Enabled,
            ..TransliterationRecipe::default()
        };
        let configs = build_transliterator_configs_from_recipe(&recipe).unwrap();
        match &configs[0] {
            TransliteratorConfig::Jisx0201AndAlike(options) => {
                assert!(options.fullwidth_to_halfwidth);
                assert!(options.convert_gl);
                assert!(!options.convert_gr);
            }
            other => panic!("unexpected config: {:?}", other),
        }

        let recipe = TransliterationRecipe {
            to_halfwidth: ToHalfwidthOption::HankakuKana,
            ..TransliterationRecipe::default()
        };
        let configs = build_transliterator_configs_from_recipe(&recipe).unwrap();
        match &configs[0] {
            TransliteratorConfig::Jisx0201AndAlike(options) => assert!(options.convert_gr),
            other => panic!("unexpected config: {:?}", other),
        }
    }

    #[test]
    fn remove_ivs_svs_appears_twice() {
        let recipe = TransliterationRecipe {
            remove_ivs_svs: RemoveIvsSvsOption::Enabled,
            ..TransliterationRecipe::default()
        };
        let configs = build_transliterator_configs_from_recipe(&recipe).unwrap();
        let ivs_configs: Vec<_> = configs
            .iter()
            .filter_map(|c| match c {
                TransliteratorConfig::IvsSvsBase(options) => Some(options),
                _ => None,
            })
            .collect();
        assert_eq!(ivs_configs.len(), 2);
        assert!(ivs_configs.iter().any(|o| o.mode == IvsSvsMode::IvsOrSvs));
        assert!(ivs_configs
            .iter()
            .any(|o| o.mode == IvsSvsMode::Base && !o.drop_selectors_altogether));

        let recipe = TransliterationRecipe {
            remove_ivs_svs: RemoveIvsSvsOption::DropAllSelectors,
            ..TransliterationRecipe::default()
        };
        let configs = build_transliterator_configs_from_recipe(&recipe).unwrap();
        assert!(configs.iter().any(|c| matches!(
            c,
            TransliteratorConfig::IvsSvsBase(options)
                if options.mode == IvsSvsMode::Base && options.drop_selectors_altogether
        )));
    }

    #[test]
    fn charset_flows_into_base_stage() {
        let recipe = TransliterationRecipe {
            kanji_old_new: true,
            charset: Charset::Unijis90,
            ..TransliterationRecipe::default()
        };
        let configs = build_transliterator_configs_from_recipe(&recipe).unwrap();
        assert!(configs.iter().any(|c| matches!(
            c,
            TransliteratorConfig::IvsSvsBase(options)
                if options.mode == IvsSvsMode::Base && options.charset == Charset::Unijis90
        )));
    }

    #[test]
    fn combined_executes_before_circled_or_squared() {
        let recipe = TransliterationRecipe {
            replace_circled_or_squared_characters: CircledOrSquaredRecipeOption::Enabled,
            replace_combined_characters: true,
            ..TransliterationRecipe::default()
        };
        let configs = build_transliterator_configs_from_recipe(&recipe).unwrap();
        let names = identifiers(&configs);
        let combined = names.iter().position(|n| *n == "combined").unwrap();
        let circled = names
            .iter()
            .position(|n| *n == "circled-or-squared")
            .unwrap();
        assert!(combined < circled);
    }

    #[test]
    fn comprehensive_ordering() {
        let recipe = TransliterationRecipe {
            kanji_old_new: true,
            replace_suspicious_hyphens_to_prolonged_sound_marks: true,
            replace_circled_or_squared_characters: CircledOrSquaredRecipeOption::Enabled,
            replace_combined_characters: true,
            replace_spaces: true,
            combine_decomposed_hiraganas_and_katakanas: true,
            to_halfwidth: ToHalfwidthOption::Enabled,
            ..TransliterationRecipe::default()
        };
        let configs = build_transliterator_configs_from_recipe(&recipe).unwrap();
        let names = identifiers(&configs);
        assert!(names.contains(&"hira-kata-composition"));
        assert_eq!(*names.last().unwrap(), "jisx0201-and-alike");
    }

    #[test]
    fn to_fullwidth_comes_before_hira_kata() {
        let recipe = TransliterationRecipe {
            to_fullwidth: ToFullwidthOption::Enabled,
            hira_kata: Some(HiraKataMode::KataToHira),
            ..TransliterationRecipe::default()
        };
        let configs = build_transliterator_configs_from_recipe(&recipe).unwrap();
        assert_eq!(identifiers(&configs), vec!["jisx0201-and-alike", "hira-kata"]);
    }

    #[test]
    fn all_options_enabled() {
        let recipe = TransliterationRecipe {
            kanji_old_new: true,
            replace_suspicious_hyphens_to_prolonged_sound_marks: true,
            replace_combined_characters: true,
            replace_circled_or_squared_characters: CircledOrSquaredRecipeOption::Enabled,
            replace_ideographic_annotations: true,
            replace_radicals: true,
            replace_spaces: true,
            replace_hyphens: ReplaceHyphensOption::Enabled,
            replace_mathematical_alphanumerics: true,
            replace_roman_numerals: true,
            combine_decomposed_hiraganas_and_katakanas: true,
            to_halfwidth: ToHalfwidthOption::HankakuKana,
            remove_ivs_svs: RemoveIvsSvsOption::DropAllSelectors,
            ..TransliterationRecipe::default()
        };
        let configs = build_transliterator_configs_from_recipe(&recipe).unwrap();
        let names = identifiers(&configs);
        for expected in &[
            "ivs-svs-base",
            "kanji-old-new",
            "prolonged-sound-marks",
            "circled-or-squared",
            "combined",
            "ideographic-annotations",
            "radicals",
            "spaces",
            "hyphens",
            "mathematical-alphanumerics",
            "roman-numerals",
            "hira-kata-composition",
            "jisx0201-and-alike",
        ] {
            assert!(names.contains(expected), "missing stage: {}", expected);
        }
        let ivs_count = names.iter().filter(|n| **n == "ivs-svs-base").count();
        assert_eq!(ivs_count, 2);
    }

    #[test]
    fn fullwidth_halfwidth_mutual_exclusion() {
        let recipe = TransliterationRecipe {
            to_fullwidth: ToFullwidthOption::Enabled,
            to_halfwidth: ToHalfwidthOption::Enabled,
            ..TransliterationRecipe::default()
        };
        assert_eq!(
            build_transliterator_configs_from_recipe(&recipe).err(),
            Some(ConfigError::MutuallyExclusiveOptions)
        );
    }

    #[test]
    fn recipe_deserializes_from_json() {
        let recipe: TransliterationRecipe = serde_json::from_str(
            r#"{
                "kanji_old_new": true,
                "replace_spaces": true,
                "to_halfwidth": "hankaku-kana",
                "charset": "unijis_90"
            }"#,
        )
        .unwrap();
        assert!(recipe.kanji_old_new);
        assert!(recipe.replace_spaces);
        assert_eq!(recipe.to_halfwidth, ToHalfwidthOption::HankakuKana);
        assert_eq!(recipe.charset, Charset::Unijis90);
    }
}
