//! Transliterator stage implementations and their configuration surface.

pub mod circled_or_squared;
mod circled_or_squared_data;
pub mod combined;
mod combined_data;
pub mod hira_kata;
pub mod hira_kata_composition;
pub mod hira_kata_table;
pub mod hyphens;
mod hyphens_data;
pub mod ideographic_annotations;
mod ideographic_annotations_data;
pub mod ivs_svs_base;
mod ivs_svs_base_data;
pub mod japanese_iteration_marks;
pub mod jisx0201_and_alike;
pub mod kanji_old_new;
mod kanji_old_new_data;
pub mod mathematical_alphanumerics;
mod mathematical_alphanumerics_data;
pub mod prolonged_sound_marks;
pub mod radicals;
mod radicals_data;
pub mod roman_numerals;
mod roman_numerals_data;
pub mod spaces;
mod spaces_data;

use serde::{Deserialize, Serialize};

use crate::intrinsics::{ConfigError, Transliterate};

pub use circled_or_squared::{CircledOrSquaredOptions, Templates};
pub use hira_kata::{HiraKataMode, HiraKataOptions};
pub use hira_kata_composition::HiraKataCompositionOptions;
pub use hyphens::{HyphensOptions, HyphensPrecedence};
pub use ivs_svs_base::{IvsSvsBaseOptions, IvsSvsMode};
pub use japanese_iteration_marks::JapaneseIterationMarksOptions;
pub use jisx0201_and_alike::Jisx0201AndAlikeOptions;
pub use prolonged_sound_marks::ProlongedSoundMarksOptions;

/// A stage identifier together with its typed options. Serializes with the
/// kebab-case identifiers of the stage registry, so pipelines can be written
/// down in configuration files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "options", rename_all = "kebab-case")]
pub enum TransliteratorConfig {
    CircledOrSquared(CircledOrSquaredOptions),
    Combined,
    HiraKata(HiraKataOptions),
    HiraKataComposition(HiraKataCompositionOptions),
    Hyphens(HyphensOptions),
    IdeographicAnnotations,
    IvsSvsBase(IvsSvsBaseOptions),
    JapaneseIterationMarks(JapaneseIterationMarksOptions),
    Jisx0201AndAlike(Jisx0201AndAlikeOptions),
    KanjiOldNew,
    MathematicalAlphanumerics,
    ProlongedSoundMarks(ProlongedSoundMarksOptions),
    Radicals,
    RomanNumerals,
    Spaces,
}

impl TransliteratorConfig {
    /// The stage identifier, as used in configuration files and the recipe
    /// compiler's dedup rules.
    pub fn identifier(&self) -> &'static str {
        match self {
            TransliteratorConfig::CircledOrSquared(_) => "circled-or-squared",
            TransliteratorConfig::Combined => "combined",
            TransliteratorConfig::HiraKata(_) => "hira-kata",
            TransliteratorConfig::HiraKataComposition(_) => "hira-kata-composition",
            TransliteratorConfig::Hyphens(_) => "hyphens",
            TransliteratorConfig::IdeographicAnnotations => "ideographic-annotations",
            TransliteratorConfig::IvsSvsBase(_) => "ivs-svs-base",
            TransliteratorConfig::JapaneseIterationMarks(_) => "japanese-iteration-marks",
            TransliteratorConfig::Jisx0201AndAlike(_) => "jisx0201-and-alike",
            TransliteratorConfig::KanjiOldNew => "kanji-old-new",
            TransliteratorConfig::MathematicalAlphanumerics => "mathematical-alphanumerics",
            TransliteratorConfig::ProlongedSoundMarks(_) => "prolonged-sound-marks",
            TransliteratorConfig::Radicals => "radicals",
            TransliteratorConfig::RomanNumerals => "roman-numerals",
            TransliteratorConfig::Spaces => "spaces",
        }
    }

    /// A configuration with default options for the given identifier.
    pub fn from_identifier(name: &str) -> Result<TransliteratorConfig, ConfigError> {
        Ok(match name {
            "circled-or-squared" => {
                TransliteratorConfig::CircledOrSquared(CircledOrSquaredOptions::default())
            }
            "combined" => TransliteratorConfig::Combined,
            "hira-kata" => TransliteratorConfig::HiraKata(HiraKataOptions::default()),
            "hira-kata-composition" => {
                TransliteratorConfig::HiraKataComposition(HiraKataCompositionOptions::default())
            }
            "hyphens" => TransliteratorConfig::Hyphens(HyphensOptions::default()),
            "ideographic-annotations" => TransliteratorConfig::IdeographicAnnotations,
            "ivs-svs-base" => TransliteratorConfig::IvsSvsBase(IvsSvsBaseOptions::default()),
            "japanese-iteration-marks" => TransliteratorConfig::JapaneseIterationMarks(
                JapaneseIterationMarksOptions::default(),
            ),
            "jisx0201-and-alike" => {
                TransliteratorConfig::Jisx0201AndAlike(Jisx0201AndAlikeOptions::default())
            }
            "kanji-old-new" => TransliteratorConfig::KanjiOldNew,
            "mathematical-alphanumerics" => TransliteratorConfig::MathematicalAlphanumerics,
            "prolonged-sound-marks" => {
                TransliteratorConfig::ProlongedSoundMarks(ProlongedSoundMarksOptions::default())
            }
            "radicals" => TransliteratorConfig::Radicals,
            "roman-numerals" => TransliteratorConfig::RomanNumerals,
            "spaces" => TransliteratorConfig::Spaces,
            _ => return Err(ConfigError::UnknownTransliterator(name.to_owned())),
        })
    }

    pub(crate) fn instantiate(&self) -> Result<Box<dyn Transliterate>, ConfigError> {
        Ok(match self {
            TransliteratorConfig::CircledOrSquared(options) => {
                Box::new(circled_or_squared::CircledOrSquared::new(options.clone()))
            }
            TransliteratorConfig::Combined => Box::new(combined::Combined),
            TransliteratorConfig::HiraKata(options) => {
                Box::new(hira_kata::HiraKata::new(*options))
            }
            TransliteratorConfig::HiraKataComposition(options) => {
                Box::new(hira_kata_composition::HiraKataComposition::new(*options))
            }
            TransliteratorConfig::Hyphens(options) => {
                Box::new(hyphens::Hyphens::new(options.clone()))
            }
            TransliteratorConfig::IdeographicAnnotations => {
                Box::new(ideographic_annotations::IdeographicAnnotations)
            }
            TransliteratorConfig::IvsSvsBase(options) => {
                Box::new(ivs_svs_base::IvsSvsBase::new(*options)?)
            }
            TransliteratorConfig::JapaneseIterationMarks(options) => {
                Box::new(japanese_iteration_marks::JapaneseIterationMarks::new(*options))
            }
            TransliteratorConfig::Jisx0201AndAlike(options) => {
                Box::new(jisx0201_and_alike::Jisx0201AndAlike::new(*options))
            }
            TransliteratorConfig::KanjiOldNew => Box::new(kanji_old_new::KanjiOldNew),
            TransliteratorConfig::MathematicalAlphanumerics => {
                Box::new(mathematical_alphanumerics::MathematicalAlphanumerics)
            }
            TransliteratorConfig::ProlongedSoundMarks(options) => {
                Box::new(prolonged_sound_marks::ProlongedSoundMarks::new(*options))
            }
            TransliteratorConfig::Radicals => Box::new(radicals::Radicals),
            TransliteratorConfig::RomanNumerals => Box::new(roman_numerals::RomanNumerals),
            TransliteratorConfig::Spaces => Box::new(spaces::Spaces),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip() {
        let identifiers = [
            "circled-or-squared",
            "combined",
            "hira-kata",
            "hira-kata-composition",
            "hyphens",
            "ideographic-annotations",
            "ivs-svs-base",
            "japanese-iteration-marks",
            "jisx0201-and-alike",
            "kanji-old-new",
            "mathematical-alphanumerics",
            "prolonged-sound-marks",
            "radicals",
            "roman-numerals",
            "spaces",
        ];
        for name in &identifiers {
            let config = TransliteratorConfig::from_identifier(name).unwrap();
            assert_eq!(config.identifier(), *name);
        }
    }

    #[test]
    fn configs_deserialize_from_json() {
        let config: TransliteratorConfig = serde_json::from_str(
            r#"{"name": "hyphens", "options": {"precedence": ["ascii", "jisx0201"]}}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            TransliteratorConfig::Hyphens(HyphensOptions {
                precedence: vec![HyphensPrecedence::Ascii, HyphensPrecedence::Jisx0201],
            })
        );

        let config: TransliteratorConfig =
            serde_json::from_str(r#"{"name": "spaces"}"#).unwrap();
        assert_eq!(config, TransliteratorConfig::Spaces);
    }
}
