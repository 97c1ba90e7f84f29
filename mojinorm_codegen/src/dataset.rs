//! Dataset assembly: file names under the data root and their parsed
//! contents.

use std::fs;
use std::path::Path;

use crate::parsers::{
    parse_circled_or_squared_records, parse_combined_records, parse_hyphens_records,
    parse_ivs_svs_base_records, parse_kanji_old_new_records, parse_roman_numerals_records,
    parse_simple_records, CircledOrSquaredRecordDef, HyphensRecord, IvsSvsBaseRecord,
    RomanNumeralsRecord,
};
use crate::Error;

/// File names of the datasets under the data root.
pub struct DatasetSourceDefs {
    pub spaces: &'static str,
    pub radicals: &'static str,
    pub mathematical_alphanumerics: &'static str,
    pub ideographic_annotations: &'static str,
    pub hyphens: &'static str,
    pub ivs_svs_base: &'static str,
    pub kanji_old_new: &'static str,
    pub combined: &'static str,
    pub circled_or_squared: &'static str,
    pub roman_numerals: &'static str,
}

impl Default for DatasetSourceDefs {
    fn default() -> Self {
        DatasetSourceDefs {
            spaces: "spaces.json",
            radicals: "radicals.json",
            mathematical_alphanumerics: "mathematical-alphanumerics.json",
            ideographic_annotations: "ideographic-annotation-marks.json",
            hyphens: "hyphens.json",
            ivs_svs_base: "ivs-svs-base-mappings.json",
            kanji_old_new: "kanji-old-new-form.json",
            combined: "combined-chars.json",
            circled_or_squared: "circled-or-squared.json",
            roman_numerals: "roman-numerals.json",
        }
    }
}

/// Everything the emitters need, parsed and validated.
pub struct Dataset {
    pub spaces: Vec<(char, String)>,
    pub radicals: Vec<(char, String)>,
    pub mathematical_alphanumerics: Vec<(char, String)>,
    pub ideographic_annotations: Vec<(char, String)>,
    pub hyphens: Vec<HyphensRecord>,
    pub ivs_svs_base: Vec<IvsSvsBaseRecord>,
    pub kanji_old_new: Vec<(String, String)>,
    pub combined: Vec<(char, String)>,
    pub circled_or_squared: Vec<(char, CircledOrSquaredRecordDef)>,
    pub roman_numerals: Vec<RomanNumeralsRecord>,
}

fn read(root: &Path, name: &str) -> Result<String, Error> {
    fs::read_to_string(root.join(name)).map_err(|source| Error::Read {
        name: name.to_owned(),
        source,
    })
}

pub fn build_dataset_from_data_root(
    root: &Path,
    defs: &DatasetSourceDefs,
) -> Result<Dataset, Error> {
    Ok(Dataset {
        spaces: parse_simple_records(&read(root, defs.spaces)?)?,
        radicals: parse_simple_records(&read(root, defs.radicals)?)?,
        mathematical_alphanumerics: parse_simple_records(&read(
            root,
            defs.mathematical_alphanumerics,
        )?)?,
        ideographic_annotations: parse_simple_records(&read(
            root,
            defs.ideographic_annotations,
        )?)?,
        hyphens: parse_hyphens_records(&read(root, defs.hyphens)?)?,
        ivs_svs_base: parse_ivs_svs_base_records(&read(root, defs.ivs_svs_base)?)?,
        kanji_old_new: parse_kanji_old_new_records(&read(root, defs.kanji_old_new)?)?,
        combined: parse_combined_records(&read(root, defs.combined)?)?,
        circled_or_squared: parse_circled_or_squared_records(&read(
            root,
            defs.circled_or_squared,
        )?)?,
        roman_numerals: parse_roman_numerals_records(&read(root, defs.roman_numerals)?)?,
    })
}
