//! Parsers for the upstream JSON datasets. Codepoints are written in the
//! datasets as `U+xxxx` notation.

use std::collections::BTreeMap;

use nom::{
    bytes::complete::tag, character::complete::hex_digit1, combinator::map_res,
    sequence::preceded, IResult,
};
use serde::Deserialize;

use crate::Error;

fn codepoint(input: &str) -> IResult<&str, u32> {
    preceded(
        tag("U+"),
        map_res(hex_digit1, |digits: &str| u32::from_str_radix(digits, 16)),
    )(input)
}

pub fn parse_unicode_codepoint(repr: &str) -> Result<char, Error> {
    let (_rest, value) =
        codepoint(repr).map_err(|_| Error::InvalidCodepoint(repr.to_owned()))?;
    char::from_u32(value).ok_or_else(|| Error::InvalidCodepoint(repr.to_owned()))
}

pub fn parse_unicode_codepoints(reprs: &[String]) -> Result<String, Error> {
    reprs
        .iter()
        .map(|repr| parse_unicode_codepoint(repr))
        .collect()
}

/// `{"U+3000": "U+0020", "U+180E": null, ...}`; null clears the character.
pub fn parse_simple_records(data: &str) -> Result<Vec<(char, String)>, Error> {
    let mapping: BTreeMap<String, Option<String>> = serde_json::from_str(data)?;
    let mut records = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let from = parse_unicode_codepoint(&key)?;
        let to = match value {
            Some(repr) => parse_unicode_codepoint(&repr)?.to_string(),
            None => String::new(),
        };
        records.push((from, to));
    }
    Ok(records)
}

#[derive(Debug, Deserialize)]
pub struct HyphensRecordDef {
    pub code: String,
    #[serde(default)]
    pub ascii: Option<Vec<String>>,
    #[serde(default)]
    pub jisx0201: Option<Vec<String>>,
    #[serde(default, rename = "jisx0208-1978")]
    pub jisx0208_90: Option<Vec<String>>,
    #[serde(default, rename = "jisx0208-1978-windows")]
    pub jisx0208_90_windows: Option<Vec<String>>,
    #[serde(default, rename = "jisx0208-verbatim")]
    pub jisx0208_verbatim: Option<String>,
}

#[derive(Debug)]
pub struct HyphensRecord {
    pub code: char,
    pub ascii: Option<String>,
    pub jisx0201: Option<String>,
    pub jisx0208_90: Option<String>,
    pub jisx0208_90_windows: Option<String>,
    pub jisx0208_verbatim: Option<String>,
}

pub fn parse_hyphens_records(data: &str) -> Result<Vec<HyphensRecord>, Error> {
    let defs: Vec<HyphensRecordDef> = serde_json::from_str(data)?;
    defs.into_iter()
        .map(|def| {
            Ok(HyphensRecord {
                code: parse_unicode_codepoint(&def.code)?,
                ascii: def.ascii.as_deref().map(parse_unicode_codepoints).transpose()?,
                jisx0201: def
                    .jisx0201
                    .as_deref()
                    .map(parse_unicode_codepoints)
                    .transpose()?,
                jisx0208_90: def
                    .jisx0208_90
                    .as_deref()
                    .map(parse_unicode_codepoints)
                    .transpose()?,
                jisx0208_90_windows: def
                    .jisx0208_90_windows
                    .as_deref()
                    .map(parse_unicode_codepoints)
                    .transpose()?,
                jisx0208_verbatim: def
                    .jisx0208_verbatim
                    .as_deref()
                    .map(|repr| parse_unicode_codepoint(repr).map(|c| c.to_string()))
                    .transpose()?,
            })
        })
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct IvsSvsBaseRecordDef {
    pub ivs: Vec<String>,
    #[serde(default)]
    pub svs: Option<Vec<String>>,
    #[serde(default)]
    pub base90: Option<String>,
    #[serde(default)]
    pub base2004: Option<String>,
}

#[derive(Debug)]
pub struct IvsSvsBaseRecord {
    pub ivs: String,
    pub svs: Option<String>,
    pub base90: Option<char>,
    pub base2004: Option<char>,
}

pub fn parse_ivs_svs_base_records(data: &str) -> Result<Vec<IvsSvsBaseRecord>, Error> {
    let defs: Vec<IvsSvsBaseRecordDef> = serde_json::from_str(data)?;
    defs.into_iter()
        .map(|def| {
            Ok(IvsSvsBaseRecord {
                ivs: parse_unicode_codepoints(&def.ivs)?,
                svs: def.svs.as_deref().map(parse_unicode_codepoints).transpose()?,
                base90: def
                    .base90
                    .as_deref()
                    .map(parse_unicode_codepoint)
                    .transpose()?,
                base2004: def
                    .base2004
                    .as_deref()
                    .map(parse_unicode_codepoint)
                    .transpose()?,
            })
        })
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct KanjiOldNewRecordDef {
    pub ivs: Vec<String>,
}

pub fn parse_kanji_old_new_records(data: &str) -> Result<Vec<(String, String)>, Error> {
    let defs: Vec<(KanjiOldNewRecordDef, KanjiOldNewRecordDef)> = serde_json::from_str(data)?;
    defs.into_iter()
        .map(|(old, new)| {
            Ok((
                parse_unicode_codepoints(&old.ivs)?,
                parse_unicode_codepoints(&new.ivs)?,
            ))
        })
        .collect()
}

/// `{"U+3371": "hPa", ...}`; replacements are literal strings.
pub fn parse_combined_records(data: &str) -> Result<Vec<(char, String)>, Error> {
    let mapping: BTreeMap<String, String> = serde_json::from_str(data)?;
    let mut records = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        records.push((parse_unicode_codepoint(&key)?, value));
    }
    Ok(records)
}

#[derive(Debug, Deserialize)]
pub struct CircledOrSquaredRecordDef {
    pub rendering: String,
    #[serde(rename = "type")]
    pub kind: CircledOrSquaredKind,
    pub emoji: bool,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CircledOrSquaredKind {
    Circle,
    Square,
}

pub fn parse_circled_or_squared_records(
    data: &str,
) -> Result<Vec<(char, CircledOrSquaredRecordDef)>, Error> {
    let mapping: BTreeMap<String, CircledOrSquaredRecordDef> = serde_json::from_str(data)?;
    let mut records = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        records.push((parse_unicode_codepoint(&key)?, value));
    }
    Ok(records)
}

#[derive(Debug, Deserialize)]
pub struct RomanNumeralsRecordDef {
    pub value: u32,
    pub codes: RomanNumeralsCodes,
    pub decomposed: RomanNumeralsDecomposed,
}

#[derive(Debug, Deserialize)]
pub struct RomanNumeralsCodes {
    pub upper: String,
    pub lower: String,
}

#[derive(Debug, Deserialize)]
pub struct RomanNumeralsDecomposed {
    pub upper: Vec<String>,
    pub lower: Vec<String>,
}

#[derive(Debug)]
pub struct RomanNumeralsRecord {
    pub value: u32,
    pub upper: char,
    pub lower: char,
    pub decomposed_upper: Vec<char>,
    pub decomposed_lower: Vec<char>,
}

pub fn parse_roman_numerals_records(data: &str) -> Result<Vec<RomanNumeralsRecord>, Error> {
    let defs: Vec<RomanNumeralsRecordDef> = serde_json::from_str(data)?;
    defs.into_iter()
        .map(|def| {
            Ok(RomanNumeralsRecord {
                value: def.value,
                upper: parse_unicode_codepoint(&def.codes.upper)?,
                lower: parse_unicode_codepoint(&def.codes.lower)?,
                decomposed_upper: def
                    .decomposed
                    .upper
                    .iter()
                    .map(|repr| parse_unicode_codepoint(repr))
                    .collect::<Result<_, _>>()?,
                decomposed_lower: def
                    .decomposed
                    .lower
                    .iter()
                    .map(|repr| parse_unicode_codepoint(repr))
                    .collect::<Result<_, _>>()?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codepoint_notation() {
        assert_eq!(parse_unicode_codepoint("U+3000").unwrap(), '\u{3000}');
        assert_eq!(parse_unicode_codepoint("U+e0100").unwrap(), '\u{e0100}');
        assert!(parse_unicode_codepoint("3000").is_err());
        assert!(parse_unicode_codepoint("U+D800").is_err());
    }

    #[test]
    fn simple_records() {
        let records =
            parse_simple_records(r#"{"U+3000": "U+0020", "U+180E": null}"#).unwrap();
        assert_eq!(
            records,
            vec![('\u{180e}', String::new()), ('\u{3000}', " ".to_owned())]
        );
    }

    #[test]
    fn hyphens_records() {
        let records = parse_hyphens_records(
            r#"[{"code": "U+002D", "ascii": ["U+002D"], "jisx0208-1978": ["U+2212"]}]"#,
        )
        .unwrap();
        assert_eq!(records[0].code, '-');
        assert_eq!(records[0].ascii.as_deref(), Some("-"));
        assert_eq!(records[0].jisx0208_90.as_deref(), Some("\u{2212}"));
        assert_eq!(records[0].jisx0201, None);
    }

    #[test]
    fn ivs_svs_records() {
        let records = parse_ivs_svs_base_records(
            r#"[{"ivs": ["U+8FBB", "U+E0101"], "base2004": "U+8FBB"}]"#,
        )
        .unwrap();
        assert_eq!(records[0].ivs, "\u{8fbb}\u{e0101}");
        assert_eq!(records[0].svs, None);
        assert_eq!(records[0].base2004, Some('\u{8fbb}'));
    }

    #[test]
    fn kanji_old_new_records() {
        let records = parse_kanji_old_new_records(
            r#"[[{"ivs": ["U+6A9C", "U+E0100"]}, {"ivs": ["U+6867", "U+E0100"]}]]"#,
        )
        .unwrap();
        assert_eq!(
            records,
            vec![(
                "\u{6a9c}\u{e0100}".to_owned(),
                "\u{6867}\u{e0100}".to_owned()
            )]
        );
    }
}
