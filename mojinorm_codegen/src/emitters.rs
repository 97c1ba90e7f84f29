//! Renderers for the generated `*_data.rs` modules of the core crate.

use std::fmt::Write;

use crate::parsers::{
    CircledOrSquaredKind, CircledOrSquaredRecordDef, HyphensRecord, IvsSvsBaseRecord,
    RomanNumeralsRecord,
};

fn char_literal(c: char) -> String {
    let cp = c as u32;
    if (0x20..0x7F).contains(&cp) && c != '\'' && c != '\\' {
        format!("'{}'", c)
    } else {
        format!("'\\u{{{:04x}}}'", cp)
    }
}

fn str_literal(s: &str) -> String {
    let mut out = String::from("\"");
    for c in s.chars() {
        let cp = c as u32;
        if (0x20..0x7F).contains(&cp) && c != '"' && c != '\\' {
            out.push(c);
        } else if cp >= 0x3000 && !(0xFE00..=0xFE0F).contains(&cp) && !(0xE0100..=0xE01EF).contains(&cp)
        {
            out.push(c);
        } else {
            write!(out, "\\u{{{:04x}}}", cp).unwrap();
        }
    }
    out.push('"');
    out
}

fn opt_str_literal(value: Option<&str>) -> String {
    match value {
        Some(value) => format!("Some({})", str_literal(value)),
        None => "None".to_owned(),
    }
}

fn opt_char_literal(value: Option<char>) -> String {
    match value {
        Some(value) => format!("Some({})", char_literal(value)),
        None => "None".to_owned(),
    }
}

fn header(source: &str) -> String {
    format!(
        "// Generated by mojinorm_codegen from {}. Do not edit by hand.\n\n",
        source
    )
}

/// A `&[(char, &str)]` table for the single-lookup stages.
pub fn render_simple_data(
    source: &str,
    doc: &str,
    constant: &str,
    records: &[(char, String)],
) -> String {
    let mut out = header(source);
    for line in doc.lines() {
        writeln!(out, "/// {}", line).unwrap();
    }
    writeln!(out, "pub(crate) const {}: &[(char, &str)] = &[", constant).unwrap();
    for (from, to) in records {
        writeln!(out, "    ({}, {}),", char_literal(*from), str_literal(to)).unwrap();
    }
    out.push_str("];\n");
    out
}

pub fn render_hyphens_data(records: &[HyphensRecord]) -> String {
    let mut out = header("hyphens.json");
    out.push_str("use super::hyphens::HyphensRecord;\n\n");
    out.push_str("pub(crate) const HYPHENS_MAPPINGS: &[(char, HyphensRecord)] = &[\n");
    for record in records {
        writeln!(
            out,
            "    ({}, HyphensRecord {{ ascii: {}, jisx0201: {}, jisx0208_90: {}, \
             jisx0208_90_windows: {}, jisx0208_verbatim: {} }}),",
            char_literal(record.code),
            opt_str_literal(record.ascii.as_deref()),
            opt_str_literal(record.jisx0201.as_deref()),
            opt_str_literal(record.jisx0208_90.as_deref()),
            opt_str_literal(record.jisx0208_90_windows.as_deref()),
            opt_str_literal(record.jisx0208_verbatim.as_deref()),
        )
        .unwrap();
    }
    out.push_str("];\n");
    out
}

pub fn render_ivs_svs_base_data(records: &[IvsSvsBaseRecord]) -> String {
    let mut out = header("ivs-svs-base-mappings.json");
    out.push_str("use super::ivs_svs_base::IvsSvsBaseRecord;\n\n");
    out.push_str("pub(crate) const IVS_SVS_BASE_RECORDS: &[IvsSvsBaseRecord] = &[\n");
    for record in records {
        writeln!(
            out,
            "    IvsSvsBaseRecord {{ ivs: {}, svs: {}, base90: {}, base2004: {} }},",
            str_literal(&record.ivs),
            opt_str_literal(record.svs.as_deref()),
            opt_char_literal(record.base90),
            opt_char_literal(record.base2004),
        )
        .unwrap();
    }
    out.push_str("];\n");
    out
}

pub fn render_kanji_old_new_data(records: &[(String, String)]) -> String {
    let mut out = header("kanji-old-new-form.json");
    out.push_str("/// Old-form kanji to new-form kanji, keyed on their registered\n");
    out.push_str("/// ideographic variation sequences.\n");
    out.push_str("pub(crate) const KANJI_OLD_NEW_MAPPINGS: &[(&str, &str)] = &[\n");
    for (old, new) in records {
        writeln!(out, "    ({}, {}),", str_literal(old), str_literal(new)).unwrap();
    }
    out.push_str("];\n");
    out
}

pub fn render_circled_or_squared_data(records: &[(char, CircledOrSquaredRecordDef)]) -> String {
    let mut out = header("circled-or-squared.json");
    out.push_str("use super::circled_or_squared::{CircledOrSquaredRecord, Kind};\n\n");
    out.push_str(
        "pub(crate) const CIRCLED_OR_SQUARED_MAPPINGS: &[(char, CircledOrSquaredRecord)] = &[\n",
    );
    for (from, record) in records {
        let kind = match record.kind {
            CircledOrSquaredKind::Circle => "Kind::Circle",
            CircledOrSquaredKind::Square => "Kind::Square",
        };
        writeln!(
            out,
            "    ({}, CircledOrSquaredRecord {{ rendering: {}, kind: {}, emoji: {} }}),",
            char_literal(*from),
            str_literal(&record.rendering),
            kind,
            record.emoji,
        )
        .unwrap();
    }
    out.push_str("];\n");
    out
}

/// Decomposed forms for both cases, one `&str` per output letter.
pub fn render_roman_numerals_data(records: &[RomanNumeralsRecord]) -> String {
    let mut out = header("roman-numerals.json");
    out.push_str("pub(crate) const ROMAN_NUMERAL_MAPPINGS: &[(char, &[&str])] = &[\n");
    for record in records {
        for (numeral, decomposed) in &[
            (record.upper, &record.decomposed_upper),
            (record.lower, &record.decomposed_lower),
        ] {
            let letters = decomposed
                .iter()
                .map(|c| str_literal(&c.to_string()))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                out,
                "    ({}, &[{}]),",
                char_literal(*numeral),
                letters
            )
            .unwrap();
        }
    }
    out.push_str("];\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_table_rendering() {
        let records = vec![('\u{3000}', " ".to_owned()), ('\u{feff}', String::new())];
        let rendered = render_simple_data("spaces.json", "Spaces.", "SPACES_MAPPINGS", &records);
        assert!(rendered.contains("Generated by mojinorm_codegen from spaces.json"));
        assert!(rendered.contains("pub(crate) const SPACES_MAPPINGS: &[(char, &str)] = &["));
        assert!(rendered.contains("('\\u{3000}', \" \"),"));
        assert!(rendered.contains("('\\u{feff}', \"\"),"));
    }

    #[test]
    fn selectors_are_escaped() {
        assert_eq!(str_literal("辻\u{e0101}"), "\"辻\\u{e0101}\"");
        assert_eq!(str_literal("逸\u{fe00}"), "\"逸\\u{fe00}\"");
    }

    #[test]
    fn ascii_stays_readable() {
        assert_eq!(str_literal("hPa"), "\"hPa\"");
        assert_eq!(char_literal('-'), "'-'");
        assert_eq!(char_literal('\u{30fc}'), "'\\u{30fc}'");
    }
}
