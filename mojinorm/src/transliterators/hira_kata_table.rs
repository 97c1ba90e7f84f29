//! Shared hiragana/katakana/halfwidth-katakana table that the hira-kata,
//! composition, and JIS X 0201 stages derive their lookups from.

use once_cell::sync::Lazy;

/// One kana with its voiced and semi-voiced forms, where they exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KanaForms {
    pub base: char,
    pub voiced: Option<char>,
    pub semi_voiced: Option<char>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiraKataRow {
    pub hiragana: KanaForms,
    pub katakana: KanaForms,
    pub halfwidth: Option<char>,
}

const fn forms(base: char, voiced: Option<char>, semi_voiced: Option<char>) -> KanaForms {
    KanaForms {
        base,
        voiced,
        semi_voiced,
    }
}

const fn row(hiragana: KanaForms, katakana: KanaForms, halfwidth: Option<char>) -> HiraKataRow {
    HiraKataRow {
        hiragana,
        katakana,
        halfwidth,
    }
}

pub const HIRAGANA_KATAKANA_TABLE: &[HiraKataRow] = &[
    // Vowels
    row(forms('あ', None, None), forms('ア', None, None), Some('ｱ')),
    row(forms('い', None, None), forms('イ', None, None), Some('ｲ')),
    row(
        forms('う', Some('ゔ'), None),
        forms('ウ', Some('ヴ'), None),
        Some('ｳ'),
    ),
    row(forms('え', None, None), forms('エ', None, None), Some('ｴ')),
    row(forms('お', None, None), forms('オ', None, None), Some('ｵ')),
    // K-row
    row(
        forms('か', Some('が'), None),
        forms('カ', Some('ガ'), None),
        Some('ｶ'),
    ),
    row(
        forms('き', Some('ぎ'), None),
        forms('キ', Some('ギ'), None),
        Some('ｷ'),
    ),
    row(
        forms('く', Some('ぐ'), None),
        forms('ク', Some('グ'), None),
        Some('ｸ'),
    ),
    row(
        forms('け', Some('げ'), None),
        forms('ケ', Some('ゲ'), None),
        Some('ｹ'),
    ),
    row(
        forms('こ', Some('ご'), None),
        forms('コ', Some('ゴ'), None),
        Some('ｺ'),
    ),
    // S-row
    row(
        forms('さ', Some('ざ'), None),
        forms('サ', Some('ザ'), None),
        Some('ｻ'),
    ),
    row(
        forms('し', Some('じ'), None),
        forms('シ', Some('ジ'), None),
        Some('ｼ'),
    ),
    row(
        forms('す', Some('ず'), None),
        forms('ス', Some('ズ'), None),
        Some('ｽ'),
    ),
    row(
        forms('せ', Some('ぜ'), None),
        forms('セ', Some('ゼ'), None),
        Some('ｾ'),
    ),
    row(
        forms('そ', Some('ぞ'), None),
        forms('ソ', Some('ゾ'), None),
        Some('ｿ'),
    ),
    // T-row
    row(
        forms('た', Some('だ'), None),
        forms('タ', Some('ダ'), None),
        Some('ﾀ'),
    ),
    row(
        forms('ち', Some('ぢ'), None),
        forms('チ', Some('ヂ'), None),
        Some('ﾁ'),
    ),
    row(
        forms('つ', Some('づ'), None),
        forms('ツ', Some('ヅ'), None),
        Some('ﾂ'),
    ),
    row(
        forms('て', Some('で'), None),
        forms('テ', Some('デ'), None),
        Some('ﾃ'),
    ),
    row(
        forms('と', Some('ど'), None),
        forms('ト', Some('ド'), None),
        Some('ﾄ'),
    ),
    // N-row
    row(forms('な', None, None), forms('ナ', None, None), Some('ﾅ')),
    row(forms('に', None, None), forms('ニ', None, None), Some('ﾆ')),
    row(forms('ぬ', None, None), forms('ヌ', None, None), Some('ﾇ')),
    row(forms('ね', None, None), forms('ネ', None, None), Some('ﾈ')),
    row(forms('の', None, None), forms('ノ', None, None), Some('ﾉ')),
    // H-row
    row(
        forms('は', Some('ば'), Some('ぱ')),
        forms('ハ', Some('バ'), Some('パ')),
        Some('ﾊ'),
    ),
    row(
        forms('ひ', Some('び'), Some('ぴ')),
        forms('ヒ', Some('ビ'), Some('ピ')),
        Some('ﾋ'),
    ),
    row(
        forms('ふ', Some('ぶ'), Some('ぷ')),
        forms('フ', Some('ブ'), Some('プ')),
        Some('ﾌ'),
    ),
    row(
        forms('へ', Some('べ'), Some('ぺ')),
        forms('ヘ', Some('ベ'), Some('ペ')),
        Some('ﾍ'),
    ),
    row(
        forms('ほ', Some('ぼ'), Some('ぽ')),
        forms('ホ', Some('ボ'), Some('ポ')),
        Some('ﾎ'),
    ),
    // M-row
    row(forms('ま', None, None), forms('マ', None, None), Some('ﾏ')),
    row(forms('み', None, None), forms('ミ', None, None), Some('ﾐ')),
    row(forms('む', None, None), forms('ム', None, None), Some('ﾑ')),
    row(forms('め', None, None), forms('メ', None, None), Some('ﾒ')),
    row(forms('も', None, None), forms('モ', None, None), Some('ﾓ')),
    // Y-row
    row(forms('や', None, None), forms('ヤ', None, None), Some('ﾔ')),
    row(forms('ゆ', None, None), forms('ユ', None, None), Some('ﾕ')),
    row(forms('よ', None, None), forms('ヨ', None, None), Some('ﾖ')),
    // R-row
    row(forms('ら', None, None), forms('ラ', None, None), Some('ﾗ')),
    row(forms('り', None, None), forms('リ', None, None), Some('ﾘ')),
    row(forms('る', None, None), forms('ル', None, None), Some('ﾙ')),
    row(forms('れ', None, None), forms('レ', None, None), Some('ﾚ')),
    row(forms('ろ', None, None), forms('ロ', None, None), Some('ﾛ')),
    // W-row
    row(
        forms('わ', None, None),
        forms('ワ', Some('ヷ'), None),
        Some('ﾜ'),
    ),
    row(forms('ゐ', None, None), forms('ヰ', Some('ヸ'), None), None),
    row(forms('ゑ', None, None), forms('ヱ', Some('ヹ'), None), None),
    row(
        forms('を', None, None),
        forms('ヲ', Some('ヺ'), None),
        Some('ｦ'),
    ),
    row(forms('ん', None, None), forms('ン', None, None), Some('ﾝ')),
];

/// Small kana: (hiragana, katakana, halfwidth).
pub const HIRAGANA_KATAKANA_SMALL_TABLE: &[(char, char, Option<char>)] = &[
    ('ぁ', 'ァ', Some('ｧ')),
    ('ぃ', 'ィ', Some('ｨ')),
    ('ぅ', 'ゥ', Some('ｩ')),
    ('ぇ', 'ェ', Some('ｪ')),
    ('ぉ', 'ォ', Some('ｫ')),
    ('っ', 'ッ', Some('ｯ')),
    ('ゃ', 'ャ', Some('ｬ')),
    ('ゅ', 'ュ', Some('ｭ')),
    ('ょ', 'ョ', Some('ｮ')),
    ('ゎ', 'ヮ', None),
    ('ゕ', 'ヵ', None),
    ('ゖ', 'ヶ', None),
];

/// Base → voiced pairs over both scripts, plus the voiceable iteration marks.
pub static VOICED_CHARACTERS: Lazy<Vec<(char, char)>> = Lazy::new(|| {
    let mut result = Vec::new();
    for row in HIRAGANA_KATAKANA_TABLE {
        if let Some(voiced) = row.hiragana.voiced {
            result.push((row.hiragana.base, voiced));
        }
        if let Some(voiced) = row.katakana.voiced {
            result.push((row.katakana.base, voiced));
        }
    }
    result.extend_from_slice(&[
        ('ゝ', 'ゞ'),
        ('ヽ', 'ヾ'),
        ('〱', '〲'),
        ('〳', '〴'),
    ]);
    result
});

/// Base → semi-voiced pairs over both scripts.
pub static SEMI_VOICED_CHARACTERS: Lazy<Vec<(char, char)>> = Lazy::new(|| {
    let mut result = Vec::new();
    for row in HIRAGANA_KATAKANA_TABLE {
        if let Some(semi_voiced) = row.hiragana.semi_voiced {
            result.push((row.hiragana.base, semi_voiced));
        }
        if let Some(semi_voiced) = row.katakana.semi_voiced {
            result.push((row.katakana.base, semi_voiced));
        }
    }
    result
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voiced_pairs_include_w_column_and_iteration_marks() {
        let voiced = &*VOICED_CHARACTERS;
        assert!(voiced.contains(&('か', 'が')));
        assert!(voiced.contains(&('ワ', 'ヷ')));
        assert!(voiced.contains(&('ゝ', 'ゞ')));
        assert!(voiced.contains(&('〳', '〴')));
        assert!(!voiced.iter().any(|(base, _)| *base == 'わ'));
    }

    #[test]
    fn semi_voiced_pairs_cover_h_row_only() {
        let semi_voiced = &*SEMI_VOICED_CHARACTERS;
        assert_eq!(semi_voiced.len(), 10);
        assert!(semi_voiced.contains(&('は', 'ぱ')));
        assert!(semi_voiced.contains(&('ホ', 'ポ')));
    }
}
