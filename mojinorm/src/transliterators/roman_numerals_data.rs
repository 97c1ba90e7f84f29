// Generated by mojinorm_codegen from roman-numerals.json. Do not edit by hand.

pub(crate) const ROMAN_NUMERAL_MAPPINGS: &[(char, &[&str])] = &[
    ('\u{2160}', &["I"]),
    ('\u{2161}', &["I", "I"]),
    ('\u{2162}', &["I", "I", "I"]),
    ('\u{2163}', &["I", "V"]),
    ('\u{2164}', &["V"]),
    ('\u{2165}', &["V", "I"]),
    ('\u{2166}', &["V", "I", "I"]),
    ('\u{2167}', &["V", "I", "I", "I"]),
    ('\u{2168}', &["I", "X"]),
    ('\u{2169}', &["X"]),
    ('\u{216a}', &["X", "I"]),
    ('\u{216b}', &["X", "I", "I"]),
    ('\u{216c}', &["L"]),
    ('\u{216d}', &["C"]),
    ('\u{216e}', &["D"]),
    ('\u{216f}', &["M"]),
    ('\u{2170}', &["i"]),
    ('\u{2171}', &["i", "i"]),
    ('\u{2172}', &["i", "i", "i"]),
    ('\u{2173}', &["i", "v"]),
    ('\u{2174}', &["v"]),
    ('\u{2175}', &["v", "i"]),
    ('\u{2176}', &["v", "i", "i"]),
    ('\u{2177}', &["v", "i", "i", "i"]),
    ('\u{2178}', &["i", "x"]),
    ('\u{2179}', &["x"]),
    ('\u{217a}', &["x", "i"]),
    ('\u{217b}', &["x", "i", "i"]),
    ('\u{217c}', &["l"]),
    ('\u{217d}', &["c"]),
    ('\u{217e}', &["d"]),
    ('\u{217f}', &["m"]),
];
