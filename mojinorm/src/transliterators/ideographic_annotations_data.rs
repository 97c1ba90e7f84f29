// Generated by mojinorm_codegen from ideographic-annotation-marks.json. Do not edit by hand.

pub(crate) const IDEOGRAPHIC_ANNOTATIONS_MAPPINGS: &[(char, &str)] = &[
    ('\u{3192}', "\u{4e00}"),
    ('\u{3193}', "\u{4e8c}"),
    ('\u{3194}', "\u{4e09}"),
    ('\u{3195}', "\u{56db}"),
    ('\u{3196}', "\u{4e0a}"),
    ('\u{3197}', "\u{4e2d}"),
    ('\u{3198}', "\u{4e0b}"),
    ('\u{3199}', "\u{7532}"),
    ('\u{319a}', "\u{4e59}"),
    ('\u{319b}', "\u{4e19}"),
    ('\u{319c}', "\u{4e01}"),
    ('\u{319d}', "\u{5929}"),
    ('\u{319e}', "\u{5730}"),
    ('\u{319f}', "\u{4eba}"),
];
