// Generated by mojinorm_codegen from hyphens.json. Do not edit by hand.

use super::hyphens::HyphensRecord;

pub(crate) const HYPHENS_MAPPINGS: &[(char, HyphensRecord)] = &[
    ('-', HyphensRecord { ascii: Some("-"), jisx0201: Some("-"), jisx0208_90: Some("\u{2212}"), jisx0208_90_windows: Some("\u{2212}"), jisx0208_verbatim: None }),
    ('|', HyphensRecord { ascii: Some("|"), jisx0201: Some("|"), jisx0208_90: Some("｜"), jisx0208_90_windows: Some("｜"), jisx0208_verbatim: None }),
    ('~', HyphensRecord { ascii: Some("~"), jisx0201: Some("~"), jisx0208_90: Some("〜"), jisx0208_90_windows: Some("～"), jisx0208_verbatim: None }),
    ('\u{00a2}', HyphensRecord { ascii: None, jisx0201: None, jisx0208_90: Some("\u{00a2}"), jisx0208_90_windows: Some("￠"), jisx0208_verbatim: Some("\u{00a2}") }),
    ('\u{00a3}', HyphensRecord { ascii: None, jisx0201: None, jisx0208_90: Some("\u{00a3}"), jisx0208_90_windows: Some("￡"), jisx0208_verbatim: Some("\u{00a3}") }),
    ('\u{00a6}', HyphensRecord { ascii: Some("|"), jisx0201: Some("|"), jisx0208_90: Some("｜"), jisx0208_90_windows: Some("｜"), jisx0208_verbatim: Some("\u{00a6}") }),
    ('\u{02d7}', HyphensRecord { ascii: Some("-"), jisx0201: Some("-"), jisx0208_90: Some("\u{2212}"), jisx0208_90_windows: Some("－"), jisx0208_verbatim: None }),
    ('\u{2010}', HyphensRecord { ascii: Some("-"), jisx0201: Some("-"), jisx0208_90: Some("\u{2010}"), jisx0208_90_windows: Some("\u{2010}"), jisx0208_verbatim: Some("\u{2010}") }),
    ('\u{2011}', HyphensRecord { ascii: Some("-"), jisx0201: Some("-"), jisx0208_90: Some("\u{2010}"), jisx0208_90_windows: Some("\u{2010}"), jisx0208_verbatim: None }),
    ('\u{2012}', HyphensRecord { ascii: Some("-"), jisx0201: Some("-"), jisx0208_90: Some("\u{2015}"), jisx0208_90_windows: Some("\u{2015}"), jisx0208_verbatim: None }),
    ('\u{2013}', HyphensRecord { ascii: Some("-"), jisx0201: Some("-"), jisx0208_90: Some("\u{2015}"), jisx0208_90_windows: Some("\u{2015}"), jisx0208_verbatim: Some("\u{2013}") }),
    ('\u{2014}', HyphensRecord { ascii: Some("-"), jisx0201: Some("-"), jisx0208_90: Some("\u{2014}"), jisx0208_90_windows: Some("\u{2015}"), jisx0208_verbatim: Some("\u{2014}") }),
    ('\u{2015}', HyphensRecord { ascii: Some("-"), jisx0201: Some("-"), jisx0208_90: Some("\u{2015}"), jisx0208_90_windows: Some("\u{2015}"), jisx0208_verbatim: Some("\u{2015}") }),
    ('\u{2016}', HyphensRecord { ascii: None, jisx0201: None, jisx0208_90: Some("\u{2016}"), jisx0208_90_windows: Some("\u{2225}"), jisx0208_verbatim: Some("\u{2016}") }),
    ('\u{2032}', HyphensRecord { ascii: Some("'"), jisx0201: Some("'"), jisx0208_90: Some("\u{2032}"), jisx0208_90_windows: Some("\u{2032}"), jisx0208_verbatim: Some("\u{2032}") }),
    ('\u{2033}', HyphensRecord { ascii: Some("\u{0022}"), jisx0201: Some("\u{0022}"), jisx0208_90: Some("\u{2033}"), jisx0208_90_windows: Some("\u{2033}"), jisx0208_verbatim: Some("\u{2033}") }),
    ('\u{203e}', HyphensRecord { ascii: None, jisx0201: Some("~"), jisx0208_90: Some("￣"), jisx0208_90_windows: Some("￣"), jisx0208_verbatim: Some("\u{203d}") }),
    ('\u{2043}', HyphensRecord { ascii: Some("-"), jisx0201: Some("-"), jisx0208_90: Some("\u{2010}"), jisx0208_90_windows: Some("\u{2010}"), jisx0208_verbatim: None }),
    ('\u{2053}', HyphensRecord { ascii: Some("~"), jisx0201: Some("~"), jisx0208_90: Some("〜"), jisx0208_90_windows: Some("〜"), jisx0208_verbatim: None }),
    ('\u{2212}', HyphensRecord { ascii: Some("-"), jisx0201: Some("-"), jisx0208_90: Some("\u{2212}"), jisx0208_90_windows: Some("－"), jisx0208_verbatim: Some("\u{2212}") }),
    ('\u{2225}', HyphensRecord { ascii: None, jisx0201: None, jisx0208_90: Some("\u{2016}"), jisx0208_90_windows: Some("\u{2225}"), jisx0208_verbatim: Some("\u{2225}") }),
    ('\u{223c}', HyphensRecord { ascii: Some("~"), jisx0201: Some("~"), jisx0208_90: Some("〜"), jisx0208_90_windows: Some("～"), jisx0208_verbatim: None }),
    ('\u{223d}', HyphensRecord { ascii: Some("~"), jisx0201: Some("~"), jisx0208_90: Some("〜"), jisx0208_90_windows: Some("～"), jisx0208_verbatim: None }),
    ('\u{2500}', HyphensRecord { ascii: Some("-"), jisx0201: Some("-"), jisx0208_90: Some("\u{2015}"), jisx0208_90_windows: Some("\u{2015}"), jisx0208_verbatim: Some("\u{2500}") }),
    ('\u{2501}', HyphensRecord { ascii: Some("-"), jisx0201: Some("-"), jisx0208_90: Some("\u{2015}"), jisx0208_90_windows: Some("\u{2015}"), jisx0208_verbatim: Some("\u{2501}") }),
    ('\u{2502}', HyphensRecord { ascii: Some("|"), jisx0201: Some("|"), jisx0208_90: Some("｜"), jisx0208_90_windows: Some("｜"), jisx0208_verbatim: Some("\u{2502}") }),
    ('\u{2796}', HyphensRecord { ascii: Some("-"), jisx0201: Some("-"), jisx0208_90: Some("\u{2212}"), jisx0208_90_windows: Some("－"), jisx0208_verbatim: None }),
    ('\u{29ff}', HyphensRecord { ascii: Some("-"), jisx0201: Some("-"), jisx0208_90: Some("\u{2010}"), jisx0208_90_windows: Some("－"), jisx0208_verbatim: None }),
    ('\u{2e3a}', HyphensRecord { ascii: Some("--"), jisx0201: Some("--"), jisx0208_90: Some("\u{2014}\u{2014}"), jisx0208_90_windows: Some("\u{2015}\u{2015}"), jisx0208_verbatim: None }),
    ('\u{2e3b}', HyphensRecord { ascii: Some("---"), jisx0201: Some("---"), jisx0208_90: Some("\u{2014}\u{2014}\u{2014}"), jisx0208_90_windows: Some("\u{2015}\u{2015}\u{2015}"), jisx0208_verbatim: None }),
    ('\u{301c}', HyphensRecord { ascii: Some("~"), jisx0201: Some("~"), jisx0208_90: Some("〜"), jisx0208_90_windows: Some("～"), jisx0208_verbatim: Some("〜") }),
    ('\u{30a0}', HyphensRecord { ascii: Some("="), jisx0201: Some("="), jisx0208_90: Some("＝"), jisx0208_90_windows: Some("＝"), jisx0208_verbatim: Some("゠") }),
    ('\u{30fb}', HyphensRecord { ascii: None, jisx0201: Some("･"), jisx0208_90: Some("・"), jisx0208_90_windows: Some("・"), jisx0208_verbatim: Some("・") }),
    ('\u{30fc}', HyphensRecord { ascii: Some("-"), jisx0201: Some("-"), jisx0208_90: Some("ー"), jisx0208_90_windows: Some("ー"), jisx0208_verbatim: Some("ー") }),
    ('\u{fe31}', HyphensRecord { ascii: Some("|"), jisx0201: Some("|"), jisx0208_90: Some("｜"), jisx0208_90_windows: Some("｜"), jisx0208_verbatim: None }),
    ('\u{fe58}', HyphensRecord { ascii: Some("-"), jisx0201: Some("-"), jisx0208_90: Some("\u{2010}"), jisx0208_90_windows: Some("\u{2010}"), jisx0208_verbatim: None }),
    ('\u{fe63}', HyphensRecord { ascii: Some("-"), jisx0201: Some("-"), jisx0208_90: Some("\u{2010}"), jisx0208_90_windows: Some("\u{2010}"), jisx0208_verbatim: None }),
    ('\u{ff0d}', HyphensRecord { ascii: Some("-"), jisx0201: Some("-"), jisx0208_90: Some("\u{2212}"), jisx0208_90_windows: Some("－"), jisx0208_verbatim: None }),
    ('\u{ff5c}', HyphensRecord { ascii: Some("|"), jisx0201: Some("|"), jisx0208_90: Some("｜"), jisx0208_90_windows: Some("｜"), jisx0208_verbatim: Some("｜") }),
    ('\u{ff5e}', HyphensRecord { ascii: Some("~"), jisx0201: Some("~"), jisx0208_90: Some("〜"), jisx0208_90_windows: Some("～"), jisx0208_verbatim: None }),
    ('\u{ffe4}', HyphensRecord { ascii: Some("|"), jisx0201: Some("|"), jisx0208_90: Some("｜"), jisx0208_90_windows: Some("￤"), jisx0208_verbatim: Some("￤") }),
    ('\u{ff70}', HyphensRecord { ascii: Some("-"), jisx0201: Some("ｰ"), jisx0208_90: Some("ー"), jisx0208_90_windows: Some("ー"), jisx0208_verbatim: None }),
    ('\u{ffe8}', HyphensRecord { ascii: Some("|"), jisx0201: Some("|"), jisx0208_90: Some("｜"), jisx0208_90_windows: Some("｜"), jisx0208_verbatim: None }),
];
