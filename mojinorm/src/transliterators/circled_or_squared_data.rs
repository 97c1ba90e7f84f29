// Generated by mojinorm_codegen from circled-or-squared.json. Do not edit by hand.

use super::circled_or_squared::{CircledOrSquaredRecord, Kind};

pub(crate) const CIRCLED_OR_SQUARED_MAPPINGS: &[(char, CircledOrSquaredRecord)] = &[
    ('\u{2460}', CircledOrSquaredRecord { rendering: "1", kind: Kind::Circle, emoji: false }),
    ('\u{2461}', CircledOrSquaredRecord { rendering: "2", kind: Kind::Circle, emoji: false }),
    ('\u{2462}', CircledOrSquaredRecord { rendering: "3", kind: Kind::Circle, emoji: false }),
    ('\u{2463}', CircledOrSquaredRecord { rendering: "4", kind: Kind::Circle, emoji: false }),
    ('\u{2464}', CircledOrSquaredRecord { rendering: "5", kind: Kind::Circle, emoji: false }),
    ('\u{2465}', CircledOrSquaredRecord { rendering: "6", kind: Kind::Circle, emoji: false }),
    ('\u{2466}', CircledOrSquaredRecord { rendering: "7", kind: Kind::Circle, emoji: false }),
    ('\u{2467}', CircledOrSquaredRecord { rendering: "8", kind: Kind::Circle, emoji: false }),
    ('\u{2468}', CircledOrSquaredRecord { rendering: "9", kind: Kind::Circle, emoji: false }),
    ('\u{2469}', CircledOrSquaredRecord { rendering: "10", kind: Kind::Circle, emoji: false }),
    ('\u{246a}', CircledOrSquaredRecord { rendering: "11", kind: Kind::Circle, emoji: false }),
    ('\u{246b}', CircledOrSquaredRecord { rendering: "12", kind: Kind::Circle, emoji: false }),
    ('\u{246c}', CircledOrSquaredRecord { rendering: "13", kind: Kind::Circle, emoji: false }),
    ('\u{246d}', CircledOrSquaredRecord { rendering: "14", kind: Kind::Circle, emoji: false }),
    ('\u{246e}', CircledOrSquaredRecord { rendering: "15", kind: Kind::Circle, emoji: false }),
    ('\u{246f}', CircledOrSquaredRecord { rendering: "16", kind: Kind::Circle, emoji: false }),
    ('\u{2470}', CircledOrSquaredRecord { rendering: "17", kind: Kind::Circle, emoji: false }),
    ('\u{2471}', CircledOrSquaredRecord { rendering: "18", kind: Kind::Circle, emoji: false }),
    ('\u{2472}', CircledOrSquaredRecord { rendering: "19", kind: Kind::Circle, emoji: false }),
    ('\u{2473}', CircledOrSquaredRecord { rendering: "20", kind: Kind::Circle, emoji: false }),
    ('\u{24b6}', CircledOrSquaredRecord { rendering: "A", kind: Kind::Circle, emoji: false }),
    ('\u{24b7}', CircledOrSquaredRecord { rendering: "B", kind: Kind::Circle, emoji: false }),
    ('\u{24b8}', CircledOrSquaredRecord { rendering: "C", kind: Kind::Circle, emoji: false }),
    ('\u{24b9}', CircledOrSquaredRecord { rendering: "D", kind: Kind::Circle, emoji: false }),
    ('\u{24ba}', CircledOrSquaredRecord { rendering: "E", kind: Kind::Circle, emoji: false }),
    ('\u{24bb}', CircledOrSquaredRecord { rendering: "F", kind: Kind::Circle, emoji: false }),
    ('\u{24bc}', CircledOrSquaredRecord { rendering: "G", kind: Kind::Circle, emoji: false }),
    ('\u{24bd}', CircledOrSquaredRecord { rendering: "H", kind: Kind::Circle, emoji: false }),
    ('\u{24be}', CircledOrSquaredRecord { rendering: "I", kind: Kind::Circle, emoji: false }),
    ('\u{24bf}', CircledOrSquaredRecord { rendering: "J", kind: Kind::Circle, emoji: false }),
    ('\u{24c0}', CircledOrSquaredRecord { rendering: "K", kind: Kind::Circle, emoji: false }),
    ('\u{24c1}', CircledOrSquaredRecord { rendering: "L", kind: Kind::Circle, emoji: false }),
    ('\u{24c2}', CircledOrSquaredRecord { rendering: "M", kind: Kind::Circle, emoji: false }),
    ('\u{24c3}', CircledOrSquaredRecord { rendering: "N", kind: Kind::Circle, emoji: false }),
    ('\u{24c4}', CircledOrSquaredRecord { rendering: "O", kind: Kind::Circle, emoji: false }),
    ('\u{24c5}', CircledOrSquaredRecord { rendering: "P", kind: Kind::Circle, emoji: false }),
    ('\u{24c6}', CircledOrSquaredRecord { rendering: "Q", kind: Kind::Circle, emoji: false }),
    ('\u{24c7}', CircledOrSquaredRecord { rendering: "R", kind: Kind::Circle, emoji: false }),
    ('\u{24c8}', CircledOrSquaredRecord { rendering: "S", kind: Kind::Circle, emoji: false }),
    ('\u{24c9}', CircledOrSquaredRecord { rendering: "T", kind: Kind::Circle, emoji: false }),
    ('\u{24ca}', CircledOrSquaredRecord { rendering: "U", kind: Kind::Circle, emoji: false }),
    ('\u{24cb}', CircledOrSquaredRecord { rendering: "V", kind: Kind::Circle, emoji: false }),
    ('\u{24cc}', CircledOrSquaredRecord { rendering: "W", kind: Kind::Circle, emoji: false }),
    ('\u{24cd}', CircledOrSquaredRecord { rendering: "X", kind: Kind::Circle, emoji: false }),
    ('\u{24ce}', CircledOrSquaredRecord { rendering: "Y", kind: Kind::Circle, emoji: false }),
    ('\u{24cf}', CircledOrSquaredRecord { rendering: "Z", kind: Kind::Circle, emoji: false }),
    ('\u{24d0}', CircledOrSquaredRecord { rendering: "a", kind: Kind::Circle, emoji: false }),
    ('\u{24d1}', CircledOrSquaredRecord { rendering: "b", kind: Kind::Circle, emoji: false }),
    ('\u{24d2}', CircledOrSquaredRecord { rendering: "c", kind: Kind::Circle, emoji: false }),
    ('\u{24d3}', CircledOrSquaredRecord { rendering: "d", kind: Kind::Circle, emoji: false }),
    ('\u{24d4}', CircledOrSquaredRecord { rendering: "e", kind: Kind::Circle, emoji: false }),
    ('\u{24d5}', CircledOrSquaredRecord { rendering: "f", kind: Kind::Circle, emoji: false }),
    ('\u{24d6}', CircledOrSquaredRecord { rendering: "g", kind: Kind::Circle, emoji: false }),
    ('\u{24d7}', CircledOrSquaredRecord { rendering: "h", kind: Kind::Circle, emoji: false }),
    ('\u{24d8}', CircledOrSquaredRecord { rendering: "i", kind: Kind::Circle, emoji: false }),
    ('\u{24d9}', CircledOrSquaredRecord { rendering: "j", kind: Kind::Circle, emoji: false }),
    ('\u{24da}', CircledOrSquaredRecord { rendering: "k", kind: Kind::Circle, emoji: false }),
    ('\u{24db}', CircledOrSquaredRecord { rendering: "l", kind: Kind::Circle, emoji: false }),
    ('\u{24dc}', CircledOrSquaredRecord { rendering: "m", kind: Kind::Circle, emoji: false }),
    ('\u{24dd}', CircledOrSquaredRecord { rendering: "n", kind: Kind::Circle, emoji: false }),
    ('\u{24de}', CircledOrSquaredRecord { rendering: "o", kind: Kind::Circle, emoji: false }),
    ('\u{24df}', CircledOrSquaredRecord { rendering: "p", kind: Kind::Circle, emoji: false }),
    ('\u{24e0}', CircledOrSquaredRecord { rendering: "q", kind: Kind::Circle, emoji: false }),
    ('\u{24e1}', CircledOrSquaredRecord { rendering: "r", kind: Kind::Circle, emoji: false }),
    ('\u{24e2}', CircledOrSquaredRecord { rendering: "s", kind: Kind::Circle, emoji: false }),
    ('\u{24e3}', CircledOrSquaredRecord { rendering: "t", kind: Kind::Circle, emoji: false }),
    ('\u{24e4}', CircledOrSquaredRecord { rendering: "u", kind: Kind::Circle, emoji: false }),
    ('\u{24e5}', CircledOrSquaredRecord { rendering: "v", kind: Kind::Circle, emoji: false }),
    ('\u{24e6}', CircledOrSquaredRecord { rendering: "w", kind: Kind::Circle, emoji: false }),
    ('\u{24e7}', CircledOrSquaredRecord { rendering: "x", kind: Kind::Circle, emoji: false }),
    ('\u{24e8}', CircledOrSquaredRecord { rendering: "y", kind: Kind::Circle, emoji: false }),
    ('\u{24e9}', CircledOrSquaredRecord { rendering: "z", kind: Kind::Circle, emoji: false }),
    ('\u{24ea}', CircledOrSquaredRecord { rendering: "0", kind: Kind::Circle, emoji: false }),
    ('\u{3244}', CircledOrSquaredRecord { rendering: "問", kind: Kind::Circle, emoji: false }),
    ('\u{3245}', CircledOrSquaredRecord { rendering: "幼", kind: Kind::Circle, emoji: false }),
    ('\u{3246}', CircledOrSquaredRecord { rendering: "文", kind: Kind::Circle, emoji: false }),
    ('\u{3247}', CircledOrSquaredRecord { rendering: "箏", kind: Kind::Circle, emoji: false }),
    ('\u{3251}', CircledOrSquaredRecord { rendering: "21", kind: Kind::Circle, emoji: false }),
    ('\u{3252}', CircledOrSquaredRecord { rendering: "22", kind: Kind::Circle, emoji: false }),
    ('\u{3253}', CircledOrSquaredRecord { rendering: "23", kind: Kind::Circle, emoji: false }),
    ('\u{3254}', CircledOrSquaredRecord { rendering: "24", kind: Kind::Circle, emoji: false }),
    ('\u{3255}', CircledOrSquaredRecord { rendering: "25", kind: Kind::Circle, emoji: false }),
    ('\u{3256}', CircledOrSquaredRecord { rendering: "26", kind: Kind::Circle, emoji: false }),
    ('\u{3257}', CircledOrSquaredRecord { rendering: "27", kind: Kind::Circle, emoji: false }),
    ('\u{3258}', CircledOrSquaredRecord { rendering: "28", kind: Kind::Circle, emoji: false }),
    ('\u{3259}', CircledOrSquaredRecord { rendering: "29", kind: Kind::Circle, emoji: false }),
    ('\u{325a}', CircledOrSquaredRecord { rendering: "30", kind: Kind::Circle, emoji: false }),
    ('\u{325b}', CircledOrSquaredRecord { rendering: "31", kind: Kind::Circle, emoji: false }),
    ('\u{325c}', CircledOrSquaredRecord { rendering: "32", kind: Kind::Circle, emoji: false }),
    ('\u{325d}', CircledOrSquaredRecord { rendering: "33", kind: Kind::Circle, emoji: false }),
    ('\u{325e}', CircledOrSquaredRecord { rendering: "34", kind: Kind::Circle, emoji: false }),
    ('\u{325f}', CircledOrSquaredRecord { rendering: "35", kind: Kind::Circle, emoji: false }),
    ('\u{3280}', CircledOrSquaredRecord { rendering: "一", kind: Kind::Circle, emoji: false }),
    ('\u{3281}', CircledOrSquaredRecord { rendering: "二", kind: Kind::Circle, emoji: false }),
    ('\u{3282}', CircledOrSquaredRecord { rendering: "三", kind: Kind::Circle, emoji: false }),
    ('\u{3283}', CircledOrSquaredRecord { rendering: "四", kind: Kind::Circle, emoji: false }),
    ('\u{3284}', CircledOrSquaredRecord { rendering: "五", kind: Kind::Circle, emoji: false }),
    ('\u{3285}', CircledOrSquaredRecord { rendering: "六", kind: Kind::Circle, emoji: false }),
    ('\u{3286}', CircledOrSquaredRecord { rendering: "七", kind: Kind::Circle, emoji: false }),
    ('\u{3287}', CircledOrSquaredRecord { rendering: "八", kind: Kind::Circle, emoji: false }),
    ('\u{3288}', CircledOrSquaredRecord { rendering: "九", kind: Kind::Circle, emoji: false }),
    ('\u{3289}', CircledOrSquaredRecord { rendering: "十", kind: Kind::Circle, emoji: false }),
    ('\u{328a}', CircledOrSquaredRecord { rendering: "月", kind: Kind::Circle, emoji: false }),
    ('\u{328b}', CircledOrSquaredRecord { rendering: "火", kind: Kind::Circle, emoji: false }),
    ('\u{328c}', CircledOrSquaredRecord { rendering: "水", kind: Kind::Circle, emoji: false }),
    ('\u{328d}', CircledOrSquaredRecord { rendering: "木", kind: Kind::Circle, emoji: false }),
    ('\u{328e}', CircledOrSquaredRecord { rendering: "金", kind: Kind::Circle, emoji: false }),
    ('\u{328f}', CircledOrSquaredRecord { rendering: "土", kind: Kind::Circle, emoji: false }),
    ('\u{3290}', CircledOrSquaredRecord { rendering: "日", kind: Kind::Circle, emoji: false }),
    ('\u{3291}', CircledOrSquaredRecord { rendering: "株", kind: Kind::Circle, emoji: false }),
    ('\u{3292}', CircledOrSquaredRecord { rendering: "有", kind: Kind::Circle, emoji: false }),
    ('\u{3293}', CircledOrSquaredRecord { rendering: "社", kind: Kind::Circle, emoji: false }),
    ('\u{3294}', CircledOrSquaredRecord { rendering: "名", kind: Kind::Circle, emoji: false }),
    ('\u{3295}', CircledOrSquaredRecord { rendering: "特", kind: Kind::Circle, emoji: false }),
    ('\u{3296}', CircledOrSquaredRecord { rendering: "財", kind: Kind::Circle, emoji: false }),
    ('\u{3297}', CircledOrSquaredRecord { rendering: "祝", kind: Kind::Circle, emoji: false }),
    ('\u{3298}', CircledOrSquaredRecord { rendering: "労", kind: Kind::Circle, emoji: false }),
    ('\u{3299}', CircledOrSquaredRecord { rendering: "秘", kind: Kind::Circle, emoji: false }),
    ('\u{329a}', CircledOrSquaredRecord { rendering: "男", kind: Kind::Circle, emoji: false }),
    ('\u{329b}', CircledOrSquaredRecord { rendering: "女", kind: Kind::Circle, emoji: false }),
    ('\u{329c}', CircledOrSquaredRecord { rendering: "適", kind: Kind::Circle, emoji: false }),
    ('\u{329d}', CircledOrSquaredRecord { rendering: "優", kind: Kind::Circle, emoji: false }),
    ('\u{329e}', CircledOrSquaredRecord { rendering: "印", kind: Kind::Circle, emoji: false }),
    ('\u{329f}', CircledOrSquaredRecord { rendering: "注", kind: Kind::Circle, emoji: false }),
    ('\u{32a0}', CircledOrSquaredRecord { rendering: "項", kind: Kind::Circle, emoji: false }),
    ('\u{32a1}', CircledOrSquaredRecord { rendering: "休", kind: Kind::Circle, emoji: false }),
    ('\u{32a2}', CircledOrSquaredRecord { rendering: "写", kind: Kind::Circle, emoji: false }),
    ('\u{32a3}', CircledOrSquaredRecord { rendering: "正", kind: Kind::Circle, emoji: false }),
    ('\u{32a4}', CircledOrSquaredRecord { rendering: "上", kind: Kind::Circle, emoji: false }),
    ('\u{32a5}', CircledOrSquaredRecord { rendering: "中", kind: Kind::Circle, emoji: false }),
    ('\u{32a6}', CircledOrSquaredRecord { rendering: "下", kind: Kind::Circle, emoji: false }),
    ('\u{32a7}', CircledOrSquaredRecord { rendering: "左", kind: Kind::Circle, emoji: false }),
    ('\u{32a8}', CircledOrSquaredRecord { rendering: "右", kind: Kind::Circle, emoji: false }),
    ('\u{32a9}', CircledOrSquaredRecord { rendering: "医", kind: Kind::Circle, emoji: false }),
    ('\u{32aa}', CircledOrSquaredRecord { rendering: "宗", kind: Kind::Circle, emoji: false }),
    ('\u{32ab}', CircledOrSquaredRecord { rendering: "学", kind: Kind::Circle, emoji: false }),
    ('\u{32ac}', CircledOrSquaredRecord { rendering: "監", kind: Kind::Circle, emoji: false }),
    ('\u{32ad}', CircledOrSquaredRecord { rendering: "企", kind: Kind::Circle, emoji: false }),
    ('\u{32ae}', CircledOrSquaredRecord { rendering: "資", kind: Kind::Circle, emoji: false }),
    ('\u{32af}', CircledOrSquaredRecord { rendering: "協", kind: Kind::Circle, emoji: false }),
    ('\u{32b0}', CircledOrSquaredRecord { rendering: "夜", kind: Kind::Circle, emoji: false }),
    ('\u{32b1}', CircledOrSquaredRecord { rendering: "36", kind: Kind::Circle, emoji: false }),
    ('\u{32b2}', CircledOrSquaredRecord { rendering: "37", kind: Kind::Circle, emoji: false }),
    ('\u{32b3}', CircledOrSquaredRecord { rendering: "38", kind: Kind::Circle, emoji: false }),
    ('\u{32b4}', CircledOrSquaredRecord { rendering: "39", kind: Kind::Circle, emoji: false }),
    ('\u{32b5}', CircledOrSquaredRecord { rendering: "40", kind: Kind::Circle, emoji: false }),
    ('\u{32b6}', CircledOrSquaredRecord { rendering: "41", kind: Kind::Circle, emoji: false }),
    ('\u{32b7}', CircledOrSquaredRecord { rendering: "42", kind: Kind::Circle, emoji: false }),
    ('\u{32b8}', CircledOrSquaredRecord { rendering: "43", kind: Kind::Circle, emoji: false }),
    ('\u{32b9}', CircledOrSquaredRecord { rendering: "44", kind: Kind::Circle, emoji: false }),
    ('\u{32ba}', CircledOrSquaredRecord { rendering: "45", kind: Kind::Circle, emoji: false }),
    ('\u{32bb}', CircledOrSquaredRecord { rendering: "46", kind: Kind::Circle, emoji: false }),
    ('\u{32bc}', CircledOrSquaredRecord { rendering: "47", kind: Kind::Circle, emoji: false }),
    ('\u{32bd}', CircledOrSquaredRecord { rendering: "48", kind: Kind::Circle, emoji: false }),
    ('\u{32be}', CircledOrSquaredRecord { rendering: "49", kind: Kind::Circle, emoji: false }),
    ('\u{32bf}', CircledOrSquaredRecord { rendering: "50", kind: Kind::Circle, emoji: false }),
    ('\u{32d0}', CircledOrSquaredRecord { rendering: "ア", kind: Kind::Circle, emoji: false }),
    ('\u{32d1}', CircledOrSquaredRecord { rendering: "イ", kind: Kind::Circle, emoji: false }),
    ('\u{32d2}', CircledOrSquaredRecord { rendering: "ウ", kind: Kind::Circle, emoji: false }),
    ('\u{32d3}', CircledOrSquaredRecord { rendering: "エ", kind: Kind::Circle, emoji: false }),
    ('\u{32d4}', CircledOrSquaredRecord { rendering: "オ", kind: Kind::Circle, emoji: false }),
    ('\u{32d5}', CircledOrSquaredRecord { rendering: "カ", kind: Kind::Circle, emoji: false }),
    ('\u{32d6}', CircledOrSquaredRecord { rendering: "キ", kind: Kind::Circle, emoji: false }),
    ('\u{32d7}', CircledOrSquaredRecord { rendering: "ク", kind: Kind::Circle, emoji: false }),
    ('\u{32d8}', CircledOrSquaredRecord { rendering: "ケ", kind: Kind::Circle, emoji: false }),
    ('\u{32d9}', CircledOrSquaredRecord { rendering: "コ", kind: Kind::Circle, emoji: false }),
    ('\u{32da}', CircledOrSquaredRecord { rendering: "サ", kind: Kind::Circle, emoji: false }),
    ('\u{32db}', CircledOrSquaredRecord { rendering: "シ", kind: Kind::Circle, emoji: false }),
    ('\u{32dc}', CircledOrSquaredRecord { rendering: "ス", kind: Kind::Circle, emoji: false }),
    ('\u{32dd}', CircledOrSquaredRecord { rendering: "セ", kind: Kind::Circle, emoji: false }),
    ('\u{32de}', CircledOrSquaredRecord { rendering: "ソ", kind: Kind::Circle, emoji: false }),
    ('\u{32df}', CircledOrSquaredRecord { rendering: "タ", kind: Kind::Circle, emoji: false }),
    ('\u{32e0}', CircledOrSquaredRecord { rendering: "チ", kind: Kind::Circle, emoji: false }),
    ('\u{32e1}', CircledOrSquaredRecord { rendering: "ツ", kind: Kind::Circle, emoji: false }),
    ('\u{32e2}', CircledOrSquaredRecord { rendering: "テ", kind: Kind::Circle, emoji: false }),
    ('\u{32e3}', CircledOrSquaredRecord { rendering: "ト", kind: Kind::Circle, emoji: false }),
    ('\u{32e4}', CircledOrSquaredRecord { rendering: "ナ", kind: Kind::Circle, emoji: false }),
    ('\u{32e5}', CircledOrSquaredRecord { rendering: "ニ", kind: Kind::Circle, emoji: false }),
    ('\u{32e6}', CircledOrSquaredRecord { rendering: "ヌ", kind: Kind::Circle, emoji: false }),
    ('\u{32e7}', CircledOrSquaredRecord { rendering: "ネ", kind: Kind::Circle, emoji: false }),
    ('\u{32e8}', CircledOrSquaredRecord { rendering: "ノ", kind: Kind::Circle, emoji: false }),
    ('\u{32e9}', CircledOrSquaredRecord { rendering: "ハ", kind: Kind::Circle, emoji: false }),
    ('\u{32ea}', CircledOrSquaredRecord { rendering: "ヒ", kind: Kind::Circle, emoji: false }),
    ('\u{32eb}', CircledOrSquaredRecord { rendering: "フ", kind: Kind::Circle, emoji: false }),
    ('\u{32ec}', CircledOrSquaredRecord { rendering: "ヘ", kind: Kind::Circle, emoji: false }),
    ('\u{32ed}', CircledOrSquaredRecord { rendering: "ホ", kind: Kind::Circle, emoji: false }),
    ('\u{32ee}', CircledOrSquaredRecord { rendering: "マ", kind: Kind::Circle, emoji: false }),
    ('\u{32ef}', CircledOrSquaredRecord { rendering: "ミ", kind: Kind::Circle, emoji: false }),
    ('\u{32f0}', CircledOrSquaredRecord { rendering: "ム", kind: Kind::Circle, emoji: false }),
    ('\u{32f1}', CircledOrSquaredRecord { rendering: "メ", kind: Kind::Circle, emoji: false }),
    ('\u{32f2}', CircledOrSquaredRecord { rendering: "モ", kind: Kind::Circle, emoji: false }),
    ('\u{32f3}', CircledOrSquaredRecord { rendering: "ヤ", kind: Kind::Circle, emoji: false }),
    ('\u{32f4}', CircledOrSquaredRecord { rendering: "ユ", kind: Kind::Circle, emoji: false }),
    ('\u{32f5}', CircledOrSquaredRecord { rendering: "ヨ", kind: Kind::Circle, emoji: false }),
    ('\u{32f6}', CircledOrSquaredRecord { rendering: "ラ", kind: Kind::Circle, emoji: false }),
    ('\u{32f7}', CircledOrSquaredRecord { rendering: "リ", kind: Kind::Circle, emoji: false }),
    ('\u{32f8}', CircledOrSquaredRecord { rendering: "ル", kind: Kind::Circle, emoji: false }),
    ('\u{32f9}', CircledOrSquaredRecord { rendering: "レ", kind: Kind::Circle, emoji: false }),
    ('\u{32fa}', CircledOrSquaredRecord { rendering: "ロ", kind: Kind::Circle, emoji: false }),
    ('\u{32fb}', CircledOrSquaredRecord { rendering: "ワ", kind: Kind::Circle, emoji: false }),
    ('\u{32fc}', CircledOrSquaredRecord { rendering: "ヰ", kind: Kind::Circle, emoji: false }),
    ('\u{32fd}', CircledOrSquaredRecord { rendering: "ヱ", kind: Kind::Circle, emoji: false }),
    ('\u{32fe}', CircledOrSquaredRecord { rendering: "ヲ", kind: Kind::Circle, emoji: false }),
    ('\u{1f130}', CircledOrSquaredRecord { rendering: "A", kind: Kind::Square, emoji: false }),
    ('\u{1f131}', CircledOrSquaredRecord { rendering: "B", kind: Kind::Square, emoji: false }),
    ('\u{1f132}', CircledOrSquaredRecord { rendering: "C", kind: Kind::Square, emoji: false }),
    ('\u{1f133}', CircledOrSquaredRecord { rendering: "D", kind: Kind::Square, emoji: false }),
    ('\u{1f134}', CircledOrSquaredRecord { rendering: "E", kind: Kind::Square, emoji: false }),
    ('\u{1f135}', CircledOrSquaredRecord { rendering: "F", kind: Kind::Square, emoji: false }),
    ('\u{1f136}', CircledOrSquaredRecord { rendering: "G", kind: Kind::Square, emoji: false }),
    ('\u{1f137}', CircledOrSquaredRecord { rendering: "H", kind: Kind::Square, emoji: false }),
    ('\u{1f138}', CircledOrSquaredRecord { rendering: "I", kind: Kind::Square, emoji: false }),
    ('\u{1f139}', CircledOrSquaredRecord { rendering: "J", kind: Kind::Square, emoji: false }),
    ('\u{1f13a}', CircledOrSquaredRecord { rendering: "K", kind: Kind::Square, emoji: false }),
    ('\u{1f13b}', CircledOrSquaredRecord { rendering: "L", kind: Kind::Square, emoji: false }),
    ('\u{1f13c}', CircledOrSquaredRecord { rendering: "M", kind: Kind::Square, emoji: false }),
    ('\u{1f13d}', CircledOrSquaredRecord { rendering: "N", kind: Kind::Square, emoji: false }),
    ('\u{1f13e}', CircledOrSquaredRecord { rendering: "O", kind: Kind::Square, emoji: false }),
    ('\u{1f13f}', CircledOrSquaredRecord { rendering: "P", kind: Kind::Square, emoji: false }),
    ('\u{1f140}', CircledOrSquaredRecord { rendering: "Q", kind: Kind::Square, emoji: false }),
    ('\u{1f141}', CircledOrSquaredRecord { rendering: "R", kind: Kind::Square, emoji: false }),
    ('\u{1f142}', CircledOrSquaredRecord { rendering: "S", kind: Kind::Square, emoji: false }),
    ('\u{1f143}', CircledOrSquaredRecord { rendering: "T", kind: Kind::Square, emoji: false }),
    ('\u{1f144}', CircledOrSquaredRecord { rendering: "U", kind: Kind::Square, emoji: false }),
    ('\u{1f145}', CircledOrSquaredRecord { rendering: "V", kind: Kind::Square, emoji: false }),
    ('\u{1f146}', CircledOrSquaredRecord { rendering: "W", kind: Kind::Square, emoji: false }),
    ('\u{1f147}', CircledOrSquaredRecord { rendering: "X", kind: Kind::Square, emoji: false }),
    ('\u{1f148}', CircledOrSquaredRecord { rendering: "Y", kind: Kind::Square, emoji: false }),
    ('\u{1f149}', CircledOrSquaredRecord { rendering: "Z", kind: Kind::Square, emoji: false }),
    ('\u{1f150}', CircledOrSquaredRecord { rendering: "A", kind: Kind::Circle, emoji: false }),
    ('\u{1f151}', CircledOrSquaredRecord { rendering: "B", kind: Kind::Circle, emoji: false }),
    ('\u{1f152}', CircledOrSquaredRecord { rendering: "C", kind: Kind::Circle, emoji: false }),
    ('\u{1f153}', CircledOrSquaredRecord { rendering: "D", kind: Kind::Circle, emoji: false }),
    ('\u{1f154}', CircledOrSquaredRecord { rendering: "E", kind: Kind::Circle, emoji: false }),
    ('\u{1f155}', CircledOrSquaredRecord { rendering: "F", kind: Kind::Circle, emoji: false }),
    ('\u{1f156}', CircledOrSquaredRecord { rendering: "G", kind: Kind::Circle, emoji: false }),
    ('\u{1f157}', CircledOrSquaredRecord { rendering: "H", kind: Kind::Circle, emoji: false }),
    ('\u{1f158}', CircledOrSquaredRecord { rendering: "I", kind: Kind::Circle, emoji: false }),
    ('\u{1f159}', CircledOrSquaredRecord { rendering: "J", kind: Kind::Circle, emoji: false }),
    ('\u{1f15a}', CircledOrSquaredRecord { rendering: "K", kind: Kind::Circle, emoji: false }),
    ('\u{1f15b}', CircledOrSquaredRecord { rendering: "L", kind: Kind::Circle, emoji: false }),
    ('\u{1f15c}', CircledOrSquaredRecord { rendering: "M", kind: Kind::Circle, emoji: false }),
    ('\u{1f15d}', CircledOrSquaredRecord { rendering: "N", kind: Kind::Circle, emoji: false }),
    ('\u{1f15e}', CircledOrSquaredRecord { rendering: "O", kind: Kind::Circle, emoji: false }),
    ('\u{1f15f}', CircledOrSquaredRecord { rendering: "P", kind: Kind::Circle, emoji: false }),
    ('\u{1f160}', CircledOrSquaredRecord { rendering: "Q", kind: Kind::Circle, emoji: false }),
    ('\u{1f161}', CircledOrSquaredRecord { rendering: "R", kind: Kind::Circle, emoji: false }),
    ('\u{1f162}', CircledOrSquaredRecord { rendering: "S", kind: Kind::Circle, emoji: false }),
    ('\u{1f163}', CircledOrSquaredRecord { rendering: "T", kind: Kind::Circle, emoji: false }),
    ('\u{1f164}', CircledOrSquaredRecord { rendering: "U", kind: Kind::Circle, emoji: false }),
    ('\u{1f165}', CircledOrSquaredRecord { rendering: "V", kind: Kind::Circle, emoji: false }),
    ('\u{1f166}', CircledOrSquaredRecord { rendering: "W", kind: Kind::Circle, emoji: false }),
    ('\u{1f167}', CircledOrSquaredRecord { rendering: "X", kind: Kind::Circle, emoji: false }),
    ('\u{1f168}', CircledOrSquaredRecord { rendering: "Y", kind: Kind::Circle, emoji: false }),
    ('\u{1f169}', CircledOrSquaredRecord { rendering: "Z", kind: Kind::Circle, emoji: false }),
    ('\u{1f170}', CircledOrSquaredRecord { rendering: "A", kind: Kind::Square, emoji: false }),
    ('\u{1f171}', CircledOrSquaredRecord { rendering: "B", kind: Kind::Square, emoji: false }),
    ('\u{1f172}', CircledOrSquaredRecord { rendering: "C", kind: Kind::Square, emoji: false }),
    ('\u{1f173}', CircledOrSquaredRecord { rendering: "D", kind: Kind::Square, emoji: false }),
    ('\u{1f174}', CircledOrSquaredRecord { rendering: "E", kind: Kind::Square, emoji: false }),
    ('\u{1f175}', CircledOrSquaredRecord { rendering: "F", kind: Kind::Square, emoji: false }),
    ('\u{1f176}', CircledOrSquaredRecord { rendering: "G", kind: Kind::Square, emoji: false }),
    ('\u{1f177}', CircledOrSquaredRecord { rendering: "H", kind: Kind::Square, emoji: false }),
    ('\u{1f178}', CircledOrSquaredRecord { rendering: "I", kind: Kind::Square, emoji: false }),
    ('\u{1f179}', CircledOrSquaredRecord { rendering: "J", kind: Kind::Square, emoji: false }),
    ('\u{1f17a}', CircledOrSquaredRecord { rendering: "K", kind: Kind::Square, emoji: false }),
    ('\u{1f17b}', CircledOrSquaredRecord { rendering: "L", kind: Kind::Square, emoji: false }),
    ('\u{1f17c}', CircledOrSquaredRecord { rendering: "M", kind: Kind::Square, emoji: false }),
    ('\u{1f17d}', CircledOrSquaredRecord { rendering: "N", kind: Kind::Square, emoji: false }),
    ('\u{1f17e}', CircledOrSquaredRecord { rendering: "O", kind: Kind::Square, emoji: false }),
    ('\u{1f17f}', CircledOrSquaredRecord { rendering: "P", kind: Kind::Square, emoji: false }),
    ('\u{1f180}', CircledOrSquaredRecord { rendering: "Q", kind: Kind::Square, emoji: false }),
    ('\u{1f181}', CircledOrSquaredRecord { rendering: "R", kind: Kind::Square, emoji: false }),
    ('\u{1f182}', CircledOrSquaredRecord { rendering: "S", kind: Kind::Square, emoji: false }),
    ('\u{1f183}', CircledOrSquaredRecord { rendering: "T", kind: Kind::Square, emoji: false }),
    ('\u{1f184}', CircledOrSquaredRecord { rendering: "U", kind: Kind::Square, emoji: false }),
    ('\u{1f185}', CircledOrSquaredRecord { rendering: "V", kind: Kind::Square, emoji: false }),
    ('\u{1f186}', CircledOrSquaredRecord { rendering: "W", kind: Kind::Square, emoji: false }),
    ('\u{1f187}', CircledOrSquaredRecord { rendering: "X", kind: Kind::Square, emoji: false }),
    ('\u{1f188}', CircledOrSquaredRecord { rendering: "Y", kind: Kind::Square, emoji: false }),
    ('\u{1f189}', CircledOrSquaredRecord { rendering: "Z", kind: Kind::Square, emoji: false }),
    ('\u{1f18e}', CircledOrSquaredRecord { rendering: "AB", kind: Kind::Square, emoji: true }),
    ('\u{1f191}', CircledOrSquaredRecord { rendering: "CL", kind: Kind::Square, emoji: true }),
    ('\u{1f192}', CircledOrSquaredRecord { rendering: "COOL", kind: Kind::Square, emoji: true }),
    ('\u{1f193}', CircledOrSquaredRecord { rendering: "FREE", kind: Kind::Square, emoji: true }),
    ('\u{1f194}', CircledOrSquaredRecord { rendering: "ID", kind: Kind::Square, emoji: true }),
    ('\u{1f195}', CircledOrSquaredRecord { rendering: "NEW", kind: Kind::Square, emoji: true }),
    ('\u{1f196}', CircledOrSquaredRecord { rendering: "NG", kind: Kind::Square, emoji: true }),
    ('\u{1f197}', CircledOrSquaredRecord { rendering: "OK", kind: Kind::Square, emoji: true }),
    ('\u{1f198}', CircledOrSquaredRecord { rendering: "SOS", kind: Kind::Square, emoji: true }),
    ('\u{1f199}', CircledOrSquaredRecord { rendering: "UP", kind: Kind::Square, emoji: true }),
    ('\u{1f19a}', CircledOrSquaredRecord { rendering: "VS", kind: Kind::Square, emoji: true }),
    ('\u{1f1e6}', CircledOrSquaredRecord { rendering: "A", kind: Kind::Square, emoji: false }),
    ('\u{1f1e7}', CircledOrSquaredRecord { rendering: "B", kind: Kind::Square, emoji: false }),
    ('\u{1f1e8}', CircledOrSquaredRecord { rendering: "C", kind: Kind::Square, emoji: false }),
    ('\u{1f1e9}', CircledOrSquaredRecord { rendering: "D", kind: Kind::Square, emoji: false }),
    ('\u{1f1ea}', CircledOrSquaredRecord { rendering: "E", kind: Kind::Square, emoji: false }),
    ('\u{1f1eb}', CircledOrSquaredRecord { rendering: "F", kind: Kind::Square, emoji: false }),
    ('\u{1f1ec}', CircledOrSquaredRecord { rendering: "G", kind: Kind::Square, emoji: false }),
    ('\u{1f1ed}', CircledOrSquaredRecord { rendering: "H", kind: Kind::Square, emoji: false }),
    ('\u{1f1ee}', CircledOrSquaredRecord { rendering: "I", kind: Kind::Square, emoji: false }),
    ('\u{1f1ef}', CircledOrSquaredRecord { rendering: "J", kind: Kind::Square, emoji: false }),
    ('\u{1f1f0}', CircledOrSquaredRecord { rendering: "K", kind: Kind::Square, emoji: false }),
    ('\u{1f1f1}', CircledOrSquaredRecord { rendering: "L", kind: Kind::Square, emoji: false }),
    ('\u{1f1f2}', CircledOrSquaredRecord { rendering: "M", kind: Kind::Square, emoji: false }),
    ('\u{1f1f3}', CircledOrSquaredRecord { rendering: "N", kind: Kind::Square, emoji: false }),
    ('\u{1f1f4}', CircledOrSquaredRecord { rendering: "O", kind: Kind::Square, emoji: false }),
    ('\u{1f1f5}', CircledOrSquaredRecord { rendering: "P", kind: Kind::Square, emoji: false }),
    ('\u{1f1f6}', CircledOrSquaredRecord { rendering: "Q", kind: Kind::Square, emoji: false }),
    ('\u{1f1f7}', CircledOrSquaredRecord { rendering: "R", kind: Kind::Square, emoji: false }),
    ('\u{1f1f8}', CircledOrSquaredRecord { rendering: "S", kind: Kind::Square, emoji: false }),
    ('\u{1f1f9}', CircledOrSquaredRecord { rendering: "T", kind: Kind::Square, emoji: false }),
    ('\u{1f1fa}', CircledOrSquaredRecord { rendering: "U", kind: Kind::Square, emoji: false }),
    ('\u{1f1fb}', CircledOrSquaredRecord { rendering: "V", kind: Kind::Square, emoji: false }),
    ('\u{1f1fc}', CircledOrSquaredRecord { rendering: "W", kind: Kind::Square, emoji: false }),
    ('\u{1f1fd}', CircledOrSquaredRecord { rendering: "X", kind: Kind::Square, emoji: false }),
    ('\u{1f1fe}', CircledOrSquaredRecord { rendering: "Y", kind: Kind::Square, emoji: false }),
    ('\u{1f1ff}', CircledOrSquaredRecord { rendering: "Z", kind: Kind::Square, emoji: false }),
    ('\u{1f201}', CircledOrSquaredRecord { rendering: "ココ", kind: Kind::Square, emoji: true }),
    ('\u{1f202}', CircledOrSquaredRecord { rendering: "サ", kind: Kind::Square, emoji: true }),
    ('\u{1f210}', CircledOrSquaredRecord { rendering: "手", kind: Kind::Square, emoji: true }),
    ('\u{1f211}', CircledOrSquaredRecord { rendering: "字", kind: Kind::Square, emoji: true }),
    ('\u{1f212}', CircledOrSquaredRecord { rendering: "双", kind: Kind::Square, emoji: true }),
    ('\u{1f213}', CircledOrSquaredRecord { rendering: "デ", kind: Kind::Square, emoji: true }),
    ('\u{1f214}', CircledOrSquaredRecord { rendering: "二", kind: Kind::Square, emoji: true }),
    ('\u{1f215}', CircledOrSquaredRecord { rendering: "多", kind: Kind::Square, emoji: true }),
    ('\u{1f216}', CircledOrSquaredRecord { rendering: "解", kind: Kind::Square, emoji: true }),
    ('\u{1f217}', CircledOrSquaredRecord { rendering: "天", kind: Kind::Square, emoji: true }),
    ('\u{1f218}', CircledOrSquaredRecord { rendering: "交", kind: Kind::Square, emoji: true }),
    ('\u{1f219}', CircledOrSquaredRecord { rendering: "映", kind: Kind::Square, emoji: true }),
    ('\u{1f21a}', CircledOrSquaredRecord { rendering: "無", kind: Kind::Square, emoji: true }),
    ('\u{1f21b}', CircledOrSquaredRecord { rendering: "料", kind: Kind::Square, emoji: true }),
    ('\u{1f21c}', CircledOrSquaredRecord { rendering: "前", kind: Kind::Square, emoji: true }),
    ('\u{1f21d}', CircledOrSquaredRecord { rendering: "後", kind: Kind::Square, emoji: true }),
    ('\u{1f21e}', CircledOrSquaredRecord { rendering: "再", kind: Kind::Square, emoji: true }),
    ('\u{1f21f}', CircledOrSquaredRecord { rendering: "新", kind: Kind::Square, emoji: true }),
    ('\u{1f220}', CircledOrSquaredRecord { rendering: "初", kind: Kind::Square, emoji: true }),
    ('\u{1f221}', CircledOrSquaredRecord { rendering: "終", kind: Kind::Square, emoji: true }),
    ('\u{1f222}', CircledOrSquaredRecord { rendering: "生", kind: Kind::Square, emoji: true }),
    ('\u{1f223}', CircledOrSquaredRecord { rendering: "販", kind: Kind::Square, emoji: true }),
    ('\u{1f224}', CircledOrSquaredRecord { rendering: "声", kind: Kind::Square, emoji: true }),
    ('\u{1f225}', CircledOrSquaredRecord { rendering: "吹", kind: Kind::Square, emoji: true }),
    ('\u{1f226}', CircledOrSquaredRecord { rendering: "演", kind: Kind::Square, emoji: true }),
    ('\u{1f227}', CircledOrSquaredRecord { rendering: "投", kind: Kind::Square, emoji: true }),
    ('\u{1f228}', CircledOrSquaredRecord { rendering: "捕", kind: Kind::Square, emoji: true }),
    ('\u{1f229}', CircledOrSquaredRecord { rendering: "一", kind: Kind::Square, emoji: true }),
    ('\u{1f22a}', CircledOrSquaredRecord { rendering: "三", kind: Kind::Square, emoji: true }),
    ('\u{1f22b}', CircledOrSquaredRecord { rendering: "遊", kind: Kind::Square, emoji: true }),
    ('\u{1f22c}', CircledOrSquaredRecord { rendering: "左", kind: Kind::Square, emoji: true }),
    ('\u{1f22d}', CircledOrSquaredRecord { rendering: "中", kind: Kind::Square, emoji: true }),
    ('\u{1f22e}', CircledOrSquaredRecord { rendering: "右", kind: Kind::Square, emoji: true }),
    ('\u{1f22f}', CircledOrSquaredRecord { rendering: "指", kind: Kind::Square, emoji: true }),
    ('\u{1f230}', CircledOrSquaredRecord { rendering: "走", kind: Kind::Square, emoji: true }),
    ('\u{1f231}', CircledOrSquaredRecord { rendering: "打", kind: Kind::Square, emoji: true }),
    ('\u{1f232}', CircledOrSquaredRecord { rendering: "禁", kind: Kind::Square, emoji: true }),
    ('\u{1f233}', CircledOrSquaredRecord { rendering: "空", kind: Kind::Square, emoji: true }),
    ('\u{1f234}', CircledOrSquaredRecord { rendering: "合", kind: Kind::Square, emoji: true }),
    ('\u{1f235}', CircledOrSquaredRecord { rendering: "満", kind: Kind::Square, emoji: true }),
    ('\u{1f236}', CircledOrSquaredRecord { rendering: "有", kind: Kind::Square, emoji: true }),
    ('\u{1f237}', CircledOrSquaredRecord { rendering: "月", kind: Kind::Square, emoji: true }),
    ('\u{1f238}', CircledOrSquaredRecord { rendering: "申", kind: Kind::Square, emoji: true }),
    ('\u{1f239}', CircledOrSquaredRecord { rendering: "割", kind: Kind::Square, emoji: true }),
    ('\u{1f23a}', CircledOrSquaredRecord { rendering: "営", kind: Kind::Square, emoji: true }),
    ('\u{1f23b}', CircledOrSquaredRecord { rendering: "配", kind: Kind::Square, emoji: true }),
    ('\u{1f250}', CircledOrSquaredRecord { rendering: "得", kind: Kind::Circle, emoji: true }),
    ('\u{1f251}', CircledOrSquaredRecord { rendering: "可", kind: Kind::Circle, emoji: true }),
];
