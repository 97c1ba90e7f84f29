// Generated by mojinorm_codegen from combined-chars.json. Do not edit by hand.

/// Single characters that decompose into several, e.g. \u{337b}.
pub(crate) const COMBINED_MAPPINGS: &[(char, &str)] = &[
    ('\u{2400}', "NUL"),
    ('\u{2401}', "SOH"),
    ('\u{2402}', "STX"),
    ('\u{2403}', "ETX"),
    ('\u{2404}', "EOT"),
    ('\u{2405}', "ENQ"),
    ('\u{2406}', "ACK"),
    ('\u{2407}', "BEL"),
    ('\u{2408}', "BS"),
    ('\u{2409}', "HT"),
    ('\u{240a}', "LF"),
    ('\u{240b}', "VT"),
    ('\u{240c}', "FF"),
    ('\u{240d}', "CR"),
    ('\u{240e}', "SO"),
    ('\u{240f}', "SI"),
    ('\u{2410}', "DLE"),
    ('\u{2411}', "DC1"),
    ('\u{2412}', "DC2"),
    ('\u{2413}', "DC3"),
    ('\u{2414}', "DC4"),
    ('\u{2415}', "NAK"),
    ('\u{2416}', "SYN"),
    ('\u{2417}', "ETB"),
    ('\u{2418}', "CAN"),
    ('\u{2419}', "EM"),
    ('\u{241a}', "SUB"),
    ('\u{241b}', "ESC"),
    ('\u{241c}', "FS"),
    ('\u{241d}', "GS"),
    ('\u{241e}', "RS"),
    ('\u{241f}', "US"),
    ('\u{2420}', "SP"),
    ('\u{2421}', "DEL"),
    ('\u{2474}', "(1)"),
    ('\u{2475}', "(2)"),
    ('\u{2476}', "(3)"),
    ('\u{2477}', "(4)"),
    ('\u{2478}', "(5)"),
    ('\u{2479}', "(6)"),
    ('\u{247a}', "(7)"),
    ('\u{247b}', "(8)"),
    ('\u{247c}', "(9)"),
    ('\u{247d}', "(10)"),
    ('\u{247e}', "(11)"),
    ('\u{247f}', "(12)"),
    ('\u{2480}', "(13)"),
    ('\u{2481}', "(14)"),
    ('\u{2482}', "(15)"),
    ('\u{2483}', "(16)"),
    ('\u{2484}', "(17)"),
    ('\u{2485}', "(18)"),
    ('\u{2486}', "(19)"),
    ('\u{2487}', "(20)"),
    ('\u{2488}', "1."),
    ('\u{2489}', "2."),
    ('\u{248a}', "3."),
    ('\u{248b}', "4."),
    ('\u{248c}', "5."),
    ('\u{248d}', "6."),
    ('\u{248e}', "7."),
    ('\u{248f}', "8."),
    ('\u{2490}', "9."),
    ('\u{2491}', "10."),
    ('\u{2492}', "11."),
    ('\u{2493}', "12."),
    ('\u{2494}', "13."),
    ('\u{2495}', "14."),
    ('\u{2496}', "15."),
    ('\u{2497}', "16."),
    ('\u{2498}', "17."),
    ('\u{2499}', "18."),
    ('\u{249a}', "19."),
    ('\u{249b}', "20."),
    ('\u{249c}', "(a)"),
    ('\u{249d}', "(b)"),
    ('\u{249e}', "(c)"),
    ('\u{249f}', "(d)"),
    ('\u{24a0}', "(e)"),
    ('\u{24a1}', "(f)"),
    ('\u{24a2}', "(g)"),
    ('\u{24a3}', "(h)"),
    ('\u{24a4}', "(i)"),
    ('\u{24a5}', "(j)"),
    ('\u{24a6}', "(k)"),
    ('\u{24a7}', "(l)"),
    ('\u{24a8}', "(m)"),
    ('\u{24a9}', "(n)"),
    ('\u{24aa}', "(o)"),
    ('\u{24ab}', "(p)"),
    ('\u{24ac}', "(q)"),
    ('\u{24ad}', "(r)"),
    ('\u{24ae}', "(s)"),
    ('\u{24af}', "(t)"),
    ('\u{24b0}', "(u)"),
    ('\u{24b1}', "(v)"),
    ('\u{24b2}', "(w)"),
    ('\u{24b3}', "(x)"),
    ('\u{24b4}', "(y)"),
    ('\u{24b5}', "(z)"),
    ('\u{3220}', "(一)"),
    ('\u{3221}', "(二)"),
    ('\u{3222}', "(三)"),
    ('\u{3223}', "(四)"),
    ('\u{3224}', "(五)"),
    ('\u{3225}', "(六)"),
    ('\u{3226}', "(七)"),
    ('\u{3227}', "(八)"),
    ('\u{3228}', "(九)"),
    ('\u{3229}', "(十)"),
    ('\u{322a}', "(月)"),
    ('\u{322b}', "(火)"),
    ('\u{322c}', "(水)"),
    ('\u{322d}', "(木)"),
    ('\u{322e}', "(金)"),
    ('\u{322f}', "(土)"),
    ('\u{3230}', "(日)"),
    ('\u{3231}', "(株)"),
    ('\u{3232}', "(有)"),
    ('\u{3233}', "(社)"),
    ('\u{3234}', "(名)"),
    ('\u{3235}', "(特)"),
    ('\u{3236}', "(財)"),
    ('\u{3237}', "(祝)"),
    ('\u{3238}', "(労)"),
    ('\u{3239}', "(代)"),
    ('\u{323a}', "(呼)"),
    ('\u{323b}', "(学)"),
    ('\u{323c}', "(監)"),
    ('\u{323d}', "(企)"),
    ('\u{323e}', "(資)"),
    ('\u{323f}', "(協)"),
    ('\u{3240}', "(祭)"),
    ('\u{3241}', "(休)"),
    ('\u{3242}', "(自)"),
    ('\u{3243}', "(至)"),
    ('\u{32c0}', "1月"),
    ('\u{32c1}', "2月"),
    ('\u{32c2}', "3月"),
    ('\u{32c3}', "4月"),
    ('\u{32c4}', "5月"),
    ('\u{32c5}', "6月"),
    ('\u{32c6}', "7月"),
    ('\u{32c7}', "8月"),
    ('\u{32c8}', "9月"),
    ('\u{32c9}', "10月"),
    ('\u{32ca}', "11月"),
    ('\u{32cb}', "12月"),
    ('\u{32ff}', "令和"),
    ('\u{3300}', "アパート"),
    ('\u{3301}', "アルファ"),
    ('\u{3302}', "アンペア"),
    ('\u{3303}', "アール"),
    ('\u{3304}', "イニング"),
    ('\u{3305}', "インチ"),
    ('\u{3306}', "ウォン"),
    ('\u{3307}', "エスクード"),
    ('\u{3308}', "エーカー"),
    ('\u{3309}', "オンス"),
    ('\u{330a}', "オーム"),
    ('\u{330b}', "カイリ"),
    ('\u{330c}', "カラット"),
    ('\u{330d}', "カロリー"),
    ('\u{330e}', "ガロン"),
    ('\u{330f}', "ガンマ"),
    ('\u{3310}', "ギガ"),
    ('\u{3311}', "ギニー"),
    ('\u{3312}', "キュリー"),
    ('\u{3313}', "ギルダー"),
    ('\u{3314}', "キロ"),
    ('\u{3315}', "キログラム"),
    ('\u{3316}', "キロメートル"),
    ('\u{3317}', "キロワット"),
    ('\u{3318}', "グラム"),
    ('\u{3319}', "グラムトン"),
    ('\u{331a}', "クルゼイロ"),
    ('\u{331b}', "クローネ"),
    ('\u{331c}', "ケース"),
    ('\u{331d}', "コルナ"),
    ('\u{331e}', "コーポ"),
    ('\u{331f}', "サイクル"),
    ('\u{3320}', "サンチーム"),
    ('\u{3321}', "シリング"),
    ('\u{3322}', "センチ"),
    ('\u{3323}', "セント"),
    ('\u{3324}', "ダース"),
    ('\u{3325}', "デシ"),
    ('\u{3326}', "ドル"),
    ('\u{3327}', "トン"),
    ('\u{3328}', "ナノ"),
    ('\u{3329}', "ノット"),
    ('\u{332a}', "ハイツ"),
    ('\u{332b}', "パーセント"),
    ('\u{332c}', "パーツ"),
    ('\u{332d}', "バーレル"),
    ('\u{332e}', "ピアストル"),
    ('\u{332f}', "ピクル"),
    ('\u{3330}', "ピコ"),
    ('\u{3331}', "ビル"),
    ('\u{3332}', "ファラッド"),
    ('\u{3333}', "フィート"),
    ('\u{3334}', "ブッシェル"),
    ('\u{3335}', "フラン"),
    ('\u{3336}', "ヘクタール"),
    ('\u{3337}', "ペソ"),
    ('\u{3338}', "ペニヒ"),
    ('\u{3339}', "ヘルツ"),
    ('\u{333a}', "ペンス"),
    ('\u{333b}', "ページ"),
    ('\u{333c}', "ベータ"),
    ('\u{333d}', "ポイント"),
    ('\u{333e}', "ボルト"),
    ('\u{333f}', "ホン"),
    ('\u{3340}', "ポンド"),
    ('\u{3341}', "ホール"),
    ('\u{3342}', "ホーン"),
    ('\u{3343}', "マイクロ"),
    ('\u{3344}', "マイル"),
    ('\u{3345}', "マッハ"),
    ('\u{3346}', "マルク"),
    ('\u{3347}', "マンション"),
    ('\u{3348}', "ミクロン"),
    ('\u{3349}', "ミリ"),
    ('\u{334a}', "ミリバール"),
    ('\u{334b}', "メガ"),
    ('\u{334c}', "メガトン"),
    ('\u{334d}', "メートル"),
    ('\u{334e}', "ヤード"),
    ('\u{334f}', "ヤール"),
    ('\u{3350}', "ユアン"),
    ('\u{3351}', "リットル"),
    ('\u{3352}', "リラ"),
    ('\u{3353}', "ルピー"),
    ('\u{3354}', "ルーブル"),
    ('\u{3355}', "レム"),
    ('\u{3356}', "レントゲン"),
    ('\u{3357}', "ワット"),
    ('\u{3358}', "0点"),
    ('\u{3359}', "1点"),
    ('\u{335a}', "2点"),
    ('\u{335b}', "3点"),
    ('\u{335c}', "4点"),
    ('\u{335d}', "5点"),
    ('\u{335e}', "6点"),
    ('\u{335f}', "7点"),
    ('\u{3360}', "8点"),
    ('\u{3361}', "9点"),
    ('\u{3362}', "10点"),
    ('\u{3363}', "11点"),
    ('\u{3364}', "12点"),
    ('\u{3365}', "13点"),
    ('\u{3366}', "14点"),
    ('\u{3367}', "15点"),
    ('\u{3368}', "16点"),
    ('\u{3369}', "17点"),
    ('\u{336a}', "18点"),
    ('\u{336b}', "19点"),
    ('\u{336c}', "20点"),
    ('\u{336d}', "21点"),
    ('\u{336e}', "22点"),
    ('\u{336f}', "23点"),
    ('\u{3370}', "24点"),
    ('\u{3371}', "hPa"),
    ('\u{3372}', "da"),
    ('\u{3373}', "AU"),
    ('\u{3374}', "bar"),
    ('\u{3375}', "oV"),
    ('\u{3376}', "pc"),
    ('\u{3377}', "dm"),
    ('\u{3378}', "dm2"),
    ('\u{3379}', "dm3"),
    ('\u{337a}', "IU"),
    ('\u{337b}', "平成"),
    ('\u{337c}', "昭和"),
    ('\u{337d}', "大正"),
    ('\u{337e}', "明治"),
    ('\u{337f}', "株式会社"),
    ('\u{3380}', "pA"),
    ('\u{3381}', "nA"),
    ('\u{3382}', "\u{03bc}A"),
    ('\u{3383}', "mA"),
    ('\u{3384}', "kA"),
    ('\u{3385}', "KB"),
    ('\u{3386}', "MB"),
    ('\u{3387}', "GB"),
    ('\u{3388}', "cal"),
    ('\u{3389}', "kcal"),
    ('\u{338a}', "pF"),
    ('\u{338b}', "nF"),
    ('\u{338c}', "\u{03bc}F"),
    ('\u{338d}', "\u{03bc}g"),
    ('\u{338e}', "mg"),
    ('\u{338f}', "kg"),
    ('\u{3390}', "Hz"),
    ('\u{3391}', "kHz"),
    ('\u{3392}', "MHz"),
    ('\u{3393}', "GHz"),
    ('\u{3394}', "THz"),
    ('\u{3395}', "\u{03bc}l"),
    ('\u{3396}', "ml"),
    ('\u{3397}', "dl"),
    ('\u{3398}', "kl"),
    ('\u{3399}', "fm"),
    ('\u{339a}', "nm"),
    ('\u{339b}', "\u{03bc}m"),
    ('\u{339c}', "mm"),
    ('\u{339d}', "cm"),
    ('\u{339e}', "km"),
    ('\u{339f}', "mm2"),
    ('\u{33a0}', "cm2"),
    ('\u{33a1}', "m2"),
    ('\u{33a2}', "km2"),
    ('\u{33a3}', "mm3"),
    ('\u{33a4}', "cm3"),
    ('\u{33a5}', "m3"),
    ('\u{33a6}', "km3"),
    ('\u{33a7}', "m\u{2215}s"),
    ('\u{33a8}', "m\u{2215}s2"),
    ('\u{33a9}', "Pa"),
    ('\u{33aa}', "kPa"),
    ('\u{33ab}', "MPa"),
    ('\u{33ac}', "GPa"),
    ('\u{33ad}', "rad"),
    ('\u{33ae}', "rad\u{2215}s"),
    ('\u{33af}', "rad\u{2215}s2"),
    ('\u{33b0}', "ps"),
    ('\u{33b1}', "ns"),
    ('\u{33b2}', "\u{03bc}s"),
    ('\u{33b3}', "ms"),
    ('\u{33b4}', "pV"),
    ('\u{33b5}', "nV"),
    ('\u{33b6}', "\u{03bc}V"),
    ('\u{33b7}', "mV"),
    ('\u{33b8}', "kV"),
    ('\u{33b9}', "MV"),
    ('\u{33ba}', "pW"),
    ('\u{33bb}', "nW"),
    ('\u{33bc}', "\u{03bc}W"),
    ('\u{33bd}', "mW"),
    ('\u{33be}', "kW"),
    ('\u{33bf}', "MW"),
    ('\u{33c0}', "k\u{03a9}"),
    ('\u{33c1}', "M\u{03a9}"),
    ('\u{33c2}', "a.m."),
    ('\u{33c3}', "Bq"),
    ('\u{33c4}', "cc"),
    ('\u{33c5}', "cd"),
    ('\u{33c6}', "C\u{2215}kg"),
    ('\u{33c7}', "Co."),
    ('\u{33c8}', "dB"),
    ('\u{33c9}', "Gy"),
    ('\u{33ca}', "ha"),
    ('\u{33cb}', "HP"),
    ('\u{33cc}', "in"),
    ('\u{33cd}', "KK"),
    ('\u{33ce}', "KM"),
    ('\u{33cf}', "kt"),
    ('\u{33d0}', "lm"),
    ('\u{33d1}', "ln"),
    ('\u{33d2}', "log"),
    ('\u{33d3}', "lx"),
    ('\u{33d4}', "mb"),
    ('\u{33d5}', "mil"),
    ('\u{33d6}', "mol"),
    ('\u{33d7}', "PH"),
    ('\u{33d8}', "p.m."),
    ('\u{33d9}', "PPM"),
    ('\u{33da}', "PR"),
    ('\u{33db}', "sr"),
    ('\u{33dc}', "Sv"),
    ('\u{33dd}', "Wb"),
    ('\u{33de}', "V\u{2215}m"),
    ('\u{33df}', "A\u{2215}m"),
    ('\u{33e0}', "1日"),
    ('\u{33e1}', "2日"),
    ('\u{33e2}', "3日"),
    ('\u{33e3}', "4日"),
    ('\u{33e4}', "5日"),
    ('\u{33e5}', "6日"),
    ('\u{33e6}', "7日"),
    ('\u{33e7}', "8日"),
    ('\u{33e8}', "9日"),
    ('\u{33e9}', "10日"),
    ('\u{33ea}', "11日"),
    ('\u{33eb}', "12日"),
    ('\u{33ec}', "13日"),
    ('\u{33ed}', "14日"),
    ('\u{33ee}', "15日"),
    ('\u{33ef}', "16日"),
    ('\u{33f0}', "17日"),
    ('\u{33f1}', "18日"),
    ('\u{33f2}', "19日"),
    ('\u{33f3}', "20日"),
    ('\u{33f4}', "21日"),
    ('\u{33f5}', "22日"),
    ('\u{33f6}', "23日"),
    ('\u{33f7}', "24日"),
    ('\u{33f8}', "25日"),
    ('\u{33f9}', "26日"),
    ('\u{33fa}', "27日"),
    ('\u{33fb}', "28日"),
    ('\u{33fc}', "29日"),
    ('\u{33fd}', "30日"),
    ('\u{33fe}', "31日"),
];
