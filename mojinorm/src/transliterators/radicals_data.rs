// Generated by mojinorm_codegen from radicals.json. Do not edit by hand.

/// CJK Radicals Supplement and Kangxi Radicals mapped to the CJK
/// unified ideographs whose glyphs they resemble.
pub(crate) const RADICALS_MAPPINGS: &[(char, &str)] = &[
    ('\u{2e80}', "冫"),
    ('\u{2e81}', "厂"),
    ('\u{2e82}', "乛"),
    ('\u{2e83}', "乚"),
    ('\u{2e84}', "乙"),
    ('\u{2e85}', "亻"),
    ('\u{2e86}', "冂"),
    ('\u{2e87}', "几"),
    ('\u{2e88}', "刀"),
    ('\u{2e89}', "刂"),
    ('\u{2e8a}', "卜"),
    ('\u{2e8b}', "㔾"),
    ('\u{2e8c}', "小"),
    ('\u{2e8d}', "小"),
    ('\u{2e8e}', "尢"),
    ('\u{2e8f}', "尣"),
    ('\u{2e90}', "尢"),
    ('\u{2e91}', "尣"),
    ('\u{2e92}', "巳"),
    ('\u{2e93}', "幺"),
    ('\u{2e94}', "彑"),
    ('\u{2e95}', "彐"),
    ('\u{2e96}', "忄"),
    ('\u{2e97}', "㣺"),
    ('\u{2e98}', "扌"),
    ('\u{2e99}', "攵"),
    ('\u{2e9b}', "旡"),
    ('\u{2e9c}', "日"),
    ('\u{2e9d}', "月"),
    ('\u{2e9e}', "歹"),
    ('\u{2e9f}', "母"),
    ('\u{2ea0}', "民"),
    ('\u{2ea1}', "氵"),
    ('\u{2ea2}', "氺"),
    ('\u{2ea3}', "灬"),
    ('\u{2ea4}', "爫"),
    ('\u{2ea5}', "爫"),
    ('\u{2ea6}', "丬"),
    ('\u{2ea7}', "牛"),
    ('\u{2ea8}', "犭"),
    ('\u{2ea9}', "王"),
    ('\u{2eaa}', "疋"),
    ('\u{2eab}', "目"),
    ('\u{2eac}', "示"),
    ('\u{2ead}', "礻"),
    ('\u{2eae}', "竹"),
    ('\u{2eaf}', "糹"),
    ('\u{2eb0}', "纟"),
    ('\u{2eb1}', "罓"),
    ('\u{2eb2}', "罒"),
    ('\u{2eb3}', "罒"),
    ('\u{2eb4}', "罒"),
    ('\u{2eb5}', "网"),
    ('\u{2eb6}', "羊"),
    ('\u{2eb7}', "羊"),
    ('\u{2eb8}', "羊"),
    ('\u{2eb9}', "耂"),
    ('\u{2eba}', "聿"),
    ('\u{2ebb}', "聿"),
    ('\u{2ebc}', "月"),
    ('\u{2ebd}', "臼"),
    ('\u{2ebe}', "艹"),
    ('\u{2ebf}', "艹"),
    ('\u{2ec0}', "艹"),
    ('\u{2ec1}', "虎"),
    ('\u{2ec2}', "衤"),
    ('\u{2ec3}', "覀"),
    ('\u{2ec4}', "西"),
    ('\u{2ec5}', "见"),
    ('\u{2ec6}', "角"),
    ('\u{2ec7}', "角"),
    ('\u{2ec8}', "讠"),
    ('\u{2ec9}', "贝"),
    ('\u{2eca}', "足"),
    ('\u{2ecb}', "车"),
    ('\u{2ecc}', "辶"),
    ('\u{2ecd}', "辶"),
    ('\u{2ece}', "辶"),
    ('\u{2ecf}', "阝"),
    ('\u{2ed0}', "钅"),
    ('\u{2ed1}', "長"),
    ('\u{2ed2}', "镸"),
    ('\u{2ed3}', "长"),
    ('\u{2ed4}', "门"),
    ('\u{2ed5}', "阜"),
    ('\u{2ed6}', "阝"),
    ('\u{2ed7}', "雨"),
    ('\u{2ed8}', "青"),
    ('\u{2ed9}', "韦"),
    ('\u{2eda}', "页"),
    ('\u{2edb}', "风"),
    ('\u{2edc}', "飞"),
    ('\u{2edd}', "食"),
    ('\u{2ede}', "食"),
    ('\u{2edf}', "飠"),
    ('\u{2ee0}', "饣"),
    ('\u{2ee1}', "首"),
    ('\u{2ee2}', "马"),
    ('\u{2ee3}', "骨"),
    ('\u{2ee4}', "鬼"),
    ('\u{2ee5}', "鱼"),
    ('\u{2ee6}', "鸟"),
    ('\u{2ee7}', "卤"),
    ('\u{2ee8}', "麦"),
    ('\u{2ee9}', "黄"),
    ('\u{2eea}', "黾"),
    ('\u{2eeb}', "斉"),
    ('\u{2eec}', "齐"),
    ('\u{2eed}', "歯"),
    ('\u{2eee}', "齿"),
    ('\u{2eef}', "竜"),
    ('\u{2ef0}', "龙"),
    ('\u{2ef1}', "龜"),
    ('\u{2ef2}', "亀"),
    ('\u{2ef3}', "龟"),
    ('\u{2f00}', "一"),
    ('\u{2f01}', "丨"),
    ('\u{2f02}', "丶"),
    ('\u{2f03}', "丿"),
    ('\u{2f04}', "乙"),
    ('\u{2f05}', "亅"),
    ('\u{2f06}', "二"),
    ('\u{2f07}', "亠"),
    ('\u{2f08}', "人"),
    ('\u{2f09}', "儿"),
    ('\u{2f0a}', "入"),
    ('\u{2f0b}', "八"),
    ('\u{2f0c}', "冂"),
    ('\u{2f0d}', "冖"),
    ('\u{2f0e}', "冫"),
    ('\u{2f0f}', "几"),
    ('\u{2f10}', "凵"),
    ('\u{2f11}', "刀"),
    ('\u{2f12}', "力"),
    ('\u{2f13}', "勹"),
    ('\u{2f14}', "匕"),
    ('\u{2f15}', "匚"),
    ('\u{2f16}', "匸"),
    ('\u{2f17}', "十"),
    ('\u{2f18}', "卜"),
    ('\u{2f19}', "卩"),
    ('\u{2f1a}', "厂"),
    ('\u{2f1b}', "厶"),
    ('\u{2f1c}', "又"),
    ('\u{2f1d}', "口"),
    ('\u{2f1e}', "囗"),
    ('\u{2f1f}', "土"),
    ('\u{2f20}', "士"),
    ('\u{2f21}', "夂"),
    ('\u{2f22}', "夊"),
    ('\u{2f23}', "夕"),
    ('\u{2f24}', "大"),
    ('\u{2f25}', "女"),
    ('\u{2f26}', "子"),
    ('\u{2f27}', "宀"),
    ('\u{2f28}', "寸"),
    ('\u{2f29}', "小"),
    ('\u{2f2a}', "尢"),
    ('\u{2f2b}', "尸"),
    ('\u{2f2c}', "屮"),
    ('\u{2f2d}', "山"),
    ('\u{2f2e}', "巛"),
    ('\u{2f2f}', "工"),
    ('\u{2f30}', "己"),
    ('\u{2f31}', "巾"),
    ('\u{2f32}', "干"),
    ('\u{2f33}', "幺"),
    ('\u{2f34}', "广"),
    ('\u{2f35}', "廴"),
    ('\u{2f36}', "廾"),
    ('\u{2f37}', "弋"),
    ('\u{2f38}', "弓"),
    ('\u{2f39}', "彐"),
    ('\u{2f3a}', "彡"),
    ('\u{2f3b}', "彳"),
    ('\u{2f3c}', "心"),
    ('\u{2f3d}', "戈"),
    ('\u{2f3e}', "戶"),
    ('\u{2f3f}', "手"),
    ('\u{2f40}', "支"),
    ('\u{2f41}', "攴"),
    ('\u{2f42}', "文"),
    ('\u{2f43}', "斗"),
    ('\u{2f44}', "斤"),
    ('\u{2f45}', "方"),
    ('\u{2f46}', "无"),
    ('\u{2f47}', "日"),
    ('\u{2f48}', "曰"),
    ('\u{2f49}', "月"),
    ('\u{2f4a}', "木"),
    ('\u{2f4b}', "欠"),
    ('\u{2f4c}', "止"),
    ('\u{2f4d}', "歹"),
    ('\u{2f4e}', "殳"),
    ('\u{2f4f}', "毋"),
    ('\u{2f50}', "比"),
    ('\u{2f51}', "毛"),
    ('\u{2f52}', "氏"),
    ('\u{2f53}', "气"),
    ('\u{2f54}', "水"),
    ('\u{2f55}', "火"),
    ('\u{2f56}', "爪"),
    ('\u{2f57}', "父"),
    ('\u{2f58}', "爻"),
    ('\u{2f59}', "爿"),
    ('\u{2f5a}', "片"),
    ('\u{2f5b}', "牙"),
    ('\u{2f5c}', "牛"),
    ('\u{2f5d}', "犬"),
    ('\u{2f5e}', "玄"),
    ('\u{2f5f}', "玉"),
    ('\u{2f60}', "瓜"),
    ('\u{2f61}', "瓦"),
    ('\u{2f62}', "甘"),
    ('\u{2f63}', "生"),
    ('\u{2f64}', "用"),
    ('\u{2f65}', "田"),
    ('\u{2f66}', "疋"),
    ('\u{2f67}', "疒"),
    ('\u{2f68}', "癶"),
    ('\u{2f69}', "白"),
    ('\u{2f6a}', "皮"),
    ('\u{2f6b}', "皿"),
    ('\u{2f6c}', "目"),
    ('\u{2f6d}', "矛"),
    ('\u{2f6e}', "矢"),
    ('\u{2f6f}', "石"),
    ('\u{2f70}', "示"),
    ('\u{2f71}', "禸"),
    ('\u{2f72}', "禾"),
    ('\u{2f73}', "穴"),
    ('\u{2f74}', "立"),
    ('\u{2f75}', "竹"),
    ('\u{2f76}', "米"),
    ('\u{2f77}', "糸"),
    ('\u{2f78}', "缶"),
    ('\u{2f79}', "网"),
    ('\u{2f7a}', "羊"),
    ('\u{2f7b}', "羽"),
    ('\u{2f7c}', "老"),
    ('\u{2f7d}', "而"),
    ('\u{2f7e}', "耒"),
    ('\u{2f7f}', "耳"),
    ('\u{2f80}', "聿"),
    ('\u{2f81}', "肉"),
    ('\u{2f82}', "臣"),
    ('\u{2f83}', "自"),
    ('\u{2f84}', "至"),
    ('\u{2f85}', "臼"),
    ('\u{2f86}', "舌"),
    ('\u{2f87}', "舛"),
    ('\u{2f88}', "舟"),
    ('\u{2f89}', "艮"),
    ('\u{2f8a}', "色"),
    ('\u{2f8b}', "艸"),
    ('\u{2f8c}', "虍"),
    ('\u{2f8d}', "虫"),
    ('\u{2f8e}', "血"),
    ('\u{2f8f}', "行"),
    ('\u{2f90}', "衣"),
    ('\u{2f91}', "襾"),
    ('\u{2f92}', "見"),
    ('\u{2f93}', "角"),
    ('\u{2f94}', "言"),
    ('\u{2f95}', "谷"),
    ('\u{2f96}', "豆"),
    ('\u{2f97}', "豕"),
    ('\u{2f98}', "豸"),
    ('\u{2f99}', "貝"),
    ('\u{2f9a}', "赤"),
    ('\u{2f9b}', "走"),
    ('\u{2f9c}', "足"),
    ('\u{2f9d}', "身"),
    ('\u{2f9e}', "車"),
    ('\u{2f9f}', "辛"),
    ('\u{2fa0}', "辰"),
    ('\u{2fa1}', "辵"),
    ('\u{2fa2}', "邑"),
    ('\u{2fa3}', "酉"),
    ('\u{2fa4}', "釆"),
    ('\u{2fa5}', "里"),
    ('\u{2fa6}', "金"),
    ('\u{2fa7}', "長"),
    ('\u{2fa8}', "門"),
    ('\u{2fa9}', "阜"),
    ('\u{2faa}', "隶"),
    ('\u{2fab}', "隹"),
    ('\u{2fac}', "雨"),
    ('\u{2fad}', "靑"),
    ('\u{2fae}', "非"),
    ('\u{2faf}', "面"),
    ('\u{2fb0}', "革"),
    ('\u{2fb1}', "韋"),
    ('\u{2fb2}', "韭"),
    ('\u{2fb3}', "音"),
    ('\u{2fb4}', "頁"),
    ('\u{2fb5}', "風"),
    ('\u{2fb6}', "飛"),
    ('\u{2fb7}', "食"),
    ('\u{2fb8}', "首"),
    ('\u{2fb9}', "香"),
    ('\u{2fba}', "馬"),
    ('\u{2fbb}', "骨"),
    ('\u{2fbc}', "高"),
    ('\u{2fbd}', "髟"),
    ('\u{2fbe}', "鬥"),
    ('\u{2fbf}', "鬯"),
    ('\u{2fc0}', "鬲"),
    ('\u{2fc1}', "鬼"),
    ('\u{2fc2}', "魚"),
    ('\u{2fc3}', "鳥"),
    ('\u{2fc4}', "鹵"),
    ('\u{2fc5}', "鹿"),
    ('\u{2fc6}', "麥"),
    ('\u{2fc7}', "麻"),
    ('\u{2fc8}', "黃"),
    ('\u{2fc9}', "黍"),
    ('\u{2fca}', "黑"),
    ('\u{2fcb}', "黹"),
    ('\u{2fcc}', "黽"),
    ('\u{2fcd}', "鼎"),
    ('\u{2fce}', "鼓"),
    ('\u{2fcf}', "鼠"),
    ('\u{2fd0}', "鼻"),
    ('\u{2fd1}', "齊"),
    ('\u{2fd2}', "齒"),
    ('\u{2fd3}', "龍"),
    ('\u{2fd4}', "龜"),
    ('\u{2fd5}', "龠"),
];
