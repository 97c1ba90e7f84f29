// Generated by mojinorm_codegen from mathematical-alphanumerics.json. Do not edit by hand.

/// Mathematical styled letters and digits mapped to their plain
/// counterparts.
pub(crate) const MATHEMATICAL_ALPHANUMERICS_MAPPINGS: &[(char, &str)] = &[
    ('\u{1d400}', "A"),
    ('\u{1d401}', "B"),
    ('\u{1d402}', "C"),
    ('\u{1d403}', "D"),
    ('\u{1d404}', "E"),
    ('\u{1d405}', "F"),
    ('\u{1d406}', "G"),
    ('\u{1d407}', "H"),
    ('\u{1d408}', "I"),
    ('\u{1d409}', "J"),
    ('\u{1d40a}', "K"),
    ('\u{1d40b}', "L"),
    ('\u{1d40c}', "M"),
    ('\u{1d40d}', "N"),
    ('\u{1d40e}', "O"),
    ('\u{1d40f}', "P"),
    ('\u{1d410}', "Q"),
    ('\u{1d411}', "R"),
    ('\u{1d412}', "S"),
    ('\u{1d413}', "T"),
    ('\u{1d414}', "U"),
    ('\u{1d415}', "V"),
    ('\u{1d416}', "W"),
    ('\u{1d417}', "X"),
    ('\u{1d418}', "Y"),
    ('\u{1d419}', "Z"),
    ('\u{1d41a}', "a"),
    ('\u{1d41b}', "b"),
    ('\u{1d41c}', "c"),
    ('\u{1d41d}', "d"),
    ('\u{1d41e}', "e"),
    ('\u{1d41f}', "f"),
    ('\u{1d420}', "g"),
    ('\u{1d421}', "h"),
    ('\u{1d422}', "i"),
    ('\u{1d423}', "j"),
    ('\u{1d424}', "k"),
    ('\u{1d425}', "l"),
    ('\u{1d426}', "m"),
    ('\u{1d427}', "n"),
    ('\u{1d428}', "o"),
    ('\u{1d429}', "p"),
    ('\u{1d42a}', "q"),
    ('\u{1d42b}', "r"),
    ('\u{1d42c}', "s"),
    ('\u{1d42d}', "t"),
    ('\u{1d42e}', "u"),
    ('\u{1d42f}', "v"),
    ('\u{1d430}', "w"),
    ('\u{1d431}', "x"),
    ('\u{1d432}', "y"),
    ('\u{1d433}', "z"),
    ('\u{1d434}', "A"),
    ('\u{1d435}', "B"),
    ('\u{1d436}', "C"),
    ('\u{1d437}', "D"),
    ('\u{1d438}', "E"),
    ('\u{1d439}', "F"),
    ('\u{1d43a}', "G"),
    ('\u{1d43b}', "H"),
    ('\u{1d43c}', "I"),
    ('\u{1d43d}', "J"),
    ('\u{1d43e}', "K"),
    ('\u{1d43f}', "L"),
    ('\u{1d440}', "M"),
    ('\u{1d441}', "N"),
    ('\u{1d442}', "O"),
    ('\u{1d443}', "P"),
    ('\u{1d444}', "Q"),
    ('\u{1d445}', "R"),
    ('\u{1d446}', "S"),
    ('\u{1d447}', "T"),
    ('\u{1d448}', "U"),
    ('\u{1d449}', "V"),
    ('\u{1d44a}', "W"),
    ('\u{1d44b}', "X"),
    ('\u{1d44c}', "Y"),
    ('\u{1d44d}', "Z"),
    ('\u{1d44e}', "a"),
    ('\u{1d44f}', "b"),
    ('\u{1d450}', "c"),
    ('\u{1d451}', "d"),
    ('\u{1d452}', "e"),
    ('\u{1d453}', "f"),
    ('\u{1d454}', "g"),
    ('\u{1d456}', "i"),
    ('\u{1d457}', "j"),
    ('\u{1d458}', "k"),
    ('\u{1d459}', "l"),
    ('\u{1d45a}', "m"),
    ('\u{1d45b}', "n"),
    ('\u{1d45c}', "o"),
    ('\u{1d45d}', "p"),
    ('\u{1d45e}', "q"),
    ('\u{1d45f}', "r"),
    ('\u{1d460}', "s"),
    ('\u{1d461}', "t"),
    ('\u{1d462}', "u"),
    ('\u{1d463}', "v"),
    ('\u{1d464}', "w"),
    ('\u{1d465}', "x"),
    ('\u{1d466}', "y"),
    ('\u{1d467}', "z"),
    ('\u{1d468}', "A"),
    ('\u{1d469}', "B"),
    ('\u{1d46a}', "C"),
    ('\u{1d46b}', "D"),
    ('\u{1d46c}', "E"),
    ('\u{1d46d}', "F"),
    ('\u{1d46e}', "G"),
    ('\u{1d46f}', "H"),
    ('\u{1d470}', "I"),
    ('\u{1d471}', "J"),
    ('\u{1d472}', "K"),
    ('\u{1d473}', "L"),
    ('\u{1d474}', "M"),
    ('\u{1d475}', "N"),
    ('\u{1d476}', "O"),
    ('\u{1d477}', "P"),
    ('\u{1d478}', "Q"),
    ('\u{1d479}', "R"),
    ('\u{1d47a}', "S"),
    ('\u{1d47b}', "T"),
    ('\u{1d47c}', "U"),
    ('\u{1d47d}', "V"),
    ('\u{1d47e}', "W"),
    ('\u{1d47f}', "X"),
    ('\u{1d480}', "Y"),
    ('\u{1d481}', "Z"),
    ('\u{1d482}', "a"),
    ('\u{1d483}', "b"),
    ('\u{1d484}', "c"),
    ('\u{1d485}', "d"),
    ('\u{1d486}', "e"),
    ('\u{1d487}', "f"),
    ('\u{1d488}', "g"),
    ('\u{1d489}', "h"),
    ('\u{1d48a}', "i"),
    ('\u{1d48b}', "j"),
    ('\u{1d48c}', "k"),
    ('\u{1d48d}', "l"),
    ('\u{1d48e}', "m"),
    ('\u{1d48f}', "n"),
    ('\u{1d490}', "o"),
    ('\u{1d491}', "p"),
    ('\u{1d492}', "q"),
    ('\u{1d493}', "r"),
    ('\u{1d494}', "s"),
    ('\u{1d495}', "t"),
    ('\u{1d496}', "u"),
    ('\u{1d497}', "v"),
    ('\u{1d498}', "w"),
    ('\u{1d499}', "x"),
    ('\u{1d49a}', "y"),
    ('\u{1d49b}', "z"),
    ('\u{1d49c}', "A"),
    ('\u{1d49e}', "C"),
    ('\u{1d49f}', "D"),
    ('\u{1d4a2}', "G"),
    ('\u{1d4a5}', "J"),
    ('\u{1d4a6}', "K"),
    ('\u{1d4a9}', "N"),
    ('\u{1d4aa}', "O"),
    ('\u{1d4ab}', "P"),
    ('\u{1d4ac}', "Q"),
    ('\u{1d4ae}', "S"),
    ('\u{1d4af}', "T"),
    ('\u{1d4b0}', "U"),
    ('\u{1d4b1}', "V"),
    ('\u{1d4b2}', "W"),
    ('\u{1d4b3}', "X"),
    ('\u{1d4b4}', "Y"),
    ('\u{1d4b5}', "Z"),
    ('\u{1d4b6}', "a"),
    ('\u{1d4b7}', "b"),
    ('\u{1d4b8}', "c"),
    ('\u{1d4b9}', "d"),
    ('\u{1d4bb}', "f"),
    ('\u{1d4bd}', "h"),
    ('\u{1d4be}', "i"),
    ('\u{1d4bf}', "j"),
    ('\u{1d4c0}', "k"),
    ('\u{1d4c1}', "l"),
    ('\u{1d4c2}', "m"),
    ('\u{1d4c3}', "n"),
    ('\u{1d4c5}', "p"),
    ('\u{1d4c6}', "q"),
    ('\u{1d4c7}', "r"),
    ('\u{1d4c8}', "s"),
    ('\u{1d4c9}', "t"),
    ('\u{1d4ca}', "u"),
    ('\u{1d4cb}', "v"),
    ('\u{1d4cc}', "w"),
    ('\u{1d4cd}', "x"),
    ('\u{1d4ce}', "y"),
    ('\u{1d4cf}', "z"),
    ('\u{1d4d0}', "A"),
    ('\u{1d4d1}', "B"),
    ('\u{1d4d2}', "C"),
    ('\u{1d4d3}', "D"),
    ('\u{1d4d4}', "E"),
    ('\u{1d4d5}', "F"),
    ('\u{1d4d6}', "G"),
    ('\u{1d4d7}', "H"),
    ('\u{1d4d8}', "I"),
    ('\u{1d4d9}', "J"),
    ('\u{1d4da}', "K"),
    ('\u{1d4db}', "L"),
    ('\u{1d4dc}', "M"),
    ('\u{1d4dd}', "N"),
    ('\u{1d4de}', "O"),
    ('\u{1d4df}', "P"),
    ('\u{1d4e0}', "Q"),
    ('\u{1d4e1}', "R"),
    ('\u{1d4e2}', "S"),
    ('\u{1d4e3}', "T"),
    ('\u{1d4e4}', "U"),
    ('\u{1d4e5}', "V"),
    ('\u{1d4e6}', "W"),
    ('\u{1d4e7}', "X"),
    ('\u{1d4e8}', "Y"),
    ('\u{1d4e9}', "Z"),
    ('\u{1d4ea}', "a"),
    ('\u{1d4eb}', "b"),
    ('\u{1d4ec}', "c"),
    ('\u{1d4ed}', "d"),
    ('\u{1d4ee}', "e"),
    ('\u{1d4ef}', "f"),
    ('\u{1d4f0}', "g"),
    ('\u{1d4f1}', "h"),
    ('\u{1d4f2}', "i"),
    ('\u{1d4f3}', "j"),
    ('\u{1d4f4}', "k"),
    ('\u{1d4f5}', "l"),
    ('\u{1d4f6}', "m"),
    ('\u{1d4f7}', "n"),
    ('\u{1d4f8}', "o"),
    ('\u{1d4f9}', "p"),
    ('\u{1d4fa}', "q"),
    ('\u{1d4fb}', "r"),
    ('\u{1d4fc}', "s"),
    ('\u{1d4fd}', "t"),
    ('\u{1d4fe}', "u"),
    ('\u{1d4ff}', "v"),
    ('\u{1d500}', "w"),
    ('\u{1d501}', "x"),
    ('\u{1d502}', "y"),
    ('\u{1d503}', "z"),
    ('\u{1d504}', "A"),
    ('\u{1d505}', "B"),
    ('\u{1d507}', "D"),
    ('\u{1d508}', "E"),
    ('\u{1d509}', "F"),
    ('\u{1d50a}', "G"),
    ('\u{1d50d}', "J"),
    ('\u{1d50e}', "K"),
    ('\u{1d50f}', "L"),
    ('\u{1d510}', "M"),
    ('\u{1d511}', "N"),
    ('\u{1d512}', "O"),
    ('\u{1d513}', "P"),
    ('\u{1d514}', "Q"),
    ('\u{1d516}', "S"),
    ('\u{1d517}', "T"),
    ('\u{1d518}', "U"),
    ('\u{1d519}', "V"),
    ('\u{1d51a}', "W"),
    ('\u{1d51b}', "X"),
    ('\u{1d51c}', "Y"),
    ('\u{1d51e}', "a"),
    ('\u{1d51f}', "b"),
    ('\u{1d520}', "c"),
    ('\u{1d521}', "d"),
    ('\u{1d522}', "e"),
    ('\u{1d523}', "f"),
    ('\u{1d524}', "g"),
    ('\u{1d525}', "h"),
    ('\u{1d526}', "i"),
    ('\u{1d527}', "j"),
    ('\u{1d528}', "k"),
    ('\u{1d529}', "l"),
    ('\u{1d52a}', "m"),
    ('\u{1d52b}', "n"),
    ('\u{1d52c}', "o"),
    ('\u{1d52d}', "p"),
    ('\u{1d52e}', "q"),
    ('\u{1d52f}', "r"),
    ('\u{1d530}', "s"),
    ('\u{1d531}', "t"),
    ('\u{1d532}', "u"),
    ('\u{1d533}', "v"),
    ('\u{1d534}', "w"),
    ('\u{1d535}', "x"),
    ('\u{1d536}', "y"),
    ('\u{1d537}', "z"),
    ('\u{1d538}', "A"),
    ('\u{1d539}', "B"),
    ('\u{1d53b}', "D"),
    ('\u{1d53c}', "E"),
    ('\u{1d53d}', "F"),
    ('\u{1d53e}', "G"),
    ('\u{1d540}', "I"),
    ('\u{1d541}', "J"),
    ('\u{1d542}', "K"),
    ('\u{1d543}', "L"),
    ('\u{1d544}', "M"),
    ('\u{1d546}', "O"),
    ('\u{1d54a}', "S"),
    ('\u{1d54b}', "T"),
    ('\u{1d54c}', "U"),
    ('\u{1d54d}', "V"),
    ('\u{1d54e}', "W"),
    ('\u{1d54f}', "X"),
    ('\u{1d550}', "Y"),
    ('\u{1d552}', "a"),
    ('\u{1d553}', "b"),
    ('\u{1d554}', "c"),
    ('\u{1d555}', "d"),
    ('\u{1d556}', "e"),
    ('\u{1d557}', "f"),
    ('\u{1d558}', "g"),
    ('\u{1d559}', "h"),
    ('\u{1d55a}', "i"),
    ('\u{1d55b}', "j"),
    ('\u{1d55c}', "k"),
    ('\u{1d55d}', "l"),
    ('\u{1d55e}', "m"),
    ('\u{1d55f}', "n"),
    ('\u{1d560}', "o"),
    ('\u{1d561}', "p"),
    ('\u{1d562}', "q"),
    ('\u{1d563}', "r"),
    ('\u{1d564}', "s"),
    ('\u{1d565}', "t"),
    ('\u{1d566}', "u"),
    ('\u{1d567}', "v"),
    ('\u{1d568}', "w"),
    ('\u{1d569}', "x"),
    ('\u{1d56a}', "y"),
    ('\u{1d56b}', "z"),
    ('\u{1d56c}', "A"),
    ('\u{1d56d}', "B"),
    ('\u{1d56e}', "C"),
    ('\u{1d56f}', "D"),
    ('\u{1d570}', "E"),
    ('\u{1d571}', "F"),
    ('\u{1d572}', "G"),
    ('\u{1d573}', "H"),
    ('\u{1d574}', "I"),
    ('\u{1d575}', "J"),
    ('\u{1d576}', "K"),
    ('\u{1d577}', "L"),
    ('\u{1d578}', "M"),
    ('\u{1d579}', "N"),
    ('\u{1d57a}', "O"),
    ('\u{1d57b}', "P"),
    ('\u{1d57c}', "Q"),
    ('\u{1d57d}', "R"),
    ('\u{1d57e}', "S"),
    ('\u{1d57f}', "T"),
    ('\u{1d580}', "U"),
    ('\u{1d581}', "V"),
    ('\u{1d582}', "W"),
    ('\u{1d583}', "X"),
    ('\u{1d584}', "Y"),
    ('\u{1d585}', "Z"),
    ('\u{1d586}', "a"),
    ('\u{1d587}', "b"),
    ('\u{1d588}', "c"),
    ('\u{1d589}', "d"),
    ('\u{1d58a}', "e"),
    ('\u{1d58b}', "f"),
    ('\u{1d58c}', "g"),
    ('\u{1d58d}', "h"),
    ('\u{1d58e}', "i"),
    ('\u{1d58f}', "j"),
    ('\u{1d590}', "k"),
    ('\u{1d591}', "l"),
    ('\u{1d592}', "m"),
    ('\u{1d593}', "n"),
    ('\u{1d594}', "o"),
    ('\u{1d595}', "p"),
    ('\u{1d596}', "q"),
    ('\u{1d597}', "r"),
    ('\u{1d598}', "s"),
    ('\u{1d599}', "t"),
    ('\u{1d59a}', "u"),
    ('\u{1d59b}', "v"),
    ('\u{1d59c}', "w"),
    ('\u{1d59d}', "x"),
    ('\u{1d59e}', "y"),
    ('\u{1d59f}', "z"),
    ('\u{1d5a0}', "A"),
    ('\u{1d5a1}', "B"),
    ('\u{1d5a2}', "C"),
    ('\u{1d5a3}', "D"),
    ('\u{1d5a4}', "E"),
    ('\u{1d5a5}', "F"),
    ('\u{1d5a6}', "G"),
    ('\u{1d5a7}', "H"),
    ('\u{1d5a8}', "I"),
    ('\u{1d5a9}', "J"),
    ('\u{1d5aa}', "K"),
    ('\u{1d5ab}', "L"),
    ('\u{1d5ac}', "M"),
    ('\u{1d5ad}', "N"),
    ('\u{1d5ae}', "O"),
    ('\u{1d5af}', "P"),
    ('\u{1d5b0}', "Q"),
    ('\u{1d5b1}', "R"),
    ('\u{1d5b2}', "S"),
    ('\u{1d5b3}', "T"),
    ('\u{1d5b4}', "U"),
    ('\u{1d5b5}', "V"),
    ('\u{1d5b6}', "W"),
    ('\u{1d5b7}', "X"),
    ('\u{1d5b8}', "Y"),
    ('\u{1d5b9}', "Z"),
    ('\u{1d5ba}', "a"),
    ('\u{1d5bb}', "b"),
    ('\u{1d5bc}', "c"),
    ('\u{1d5bd}', "d"),
    ('\u{1d5be}', "e"),
    ('\u{1d5bf}', "f"),
    ('\u{1d5c0}', "g"),
    ('\u{1d5c1}', "h"),
    ('\u{1d5c2}', "i"),
    ('\u{1d5c3}', "j"),
    ('\u{1d5c4}', "k"),
    ('\u{1d5c5}', "l"),
    ('\u{1d5c6}', "m"),
    ('\u{1d5c7}', "n"),
    ('\u{1d5c8}', "o"),
    ('\u{1d5c9}', "p"),
    ('\u{1d5ca}', "q"),
    ('\u{1d5cb}', "r"),
    ('\u{1d5cc}', "s"),
    ('\u{1d5cd}', "t"),
    ('\u{1d5ce}', "u"),
    ('\u{1d5cf}', "v"),
    ('\u{1d5d0}', "w"),
    ('\u{1d5d1}', "x"),
    ('\u{1d5d2}', "y"),
    ('\u{1d5d3}', "z"),
    ('\u{1d5d4}', "A"),
    ('\u{1d5d5}', "B"),
    ('\u{1d5d6}', "C"),
    ('\u{1d5d7}', "D"),
    ('\u{1d5d8}', "E"),
    ('\u{1d5d9}', "F"),
    ('\u{1d5da}', "G"),
    ('\u{1d5db}', "H"),
    ('\u{1d5dc}', "I"),
    ('\u{1d5dd}', "J"),
    ('\u{1d5de}', "K"),
    ('\u{1d5df}', "L"),
    ('\u{1d5e0}', "M"),
    ('\u{1d5e1}', "N"),
    ('\u{1d5e2}', "O"),
    ('\u{1d5e3}', "P"),
    ('\u{1d5e4}', "Q"),
    ('\u{1d5e5}', "R"),
    ('\u{1d5e6}', "S"),
    ('\u{1d5e7}', "T"),
    ('\u{1d5e8}', "U"),
    ('\u{1d5e9}', "V"),
    ('\u{1d5ea}', "W"),
    ('\u{1d5eb}', "X"),
    ('\u{1d5ec}', "Y"),
    ('\u{1d5ed}', "Z"),
    ('\u{1d5ee}', "a"),
    ('\u{1d5ef}', "b"),
    ('\u{1d5f0}', "c"),
    ('\u{1d5f1}', "d"),
    ('\u{1d5f2}', "e"),
    ('\u{1d5f3}', "f"),
    ('\u{1d5f4}', "g"),
    ('\u{1d5f5}', "h"),
    ('\u{1d5f6}', "i"),
    ('\u{1d5f7}', "j"),
    ('\u{1d5f8}', "k"),
    ('\u{1d5f9}', "l"),
    ('\u{1d5fa}', "m"),
    ('\u{1d5fb}', "n"),
    ('\u{1d5fc}', "o"),
    ('\u{1d5fd}', "p"),
    ('\u{1d5fe}', "q"),
    ('\u{1d5ff}', "r"),
    ('\u{1d600}', "s"),
    ('\u{1d601}', "t"),
    ('\u{1d602}', "u"),
    ('\u{1d603}', "v"),
    ('\u{1d604}', "w"),
    ('\u{1d605}', "x"),
    ('\u{1d606}', "y"),
    ('\u{1d607}', "z"),
    ('\u{1d608}', "A"),
    ('\u{1d609}', "B"),
    ('\u{1d60a}', "C"),
    ('\u{1d60b}', "D"),
    ('\u{1d60c}', "E"),
    ('\u{1d60d}', "F"),
    ('\u{1d60e}', "G"),
    ('\u{1d60f}', "H"),
    ('\u{1d610}', "I"),
    ('\u{1d611}', "J"),
    ('\u{1d612}', "K"),
    ('\u{1d613}', "L"),
    ('\u{1d614}', "M"),
    ('\u{1d615}', "N"),
    ('\u{1d616}', "O"),
    ('\u{1d617}', "P"),
    ('\u{1d618}', "Q"),
    ('\u{1d619}', "R"),
    ('\u{1d61a}', "S"),
    ('\u{1d61b}', "T"),
    ('\u{1d61c}', "U"),
    ('\u{1d61d}', "V"),
    ('\u{1d61e}', "W"),
    ('\u{1d61f}', "X"),
    ('\u{1d620}', "Y"),
    ('\u{1d621}', "Z"),
    ('\u{1d622}', "a"),
    ('\u{1d623}', "b"),
    ('\u{1d624}', "c"),
    ('\u{1d625}', "d"),
    ('\u{1d626}', "e"),
    ('\u{1d627}', "f"),
    ('\u{1d628}', "g"),
    ('\u{1d629}', "h"),
    ('\u{1d62a}', "i"),
    ('\u{1d62b}', "j"),
    ('\u{1d62c}', "k"),
    ('\u{1d62d}', "l"),
    ('\u{1d62e}', "m"),
    ('\u{1d62f}', "n"),
    ('\u{1d630}', "o"),
    ('\u{1d631}', "p"),
    ('\u{1d632}', "q"),
    ('\u{1d633}', "r"),
    ('\u{1d634}', "s"),
    ('\u{1d635}', "t"),
    ('\u{1d636}', "u"),
    ('\u{1d637}', "v"),
    ('\u{1d638}', "w"),
    ('\u{1d639}', "x"),
    ('\u{1d63a}', "y"),
    ('\u{1d63b}', "z"),
    ('\u{1d63c}', "A"),
    ('\u{1d63d}', "B"),
    ('\u{1d63e}', "C"),
    ('\u{1d63f}', "D"),
    ('\u{1d640}', "E"),
    ('\u{1d641}', "F"),
    ('\u{1d642}', "G"),
    ('\u{1d643}', "H"),
    ('\u{1d644}', "I"),
    ('\u{1d645}', "J"),
    ('\u{1d646}', "K"),
    ('\u{1d647}', "L"),
    ('\u{1d648}', "M"),
    ('\u{1d649}', "N"),
    ('\u{1d64a}', "O"),
    ('\u{1d64b}', "P"),
    ('\u{1d64c}', "Q"),
    ('\u{1d64d}', "R"),
    ('\u{1d64e}', "S"),
    ('\u{1d64f}', "T"),
    ('\u{1d650}', "U"),
    ('\u{1d651}', "V"),
    ('\u{1d652}', "W"),
    ('\u{1d653}', "X"),
    ('\u{1d654}', "Y"),
    ('\u{1d655}', "Z"),
    ('\u{1d656}', "a"),
    ('\u{1d657}', "b"),
    ('\u{1d658}', "c"),
    ('\u{1d659}', "d"),
    ('\u{1d65a}', "e"),
    ('\u{1d65b}', "f"),
    ('\u{1d65c}', "g"),
    ('\u{1d65d}', "h"),
    ('\u{1d65e}', "i"),
    ('\u{1d65f}', "j"),
    ('\u{1d660}', "k"),
    ('\u{1d661}', "l"),
    ('\u{1d662}', "m"),
    ('\u{1d663}', "n"),
    ('\u{1d664}', "o"),
    ('\u{1d665}', "p"),
    ('\u{1d666}', "q"),
    ('\u{1d667}', "r"),
    ('\u{1d668}', "s"),
    ('\u{1d669}', "t"),
    ('\u{1d66a}', "u"),
    ('\u{1d66b}', "v"),
    ('\u{1d66c}', "w"),
    ('\u{1d66d}', "x"),
    ('\u{1d66e}', "y"),
    ('\u{1d66f}', "z"),
    ('\u{1d670}', "A"),
    ('\u{1d671}', "B"),
    ('\u{1d672}', "C"),
    ('\u{1d673}', "D"),
    ('\u{1d674}', "E"),
    ('\u{1d675}', "F"),
    ('\u{1d676}', "G"),
    ('\u{1d677}', "H"),
    ('\u{1d678}', "I"),
    ('\u{1d679}', "J"),
    ('\u{1d67a}', "K"),
    ('\u{1d67b}', "L"),
    ('\u{1d67c}', "M"),
    ('\u{1d67d}', "N"),
    ('\u{1d67e}', "O"),
    ('\u{1d67f}', "P"),
    ('\u{1d680}', "Q"),
    ('\u{1d681}', "R"),
    ('\u{1d682}', "S"),
    ('\u{1d683}', "T"),
    ('\u{1d684}', "U"),
    ('\u{1d685}', "V"),
    ('\u{1d686}', "W"),
    ('\u{1d687}', "X"),
    ('\u{1d688}', "Y"),
    ('\u{1d689}', "Z"),
    ('\u{1d68a}', "a"),
    ('\u{1d68b}', "b"),
    ('\u{1d68c}', "c"),
    ('\u{1d68d}', "d"),
    ('\u{1d68e}', "e"),
    ('\u{1d68f}', "f"),
    ('\u{1d690}', "g"),
    ('\u{1d691}', "h"),
    ('\u{1d692}', "i"),
    ('\u{1d693}', "j"),
    ('\u{1d694}', "k"),
    ('\u{1d695}', "l"),
    ('\u{1d696}', "m"),
    ('\u{1d697}', "n"),
    ('\u{1d698}', "o"),
    ('\u{1d699}', "p"),
    ('\u{1d69a}', "q"),
    ('\u{1d69b}', "r"),
    ('\u{1d69c}', "s"),
    ('\u{1d69d}', "t"),
    ('\u{1d69e}', "u"),
    ('\u{1d69f}', "v"),
    ('\u{1d6a0}', "w"),
    ('\u{1d6a1}', "x"),
    ('\u{1d6a2}', "y"),
    ('\u{1d6a3}', "z"),
    ('\u{1d6a4}', "\u{0131}"),
    ('\u{1d6a5}', "\u{0237}"),
    ('\u{1d6a8}', "\u{0391}"),
    ('\u{1d6a9}', "\u{0392}"),
    ('\u{1d6aa}', "\u{0393}"),
    ('\u{1d6ab}', "\u{0394}"),
    ('\u{1d6ac}', "\u{0395}"),
    ('\u{1d6ad}', "\u{0396}"),
    ('\u{1d6ae}', "\u{0397}"),
    ('\u{1d6af}', "\u{0398}"),
    ('\u{1d6b0}', "\u{0399}"),
    ('\u{1d6b1}', "\u{039a}"),
    ('\u{1d6b2}', "\u{039b}"),
    ('\u{1d6b3}', "\u{039c}"),
    ('\u{1d6b4}', "\u{039d}"),
    ('\u{1d6b5}', "\u{039e}"),
    ('\u{1d6b6}', "\u{039f}"),
    ('\u{1d6b7}', "\u{03a0}"),
    ('\u{1d6b8}', "\u{03a1}"),
    ('\u{1d6b9}', "\u{0398}"),
    ('\u{1d6ba}', "\u{03a3}"),
    ('\u{1d6bb}', "\u{03a4}"),
    ('\u{1d6bc}', "\u{03a5}"),
    ('\u{1d6bd}', "\u{03a6}"),
    ('\u{1d6be}', "\u{03a7}"),
    ('\u{1d6bf}', "\u{03a8}"),
    ('\u{1d6c0}', "\u{03a9}"),
    ('\u{1d6c1}', "\u{2207}"),
    ('\u{1d6c2}', "\u{03b1}"),
    ('\u{1d6c3}', "\u{03b2}"),
    ('\u{1d6c4}', "\u{03b3}"),
    ('\u{1d6c5}', "\u{03b4}"),
    ('\u{1d6c6}', "\u{03b5}"),
    ('\u{1d6c7}', "\u{03b6}"),
    ('\u{1d6c8}', "\u{03b7}"),
    ('\u{1d6c9}', "\u{03b8}"),
    ('\u{1d6ca}', "\u{03b9}"),
    ('\u{1d6cb}', "\u{03ba}"),
    ('\u{1d6cc}', "\u{03bb}"),
    ('\u{1d6cd}', "\u{03bc}"),
    ('\u{1d6ce}', "\u{03bd}"),
    ('\u{1d6cf}', "\u{03be}"),
    ('\u{1d6d0}', "\u{03bf}"),
    ('\u{1d6d1}', "\u{03c0}"),
    ('\u{1d6d2}', "\u{03c1}"),
    ('\u{1d6d3}', "\u{03c2}"),
    ('\u{1d6d4}', "\u{03c3}"),
    ('\u{1d6d5}', "\u{03c4}"),
    ('\u{1d6d6}', "\u{03c5}"),
    ('\u{1d6d7}', "\u{03c6}"),
    ('\u{1d6d8}', "\u{03c7}"),
    ('\u{1d6d9}', "\u{03c8}"),
    ('\u{1d6da}', "\u{03c9}"),
    ('\u{1d6db}', "\u{2202}"),
    ('\u{1d6dc}', "\u{03b5}"),
    ('\u{1d6dd}', "\u{03b8}"),
    ('\u{1d6de}', "\u{03ba}"),
    ('\u{1d6df}', "\u{03c6}"),
    ('\u{1d6e0}', "\u{03c1}"),
    ('\u{1d6e1}', "\u{03c0}"),
    ('\u{1d6e2}', "\u{0391}"),
    ('\u{1d6e3}', "\u{0392}"),
    ('\u{1d6e4}', "\u{0393}"),
    ('\u{1d6e5}', "\u{0394}"),
    ('\u{1d6e6}', "\u{0395}"),
    ('\u{1d6e7}', "\u{0396}"),
    ('\u{1d6e8}', "\u{0397}"),
    ('\u{1d6e9}', "\u{0398}"),
    ('\u{1d6ea}', "\u{0399}"),
    ('\u{1d6eb}', "\u{039a}"),
    ('\u{1d6ec}', "\u{039b}"),
    ('\u{1d6ed}', "\u{039c}"),
    ('\u{1d6ee}', "\u{039d}"),
    ('\u{1d6ef}', "\u{039e}"),
    ('\u{1d6f0}', "\u{039f}"),
    ('\u{1d6f1}', "\u{03a0}"),
    ('\u{1d6f2}', "\u{03a1}"),
    ('\u{1d6f3}', "\u{0398}"),
    ('\u{1d6f4}', "\u{03a3}"),
    ('\u{1d6f5}', "\u{03a4}"),
    ('\u{1d6f6}', "\u{03a5}"),
    ('\u{1d6f7}', "\u{03a6}"),
    ('\u{1d6f8}', "\u{03a7}"),
    ('\u{1d6f9}', "\u{03a8}"),
    ('\u{1d6fa}', "\u{03a9}"),
    ('\u{1d6fb}', "\u{2207}"),
    ('\u{1d6fc}', "\u{03b1}"),
    ('\u{1d6fd}', "\u{03b2}"),
    ('\u{1d6fe}', "\u{03b3}"),
    ('\u{1d6ff}', "\u{03b4}"),
    ('\u{1d700}', "\u{03b5}"),
    ('\u{1d701}', "\u{03b6}"),
    ('\u{1d702}', "\u{03b7}"),
    ('\u{1d703}', "\u{03b8}"),
    ('\u{1d704}', "\u{03b9}"),
    ('\u{1d705}', "\u{03ba}"),
    ('\u{1d706}', "\u{03bb}"),
    ('\u{1d707}', "\u{03bc}"),
    ('\u{1d708}', "\u{03bd}"),
    ('\u{1d709}', "\u{03be}"),
    ('\u{1d70a}', "\u{03bf}"),
    ('\u{1d70b}', "\u{03c0}"),
    ('\u{1d70c}', "\u{03c1}"),
    ('\u{1d70d}', "\u{03c2}"),
    ('\u{1d70e}', "\u{03c3}"),
    ('\u{1d70f}', "\u{03c4}"),
    ('\u{1d710}', "\u{03c5}"),
    ('\u{1d711}', "\u{03c6}"),
    ('\u{1d712}', "\u{03c7}"),
    ('\u{1d713}', "\u{03c8}"),
    ('\u{1d714}', "\u{03c9}"),
    ('\u{1d715}', "\u{2202}"),
    ('\u{1d716}', "\u{03b5}"),
    ('\u{1d717}', "\u{03b8}"),
    ('\u{1d718}', "\u{03ba}"),
    ('\u{1d719}', "\u{03c6}"),
    ('\u{1d71a}', "\u{03c1}"),
    ('\u{1d71b}', "\u{03c0}"),
    ('\u{1d71c}', "\u{0391}"),
    ('\u{1d71d}', "\u{0392}"),
    ('\u{1d71e}', "\u{0393}"),
    ('\u{1d71f}', "\u{0394}"),
    ('\u{1d720}', "\u{0395}"),
    ('\u{1d721}', "\u{0396}"),
    ('\u{1d722}', "\u{0397}"),
    ('\u{1d723}', "\u{0398}"),
    ('\u{1d724}', "\u{0399}"),
    ('\u{1d725}', "\u{039a}"),
    ('\u{1d726}', "\u{039b}"),
    ('\u{1d727}', "\u{039c}"),
    ('\u{1d728}', "\u{039d}"),
    ('\u{1d729}', "\u{039e}"),
    ('\u{1d72a}', "\u{039f}"),
    ('\u{1d72b}', "\u{03a0}"),
    ('\u{1d72c}', "\u{03a1}"),
    ('\u{1d72d}', "\u{0398}"),
    ('\u{1d72e}', "\u{03a3}"),
    ('\u{1d72f}', "\u{03a4}"),
    ('\u{1d730}', "\u{03a5}"),
    ('\u{1d731}', "\u{03a6}"),
    ('\u{1d732}', "\u{03a7}"),
    ('\u{1d733}', "\u{03a8}"),
    ('\u{1d734}', "\u{03a9}"),
    ('\u{1d735}', "\u{2207}"),
    ('\u{1d736}', "\u{03b1}"),
    ('\u{1d737}', "\u{03b2}"),
    ('\u{1d738}', "\u{03b3}"),
    ('\u{1d739}', "\u{03b4}"),
    ('\u{1d73a}', "\u{03b5}"),
    ('\u{1d73b}', "\u{03b6}"),
    ('\u{1d73c}', "\u{03b7}"),
    ('\u{1d73d}', "\u{03b8}"),
    ('\u{1d73e}', "\u{03b9}"),
    ('\u{1d73f}', "\u{03ba}"),
    ('\u{1d740}', "\u{03bb}"),
    ('\u{1d741}', "\u{03bc}"),
    ('\u{1d742}', "\u{03bd}"),
    ('\u{1d743}', "\u{03be}"),
    ('\u{1d744}', "\u{03bf}"),
    ('\u{1d745}', "\u{03c0}"),
    ('\u{1d746}', "\u{03c1}"),
    ('\u{1d747}', "\u{03c2}"),
    ('\u{1d748}', "\u{03c3}"),
    ('\u{1d749}', "\u{03c4}"),
    ('\u{1d74a}', "\u{03c5}"),
    ('\u{1d74b}', "\u{03c6}"),
    ('\u{1d74c}', "\u{03c7}"),
    ('\u{1d74d}', "\u{03c8}"),
    ('\u{1d74e}', "\u{03c9}"),
    ('\u{1d74f}', "\u{2202}"),
    ('\u{1d750}', "\u{03b5}"),
    ('\u{1d751}', "\u{03b8}"),
    ('\u{1d752}', "\u{03ba}"),
    ('\u{1d753}', "\u{03c6}"),
    ('\u{1d754}', "\u{03c1}"),
    ('\u{1d755}', "\u{03c0}"),
    ('\u{1d756}', "\u{0391}"),
    ('\u{1d757}', "\u{0392}"),
    ('\u{1d758}', "\u{0393}"),
    ('\u{1d759}', "\u{0394}"),
    ('\u{1d75a}', "\u{0395}"),
    ('\u{1d75b}', "\u{0396}"),
    ('\u{1d75c}', "\u{0397}"),
    ('\u{1d75d}', "\u{0398}"),
    ('\u{1d75e}', "\u{0399}"),
    ('\u{1d75f}', "\u{039a}"),
    ('\u{1d760}', "\u{039b}"),
    ('\u{1d761}', "\u{039c}"),
    ('\u{1d762}', "\u{039d}"),
    ('\u{1d763}', "\u{039e}"),
    ('\u{1d764}', "\u{039f}"),
    ('\u{1d765}', "\u{03a0}"),
    ('\u{1d766}', "\u{03a1}"),
    ('\u{1d767}', "\u{0398}"),
    ('\u{1d768}', "\u{03a3}"),
    ('\u{1d769}', "\u{03a4}"),
    ('\u{1d76a}', "\u{03a5}"),
    ('\u{1d76b}', "\u{03a6}"),
    ('\u{1d76c}', "\u{03a7}"),
    ('\u{1d76d}', "\u{03a8}"),
    ('\u{1d76e}', "\u{03a9}"),
    ('\u{1d76f}', "\u{2207}"),
    ('\u{1d770}', "\u{03b1}"),
    ('\u{1d771}', "\u{03b2}"),
    ('\u{1d772}', "\u{03b3}"),
    ('\u{1d773}', "\u{03b4}"),
    ('\u{1d774}', "\u{03b5}"),
    ('\u{1d775}', "\u{03b6}"),
    ('\u{1d776}', "\u{03b7}"),
    ('\u{1d777}', "\u{03b8}"),
    ('\u{1d778}', "\u{03b9}"),
    ('\u{1d779}', "\u{03ba}"),
    ('\u{1d77a}', "\u{03bb}"),
    ('\u{1d77b}', "\u{03bc}"),
    ('\u{1d77c}', "\u{03bd}"),
    ('\u{1d77d}', "\u{03be}"),
    ('\u{1d77e}', "\u{03bf}"),
    ('\u{1d77f}', "\u{03c0}"),
    ('\u{1d780}', "\u{03c1}"),
    ('\u{1d781}', "\u{03c2}"),
    ('\u{1d782}', "\u{03c3}"),
    ('\u{1d783}', "\u{03c4}"),
    ('\u{1d784}', "\u{03c5}"),
    ('\u{1d785}', "\u{03c6}"),
    ('\u{1d786}', "\u{03c7}"),
    ('\u{1d787}', "\u{03c8}"),
    ('\u{1d788}', "\u{03c9}"),
    ('\u{1d789}', "\u{2202}"),
    ('\u{1d78a}', "\u{03b5}"),
    ('\u{1d78b}', "\u{03b8}"),
    ('\u{1d78c}', "\u{03ba}"),
    ('\u{1d78d}', "\u{03c6}"),
    ('\u{1d78e}', "\u{03c1}"),
    ('\u{1d78f}', "\u{03c0}"),
    ('\u{1d790}', "\u{0391}"),
    ('\u{1d791}', "\u{0392}"),
    ('\u{1d792}', "\u{0393}"),
    ('\u{1d793}', "\u{0394}"),
    ('\u{1d794}', "\u{0395}"),
    ('\u{1d795}', "\u{0396}"),
    ('\u{1d796}', "\u{0397}"),
    ('\u{1d797}', "\u{0398}"),
    ('\u{1d798}', "\u{0399}"),
    ('\u{1d799}', "\u{039a}"),
    ('\u{1d79a}', "\u{039b}"),
    ('\u{1d79b}', "\u{039c}"),
    ('\u{1d79c}', "\u{039d}"),
    ('\u{1d79d}', "\u{039e}"),
    ('\u{1d79e}', "\u{039f}"),
    ('\u{1d79f}', "\u{03a0}"),
    ('\u{1d7a0}', "\u{03a1}"),
    ('\u{1d7a1}', "\u{0398}"),
    ('\u{1d7a2}', "\u{03a3}"),
    ('\u{1d7a3}', "\u{03a4}"),
    ('\u{1d7a4}', "\u{03a5}"),
    ('\u{1d7a5}', "\u{03a6}"),
    ('\u{1d7a6}', "\u{03a7}"),
    ('\u{1d7a7}', "\u{03a8}"),
    ('\u{1d7a8}', "\u{03a9}"),
    ('\u{1d7a9}', "\u{2207}"),
    ('\u{1d7aa}', "\u{03b1}"),
    ('\u{1d7ab}', "\u{03b2}"),
    ('\u{1d7ac}', "\u{03b3}"),
    ('\u{1d7ad}', "\u{03b4}"),
    ('\u{1d7ae}', "\u{03b5}"),
    ('\u{1d7af}', "\u{03b6}"),
    ('\u{1d7b0}', "\u{03b7}"),
    ('\u{1d7b1}', "\u{03b8}"),
    ('\u{1d7b2}', "\u{03b9}"),
    ('\u{1d7b3}', "\u{03ba}"),
    ('\u{1d7b4}', "\u{03bb}"),
    ('\u{1d7b5}', "\u{03bc}"),
    ('\u{1d7b6}', "\u{03bd}"),
    ('\u{1d7b7}', "\u{03be}"),
    ('\u{1d7b8}', "\u{03bf}"),
    ('\u{1d7b9}', "\u{03c0}"),
    ('\u{1d7ba}', "\u{03c1}"),
    ('\u{1d7bb}', "\u{03c2}"),
    ('\u{1d7bc}', "\u{03c3}"),
    ('\u{1d7bd}', "\u{03c4}"),
    ('\u{1d7be}', "\u{03c5}"),
    ('\u{1d7bf}', "\u{03c6}"),
    ('\u{1d7c0}', "\u{03c7}"),
    ('\u{1d7c1}', "\u{03c8}"),
    ('\u{1d7c2}', "\u{03c9}"),
    ('\u{1d7c3}', "\u{2202}"),
    ('\u{1d7c4}', "\u{03b5}"),
    ('\u{1d7c5}', "\u{03b8}"),
    ('\u{1d7c6}', "\u{03ba}"),
    ('\u{1d7c7}', "\u{03c6}"),
    ('\u{1d7c8}', "\u{03c1}"),
    ('\u{1d7c9}', "\u{03c0}"),
    ('\u{1d7ca}', "\u{03dc}"),
    ('\u{1d7cb}', "\u{03dd}"),
    ('\u{1d7ce}', "0"),
    ('\u{1d7cf}', "1"),
    ('\u{1d7d0}', "2"),
    ('\u{1d7d1}', "3"),
    ('\u{1d7d2}', "4"),
    ('\u{1d7d3}', "5"),
    ('\u{1d7d4}', "6"),
    ('\u{1d7d5}', "7"),
    ('\u{1d7d6}', "8"),
    ('\u{1d7d7}', "9"),
    ('\u{1d7d8}', "0"),
    ('\u{1d7d9}', "1"),
    ('\u{1d7da}', "2"),
    ('\u{1d7db}', "3"),
    ('\u{1d7dc}', "4"),
    ('\u{1d7dd}', "5"),
    ('\u{1d7de}', "6"),
    ('\u{1d7df}', "7"),
    ('\u{1d7e0}', "8"),
    ('\u{1d7e1}', "9"),
    ('\u{1d7e2}', "0"),
    ('\u{1d7e3}', "1"),
    ('\u{1d7e4}', "2"),
    ('\u{1d7e5}', "3"),
    ('\u{1d7e6}', "4"),
    ('\u{1d7e7}', "5"),
    ('\u{1d7e8}', "6"),
    ('\u{1d7e9}', "7"),
    ('\u{1d7ea}', "8"),
    ('\u{1d7eb}', "9"),
    ('\u{1d7ec}', "0"),
    ('\u{1d7ed}', "1"),
    ('\u{1d7ee}', "2"),
    ('\u{1d7ef}', "3"),
    ('\u{1d7f0}', "4"),
    ('\u{1d7f1}', "5"),
    ('\u{1d7f2}', "6"),
    ('\u{1d7f3}', "7"),
    ('\u{1d7f4}', "8"),
    ('\u{1d7f5}', "9"),
    ('\u{1d7f6}', "0"),
    ('\u{1d7f7}', "1"),
    ('\u{1d7f8}', "2"),
    ('\u{1d7f9}', "3"),
    ('\u{1d7fa}', "4"),
    ('\u{1d7fb}', "5"),
    ('\u{1d7fc}', "6"),
    ('\u{1d7fd}', "7"),
    ('\u{1d7fe}', "8"),
    ('\u{1d7ff}', "9"),
];
