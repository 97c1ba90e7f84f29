// Generated by mojinorm_codegen from kanji-old-new-form.json. Do not edit by hand.

/// Old-form kanji to new-form kanji, keyed on their registered
/// ideographic variation sequences.
pub(crate) const KANJI_OLD_NEW_MAPPINGS: &[(&str, &str)] = &[
    ("\u{4e9e}\u{e0100}", "\u{4e9c}\u{e0100}"),
    ("\u{60e1}\u{e0100}", "\u{60aa}\u{e0100}"),
    ("\u{58d3}\u{e0100}", "\u{5727}\u{e0100}"),
    ("\u{570d}\u{e0100}", "\u{56f2}\u{e0100}"),
    ("\u{7232}\u{e0100}", "\u{70ba}\u{e0100}"),
    ("\u{91ab}\u{e0100}", "\u{533b}\u{e0100}"),
    ("\u{58f9}\u{e0100}", "\u{58f1}\u{e0100}"),
    ("\u{7a3b}\u{e0100}", "\u{7a32}\u{e0100}"),
    ("\u{98ee}\u{e0100}", "\u{98f2}\u{e0100}"),
    ("\u{96b1}\u{e0100}", "\u{96a0}\u{e0100}"),
    ("\u{71df}\u{e0100}", "\u{55b6}\u{e0100}"),
    ("\u{69ae}\u{e0100}", "\u{6804}\u{e0100}"),
    ("\u{885e}\u{e0100}", "\u{885b}\u{e0100}"),
    ("\u{9a5b}\u{e0100}", "\u{99c5}\u{e0100}"),
    ("\u{5713}\u{e0100}", "\u{5186}\u{e0100}"),
    ("\u{7de3}\u{e0100}", "\u{7e01}\u{e0100}"),
    ("\u{9e7d}\u{e0100}", "\u{5869}\u{e0100}"),
    ("\u{5967}\u{e0100}", "\u{5965}\u{e0100}"),
    ("\u{61c9}\u{e0100}", "\u{5fdc}\u{e0100}"),
    ("\u{6b50}\u{e0100}", "\u{6b27}\u{e0100}"),
    ("\u{6bc6}\u{e0100}", "\u{6bb4}\u{e0100}"),
    ("\u{6afb}\u{e0100}", "\u{685c}\u{e0100}"),
    ("\u{5047}\u{e0100}", "\u{4eee}\u{e0100}"),
    ("\u{50f9}\u{e0100}", "\u{4fa1}\u{e0100}"),
    ("\u{756b}\u{e0100}", "\u{753b}\u{e0100}"),
    ("\u{6703}\u{e0100}", "\u{4f1a}\u{e0100}"),
    ("\u{58de}\u{e0100}", "\u{58ca}\u{e0100}"),
    ("\u{61f7}\u{e0100}", "\u{61d0}\u{e0100}"),
    ("\u{7e6a}\u{e0100}", "\u{7d75}\u{e0100}"),
    ("\u{64f4}\u{e0100}", "\u{62e1}\u{e0100}"),
    ("\u{6bbc}\u{e0100}", "\u{6bbb}\u{e0100}"),
    ("\u{89ba}\u{e0100}", "\u{899a}\u{e0100}"),
    ("\u{5b78}\u{e0100}", "\u{5b66}\u{e0100}"),
    ("\u{5dbd}\u{e0100}", "\u{5cb3}\u{e0100}"),
    ("\u{6a02}\u{e0100}", "\u{697d}\u{e0100}"),
    ("\u{52f8}\u{e0100}", "\u{52e7}\u{e0100}"),
    ("\u{5377}\u{e0100}", "\u{5dfb}\u{e0100}"),
    ("\u{6b61}\u{e0100}", "\u{6b53}\u{e0100}"),
    ("\u{7f50}\u{e0100}", "\u{7f36}\u{e0100}"),
    ("\u{89c0}\u{e0100}", "\u{89b3}\u{e0100}"),
    ("\u{95dc}\u{e0100}", "\u{95a2}\u{e0100}"),
    ("\u{9677}\u{e0100}", "\u{9665}\u{e0100}"),
    ("\u{5dd6}\u{e0100}", "\u{5dcc}\u{e0100}"),
    ("\u{984f}\u{e0100}", "\u{9854}\u{e0100}"),
    ("\u{6b78}\u{e0100}", "\u{5e30}\u{e0100}"),
    ("\u{6c23}\u{e0100}", "\u{6c17}\u{e0100}"),
    ("\u{9f9c}\u{e0100}", "\u{4e80}\u{e0100}"),
    ("\u{50de}\u{e0100}", "\u{507d}\u{e0100}"),
    ("\u{6232}\u{e0100}", "\u{622f}\u{e0100}"),
    ("\u{72a7}\u{e0100}", "\u{72a0}\u{e0100}"),
    ("\u{820a}\u{e0100}", "\u{65e7}\u{e0100}"),
    ("\u{64da}\u{e0100}", "\u{62e0}\u{e0100}"),
    ("\u{64e7}\u{e0100}", "\u{6319}\u{e0100}"),
    ("\u{5cfd}\u{e0100}", "\u{5ce1}\u{e0100}"),
    ("\u{633e}\u{e0100}", "\u{631f}\u{e0100}"),
    ("\u{72f9}\u{e0100}", "\u{72ed}\u{e0100}"),
    ("\u{66c9}\u{e0100}", "\u{6681}\u{e0100}"),
    ("\u{5340}\u{e0100}", "\u{533a}\u{e0100}"),
    ("\u{9a45}\u{e0100}", "\u{99c6}\u{e0100}"),
    ("\u{52f3}\u{e0100}", "\u{52f2}\u{e0100}"),
    ("\u{5f91}\u{e0100}", "\u{5f84}\u{e0100}"),
    ("\u{60e0}\u{e0100}", "\u{6075}\u{e0100}"),
    ("\u{6eaa}\u{e0100}", "\u{6e13}\u{e0100}"),
    ("\u{7d93}\u{e0100}", "\u{7d4c}\u{e0100}"),
    ("\u{7e7c}\u{e0100}", "\u{7d99}\u{e0100}"),
    ("\u{8396}\u{e0100}", "\u{830e}\u{e0100}"),
    ("\u{87a2}\u{e0100}", "\u{86cd}\u{e0100}"),
    ("\u{8f15}\u{e0100}", "\u{8efd}\u{e0100}"),
    ("\u{9dc4}\u{e0100}", "\u{9d8f}\u{e0100}"),
    ("\u{85dd}\u{e0100}", "\u{82b8}\u{e0100}"),
    ("\u{7f3a}\u{e0100}", "\u{6b20}\u{e0100}"),
    ("\u{5109}\u{e0100}", "\u{5039}\u{e0100}"),
    ("\u{528d}\u{e0100}", "\u{5263}\u{e0100}"),
    ("\u{5708}\u{e0100}", "\u{570f}\u{e0100}"),
    ("\u{6aa2}\u{e0100}", "\u{691c}\u{e0100}"),
    ("\u{6b0a}\u{e0100}", "\u{6a29}\u{e0100}"),
    ("\u{737b}\u{e0100}", "\u{732e}\u{e0100}"),
    ("\u{7e23}\u{e0100}", "\u{770c}\u{e0100}"),
    ("\u{96aa}\u{e0100}", "\u{967a}\u{e0100}"),
    ("\u{986f}\u{e0100}", "\u{9855}\u{e0100}"),
    ("\u{9a57}\u{e0100}", "\u{9a13}\u{e0100}"),
    ("\u{56b4}\u{e0100}", "\u{53b3}\u{e0100}"),
    ("\u{5ee3}\u{e0100}", "\u{5e83}\u{e0100}"),
    ("\u{6046}\u{e0100}", "\u{6052}\u{e0100}"),
    ("\u{945b}\u{e0100}", "\u{9271}\u{e0100}"),
    ("\u{865f}\u{e0100}", "\u{53f7}\u{e0100}"),
    ("\u{570b}\u{e0100}", "\u{56fd}\u{e0100}"),
    ("\u{6fdf}\u{e0100}", "\u{6e08}\u{e0100}"),
    ("\u{788e}\u{e0100}", "\u{7815}\u{e0100}"),
    ("\u{9f4b}\u{e0100}", "\u{658e}\u{e0100}"),
    ("\u{5291}\u{e0100}", "\u{5264}\u{e0100}"),
    ("\u{96dc}\u{e0100}", "\u{96d1}\u{e0100}"),
    ("\u{53c3}\u{e0100}", "\u{53c2}\u{e0100}"),
    ("\u{6158}\u{e0100}", "\u{60e8}\u{e0100}"),
    ("\u{68e7}\u{e0100}", "\u{685f}\u{e0100}"),
    ("\u{8836}\u{e0100}", "\u{8695}\u{e0100}"),
    ("\u{8d0a}\u{e0100}", "\u{8cdb}\u{e0100}"),
    ("\u{6b98}\u{e0100}", "\u{6b8b}\u{e0100}"),
    ("\u{7d72}\u{e0100}", "\u{7cf8}\u{e0100}"),
    ("\u{9f52}\u{e0100}", "\u{6b6f}\u{e0100}"),
    ("\u{5152}\u{e0100}", "\u{5150}\u{e0100}"),
    ("\u{8fad}\u{e0100}", "\u{8f9e}\u{e0100}"),
    ("\u{6fd5}\u{e0100}", "\u{6e7f}\u{e0100}"),
    ("\u{5be6}\u{e0100}", "\u{5b9f}\u{e0100}"),
    ("\u{820d}\u{e0100}", "\u{820e}\u{e0100}"),
    ("\u{5beb}\u{e0100}", "\u{5199}\u{e0100}"),
    ("\u{91cb}\u{e0100}", "\u{91c8}\u{e0100}"),
    ("\u{58fd}\u{e0100}", "\u{5bff}\u{e0100}"),
    ("\u{6536}\u{e0100}", "\u{53ce}\u{e0100}"),
    ("\u{5f9e}\u{e0100}", "\u{5f93}\u{e0100}"),
    ("\u{6f81}\u{e0100}", "\u{6e0b}\u{e0100}"),
    ("\u{7378}\u{e0100}", "\u{7363}\u{e0100}"),
    ("\u{7e31}\u{e0100}", "\u{7e26}\u{e0100}"),
    ("\u{8085}\u{e0100}", "\u{7c9b}\u{e0100}"),
    ("\u{8655}\u{e0100}", "\u{51e6}\u{e0100}"),
    ("\u{654d}\u{e0100}", "\u{53d9}\u{e0100}"),
    ("\u{5c07}\u{e0100}", "\u{5c06}\u{e0100}"),
    ("\u{71d2}\u{e0100}", "\u{713c}\u{e0100}"),
    ("\u{8b49}\u{e0100}", "\u{8a3c}\u{e0100}"),
    ("\u{4e58}\u{e0100}", "\u{4e57}\u{e0100}"),
    ("\u{5269}\u{e0100}", "\u{5270}\u{e0100}"),
    ("\u{58e4}\u{e0100}", "\u{58cc}\u{e0100}"),
    ("\u{5b43}\u{e0100}", "\u{5b22}\u{e0100}"),
    ("\u{689d}\u{e0100}", "\u{6761}\u{e0100}"),
    ("\u{6de8}\u{e0100}", "\u{6d44}\u{e0100}"),
    ("\u{72c0}\u{e0100}", "\u{72b6}\u{e0100}"),
    ("\u{758a}\u{e0100}", "\u{7573}\u{e0100}"),
    ("\u{8b93}\u{e0100}", "\u{8b72}\u{e0100}"),
    ("\u{91c0}\u{e0100}", "\u{91b8}\u{e0100}"),
    ("\u{56d1}\u{e0100}", "\u{5631}\u{e0100}"),
    ("\u{89f8}\u{e0100}", "\u{89e6}\u{e0100}"),
    ("\u{5be2}\u{e0100}", "\u{5bdd}\u{e0100}"),
    ("\u{613c}\u{e0100}", "\u{614e}\u{e0100}"),
    ("\u{771e}\u{e0100}", "\u{771f}\u{e0100}"),
    ("\u{76e1}\u{e0100}", "\u{5c3d}\u{e0100}"),
    ("\u{5716}\u{e0100}", "\u{56f3}\u{e0100}"),
    ("\u{7cb9}\u{e0100}", "\u{7c8b}\u{e0100}"),
    ("\u{9189}\u{e0100}", "\u{9154}\u{e0100}"),
    ("\u{96a8}\u{e0100}", "\u{968f}\u{e0100}"),
    ("\u{9ad3}\u{e0100}", "\u{9ac4}\u{e0100}"),
    ("\u{6578}\u{e0100}", "\u{6570}\u{e0100}"),
    ("\u{6a1e}\u{e0100}", "\u{67a2}\u{e0100}"),
    ("\u{8072}\u{e0100}", "\u{58f0}\u{e0100}"),
    ("\u{975c}\u{e0100}", "\u{9759}\u{e0100}"),
    ("\u{9f4a}\u{e0100}", "\u{6589}\u{e0100}"),
    ("\u{651d}\u{e0100}", "\u{6442}\u{e0100}"),
    ("\u{7aca}\u{e0100}", "\u{7a83}\u{e0100}"),
    ("\u{5c08}\u{e0100}", "\u{5c02}\u{e0100}"),
    ("\u{6230}\u{e0100}", "\u{6226}\u{e0100}"),
    ("\u{6dfa}\u{e0100}", "\u{6d45}\u{e0100}"),
    ("\u{6f5b}\u{e0100}", "\u{6f5c}\u{e0100}"),
    ("\u{7e96}\u{e0100}", "\u{7e4a}\u{e0100}"),
    ("\u{8e10}\u{e0100}", "\u{8df5}\u{e0100}"),
    ("\u{9322}\u{e0100}", "\u{92ad}\u{e0100}"),
    ("\u{79aa}\u{e0100}", "\u{7985}\u{e0100}"),
    ("\u{96d9}\u{e0100}", "\u{53cc}\u{e0100}"),
    ("\u{641c}\u{e0100}", "\u{635c}\u{e0100}"),
    ("\u{63d2}\u{e0100}", "\u{633f}\u{e0100}"),
    ("\u{5de2}\u{e0100}", "\u{5de3}\u{e0100}"),
    ("\u{722d}\u{e0100}", "\u{4e89}\u{e0100}"),
    ("\u{7e3d}\u{e0100}", "\u{7dcf}\u{e0100}"),
    ("\u{838a}\u{e0100}", "\u{8358}\u{e0100}"),
    ("\u{88dd}\u{e0100}", "\u{88c5}\u{e0100}"),
    ("\u{9a37}\u{e0100}", "\u{9a12}\u{e0100}"),
    ("\u{589e}\u{e0100}", "\u{5897}\u{e0100}"),
    ("\u{85cf}\u{e0100}", "\u{8535}\u{e0100}"),
    ("\u{81df}\u{e0100}", "\u{81d3}\u{e0100}"),
    ("\u{5c6c}\u{e0100}", "\u{5c5e}\u{e0100}"),
    ("\u{7e8c}\u{e0100}", "\u{7d9a}\u{e0100}"),
    ("\u{58ae}\u{e0100}", "\u{5815}\u{e0100}"),
    ("\u{9ad4}\u{e0100}", "\u{4f53}\u{e0100}"),
    ("\u{5c0d}\u{e0100}", "\u{5bfe}\u{e0100}"),
    ("\u{5e36}\u{e0100}", "\u{5e2f}\u{e0100}"),
    ("\u{6eef}\u{e0100}", "\u{6ede}\u{e0100}"),
    ("\u{81fa}\u{e0100}", "\u{53f0}\u{e0100}"),
    ("\u{7027}\u{e0100}", "\u{6edd}\u{e0100}"),
    ("\u{64c7}\u{e0100}", "\u{629e}\u{e0100}"),
    ("\u{6fa4}\u{e0100}", "\u{6ca2}\u{e0100}"),
    ("\u{55ae}\u{e0100}", "\u{5358}\u{e0100}"),
    ("\u{64d4}\u{e0100}", "\u{62c5}\u{e0100}"),
    ("\u{81bd}\u{e0100}", "\u{80c6}\u{e0100}"),
    ("\u{5718}\u{e0100}", "\u{56e3}\u{e0100}"),
    ("\u{5f48}\u{e0100}", "\u{5f3e}\u{e0100}"),
    ("\u{65b7}\u{e0100}", "\u{65ad}\u{e0100}"),
    ("\u{9072}\u{e0100}", "\u{9045}\u{e0100}"),
    ("\u{665d}\u{e0100}", "\u{663c}\u{e0100}"),
    ("\u{87f2}\u{e0100}", "\u{866b}\u{e0100}"),
    ("\u{9444}\u{e0100}", "\u{92f3}\u{e0100}"),
    ("\u{5ef3}\u{e0100}", "\u{5e81}\u{e0100}"),
    ("\u{807d}\u{e0100}", "\u{8074}\u{e0100}"),
    ("\u{93ad}\u{e0100}", "\u{93ae}\u{e0100}"),
    ("\u{905e}\u{e0100}", "\u{9013}\u{e0100}"),
    ("\u{9435}\u{e0100}", "\u{9244}\u{e0100}"),
    ("\u{8f49}\u{e0100}", "\u{8ee2}\u{e0100}"),
    ("\u{9ede}\u{e0100}", "\u{70b9}\u{e0100}"),
    ("\u{50b3}\u{e0100}", "\u{4f1d}\u{e0100}"),
    ("\u{9ee8}\u{e0100}", "\u{515a}\u{e0100}"),
    ("\u{76dc}\u{e0100}", "\u{76d7}\u{e0100}"),
    ("\u{71c8}\u{e0100}", "\u{706f}\u{e0100}"),
    ("\u{7576}\u{e0100}", "\u{5f53}\u{e0100}"),
    ("\u{5fb7}\u{e0100}", "\u{5fb3}\u{e0100}"),
    ("\u{7368}\u{e0100}", "\u{72ec}\u{e0100}"),
    ("\u{8b80}\u{e0100}", "\u{8aad}\u{e0100}"),
    ("\u{5c46}\u{e0100}", "\u{5c4a}\u{e0100}"),
    ("\u{7e69}\u{e0100}", "\u{7e04}\u{e0100}"),
    ("\u{8cb3}\u{e0100}", "\u{5f10}\u{e0100}"),
    ("\u{60f1}\u{e0100}", "\u{60a9}\u{e0100}"),
    ("\u{8166}\u{e0100}", "\u{8133}\u{e0100}"),
    ("\u{9738}\u{e0100}", "\u{8987}\u{e0100}"),
    ("\u{5ee2}\u{e0100}", "\u{5ec3}\u{e0100}"),
    ("\u{62dc}\u{e0100}", "\u{62dd}\u{e0100}"),
    ("\u{8ce3}\u{e0100}", "\u{58f2}\u{e0100}"),
    ("\u{9ea5}\u{e0100}", "\u{9ea6}\u{e0100}"),
    ("\u{767c}\u{e0100}", "\u{767a}\u{e0100}"),
    ("\u{9aee}\u{e0100}", "\u{9aea}\u{e0100}"),
    ("\u{62d4}\u{e0100}", "\u{629c}\u{e0100}"),
    ("\u{883b}\u{e0100}", "\u{86ee}\u{e0100}"),
    ("\u{7955}\u{e0100}", "\u{79d8}\u{e0100}"),
    ("\u{4f5b}\u{e0100}", "\u{4ecf}\u{e0100}"),
    ("\u{8b8a}\u{e0100}", "\u{5909}\u{e0100}"),
    ("\u{908a}\u{e0100}", "\u{8fba}\u{e0100}"),
    ("\u{8fa8}\u{e0100}", "\u{5f01}\u{e0100}"),
    ("\u{8216}\u{e0100}", "\u{8217}\u{e0100}"),
    ("\u{6b65}\u{e0100}", "\u{6b69}\u{e0100}"),
    ("\u{7a57}\u{e0100}", "\u{7a42}\u{e0100}"),
    ("\u{5bf6}\u{e0100}", "\u{5b9d}\u{e0100}"),
    ("\u{8c50}\u{e0100}", "\u{8c4a}\u{e0100}"),
    ("\u{6c92}\u{e0100}", "\u{6ca1}\u{e0100}"),
    ("\u{6eff}\u{e0100}", "\u{6e80}\u{e0100}"),
    ("\u{5f4c}\u{e0100}", "\u{5f25}\u{e0100}"),
    ("\u{85e5}\u{e0100}", "\u{85ac}\u{e0100}"),
    ("\u{8b6f}\u{e0100}", "\u{8a33}\u{e0100}"),
    ("\u{8c6b}\u{e0100}", "\u{4e88}\u{e0100}"),
    ("\u{9918}\u{e0100}", "\u{4f59}\u{e0100}"),
    ("\u{8207}\u{e0100}", "\u{4e0e}\u{e0100}"),
    ("\u{8b7d}\u{e0100}", "\u{8a89}\u{e0100}"),
    ("\u{6416}\u{e0100}", "\u{63fa}\u{e0100}"),
    ("\u{6a23}\u{e0100}", "\u{69d8}\u{e0100}"),
    ("\u{8b20}\u{e0100}", "\u{8b21}\u{e0100}"),
    ("\u{4f86}\u{e0100}", "\u{6765}\u{e0100}"),
    ("\u{8cf4}\u{e0100}", "\u{983c}\u{e0100}"),
    ("\u{4e82}\u{e0100}", "\u{4e71}\u{e0100}"),
    ("\u{89bd}\u{e0100}", "\u{89a7}\u{e0100}"),
    ("\u{9f8d}\u{e0100}", "\u{7adc}\u{e0100}"),
    ("\u{5169}\u{e0100}", "\u{4e21}\u{e0100}"),
    ("\u{7375}\u{e0100}", "\u{731f}\u{e0100}"),
    ("\u{7da0}\u{e0100}", "\u{7dd1}\u{e0100}"),
    ("\u{58d8}\u{e0100}", "\u{5841}\u{e0100}"),
    ("\u{6dda}\u{e0100}", "\u{6d99}\u{e0100}"),
    ("\u{79ae}\u{e0100}", "\u{793c}\u{e0100}"),
    ("\u{52f5}\u{e0100}", "\u{52b1}\u{e0100}"),
    ("\u{9748}\u{e0100}", "\u{970a}\u{e0100}"),
    ("\u{9f61}\u{e0100}", "\u{9f62}\u{e0100}"),
    ("\u{6200}\u{e0100}", "\u{604b}\u{e0100}"),
    ("\u{7210}\u{e0100}", "\u{7089}\u{e0100}"),
    ("\u{52de}\u{e0100}", "\u{52b4}\u{e0100}"),
    ("\u{6a13}\u{e0100}", "\u{697c}\u{e0100}"),
    ("\u{90de}\u{e0100}", "\u{90ce}\u{e0100}"),
    ("\u{9304}\u{e0100}", "\u{9332}\u{e0100}"),
    ("\u{7063}\u{e0100}", "\u{6e7e}\u{e0100}"),
    ("\u{6a9c}\u{e0100}", "\u{6867}\u{e0100}"),
    ("\u{8fbb}\u{e0101}", "\u{8fbb}\u{e0100}"),
];
