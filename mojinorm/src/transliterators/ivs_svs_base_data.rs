// Generated by mojinorm_codegen from ivs-svs-base-mappings.json. Do not edit by hand.

use super::ivs_svs_base::IvsSvsBaseRecord;

pub(crate) const IVS_SVS_BASE_RECORDS: &[IvsSvsBaseRecord] = &[
    IvsSvsBaseRecord { ivs: "\u{4e0e}\u{e0100}", svs: None, base90: Some('\u{4e0e}'), base2004: Some('\u{4e0e}') },
    IvsSvsBaseRecord { ivs: "\u{4e21}\u{e0100}", svs: None, base90: Some('\u{4e21}'), base2004: Some('\u{4e21}') },
    IvsSvsBaseRecord { ivs: "\u{4e57}\u{e0100}", svs: None, base90: Some('\u{4e57}'), base2004: Some('\u{4e57}') },
    IvsSvsBaseRecord { ivs: "\u{4e58}\u{e0100}", svs: None, base90: Some('\u{4e58}'), base2004: Some('\u{4e58}') },
    IvsSvsBaseRecord { ivs: "\u{4e71}\u{e0100}", svs: None, base90: Some('\u{4e71}'), base2004: Some('\u{4e71}') },
    IvsSvsBaseRecord { ivs: "\u{4e80}\u{e0100}", svs: None, base90: Some('\u{4e80}'), base2004: Some('\u{4e80}') },
    IvsSvsBaseRecord { ivs: "\u{4e82}\u{e0100}", svs: None, base90: Some('\u{4e82}'), base2004: Some('\u{4e82}') },
    IvsSvsBaseRecord { ivs: "\u{4e88}\u{e0100}", svs: None, base90: Some('\u{4e88}'), base2004: Some('\u{4e88}') },
    IvsSvsBaseRecord { ivs: "\u{4e89}\u{e0100}", svs: None, base90: Some('\u{4e89}'), base2004: Some('\u{4e89}') },
    IvsSvsBaseRecord { ivs: "\u{4e9c}\u{e0100}", svs: None, base90: Some('\u{4e9c}'), base2004: Some('\u{4e9c}') },
    IvsSvsBaseRecord { ivs: "\u{4e9e}\u{e0100}", svs: None, base90: Some('\u{4e9e}'), base2004: Some('\u{4e9e}') },
    IvsSvsBaseRecord { ivs: "\u{4ecf}\u{e0100}", svs: None, base90: Some('\u{4ecf}'), base2004: Some('\u{4ecf}') },
    IvsSvsBaseRecord { ivs: "\u{4ee4}\u{e0100}", svs: None, base90: Some('\u{4ee4}'), base2004: Some('\u{4ee4}') },
    IvsSvsBaseRecord { ivs: "\u{4eee}\u{e0100}", svs: None, base90: Some('\u{4eee}'), base2004: Some('\u{4eee}') },
    IvsSvsBaseRecord { ivs: "\u{4f1a}\u{e0100}", svs: None, base90: Some('\u{4f1a}'), base2004: Some('\u{4f1a}') },
    IvsSvsBaseRecord { ivs: "\u{4f1d}\u{e0100}", svs: None, base90: Some('\u{4f1d}'), base2004: Some('\u{4f1d}') },
    IvsSvsBaseRecord { ivs: "\u{4f53}\u{e0100}", svs: None, base90: Some('\u{4f53}'), base2004: Some('\u{4f53}') },
    IvsSvsBaseRecord { ivs: "\u{4f59}\u{e0100}", svs: None, base90: Some('\u{4f59}'), base2004: Some('\u{4f59}') },
    IvsSvsBaseRecord { ivs: "\u{4f5b}\u{e0100}", svs: None, base90: Some('\u{4f5b}'), base2004: Some('\u{4f5b}') },
    IvsSvsBaseRecord { ivs: "\u{4f86}\u{e0100}", svs: None, base90: Some('\u{4f86}'), base2004: Some('\u{4f86}') },
    IvsSvsBaseRecord { ivs: "\u{4fa1}\u{e0100}", svs: None, base90: Some('\u{4fa1}'), base2004: Some('\u{4fa1}') },
    IvsSvsBaseRecord { ivs: "\u{5039}\u{e0100}", svs: None, base90: Some('\u{5039}'), base2004: Some('\u{5039}') },
    IvsSvsBaseRecord { ivs: "\u{5047}\u{e0100}", svs: None, base90: Some('\u{5047}'), base2004: Some('\u{5047}') },
    IvsSvsBaseRecord { ivs: "\u{507d}\u{e0100}", svs: None, base90: Some('\u{507d}'), base2004: Some('\u{507d}') },
    IvsSvsBaseRecord { ivs: "\u{50b3}\u{e0100}", svs: None, base90: Some('\u{50b3}'), base2004: Some('\u{50b3}') },
    IvsSvsBaseRecord { ivs: "\u{50de}\u{e0100}", svs: None, base90: Some('\u{50de}'), base2004: Some('\u{50de}') },
    IvsSvsBaseRecord { ivs: "\u{50f9}\u{e0100}", svs: None, base90: Some('\u{50f9}'), base2004: Some('\u{50f9}') },
    IvsSvsBaseRecord { ivs: "\u{5109}\u{e0100}", svs: None, base90: Some('\u{5109}'), base2004: Some('\u{5109}') },
    IvsSvsBaseRecord { ivs: "\u{5150}\u{e0100}", svs: None, base90: Some('\u{5150}'), base2004: Some('\u{5150}') },
    IvsSvsBaseRecord { ivs: "\u{5152}\u{e0100}", svs: None, base90: Some('\u{5152}'), base2004: Some('\u{5152}') },
    IvsSvsBaseRecord { ivs: "\u{515a}\u{e0100}", svs: None, base90: Some('\u{515a}'), base2004: Some('\u{515a}') },
    IvsSvsBaseRecord { ivs: "\u{5169}\u{e0100}", svs: None, base90: Some('\u{5169}'), base2004: Some('\u{5169}') },
    IvsSvsBaseRecord { ivs: "\u{5186}\u{e0100}", svs: None, base90: Some('\u{5186}'), base2004: Some('\u{5186}') },
    IvsSvsBaseRecord { ivs: "\u{5199}\u{e0100}", svs: None, base90: Some('\u{5199}'), base2004: Some('\u{5199}') },
    IvsSvsBaseRecord { ivs: "\u{51e6}\u{e0100}", svs: None, base90: Some('\u{51e6}'), base2004: Some('\u{51e6}') },
    IvsSvsBaseRecord { ivs: "\u{5263}\u{e0100}", svs: None, base90: Some('\u{5263}'), base2004: Some('\u{5263}') },
    IvsSvsBaseRecord { ivs: "\u{5264}\u{e0100}", svs: None, base90: Some('\u{5264}'), base2004: Some('\u{5264}') },
    IvsSvsBaseRecord { ivs: "\u{5265}\u{e0100}", svs: None, base90: Some('\u{5265}'), base2004: Some('\u{5265}') },
    IvsSvsBaseRecord { ivs: "\u{5269}\u{e0100}", svs: None, base90: Some('\u{5269}'), base2004: Some('\u{5269}') },
    IvsSvsBaseRecord { ivs: "\u{5270}\u{e0100}", svs: None, base90: Some('\u{5270}'), base2004: Some('\u{5270}') },
    IvsSvsBaseRecord { ivs: "\u{528d}\u{e0100}", svs: None, base90: Some('\u{528d}'), base2004: Some('\u{528d}') },
    IvsSvsBaseRecord { ivs: "\u{5291}\u{e0100}", svs: None, base90: Some('\u{5291}'), base2004: Some('\u{5291}') },
    IvsSvsBaseRecord { ivs: "\u{52b1}\u{e0100}", svs: None, base90: Some('\u{52b1}'), base2004: Some('\u{52b1}') },
    IvsSvsBaseRecord { ivs: "\u{52b4}\u{e0100}", svs: None, base90: Some('\u{52b4}'), base2004: Some('\u{52b4}') },
    IvsSvsBaseRecord { ivs: "\u{52de}\u{e0100}", svs: None, base90: Some('\u{52de}'), base2004: Some('\u{52de}') },
    IvsSvsBaseRecord { ivs: "\u{52e7}\u{e0100}", svs: None, base90: Some('\u{52e7}'), base2004: Some('\u{52e7}') },
    IvsSvsBaseRecord { ivs: "\u{52f2}\u{e0100}", svs: None, base90: Some('\u{52f2}'), base2004: Some('\u{52f2}') },
    IvsSvsBaseRecord { ivs: "\u{52f3}\u{e0100}", svs: None, base90: Some('\u{52f3}'), base2004: Some('\u{52f3}') },
    IvsSvsBaseRecord { ivs: "\u{52f5}\u{e0100}", svs: None, base90: Some('\u{52f5}'), base2004: Some('\u{52f5}') },
    IvsSvsBaseRecord { ivs: "\u{52f8}\u{e0100}", svs: None, base90: Some('\u{52f8}'), base2004: Some('\u{52f8}') },
    IvsSvsBaseRecord { ivs: "\u{533a}\u{e0100}", svs: None, base90: Some('\u{533a}'), base2004: Some('\u{533a}') },
    IvsSvsBaseRecord { ivs: "\u{533b}\u{e0100}", svs: None, base90: Some('\u{533b}'), base2004: Some('\u{533b}') },
    IvsSvsBaseRecord { ivs: "\u{5340}\u{e0100}", svs: None, base90: Some('\u{5340}'), base2004: Some('\u{5340}') },
    IvsSvsBaseRecord { ivs: "\u{5358}\u{e0100}", svs: None, base90: Some('\u{5358}'), base2004: Some('\u{5358}') },
    IvsSvsBaseRecord { ivs: "\u{5377}\u{e0100}", svs: None, base90: Some('\u{5377}'), base2004: Some('\u{5377}') },
    IvsSvsBaseRecord { ivs: "\u{53b3}\u{e0100}", svs: None, base90: Some('\u{53b3}'), base2004: Some('\u{53b3}') },
    IvsSvsBaseRecord { ivs: "\u{53c2}\u{e0100}", svs: None, base90: Some('\u{53c2}'), base2004: Some('\u{53c2}') },
    IvsSvsBaseRecord { ivs: "\u{53c3}\u{e0100}", svs: None, base90: Some('\u{53c3}'), base2004: Some('\u{53c3}') },
    IvsSvsBaseRecord { ivs: "\u{53cc}\u{e0100}", svs: None, base90: Some('\u{53cc}'), base2004: Some('\u{53cc}') },
    IvsSvsBaseRecord { ivs: "\u{53ce}\u{e0100}", svs: None, base90: Some('\u{53ce}'), base2004: Some('\u{53ce}') },
    IvsSvsBaseRecord { ivs: "\u{53d9}\u{e0100}", svs: None, base90: Some('\u{53d9}'), base2004: Some('\u{53d9}') },
    IvsSvsBaseRecord { ivs: "\u{53f0}\u{e0100}", svs: None, base90: Some('\u{53f0}'), base2004: Some('\u{53f0}') },
    IvsSvsBaseRecord { ivs: "\u{53f7}\u{e0100}", svs: None, base90: Some('\u{53f7}'), base2004: Some('\u{53f7}') },
    IvsSvsBaseRecord { ivs: "\u{548c}\u{e0100}", svs: None, base90: Some('\u{548c}'), base2004: Some('\u{548c}') },
    IvsSvsBaseRecord { ivs: "\u{55ae}\u{e0100}", svs: None, base90: Some('\u{55ae}'), base2004: Some('\u{55ae}') },
    IvsSvsBaseRecord { ivs: "\u{55b6}\u{e0100}", svs: None, base90: Some('\u{55b6}'), base2004: Some('\u{55b6}') },
    IvsSvsBaseRecord { ivs: "\u{5631}\u{e0100}", svs: None, base90: Some('\u{5631}'), base2004: Some('\u{5631}') },
    IvsSvsBaseRecord { ivs: "\u{564c}\u{e0100}", svs: None, base90: Some('\u{564c}'), base2004: Some('\u{564c}') },
    IvsSvsBaseRecord { ivs: "\u{56b4}\u{e0100}", svs: None, base90: Some('\u{56b4}'), base2004: Some('\u{56b4}') },
    IvsSvsBaseRecord { ivs: "\u{56d1}\u{e0100}", svs: None, base90: Some('\u{56d1}'), base2004: Some('\u{56d1}') },
    IvsSvsBaseRecord { ivs: "\u{56e3}\u{e0100}", svs: None, base90: Some('\u{56e3}'), base2004: Some('\u{56e3}') },
    IvsSvsBaseRecord { ivs: "\u{56f2}\u{e0100}", svs: None, base90: Some('\u{56f2}'), base2004: Some('\u{56f2}') },
    IvsSvsBaseRecord { ivs: "\u{56f3}\u{e0100}", svs: None, base90: Some('\u{56f3}'), base2004: Some('\u{56f3}') },
    IvsSvsBaseRecord { ivs: "\u{56fd}\u{e0100}", svs: None, base90: Some('\u{56fd}'), base2004: Some('\u{56fd}') },
    IvsSvsBaseRecord { ivs: "\u{5708}\u{e0100}", svs: None, base90: Some('\u{5708}'), base2004: Some('\u{5708}') },
    IvsSvsBaseRecord { ivs: "\u{570b}\u{e0100}", svs: None, base90: Some('\u{570b}'), base2004: Some('\u{570b}') },
    IvsSvsBaseRecord { ivs: "\u{570d}\u{e0100}", svs: None, base90: Some('\u{570d}'), base2004: Some('\u{570d}') },
    IvsSvsBaseRecord { ivs: "\u{570f}\u{e0100}", svs: None, base90: Some('\u{570f}'), base2004: Some('\u{570f}') },
    IvsSvsBaseRecord { ivs: "\u{5713}\u{e0100}", svs: None, base90: Some('\u{5713}'), base2004: Some('\u{5713}') },
    IvsSvsBaseRecord { ivs: "\u{5716}\u{e0100}", svs: None, base90: Some('\u{5716}'), base2004: Some('\u{5716}') },
    IvsSvsBaseRecord { ivs: "\u{5718}\u{e0100}", svs: None, base90: Some('\u{5718}'), base2004: Some('\u{5718}') },
    IvsSvsBaseRecord { ivs: "\u{5727}\u{e0100}", svs: None, base90: Some('\u{5727}'), base2004: Some('\u{5727}') },
    IvsSvsBaseRecord { ivs: "\u{5815}\u{e0100}", svs: None, base90: Some('\u{5815}'), base2004: Some('\u{5815}') },
    IvsSvsBaseRecord { ivs: "\u{5841}\u{e0100}", svs: None, base90: Some('\u{5841}'), base2004: Some('\u{5841}') },
    IvsSvsBaseRecord { ivs: "\u{5869}\u{e0100}", svs: None, base90: Some('\u{5869}'), base2004: Some('\u{5869}') },
    IvsSvsBaseRecord { ivs: "\u{5897}\u{e0100}", svs: None, base90: Some('\u{5897}'), base2004: Some('\u{5897}') },
    IvsSvsBaseRecord { ivs: "\u{589e}\u{e0100}", svs: None, base90: Some('\u{589e}'), base2004: Some('\u{589e}') },
    IvsSvsBaseRecord { ivs: "\u{58ae}\u{e0100}", svs: None, base90: Some('\u{58ae}'), base2004: Some('\u{58ae}') },
    IvsSvsBaseRecord { ivs: "\u{58ca}\u{e0100}", svs: None, base90: Some('\u{58ca}'), base2004: Some('\u{58ca}') },
    IvsSvsBaseRecord { ivs: "\u{58cc}\u{e0100}", svs: None, base90: Some('\u{58cc}'), base2004: Some('\u{58cc}') },
    IvsSvsBaseRecord { ivs: "\u{58d3}\u{e0100}", svs: None, base90: Some('\u{58d3}'), base2004: Some('\u{58d3}') },
    IvsSvsBaseRecord { ivs: "\u{58d8}\u{e0100}", svs: None, base90: Some('\u{58d8}'), base2004: Some('\u{58d8}') },
    IvsSvsBaseRecord { ivs: "\u{58de}\u{e0100}", svs: None, base90: Some('\u{58de}'), base2004: Some('\u{58de}') },
    IvsSvsBaseRecord { ivs: "\u{58e4}\u{e0100}", svs: None, base90: Some('\u{58e4}'), base2004: Some('\u{58e4}') },
    IvsSvsBaseRecord { ivs: "\u{58f0}\u{e0100}", svs: None, base90: Some('\u{58f0}'), base2004: Some('\u{58f0}') },
    IvsSvsBaseRecord { ivs: "\u{58f1}\u{e0100}", svs: None, base90: Some('\u{58f1}'), base2004: Some('\u{58f1}') },
    IvsSvsBaseRecord { ivs: "\u{58f2}\u{e0100}", svs: None, base90: Some('\u{58f2}'), base2004: Some('\u{58f2}') },
    IvsSvsBaseRecord { ivs: "\u{58f9}\u{e0100}", svs: None, base90: Some('\u{58f9}'), base2004: Some('\u{58f9}') },
    IvsSvsBaseRecord { ivs: "\u{58fd}\u{e0100}", svs: None, base90: Some('\u{58fd}'), base2004: Some('\u{58fd}') },
    IvsSvsBaseRecord { ivs: "\u{5909}\u{e0100}", svs: None, base90: Some('\u{5909}'), base2004: Some('\u{5909}') },
    IvsSvsBaseRecord { ivs: "\u{5965}\u{e0100}", svs: None, base90: Some('\u{5965}'), base2004: Some('\u{5965}') },
    IvsSvsBaseRecord { ivs: "\u{5967}\u{e0100}", svs: None, base90: Some('\u{5967}'), base2004: Some('\u{5967}') },
    IvsSvsBaseRecord { ivs: "\u{5b22}\u{e0100}", svs: None, base90: Some('\u{5b22}'), base2004: Some('\u{5b22}') },
    IvsSvsBaseRecord { ivs: "\u{5b43}\u{e0100}", svs: None, base90: Some('\u{5b43}'), base2004: Some('\u{5b43}') },
    IvsSvsBaseRecord { ivs: "\u{5b57}\u{e0100}", svs: None, base90: Some('\u{5b57}'), base2004: Some('\u{5b57}') },
    IvsSvsBaseRecord { ivs: "\u{5b66}\u{e0100}", svs: None, base90: Some('\u{5b66}'), base2004: Some('\u{5b66}') },
    IvsSvsBaseRecord { ivs: "\u{5b78}\u{e0100}", svs: None, base90: Some('\u{5b78}'), base2004: Some('\u{5b78}') },
    IvsSvsBaseRecord { ivs: "\u{5b9d}\u{e0100}", svs: None, base90: Some('\u{5b9d}'), base2004: Some('\u{5b9d}') },
    IvsSvsBaseRecord { ivs: "\u{5b9f}\u{e0100}", svs: None, base90: Some('\u{5b9f}'), base2004: Some('\u{5b9f}') },
    IvsSvsBaseRecord { ivs: "\u{5bdd}\u{e0100}", svs: None, base90: Some('\u{5bdd}'), base2004: Some('\u{5bdd}') },
    IvsSvsBaseRecord { ivs: "\u{5be2}\u{e0100}", svs: None, base90: Some('\u{5be2}'), base2004: Some('\u{5be2}') },
    IvsSvsBaseRecord { ivs: "\u{5be6}\u{e0100}", svs: None, base90: Some('\u{5be6}'), base2004: Some('\u{5be6}') },
    IvsSvsBaseRecord { ivs: "\u{5beb}\u{e0100}", svs: None, base90: Some('\u{5beb}'), base2004: Some('\u{5beb}') },
    IvsSvsBaseRecord { ivs: "\u{5bf6}\u{e0100}", svs: None, base90: Some('\u{5bf6}'), base2004: Some('\u{5bf6}') },
    IvsSvsBaseRecord { ivs: "\u{5bfe}\u{e0100}", svs: None, base90: Some('\u{5bfe}'), base2004: Some('\u{5bfe}') },
    IvsSvsBaseRecord { ivs: "\u{5bff}\u{e0100}", svs: None, base90: Some('\u{5bff}'), base2004: Some('\u{5bff}') },
    IvsSvsBaseRecord { ivs: "\u{5c02}\u{e0100}", svs: None, base90: Some('\u{5c02}'), base2004: Some('\u{5c02}') },
    IvsSvsBaseRecord { ivs: "\u{5c06}\u{e0100}", svs: None, base90: Some('\u{5c06}'), base2004: Some('\u{5c06}') },
    IvsSvsBaseRecord { ivs: "\u{5c07}\u{e0100}", svs: None, base90: Some('\u{5c07}'), base2004: Some('\u{5c07}') },
    IvsSvsBaseRecord { ivs: "\u{5c08}\u{e0100}", svs: None, base90: Some('\u{5c08}'), base2004: Some('\u{5c08}') },
    IvsSvsBaseRecord { ivs: "\u{5c0d}\u{e0100}", svs: None, base90: Some('\u{5c0d}'), base2004: Some('\u{5c0d}') },
    IvsSvsBaseRecord { ivs: "\u{5c3d}\u{e0100}", svs: None, base90: Some('\u{5c3d}'), base2004: Some('\u{5c3d}') },
    IvsSvsBaseRecord { ivs: "\u{5c46}\u{e0100}", svs: None, base90: Some('\u{5c46}'), base2004: Some('\u{5c46}') },
    IvsSvsBaseRecord { ivs: "\u{5c4a}\u{e0100}", svs: None, base90: Some('\u{5c4a}'), base2004: Some('\u{5c4a}') },
    IvsSvsBaseRecord { ivs: "\u{5c5e}\u{e0100}", svs: None, base90: Some('\u{5c5e}'), base2004: Some('\u{5c5e}') },
    IvsSvsBaseRecord { ivs: "\u{5c6c}\u{e0100}", svs: None, base90: Some('\u{5c6c}'), base2004: Some('\u{5c6c}') },
    IvsSvsBaseRecord { ivs: "\u{5cb3}\u{e0100}", svs: None, base90: Some('\u{5cb3}'), base2004: Some('\u{5cb3}') },
    IvsSvsBaseRecord { ivs: "\u{5ce1}\u{e0100}", svs: None, base90: Some('\u{5ce1}'), base2004: Some('\u{5ce1}') },
    IvsSvsBaseRecord { ivs: "\u{5cfd}\u{e0100}", svs: None, base90: Some('\u{5cfd}'), base2004: Some('\u{5cfd}') },
    IvsSvsBaseRecord { ivs: "\u{5dbd}\u{e0100}", svs: None, base90: Some('\u{5dbd}'), base2004: Some('\u{5dbd}') },
    IvsSvsBaseRecord { ivs: "\u{5dcc}\u{e0100}", svs: None, base90: Some('\u{5dcc}'), base2004: Some('\u{5dcc}') },
    IvsSvsBaseRecord { ivs: "\u{5dd6}\u{e0100}", svs: None, base90: Some('\u{5dd6}'), base2004: Some('\u{5dd6}') },
    IvsSvsBaseRecord { ivs: "\u{5de2}\u{e0100}", svs: None, base90: Some('\u{5de2}'), base2004: Some('\u{5de2}') },
    IvsSvsBaseRecord { ivs: "\u{5de3}\u{e0100}", svs: None, base90: Some('\u{5de3}'), base2004: Some('\u{5de3}') },
    IvsSvsBaseRecord { ivs: "\u{5dfb}\u{e0100}", svs: None, base90: Some('\u{5dfb}'), base2004: Some('\u{5dfb}') },
    IvsSvsBaseRecord { ivs: "\u{5e2f}\u{e0100}", svs: None, base90: Some('\u{5e2f}'), base2004: Some('\u{5e2f}') },
    IvsSvsBaseRecord { ivs: "\u{5e30}\u{e0100}", svs: None, base90: Some('\u{5e30}'), base2004: Some('\u{5e30}') },
    IvsSvsBaseRecord { ivs: "\u{5e36}\u{e0100}", svs: None, base90: Some('\u{5e36}'), base2004: Some('\u{5e36}') },
    IvsSvsBaseRecord { ivs: "\u{5e81}\u{e0100}", svs: None, base90: Some('\u{5e81}'), base2004: Some('\u{5e81}') },
    IvsSvsBaseRecord { ivs: "\u{5e83}\u{e0100}", svs: None, base90: Some('\u{5e83}'), base2004: Some('\u{5e83}') },
    IvsSvsBaseRecord { ivs: "\u{5ec3}\u{e0100}", svs: None, base90: Some('\u{5ec3}'), base2004: Some('\u{5ec3}') },
    IvsSvsBaseRecord { ivs: "\u{5ee2}\u{e0100}", svs: None, base90: Some('\u{5ee2}'), base2004: Some('\u{5ee2}') },
    IvsSvsBaseRecord { ivs: "\u{5ee3}\u{e0100}", svs: None, base90: Some('\u{5ee3}'), base2004: Some('\u{5ee3}') },
    IvsSvsBaseRecord { ivs: "\u{5ef3}\u{e0100}", svs: None, base90: Some('\u{5ef3}'), base2004: Some('\u{5ef3}') },
    IvsSvsBaseRecord { ivs: "\u{5f01}\u{e0100}", svs: None, base90: Some('\u{5f01}'), base2004: Some('\u{5f01}') },
    IvsSvsBaseRecord { ivs: "\u{5f0f}\u{e0100}", svs: None, base90: Some('\u{5f0f}'), base2004: Some('\u{5f0f}') },
    IvsSvsBaseRecord { ivs: "\u{5f10}\u{e0100}", svs: None, base90: Some('\u{5f10}'), base2004: Some('\u{5f10}') },
    IvsSvsBaseRecord { ivs: "\u{5f25}\u{e0100}", svs: None, base90: Some('\u{5f25}'), base2004: Some('\u{5f25}') },
    IvsSvsBaseRecord { ivs: "\u{5f3e}\u{e0100}", svs: None, base90: Some('\u{5f3e}'), base2004: Some('\u{5f3e}') },
    IvsSvsBaseRecord { ivs: "\u{5f48}\u{e0100}", svs: None, base90: Some('\u{5f48}'), base2004: Some('\u{5f48}') },
    IvsSvsBaseRecord { ivs: "\u{5f4c}\u{e0100}", svs: None, base90: Some('\u{5f4c}'), base2004: Some('\u{5f4c}') },
    IvsSvsBaseRecord { ivs: "\u{5f53}\u{e0100}", svs: None, base90: Some('\u{5f53}'), base2004: Some('\u{5f53}') },
    IvsSvsBaseRecord { ivs: "\u{5f84}\u{e0100}", svs: None, base90: Some('\u{5f84}'), base2004: Some('\u{5f84}') },
    IvsSvsBaseRecord { ivs: "\u{5f91}\u{e0100}", svs: None, base90: Some('\u{5f91}'), base2004: Some('\u{5f91}') },
    IvsSvsBaseRecord { ivs: "\u{5f93}\u{e0100}", svs: None, base90: Some('\u{5f93}'), base2004: Some('\u{5f93}') },
    IvsSvsBaseRecord { ivs: "\u{5f9e}\u{e0100}", svs: None, base90: Some('\u{5f9e}'), base2004: Some('\u{5f9e}') },
    IvsSvsBaseRecord { ivs: "\u{5fb3}\u{e0100}", svs: None, base90: Some('\u{5fb3}'), base2004: Some('\u{5fb3}') },
    IvsSvsBaseRecord { ivs: "\u{5fb7}\u{e0100}", svs: None, base90: Some('\u{5fb7}'), base2004: Some('\u{5fb7}') },
    IvsSvsBaseRecord { ivs: "\u{5fdc}\u{e0100}", svs: None, base90: Some('\u{5fdc}'), base2004: Some('\u{5fdc}') },
    IvsSvsBaseRecord { ivs: "\u{6046}\u{e0100}", svs: None, base90: Some('\u{6046}'), base2004: Some('\u{6046}') },
    IvsSvsBaseRecord { ivs: "\u{604b}\u{e0100}", svs: None, base90: Some('\u{604b}'), base2004: Some('\u{604b}') },
    IvsSvsBaseRecord { ivs: "\u{6052}\u{e0100}", svs: None, base90: Some('\u{6052}'), base2004: Some('\u{6052}') },
    IvsSvsBaseRecord { ivs: "\u{6075}\u{e0100}", svs: None, base90: Some('\u{6075}'), base2004: Some('\u{6075}') },
    IvsSvsBaseRecord { ivs: "\u{60a9}\u{e0100}", svs: None, base90: Some('\u{60a9}'), base2004: Some('\u{60a9}') },
    IvsSvsBaseRecord { ivs: "\u{60aa}\u{e0100}", svs: None, base90: Some('\u{60aa}'), base2004: Some('\u{60aa}') },
    IvsSvsBaseRecord { ivs: "\u{60e0}\u{e0100}", svs: None, base90: Some('\u{60e0}'), base2004: Some('\u{60e0}') },
    IvsSvsBaseRecord { ivs: "\u{60e1}\u{e0100}", svs: None, base90: Some('\u{60e1}'), base2004: Some('\u{60e1}') },
    IvsSvsBaseRecord { ivs: "\u{60e8}\u{e0100}", svs: None, base90: Some('\u{60e8}'), base2004: Some('\u{60e8}') },
    IvsSvsBaseRecord { ivs: "\u{60f1}\u{e0100}", svs: None, base90: Some('\u{60f1}'), base2004: Some('\u{60f1}') },
    IvsSvsBaseRecord { ivs: "\u{613c}\u{e0100}", svs: None, base90: Some('\u{613c}'), base2004: Some('\u{613c}') },
    IvsSvsBaseRecord { ivs: "\u{614e}\u{e0100}", svs: None, base90: Some('\u{614e}'), base2004: Some('\u{614e}') },
    IvsSvsBaseRecord { ivs: "\u{6158}\u{e0100}", svs: None, base90: Some('\u{6158}'), base2004: Some('\u{6158}') },
    IvsSvsBaseRecord { ivs: "\u{61c9}\u{e0100}", svs: None, base90: Some('\u{61c9}'), base2004: Some('\u{61c9}') },
    IvsSvsBaseRecord { ivs: "\u{61d0}\u{e0100}", svs: None, base90: Some('\u{61d0}'), base2004: Some('\u{61d0}') },
    IvsSvsBaseRecord { ivs: "\u{61f7}\u{e0100}", svs: None, base90: Some('\u{61f7}'), base2004: Some('\u{61f7}') },
    IvsSvsBaseRecord { ivs: "\u{6200}\u{e0100}", svs: None, base90: Some('\u{6200}'), base2004: Some('\u{6200}') },
    IvsSvsBaseRecord { ivs: "\u{6226}\u{e0100}", svs: None, base90: Some('\u{6226}'), base2004: Some('\u{6226}') },
    IvsSvsBaseRecord { ivs: "\u{622f}\u{e0100}", svs: None, base90: Some('\u{622f}'), base2004: Some('\u{622f}') },
    IvsSvsBaseRecord { ivs: "\u{6230}\u{e0100}", svs: None, base90: Some('\u{6230}'), base2004: Some('\u{6230}') },
    IvsSvsBaseRecord { ivs: "\u{6232}\u{e0100}", svs: None, base90: Some('\u{6232}'), base2004: Some('\u{6232}') },
    IvsSvsBaseRecord { ivs: "\u{629c}\u{e0100}", svs: None, base90: Some('\u{629c}'), base2004: Some('\u{629c}') },
    IvsSvsBaseRecord { ivs: "\u{629e}\u{e0100}", svs: None, base90: Some('\u{629e}'), base2004: Some('\u{629e}') },
    IvsSvsBaseRecord { ivs: "\u{62c5}\u{e0100}", svs: None, base90: Some('\u{62c5}'), base2004: Some('\u{62c5}') },
    IvsSvsBaseRecord { ivs: "\u{62d4}\u{e0100}", svs: None, base90: Some('\u{62d4}'), base2004: Some('\u{62d4}') },
    IvsSvsBaseRecord { ivs: "\u{62dc}\u{e0100}", svs: None, base90: Some('\u{62dc}'), base2004: Some('\u{62dc}') },
    IvsSvsBaseRecord { ivs: "\u{62dd}\u{e0100}", svs: None, base90: Some('\u{62dd}'), base2004: Some('\u{62dd}') },
    IvsSvsBaseRecord { ivs: "\u{62e0}\u{e0100}", svs: None, base90: Some('\u{62e0}'), base2004: Some('\u{62e0}') },
    IvsSvsBaseRecord { ivs: "\u{62e1}\u{e0100}", svs: None, base90: Some('\u{62e1}'), base2004: Some('\u{62e1}') },
    IvsSvsBaseRecord { ivs: "\u{6319}\u{e0100}", svs: None, base90: Some('\u{6319}'), base2004: Some('\u{6319}') },
    IvsSvsBaseRecord { ivs: "\u{631f}\u{e0100}", svs: None, base90: Some('\u{631f}'), base2004: Some('\u{631f}') },
    IvsSvsBaseRecord { ivs: "\u{633e}\u{e0100}", svs: None, base90: Some('\u{633e}'), base2004: Some('\u{633e}') },
    IvsSvsBaseRecord { ivs: "\u{633f}\u{e0100}", svs: None, base90: Some('\u{633f}'), base2004: Some('\u{633f}') },
    IvsSvsBaseRecord { ivs: "\u{635c}\u{e0100}", svs: None, base90: Some('\u{635c}'), base2004: Some('\u{635c}') },
    IvsSvsBaseRecord { ivs: "\u{63d2}\u{e0100}", svs: None, base90: Some('\u{63d2}'), base2004: Some('\u{63d2}') },
    IvsSvsBaseRecord { ivs: "\u{63fa}\u{e0100}", svs: None, base90: Some('\u{63fa}'), base2004: Some('\u{63fa}') },
    IvsSvsBaseRecord { ivs: "\u{6416}\u{e0100}", svs: None, base90: Some('\u{6416}'), base2004: Some('\u{6416}') },
    IvsSvsBaseRecord { ivs: "\u{641c}\u{e0100}", svs: None, base90: Some('\u{641c}'), base2004: Some('\u{641c}') },
    IvsSvsBaseRecord { ivs: "\u{6442}\u{e0100}", svs: None, base90: Some('\u{6442}'), base2004: Some('\u{6442}') },
    IvsSvsBaseRecord { ivs: "\u{64c7}\u{e0100}", svs: None, base90: Some('\u{64c7}'), base2004: Some('\u{64c7}') },
    IvsSvsBaseRecord { ivs: "\u{64d4}\u{e0100}", svs: None, base90: Some('\u{64d4}'), base2004: Some('\u{64d4}') },
    IvsSvsBaseRecord { ivs: "\u{64da}\u{e0100}", svs: None, base90: Some('\u{64da}'), base2004: Some('\u{64da}') },
    IvsSvsBaseRecord { ivs: "\u{64e7}\u{e0100}", svs: None, base90: Some('\u{64e7}'), base2004: Some('\u{64e7}') },
    IvsSvsBaseRecord { ivs: "\u{64f4}\u{e0100}", svs: None, base90: Some('\u{64f4}'), base2004: Some('\u{64f4}') },
    IvsSvsBaseRecord { ivs: "\u{651d}\u{e0100}", svs: None, base90: Some('\u{651d}'), base2004: Some('\u{651d}') },
    IvsSvsBaseRecord { ivs: "\u{6536}\u{e0100}", svs: None, base90: Some('\u{6536}'), base2004: Some('\u{6536}') },
    IvsSvsBaseRecord { ivs: "\u{654d}\u{e0100}", svs: None, base90: Some('\u{654d}'), base2004: Some('\u{654d}') },
    IvsSvsBaseRecord { ivs: "\u{6570}\u{e0100}", svs: None, base90: Some('\u{6570}'), base2004: Some('\u{6570}') },
    IvsSvsBaseRecord { ivs: "\u{6578}\u{e0100}", svs: None, base90: Some('\u{6578}'), base2004: Some('\u{6578}') },
    IvsSvsBaseRecord { ivs: "\u{6589}\u{e0100}", svs: None, base90: Some('\u{6589}'), base2004: Some('\u{6589}') },
    IvsSvsBaseRecord { ivs: "\u{658e}\u{e0100}", svs: None, base90: Some('\u{658e}'), base2004: Some('\u{658e}') },
    IvsSvsBaseRecord { ivs: "\u{65ad}\u{e0100}", svs: None, base90: Some('\u{65ad}'), base2004: Some('\u{65ad}') },
    IvsSvsBaseRecord { ivs: "\u{65b7}\u{e0100}", svs: None, base90: Some('\u{65b7}'), base2004: Some('\u{65b7}') },
    IvsSvsBaseRecord { ivs: "\u{65e7}\u{e0100}", svs: None, base90: Some('\u{65e7}'), base2004: Some('\u{65e7}') },
    IvsSvsBaseRecord { ivs: "\u{663c}\u{e0100}", svs: None, base90: Some('\u{663c}'), base2004: Some('\u{663c}') },
    IvsSvsBaseRecord { ivs: "\u{6642}\u{e0100}", svs: None, base90: Some('\u{6642}'), base2004: Some('\u{6642}') },
    IvsSvsBaseRecord { ivs: "\u{665d}\u{e0100}", svs: None, base90: Some('\u{665d}'), base2004: Some('\u{665d}') },
    IvsSvsBaseRecord { ivs: "\u{6681}\u{e0100}", svs: None, base90: Some('\u{6681}'), base2004: Some('\u{6681}') },
    IvsSvsBaseRecord { ivs: "\u{6691}\u{e0100}", svs: None, base90: Some('\u{6691}'), base2004: Some('\u{6691}') },
    IvsSvsBaseRecord { ivs: "\u{66c9}\u{e0100}", svs: None, base90: Some('\u{66c9}'), base2004: Some('\u{66c9}') },
    IvsSvsBaseRecord { ivs: "\u{6703}\u{e0100}", svs: None, base90: Some('\u{6703}'), base2004: Some('\u{6703}') },
    IvsSvsBaseRecord { ivs: "\u{6761}\u{e0100}", svs: None, base90: Some('\u{6761}'), base2004: Some('\u{6761}') },
    IvsSvsBaseRecord { ivs: "\u{6765}\u{e0100}", svs: None, base90: Some('\u{6765}'), base2004: Some('\u{6765}') },
    IvsSvsBaseRecord { ivs: "\u{67a2}\u{e0100}", svs: None, base90: Some('\u{67a2}'), base2004: Some('\u{67a2}') },
    IvsSvsBaseRecord { ivs: "\u{6804}\u{e0100}", svs: None, base90: Some('\u{6804}'), base2004: Some('\u{6804}') },
    IvsSvsBaseRecord { ivs: "\u{682a}\u{e0100}", svs: None, base90: Some('\u{682a}'), base2004: Some('\u{682a}') },
    IvsSvsBaseRecord { ivs: "\u{685c}\u{e0100}", svs: None, base90: Some('\u{685c}'), base2004: Some('\u{685c}') },
    IvsSvsBaseRecord { ivs: "\u{685f}\u{e0100}", svs: None, base90: Some('\u{685f}'), base2004: Some('\u{685f}') },
    IvsSvsBaseRecord { ivs: "\u{6867}\u{e0100}", svs: None, base90: Some('\u{6867}'), base2004: Some('\u{6867}') },
    IvsSvsBaseRecord { ivs: "\u{689d}\u{e0100}", svs: None, base90: Some('\u{689d}'), base2004: Some('\u{689d}') },
    IvsSvsBaseRecord { ivs: "\u{68e7}\u{e0100}", svs: None, base90: Some('\u{68e7}'), base2004: Some('\u{68e7}') },
    IvsSvsBaseRecord { ivs: "\u{691c}\u{e0100}", svs: None, base90: Some('\u{691c}'), base2004: Some('\u{691c}') },
    IvsSvsBaseRecord { ivs: "\u{697c}\u{e0100}", svs: None, base90: Some('\u{697c}'), base2004: Some('\u{697c}') },
    IvsSvsBaseRecord { ivs: "\u{697d}\u{e0100}", svs: None, base90: Some('\u{697d}'), base2004: Some('\u{697d}') },
    IvsSvsBaseRecord { ivs: "\u{69ae}\u{e0100}", svs: None, base90: Some('\u{69ae}'), base2004: Some('\u{69ae}') },
    IvsSvsBaseRecord { ivs: "\u{69d8}\u{e0100}", svs: None, base90: Some('\u{69d8}'), base2004: Some('\u{69d8}') },
    IvsSvsBaseRecord { ivs: "\u{6a02}\u{e0100}", svs: None, base90: Some('\u{6a02}'), base2004: Some('\u{6a02}') },
    IvsSvsBaseRecord { ivs: "\u{6a13}\u{e0100}", svs: None, base90: Some('\u{6a13}'), base2004: Some('\u{6a13}') },
    IvsSvsBaseRecord { ivs: "\u{6a1e}\u{e0100}", svs: None, base90: Some('\u{6a1e}'), base2004: Some('\u{6a1e}') },
    IvsSvsBaseRecord { ivs: "\u{6a23}\u{e0100}", svs: None, base90: Some('\u{6a23}'), base2004: Some('\u{6a23}') },
    IvsSvsBaseRecord { ivs: "\u{6a29}\u{e0100}", svs: None, base90: Some('\u{6a29}'), base2004: Some('\u{6a29}') },
    IvsSvsBaseRecord { ivs: "\u{6a9c}\u{e0100}", svs: None, base90: Some('\u{6a9c}'), base2004: Some('\u{6a9c}') },
    IvsSvsBaseRecord { ivs: "\u{6aa2}\u{e0100}", svs: None, base90: Some('\u{6aa2}'), base2004: Some('\u{6aa2}') },
    IvsSvsBaseRecord { ivs: "\u{6afb}\u{e0100}", svs: None, base90: Some('\u{6afb}'), base2004: Some('\u{6afb}') },
    IvsSvsBaseRecord { ivs: "\u{6b0a}\u{e0100}", svs: None, base90: Some('\u{6b0a}'), base2004: Some('\u{6b0a}') },
    IvsSvsBaseRecord { ivs: "\u{6b20}\u{e0100}", svs: None, base90: Some('\u{6b20}'), base2004: Some('\u{6b20}') },
    IvsSvsBaseRecord { ivs: "\u{6b27}\u{e0100}", svs: None, base90: Some('\u{6b27}'), base2004: Some('\u{6b27}') },
    IvsSvsBaseRecord { ivs: "\u{6b50}\u{e0100}", svs: None, base90: Some('\u{6b50}'), base2004: Some('\u{6b50}') },
    IvsSvsBaseRecord { ivs: "\u{6b53}\u{e0100}", svs: None, base90: Some('\u{6b53}'), base2004: Some('\u{6b53}') },
    IvsSvsBaseRecord { ivs: "\u{6b61}\u{e0100}", svs: None, base90: Some('\u{6b61}'), base2004: Some('\u{6b61}') },
    IvsSvsBaseRecord { ivs: "\u{6b65}\u{e0100}", svs: None, base90: Some('\u{6b65}'), base2004: Some('\u{6b65}') },
    IvsSvsBaseRecord { ivs: "\u{6b69}\u{e0100}", svs: None, base90: Some('\u{6b69}'), base2004: Some('\u{6b69}') },
    IvsSvsBaseRecord { ivs: "\u{6b6f}\u{e0100}", svs: None, base90: Some('\u{6b6f}'), base2004: Some('\u{6b6f}') },
    IvsSvsBaseRecord { ivs: "\u{6b78}\u{e0100}", svs: None, base90: Some('\u{6b78}'), base2004: Some('\u{6b78}') },
    IvsSvsBaseRecord { ivs: "\u{6b8b}\u{e0100}", svs: None, base90: Some('\u{6b8b}'), base2004: Some('\u{6b8b}') },
    IvsSvsBaseRecord { ivs: "\u{6b98}\u{e0100}", svs: None, base90: Some('\u{6b98}'), base2004: Some('\u{6b98}') },
    IvsSvsBaseRecord { ivs: "\u{6bb4}\u{e0100}", svs: None, base90: Some('\u{6bb4}'), base2004: Some('\u{6bb4}') },
    IvsSvsBaseRecord { ivs: "\u{6bbb}\u{e0100}", svs: None, base90: Some('\u{6bbb}'), base2004: Some('\u{6bbb}') },
    IvsSvsBaseRecord { ivs: "\u{6bbc}\u{e0100}", svs: None, base90: Some('\u{6bbc}'), base2004: Some('\u{6bbc}') },
    IvsSvsBaseRecord { ivs: "\u{6bc6}\u{e0100}", svs: None, base90: Some('\u{6bc6}'), base2004: Some('\u{6bc6}') },
    IvsSvsBaseRecord { ivs: "\u{6c17}\u{e0100}", svs: None, base90: Some('\u{6c17}'), base2004: Some('\u{6c17}') },
    IvsSvsBaseRecord { ivs: "\u{6c23}\u{e0100}", svs: None, base90: Some('\u{6c23}'), base2004: Some('\u{6c23}') },
    IvsSvsBaseRecord { ivs: "\u{6c92}\u{e0100}", svs: None, base90: Some('\u{6c92}'), base2004: Some('\u{6c92}') },
    IvsSvsBaseRecord { ivs: "\u{6ca1}\u{e0100}", svs: None, base90: Some('\u{6ca1}'), base2004: Some('\u{6ca1}') },
    IvsSvsBaseRecord { ivs: "\u{6ca2}\u{e0100}", svs: None, base90: Some('\u{6ca2}'), base2004: Some('\u{6ca2}') },
    IvsSvsBaseRecord { ivs: "\u{6d44}\u{e0100}", svs: None, base90: Some('\u{6d44}'), base2004: Some('\u{6d44}') },
    IvsSvsBaseRecord { ivs: "\u{6d45}\u{e0100}", svs: None, base90: Some('\u{6d45}'), base2004: Some('\u{6d45}') },
    IvsSvsBaseRecord { ivs: "\u{6d77}\u{e0100}", svs: Some("\u{6d77}\u{fe00}"), base90: Some('\u{6d77}'), base2004: Some('\u{6d77}') },
    IvsSvsBaseRecord { ivs: "\u{6d99}\u{e0100}", svs: None, base90: Some('\u{6d99}'), base2004: Some('\u{6d99}') },
    IvsSvsBaseRecord { ivs: "\u{6dda}\u{e0100}", svs: None, base90: Some('\u{6dda}'), base2004: Some('\u{6dda}') },
    IvsSvsBaseRecord { ivs: "\u{6de8}\u{e0100}", svs: None, base90: Some('\u{6de8}'), base2004: Some('\u{6de8}') },
    IvsSvsBaseRecord { ivs: "\u{6dfa}\u{e0100}", svs: None, base90: Some('\u{6dfa}'), base2004: Some('\u{6dfa}') },
    IvsSvsBaseRecord { ivs: "\u{6e08}\u{e0100}", svs: None, base90: Some('\u{6e08}'), base2004: Some('\u{6e08}') },
    IvsSvsBaseRecord { ivs: "\u{6e0b}\u{e0100}", svs: None, base90: Some('\u{6e0b}'), base2004: Some('\u{6e0b}') },
    IvsSvsBaseRecord { ivs: "\u{6e13}\u{e0100}", svs: None, base90: Some('\u{6e13}'), base2004: Some('\u{6e13}') },
    IvsSvsBaseRecord { ivs: "\u{6e1a}\u{e0100}", svs: Some("\u{6e1a}\u{fe00}"), base90: Some('\u{6e1a}'), base2004: Some('\u{6e1a}') },
    IvsSvsBaseRecord { ivs: "\u{6e7e}\u{e0100}", svs: None, base90: Some('\u{6e7e}'), base2004: Some('\u{6e7e}') },
    IvsSvsBaseRecord { ivs: "\u{6e7f}\u{e0100}", svs: None, base90: Some('\u{6e7f}'), base2004: Some('\u{6e7f}') },
    IvsSvsBaseRecord { ivs: "\u{6e80}\u{e0100}", svs: None, base90: Some('\u{6e80}'), base2004: Some('\u{6e80}') },
    IvsSvsBaseRecord { ivs: "\u{6eaa}\u{e0100}", svs: None, base90: Some('\u{6eaa}'), base2004: Some('\u{6eaa}') },
    IvsSvsBaseRecord { ivs: "\u{6edd}\u{e0100}", svs: None, base90: Some('\u{6edd}'), base2004: Some('\u{6edd}') },
    IvsSvsBaseRecord { ivs: "\u{6ede}\u{e0100}", svs: None, base90: Some('\u{6ede}'), base2004: Some('\u{6ede}') },
    IvsSvsBaseRecord { ivs: "\u{6eef}\u{e0100}", svs: None, base90: Some('\u{6eef}'), base2004: Some('\u{6eef}') },
    IvsSvsBaseRecord { ivs: "\u{6eff}\u{e0100}", svs: None, base90: Some('\u{6eff}'), base2004: Some('\u{6eff}') },
    IvsSvsBaseRecord { ivs: "\u{6f22}\u{e0100}", svs: Some("\u{6f22}\u{fe00}"), base90: Some('\u{6f22}'), base2004: Some('\u{6f22}') },
    IvsSvsBaseRecord { ivs: "\u{6f5b}\u{e0100}", svs: None, base90: Some('\u{6f5b}'), base2004: Some('\u{6f5b}') },
    IvsSvsBaseRecord { ivs: "\u{6f5c}\u{e0100}", svs: None, base90: Some('\u{6f5c}'), base2004: Some('\u{6f5c}') },
    IvsSvsBaseRecord { ivs: "\u{6f81}\u{e0100}", svs: None, base90: Some('\u{6f81}'), base2004: Some('\u{6f81}') },
    IvsSvsBaseRecord { ivs: "\u{6fa4}\u{e0100}", svs: None, base90: Some('\u{6fa4}'), base2004: Some('\u{6fa4}') },
    IvsSvsBaseRecord { ivs: "\u{6fd5}\u{e0100}", svs: None, base90: Some('\u{6fd5}'), base2004: Some('\u{6fd5}') },
    IvsSvsBaseRecord { ivs: "\u{6fdf}\u{e0100}", svs: None, base90: Some('\u{6fdf}'), base2004: Some('\u{6fdf}') },
    IvsSvsBaseRecord { ivs: "\u{7027}\u{e0100}", svs: None, base90: Some('\u{7027}'), base2004: Some('\u{7027}') },
    IvsSvsBaseRecord { ivs: "\u{7063}\u{e0100}", svs: None, base90: Some('\u{7063}'), base2004: Some('\u{7063}') },
    IvsSvsBaseRecord { ivs: "\u{706f}\u{e0100}", svs: None, base90: Some('\u{706f}'), base2004: Some('\u{706f}') },
    IvsSvsBaseRecord { ivs: "\u{7089}\u{e0100}", svs: None, base90: Some('\u{7089}'), base2004: Some('\u{7089}') },
    IvsSvsBaseRecord { ivs: "\u{70b9}\u{e0100}", svs: None, base90: Some('\u{70b9}'), base2004: Some('\u{70b9}') },
    IvsSvsBaseRecord { ivs: "\u{70ba}\u{e0100}", svs: Some("\u{70ba}\u{fe00}"), base90: Some('\u{70ba}'), base2004: Some('\u{70ba}') },
    IvsSvsBaseRecord { ivs: "\u{713c}\u{e0100}", svs: None, base90: Some('\u{713c}'), base2004: Some('\u{713c}') },
    IvsSvsBaseRecord { ivs: "\u{71c8}\u{e0100}", svs: None, base90: Some('\u{71c8}'), base2004: Some('\u{71c8}') },
    IvsSvsBaseRecord { ivs: "\u{71d2}\u{e0100}", svs: None, base90: Some('\u{71d2}'), base2004: Some('\u{71d2}') },
    IvsSvsBaseRecord { ivs: "\u{71df}\u{e0100}", svs: None, base90: Some('\u{71df}'), base2004: Some('\u{71df}') },
    IvsSvsBaseRecord { ivs: "\u{7210}\u{e0100}", svs: None, base90: Some('\u{7210}'), base2004: Some('\u{7210}') },
    IvsSvsBaseRecord { ivs: "\u{722d}\u{e0100}", svs: None, base90: Some('\u{722d}'), base2004: Some('\u{722d}') },
    IvsSvsBaseRecord { ivs: "\u{7232}\u{e0100}", svs: None, base90: Some('\u{7232}'), base2004: Some('\u{7232}') },
    IvsSvsBaseRecord { ivs: "\u{72a0}\u{e0100}", svs: None, base90: Some('\u{72a0}'), base2004: Some('\u{72a0}') },
    IvsSvsBaseRecord { ivs: "\u{72a7}\u{e0100}", svs: None, base90: Some('\u{72a7}'), base2004: Some('\u{72a7}') },
    IvsSvsBaseRecord { ivs: "\u{72b6}\u{e0100}", svs: None, base90: Some('\u{72b6}'), base2004: Some('\u{72b6}') },
    IvsSvsBaseRecord { ivs: "\u{72c0}\u{e0100}", svs: None, base90: Some('\u{72c0}'), base2004: Some('\u{72c0}') },
    IvsSvsBaseRecord { ivs: "\u{72ec}\u{e0100}", svs: None, base90: Some('\u{72ec}'), base2004: Some('\u{72ec}') },
    IvsSvsBaseRecord { ivs: "\u{72ed}\u{e0100}", svs: None, base90: Some('\u{72ed}'), base2004: Some('\u{72ed}') },
    IvsSvsBaseRecord { ivs: "\u{72f9}\u{e0100}", svs: None, base90: Some('\u{72f9}'), base2004: Some('\u{72f9}') },
    IvsSvsBaseRecord { ivs: "\u{731f}\u{e0100}", svs: None, base90: Some('\u{731f}'), base2004: Some('\u{731f}') },
    IvsSvsBaseRecord { ivs: "\u{732e}\u{e0100}", svs: None, base90: Some('\u{732e}'), base2004: Some('\u{732e}') },
    IvsSvsBaseRecord { ivs: "\u{7363}\u{e0100}", svs: None, base90: Some('\u{7363}'), base2004: Some('\u{7363}') },
    IvsSvsBaseRecord { ivs: "\u{7368}\u{e0100}", svs: None, base90: Some('\u{7368}'), base2004: Some('\u{7368}') },
    IvsSvsBaseRecord { ivs: "\u{7375}\u{e0100}", svs: None, base90: Some('\u{7375}'), base2004: Some('\u{7375}') },
    IvsSvsBaseRecord { ivs: "\u{7378}\u{e0100}", svs: None, base90: Some('\u{7378}'), base2004: Some('\u{7378}') },
    IvsSvsBaseRecord { ivs: "\u{737b}\u{e0100}", svs: None, base90: Some('\u{737b}'), base2004: Some('\u{737b}') },
    IvsSvsBaseRecord { ivs: "\u{753b}\u{e0100}", svs: None, base90: Some('\u{753b}'), base2004: Some('\u{753b}') },
    IvsSvsBaseRecord { ivs: "\u{756b}\u{e0100}", svs: None, base90: Some('\u{756b}'), base2004: Some('\u{756b}') },
    IvsSvsBaseRecord { ivs: "\u{7573}\u{e0100}", svs: None, base90: Some('\u{7573}'), base2004: Some('\u{7573}') },
    IvsSvsBaseRecord { ivs: "\u{7576}\u{e0100}", svs: None, base90: Some('\u{7576}'), base2004: Some('\u{7576}') },
    IvsSvsBaseRecord { ivs: "\u{758a}\u{e0100}", svs: None, base90: Some('\u{758a}'), base2004: Some('\u{758a}') },
    IvsSvsBaseRecord { ivs: "\u{767a}\u{e0100}", svs: None, base90: Some('\u{767a}'), base2004: Some('\u{767a}') },
    IvsSvsBaseRecord { ivs: "\u{767c}\u{e0100}", svs: None, base90: Some('\u{767c}'), base2004: Some('\u{767c}') },
    IvsSvsBaseRecord { ivs: "\u{76d7}\u{e0100}", svs: None, base90: Some('\u{76d7}'), base2004: Some('\u{76d7}') },
    IvsSvsBaseRecord { ivs: "\u{76dc}\u{e0100}", svs: None, base90: Some('\u{76dc}'), base2004: Some('\u{76dc}') },
    IvsSvsBaseRecord { ivs: "\u{76e1}\u{e0100}", svs: None, base90: Some('\u{76e1}'), base2004: Some('\u{76e1}') },
    IvsSvsBaseRecord { ivs: "\u{770c}\u{e0100}", svs: None, base90: Some('\u{770c}'), base2004: Some('\u{770c}') },
    IvsSvsBaseRecord { ivs: "\u{771e}\u{e0100}", svs: None, base90: Some('\u{771e}'), base2004: Some('\u{771e}') },
    IvsSvsBaseRecord { ivs: "\u{771f}\u{e0100}", svs: None, base90: Some('\u{771f}'), base2004: Some('\u{771f}') },
    IvsSvsBaseRecord { ivs: "\u{7815}\u{e0100}", svs: None, base90: Some('\u{7815}'), base2004: Some('\u{7815}') },
    IvsSvsBaseRecord { ivs: "\u{788e}\u{e0100}", svs: None, base90: Some('\u{788e}'), base2004: Some('\u{788e}') },
    IvsSvsBaseRecord { ivs: "\u{793c}\u{e0100}", svs: None, base90: Some('\u{793c}'), base2004: Some('\u{793c}') },
    IvsSvsBaseRecord { ivs: "\u{793e}\u{e0100}", svs: None, base90: Some('\u{793e}'), base2004: Some('\u{793e}') },
    IvsSvsBaseRecord { ivs: "\u{7955}\u{e0100}", svs: None, base90: Some('\u{7955}'), base2004: Some('\u{7955}') },
    IvsSvsBaseRecord { ivs: "\u{795e}\u{e0100}", svs: Some("\u{795e}\u{fe00}"), base90: Some('\u{795e}'), base2004: Some('\u{795e}') },
    IvsSvsBaseRecord { ivs: "\u{7965}\u{e0100}", svs: Some("\u{7965}\u{fe00}"), base90: Some('\u{7965}'), base2004: Some('\u{7965}') },
    IvsSvsBaseRecord { ivs: "\u{7985}\u{e0100}", svs: None, base90: Some('\u{7985}'), base2004: Some('\u{7985}') },
    IvsSvsBaseRecord { ivs: "\u{798f}\u{e0100}", svs: Some("\u{798f}\u{fe00}"), base90: Some('\u{798f}'), base2004: Some('\u{798f}') },
    IvsSvsBaseRecord { ivs: "\u{79aa}\u{e0100}", svs: None, base90: Some('\u{79aa}'), base2004: Some('\u{79aa}') },
    IvsSvsBaseRecord { ivs: "\u{79ae}\u{e0100}", svs: None, base90: Some('\u{79ae}'), base2004: Some('\u{79ae}') },
    IvsSvsBaseRecord { ivs: "\u{79d8}\u{e0100}", svs: None, base90: Some('\u{79d8}'), base2004: Some('\u{79d8}') },
    IvsSvsBaseRecord { ivs: "\u{7a32}\u{e0100}", svs: None, base90: Some('\u{7a32}'), base2004: Some('\u{7a32}') },
    IvsSvsBaseRecord { ivs: "\u{7a3b}\u{e0100}", svs: None, base90: Some('\u{7a3b}'), base2004: Some('\u{7a3b}') },
    IvsSvsBaseRecord { ivs: "\u{7a42}\u{e0100}", svs: None, base90: Some('\u{7a42}'), base2004: Some('\u{7a42}') },
    IvsSvsBaseRecord { ivs: "\u{7a57}\u{e0100}", svs: None, base90: Some('\u{7a57}'), base2004: Some('\u{7a57}') },
    IvsSvsBaseRecord { ivs: "\u{7a83}\u{e0100}", svs: None, base90: Some('\u{7a83}'), base2004: Some('\u{7a83}') },
    IvsSvsBaseRecord { ivs: "\u{7aca}\u{e0100}", svs: None, base90: Some('\u{7aca}'), base2004: Some('\u{7aca}') },
    IvsSvsBaseRecord { ivs: "\u{7adc}\u{e0100}", svs: None, base90: Some('\u{7adc}'), base2004: Some('\u{7adc}') },
    IvsSvsBaseRecord { ivs: "\u{7c8b}\u{e0100}", svs: None, base90: Some('\u{7c8b}'), base2004: Some('\u{7c8b}') },
    IvsSvsBaseRecord { ivs: "\u{7c9b}\u{e0100}", svs: None, base90: Some('\u{7c9b}'), base2004: Some('\u{7c9b}') },
    IvsSvsBaseRecord { ivs: "\u{7cb9}\u{e0100}", svs: None, base90: Some('\u{7cb9}'), base2004: Some('\u{7cb9}') },
    IvsSvsBaseRecord { ivs: "\u{7cbe}\u{e0100}", svs: Some("\u{7cbe}\u{fe00}"), base90: Some('\u{7cbe}'), base2004: Some('\u{7cbe}') },
    IvsSvsBaseRecord { ivs: "\u{7cf8}\u{e0100}", svs: None, base90: Some('\u{7cf8}'), base2004: Some('\u{7cf8}') },
    IvsSvsBaseRecord { ivs: "\u{7d4c}\u{e0100}", svs: None, base90: Some('\u{7d4c}'), base2004: Some('\u{7d4c}') },
    IvsSvsBaseRecord { ivs: "\u{7d72}\u{e0100}", svs: None, base90: Some('\u{7d72}'), base2004: Some('\u{7d72}') },
    IvsSvsBaseRecord { ivs: "\u{7d75}\u{e0100}", svs: None, base90: Some('\u{7d75}'), base2004: Some('\u{7d75}') },
    IvsSvsBaseRecord { ivs: "\u{7d93}\u{e0100}", svs: None, base90: Some('\u{7d93}'), base2004: Some('\u{7d93}') },
    IvsSvsBaseRecord { ivs: "\u{7d99}\u{e0100}", svs: None, base90: Some('\u{7d99}'), base2004: Some('\u{7d99}') },
    IvsSvsBaseRecord { ivs: "\u{7d9a}\u{e0100}", svs: None, base90: Some('\u{7d9a}'), base2004: Some('\u{7d9a}') },
    IvsSvsBaseRecord { ivs: "\u{7da0}\u{e0100}", svs: None, base90: Some('\u{7da0}'), base2004: Some('\u{7da0}') },
    IvsSvsBaseRecord { ivs: "\u{7dcf}\u{e0100}", svs: None, base90: Some('\u{7dcf}'), base2004: Some('\u{7dcf}') },
    IvsSvsBaseRecord { ivs: "\u{7dd1}\u{e0100}", svs: None, base90: Some('\u{7dd1}'), base2004: Some('\u{7dd1}') },
    IvsSvsBaseRecord { ivs: "\u{7de3}\u{e0100}", svs: None, base90: Some('\u{7de3}'), base2004: Some('\u{7de3}') },
    IvsSvsBaseRecord { ivs: "\u{7e01}\u{e0100}", svs: None, base90: Some('\u{7e01}'), base2004: Some('\u{7e01}') },
    IvsSvsBaseRecord { ivs: "\u{7e04}\u{e0100}", svs: None, base90: Some('\u{7e04}'), base2004: Some('\u{7e04}') },
    IvsSvsBaseRecord { ivs: "\u{7e23}\u{e0100}", svs: None, base90: Some('\u{7e23}'), base2004: Some('\u{7e23}') },
    IvsSvsBaseRecord { ivs: "\u{7e26}\u{e0100}", svs: None, base90: Some('\u{7e26}'), base2004: Some('\u{7e26}') },
    IvsSvsBaseRecord { ivs: "\u{7e31}\u{e0100}", svs: None, base90: Some('\u{7e31}'), base2004: Some('\u{7e31}') },
    IvsSvsBaseRecord { ivs: "\u{7e3d}\u{e0100}", svs: None, base90: Some('\u{7e3d}'), base2004: Some('\u{7e3d}') },
    IvsSvsBaseRecord { ivs: "\u{7e4a}\u{e0100}", svs: None, base90: Some('\u{7e4a}'), base2004: Some('\u{7e4a}') },
    IvsSvsBaseRecord { ivs: "\u{7e69}\u{e0100}", svs: None, base90: Some('\u{7e69}'), base2004: Some('\u{7e69}') },
    IvsSvsBaseRecord { ivs: "\u{7e6a}\u{e0100}", svs: None, base90: Some('\u{7e6a}'), base2004: Some('\u{7e6a}') },
    IvsSvsBaseRecord { ivs: "\u{7e7c}\u{e0100}", svs: None, base90: Some('\u{7e7c}'), base2004: Some('\u{7e7c}') },
    IvsSvsBaseRecord { ivs: "\u{7e8c}\u{e0100}", svs: None, base90: Some('\u{7e8c}'), base2004: Some('\u{7e8c}') },
    IvsSvsBaseRecord { ivs: "\u{7e96}\u{e0100}", svs: None, base90: Some('\u{7e96}'), base2004: Some('\u{7e96}') },
    IvsSvsBaseRecord { ivs: "\u{7f36}\u{e0100}", svs: None, base90: Some('\u{7f36}'), base2004: Some('\u{7f36}') },
    IvsSvsBaseRecord { ivs: "\u{7f3a}\u{e0100}", svs: None, base90: Some('\u{7f3a}'), base2004: Some('\u{7f3a}') },
    IvsSvsBaseRecord { ivs: "\u{7f50}\u{e0100}", svs: None, base90: Some('\u{7f50}'), base2004: Some('\u{7f50}') },
    IvsSvsBaseRecord { ivs: "\u{7fbd}\u{e0100}", svs: Some("\u{7fbd}\u{fe00}"), base90: Some('\u{7fbd}'), base2004: Some('\u{7fbd}') },
    IvsSvsBaseRecord { ivs: "\u{8072}\u{e0100}", svs: None, base90: Some('\u{8072}'), base2004: Some('\u{8072}') },
    IvsSvsBaseRecord { ivs: "\u{8074}\u{e0100}", svs: None, base90: Some('\u{8074}'), base2004: Some('\u{8074}') },
    IvsSvsBaseRecord { ivs: "\u{807d}\u{e0100}", svs: None, base90: Some('\u{807d}'), base2004: Some('\u{807d}') },
    IvsSvsBaseRecord { ivs: "\u{8085}\u{e0100}", svs: None, base90: Some('\u{8085}'), base2004: Some('\u{8085}') },
    IvsSvsBaseRecord { ivs: "\u{80c6}\u{e0100}", svs: None, base90: Some('\u{80c6}'), base2004: Some('\u{80c6}') },
    IvsSvsBaseRecord { ivs: "\u{8133}\u{e0100}", svs: None, base90: Some('\u{8133}'), base2004: Some('\u{8133}') },
    IvsSvsBaseRecord { ivs: "\u{8166}\u{e0100}", svs: None, base90: Some('\u{8166}'), base2004: Some('\u{8166}') },
    IvsSvsBaseRecord { ivs: "\u{81bd}\u{e0100}", svs: None, base90: Some('\u{81bd}'), base2004: Some('\u{81bd}') },
    IvsSvsBaseRecord { ivs: "\u{81d3}\u{e0100}", svs: None, base90: Some('\u{81d3}'), base2004: Some('\u{81d3}') },
    IvsSvsBaseRecord { ivs: "\u{81df}\u{e0100}", svs: None, base90: Some('\u{81df}'), base2004: Some('\u{81df}') },
    IvsSvsBaseRecord { ivs: "\u{81fa}\u{e0100}", svs: None, base90: Some('\u{81fa}'), base2004: Some('\u{81fa}') },
    IvsSvsBaseRecord { ivs: "\u{8207}\u{e0100}", svs: None, base90: Some('\u{8207}'), base2004: Some('\u{8207}') },
    IvsSvsBaseRecord { ivs: "\u{820a}\u{e0100}", svs: None, base90: Some('\u{820a}'), base2004: Some('\u{820a}') },
    IvsSvsBaseRecord { ivs: "\u{820d}\u{e0100}", svs: None, base90: Some('\u{820d}'), base2004: Some('\u{820d}') },
    IvsSvsBaseRecord { ivs: "\u{820e}\u{e0100}", svs: None, base90: Some('\u{820e}'), base2004: Some('\u{820e}') },
    IvsSvsBaseRecord { ivs: "\u{8216}\u{e0100}", svs: None, base90: Some('\u{8216}'), base2004: Some('\u{8216}') },
    IvsSvsBaseRecord { ivs: "\u{8217}\u{e0100}", svs: None, base90: Some('\u{8217}'), base2004: Some('\u{8217}') },
    IvsSvsBaseRecord { ivs: "\u{82b8}\u{e0100}", svs: None, base90: Some('\u{82b8}'), base2004: Some('\u{82b8}') },
    IvsSvsBaseRecord { ivs: "\u{830e}\u{e0100}", svs: None, base90: Some('\u{830e}'), base2004: Some('\u{830e}') },
    IvsSvsBaseRecord { ivs: "\u{8358}\u{e0100}", svs: None, base90: Some('\u{8358}'), base2004: Some('\u{8358}') },
    IvsSvsBaseRecord { ivs: "\u{838a}\u{e0100}", svs: None, base90: Some('\u{838a}'), base2004: Some('\u{838a}') },
    IvsSvsBaseRecord { ivs: "\u{8396}\u{e0100}", svs: None, base90: Some('\u{8396}'), base2004: Some('\u{8396}') },
    IvsSvsBaseRecord { ivs: "\u{845b}\u{e0100}", svs: None, base90: Some('\u{845b}'), base2004: Some('\u{845b}') },
    IvsSvsBaseRecord { ivs: "\u{8535}\u{e0100}", svs: None, base90: Some('\u{8535}'), base2004: Some('\u{8535}') },
    IvsSvsBaseRecord { ivs: "\u{853d}\u{e0100}", svs: None, base90: Some('\u{853d}'), base2004: Some('\u{853d}') },
    IvsSvsBaseRecord { ivs: "\u{85ac}\u{e0100}", svs: None, base90: Some('\u{85ac}'), base2004: Some('\u{85ac}') },
    IvsSvsBaseRecord { ivs: "\u{85cf}\u{e0100}", svs: None, base90: Some('\u{85cf}'), base2004: Some('\u{85cf}') },
    IvsSvsBaseRecord { ivs: "\u{85dd}\u{e0100}", svs: None, base90: Some('\u{85dd}'), base2004: Some('\u{85dd}') },
    IvsSvsBaseRecord { ivs: "\u{85e5}\u{e0100}", svs: None, base90: Some('\u{85e5}'), base2004: Some('\u{85e5}') },
    IvsSvsBaseRecord { ivs: "\u{8655}\u{e0100}", svs: None, base90: Some('\u{8655}'), base2004: Some('\u{8655}') },
    IvsSvsBaseRecord { ivs: "\u{865f}\u{e0100}", svs: None, base90: Some('\u{865f}'), base2004: Some('\u{865f}') },
    IvsSvsBaseRecord { ivs: "\u{866b}\u{e0100}", svs: None, base90: Some('\u{866b}'), base2004: Some('\u{866b}') },
    IvsSvsBaseRecord { ivs: "\u{8695}\u{e0100}", svs: None, base90: Some('\u{8695}'), base2004: Some('\u{8695}') },
    IvsSvsBaseRecord { ivs: "\u{86cd}\u{e0100}", svs: None, base90: Some('\u{86cd}'), base2004: Some('\u{86cd}') },
    IvsSvsBaseRecord { ivs: "\u{86ee}\u{e0100}", svs: None, base90: Some('\u{86ee}'), base2004: Some('\u{86ee}') },
    IvsSvsBaseRecord { ivs: "\u{87a2}\u{e0100}", svs: None, base90: Some('\u{87a2}'), base2004: Some('\u{87a2}') },
    IvsSvsBaseRecord { ivs: "\u{87f2}\u{e0100}", svs: None, base90: Some('\u{87f2}'), base2004: Some('\u{87f2}') },
    IvsSvsBaseRecord { ivs: "\u{8836}\u{e0100}", svs: None, base90: Some('\u{8836}'), base2004: Some('\u{8836}') },
    IvsSvsBaseRecord { ivs: "\u{883b}\u{e0100}", svs: None, base90: Some('\u{883b}'), base2004: Some('\u{883b}') },
    IvsSvsBaseRecord { ivs: "\u{885b}\u{e0100}", svs: None, base90: Some('\u{885b}'), base2004: Some('\u{885b}') },
    IvsSvsBaseRecord { ivs: "\u{885e}\u{e0100}", svs: None, base90: Some('\u{885e}'), base2004: Some('\u{885e}') },
    IvsSvsBaseRecord { ivs: "\u{88c5}\u{e0100}", svs: None, base90: Some('\u{88c5}'), base2004: Some('\u{88c5}') },
    IvsSvsBaseRecord { ivs: "\u{88dd}\u{e0100}", svs: None, base90: Some('\u{88dd}'), base2004: Some('\u{88dd}') },
    IvsSvsBaseRecord { ivs: "\u{8987}\u{e0100}", svs: None, base90: Some('\u{8987}'), base2004: Some('\u{8987}') },
    IvsSvsBaseRecord { ivs: "\u{899a}\u{e0100}", svs: None, base90: Some('\u{899a}'), base2004: Some('\u{899a}') },
    IvsSvsBaseRecord { ivs: "\u{89a7}\u{e0100}", svs: None, base90: Some('\u{89a7}'), base2004: Some('\u{89a7}') },
    IvsSvsBaseRecord { ivs: "\u{89b3}\u{e0100}", svs: None, base90: Some('\u{89b3}'), base2004: Some('\u{89b3}') },
    IvsSvsBaseRecord { ivs: "\u{89ba}\u{e0100}", svs: None, base90: Some('\u{89ba}'), base2004: Some('\u{89ba}') },
    IvsSvsBaseRecord { ivs: "\u{89bd}\u{e0100}", svs: None, base90: Some('\u{89bd}'), base2004: Some('\u{89bd}') },
    IvsSvsBaseRecord { ivs: "\u{89c0}\u{e0100}", svs: None, base90: Some('\u{89c0}'), base2004: Some('\u{89c0}') },
    IvsSvsBaseRecord { ivs: "\u{89e6}\u{e0100}", svs: None, base90: Some('\u{89e6}'), base2004: Some('\u{89e6}') },
    IvsSvsBaseRecord { ivs: "\u{89f8}\u{e0100}", svs: None, base90: Some('\u{89f8}'), base2004: Some('\u{89f8}') },
    IvsSvsBaseRecord { ivs: "\u{8a33}\u{e0100}", svs: None, base90: Some('\u{8a33}'), base2004: Some('\u{8a33}') },
    IvsSvsBaseRecord { ivs: "\u{8a3c}\u{e0100}", svs: None, base90: Some('\u{8a3c}'), base2004: Some('\u{8a3c}') },
    IvsSvsBaseRecord { ivs: "\u{8a89}\u{e0100}", svs: None, base90: Some('\u{8a89}'), base2004: Some('\u{8a89}') },
    IvsSvsBaseRecord { ivs: "\u{8aad}\u{e0100}", svs: None, base90: Some('\u{8aad}'), base2004: Some('\u{8aad}') },
    IvsSvsBaseRecord { ivs: "\u{8b20}\u{e0100}", svs: None, base90: Some('\u{8b20}'), base2004: Some('\u{8b20}') },
    IvsSvsBaseRecord { ivs: "\u{8b21}\u{e0100}", svs: None, base90: Some('\u{8b21}'), base2004: Some('\u{8b21}') },
    IvsSvsBaseRecord { ivs: "\u{8b49}\u{e0100}", svs: None, base90: Some('\u{8b49}'), base2004: Some('\u{8b49}') },
    IvsSvsBaseRecord { ivs: "\u{8b6f}\u{e0100}", svs: None, base90: Some('\u{8b6f}'), base2004: Some('\u{8b6f}') },
    IvsSvsBaseRecord { ivs: "\u{8b72}\u{e0100}", svs: None, base90: Some('\u{8b72}'), base2004: Some('\u{8b72}') },
    IvsSvsBaseRecord { ivs: "\u{8b7d}\u{e0100}", svs: None, base90: Some('\u{8b7d}'), base2004: Some('\u{8b7d}') },
    IvsSvsBaseRecord { ivs: "\u{8b80}\u{e0100}", svs: None, base90: Some('\u{8b80}'), base2004: Some('\u{8b80}') },
    IvsSvsBaseRecord { ivs: "\u{8b8a}\u{e0100}", svs: None, base90: Some('\u{8b8a}'), base2004: Some('\u{8b8a}') },
    IvsSvsBaseRecord { ivs: "\u{8b93}\u{e0100}", svs: None, base90: Some('\u{8b93}'), base2004: Some('\u{8b93}') },
    IvsSvsBaseRecord { ivs: "\u{8c4a}\u{e0100}", svs: None, base90: Some('\u{8c4a}'), base2004: Some('\u{8c4a}') },
    IvsSvsBaseRecord { ivs: "\u{8c50}\u{e0100}", svs: None, base90: Some('\u{8c50}'), base2004: Some('\u{8c50}') },
    IvsSvsBaseRecord { ivs: "\u{8c6b}\u{e0100}", svs: None, base90: Some('\u{8c6b}'), base2004: Some('\u{8c6b}') },
    IvsSvsBaseRecord { ivs: "\u{8cb3}\u{e0100}", svs: None, base90: Some('\u{8cb3}'), base2004: Some('\u{8cb3}') },
    IvsSvsBaseRecord { ivs: "\u{8cdb}\u{e0100}", svs: None, base90: Some('\u{8cdb}'), base2004: Some('\u{8cdb}') },
    IvsSvsBaseRecord { ivs: "\u{8ce3}\u{e0100}", svs: None, base90: Some('\u{8ce3}'), base2004: Some('\u{8ce3}') },
    IvsSvsBaseRecord { ivs: "\u{8cf4}\u{e0100}", svs: None, base90: Some('\u{8cf4}'), base2004: Some('\u{8cf4}') },
    IvsSvsBaseRecord { ivs: "\u{8d0a}\u{e0100}", svs: None, base90: Some('\u{8d0a}'), base2004: Some('\u{8d0a}') },
    IvsSvsBaseRecord { ivs: "\u{8df5}\u{e0100}", svs: None, base90: Some('\u{8df5}'), base2004: Some('\u{8df5}') },
    IvsSvsBaseRecord { ivs: "\u{8e10}\u{e0100}", svs: None, base90: Some('\u{8e10}'), base2004: Some('\u{8e10}') },
    IvsSvsBaseRecord { ivs: "\u{8ee2}\u{e0100}", svs: None, base90: Some('\u{8ee2}'), base2004: Some('\u{8ee2}') },
    IvsSvsBaseRecord { ivs: "\u{8efd}\u{e0100}", svs: None, base90: Some('\u{8efd}'), base2004: Some('\u{8efd}') },
    IvsSvsBaseRecord { ivs: "\u{8f15}\u{e0100}", svs: None, base90: Some('\u{8f15}'), base2004: Some('\u{8f15}') },
    IvsSvsBaseRecord { ivs: "\u{8f49}\u{e0100}", svs: None, base90: Some('\u{8f49}'), base2004: Some('\u{8f49}') },
    IvsSvsBaseRecord { ivs: "\u{8f9e}\u{e0100}", svs: None, base90: Some('\u{8f9e}'), base2004: Some('\u{8f9e}') },
    IvsSvsBaseRecord { ivs: "\u{8fa8}\u{e0100}", svs: None, base90: Some('\u{8fa8}'), base2004: Some('\u{8fa8}') },
    IvsSvsBaseRecord { ivs: "\u{8fad}\u{e0100}", svs: None, base90: Some('\u{8fad}'), base2004: Some('\u{8fad}') },
    IvsSvsBaseRecord { ivs: "\u{8fba}\u{e0100}", svs: None, base90: Some('\u{8fba}'), base2004: Some('\u{8fba}') },
    IvsSvsBaseRecord { ivs: "\u{8fbb}\u{e0100}", svs: None, base90: Some('\u{8fbb}'), base2004: None },
    IvsSvsBaseRecord { ivs: "\u{8fbb}\u{e0101}", svs: Some("\u{8fbb}\u{fe00}"), base90: None, base2004: Some('\u{8fbb}') },
    IvsSvsBaseRecord { ivs: "\u{9013}\u{e0100}", svs: None, base90: Some('\u{9013}'), base2004: Some('\u{9013}') },
    IvsSvsBaseRecord { ivs: "\u{9038}\u{e0100}", svs: Some("\u{9038}\u{fe00}"), base90: Some('\u{9038}'), base2004: Some('\u{9038}') },
    IvsSvsBaseRecord { ivs: "\u{9045}\u{e0100}", svs: None, base90: Some('\u{9045}'), base2004: Some('\u{9045}') },
    IvsSvsBaseRecord { ivs: "\u{905e}\u{e0100}", svs: None, base90: Some('\u{905e}'), base2004: Some('\u{905e}') },
    IvsSvsBaseRecord { ivs: "\u{9072}\u{e0100}", svs: None, base90: Some('\u{9072}'), base2004: Some('\u{9072}') },
    IvsSvsBaseRecord { ivs: "\u{908a}\u{e0100}", svs: None, base90: Some('\u{908a}'), base2004: Some('\u{908a}') },
    IvsSvsBaseRecord { ivs: "\u{90ce}\u{e0100}", svs: None, base90: Some('\u{90ce}'), base2004: Some('\u{90ce}') },
    IvsSvsBaseRecord { ivs: "\u{90de}\u{e0100}", svs: None, base90: Some('\u{90de}'), base2004: Some('\u{90de}') },
    IvsSvsBaseRecord { ivs: "\u{9154}\u{e0100}", svs: None, base90: Some('\u{9154}'), base2004: Some('\u{9154}') },
    IvsSvsBaseRecord { ivs: "\u{9189}\u{e0100}", svs: None, base90: Some('\u{9189}'), base2004: Some('\u{9189}') },
    IvsSvsBaseRecord { ivs: "\u{91ab}\u{e0100}", svs: None, base90: Some('\u{91ab}'), base2004: Some('\u{91ab}') },
    IvsSvsBaseRecord { ivs: "\u{91b8}\u{e0100}", svs: None, base90: Some('\u{91b8}'), base2004: Some('\u{91b8}') },
    IvsSvsBaseRecord { ivs: "\u{91c0}\u{e0100}", svs: None, base90: Some('\u{91c0}'), base2004: Some('\u{91c0}') },
    IvsSvsBaseRecord { ivs: "\u{91c8}\u{e0100}", svs: None, base90: Some('\u{91c8}'), base2004: Some('\u{91c8}') },
    IvsSvsBaseRecord { ivs: "\u{91cb}\u{e0100}", svs: None, base90: Some('\u{91cb}'), base2004: Some('\u{91cb}') },
    IvsSvsBaseRecord { ivs: "\u{9244}\u{e0100}", svs: None, base90: Some('\u{9244}'), base2004: Some('\u{9244}') },
    IvsSvsBaseRecord { ivs: "\u{9271}\u{e0100}", svs: None, base90: Some('\u{9271}'), base2004: Some('\u{9271}') },
    IvsSvsBaseRecord { ivs: "\u{92ad}\u{e0100}", svs: None, base90: Some('\u{92ad}'), base2004: Some('\u{92ad}') },
    IvsSvsBaseRecord { ivs: "\u{92f3}\u{e0100}", svs: None, base90: Some('\u{92f3}'), base2004: Some('\u{92f3}') },
    IvsSvsBaseRecord { ivs: "\u{9304}\u{e0100}", svs: None, base90: Some('\u{9304}'), base2004: Some('\u{9304}') },
    IvsSvsBaseRecord { ivs: "\u{9322}\u{e0100}", svs: None, base90: Some('\u{9322}'), base2004: Some('\u{9322}') },
    IvsSvsBaseRecord { ivs: "\u{9332}\u{e0100}", svs: None, base90: Some('\u{9332}'), base2004: Some('\u{9332}') },
    IvsSvsBaseRecord { ivs: "\u{93ad}\u{e0100}", svs: None, base90: Some('\u{93ad}'), base2004: Some('\u{93ad}') },
    IvsSvsBaseRecord { ivs: "\u{93ae}\u{e0100}", svs: None, base90: Some('\u{93ae}'), base2004: Some('\u{93ae}') },
    IvsSvsBaseRecord { ivs: "\u{9435}\u{e0100}", svs: None, base90: Some('\u{9435}'), base2004: Some('\u{9435}') },
    IvsSvsBaseRecord { ivs: "\u{9444}\u{e0100}", svs: None, base90: Some('\u{9444}'), base2004: Some('\u{9444}') },
    IvsSvsBaseRecord { ivs: "\u{945b}\u{e0100}", svs: None, base90: Some('\u{945b}'), base2004: Some('\u{945b}') },
    IvsSvsBaseRecord { ivs: "\u{95a2}\u{e0100}", svs: None, base90: Some('\u{95a2}'), base2004: Some('\u{95a2}') },
    IvsSvsBaseRecord { ivs: "\u{95dc}\u{e0100}", svs: None, base90: Some('\u{95dc}'), base2004: Some('\u{95dc}') },
    IvsSvsBaseRecord { ivs: "\u{9665}\u{e0100}", svs: None, base90: Some('\u{9665}'), base2004: Some('\u{9665}') },
    IvsSvsBaseRecord { ivs: "\u{9677}\u{e0100}", svs: None, base90: Some('\u{9677}'), base2004: Some('\u{9677}') },
    IvsSvsBaseRecord { ivs: "\u{967a}\u{e0100}", svs: None, base90: Some('\u{967a}'), base2004: Some('\u{967a}') },
    IvsSvsBaseRecord { ivs: "\u{968f}\u{e0100}", svs: None, base90: Some('\u{968f}'), base2004: Some('\u{968f}') },
    IvsSvsBaseRecord { ivs: "\u{96a0}\u{e0100}", svs: None, base90: Some('\u{96a0}'), base2004: Some('\u{96a0}') },
    IvsSvsBaseRecord { ivs: "\u{96a8}\u{e0100}", svs: None, base90: Some('\u{96a8}'), base2004: Some('\u{96a8}') },
    IvsSvsBaseRecord { ivs: "\u{96aa}\u{e0100}", svs: None, base90: Some('\u{96aa}'), base2004: Some('\u{96aa}') },
    IvsSvsBaseRecord { ivs: "\u{96b1}\u{e0100}", svs: None, base90: Some('\u{96b1}'), base2004: Some('\u{96b1}') },
    IvsSvsBaseRecord { ivs: "\u{96d1}\u{e0100}", svs: None, base90: Some('\u{96d1}'), base2004: Some('\u{96d1}') },
    IvsSvsBaseRecord { ivs: "\u{96d9}\u{e0100}", svs: None, base90: Some('\u{96d9}'), base2004: Some('\u{96d9}') },
    IvsSvsBaseRecord { ivs: "\u{96dc}\u{e0100}", svs: None, base90: Some('\u{96dc}'), base2004: Some('\u{96dc}') },
    IvsSvsBaseRecord { ivs: "\u{970a}\u{e0100}", svs: None, base90: Some('\u{970a}'), base2004: Some('\u{970a}') },
    IvsSvsBaseRecord { ivs: "\u{9738}\u{e0100}", svs: None, base90: Some('\u{9738}'), base2004: Some('\u{9738}') },
    IvsSvsBaseRecord { ivs: "\u{9748}\u{e0100}", svs: None, base90: Some('\u{9748}'), base2004: Some('\u{9748}') },
    IvsSvsBaseRecord { ivs: "\u{9759}\u{e0100}", svs: None, base90: Some('\u{9759}'), base2004: Some('\u{9759}') },
    IvsSvsBaseRecord { ivs: "\u{975c}\u{e0100}", svs: None, base90: Some('\u{975c}'), base2004: Some('\u{975c}') },
    IvsSvsBaseRecord { ivs: "\u{982c}\u{e0100}", svs: None, base90: Some('\u{982c}'), base2004: Some('\u{982c}') },
    IvsSvsBaseRecord { ivs: "\u{983c}\u{e0100}", svs: None, base90: Some('\u{983c}'), base2004: Some('\u{983c}') },
    IvsSvsBaseRecord { ivs: "\u{984f}\u{e0100}", svs: None, base90: Some('\u{984f}'), base2004: Some('\u{984f}') },
    IvsSvsBaseRecord { ivs: "\u{9854}\u{e0100}", svs: None, base90: Some('\u{9854}'), base2004: Some('\u{9854}') },
    IvsSvsBaseRecord { ivs: "\u{9855}\u{e0100}", svs: None, base90: Some('\u{9855}'), base2004: Some('\u{9855}') },
    IvsSvsBaseRecord { ivs: "\u{986f}\u{e0100}", svs: None, base90: Some('\u{986f}'), base2004: Some('\u{986f}') },
    IvsSvsBaseRecord { ivs: "\u{98ee}\u{e0100}", svs: None, base90: Some('\u{98ee}'), base2004: Some('\u{98ee}') },
    IvsSvsBaseRecord { ivs: "\u{98f2}\u{e0100}", svs: None, base90: Some('\u{98f2}'), base2004: Some('\u{98f2}') },
    IvsSvsBaseRecord { ivs: "\u{98f4}\u{e0100}", svs: None, base90: Some('\u{98f4}'), base2004: Some('\u{98f4}') },
    IvsSvsBaseRecord { ivs: "\u{9918}\u{e0100}", svs: None, base90: Some('\u{9918}'), base2004: Some('\u{9918}') },
    IvsSvsBaseRecord { ivs: "\u{99c5}\u{e0100}", svs: None, base90: Some('\u{99c5}'), base2004: Some('\u{99c5}') },
    IvsSvsBaseRecord { ivs: "\u{99c6}\u{e0100}", svs: None, base90: Some('\u{99c6}'), base2004: Some('\u{99c6}') },
    IvsSvsBaseRecord { ivs: "\u{9a12}\u{e0100}", svs: None, base90: Some('\u{9a12}'), base2004: Some('\u{9a12}') },
    IvsSvsBaseRecord { ivs: "\u{9a13}\u{e0100}", svs: None, base90: Some('\u{9a13}'), base2004: Some('\u{9a13}') },
    IvsSvsBaseRecord { ivs: "\u{9a37}\u{e0100}", svs: None, base90: Some('\u{9a37}'), base2004: Some('\u{9a37}') },
    IvsSvsBaseRecord { ivs: "\u{9a45}\u{e0100}", svs: None, base90: Some('\u{9a45}'), base2004: Some('\u{9a45}') },
    IvsSvsBaseRecord { ivs: "\u{9a57}\u{e0100}", svs: None, base90: Some('\u{9a57}'), base2004: Some('\u{9a57}') },
    IvsSvsBaseRecord { ivs: "\u{9a5b}\u{e0100}", svs: None, base90: Some('\u{9a5b}'), base2004: Some('\u{9a5b}') },
    IvsSvsBaseRecord { ivs: "\u{9ac4}\u{e0100}", svs: None, base90: Some('\u{9ac4}'), base2004: Some('\u{9ac4}') },
    IvsSvsBaseRecord { ivs: "\u{9ad3}\u{e0100}", svs: None, base90: Some('\u{9ad3}'), base2004: Some('\u{9ad3}') },
    IvsSvsBaseRecord { ivs: "\u{9ad4}\u{e0100}", svs: None, base90: Some('\u{9ad4}'), base2004: Some('\u{9ad4}') },
    IvsSvsBaseRecord { ivs: "\u{9aea}\u{e0100}", svs: None, base90: Some('\u{9aea}'), base2004: Some('\u{9aea}') },
    IvsSvsBaseRecord { ivs: "\u{9aee}\u{e0100}", svs: None, base90: Some('\u{9aee}'), base2004: Some('\u{9aee}') },
    IvsSvsBaseRecord { ivs: "\u{9d8f}\u{e0100}", svs: None, base90: Some('\u{9d8f}'), base2004: Some('\u{9d8f}') },
    IvsSvsBaseRecord { ivs: "\u{9dc4}\u{e0100}", svs: None, base90: Some('\u{9dc4}'), base2004: Some('\u{9dc4}') },
    IvsSvsBaseRecord { ivs: "\u{9e7d}\u{e0100}", svs: None, base90: Some('\u{9e7d}'), base2004: Some('\u{9e7d}') },
    IvsSvsBaseRecord { ivs: "\u{9ea5}\u{e0100}", svs: None, base90: Some('\u{9ea5}'), base2004: Some('\u{9ea5}') },
    IvsSvsBaseRecord { ivs: "\u{9ea6}\u{e0100}", svs: None, base90: Some('\u{9ea6}'), base2004: Some('\u{9ea6}') },
    IvsSvsBaseRecord { ivs: "\u{9ede}\u{e0100}", svs: None, base90: Some('\u{9ede}'), base2004: Some('\u{9ede}') },
    IvsSvsBaseRecord { ivs: "\u{9ee8}\u{e0100}", svs: None, base90: Some('\u{9ee8}'), base2004: Some('\u{9ee8}') },
    IvsSvsBaseRecord { ivs: "\u{9f4a}\u{e0100}", svs: None, base90: Some('\u{9f4a}'), base2004: Some('\u{9f4a}') },
    IvsSvsBaseRecord { ivs: "\u{9f4b}\u{e0100}", svs: None, base90: Some('\u{9f4b}'), base2004: Some('\u{9f4b}') },
    IvsSvsBaseRecord { ivs: "\u{9f52}\u{e0100}", svs: None, base90: Some('\u{9f52}'), base2004: Some('\u{9f52}') },
    IvsSvsBaseRecord { ivs: "\u{9f61}\u{e0100}", svs: None, base90: Some('\u{9f61}'), base2004: Some('\u{9f61}') },
    IvsSvsBaseRecord { ivs: "\u{9f62}\u{e0100}", svs: None, base90: Some('\u{9f62}'), base2004: Some('\u{9f62}') },
    IvsSvsBaseRecord { ivs: "\u{9f8d}\u{e0100}", svs: None, base90: Some('\u{9f8d}'), base2004: Some('\u{9f8d}') },
    IvsSvsBaseRecord { ivs: "\u{9f9c}\u{e0100}", svs: None, base90: Some('\u{9f9c}'), base2004: Some('\u{9f9c}') },
];
