//! Materializes the static mapping-table modules of the `mojinorm` crate
//! from the upstream JSON datasets.

mod dataset;
mod emitters;
mod parsers;

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use dataset::{build_dataset_from_data_root, DatasetSourceDefs};

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read dataset {name}: {source}")]
    Read {
        name: String,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid Unicode codepoint representation: {0}")]
    InvalidCodepoint(String),
}

#[derive(Parser)]
#[command(about = "Generate mojinorm mapping-table modules from JSON datasets")]
struct Args {
    /// Directory containing the JSON datasets.
    #[arg(long)]
    data_root: PathBuf,
    /// Output directory, normally mojinorm/src/transliterators.
    #[arg(long)]
    out_dir: PathBuf,
}

fn write_module(args: &Args, name: &str, contents: &str) -> Result<(), Error> {
    let path = args.out_dir.join(name);
    fs::write(&path, contents).map_err(|source| Error::Write {
        path: path.display().to_string(),
        source,
    })?;
    println!("wrote {}", path.display());
    Ok(())
}

fn run(args: &Args) -> Result<(), Error> {
    let dataset = build_dataset_from_data_root(&args.data_root, &DatasetSourceDefs::default())?;

    write_module(
        args,
        "spaces_data.rs",
        &emitters::render_simple_data(
            "spaces.json",
            "Space characters mapped to plain whitespace, or to nothing for the\nzero-width marks.",
            "SPACES_MAPPINGS",
            &dataset.spaces,
        ),
    )?;
    write_module(
        args,
        "ideographic_annotations_data.rs",
        &emitters::render_simple_data(
            "ideographic-annotation-marks.json",
            "Ideographic annotation marks mapped to plain ideographs.",
            "IDEOGRAPHIC_ANNOTATIONS_MAPPINGS",
            &dataset.ideographic_annotations,
        ),
    )?;
    write_module(
        args,
        "radicals_data.rs",
        &emitters::render_simple_data(
            "radicals.json",
            "CJK Radicals Supplement and Kangxi Radicals mapped to the CJK\nunified ideographs whose glyphs they resemble.",
            "RADICALS_MAPPINGS",
            &dataset.radicals,
        ),
    )?;
    write_module(
        args,
        "mathematical_alphanumerics_data.rs",
        &emitters::render_simple_data(
            "mathematical-alphanumerics.json",
            "Mathematical styled letters and digits mapped to their plain\ncounterparts.",
            "MATHEMATICAL_ALPHANUMERICS_MAPPINGS",
            &dataset.mathematical_alphanumerics,
        ),
    )?;
    write_module(
        args,
        "combined_data.rs",
        &emitters::render_simple_data(
            "combined-chars.json",
            "Single characters that decompose into several, e.g. \\u{337b}.",
            "COMBINED_MAPPINGS",
            &dataset.combined,
        ),
    )?;
    write_module(
        args,
        "hyphens_data.rs",
        &emitters::render_hyphens_data(&dataset.hyphens),
    )?;
    write_module(
        args,
        "ivs_svs_base_data.rs",
        &emitters::render_ivs_svs_base_data(&dataset.ivs_svs_base),
    )?;
    write_module(
        args,
        "kanji_old_new_data.rs",
        &emitters::render_kanji_old_new_data(&dataset.kanji_old_new),
    )?;
    write_module(
        args,
        "circled_or_squared_data.rs",
        &emitters::render_circled_or_squared_data(&dataset.circled_or_squared),
    )?;
    write_module(
        args,
        "roman_numerals_data.rs",
        &emitters::render_roman_numerals_data(&dataset.roman_numerals),
    )?;

    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(error) = run(&args) {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}
