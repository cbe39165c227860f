use anyhow::{bail, ensure, Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use std::{
    env,
    fs::{self, File},
    path::PathBuf,
};

use cedict_json::{cedict::lexicon::build_lexicon, utility::zip::ZipReader};

struct Args {
    cedict_path: String,
    output_path: Option<String>,
}

fn get_args() -> Result<Args> {
    let args: Vec<String> = env::args().skip(1).collect();

    let opts = getopts::Options::new();

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    let cedict_path = matches
        .free
        .get(0)
        .context("path to the CC-CEDICT release (zip or text) is required")?
        .clone();
    let output_path = matches.free.get(1).map(|s| s.clone());

    Ok(Args {
        cedict_path,
        output_path,
    })
}

// The MDBG release ships as cedict_1_0_ts_utf-8_mdbg.zip with a single
// cedict_ts.u8 member, but the member name is not guaranteed.
fn read_source_text(cedict_path: &PathBuf) -> Result<String> {
    let bytes = if cedict_path.extension().map_or(false, |e| e == "zip") {
        let zip_file = File::open(cedict_path)?;
        let mut zip_reader = ZipReader::new(zip_file)?;

        let mut txt_bytes = None;
        for i in 0..zip_reader.len() {
            let mut entry = zip_reader.get_by_index(i)?;

            let name = entry.name().to_lowercase();
            if !(name.ends_with(".u8") || name.ends_with(".txt")) {
                continue;
            }

            ensure!(txt_bytes.is_none(), "Dictionary text exists more than 1");

            txt_bytes = Some(entry.as_bytes()?);
        }

        txt_bytes.context("Dictionary text is not found")?
    } else {
        fs::read(cedict_path)?
    };

    Ok(encoding_rs::UTF_8.decode(&bytes).0.into_owned())
}

fn main() -> Result<()> {
    let args = get_args()?;

    let cedict_path = PathBuf::from(&args.cedict_path);
    ensure!(
        cedict_path.exists(),
        "File not found: {}",
        cedict_path.display()
    );

    println!("Reading dictionary source...");

    let txt = read_source_text(&cedict_path)
        .with_context(|| format!("Failed to read {}", cedict_path.display()))?;

    println!("Processing entries...");

    let lines: Vec<&str> = txt.lines().collect();

    let pb = create_progress_bar(lines.len() as u64);
    let lexicon = build_lexicon(lines.iter().progress_with(pb).copied()).finish();

    println!("Finished.");

    if let Some(output_path) = &args.output_path {
        fs::write(output_path, serde_json::to_string_pretty(&lexicon)?)
            .with_context(|| format!("Failed to write {}", output_path))?;

        println!("Wrote {}", output_path);
    }

    Ok(())
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
