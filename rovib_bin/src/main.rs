use std::{error::Error, path::PathBuf};

use clap::Parser;
use rovib::{consts::DATA_FILE, Rovib, Sampling};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file describing the molecule. Files ending in .json are read as
    /// JSON, anything else in the sectioned text format
    #[arg(value_parser)]
    infile: PathBuf,

    /// Writes the output in JSON format for use by other programs
    #[arg(short, long, value_parser, default_value_t = false)]
    json: bool,

    /// File to write the sampled spectrum to
    #[arg(short, long, value_parser, default_value = DATA_FILE)]
    output: PathBuf,

    /// Sample the spectrum on a uniform grid instead of the stepped one
    #[arg(short, long, value_parser, default_value_t = false)]
    uniform: bool,

    /// Skip writing the sampled spectrum to a file
    #[arg(long, value_parser, default_value_t = false)]
    no_data: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cfg = Args::parse();
    let rovib = match cfg.infile.extension() {
        Some(ext) if ext == "json" => Rovib::load_json(&cfg.infile)?,
        _ => Rovib::load(&cfg.infile)?,
    };
    let sampling = if cfg.uniform {
        Sampling::Uniform
    } else {
        Sampling::Stepped
    };
    let got = rovib.run_with(sampling);
    if !cfg.no_data {
        got.spectrum.save(&cfg.output)?;
        log::info!("wrote spectrum to {}", cfg.output.display());
    }
    if cfg.json {
        let data = serde_json::to_string_pretty(&got)?;
        println!("{data}");
    } else {
        print!("{got}");
    }
    Ok(())
}
