use std::path::PathBuf;

use clap::Parser;
use regex::Regex;

use assetfs_gen::{collect, render, Error, GenOptions};

/// assetfs-gen - embed static assets as a gzip+base64 table
#[derive(Parser, Debug)]
#[command(name = "assetfs-gen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Files or directories to embed
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Write the generated module here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Strip this prefix from input paths
    #[arg(long)]
    strip_prefix: Option<String>,

    /// Mount every asset under this logical directory
    #[arg(long)]
    mount_prefix: Option<String>,

    /// Regex of logical paths to skip
    #[arg(long)]
    ignore: Option<String>,

    /// Regex of logical paths to embed; other files are skipped
    #[arg(long)]
    include: Option<String>,

    /// Unix timestamp to record for every entry
    #[arg(long, allow_negative_numbers = true)]
    modtime: Option<i64>,

    /// Name of the generated static
    #[arg(long, default_value = "ASSETS")]
    name: String,

    /// gzip compression level
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=9))]
    level: Option<u32>,
}

impl Args {
    fn into_options(self) -> Result<(GenOptions, Option<PathBuf>), Error> {
        let options = GenOptions {
            inputs: self.inputs,
            strip_prefix: self.strip_prefix,
            mount_prefix: self.mount_prefix,
            ignore: self.ignore.as_deref().map(Regex::new).transpose()?,
            include: self.include.as_deref().map(Regex::new).transpose()?,
            modtime: self.modtime,
            name: self.name,
            level: self.level,
        };
        Ok((options, self.output))
    }
}

fn run(args: Args) -> Result<(), Error> {
    let (options, output) = args.into_options()?;
    let entries = collect(&options)?;
    let source = render(&entries, &options)?;

    let files = entries.iter().filter(|e| !e.is_dir).count();
    let bytes: u64 = entries.iter().map(|e| e.size).sum();
    match output {
        Some(path) => {
            std::fs::write(&path, source).map_err(|e| Error::io(&path, e))?;
            eprintln!(
                "Embedded {} files ({} bytes) into {}",
                files,
                bytes,
                path.display()
            );
        }
        None => print!("{}", source),
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
