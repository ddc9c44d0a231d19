use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lib_dtex::{convert_file, EncodeMode, TextureFormat};
use log::LevelFilter;

/// dtex, a texture converter for Nintendo DS homebrew
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Paletted PNG to convert
    input: PathBuf,

    /// Target format: 2bpp, 4bpp, 8bpp, 16bpp, a3i5, a5i3 or 4x4c
    #[arg(short, long)]
    format: TextureFormat,

    /// Write the 15-bit palette table instead of the texel data
    #[arg(short, long, default_value_t = false)]
    palette: bool,

    /// Where to write the raw converted data
    #[arg(short, long)]
    output: PathBuf,

    /// Log conversion details to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    lib_dtex::init_logging(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    let mode = if args.palette {
        EncodeMode::Palette
    } else {
        EncodeMode::Pixels
    };

    match convert_file(&args.input, &args.output, args.format, mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
