//! tab2xls CLI - convert LaTeX tabular files to xlsx spreadsheets

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use log::info;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};
#[cfg(feature = "cli")]
use tabular2xlsx::{
    parse_tabular, write_xlsx, ConvertError, ConvertResult, NamedPalette, ParseOptions,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "tab2xls")]
#[command(version)]
#[command(about = "Convert LaTeX tabular files to xlsx spreadsheets", long_about = None)]
struct Cli {
    /// Tabular file name
    filename: PathBuf,

    /// Output xlsx file name (defaults to the input stem with .xlsx)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory to write the spreadsheet to (defaults to the input's directory)
    #[arg(long)]
    output_directory: Option<PathBuf>,

    /// Worksheet name
    #[arg(long, default_value = "Sheet")]
    sheet_name: String,

    /// Build a two-level row index from the first two columns
    #[arg(long)]
    multi_index: bool,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new().filter_level(level).init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> ConvertResult<()> {
    let out_dir = match cli.output_directory {
        Some(dir) => dir,
        None => cli
            .filename
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };

    let xlsx_name = match cli.output {
        Some(name) => name,
        None => {
            let stem = cli
                .filename
                .file_stem()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("table"));
            stem.with_extension("xlsx")
        }
    };

    if xlsx_name.extension().and_then(|ext| ext.to_str()) != Some("xlsx") {
        return Err(ConvertError::configuration(
            "output filename does not have the .xlsx extension",
        ));
    }

    let options = ParseOptions {
        multi_index: cli.multi_index,
        ..Default::default()
    };
    let table = parse_tabular(&cli.filename, &options)?;

    let out_path = out_dir.join(xlsx_name);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    info!("Writing to {}", out_path.display());
    write_xlsx(&table, &out_path, &cli.sheet_name, &NamedPalette)?;
    eprintln!("✓ Output written to: {}", out_path.display());

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install tabular2xlsx --features cli");
    eprintln!("  tab2xls [OPTIONS] <FILENAME>");
}
