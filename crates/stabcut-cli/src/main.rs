//! stabcut - laser-cut rocket outlines from spreadsheet chart data
//!
//! Usage:
//!   stabcut draw <chart.json> [-o out.svg]   Draw one chart document
//!   stabcut batch <dir> [-c config.json]     Draw a directory in parallel

use std::env;
use std::process;

use stabcut_cli::cli::{cmd_batch, cmd_draw};

fn print_usage() {
    eprintln!("stabcut - laser-cut rocket outlines from chart documents");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  stabcut draw <chart.json> [-o out.svg] [-c config.json] [-f font.ttf] [--class name] [--raw]");
    eprintln!("  stabcut batch <dir> [-c config.json] [-o out_dir] [-q quarantine_dir] [-f font.ttf] [--raw]");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("draw") => cmd_draw(&args[2..]),
        Some("batch") => cmd_batch(&args[2..]),
        Some("-h") | Some("--help") | None => print_usage(),
        Some(other) => {
            eprintln!("unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}
