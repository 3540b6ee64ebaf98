//! lelc CLI
//!
//! Prints the injection spans of labeled embedded-language literals.

use lelc::commands::{parse_args, run};

fn main() {
    lelc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return;
    }
    if args.iter().any(|arg| arg == "--version" || arg == "-V") {
        println!("lelc {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Usage: lelc <file>... [--languages <config.toml>] [--builtin]");
            std::process::exit(2);
        }
    };

    if !run(&options) {
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("lelc: find labeled embedded-language literals");
    println!();
    println!("Usage: lelc <file>... [options]");
    println!();
    println!("Each injection prints as:");
    println!("  <path>:<line>:<col> <language> <start>..<end> [<ranges>]");
    println!();
    println!("Options:");
    println!("  -l, --languages <path>  TOML language config (default: built-in table)");
    println!("  --builtin               Add built-in aliases on top of --languages");
    println!("  -h, --help              Show this help message");
    println!("  -V, --version           Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=debug) to enable logging on stderr.");
}
