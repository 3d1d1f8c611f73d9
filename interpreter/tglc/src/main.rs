//! Together interpreter CLI.
//!
//! Runs a script file (or stdin) through the interpreter façade and prints
//! the collected output. Script errors come back as output text, so the
//! process exits 0 for them; only I/O and usage problems are process
//! failures.

use std::io::Read;

use tgl_eval::Interpreter;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(2);
    }

    match args[1].as_str() {
        "run" => {
            if args.len() != 3 {
                eprintln!("Usage: tgl run <file.tgl>  (use '-' for stdin)");
                std::process::exit(2);
            }
            run_source(&args[2]);
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            std::process::exit(2);
        }
    }
}

fn run_source(path: &str) {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read {path}: {err}");
            std::process::exit(1);
        }
    };

    let output = Interpreter::new().run(&source);
    if !output.is_empty() {
        println!("{output}");
    }
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}

fn print_usage() {
    println!("Together interpreter");
    println!();
    println!("Usage:");
    println!("  tgl run <file.tgl>   Run a script (use '-' to read stdin)");
    println!("  tgl help             Show this help");
}

/// Initialize tracing for debug output.
///
/// Enable with `RUST_LOG=tgl_eval=debug`. No-op unless `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(filter)
            .init();
    }
}
