//! JOT command-line tool for parsing and checking JOT documents.
//!
//! Usage: jot [OPTIONS] [FILE]
//!
//! Options:
//!   -o, --output <FILE>    Write output to specified file
//!   --check                Check if input is valid (exit 0 if valid, 1 if invalid)
//!   -h, --help             Print help
//!   -V, --version          Print version
//!
//! With no FILE, or when FILE is "-", input is read from stdin. The parsed
//! value is printed in a JSON-like rendering.

use libjot::{parse, Value};
use std::fs;
use std::io::{self, Read, Write};
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut output_file: Option<&str> = None;
    let mut check_only = false;
    let mut input_path: Option<&str> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-V" | "--version" => {
                println!("jot {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires an argument");
                    process::exit(1);
                }
                output_file = Some(&args[i]);
            }
            "--check" => {
                check_only = true;
            }
            "-" => {
                // Explicit stdin
                // input_path stays None, which means stdin
            }
            arg if arg.starts_with('-') && arg.len() > 1 => {
                eprintln!("Error: Unknown option: {}", arg);
                process::exit(1);
            }
            arg => {
                if input_path.is_some() {
                    eprintln!("Error: Multiple input files not supported");
                    process::exit(1);
                }
                input_path = Some(arg);
            }
        }
        i += 1;
    }

    let input: String = match input_path {
        Some(path) => match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error reading {}: {}", path, e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading stdin: {}", e);
                process::exit(1);
            }
            buffer
        }
    };

    let value: Value = match parse(&input) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if check_only {
        println!("ok");
        return;
    }

    let rendered = format!("{:?}\n", value);
    match output_file {
        Some(path) => {
            if let Err(e) = fs::write(path, &rendered) {
                eprintln!("Error writing {}: {}", path, e);
                process::exit(1);
            }
        }
        None => {
            if let Err(e) = io::stdout().write_all(rendered.as_bytes()) {
                eprintln!("Error writing stdout: {}", e);
                process::exit(1);
            }
        }
    }
}

fn print_help() {
    println!(
        "\
jot {} - parse and check JOT documents

USAGE:
    jot [OPTIONS] [FILE]

    With no FILE, or when FILE is \"-\", input is read from stdin.

OPTIONS:
    -o, --output <FILE>    Write output to specified file

    --check                Check if input is valid (exit 0 if valid, 1 if invalid)

    -h, --help             Print help

    -V, --version          Print version

EXAMPLES:
    # Parse a JOT file and print the value
    jot config.jot

    # Parse from stdin
    echo '{{\"answer\":42}}' | jot

    # Validate a file
    jot --check config.jot

    # Write the rendering to a file
    jot config.jot -o config.out
",
        env!("CARGO_PKG_VERSION")
    );
}
