//! Command-line interface for ippc
//! This binary translates an IPPeCode source file into its XML representation.
//!
//! Usage:
//!   ippc `<input>` [`<output>`] [--debug] [--name `<name>`] [--format `<format>`] [--config `<file>`]
//!
//! `<input>` and `<output>` accept `-` for the standard streams. The output
//! defaults to `out.xml` and is only written when the whole input compiled.

use clap::{Arg, ArgAction, Command};
use log::debug;

use ippc::config::{CliOverrides, IppcConfig, Loader};
use ippc::ippecode::processor::{
    process_source, read_input, write_output, OutputFormat, ProcessingOptions,
};
use ippc::logger;

fn main() {
    let matches = Command::new("ippc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translates IPPeCode three-address code into XML")
        .arg(
            Arg::new("input")
                .help("File to translate, or '-' to read standard input")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Output file name, or '-' to write standard output [default: out.xml]")
                .index(2),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .short('d')
                .help("Print debug information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .short('n')
                .help("Program name"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: xml, token-simple or token-json"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = logger::configure(&config.logging) {
        eprintln!("Logger error: {}", e);
        std::process::exit(1);
    }

    let input = matches
        .get_one::<String>("input")
        .expect("input is a required argument");
    let options = ProcessingOptions {
        format: OutputFormat::from_string(&config.output.format).unwrap_or_else(|e| {
            eprintln!("{}", e);
            std::process::exit(1);
        }),
        name: config.program.name.clone(),
    };

    debug!("Input: {}", input);
    debug!("Output: {}", config.output.path);
    debug!("Format: {}", options.format.as_str());
    debug!("Name: {:?}", options.name);

    handle_translate_command(input, &config.output.path, &options);
}

/// Defaults, then `--config`, then the remaining flags.
fn load_config(matches: &clap::ArgMatches) -> Result<IppcConfig, config::ConfigError> {
    let cli = CliOverrides {
        output: matches.get_one::<String>("output").cloned(),
        name: matches.get_one::<String>("name").cloned(),
        format: matches.get_one::<String>("format").cloned(),
        debug: matches.get_flag("debug"),
    };

    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader.with_cli(&cli)?.build()
}

/// Handle the translation: read everything, compile, then write once.
fn handle_translate_command(input: &str, output: &str, options: &ProcessingOptions) {
    let source = read_input(input).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    let document = process_source(&source, options).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    if let Err(e) = write_output(output, &document) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
