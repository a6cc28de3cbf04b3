//! Sumbox CLI - look things up in JSON documents without null surprises

use anyhow::Context;
use clap::Parser;
use sumbox::cli::{Args, Source, SubCommand};
use sumbox::inspect::{compile_pattern, decode_document, filter_matching, lookup, parse_fallback, parse_path};
use sumbox::{format_output, Maybe, OutputFormat, SumboxError};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn read_source(source: &Source) -> anyhow::Result<String> {
    match (&source.input, &source.file) {
        (Some(input), _) => Ok(input.clone()),
        (None, Some(path)) => {
            log::debug!("reading document from {}", path.display());
            std::fs::read_to_string(path)
                .map_err(SumboxError::from)
                .with_context(|| format!("failed to read {}", path.display()))
        }
        (None, None) => Err(SumboxError::MissingInput.into()),
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let output_format = if args.json { OutputFormat::Json } else { OutputFormat::Human };

    match args.command {
        SubCommand::Decode { source } => {
            let doc = decode_document(&read_source(&source)?)?;
            println!("{}", format_output(&doc, &output_format, args.pretty));
        }

        SubCommand::Get { path, source, matches, default, expect } => {
            let segments = parse_path(&path)?;
            let doc = decode_document(&read_source(&source)?)?;
            let mut found = lookup(doc, &segments);

            if let Some(pattern) = matches {
                found = filter_matching(found, &compile_pattern(&pattern)?);
            }

            // A missing required value is a hard stop, not an error to report.
            if let Some(msg) = expect {
                found = Maybe::some(found.expect(&msg));
            } else if let Some(raw) = default {
                found = Maybe::some(found.unwrap_or_else(|| parse_fallback(&raw)));
            }

            println!("{}", format_output(&found, &output_format, args.pretty));
        }
    }

    Ok(())
}
