// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Markguard CLI - sanitize and validate generated markup

use std::env;
use std::io::Read;
use std::process::ExitCode;

use anyhow::{bail, Context};

use markguard::{validate, AllowPolicy, Engine, RenderConfig, Sanitizer};

/// Parsed command line options
struct Options {
    command: String,
    policy: Option<String>,
    render: bool,
    input: Option<String>,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("markguard=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        print_usage();
        return ExitCode::from(1);
    }

    let options = match parse_args(args) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{}", e);
            print_usage();
            return ExitCode::from(1);
        }
    };

    match options.command.as_str() {
        "--help" | "-h" | "help" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        "--version" | "-v" | "version" => {
            println!("markguard {}", markguard::VERSION);
            return ExitCode::SUCCESS;
        }
        _ => {}
    }

    let result = match options.command.as_str() {
        "sanitize" => run_sanitize(&options),
        "validate" => run_validate(&options),
        "check" => run_check(&options),
        "frame" => run_frame(&options),
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            return ExitCode::from(1);
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"Markguard - Sanitizer for Untrusted Generated Markup

USAGE:
    markguard <COMMAND> [OPTIONS] <file|->

COMMANDS:
    sanitize        Print sanitized markup
    validate        Print the validation report as JSON, exit 1 if invalid
    check           Run the storage gate, print the sanitized markup or a rejection
    frame           Print the sandboxed iframe for the markup
    help            Show this help message
    version         Show version information

OPTIONS:
    --policy <file>   Load the allow policy from a JSON file
    --render          Use the display boundary policy instead of the storage one

EXAMPLES:
    markguard sanitize page.html
    echo '<div onclick="x()">hi</div>' | markguard sanitize -
    markguard validate --policy policy.json page.html
    markguard frame --render page.html > preview.html

Log verbosity follows RUST_LOG, e.g. RUST_LOG=markguard=debug
"#
    );
}

fn parse_args(args: Vec<String>) -> anyhow::Result<Options> {
    let mut iter = args.into_iter();
    let command = iter.next().context("missing command")?;
    let mut options = Options {
        command,
        policy: None,
        render: false,
        input: None,
    };

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--policy" => {
                options.policy = Some(iter.next().context("--policy needs a file")?);
            }
            "--render" => options.render = true,
            _ if options.input.is_none() => options.input = Some(arg),
            _ => bail!("Unexpected argument: {}", arg),
        }
    }
    Ok(options)
}

fn load_policy(options: &Options) -> anyhow::Result<AllowPolicy> {
    match &options.policy {
        Some(path) => {
            let policy = AllowPolicy::from_file(path)
                .with_context(|| format!("Failed to load policy {}", path))?;
            Ok(if options.render {
                policy.harden_external_links(true)
            } else {
                policy
            })
        }
        None if options.render => Ok(AllowPolicy::for_render()),
        None => Ok(AllowPolicy::for_ingest()),
    }
}

fn read_input(options: &Options) -> anyhow::Result<String> {
    match options.input.as_deref() {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
        }
    }
}

fn run_sanitize(options: &Options) -> anyhow::Result<ExitCode> {
    let sanitizer = Sanitizer::new(load_policy(options)?);
    let html = read_input(options)?;
    println!("{}", sanitizer.sanitize(&html));
    Ok(ExitCode::SUCCESS)
}

fn run_validate(options: &Options) -> anyhow::Result<ExitCode> {
    let html = read_input(options)?;
    let report = validate(&html);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(if report.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn run_check(options: &Options) -> anyhow::Result<ExitCode> {
    let policy = load_policy(options)?;
    let engine = Engine::with_policies(policy, AllowPolicy::for_render());
    let html = read_input(options)?;

    match engine.ingest(&html) {
        Ok(clean) => {
            println!("{}", clean);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            // Detail goes to the log, the user only sees the generic text
            tracing::warn!(error = %e, "Check failed");
            println!("{}", e.user_message());
            Ok(ExitCode::from(1))
        }
    }
}

fn run_frame(options: &Options) -> anyhow::Result<ExitCode> {
    let policy = load_policy(options)?;
    let engine = Engine::with_policies(AllowPolicy::for_ingest(), policy)
        .render_config(RenderConfig::default());
    let html = read_input(options)?;

    match engine.admit(&html) {
        Ok(frame) => {
            println!("{}", frame.to_iframe());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Frame rejected");
            println!("{}", e.user_message());
            Ok(ExitCode::from(1))
        }
    }
}
