use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use tracing::debug;
use utilkit_sdk::{Structure, Toolkit, ToolkitConfig, Value};
use utilkit_types::json::{from_json_str, to_json_string_pretty};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = ToolkitConfig::load_or_default(cli.config.as_ref())
        .context("failed to load configuration")?;
    let toolkit = Toolkit::new(config);
    let format = cli.format;

    match cli.command {
        Command::Merge(args) => cmd_merge(&toolkit, args),
        Command::Pick(args) => cmd_pick(&toolkit, args),
        Command::Omit(args) => cmd_omit(&toolkit, args),
        Command::Validate(args) => cmd_validate(&toolkit, format, args),
        Command::Format(args) => cmd_format(&toolkit, format, args),
        Command::Sizes(args) => cmd_sizes(&toolkit, format, args),
    }
}

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    from_json_str(&text).with_context(|| format!("invalid JSON in {}", path.display()))
}

fn read_structure(path: &Path) -> anyhow::Result<Structure> {
    read_json(path)?
        .into_structure()
        .with_context(|| format!("{} must hold a JSON object", path.display()))
}

/// Structures print as JSON in both output formats.
fn print_structure(structure: Structure) -> anyhow::Result<()> {
    println!("{}", to_json_string_pretty(&Value::Object(structure))?);
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_merge(toolkit: &Toolkit, args: MergeArgs) -> anyhow::Result<()> {
    let mut config = toolkit.config().clone();
    if args.no_merge_arrays {
        config.merge.merge_arrays = false;
    }
    if args.allow_duplicates {
        config.merge.unique_array_items = false;
    }
    if args.keep_on_undefined {
        config.merge.allow_undefined_overrides = false;
    }
    let toolkit = Toolkit::new(config);
    debug!(policy = ?toolkit.policy(), files = args.files.len(), "merging");

    let values = args
        .files
        .iter()
        .map(|path| read_json(path))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let merged = toolkit.merge_all(&values)?;
    print_structure(merged)
}

fn cmd_pick(toolkit: &Toolkit, args: KeysArgs) -> anyhow::Result<()> {
    let obj = read_structure(&args.file)?;
    let picked = if args.inclusive {
        toolkit.inclusive_pick(&obj, &args.keys)
    } else {
        toolkit.pick(&obj, &args.keys)
    };
    print_structure(picked)
}

fn cmd_omit(toolkit: &Toolkit, args: KeysArgs) -> anyhow::Result<()> {
    let obj = read_structure(&args.file)?;
    print_structure(toolkit.omit(&obj, &args.keys))
}

#[derive(Serialize)]
struct ValidationOutput<'a> {
    kind: String,
    value: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<utilkit_sdk::StrongPasswordReport>,
}

fn cmd_validate(toolkit: &Toolkit, format: OutputFormat, args: ValidateArgs) -> anyhow::Result<()> {
    let value = args.value.as_str();
    let mut password = None;
    let valid = match args.kind {
        ValidateKind::Email => toolkit.is_valid_email(value),
        ValidateKind::Url => toolkit.is_valid_url(value),
        ValidateKind::Username => toolkit.is_valid_user_name(value),
        ValidateKind::Date => toolkit.is_valid_date(value),
        ValidateKind::Hex => utilkit_strings::is_hex_color(value),
        ValidateKind::Phone => toolkit.is_valid_phone_number(value, args.locale.as_deref()),
        ValidateKind::Password => {
            let report = toolkit.is_strong_password(value);
            password = Some(report);
            report.is_strong()
        }
    };
    let kind = args
        .kind
        .to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_default();

    match format {
        OutputFormat::Json => print_json(&ValidationOutput {
            kind,
            value,
            valid,
            password,
        })?,
        OutputFormat::Text => {
            if valid {
                println!("{} valid {}: {}", "✓".green().bold(), kind, value.bold());
            } else {
                println!("{} invalid {}: {}", "✗".red().bold(), kind, value.bold());
            }
            if let Some(report) = password {
                let mark = |ok: bool| if ok { "✓".green() } else { "✗".red() };
                println!("  {} letters", mark(report.has_char));
                println!("  {} symbols", mark(report.has_symbol));
                println!("  {} numbers", mark(report.has_number));
                println!("  {} uppercase", mark(report.has_uppercase));
            }
        }
    }
    Ok(())
}

fn cmd_format(toolkit: &Toolkit, format: OutputFormat, args: FormatArgs) -> anyhow::Result<()> {
    let formatted = match args.kind {
        FormatKind::Size => {
            let bytes: u64 = args
                .value
                .trim()
                .parse()
                .with_context(|| format!("not a byte count: {}", args.value))?;
            toolkit.file_size(bytes)
        }
        FormatKind::Duration => utilkit_numerics::video_duration(&args.value),
        FormatKind::Short => {
            let n: f64 = args
                .value
                .trim()
                .parse()
                .with_context(|| format!("not a number: {}", args.value))?;
            toolkit.shorten_large_number(n)
        }
    };

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "input": args.value,
            "formatted": formatted,
        })),
        OutputFormat::Text => {
            println!("{formatted}");
            Ok(())
        }
    }
}

fn cmd_sizes(toolkit: &Toolkit, format: OutputFormat, args: SizesArgs) -> anyhow::Result<()> {
    let report = toolkit.screen_paths(&args.paths, args.max_mb)?;
    if format == OutputFormat::Json {
        return print_json(&report);
    }

    let limit = args.max_mb.unwrap_or(toolkit.config().numerics.max_upload_mb);
    println!("Limit: {} MB", limit.to_string().bold());
    for file in &report.accepted {
        println!("  {} {} ({})", "✓".green(), file.name, toolkit.file_size(file.size).dimmed());
    }
    for file in &report.rejected {
        println!("  {} {}: {}", "✗".red(), file.name.bold(), file.size.red());
    }
    if report.all_accepted() {
        println!("{} All files within limit.", "✓".green().bold());
    } else {
        println!(
            "{} {} file(s) over limit.",
            "✗".red().bold(),
            report.rejected.len().to_string().bold()
        );
    }
    Ok(())
}
