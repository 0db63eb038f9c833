//! schemagen command line
//!
//! ```text
//! schemagen generate --schema page.json [--icons icons.json]... [--iconify mdi.json]...
//!                    [--components components.json] [--config schemagen.toml]
//!                    [--out DIR] [--dry-run] [--json]
//! schemagen transforms
//! ```
//!
//! Exit status is 0 when every transform succeeded, 2 when the run finished
//! with transform failures and 1 on fatal errors.

mod generate;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use generate::{GenerateArgs, GenerateOutcome};
use schemagen_pipeline::TransformStatus;
use schemagen_transform::{Transform, TransformRegistry};
use std::path::PathBuf;
use std::process::ExitCode;

const EXIT_PARTIAL: u8 = 2;
const EXIT_FATAL: u8 = 1;

fn cli() -> Command {
    Command::new("schemagen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate asset files from page schema documents")
        .subcommand_required(true)
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines"),
        )
        .subcommand(
            Command::new("generate")
                .about("Run the pipeline over a schema document")
                .arg(
                    Arg::new("schema")
                        .long("schema")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Schema document (.json, .yaml or .yml)"),
                )
                .arg(
                    Arg::new("icons")
                        .long("icons")
                        .action(ArgAction::Append)
                        .value_parser(value_parser!(PathBuf))
                        .help("Icon resource map: {\"collection:item\": {width, height, body}}"),
                )
                .arg(
                    Arg::new("iconify")
                        .long("iconify")
                        .action(ArgAction::Append)
                        .value_parser(value_parser!(PathBuf))
                        .help("Iconify collection JSON"),
                )
                .arg(
                    Arg::new("components")
                        .long("components")
                        .value_parser(value_parser!(PathBuf))
                        .help("Component map: {componentName: {package, version}}"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_parser(value_parser!(PathBuf))
                        .help("Pipeline configuration (TOML)"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .default_value(".")
                        .value_parser(value_parser!(PathBuf))
                        .help("Directory artifacts are written under"),
                )
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .action(ArgAction::SetTrue)
                        .help("Run the pipeline without writing files"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the report as JSON"),
                ),
        )
        .subcommand(Command::new("transforms").about("List built-in transforms"))
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn generate_args(args: &ArgMatches) -> GenerateArgs {
    let paths = |id: &str| -> Vec<PathBuf> {
        args.get_many::<PathBuf>(id)
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    };
    GenerateArgs {
        schema: args.get_one::<PathBuf>("schema").cloned().unwrap_or_default(),
        icons: paths("icons"),
        iconify: paths("iconify"),
        components: args.get_one::<PathBuf>("components").cloned(),
        config: args.get_one::<PathBuf>("config").cloned(),
        out: args
            .get_one::<PathBuf>("out")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(".")),
        dry_run: args.get_flag("dry-run"),
    }
}

fn print_report(outcome: &GenerateOutcome, json: bool) -> anyhow::Result<()> {
    let report = &outcome.report;
    if json {
        println!("{}", serde_json::to_string_pretty(&report.summary())?);
        return Ok(());
    }

    for entry in &report.outcomes {
        let status = match entry.status {
            TransformStatus::Succeeded => "ok",
            TransformStatus::Failed => "FAILED",
        };
        println!("{:<24} {:>6}  {} artifact(s)", entry.name, status, entry.artifact_count);
    }
    for failure in &report.failures {
        println!("  {}: {}", failure.transform_name, failure.error);
    }
    match &outcome.sink {
        Some(summary) => println!(
            "{} artifact(s): {} created, {} updated, {} unchanged",
            summary.total(),
            summary.created,
            summary.updated,
            summary.unchanged
        ),
        None => {
            for artifact in &report.artifacts {
                println!("{}", artifact.full_path());
            }
        }
    }
    Ok(())
}

fn dispatch(matches: &ArgMatches) -> anyhow::Result<ExitCode> {
    match matches.subcommand() {
        Some(("generate", args)) => {
            let outcome = generate::run(&generate_args(args))?;
            print_report(&outcome, args.get_flag("json"))?;
            Ok(if outcome.report.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_PARTIAL)
            })
        }
        Some(("transforms", _)) => {
            let registry = TransformRegistry::with_defaults();
            for descriptor in registry.resolve(registry.names().as_slice())? {
                println!("{:<24} {}", descriptor.name(), descriptor.description());
            }
            Ok(ExitCode::SUCCESS)
        }
        _ => Ok(ExitCode::from(EXIT_FATAL)),
    }
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("log-json"));

    match dispatch(&matches) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn parses_repeated_inputs() {
        let matches = cli()
            .try_get_matches_from([
                "schemagen",
                "generate",
                "--schema",
                "page.json",
                "--icons",
                "a.json",
                "--icons",
                "b.json",
                "--dry-run",
            ])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        let args = generate_args(sub);
        assert_eq!(args.schema, PathBuf::from("page.json"));
        assert_eq!(args.icons, [PathBuf::from("a.json"), PathBuf::from("b.json")]);
        assert!(args.iconify.is_empty());
        assert_eq!(args.out, PathBuf::from("."));
        assert!(args.dry_run);
    }

    #[test]
    fn schema_is_required() {
        assert!(cli()
            .try_get_matches_from(["schemagen", "generate"])
            .is_err());
    }
}
