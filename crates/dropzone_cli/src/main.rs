//! Command-line driver for the placement engine.
//!
//! # Responsibility
//! - Build an engine from the default or a JSON layout.
//! - Apply scripted operations and print the final zone snapshot.

use clap::Parser;
use dropzone_core::{init_logging, seed_samples, PlacementEngine, ZoneLayout};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "dropzone", version, about = "Apply zone moves and print the result")]
struct Args {
    /// JSON zone layout; the built-in layout is used when absent.
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Start with empty zones instead of the sample catalog.
    #[arg(long)]
    no_samples: bool,

    /// Absolute directory for rolling log files.
    #[arg(long)]
    log_dir: Option<String>,

    #[arg(long, default_value_t = dropzone_core::default_log_level().to_string())]
    log_level: String,

    /// `move:<item>:<from>:<to>` or `clear:<zone>`, applied in order.
    /// The item id may itself contain `:`.
    #[arg(value_parser = parse_operation)]
    operations: Vec<Operation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Operation {
    Move {
        item: String,
        from: String,
        to: String,
    },
    Clear {
        zone: String,
    },
}

fn parse_operation(raw: &str) -> Result<Operation, String> {
    let invalid =
        || format!("invalid operation `{raw}`; expected move:<item>:<from>:<to> or clear:<zone>");

    if let Some(rest) = raw.strip_prefix("move:") {
        // Zone ids never contain `:`, so the item id keeps whatever is left.
        let mut fields = rest.rsplitn(3, ':');
        let (Some(to), Some(from), Some(item)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(invalid());
        };
        if [item, from, to].iter().any(|field| field.is_empty()) {
            return Err(invalid());
        }
        return Ok(Operation::Move {
            item: item.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    match raw.strip_prefix("clear:") {
        Some(zone) if !zone.is_empty() && !zone.contains(':') => Ok(Operation::Clear {
            zone: zone.to_string(),
        }),
        _ => Err(invalid()),
    }
}

fn apply(engine: &mut PlacementEngine, operation: &Operation) -> Result<String, String> {
    match operation {
        Operation::Move { item, from, to } => engine
            .move_item(item, from, to)
            .map(|outcome| format!("moved {item} to {to} ({})", outcome.item.status()))
            .map_err(|err| format!("move {item} rejected [{}]: {err}", err.code())),
        Operation::Clear { zone } => engine
            .clear(zone)
            .map(|removed| format!("cleared {zone} ({removed} removed)"))
            .map_err(|err| format!("clear {zone} rejected [{}]: {err}", err.code())),
    }
}

fn run(args: Args) -> Result<(), String> {
    if let Some(log_dir) = args.log_dir.as_deref() {
        init_logging(&args.log_level, log_dir)?;
    }

    let layout = match args.layout.as_deref() {
        Some(path) => ZoneLayout::from_json_file(path)
            .map_err(|err| format!("layout `{}`: {err}", path.display()))?,
        None => ZoneLayout::default_layout(),
    };
    let mut engine = PlacementEngine::new(layout).map_err(|err| err.to_string())?;

    if !args.no_samples {
        match seed_samples(&mut engine) {
            Ok(report) => {
                for rejection in &report.rejected {
                    eprintln!(
                        "sample {} rejected [{}]: {}",
                        rejection.item.id(),
                        rejection.reason.code(),
                        rejection.reason
                    );
                }
            }
            Err(err) => eprintln!("samples not seeded [{}]: {err}", err.code()),
        }
    }

    for operation in &args.operations {
        // Rejections are reported and the script keeps going.
        let line = apply(&mut engine, operation).unwrap_or_else(|err| err);
        eprintln!("{line}");
    }

    let rendered = serde_json::to_string_pretty(&engine.snapshot())
        .map_err(|err| format!("failed to render snapshot: {err}"))?;
    println!("{rendered}");
    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_exit module=cli status=error");
            eprintln!("dropzone: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{apply, parse_operation, Operation};
    use dropzone_core::{seed_samples, Category, Item, PlacementEngine};
    use serde_json::json;

    #[test]
    fn parses_move_and_clear() {
        assert_eq!(
            parse_operation("move:msg-1:components:testing").unwrap(),
            Operation::Move {
                item: "msg-1".to_string(),
                from: "components".to_string(),
                to: "testing".to_string(),
            }
        );
        assert_eq!(
            parse_operation("clear:archive").unwrap(),
            Operation::Clear {
                zone: "archive".to_string()
            }
        );
    }

    #[test]
    fn rejects_malformed_operations() {
        assert!(parse_operation("move:msg-1:components").is_err());
        assert!(parse_operation("move::components:testing").is_err());
        assert!(parse_operation("clear:").is_err());
        assert!(parse_operation("swap:a:b").is_err());
        assert!(parse_operation("clear:a:b").is_err());
        assert!(parse_operation("move:msg-1:components:").is_err());
    }

    #[test]
    fn move_item_id_may_contain_colons() {
        assert_eq!(
            parse_operation("move:ns:msg:1:components:testing").unwrap(),
            Operation::Move {
                item: "ns:msg:1".to_string(),
                from: "components".to_string(),
                to: "testing".to_string(),
            }
        );
    }

    #[test]
    fn applies_move_of_item_with_colon_in_id() {
        let mut engine = PlacementEngine::with_default_layout();
        let item = Item::with_id("ns:msg-1", Category::Message, "Scoped", json!({})).unwrap();
        engine.seed(vec![item], "components").unwrap();

        let line = apply(
            &mut engine,
            &parse_operation("move:ns:msg-1:components:active").unwrap(),
        )
        .unwrap();
        assert_eq!(line, "moved ns:msg-1 to active (completed)");
        assert_eq!(engine.locate("ns:msg-1"), Some("active"));
    }

    #[test]
    fn apply_reports_outcomes() {
        let mut engine = PlacementEngine::with_default_layout();
        seed_samples(&mut engine).unwrap();

        let ok = apply(
            &mut engine,
            &parse_operation("move:msg-1:components:testing").unwrap(),
        )
        .unwrap();
        assert_eq!(ok, "moved msg-1 to testing (processing)");

        let err = apply(
            &mut engine,
            &parse_operation("move:msg-1:components:active").unwrap(),
        )
        .unwrap_err();
        assert!(err.contains("[item_not_found]"));
    }
}
