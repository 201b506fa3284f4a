//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - builds the REST client from the environment
//! - fetches (or reads) records and classifies them
//! - prints reports or JSON

use std::fs::File;
use std::path::Path;

use clap::Parser;
use serde_json::{Map, Value};

use crate::cli::{Cli, ClassifyArgs, Command, GetArgs, ListArgs};
use crate::client::{ListQuery, WpClient};
use crate::error::AppError;
use crate::models::{ClassOverride, Model, factory};

/// Entry point for the `press` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Command::List(args) => handle_list(args),
        Command::Get(args) => handle_get(args),
        Command::Classify(args) => handle_classify(args),
    }
}

fn handle_list(args: ListArgs) -> Result<(), AppError> {
    let client = WpClient::from_env()?;
    let query = ListQuery {
        per_page: args.per_page,
        limit: args.limit,
        search: args.search,
    };
    let models = client.list(args.resource, &query)?;
    print_models(&models, args.json)
}

fn handle_get(args: GetArgs) -> Result<(), AppError> {
    let client = WpClient::from_env()?;
    let model = client.get(args.resource, args.id)?;
    if args.json {
        println!("{}", to_json(&model)?);
    } else {
        print!("{}", crate::report::format_model_detail(&model));
    }
    Ok(())
}

fn handle_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let records = read_records(&args.file)?;
    let class_override = build_override(&args)?;
    let models: Vec<Model> = records
        .iter()
        .map(|record| factory::create(record, class_override.as_ref()))
        .collect();
    print_models(&models, args.json)
}

fn print_models(models: &[Model], json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", to_json(&models)?);
    } else {
        print!("{}", crate::report::format_model_list(models));
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::config(format!("Failed to serialize output: {e}")))
}

/// Read one record or an array of records from a local JSON file.
fn read_records(path: &Path) -> Result<Vec<Map<String, Value>>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::config(format!("Failed to open '{}': {e}", path.display())))?;
    let body: Value = serde_json::from_reader(file)
        .map_err(|e| AppError::config(format!("Invalid JSON in '{}': {e}", path.display())))?;

    match body {
        Value::Object(record) => Ok(vec![record]),
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(record) => Some(record),
                _ => None,
            })
            .collect()),
        _ => Err(AppError::config(format!(
            "'{}' must hold a JSON object or an array of objects.",
            path.display()
        ))),
    }
}

/// Build the classification override from CLI flags; `--as` wins over `--map`.
fn build_override(args: &ClassifyArgs) -> Result<Option<ClassOverride>, AppError> {
    if let Some(name) = &args.force_variant {
        return Ok(Some(ClassOverride::variant(name.clone())));
    }
    if args.type_map.is_empty() {
        return Ok(None);
    }

    let mut pairs = Vec::with_capacity(args.type_map.len());
    for entry in &args.type_map {
        let (kind, variant) = entry
            .split_once('=')
            .ok_or_else(|| AppError::config(format!("Invalid --map '{entry}' (expected TYPE=VARIANT).")))?;
        pairs.push((kind.to_string(), variant.to_string()));
    }
    Ok(Some(ClassOverride::by_type(pairs)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn classify_args(force: Option<&str>, maps: &[&str]) -> ClassifyArgs {
        ClassifyArgs {
            file: PathBuf::from("records.json"),
            force_variant: force.map(String::from),
            type_map: maps.iter().map(|s| s.to_string()).collect(),
            json: false,
        }
    }

    #[test]
    fn no_flags_mean_no_override() {
        let parsed = build_override(&classify_args(None, &[])).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn force_variant_wins_over_map() {
        let parsed = build_override(&classify_args(Some("attachment"), &["book=page"])).unwrap();
        match parsed {
            Some(ClassOverride::Variant(name)) => assert_eq!(name, "attachment"),
            other => panic!("expected a single-variant override, got {other:?}"),
        }
    }

    #[test]
    fn map_entries_parse_into_a_type_map() {
        let parsed = build_override(&classify_args(None, &["book=page", "movie=attachment"])).unwrap();
        match parsed {
            Some(ClassOverride::ByType(map)) => {
                assert_eq!(map.get("book").map(String::as_str), Some("page"));
                assert_eq!(map.get("movie").map(String::as_str), Some("attachment"));
            }
            other => panic!("expected a type-map override, got {other:?}"),
        }
    }

    #[test]
    fn malformed_map_entries_are_rejected() {
        assert!(build_override(&classify_args(None, &["book page"])).is_err());
    }
}
