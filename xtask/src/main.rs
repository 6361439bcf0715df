//! Developer tasks (schema generation, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Workspace root (parent of the xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    if manifest_dir.ends_with("xtask")
        && let Some(parent) = manifest_dir.parent()
    {
        return parent.to_path_buf();
    }
    manifest_dir
}

/// `FIPSGATE_SCHEMAS_DIR` redirects emit/validate away from `<root>/schemas`.
fn schemas_dir() -> PathBuf {
    std::env::var_os("FIPSGATE_SCHEMAS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| project_root().join("schemas"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(fipsgate_types::FipsgateReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(fipsgate_settings::FipsgateConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "fipsgate.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "fipsgate.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that schemas/ matches what would be generated (for CI).
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    for (label, names) in [("Missing schemas:", &missing), ("Schemas out of date:", &mismatched)] {
        if !names.is_empty() {
            eprintln!("{label}");
            for name in names {
                eprintln!("  - {name}");
            }
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Every check id and code must have an explanation with non-empty sections.
fn explain_coverage() -> anyhow::Result<()> {
    use fipsgate_types::explain;

    let mut errors = Vec::new();
    let ids = explain::all_check_ids()
        .iter()
        .map(|id| ("check_id", *id))
        .chain(explain::all_codes().iter().map(|code| ("code", *code)));

    for (kind, id) in ids {
        match explain::lookup_explanation(id) {
            Some(exp) => {
                let empty = [
                    ("title", exp.title),
                    ("description", exp.description),
                    ("remediation", exp.remediation),
                    ("examples.before", exp.examples.before),
                    ("examples.after", exp.examples.after),
                ]
                .into_iter()
                .filter(|(_, text)| text.trim().is_empty())
                .map(|(field, _)| field)
                .collect::<Vec<_>>();
                if empty.is_empty() {
                    println!("  ✓ {kind} {id}");
                } else {
                    errors.push(format!("{kind} '{id}' has empty {}", empty.join(", ")));
                }
            }
            None => errors.push(format!("{kind} '{id}' has no explanation")),
        }
    }

    if !errors.is_empty() {
        eprintln!("\nExplain coverage errors:");
        for err in &errors {
            eprintln!("  - {err}");
        }
        bail!("Explain coverage failed with {} errors", errors.len());
    }

    println!("\n✓ All check IDs and codes have explanations.");
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  explain-coverage  Validate all check IDs and codes have explanations");
}

fn main() -> anyhow::Result<()> {
    let cmd = std::env::args().nth(1).unwrap_or_else(|| "help".to_string());

    match cmd.as_str() {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "explain-coverage" => explain_coverage(),
        other => {
            print_help();
            bail!("unknown xtask command: {other}")
        }
    }
}
