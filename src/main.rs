//! CLI entry point for form-field-props
//!
//! Provides command-line access to field resolution: resolving a field
//! list into property bags, masking single values, and printing the
//! canonical property table.

use clap::{ArgAction, Parser, Subcommand};
use colored::*;
use form_field_props::binding::PreviewBinding;
use form_field_props::core::{
    parser::{load_fields, parse_field_arg},
    patterns,
    resolver::{clean_value, masked_value, overlay},
    resolve, resolve_with_values, FieldProps, FieldSpec, FieldType, Mask, UnknownFieldType,
};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(name = "form-field-props")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve input properties for a list of fields
    Resolve {
        /// Field list file (`name: type` per line, or a .json array)
        #[arg(short, long)]
        fields: Option<PathBuf>,

        /// Inline field as `name:type` (repeatable)
        #[arg(long = "field", value_parser = parse_field_arg)]
        field: Vec<FieldSpec>,

        /// Current value as `name=value`; adds value and maskedValue (repeatable)
        #[arg(long = "value", value_parser = parse_value_arg)]
        values: Vec<(String, String)>,

        /// Print JSON instead of a listing
        #[arg(long)]
        json: bool,
    },

    /// Show the clean and masked form of a value
    Mask {
        /// Field type tag, e.g. cardNumber
        #[arg(value_parser = parse_type_arg)]
        field_type: FieldType,

        /// Value to mask
        value: String,
    },

    /// List every field type with its fixed attributes
    Types,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Resolve {
            fields,
            field,
            values,
            json,
        } => resolve_fields(fields.as_deref(), field, values, json)?,
        Commands::Mask { field_type, value } => show_mask(field_type, &value),
        Commands::Types => list_types(),
    }

    Ok(())
}

/// Parse a field type tag, rejecting unknown tags
fn parse_type_arg(arg: &str) -> Result<FieldType, UnknownFieldType> {
    arg.parse()
}

/// Parse a `name=value` pair
fn parse_value_arg(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected 'name=value', got '{}'", arg))
}

/// Expand tilde in a user supplied path
fn expand_path(path: &Path) -> anyhow::Result<PathBuf> {
    let expanded = shellexpand::tilde(
        path.to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Resolve fields from a file and/or the command line
fn resolve_fields(
    path: Option<&Path>,
    inline: Vec<FieldSpec>,
    values: Vec<(String, String)>,
    json: bool,
) -> anyhow::Result<()> {
    let mut fields = match path {
        Some(path) => {
            let path = expand_path(path)?;
            if !json {
                println!("{} Loading fields: {}", "→".cyan(), path.display());
            }
            load_fields(&path)?
        }
        None => Vec::new(),
    };
    fields.extend(inline);

    if fields.is_empty() {
        anyhow::bail!("No fields given (use --fields FILE or --field name:type)");
    }

    let watch = !values.is_empty();
    let binding = values
        .into_iter()
        .fold(PreviewBinding::new(), |binding, (name, value)| {
            binding.with_value(name, value)
        });

    let resolved = if watch {
        resolve_with_values(&fields, &binding)?
    } else {
        resolve(&fields, &binding)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        print_resolved(&fields, &resolved);
    }

    Ok(())
}

/// Fields in list order, each name once; a duplicated name keeps its last
/// entry since that is the one the resolved map holds
fn listing_order(fields: &[FieldSpec]) -> Vec<&FieldSpec> {
    let mut seen = HashSet::new();
    let mut unique: Vec<&FieldSpec> = fields
        .iter()
        .rev()
        .filter(|field| seen.insert(field.name.as_str()))
        .collect();
    unique.reverse();
    unique
}

/// Print bags in field list order
fn print_resolved(fields: &[FieldSpec], resolved: &FieldProps) {
    for field in listing_order(fields) {
        let Some(bag) = resolved.get(&field.name) else {
            continue;
        };

        println!("{} {}", field.name.cyan().bold(), format!("({})", field.field_type).dimmed());
        for (name, value) in bag.iter() {
            println!("  {} = {}", name.green(), value);
        }
        println!();
    }

    println!("{} Resolved {} fields", "✓".green(), resolved.len());
}

/// Print clean and masked forms of a value
fn show_mask(field_type: FieldType, value: &str) {
    let clean = clean_value(field_type, value);

    match Mask::for_type(field_type) {
        Some(mask) => {
            println!("{} {}", "Mask:  ".bold(), mask.template());
            println!("{} {}", "Clean: ".bold(), clean);
            println!("{} {}", "Masked:".bold(), masked_value(field_type, value).cyan());
        }
        None => {
            println!("{}", format!("{} fields have no mask", field_type).yellow());
            println!("{} {}", "Value: ".bold(), clean);
        }
    }

    if patterns::matches(field_type, &clean) {
        println!("{} Matches {} pattern", "✓".green(), field_type);
    } else {
        println!("{} Does not match {} pattern", "✗".red(), field_type);
    }
}

/// Print the fixed attributes of every field type
fn list_types() {
    for field_type in FieldType::ALL {
        let mask = Mask::for_type(field_type)
            .map(|mask| format!(" mask {}", mask))
            .unwrap_or_default();

        println!("{}{}", field_type.to_string().cyan().bold(), mask.dimmed());
        for (name, value) in overlay(field_type).iter() {
            println!("  {} = {}", name.green(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_rejects_unknown_type() {
        assert!(Cli::try_parse_from(["form-field-props", "mask", "bogus", "1"]).is_err());
    }

    #[test]
    fn test_mask_accepts_known_type() {
        let cli = Cli::try_parse_from(["form-field-props", "mask", "cardNumber", "4111"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Mask { field_type: FieldType::CardNumber, .. }
        ));
    }

    #[test]
    fn test_inline_field_accepts_unknown_type() {
        let cli = Cli::try_parse_from(["form-field-props", "resolve", "--field", "x:nick-name"])
            .unwrap();
        match cli.command {
            Commands::Resolve { field, .. } => {
                assert_eq!(field, vec![FieldSpec::new("x", FieldType::Text)])
            }
            _ => unreachable!("resolve subcommand expected"),
        }
    }

    #[test]
    fn test_parse_value_arg() {
        assert_eq!(
            parse_value_arg("card=4111 1111"),
            Ok(("card".to_string(), "4111 1111".to_string()))
        );
        assert_eq!(
            parse_value_arg("note=a=b"),
            Ok(("note".to_string(), "a=b".to_string()))
        );
        assert_eq!(parse_value_arg("empty="), Ok(("empty".to_string(), String::new())));
        assert!(parse_value_arg("novalue").is_err());
        assert!(parse_value_arg("=4111").is_err());
    }

    #[test]
    fn test_listing_order_keeps_last_duplicate() {
        let fields = vec![
            FieldSpec::new("contact", FieldType::Email),
            FieldSpec::new("card", FieldType::CardNumber),
            FieldSpec::new("contact", FieldType::Phone),
        ];
        let order = listing_order(&fields);

        assert_eq!(
            order,
            vec![
                &FieldSpec::new("card", FieldType::CardNumber),
                &FieldSpec::new("contact", FieldType::Phone),
            ]
        );
    }
}
