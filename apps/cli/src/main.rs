//! CLI entry point for tabsplit.
//!
//! This binary is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All allocation logic lives in the `tabsplit-core` crate.
//!
//! ## Exit Codes
//! - 0: split computed
//! - 1: runtime failure (unreadable file, malformed JSON, bad flags)
//! - 2: validation error from the engine (recoverable user input problem)

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tabsplit_core::{
    auto_fix_percentages, compute_split, AllocationResult, BillInput, Participant, Policy,
};

// =============================================================================
// Argument Definitions
// =============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "tabsplit",
    version,
    about = "Split a shared bill by equal parts, percentages, shares, or order amounts"
)]
struct Cli {
    /// Emit the result as JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,

    /// When percentages don't total 100, repair them and retry instead of
    /// failing.
    #[arg(long, global = true)]
    auto_fix: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Everyone pays the same amount.
    Equal {
        /// Bill total.
        #[arg(long)]
        total: f64,

        /// Number of people splitting the bill.
        #[arg(long, default_value_t = 2)]
        people: usize,

        #[command(flatten)]
        modifiers: Modifiers,
    },

    /// Per-person percentages of the total (must sum to 100).
    Percentage {
        /// Bill total.
        #[arg(long)]
        total: f64,

        /// Comma-separated percentage points, one per person.
        #[arg(long, value_delimiter = ',', required = true)]
        values: Vec<f64>,

        #[command(flatten)]
        modifiers: Modifiers,
    },

    /// Proportional to per-person share units.
    Share {
        /// Bill total.
        #[arg(long)]
        total: f64,

        /// Comma-separated share units, one per person.
        #[arg(long, value_delimiter = ',', required = true)]
        values: Vec<f64>,

        #[command(flatten)]
        modifiers: Modifiers,
    },

    /// Proportional to what each person ordered; the total is derived.
    Order {
        /// Comma-separated order subtotals, one per person.
        #[arg(long, value_delimiter = ',', required = true)]
        values: Vec<f64>,

        #[command(flatten)]
        modifiers: Modifiers,
    },

    /// Compute a split from a JSON bill description.
    File {
        /// Path to the bill JSON (a serialized BillInput).
        path: PathBuf,
    },
}

/// Flags shared by every inline policy subcommand.
#[derive(Args, Debug, Default)]
struct Modifiers {
    /// Comma-separated display names, matched to people by position.
    #[arg(long, value_delimiter = ',')]
    names: Vec<String>,

    /// Tax surcharge percent; passing the flag enables tax.
    #[arg(long)]
    tax: Option<f64>,

    /// Return exact fractional amounts instead of whole currency units.
    #[arg(long)]
    exact: bool,
}

// =============================================================================
// Input Construction
// =============================================================================

/// Builds participants from per-person values and optional names.
fn participants(values: &[f64], names: &[String]) -> Vec<Participant> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| match names.get(i) {
            Some(name) if !name.trim().is_empty() => Participant::named(name.clone(), value),
            _ => Participant::new(value),
        })
        .collect()
}

fn apply_modifiers(mut input: BillInput, modifiers: &Modifiers) -> BillInput {
    if let Some(percent) = modifiers.tax {
        input = input.with_tax(percent);
    }
    if modifiers.exact {
        input = input.without_rounding();
    }
    input
}

/// Turns the parsed command into the engine's input.
fn build_input(cmd: &Commands) -> anyhow::Result<BillInput> {
    let input = match cmd {
        Commands::Equal {
            total,
            people,
            modifiers,
        } => {
            let values = vec![0.0; *people];
            apply_modifiers(
                BillInput::new(Policy::Equal, participants(&values, &modifiers.names))
                    .with_total(*total),
                modifiers,
            )
        }

        Commands::Percentage {
            total,
            values,
            modifiers,
        } => apply_modifiers(
            BillInput::new(Policy::Percentage, participants(values, &modifiers.names))
                .with_total(*total),
            modifiers,
        ),

        Commands::Share {
            total,
            values,
            modifiers,
        } => apply_modifiers(
            BillInput::new(Policy::Share, participants(values, &modifiers.names))
                .with_total(*total),
            modifiers,
        ),

        Commands::Order { values, modifiers } => apply_modifiers(
            BillInput::new(Policy::Order, participants(values, &modifiers.names)),
            modifiers,
        ),

        Commands::File { path } => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading bill description {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing bill description {}", path.display()))?
        }
    };

    Ok(input)
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders the result card: per-person lines, total, modifier footnote.
fn render_table(input: &BillInput, result: &AllocationResult) -> String {
    let mut out = String::new();

    for (i, (participant, amount)) in input
        .participants
        .iter()
        .zip(&result.amounts)
        .enumerate()
    {
        out.push_str(&format!(
            "{:<20} {:>12.2}\n",
            participant.display_name(i),
            amount
        ));
    }

    out.push_str(&format!("{}\n", "-".repeat(33)));
    out.push_str(&format!("{:<20} {:>12.2}\n", "Total", result.total()));

    let tax_note = if input.tax_enabled {
        format!("Tax {}% included", input.tax_percent)
    } else {
        "No tax".to_string()
    };
    let rounding_note = if result.rounded {
        "Amounts rounded"
    } else {
        "Exact"
    };
    out.push_str(&format!("{tax_note} | {rounding_note}\n"));

    out
}

// =============================================================================
// Entry Point
// =============================================================================

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let mut input = build_input(&cli.cmd)?;
    debug!(?input, "computed bill input");

    let result = match compute_split(&input) {
        Ok(result) => result,
        Err(err) if err.is_auto_fixable() && cli.auto_fix => {
            info!(%err, "repairing percentages and retrying");
            input.participants = auto_fix_percentages(&input.participants);
            compute_split(&input).context("split failed after percentage repair")?
        }
        Err(err) => {
            eprintln!("error: {err}");
            if err.is_auto_fixable() {
                eprintln!("hint: pass --auto-fix to repair the percentages and retry");
            }
            return Ok(ExitCode::from(2));
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_table(&input, &result));
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tabsplit_core::DEFAULT_TAX_PERCENT;

    #[test]
    fn test_equal_command_builds_n_participants() {
        let cli = Cli::parse_from(["tabsplit", "equal", "--total", "100", "--people", "3"]);
        let input = build_input(&cli.cmd).unwrap();
        assert_eq!(input.policy, Policy::Equal);
        assert_eq!(input.participant_count(), 3);
        assert_eq!(input.declared_total, Some(100.0));
        assert!(input.rounding_enabled);
        assert!(!input.tax_enabled);
    }

    #[test]
    fn test_values_and_names_are_zipped() {
        let cli = Cli::parse_from([
            "tabsplit",
            "share",
            "--total",
            "100",
            "--values",
            "1,1,2",
            "--names",
            "Ana,Ben",
        ]);
        let input = build_input(&cli.cmd).unwrap();
        assert_eq!(input.participants[0].display_name(0), "Ana");
        assert_eq!(input.participants[1].display_name(1), "Ben");
        // No third name given: falls back to the positional default
        assert_eq!(input.participants[2].display_name(2), "Person 3");
        assert_eq!(input.participants[2].value, 2.0);
    }

    #[test]
    fn test_tax_and_exact_flags() {
        let cli = Cli::parse_from([
            "tabsplit", "order", "--values", "30,70", "--tax", "10", "--exact",
        ]);
        let input = build_input(&cli.cmd).unwrap();
        assert!(input.tax_enabled);
        assert_eq!(input.tax_percent, 10.0);
        assert!(!input.rounding_enabled);
        assert_eq!(input.declared_total, None);
    }

    #[test]
    fn test_default_tax_percent_matches_core() {
        let cli = Cli::parse_from(["tabsplit", "equal", "--total", "50"]);
        let input = build_input(&cli.cmd).unwrap();
        // Disabled by default, but primed with the conventional rate
        assert_eq!(input.tax_percent, DEFAULT_TAX_PERCENT);
    }

    #[test]
    fn test_render_table_lists_everyone_and_total() {
        let input = BillInput::new(
            Policy::Equal,
            vec![Participant::named("Ana", 0.0), Participant::new(0.0)],
        )
        .with_total(101.0);
        let result = compute_split(&input).unwrap();
        let table = render_table(&input, &result);

        assert!(table.contains("Ana"));
        assert!(table.contains("Person 2"));
        assert!(table.contains("Total"));
        assert!(table.contains("101.00"));
        assert!(table.contains("Amounts rounded"));
    }
}
