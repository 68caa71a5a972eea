//! Place command implementation - split one helix under one or more placements

use hjh_core::{place_all, FragmentRecord, Helix, HelixPair, Placement, PlacementSet};
use serde::Serialize;
use std::io::Write;

use crate::config::{Config, OutputFormat};
use crate::error::{CliError, CliResult};

/// Helix and placement options collected from the command line
pub struct PlaceArgs {
    pub side1: String,
    pub side2: String,
    pub junction_length: Option<usize>,
    pub total_length: Option<usize>,
    pub offset: Option<i64>,
    pub placements: Vec<Placement>,
    pub middle_side1: Option<String>,
    pub middle_side2: Option<String>,
    pub format: Option<OutputFormat>,
}

#[derive(Serialize)]
struct PlacementOutput<'a> {
    placement: String,
    effective_length: usize,
    records: &'a PlacementSet,
}

pub fn execute(config: &Config, args: PlaceArgs) -> CliResult<()> {
    let junction_length = args.junction_length.unwrap_or(config.placement.junction_length);
    let format = args.format.unwrap_or(config.output.format);

    let pair = HelixPair::new(args.side1, args.side2)?;
    let helix = match args.total_length {
        Some(total) => Helix::with_total_length(pair, junction_length, total)?,
        None => Helix::new(pair, junction_length)?,
    };
    log::info!(
        "Helix of {} bp, junction {} nt, effective length {}",
        helix.sequence().len(),
        junction_length,
        helix.effective_length()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Some(offset) = args.offset {
        let record = helix.split_at_offset(offset)?;
        let set = PlacementSet::FourPart(vec![record]);
        write_set(&mut out, format, &format!("offset {}", offset), helix.effective_length(), &set)?;
        return Ok(());
    }

    let placements = if args.placements.is_empty() {
        config.placement.placements.clone()
    } else {
        args.placements
    };
    let middle = resolve_middle_helix(config, args.middle_side1, args.middle_side2)?;

    let results = place_all(&helix, &placements, middle.as_ref());

    let mut failures = Vec::new();
    for (placement, result) in placements.iter().zip(results) {
        match result {
            Ok(set) => write_set(&mut out, format, placement.name(), helix.effective_length(), &set)?,
            Err(e) => {
                log::error!("Skipping {}: {}", placement, e);
                failures.push(CliError::placement(*placement, e.to_string()));
            }
        }
    }
    out.flush()?;

    // Report the first failure once everything else has been written
    match failures.into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Middle helix from the command line, falling back to hjh.toml
fn resolve_middle_helix(
    config: &Config,
    side1: Option<String>,
    side2: Option<String>,
) -> CliResult<Option<HelixPair>> {
    match (side1, side2) {
        (Some(side1), Some(side2)) => Ok(Some(HelixPair::new(side1, side2)?)),
        (None, None) => config.middle_helix.helix_pair(),
        _ => Err(CliError::config(
            "--middle-side1 and --middle-side2 must be given together",
        )),
    }
}

fn write_set<W: Write>(
    out: &mut W,
    format: OutputFormat,
    label: &str,
    effective_length: usize,
    set: &PlacementSet,
) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "# {} ({} records, effective length {})", label, set.len(), effective_length)?;
            match set {
                PlacementSet::FourPart(records) => {
                    for record in records {
                        writeln!(out, "{}\t{}", split_name(record), record)?;
                    }
                }
                PlacementSet::SixPart(records) => {
                    for record in records {
                        writeln!(out, "{}_{}\t{}", record.total_length(), record.separation_length(), record)?;
                    }
                }
            }
        }
        OutputFormat::Json => {
            let output = PlacementOutput {
                placement: label.to_string(),
                effective_length,
                records: set,
            };
            serde_json::to_writer(&mut *out, &output)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Helix lengths on either side of the junction, as used in construct names
fn split_name(record: &FragmentRecord) -> String {
    format!("{}_{}", record.helix_one_length(), record.helix_two_length())
}
