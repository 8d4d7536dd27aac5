//! Presets command implementation.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use bondlab_bonds::presets::{
    CurveShape, SpotPricingPreset, YieldPreset, SPOT_PRICING_PRESETS, YIELD_PRESETS,
};

use crate::cli::OutputFormat;
use crate::output::{print_header, print_json, print_output};

#[derive(Debug, Serialize, Tabled)]
struct PresetRow {
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Command")]
    command: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Description")]
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct PresetListing {
    spot_pricing: &'static [SpotPricingPreset],
    yield_to_maturity: &'static [YieldPreset],
    curve_shapes: [CurveShape; 4],
}

/// Execute the presets command.
pub fn execute(format: OutputFormat) -> Result<()> {
    let rows: Vec<PresetRow> = SPOT_PRICING_PRESETS
        .iter()
        .map(|p| PresetRow {
            key: p.key,
            command: "price",
            name: p.name,
            description: p.description,
        })
        .chain(YIELD_PRESETS.iter().map(|p| PresetRow {
            key: p.key,
            command: "ytm",
            name: p.name,
            description: p.description,
        }))
        .chain(CurveShape::ALL.iter().map(|shape| PresetRow {
            key: shape.key(),
            command: "curve",
            name: shape.key(),
            description: shape.description(),
        }))
        .collect();

    match format {
        OutputFormat::Table => {
            print_header("Lecture Presets");
            print_output(&rows, format)?;
        }
        OutputFormat::Json => print_json(&PresetListing {
            spot_pricing: SPOT_PRICING_PRESETS,
            yield_to_maturity: YIELD_PRESETS,
            curve_shapes: CurveShape::ALL,
        })?,
        OutputFormat::Csv => print_output(&rows, format)?,
        OutputFormat::Minimal => {
            for row in &rows {
                println!("{}", row.key);
            }
        }
    }

    Ok(())
}
