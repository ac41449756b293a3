//! Plain-text result report.

use std::fmt::Write;

use crate::calculator::recommend_coats;
use crate::error::Result;
use crate::model::CalculationResult;
use crate::session::Session;

/// Width of the label column.
const LABEL_WIDTH: usize = 22;

/// Format a value with two decimals.
pub fn format_number(value: f64) -> String {
    format!("{:.2}", value)
}

fn plural(count: f64, singular: &str, plural: &str) -> String {
    if count == 1.0 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Render the session as a text report.
///
/// Without a result only a prompt to enter room details is produced.
pub fn generate_report(session: &Session) -> Result<String> {
    let mut output = String::new();

    let result = match &session.result {
        Some(result) => result,
        None => {
            writeln!(output, "Enter Room Details")?;
            writeln!(
                output,
                "Fill in the room dimensions to calculate the amount of paint needed."
            )?;
            return Ok(output);
        }
    };

    generate_header(&mut output, session)?;
    generate_areas(&mut output, result)?;
    generate_paint_needed(&mut output, result)?;

    let recommended = recommend_coats(Some(result));
    writeln!(output)?;
    writeln!(
        output,
        "Coating Recommendation: {}",
        plural(recommended as f64, "coat", "coats")
    )?;

    Ok(output)
}

fn generate_header(output: &mut String, session: &Session) -> Result<()> {
    let dims = &session.dimensions;
    writeln!(output, "Paint Estimate")?;
    writeln!(output, "==============")?;
    writeln!(
        output,
        "Room: {} x {} x {} ft (H x W x L), {}",
        dims.height,
        dims.width,
        dims.length,
        plural(session.coats, "coat", "coats")
    )?;
    writeln!(
        output,
        "Doors: {}, Windows: {}",
        session.doors.len(),
        session.windows.len()
    )?;
    writeln!(output)?;
    Ok(())
}

fn generate_areas(output: &mut String, result: &CalculationResult) -> Result<()> {
    let rows = [
        ("Total Wall Area:", result.wall_area),
        ("Doors & Windows Area:", result.door_window_area),
        ("Paintable Area:", result.paintable_area),
        ("Coverage Per Liter:", result.coverage),
    ];
    for (label, value) in rows {
        writeln!(
            output,
            "{:<width$}{:>8} m²",
            label,
            format_number(value),
            width = LABEL_WIDTH
        )?;
    }
    writeln!(output)?;
    Ok(())
}

fn generate_paint_needed(output: &mut String, result: &CalculationResult) -> Result<()> {
    if result.is_over_subtracted() {
        writeln!(output, "Warning: doors and windows exceed the wall area")?;
    }
    if !result.has_finite_paint() {
        writeln!(
            output,
            "Paint Needed: undefined (coverage per liter must be positive)"
        )?;
        return Ok(());
    }

    let unit = if result.paint_needed == 1.0 {
        "Liter"
    } else {
        "Liters"
    };
    writeln!(
        output,
        "Paint Needed: {} {}",
        format_number(result.paint_needed),
        unit
    )?;
    Ok(())
}
