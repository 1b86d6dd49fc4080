use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::CostBreakdown;

/// Write the per-line breakdown followed by summary rows to a CSV file.
///
/// Values are written unrounded; formatting is left to the spreadsheet.
pub fn write_breakdown_csv(breakdown: &CostBreakdown, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["item", "unit", "quantity", "mass_g", "cost"])?;

    for line in &breakdown.lines {
        wtr.write_record([
            line.name.clone(),
            line.unit.symbol().to_string(),
            line.needed_quantity.to_string(),
            line.needed_mass_g.to_string(),
            line.cost.to_string(),
        ])?;
    }

    for (name, value) in breakdown.summary() {
        let value = value.to_string();
        wtr.write_record([name, "", "", "", value.as_str()])?;
    }

    wtr.flush()?;
    info!(path = %path.display(), lines = breakdown.lines.len(), "breakdown exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{constants::reference_recipe, evaluate};
    use crate::models::RecipeParameters;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_writes_lines_and_summary() {
        let breakdown = evaluate(&reference_recipe(), &RecipeParameters::default());
        let file = NamedTempFile::new().unwrap();
        write_breakdown_csv(&breakdown, file.path()).unwrap();

        let mut reader = csv::Reader::from_path(file.path()).unwrap();
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

        assert_eq!(records.len(), breakdown.lines.len() + breakdown.summary().len());
        assert_eq!(&records[0][0], "Flour");
        assert_eq!(&records[3][1], "pc");

        let total = records
            .iter()
            .find(|r| &r[0] == "total_cost")
            .unwrap();
        let parsed: f64 = total[4].parse().unwrap();
        assert_eq!(parsed, breakdown.total_cost);
    }
}
