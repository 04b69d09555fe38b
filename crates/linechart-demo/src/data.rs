// File: crates/linechart-demo/src/data.rs
// Summary: CSV loader for x,y samples plus a built-in sample set.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use linechart_core::Sample;
use tracing::{debug, warn};

/// Load samples from a CSV file with a header row.
pub fn load_xy_csv(path: &Path) -> Result<Vec<Sample>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_xy_csv(file)
}

/// Columns named `x`/`y` (or common aliases) are used when present, otherwise
/// the first two columns. Rows that do not parse are skipped.
pub fn read_xy_csv(reader: impl Read) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    debug!(?headers, "csv headers");

    let idx = |names: &[&str]| -> Option<usize> { headers.iter().position(|h| names.contains(&h.as_str())) };
    let i_x = idx(&["x", "time", "t", "index"]).unwrap_or(0);
    let i_y = idx(&["y", "value", "v"]).unwrap_or(1);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok()).filter(|v| v.is_finite());
        match (parse(i_x), parse(i_y)) {
            (Some(x), Some(y)) => out.push(Sample::new(x, y)),
            _ => warn!(row = row + 1, "skipping row without numeric x/y"),
        }
    }
    Ok(out)
}

/// Built-in dataset used when no CSV is given.
pub fn sample_data() -> Vec<Sample> {
    (0..=40)
        .map(|i| {
            let x = i as f64 * 25.0;
            let y = 0.5 + 0.4 * (i as f64 / 4.0).sin() + 0.05 * (i as f64 / 1.3).cos();
            Sample::new(x, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_columns_in_any_order() {
        let src = "label,Y,X\na,1.5,10\nb,2.5,20\n";
        let samples = read_xy_csv(src.as_bytes()).unwrap();
        assert_eq!(samples, vec![Sample::new(10.0, 1.5), Sample::new(20.0, 2.5)]);
    }

    #[test]
    fn falls_back_to_first_two_columns_and_skips_bad_rows() {
        let src = "a,b\n1,2\nnope,3\n4, 5\n";
        let samples = read_xy_csv(src.as_bytes()).unwrap();
        assert_eq!(samples, vec![Sample::new(1.0, 2.0), Sample::new(4.0, 5.0)]);
    }

    #[test]
    fn sample_data_is_non_empty() {
        assert_eq!(sample_data().len(), 41);
    }
}
