use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::{
    aggregate::{Aggregate, Marginals, total_population},
    classify::{Classified, classify_all},
    io::{csv::stage_csv, fs::ensure_dir_exists},
    survey::{Record, load},
    table::{RACE_BY_SEX_AGE, RACE_BY_SEX_AGE_DISABILITY, TableLayout, WideTable},
};

/// City whose records are published.
pub const DEFAULT_CITY: i64 = 3730;

/// Where to read from, which city to keep, and where to write.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub city: i64,
    pub output_dir: PathBuf,
    pub separator: u8,
}

impl PipelineConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self { input: input.into(), city: DEFAULT_CITY, output_dir: PathBuf::from("."), separator: b',' }
    }

    pub fn with_city(self, city: i64) -> Self { Self { city, ..self } }

    pub fn with_output_dir(self, output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into(), ..self }
    }

    pub fn with_separator(self, separator: u8) -> Self { Self { separator, ..self } }
}

/// One published table together with the long-format cells it was pivoted from.
#[derive(Debug, Clone)]
pub struct PublishedTable {
    pub layout: TableLayout,
    pub cells: Aggregate,
    pub table: WideTable,
}

impl PublishedTable {
    fn build(layout: TableLayout, records: &[Classified], total: f64) -> Result<Self> {
        let cells = Aggregate::compute(records, layout.attributes, total);
        let table = WideTable::pivot(&cells, layout.columns)?;
        debug!("[pipeline] {}: {} cells, {} rows", layout.file_name, cells.cells().len(), table.num_rows());
        if table.unpublished_share() > 0.0 {
            warn!(
                "[pipeline] {}: {:.3}% of the population falls outside the published race columns",
                layout.file_name, table.unpublished_share()
            );
        }
        Ok(Self { layout, cells, table })
    }
}

/// Everything computed from one filtered dataset.
#[derive(Debug, Clone)]
pub struct Report {
    pub marginals: Marginals,
    pub race_by_sex_age: PublishedTable,
    pub race_by_sex_age_disability: PublishedTable,
}

impl Report {
    /// Weighted population of the filtered dataset.
    #[inline] pub fn total(&self) -> f64 { self.marginals.total }

    pub fn tables(&self) -> [&PublishedTable; 2] {
        [&self.race_by_sex_age, &self.race_by_sex_age_disability]
    }
}

/// Classify and aggregate filtered records. No IO.
pub fn build_report(records: &[Record]) -> Result<Report> {
    let classified = classify_all(records);
    let total = total_population(&classified)?;
    info!("[pipeline] total weighted population {:.0} from {} records", total, classified.len());

    Ok(Report {
        marginals: Marginals::compute(&classified, total),
        race_by_sex_age: PublishedTable::build(RACE_BY_SEX_AGE, &classified, total)?,
        race_by_sex_age_disability: PublishedTable::build(RACE_BY_SEX_AGE_DISABILITY, &classified, total)?,
    })
}

/// Write both tables into `output_dir`. Both files are staged beside their
/// destinations before either is moved into place.
pub fn write_report(report: &Report, output_dir: &Path) -> Result<Vec<PathBuf>> {
    ensure_dir_exists(output_dir)?;

    let staged = report.tables().into_iter()
        .map(|published| {
            let mut df = published.table.to_frame()?;
            let staged = stage_csv(&mut df, &output_dir.join(published.layout.file_name))?;
            Ok((staged, df.height()))
        })
        .collect::<Result<Vec<_>>>()?;

    staged.into_iter()
        .map(|(staged, rows)| {
            let path = staged.path().to_path_buf();
            staged.persist()?;
            info!("[pipeline] wrote {} rows to {}", rows, path.display());
            Ok(path)
        })
        .collect()
}

/// Load, classify, aggregate and write. Returns the report for console output.
pub fn run(config: &PipelineConfig) -> Result<Report> {
    info!("[pipeline] input={} city={} -> {}", config.input.display(), config.city, config.output_dir.display());

    let records = load(&config.input, config.city, config.separator)?;
    let report = build_report(&records)?;
    write_report(&report, &config.output_dir)?;

    Ok(report)
}
