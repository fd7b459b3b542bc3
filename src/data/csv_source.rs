use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::core::{Attribute, DataPoint};
use crate::error::{ChartError, ChartResult};

use super::{DataSchema, DataSource, coerce_number};

/// CSV file on disk with one row per state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDataSource {
    path: PathBuf,
    schema: DataSchema,
}

impl CsvDataSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            schema: DataSchema::default(),
        }
    }

    #[must_use]
    pub fn with_schema(mut self, schema: DataSchema) -> Self {
        self.schema = schema;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for CsvDataSource {
    fn load(&self) -> ChartResult<Vec<DataPoint>> {
        let origin = self.describe();
        let file =
            File::open(&self.path).map_err(|err| ChartError::load_failure(origin.clone(), err))?;
        parse_data_points(BufReader::new(file), &self.schema, &origin)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Header positions of every column the loader needs.
struct ColumnIndex {
    state: usize,
    abbr: usize,
    numeric: [(Attribute, usize); 6],
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, schema: &DataSchema, origin: &str) -> ChartResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim() == name)
                .ok_or_else(|| {
                    ChartError::load_failure(origin, format!("missing required column `{name}`"))
                })
        };

        let column_for = |attribute: Attribute| match attribute {
            Attribute::Obesity => schema.obesity_column.as_str(),
            other => other.key(),
        };

        let mut numeric = [(Attribute::Poverty, 0); 6];
        for (slot, attribute) in numeric.iter_mut().zip(Attribute::ALL) {
            *slot = (attribute, find(column_for(attribute))?);
        }

        Ok(Self {
            state: find(&schema.state_column)?,
            abbr: find(&schema.abbr_column)?,
            numeric,
        })
    }

    fn point(&self, record: &StringRecord) -> DataPoint {
        let field = |index: usize| record.get(index).unwrap_or_default();
        self.numeric.iter().fold(
            DataPoint::new(field(self.state), field(self.abbr)),
            |point, &(attribute, index)| point.with_value(attribute, coerce_number(field(index))),
        )
    }
}

/// Parses CSV rows into data points, keeping file order.
///
/// `origin` only labels load errors.
pub fn parse_data_points<R: Read>(
    reader: R,
    schema: &DataSchema,
    origin: &str,
) -> ChartResult<Vec<DataPoint>> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|err| ChartError::load_failure(origin, err))?
        .clone();
    let columns = ColumnIndex::resolve(&headers, schema, origin)?;

    let mut points = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|err| ChartError::load_failure(origin, err))?;
        points.push(columns.point(&record));
    }

    debug!(origin, rows = points.len(), "loaded survey data");
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
id,state,abbr,poverty,age,income,healthcare,smokes,obesity
1,Alabama,AL,19.3,38.6,42830,13.9,21.1,33.5
2,Alaska,AK,11.2,33.3,71583,15,19.9,29.7
";

    #[test]
    fn parses_rows_in_file_order() {
        let points =
            parse_data_points(SAMPLE.as_bytes(), &DataSchema::default(), "sample").expect("parse");
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].state, "Alabama");
        assert_eq!(points[1].abbr, "AK");
        assert_eq!(points[0].income, 42_830.0);
        assert_eq!(points[1].healthcare, 15.0);
        assert_eq!(points[0].obesity, 33.5);
    }

    #[test]
    fn obesity_column_name_is_configurable() {
        let misspelled = SAMPLE.replace("obesity", "obsesity");
        let default_schema = parse_data_points(misspelled.as_bytes(), &DataSchema::default(), "s");
        assert!(matches!(default_schema, Err(ChartError::LoadFailure { .. })));

        let schema = DataSchema::default().with_obesity_column("obsesity");
        let points = parse_data_points(misspelled.as_bytes(), &schema, "s").expect("parse");
        assert_eq!(points[1].obesity, 29.7);
    }

    #[test]
    fn missing_file_is_load_failure() {
        let source = CsvDataSource::new("does/not/exist.csv");
        let err = source.load().expect_err("missing file");
        assert!(matches!(err, ChartError::LoadFailure { .. }));
    }

    #[test]
    fn ragged_rows_are_load_failure() {
        let ragged = format!("{SAMPLE}3,Arizona,AZ,18\n");
        let err = parse_data_points(ragged.as_bytes(), &DataSchema::default(), "s")
            .expect_err("ragged row");
        assert!(matches!(err, ChartError::LoadFailure { .. }));
    }
}
