use std::path::Path;
use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, ArrayRef, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";
pub const COL_FLIGHT_NUMBER: &str = "Flight Number";
pub const COL_BOOSTER_VERSION: &str = "Booster Version";

const REQUIRED_COLUMNS: [&str; 4] = [
    COL_LAUNCH_SITE,
    COL_PAYLOAD_MASS,
    COL_CLASS,
    COL_BOOSTER_CATEGORY,
];

/// Record-level defects in an otherwise readable file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("column '{column}' has unsupported type {data_type}")]
    UnsupportedType {
        column: &'static str,
        data_type: String,
    },
    #[error("row {row}: missing value for '{column}'")]
    MissingValue { row: usize, column: &'static str },
    #[error("row {row}: class must be 0 or 1, got {value}")]
    InvalidClass { row: usize, value: f64 },
    #[error("row {row}: payload mass must be a finite non-negative number, got {value}")]
    InvalidPayload { row: usize, value: f64 },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row, columns matched by name (recommended)
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – same column names; numeric columns may be int or float
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    log::info!(
        "Loaded {} launch records from {} sites ({})",
        dataset.len(),
        dataset.sites.len(),
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Raw row shared by the CSV and JSON loaders
// ---------------------------------------------------------------------------

/// One row as it appears on disk, before validation.
#[derive(Debug, Default, Deserialize)]
struct RawLaunchRow {
    #[serde(rename = "Flight Number", default)]
    flight_number: Option<u32>,
    #[serde(rename = "Launch Site", default)]
    launch_site: Option<String>,
    #[serde(rename = "Payload Mass (kg)", default)]
    payload_mass_kg: Option<f64>,
    #[serde(rename = "class", default)]
    class: Option<f64>,
    #[serde(rename = "Booster Version", default)]
    booster_version: Option<String>,
    #[serde(rename = "Booster Version Category", default)]
    booster_version_category: Option<String>,
}

impl RawLaunchRow {
    fn into_record(self, row: usize) -> Result<LaunchRecord, SchemaError> {
        let launch_site = self.launch_site.ok_or(SchemaError::MissingValue {
            row,
            column: COL_LAUNCH_SITE,
        })?;
        let payload = self.payload_mass_kg.ok_or(SchemaError::MissingValue {
            row,
            column: COL_PAYLOAD_MASS,
        })?;
        let class = self.class.ok_or(SchemaError::MissingValue {
            row,
            column: COL_CLASS,
        })?;
        let booster_version_category =
            self.booster_version_category
                .ok_or(SchemaError::MissingValue {
                    row,
                    column: COL_BOOSTER_CATEGORY,
                })?;

        Ok(LaunchRecord {
            flight_number: self.flight_number,
            launch_site,
            payload_mass_kg: validate_payload(payload, row)?,
            outcome: validate_class(class, row)?,
            booster_version: self.booster_version,
            booster_version_category,
        })
    }
}

fn validate_payload(value: f64, row: usize) -> Result<f64, SchemaError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SchemaError::InvalidPayload { row, value })
    }
}

fn validate_class(value: f64, row: usize) -> Result<Outcome, SchemaError> {
    let as_int = value as i64;
    if as_int as f64 != value {
        return Err(SchemaError::InvalidClass { row, value });
    }
    Outcome::from_class(as_int).ok_or(SchemaError::InvalidClass { row, value })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names.  Unknown columns (including the
/// unnamed index column pandas writes first) are ignored.
fn load_csv(path: &Path) -> Result<LaunchDataset> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    read_csv(reader)
}

fn read_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<LaunchDataset> {
    let headers = reader.headers().context("reading CSV headers")?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(SchemaError::MissingColumn(required).into());
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawLaunchRow>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(raw.into_record(row_no)?);
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Flight Number": 1,
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 0.0,
///     "class": 0,
///     "Booster Version": "F9 v1.0  B0003",
///     "Booster Version Category": "v1.0"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<LaunchDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

fn parse_json(text: &str) -> Result<LaunchDataset> {
    let rows: Vec<RawLaunchRow> =
        serde_json::from_str(text).context("Expected a top-level JSON array of records")?;

    let records = rows
        .into_iter()
        .enumerate()
        .map(|(i, raw)| raw.into_record(i))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file written by pandas (`df.to_parquet()`) or polars
/// (`df.write_parquet()`) with the CSV column names.
fn load_parquet(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        read_batch(&batch, &mut records)?;
    }

    Ok(LaunchDataset::from_records(records))
}

fn read_batch(batch: &RecordBatch, records: &mut Vec<LaunchRecord>) -> Result<()> {
    let site_col = text_column(required_column(batch, COL_LAUNCH_SITE)?, COL_LAUNCH_SITE)?;
    let payload_col =
        numeric_column(required_column(batch, COL_PAYLOAD_MASS)?, COL_PAYLOAD_MASS)?;
    let class_col = numeric_column(required_column(batch, COL_CLASS)?, COL_CLASS)?;
    let category_col = text_column(
        required_column(batch, COL_BOOSTER_CATEGORY)?,
        COL_BOOSTER_CATEGORY,
    )?;
    let flight_col = optional_column(batch, COL_FLIGHT_NUMBER)
        .map(|c| numeric_column(c, COL_FLIGHT_NUMBER))
        .transpose()?;
    let version_col = optional_column(batch, COL_BOOSTER_VERSION)
        .map(|c| text_column(c, COL_BOOSTER_VERSION))
        .transpose()?;

    // Row numbers continue across batches.
    let offset = records.len();
    for row in 0..batch.num_rows() {
        let raw = RawLaunchRow {
            flight_number: flight_col
                .and_then(|c| number_at(c, row))
                .map(|n| n as u32),
            launch_site: string_at(site_col, row),
            payload_mass_kg: number_at(payload_col, row),
            class: number_at(class_col, row),
            booster_version: version_col.and_then(|c| string_at(c, row)),
            booster_version_category: string_at(category_col, row),
        };
        records.push(raw.into_record(offset + row)?);
    }
    Ok(())
}

// -- Parquet / Arrow helpers --

fn required_column<'b>(
    batch: &'b RecordBatch,
    name: &'static str,
) -> Result<&'b ArrayRef, SchemaError> {
    optional_column(batch, name).ok_or(SchemaError::MissingColumn(name))
}

fn optional_column<'b>(batch: &'b RecordBatch, name: &str) -> Option<&'b ArrayRef> {
    batch.schema().index_of(name).ok().map(|i| batch.column(i))
}

fn text_column<'b>(col: &'b ArrayRef, name: &'static str) -> Result<&'b ArrayRef, SchemaError> {
    match col.data_type() {
        DataType::Utf8 | DataType::LargeUtf8 => Ok(col),
        other => Err(unsupported(name, other)),
    }
}

fn numeric_column<'b>(col: &'b ArrayRef, name: &'static str) -> Result<&'b ArrayRef, SchemaError> {
    match col.data_type() {
        DataType::Int32 | DataType::Int64 | DataType::Float32 | DataType::Float64 => Ok(col),
        other => Err(unsupported(name, other)),
    }
}

fn unsupported(column: &'static str, data_type: &DataType) -> SchemaError {
    SchemaError::UnsupportedType {
        column,
        data_type: data_type.to_string(),
    }
}

/// Read a string cell; `None` for nulls and non-string columns.
fn string_at(col: &ArrayRef, row: usize) -> Option<String> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Utf8 => col
            .as_any()
            .downcast_ref::<StringArray>()
            .map(|s| s.value(row).to_string()),
        DataType::LargeUtf8 => Some(col.as_string::<i64>().value(row).to_string()),
        _ => None,
    }
}

/// Read a numeric cell as `f64`; `None` for nulls and non-numeric columns.
fn number_at(col: &ArrayRef, row: usize) -> Option<f64> {
    if col.is_null(row) {
        return None;
    }
    let any = col.as_any();
    match col.data_type() {
        DataType::Int32 => any
            .downcast_ref::<Int32Array>()
            .map(|a| a.value(row) as f64),
        DataType::Int64 => any
            .downcast_ref::<Int64Array>()
            .map(|a| a.value(row) as f64),
        DataType::Float32 => any
            .downcast_ref::<Float32Array>()
            .map(|a| a.value(row) as f64),
        DataType::Float64 => any.downcast_ref::<Float64Array>().map(|a| a.value(row)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::Arc;

    use arrow::array::BooleanArray;
    use arrow::datatypes::{Field, Schema, SchemaRef};
    use parquet::arrow::ArrowWriter;

    use super::*;

    const SAMPLE_CSV: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
2,3,VAFB SLC-4E,1,9600.0,F9 FT B1029.1,FT
3,4,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
";

    fn csv_reader(text: &str) -> csv::Reader<&[u8]> {
        csv::Reader::from_reader(text.as_bytes())
    }

    #[test]
    fn csv_rows_are_parsed_by_header_name() {
        let ds = read_csv(csv_reader(SAMPLE_CSV)).unwrap();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]);

        let third = &ds.records[2];
        assert_eq!(third.flight_number, Some(3));
        assert_eq!(third.payload_mass_kg, 9600.0);
        assert_eq!(third.outcome, Outcome::Success);
        assert_eq!(third.booster_version.as_deref(), Some("F9 FT B1029.1"));
        assert_eq!(third.booster_version_category, "FT");
    }

    #[test]
    fn csv_without_optional_columns_still_loads() {
        let text = "Launch Site,Payload Mass (kg),class,Booster Version Category\nA,10,1,B5\n";
        let ds = read_csv(csv_reader(text)).unwrap();
        assert_eq!(ds.records[0].flight_number, None);
        assert_eq!(ds.records[0].booster_version, None);
    }

    #[test]
    fn csv_missing_required_column_is_a_schema_error() {
        let text = "Launch Site,class,Booster Version Category\nA,1,B5\n";
        let err = read_csv(csv_reader(text)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SchemaError>(),
            Some(&SchemaError::MissingColumn(COL_PAYLOAD_MASS))
        );
    }

    #[test]
    fn csv_rejects_class_outside_zero_one() {
        let text = "Launch Site,Payload Mass (kg),class,Booster Version Category\nA,10,1,B5\nA,10,2,B5\n";
        let err = read_csv(csv_reader(text)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SchemaError>(),
            Some(&SchemaError::InvalidClass { row: 1, value: 2.0 })
        );
    }

    #[test]
    fn csv_rejects_negative_payload() {
        let text = "Launch Site,Payload Mass (kg),class,Booster Version Category\nA,-1,1,B5\n";
        let err = read_csv(csv_reader(text)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SchemaError>(),
            Some(SchemaError::InvalidPayload { row: 0, .. })
        ));
    }

    #[test]
    fn csv_with_unparseable_payload_fails_with_row_context() {
        let text = "Launch Site,Payload Mass (kg),class,Booster Version Category\nA,heavy,1,B5\n";
        let err = read_csv(csv_reader(text)).unwrap_err();
        assert!(format!("{err:#}").contains("CSV row 0"));
    }

    #[test]
    fn json_records_are_accepted() {
        let text = r#"[
            {"Launch Site": "A", "Payload Mass (kg)": 500, "class": 1, "Booster Version Category": "FT"},
            {"Launch Site": "B", "Payload Mass (kg)": 1500.5, "class": 0, "Booster Version Category": "B4", "Flight Number": 7}
        ]"#;
        let ds = parse_json(text).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[1].flight_number, Some(7));
        assert_eq!(ds.max_payload, 1500.5);
    }

    #[test]
    fn json_row_without_site_reports_row_and_column() {
        let text = r#"[{"Payload Mass (kg)": 500, "class": 1, "Booster Version Category": "FT"}]"#;
        let err = parse_json(text).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SchemaError>(),
            Some(&SchemaError::MissingValue { row: 0, column: COL_LAUNCH_SITE })
        );
    }

    #[test]
    fn load_file_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spacex_launch_dash.csv");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(SAMPLE_CSV.as_bytes())
            .unwrap();
        assert_eq!(load_file(&path).unwrap().len(), 4);

        let unsupported = dir.path().join("launches.xlsx");
        std::fs::write(&unsupported, b"").unwrap();
        assert!(load_file(&unsupported).is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_file(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.csv"));
    }

    #[test]
    fn parquet_with_integer_columns_loads() {
        let schema = Arc::new(Schema::new(vec![
            Field::new(COL_LAUNCH_SITE, DataType::Utf8, false),
            Field::new(COL_PAYLOAD_MASS, DataType::Float64, false),
            Field::new(COL_CLASS, DataType::Int64, false),
            Field::new(COL_BOOSTER_CATEGORY, DataType::Utf8, false),
            Field::new(COL_FLIGHT_NUMBER, DataType::Int32, true),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["A", "B"])),
                Arc::new(Float64Array::from(vec![500.0, 2500.0])),
                Arc::new(Int64Array::from(vec![1, 0])),
                Arc::new(StringArray::from(vec!["FT", "B4"])),
                Arc::new(Int32Array::from(vec![Some(1), None])),
            ],
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = write_parquet(dir.path(), schema, &batch);

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].flight_number, Some(1));
        assert_eq!(ds.records[1].flight_number, None);
        assert_eq!(ds.records[1].outcome, Outcome::Failure);
        assert_eq!(ds.sites, vec!["A", "B"]);
    }

    #[test]
    fn parquet_column_of_wrong_type_is_named() {
        let schema = Arc::new(Schema::new(vec![
            Field::new(COL_LAUNCH_SITE, DataType::Utf8, false),
            Field::new(COL_PAYLOAD_MASS, DataType::Float64, false),
            Field::new(COL_CLASS, DataType::Boolean, false),
            Field::new(COL_BOOSTER_CATEGORY, DataType::Utf8, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["A"])),
                Arc::new(Float64Array::from(vec![500.0])),
                Arc::new(BooleanArray::from(vec![true])),
                Arc::new(StringArray::from(vec!["FT"])),
            ],
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = write_parquet(dir.path(), schema, &batch);

        let err = load_file(&path).unwrap_err();
        let schema_err = err.downcast_ref::<SchemaError>().unwrap();
        assert_eq!(
            schema_err,
            &SchemaError::UnsupportedType {
                column: COL_CLASS,
                data_type: "Boolean".to_string(),
            }
        );
        assert!(format!("{err:#}").contains("column 'class' has unsupported type Boolean"));
    }

    fn write_parquet(dir: &Path, schema: SchemaRef, batch: &RecordBatch) -> PathBuf {
        let path = dir.join("launches.parquet");
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(batch).unwrap();
        writer.close().unwrap();
        path
    }
}
