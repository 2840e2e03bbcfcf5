use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// AxisField – the selectable x-axis variable
// ---------------------------------------------------------------------------

/// The field currently driving the x-position. The only mutable chart state;
/// changed exclusively by a click on one of the three axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisField {
    Poverty,
    Age,
    Income,
}

impl AxisField {
    pub const ALL: [AxisField; 3] = [AxisField::Poverty, AxisField::Age, AxisField::Income];

    /// The CSV column name backing this field.
    pub fn key(self) -> &'static str {
        match self {
            AxisField::Poverty => "poverty",
            AxisField::Age => "age",
            AxisField::Income => "income",
        }
    }

    /// Project a record onto this field.
    pub fn value(self, record: &Record) -> f64 {
        match self {
            AxisField::Poverty => record.poverty,
            AxisField::Age => record.age,
            AxisField::Income => record.income,
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the dataset
// ---------------------------------------------------------------------------

/// A single state row. Numeric fields are coerced leniently on load:
/// malformed text becomes NaN rather than an error, matching the source
/// data's `+value` coercion. Immutable after load.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    pub state: String,
    pub abbr: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub poverty: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub age: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub income: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub healthcare: f64,
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse::<f64>().unwrap_or(f64::NAN))
}

// ---------------------------------------------------------------------------
// HealthDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// All records, in source-file order. Loaded once, never mutated.
#[derive(Debug, Clone, Default)]
pub struct HealthDataset {
    pub records: Vec<Record>,
}

impl HealthDataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Min and max of a field over all records. NaN cells drop out because
    /// NaN comparisons are always false, the same way d3.min/d3.max skip
    /// them. `None` when the dataset is empty or every cell is NaN.
    pub fn extent(&self, field: AxisField) -> Option<(f64, f64)> {
        self.extent_by(|r| field.value(r))
    }

    /// Max of the outcome measure (the y-axis never changes).
    pub fn max_healthcare(&self) -> Option<f64> {
        self.extent_by(|r| r.healthcare).map(|(_, max)| max)
    }

    fn extent_by<F: Fn(&Record) -> f64>(&self, value: F) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for record in &self.records {
            let v = value(record);
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }
        (min <= max).then_some((min, max))
    }
}

// ---------------------------------------------------------------------------
