use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Column – the fixed FIRMS schema
// ---------------------------------------------------------------------------

/// One of the nine columns of the FIRMS code list, in header order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    FirmsCode,
    FirmsName,
    FacilityType,
    Address,
    City,
    State,
    Zip,
    Country,
    FirmsStatus,
}

impl Column {
    /// All columns in the order they appear in the source header.
    pub const ALL: [Column; 9] = [
        Column::FirmsCode,
        Column::FirmsName,
        Column::FacilityType,
        Column::Address,
        Column::City,
        Column::State,
        Column::Zip,
        Column::Country,
        Column::FirmsStatus,
    ];

    /// Header text as it appears in the source file and in responses.
    pub fn display_name(self) -> &'static str {
        match self {
            Column::FirmsCode => "FIRMS Code",
            Column::FirmsName => "FIRMS Name",
            Column::FacilityType => "Facility Type",
            Column::Address => "Address",
            Column::City => "City",
            Column::State => "State",
            Column::Zip => "Zip",
            Column::Country => "Country",
            Column::FirmsStatus => "FIRMS Status",
        }
    }

    /// Key used for this column in a specific-search request body.
    pub fn request_key(self) -> &'static str {
        match self {
            Column::FirmsCode => "firmCode",
            Column::FirmsName => "firmName",
            Column::FacilityType => "facilityType",
            Column::Address => "address",
            Column::City => "city",
            Column::State => "state",
            Column::Zip => "zip",
            Column::Country => "country",
            Column::FirmsStatus => "status",
        }
    }

    /// Resolve a request key or a display name (exact match) to a column.
    pub fn from_key(key: &str) -> Option<Column> {
        Column::ALL
            .into_iter()
            .find(|c| c.request_key() == key || c.display_name() == key)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ---------------------------------------------------------------------------
// FirmRecord – one row of the code list
// ---------------------------------------------------------------------------

/// A single facility (one data row of the source file).
///
/// Values are kept as raw text; a column missing from a truncated row is
/// stored as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FirmRecord {
    #[serde(rename = "FIRMS Code")]
    pub firms_code: String,
    #[serde(rename = "FIRMS Name")]
    pub firms_name: String,
    #[serde(rename = "Facility Type")]
    pub facility_type: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Zip")]
    pub zip: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "FIRMS Status")]
    pub firms_status: String,
}

impl FirmRecord {
    /// Value of `column` for this record.
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::FirmsCode => &self.firms_code,
            Column::FirmsName => &self.firms_name,
            Column::FacilityType => &self.facility_type,
            Column::Address => &self.address,
            Column::City => &self.city,
            Column::State => &self.state,
            Column::Zip => &self.zip,
            Column::Country => &self.country,
            Column::FirmsStatus => &self.firms_status,
        }
    }

    /// Mutable slot for `column`, used while assembling a row.
    pub fn get_mut(&mut self, column: Column) -> &mut String {
        match column {
            Column::FirmsCode => &mut self.firms_code,
            Column::FirmsName => &mut self.firms_name,
            Column::FacilityType => &mut self.facility_type,
            Column::Address => &mut self.address,
            Column::City => &mut self.city,
            Column::State => &mut self.state,
            Column::Zip => &mut self.zip,
            Column::Country => &mut self.country,
            Column::FirmsStatus => &mut self.firms_status,
        }
    }

    /// Iterate over `(column, value)` pairs in header order.
    pub fn values(&self) -> impl Iterator<Item = (Column, &str)> + '_ {
        Column::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

// ---------------------------------------------------------------------------
// FirmDataset – the complete loaded code list
// ---------------------------------------------------------------------------

/// All records of the source file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirmDataset {
    pub records: Vec<FirmRecord>,
}

impl FirmDataset {
    pub fn new(records: Vec<FirmRecord>) -> Self {
        FirmDataset { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<FirmRecord> {
        self.records
    }
}
