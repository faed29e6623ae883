use std::borrow::Cow;
use std::collections::BTreeMap;

use super::model::{Column, FirmDataset, FirmRecord};

// ---------------------------------------------------------------------------
// Query: what the user asked for
// ---------------------------------------------------------------------------

/// A search over the FIRMS code list.
///
/// Both variants compare raw text by substring containment. When
/// `case_sensitive` is false both sides are lowercased first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// `term` must occur in at least one column.
    General { term: String, case_sensitive: bool },
    /// Every non-empty value must occur in the column its key names.
    /// Keys are request keys (`firmCode`) or display names (`FIRMS Code`).
    Specific {
        fields: BTreeMap<String, String>,
        case_sensitive: bool,
    },
}

impl Query {
    pub fn case_sensitive(&self) -> bool {
        match self {
            Query::General { case_sensitive, .. } | Query::Specific { case_sensitive, .. } => {
                *case_sensitive
            }
        }
    }
}

fn fold(s: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.to_lowercase())
    }
}

// ---------------------------------------------------------------------------
// Matcher: a query with its needles folded once
// ---------------------------------------------------------------------------

enum Matcher {
    General {
        needle: String,
        case_sensitive: bool,
    },
    /// `None` column: the key named no known column, so it can never match.
    Specific {
        constraints: Vec<(Option<Column>, String)>,
        case_sensitive: bool,
    },
}

impl Matcher {
    fn new(query: &Query) -> Self {
        match query {
            Query::General {
                term,
                case_sensitive,
            } => Matcher::General {
                needle: fold(term, *case_sensitive).into_owned(),
                case_sensitive: *case_sensitive,
            },
            Query::Specific {
                fields,
                case_sensitive,
            } => Matcher::Specific {
                // Empty values impose no constraint.
                constraints: fields
                    .iter()
                    .filter(|(_, value)| !value.is_empty())
                    .map(|(key, value)| {
                        (
                            Column::from_key(key),
                            fold(value, *case_sensitive).into_owned(),
                        )
                    })
                    .collect(),
                case_sensitive: *case_sensitive,
            },
        }
    }

    fn matches(&self, record: &FirmRecord) -> bool {
        match self {
            Matcher::General {
                needle,
                case_sensitive,
            } => record
                .values()
                .any(|(_, value)| fold(value, *case_sensitive).contains(needle.as_str())),
            Matcher::Specific {
                constraints,
                case_sensitive,
            } => constraints.iter().all(|(column, needle)| match column {
                Some(column) => fold(record.get(*column), *case_sensitive).contains(needle.as_str()),
                None => false,
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Whether a single record satisfies `query`.
pub fn matches(record: &FirmRecord, query: &Query) -> bool {
    Matcher::new(query).matches(record)
}

/// Return indices of records that satisfy `query`, ascending.
///
/// Linear scan, O(rows × columns); there is no index.
pub fn filtered_indices(dataset: &FirmDataset, query: &Query) -> Vec<usize> {
    let matcher = Matcher::new(query);
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, record)| matcher.matches(record))
        .map(|(i, _)| i)
        .collect()
}

/// Return the matching records as a new dataset, in original order.
/// Duplicates in the input stay duplicated; `dataset` is left untouched.
pub fn filter(dataset: &FirmDataset, query: &Query) -> FirmDataset {
    let matcher = Matcher::new(query);
    FirmDataset::new(
        dataset
            .records
            .iter()
            .filter(|record| matcher.matches(record))
            .cloned()
            .collect(),
    )
}
