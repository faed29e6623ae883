use std::path::{Path, PathBuf};
use std::time::Instant;

use log::debug;

use crate::data::filter::filter;
use crate::data::loader::load_file;
use crate::data::model::FirmRecord;
use crate::error::Result;
use crate::request::SearchRequest;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Shared state of the lookup service, independent of transport.
///
/// Holds only the location of the code list. The file is re-read and
/// re-parsed for every search, so edits to it are picked up immediately and
/// there is no cache to invalidate.
#[derive(Debug, Clone)]
pub struct AppState {
    data_path: PathBuf,
}

impl AppState {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Run one search: decode the request, load the code list, filter it.
    ///
    /// Either the full set of matches is returned or an error; never a
    /// partial result.
    pub fn search(&self, body: &[u8]) -> Result<Vec<FirmRecord>> {
        let started = Instant::now();
        let query = SearchRequest::from_slice(body)?.into_query()?;
        let dataset = load_file(&self.data_path)?;
        let matches = filter(&dataset, &query);
        debug!(
            "{:?}: {} of {} records matched in {:?}",
            query,
            matches.len(),
            dataset.len(),
            started.elapsed()
        );
        Ok(matches.into_records())
    }
}
