//! Record source port trait.

use crate::domain::error::SimfeedError;
use crate::domain::record::RecordCollection;

/// Anything that can supply the parsed records for a simulation code.
pub trait RecordSource {
    fn load_records(&self, code: &str) -> Result<RecordCollection, SimfeedError>;

    fn list_codes(&self) -> Result<Vec<String>, SimfeedError>;
}
