//! Record loader: stream of lines in, collection of typed values out.

use crate::domain::error::SimfeedError;
use crate::domain::record::RecordCollection;
use crate::domain::tokenizer;
use crate::domain::value::DataValue;
use std::io::BufRead;

/// Read a line-oriented stream to exhaustion and return every field as a
/// [`DataValue::Text`] in encounter order. Blank lines are skipped without
/// tokenizing. Raw tokens are not promoted to numeric or temporal values;
/// that is the consumer's call to make.
///
/// An I/O failure mid-stream aborts the load: the error is returned and any
/// values accumulated before the failure are discarded.
pub fn load_from_reader<R: BufRead>(reader: R) -> Result<RecordCollection, SimfeedError> {
    let mut records = RecordCollection::new();

    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        for token in tokenizer::split_line(&line) {
            records.push(DataValue::from(token));
        }
    }

    Ok(records)
}
