use serde_json::Value;
use std::io;

use super::table::{flatten, render_scalar};

/// Write output as two-column CSV (field,value), flattening nested
/// structures the same way as the table renderer but leaving values raw.
/// Envelope outputs are unwrapped to their result section.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let target = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let _ = wtr.write_record(["field", "value"]);
    for (key, leaf) in flatten(target) {
        let _ = wtr.write_record([key.as_str(), render_scalar(&leaf).as_str()]);
    }

    let _ = wtr.flush();
}
