// src/export/csv.rs

use crate::errors::AppResult;
use crate::models::AttendanceRecord;
use crate::utils::time::to_iso;
use csv::Writer;
use std::io::Write;

pub(crate) const HEADERS: [&str; 4] = ["member", "status", "signed_in", "signed_out"];

/// Write the merged view as CSV; open sessions get an empty `signed_out`.
pub fn write_csv<W: Write>(out: W, records: &[AttendanceRecord]) -> AppResult<()> {
    let mut wtr = Writer::from_writer(out);

    wtr.write_record(HEADERS)?;

    for r in records {
        let signed_in = to_iso(&r.sign_in);
        let signed_out = r.sign_out.as_ref().map(to_iso).unwrap_or_default();
        wtr.write_record([
            r.name.as_str(),
            r.status.as_str(),
            signed_in.as_str(),
            signed_out.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
