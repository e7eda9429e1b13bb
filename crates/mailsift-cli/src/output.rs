use std::io::Write;

use mailsift_core::EmailReport;

/// Write the report as the single JSON line of program output.
pub fn write_report(w: &mut dyn Write, report: &EmailReport) -> std::io::Result<()> {
    let line = report.to_json_line().map_err(std::io::Error::other)?;
    writeln!(w, "{}", line)?;
    w.flush()
}
