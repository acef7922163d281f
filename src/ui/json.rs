//! NDJSON helpers for output the event sink does not cover
//! (command results and errors).

use std::io::{self, Write};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Write a raw JSON value to stdout, tagged with the command and a timestamp.
pub fn emit(command: &str, mut event: serde_json::Value) -> io::Result<()> {
    if let Some(obj) = event.as_object_mut() {
        obj.insert("command".to_string(), command.into());
        obj.insert(
            "timestamp".to_string(),
            chrono::Utc::now().to_rfc3339().into(),
        );
    }
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}
