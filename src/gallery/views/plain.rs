//! Plain-text and JSON output of a projection for `--print` mode

use crate::gallery::views::projection::GalleryProjection;
use anyhow::Result;
use std::io::Write;

/// Write the projection line by line without any styling
pub fn write_plain<W: Write>(projection: &GalleryProjection, out: &mut W) -> Result<()> {
    for line in projection.lines() {
        writeln!(out, "{}", line.text)?;
    }
    out.flush()?;
    Ok(())
}

/// Write the projected entries as a JSON array
pub fn write_json<W: Write>(projection: &GalleryProjection, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, projection.entries())?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
