//! Incremental extended-M3U playlist writer.
//!
//! Entries are flushed as they are written, so a crash mid-run leaves a
//! syntactically valid playlist that is merely missing trailing entries.

use crate::error::CoreResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes an extended-M3U playlist one entry at a time.
pub struct PlaylistWriter {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl PlaylistWriter {
    /// Creates the playlist file and writes the `# EXTM3U` header.
    pub fn create(path: &Path) -> CoreResult<Self> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "# EXTM3U")?;
        writer.flush()?;
        Ok(Self {
            writer,
            path: path.to_path_buf(),
        })
    }

    /// Appends one `# EXTINF` directive plus the bare filename.
    ///
    /// `duration_secs` is rounded to whole seconds as the EXTINF convention
    /// expects.
    pub fn push_entry(
        &mut self,
        duration_secs: f64,
        display_title: &str,
        filename: &str,
    ) -> CoreResult<()> {
        writeln!(
            self.writer,
            "# EXTINF:{},{}",
            duration_secs.round() as u64,
            display_title
        )?;
        writeln!(self.writer, "{filename}")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Path of the playlist file being written.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flushes and closes the playlist. Consumes the writer so no entry can
    /// be appended after the close.
    pub fn finish(mut self) -> CoreResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
