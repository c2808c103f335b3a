//! ffmpeg transcoder adapter.
//!
//! Three invocation shapes, all blocking: a whole-book MP3 render into the
//! working directory, a lossless cover-image extraction, and a time-bounded
//! chapter cut. Chapter cuts always read from the original source file, not
//! the intermediate render. `-y` is passed everywhere so re-runs never stall
//! on an overwrite prompt.

use crate::config::CoreConfig;
use crate::error::CoreResult;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Seam over the chapter-cut invocation so the splitter can be exercised
/// without a real ffmpeg binary.
pub trait ChapterCutter {
    /// Cuts `[start, end]` (decimal-second strings, as ffprobe reports them)
    /// out of `source` into an MP3 at `output`.
    fn cut(&self, source: &Path, start: &str, end: &str, output: &Path) -> CoreResult<()>;
}

/// Production transcoder backed by the `ffmpeg` binary.
pub struct FfmpegTranscoder<'a> {
    config: &'a CoreConfig,
}

impl<'a> FfmpegTranscoder<'a> {
    pub fn new(config: &'a CoreConfig) -> Self {
        Self { config }
    }

    /// Renders the whole book to `<working>/<stem>.mp3` at the configured
    /// bitrate, unlocking the container with the activation bytes.
    pub fn render_whole_book(&self, source: &Path) -> CoreResult<PathBuf> {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "book".to_string());
        let output = self.config.working_dir.join(format!("{stem}.mp3"));

        let mut cmd = Command::new("ffmpeg");
        cmd.arg("-y")
            .arg("-activation_bytes")
            .arg(&self.config.activation_bytes)
            .arg("-i")
            .arg(source)
            .arg("-vn")
            .arg("-codec:a")
            .arg("mp3")
            .arg("-ab")
            .arg(format!("{}k", self.config.bitrate_kbps))
            .arg(&output);

        super::run_tool("ffmpeg", &mut cmd)?;
        Ok(output)
    }

    /// Copies the embedded cover stream losslessly to `<working>/Cover.jpg`.
    pub fn extract_cover(&self, source: &Path) -> CoreResult<PathBuf> {
        let output = self.config.working_dir.join("Cover.jpg");

        let mut cmd = Command::new("ffmpeg");
        cmd.arg("-y")
            .arg("-activation_bytes")
            .arg(&self.config.activation_bytes)
            .arg("-i")
            .arg(source)
            .arg("-an")
            .arg("-codec:v")
            .arg("copy")
            .arg(&output);

        super::run_tool("ffmpeg", &mut cmd)?;
        Ok(output)
    }
}

impl ChapterCutter for FfmpegTranscoder<'_> {
    fn cut(&self, source: &Path, start: &str, end: &str, output: &Path) -> CoreResult<()> {
        let mut cmd = Command::new("ffmpeg");
        cmd.arg("-y")
            .arg("-activation_bytes")
            .arg(&self.config.activation_bytes)
            .arg("-i")
            .arg(source)
            .arg("-ss")
            .arg(start)
            .arg("-to")
            .arg(end)
            .arg("-acodec")
            .arg("mp3")
            .arg(output);

        super::run_tool("ffmpeg", &mut cmd)?;
        Ok(())
    }
}
