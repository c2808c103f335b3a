//! Typed ffprobe adapter.
//!
//! Issues three independent ffprobe queries per source file (format,
//! streams, chapters) and deserializes each JSON document into a record
//! type. The payloads are untrusted input: a malformed document surfaces as
//! `CoreError::ProbeParse` rather than a panic, and absent tags degrade to
//! `None` instead of failing the parse.

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use chrono::Datelike;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

/// Container-level tags reported under `format.tags`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormatTags {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub creation_time: Option<String>,
}

impl FormatTags {
    /// Year from the container creation timestamp, when present and parseable.
    pub fn creation_year(&self) -> Option<u32> {
        let raw = self.creation_time.as_deref()?;
        chrono::DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.year() as u32)
    }
}

/// Container-level metadata from `-show_format`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormatInfo {
    /// Total duration in seconds, as ffprobe reports it: a decimal string.
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub tags: FormatTags,
}

impl FormatInfo {
    /// Parsed duration in seconds, if ffprobe reported one.
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration.as_deref().and_then(|d| d.parse().ok())
    }
}

/// Per-chapter tags reported under `chapters[].tags`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChapterTags {
    #[serde(default)]
    pub title: Option<String>,
}

/// One chapter record from `-show_chapters`.
///
/// `id` is zero-based and, per the container contract, matches the record's
/// position in the ordered sequence. User-visible numbering is `id + 1`.
#[derive(Debug, Clone, Deserialize)]
pub struct Chapter {
    pub id: i64,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub tags: ChapterTags,
}

impl Chapter {
    /// Trimmed chapter title, falling back to "Chapter N" when absent.
    pub fn display_title(&self) -> String {
        match self.tags.title.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => format!("Chapter {}", self.id + 1),
        }
    }
}

/// One stream record from `-show_streams`. Parsed for validation only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Stream {
    #[serde(default)]
    pub codec_name: Option<String>,
    #[serde(default)]
    pub codec_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FormatDocument {
    #[serde(default)]
    format: FormatInfo,
}

#[derive(Debug, Default, Deserialize)]
struct StreamsDocument {
    #[serde(default)]
    streams: Vec<Stream>,
}

#[derive(Debug, Default, Deserialize)]
struct ChaptersDocument {
    #[serde(default)]
    chapters: Vec<Chapter>,
}

/// Aggregate probe result for one source file.
///
/// Immutable after construction; lives for one pipeline pass.
#[derive(Debug, Clone)]
pub struct AaxInfo {
    pub format: FormatInfo,
    pub streams: Vec<Stream>,
    pub chapters: Vec<Chapter>,
}

impl AaxInfo {
    /// Raw book title, or "Unknown" when the container carries none.
    pub fn title(&self) -> &str {
        self.format.tags.title.as_deref().unwrap_or("Unknown")
    }

    /// Raw author credit, possibly empty.
    pub fn artist(&self) -> &str {
        self.format.tags.artist.as_deref().unwrap_or("")
    }

    /// First audio stream, if the container reports one.
    pub fn audio_stream(&self) -> Option<&Stream> {
        self.streams
            .iter()
            .find(|s| s.codec_type.as_deref() == Some("audio"))
    }
}

/// Probes a source file with three ffprobe queries and aggregates the result.
///
/// Each query blocks until ffprobe exits. Chapter records are sorted by id
/// and checked for zero-based contiguity; a gap means the probe output does
/// not match the container contract and the file is rejected.
pub fn probe_source(config: &CoreConfig, source: &Path) -> CoreResult<AaxInfo> {
    let format: FormatDocument = query(config, source, "-show_format")?;
    let streams: StreamsDocument = query(config, source, "-show_streams")?;
    let chapters: ChaptersDocument = query(config, source, "-show_chapters")?;

    let info = AaxInfo {
        format: format.format,
        streams: streams.streams,
        chapters: validate_chapters(source, chapters.chapters)?,
    };

    if info.audio_stream().is_none() {
        log::warn!("No audio stream reported for {}", source.display());
    }

    Ok(info)
}

/// Sorts chapters by id and checks zero-based contiguity.
///
/// A gap or duplicate means the probe output does not match the container
/// contract, so the file is rejected with a `ProbeParse` error.
fn validate_chapters(source: &Path, mut chapters: Vec<Chapter>) -> CoreResult<Vec<Chapter>> {
    chapters.sort_by_key(|c| c.id);
    for (index, chapter) in chapters.iter().enumerate() {
        if chapter.id != index as i64 {
            return Err(CoreError::ProbeParse(format!(
                "chapter ids are not contiguous in {}: expected {}, got {}",
                source.display(),
                index,
                chapter.id
            )));
        }
    }
    Ok(chapters)
}

/// Decodes one ffprobe JSON document, mapping failures to `ProbeParse`.
fn decode_document<T: DeserializeOwned>(
    source: &Path,
    selector: &str,
    payload: &[u8],
) -> CoreResult<T> {
    serde_json::from_slice(payload).map_err(|e| {
        CoreError::ProbeParse(format!(
            "ffprobe {selector} output for {}: {e}",
            source.display()
        ))
    })
}

fn query<T: DeserializeOwned>(
    config: &CoreConfig,
    source: &Path,
    selector: &str,
) -> CoreResult<T> {
    let mut cmd = Command::new("ffprobe");
    cmd.arg("-print_format")
        .arg("json")
        .arg("-activation_bytes")
        .arg(&config.activation_bytes)
        .arg(selector)
        .arg(source);

    let stdout = super::run_tool("ffprobe", &mut cmd)?;
    decode_document(source, selector, &stdout)
}
