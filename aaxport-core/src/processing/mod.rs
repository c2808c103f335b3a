//! The sequential conversion pipeline.
//!
//! Files are processed one at a time; chapters within a file are processed
//! one at a time. Each file runs inside an error boundary: a failure is
//! logged and recorded, and the batch continues with the next file instead
//! of aborting the run.

use crate::config::CoreConfig;
use crate::error::CoreResult;
use crate::external::ffmpeg::{ChapterCutter, FfmpegTranscoder};
use crate::external::ffprobe::{probe_source, AaxInfo};
use crate::metadata::{clean_author, clean_title, format_chapter_number, sanitize_path_component};
use crate::playlist::PlaylistWriter;
use crate::progress::ProgressReporter;
use crate::tagging::{ChapterTagData, LoftyTagger, TagWriter};
use crate::utils::{format_duration, get_filename_safe, purge_directory};
use std::path::{Path, PathBuf};

/// Outcome of one successfully converted book.
#[derive(Debug, Clone)]
pub struct BookResult {
    pub source: PathBuf,
    pub title: String,
    pub author: String,
    pub chapter_count: usize,
    pub output_dir: PathBuf,
}

/// One file that failed, with the error that stopped it.
#[derive(Debug)]
pub struct FailedFile {
    pub source: PathBuf,
    pub error: crate::error::CoreError,
}

/// Summary of a whole batch.
#[derive(Debug, Default)]
pub struct ConversionReport {
    pub succeeded: Vec<BookResult>,
    pub failed: Vec<FailedFile>,
}

impl ConversionReport {
    /// True when at least one file was attempted and none survived.
    pub fn all_failed(&self) -> bool {
        self.succeeded.is_empty() && !self.failed.is_empty()
    }
}

/// Validates the configured directories and purges stale files from the
/// working directory. Must run before discovery; any error here is fatal to
/// the whole run.
pub fn prepare_run(config: &CoreConfig) -> CoreResult<()> {
    config.validate()?;
    let removed = purge_directory(&config.working_dir)?;
    if removed > 0 {
        log::info!(
            "Purged {} stale file(s) from {}",
            removed,
            config.working_dir.display()
        );
    }
    Ok(())
}

/// Converts a batch of AAX files sequentially.
///
/// Per-file failures are recorded in the report rather than propagated, so
/// one bad file cannot take down the batch.
pub fn process_files(
    config: &CoreConfig,
    files: &[PathBuf],
    reporter: &dyn ProgressReporter,
) -> ConversionReport {
    let mut report = ConversionReport::default();

    for (index, source) in files.iter().enumerate() {
        let filename = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| source.display().to_string());
        reporter.file_started(index, files.len(), &filename);

        match process_file(config, source, reporter) {
            Ok(result) => {
                log::info!(
                    "Finished {} ({} chapters) -> {}",
                    result.title,
                    result.chapter_count,
                    result.output_dir.display()
                );
                report.succeeded.push(result);
            }
            Err(error) => {
                log::error!("Skipping {}: {}", source.display(), error);
                report.failed.push(FailedFile {
                    source: source.clone(),
                    error,
                });
            }
        }
    }

    report
}

/// Runs the full pipeline for one source file: probe, whole-book render,
/// cover extraction, chapter splitting, archiving.
pub fn process_file(
    config: &CoreConfig,
    source: &Path,
    reporter: &dyn ProgressReporter,
) -> CoreResult<BookResult> {
    reporter.stage_started("Probing");
    let info = probe_source(config, source)?;
    reporter.stage_finished("Probing done");

    let title = clean_title(info.title());
    let author = clean_author(info.artist(), config.author_collapse_threshold);
    log::info!("Title: {title}");
    log::info!("Author(s): {}", info.artist());
    log::info!(
        "Length: {}",
        info.format
            .duration_secs()
            .map(format_duration)
            .unwrap_or_else(|| "??:??:??".to_string())
    );
    log::info!("Chapters: {}", info.chapters.len());

    let transcoder = FfmpegTranscoder::new(config);

    reporter.stage_started("Recoding to mp3");
    let intermediate = transcoder.render_whole_book(source)?;
    reporter.stage_finished("Recoding done");

    reporter.stage_started("Writing cover file");
    let cover = transcoder.extract_cover(source)?;
    reporter.stage_finished("Cover written");

    let output_dir = split_chapters(
        config,
        source,
        &info,
        &cover,
        &transcoder,
        &LoftyTagger,
        reporter,
    )?;

    archive_book(config, source, &cover, &intermediate, &output_dir)?;

    Ok(BookResult {
        source: source.to_path_buf(),
        title,
        author,
        chapter_count: info.chapters.len(),
        output_dir,
    })
}

/// Cuts, tags, and playlists every chapter of one book.
///
/// The output directory `{output}/{author}/{title}` is purged of direct
/// child files before any chapter is written, so a retry never mixes runs.
/// The playlist grows one flushed entry per chapter and is closed after the
/// last one. Returns the output directory.
pub fn split_chapters(
    config: &CoreConfig,
    source: &Path,
    info: &AaxInfo,
    cover_path: &Path,
    cutter: &dyn ChapterCutter,
    tagger: &dyn TagWriter,
    reporter: &dyn ProgressReporter,
) -> CoreResult<PathBuf> {
    let title = clean_title(info.title());
    let author = clean_author(info.artist(), config.author_collapse_threshold);

    let output_dir = config
        .output_dir
        .join(sanitize_path_component(&author))
        .join(sanitize_path_component(&title));

    purge_directory(&output_dir)?;
    std::fs::create_dir_all(&output_dir)?;

    let cover_bytes = std::fs::read(cover_path)?;
    let chapter_count = info.chapters.len();
    log::info!("Processing {title} with {chapter_count} chapters");

    let mut playlist = PlaylistWriter::create(&output_dir.join(format!("{title}.m3u")))?;

    // Chapter ids mirror positions in the validated sequence; the position
    // drives numbering so an unchecked id can never wrap the track number.
    for (index, chapter) in info.chapters.iter().enumerate() {
        let number = format_chapter_number(index, chapter_count);
        let chapter_title = chapter.display_title();
        reporter.chapter_started(index + 1, chapter_count, &chapter_title);

        let filename = format!(
            "{}.mp3",
            sanitize_path_component(&format!("{title}-{number}-{chapter_title}"))
        );
        let chapter_path = output_dir.join(&filename);

        cutter.cut(source, &chapter.start_time, &chapter.end_time, &chapter_path)?;

        let tags = ChapterTagData {
            track_title: format!("{title} - {chapter_title}"),
            album: &title,
            artist: info.artist(),
            track_number: index as u32 + 1,
            track_total: chapter_count as u32,
            genre: info.format.tags.genre.as_deref(),
            copyright: info.format.tags.copyright.as_deref(),
            comment: info.format.tags.comment.as_deref(),
            year: info.format.tags.creation_year(),
            recording_date: info.format.tags.creation_time.as_deref(),
            cover_jpeg: Some(&cover_bytes),
        };
        tagger.write_tags(&chapter_path, &tags)?;

        // Duration comes from the cut file itself, not the probe data.
        let duration = tagger.read_duration_secs(&chapter_path)?;
        playlist.push_entry(
            duration,
            &format!("{} - {}", info.title(), chapter_title),
            &filename,
        )?;
    }

    playlist.finish()?;
    Ok(output_dir)
}

/// Moves the cover and the source into their final homes and removes the
/// intermediate render.
///
/// Moves are same-volume renames. There is no rollback: a failure here
/// leaves the completed output directory in place and surfaces as a
/// per-file error.
pub fn archive_book(
    config: &CoreConfig,
    source: &Path,
    cover: &Path,
    intermediate: &Path,
    output_dir: &Path,
) -> CoreResult<()> {
    log::info!("Moving cover file");
    std::fs::rename(cover, output_dir.join("Cover.jpg"))?;

    log::info!("Moving source file to storage");
    let storage_dest = config.storage_dir.join(get_filename_safe(source)?);
    std::fs::rename(source, storage_dest)?;

    log::info!("Cleaning up intermediate files");
    std::fs::remove_file(intermediate)?;

    Ok(())
}
