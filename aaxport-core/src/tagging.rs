//! ID3 tag writes for cut chapter files.
//!
//! Tagging goes through the `lofty` crate. The trait seam mirrors the one
//! around the chapter cutter so the splitter's tests do not need real MP3
//! frames on disk.

use crate::error::CoreResult;
use lofty::config::WriteOptions;
use lofty::picture::{MimeType, Picture, PictureType};
use lofty::prelude::*;
use lofty::probe::Probe;
use lofty::tag::{ItemKey, Tag, TagType};
use std::path::Path;

/// Everything written into one chapter file's tag, mapped from book-level
/// probe metadata plus the computed chapter context.
#[derive(Debug, Clone)]
pub struct ChapterTagData<'a> {
    /// "{book title} - {chapter title}".
    pub track_title: String,
    /// Cleaned book title.
    pub album: &'a str,
    /// Raw, uncombined author credit; written as both artist and album artist.
    pub artist: &'a str,
    /// 1-based chapter number.
    pub track_number: u32,
    /// Total chapter count.
    pub track_total: u32,
    pub genre: Option<&'a str>,
    pub copyright: Option<&'a str>,
    /// Written as both comment and description, as the container reports one field.
    pub comment: Option<&'a str>,
    /// Recording year, from the container creation timestamp.
    pub year: Option<u32>,
    /// Full container creation timestamp, written as the recording date.
    pub recording_date: Option<&'a str>,
    /// Raw JPEG bytes for the embedded front cover.
    pub cover_jpeg: Option<&'a [u8]>,
}

/// Seam over tag writes and duration read-back.
pub trait TagWriter {
    /// Writes an ID3v2 tag onto the file at `path`.
    fn write_tags(&self, path: &Path, data: &ChapterTagData<'_>) -> CoreResult<()>;

    /// Duration in seconds of the audio file at `path`, read from the file
    /// itself rather than from probe data.
    fn read_duration_secs(&self, path: &Path) -> CoreResult<f64>;
}

/// Production tagger backed by lofty.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftyTagger;

impl TagWriter for LoftyTagger {
    fn write_tags(&self, path: &Path, data: &ChapterTagData<'_>) -> CoreResult<()> {
        let mut tag = Tag::new(TagType::Id3v2);

        tag.set_title(data.track_title.clone());
        tag.set_album(data.album.to_string());
        tag.set_artist(data.artist.to_string());
        tag.insert_text(ItemKey::AlbumArtist, data.artist.to_string());
        tag.set_track(data.track_number);
        tag.set_track_total(data.track_total);

        if let Some(genre) = data.genre {
            tag.set_genre(genre.to_string());
        }
        if let Some(copyright) = data.copyright {
            tag.insert_text(ItemKey::CopyrightMessage, copyright.to_string());
        }
        if let Some(comment) = data.comment {
            tag.set_comment(comment.to_string());
            tag.insert_text(ItemKey::Description, comment.to_string());
        }
        if let Some(year) = data.year {
            tag.set_year(year);
        }
        if let Some(date) = data.recording_date {
            tag.insert_text(ItemKey::RecordingDate, date.to_string());
        }
        if let Some(bytes) = data.cover_jpeg {
            let picture = Picture::new_unchecked(
                PictureType::CoverFront,
                Some(MimeType::Jpeg),
                None,
                bytes.to_vec(),
            );
            tag.push_picture(picture);
        }

        tag.save_to_path(path, WriteOptions::default())?;
        log::debug!("Tagged {}", path.display());
        Ok(())
    }

    fn read_duration_secs(&self, path: &Path) -> CoreResult<f64> {
        let tagged = Probe::open(path)?.read()?;
        Ok(tagged.properties().duration().as_secs_f64())
    }
}
