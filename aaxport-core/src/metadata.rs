//! Metadata normalization for filesystem-safe titles and author names.
//!
//! These functions are pure and deterministic, and they are applied
//! consistently everywhere a title or author ends up in a filesystem path.

/// Characters never allowed in a path component, replaced with '_'.
const INVALID_PATH_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Normalizes a book title for display and filenames.
///
/// Strips the "(Unabridged)" marker, turns colons into " -", drops
/// apostrophes and question marks, and trims surrounding whitespace.
/// Idempotent: applying it twice gives the same result.
pub fn clean_title(title: &str) -> String {
    title
        .replace("(Unabridged)", "")
        .replace(": ", " -")
        .replace(':', " -")
        .replace(['\'', '?'], "")
        .trim()
        .to_string()
}

/// Normalizes an author credit for use as a directory name.
///
/// Empty or missing credits become "Unknown". Credits with more than
/// `collapse_threshold` comma-separated names collapse to "Various"
/// (multi-author anthologies). Otherwise "Jr." loses its dot and the
/// result is trimmed.
pub fn clean_author(name: &str, collapse_threshold: usize) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return "Unknown".to_string();
    }

    if trimmed.split(',').count() > collapse_threshold {
        return "Various".to_string();
    }

    trimmed.replace("Jr.", "Jr").trim().to_string()
}

/// Replaces every invalid path character in a single path component with '_'.
///
/// Control characters are invalid on all supported platforms and are
/// replaced as well.
pub fn sanitize_path_component(component: &str) -> String {
    component
        .chars()
        .map(|c| {
            if INVALID_PATH_CHARS.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Zero-pad width for chapter numbers, keyed off the total chapter count.
///
/// Width 1 for counts up to 10, 2 up to 100, 3 beyond, so filenames sort
/// lexicographically in chapter order.
pub fn chapter_pad_width(chapter_count: usize) -> usize {
    if chapter_count > 100 {
        3
    } else if chapter_count > 10 {
        2
    } else {
        1
    }
}

/// Formats a zero-based chapter index as a 1-based, zero-padded number.
pub fn format_chapter_number(index: usize, chapter_count: usize) -> String {
    format!(
        "{:0width$}",
        index + 1,
        width = chapter_pad_width(chapter_count)
    )
}
