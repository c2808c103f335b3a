use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Aaxport - Convert Audible AAX audiobooks into chaptered, tagged MP3 files",
    long_about = "Batch-converts AAX audiobooks: probes each file with ffprobe, renders \
                  it to MP3 with ffmpeg, splits it into per-chapter tracks with embedded \
                  ID3 tags and cover art, writes an extended-M3U playlist, and archives \
                  the processed source."
)]
pub struct Cli {
    /// Audible activation bytes used to decrypt the AAX container
    #[arg(
        short = 'a',
        long,
        env = "AAX_ACTIVATION_BYTES",
        value_name = "HEX",
        help = "Activation bytes for the AAX container (hex string)"
    )]
    pub activation_bytes: String,

    /// Target MP3 bitrate in kbps for the whole-book render
    #[arg(short, long, default_value_t = aaxport_core::DEFAULT_BITRATE_KBPS, value_name = "KBPS")]
    pub bitrate: u32,

    /// Suppress progress output (errors are still printed)
    #[arg(short, long)]
    pub quiet: bool,

    /// Directory scanned for *.aax files (top level only)
    #[arg(long, value_name = "DIR")]
    pub input_dir: PathBuf,

    /// Directory receiving the {author}/{title} output tree
    #[arg(long, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Directory where processed source files are moved
    #[arg(long, value_name = "DIR")]
    pub storage_dir: PathBuf,

    /// Scratch directory for intermediate files, purged at run start
    #[arg(long, value_name = "DIR")]
    pub working_dir: PathBuf,

    /// Collapse author credits with more than this many names to "Various"
    #[arg(long, default_value_t = aaxport_core::DEFAULT_AUTHOR_COLLAPSE_THRESHOLD, value_name = "COUNT")]
    pub author_collapse_threshold: usize,
}
