use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod codec;
mod config;
mod diff;
mod error;
mod playlist;
mod sync;

use config::Settings;
use diff::AlignOp;
use playlist::Playlist;
use sync::SyncContext;

#[derive(Parser, Debug)]
#[command(version, about = "Keep cmus and m3u8 playlist directories in sync", long_about = None)]
struct Args {
    /// Log filter (e.g. "info" or "plsync=debug")
    #[arg(long, default_value = "info", global = true, env = "PLSYNC_LOG")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Cmus,
    M3u8,
    Cache,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a playlist file and print its tracks
    Parse {
        #[arg(long)]
        format: Format,
        #[arg(long)]
        file: PathBuf,
        /// Path prefix to strip (required for the cmus format)
        #[arg(long)]
        prefix: Option<String>,
    },
    /// Align two playlists and print the edit script
    Diff {
        #[arg(long)]
        format_left: Format,
        #[arg(long)]
        file_left: PathBuf,
        #[arg(long)]
        prefix_left: Option<String>,
        #[arg(long)]
        format_right: Format,
        #[arg(long)]
        file_right: PathBuf,
        #[arg(long)]
        prefix_right: Option<String>,
    },
    /// Re-encode a playlist into another format
    Convert {
        #[arg(long)]
        format_from: Format,
        #[arg(long)]
        file_from: PathBuf,
        #[arg(long)]
        prefix_from: Option<String>,
        #[arg(long)]
        format_to: Format,
        #[arg(long)]
        file_to: PathBuf,
        #[arg(long)]
        prefix_to: Option<String>,
    },
    /// Synchronize the cmus, m3u8 and cache directories
    SyncDirs {
        /// Directory of cmus playlists (falls back to stores.cmus_dir)
        #[arg(long, env = "PLSYNC_CMUS_DIR")]
        cmus_dir: Option<PathBuf>,
        /// Directory of m3u8 playlists (falls back to stores.m3u8_dir)
        #[arg(long, env = "PLSYNC_M3U8_DIR")]
        m3u8_dir: Option<PathBuf>,
        /// Directory of cache snapshots (falls back to stores.cache_dir)
        #[arg(long, env = "PLSYNC_CACHE_DIR")]
        cache_dir: Option<PathBuf>,
        /// Prefix of cmus track paths (falls back to stores.cmus_prefix)
        #[arg(long, env = "PLSYNC_CMUS_PREFIX")]
        cmus_prefix: Option<String>,
    },
}

fn read_playlist(
    format: Format,
    file: &Path,
    prefix: Option<&str>,
) -> Result<Playlist, Box<dyn Error>> {
    let text = fs::read_to_string(file)?;
    match format {
        Format::Cmus => {
            let prefix = prefix.ok_or("--prefix is required for the cmus format")?;
            Ok(codec::cmus::decode(prefix, &text))
        }
        Format::M3u8 => Ok(codec::m3u8::decode(&text)?),
        Format::Cache => Ok(codec::cache::decode(&text)?),
    }
}

fn write_playlist(
    playlist: &Playlist,
    format: Format,
    file: &Path,
    prefix: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let text = match format {
        Format::Cmus => {
            let prefix = prefix.ok_or("--prefix is required for the cmus format")?;
            codec::cmus::encode(playlist, prefix)
        }
        Format::M3u8 => codec::m3u8::encode(playlist),
        Format::Cache => codec::cache::encode(playlist)?,
    };
    fs::write(file, text)?;
    Ok(())
}

fn print_tracks(playlist: &Playlist) {
    for track in &playlist.tracks {
        let runtime = track
            .runtime_s
            .map_or_else(|| "-".to_string(), |s| format!("{s}s"));
        println!("{}\t{}\t{}", track.relative_path, track.display_name, runtime);
    }
}

fn print_alignment(left: &Playlist, right: &Playlist) {
    let alignment = diff::align(&left.tracks, &right.tracks);
    println!("edit cost: {}", alignment.cost);
    for op in &alignment.ops {
        match op {
            AlignOp::Match { a, .. } => {
                println!("  = {}", left.tracks[*a].relative_path);
            }
            AlignOp::Substitute { a, b } => {
                println!(
                    "  ~ {} -> {}",
                    left.tracks[*a].relative_path, right.tracks[*b].relative_path
                );
            }
            AlignOp::OnlyInA { a } => {
                println!("  < {}", left.tracks[*a].relative_path);
            }
            AlignOp::OnlyInB { b } => {
                println!("  > {}", right.tracks[*b].relative_path);
            }
        }
    }
}

fn sync_context(
    settings: &Settings,
    cmus_dir: Option<PathBuf>,
    m3u8_dir: Option<PathBuf>,
    cache_dir: Option<PathBuf>,
    cmus_prefix: Option<String>,
) -> Result<SyncContext, Box<dyn Error>> {
    let stores = &settings.stores;
    Ok(SyncContext {
        cmus_dir: cmus_dir
            .or_else(|| stores.cmus_dir.clone())
            .ok_or("missing cmus directory: pass --cmus-dir or set stores.cmus_dir")?,
        m3u8_dir: m3u8_dir
            .or_else(|| stores.m3u8_dir.clone())
            .ok_or("missing m3u8 directory: pass --m3u8-dir or set stores.m3u8_dir")?,
        cache_dir: cache_dir
            .or_else(|| stores.cache_dir.clone())
            .ok_or("missing cache directory: pass --cache-dir or set stores.cache_dir")?,
        cmus_prefix: cmus_prefix
            .or_else(|| stores.cmus_prefix.clone())
            .ok_or("missing cmus prefix: pass --cmus-prefix or set stores.cmus_prefix")?,
        m3u8_ext: stores.m3u8_extension.clone(),
        cache_ext: stores.cache_extension.clone(),
        compare_metadata: settings.sync.compare_metadata,
    })
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log_level)?)
        .init();

    let settings = Settings::load()?;
    settings.validate()?;

    match args.command {
        Commands::Parse {
            format,
            file,
            prefix,
        } => {
            let playlist = read_playlist(format, &file, prefix.as_deref())?;
            print_tracks(&playlist);
        }
        Commands::Diff {
            format_left,
            file_left,
            prefix_left,
            format_right,
            file_right,
            prefix_right,
        } => {
            let left = read_playlist(format_left, &file_left, prefix_left.as_deref())?;
            let right = read_playlist(format_right, &file_right, prefix_right.as_deref())?;
            print_alignment(&left, &right);
        }
        Commands::Convert {
            format_from,
            file_from,
            prefix_from,
            format_to,
            file_to,
            prefix_to,
        } => {
            let playlist = read_playlist(format_from, &file_from, prefix_from.as_deref())?;
            write_playlist(&playlist, format_to, &file_to, prefix_to.as_deref())?;
        }
        Commands::SyncDirs {
            cmus_dir,
            m3u8_dir,
            cache_dir,
            cmus_prefix,
        } => {
            let ctx = sync_context(&settings, cmus_dir, m3u8_dir, cache_dir, cmus_prefix)?;
            info!(
                cmus = %ctx.cmus_dir.display(),
                m3u8 = %ctx.m3u8_dir.display(),
                cache = %ctx.cache_dir.display(),
                "synchronizing playlist directories"
            );

            let report = sync::run(&ctx)?;
            if report.failed() > 0 {
                error!(
                    failed = report.failed(),
                    total = report.outcomes.len(),
                    "synchronization finished with failures"
                );
                return Ok(ExitCode::FAILURE);
            }
            info!(total = report.outcomes.len(), "synchronization complete");
        }
    }

    Ok(ExitCode::SUCCESS)
}
