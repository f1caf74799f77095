use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};

use crate::error::{BackdropError, BackdropResult};

/// Palette quantization speed for the GIF encoder (1 = best, 30 = fastest).
const QUANTIZE_SPEED: i32 = 10;

/// Result of an encode attempt over a directory of composited frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodeOutcome {
    /// The animation was written with this many frames.
    Written { frames: usize },
    /// No qualifying frame files were found; nothing was written.
    NoFrames,
}

/// Encode every `*.png` in `frames_dir` (sorted by name) into a looping GIF.
///
/// All frames get the same `interval_ms` delay and the animation repeats
/// forever. An existing file at `out_path` is replaced. An empty directory
/// is reported as [`EncodeOutcome::NoFrames`] without touching `out_path`.
#[tracing::instrument(skip_all, fields(out = %out_path.display()))]
pub fn encode_animation(
    frames_dir: &Path,
    out_path: &Path,
    interval_ms: u32,
) -> BackdropResult<EncodeOutcome> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(frames_dir)
        .with_context(|| format!("list composited frames in '{}'", frames_dir.display()))?
        .collect::<Result<Vec<_>, _>>()
        .context("read composited frame directory entry")?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
        })
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Ok(EncodeOutcome::NoFrames);
    }

    let out = File::create(out_path)
        .with_context(|| format!("create output animation '{}'", out_path.display()))?;
    let mut encoder = GifEncoder::new_with_speed(out, QUANTIZE_SPEED);
    encoder
        .set_repeat(Repeat::Infinite)
        .map_err(|e| BackdropError::encode(format!("set infinite repeat: {e}")))?;

    let delay = Delay::from_numer_denom_ms(interval_ms, 1);
    for path in &paths {
        let rgba = image::open(path)
            .with_context(|| format!("open composited frame '{}'", path.display()))?
            .to_rgba8();
        encoder
            .encode_frame(Frame::from_parts(rgba, 0, 0, delay))
            .map_err(|e| {
                BackdropError::encode(format!("encode frame '{}': {e}", path.display()))
            })?;
    }

    Ok(EncodeOutcome::Written { frames: paths.len() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "gifbackdrop_{name}_{}_{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ))
    }

    #[test]
    fn empty_directory_reports_no_frames_and_writes_nothing() {
        let dir = temp_dir("encode_empty");
        std::fs::create_dir_all(&dir).unwrap();
        let out = dir.join("out.gif");

        let outcome = encode_animation(&dir, &out, 100).unwrap();
        assert_eq!(outcome, EncodeOutcome::NoFrames);
        assert!(!out.exists());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn non_png_entries_are_ignored() {
        let dir = temp_dir("encode_filter");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("notes.txt"), b"not a frame").unwrap();

        let out = dir.join("out.gif");
        let outcome = encode_animation(&dir, &out, 100).unwrap();
        assert_eq!(outcome, EncodeOutcome::NoFrames);
        assert!(!out.exists());

        std::fs::remove_dir_all(&dir).ok();
    }
}
