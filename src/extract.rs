use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder as _, ImageFormat};

use crate::error::BackdropResult;

/// Zero-padded per-frame file name; lexicographic order equals frame order.
pub fn frame_file_name(index: usize) -> String {
    format!("frame_{index:03}.png")
}

/// Decode every frame of `source` into numbered PNG files under `dir`.
///
/// Frames keep their alpha channel. The returned paths are in temporal
/// order; the decoder running out of frames is the normal stop condition,
/// while a malformed frame is an error.
#[tracing::instrument(skip_all, fields(source = %source.display()))]
pub fn extract_frames(source: &Path, dir: &Path) -> BackdropResult<Vec<PathBuf>> {
    let file = File::open(source)
        .with_context(|| format!("open source gif '{}'", source.display()))?;
    let decoder = GifDecoder::new(BufReader::new(file))
        .with_context(|| format!("decode gif header of '{}'", source.display()))?;

    let mut paths = Vec::new();
    for (index, frame) in decoder.into_frames().enumerate() {
        let frame = frame.with_context(|| format!("decode gif frame {index}"))?;
        let path = dir.join(frame_file_name(index));
        frame
            .into_buffer()
            .save_with_format(&path, ImageFormat::Png)
            .with_context(|| format!("write extracted frame '{}'", path.display()))?;
        paths.push(path);
    }

    tracing::debug!(frames = paths.len(), "extracted source frames");
    Ok(paths)
}
