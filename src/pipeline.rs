use std::path::PathBuf;

use crate::compose::composite_frame;
use crate::encode::{EncodeOutcome, encode_animation};
use crate::error::BackdropResult;
use crate::extract::{extract_frames, frame_file_name};
use crate::params::RunParameters;
use crate::workspace::ScratchWorkspace;

/// Overall result of one pipeline run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// The animation was written to this path.
    Written(PathBuf),
    /// The source yielded no composited frames; nothing was written.
    NoFrames,
}

/// Extract, composite, and re-encode one source animation.
///
/// The scratch workspace lives exactly as long as this call: every early
/// return drops the guard and removes the per-frame files with it.
#[tracing::instrument(skip(params), fields(source = %params.source.display()))]
pub fn run_pipeline(params: &RunParameters) -> BackdropResult<PipelineOutcome> {
    let workspace = ScratchWorkspace::create()?;

    let frames = extract_frames(&params.source, workspace.frames_dir())?;
    for (index, frame_path) in frames.iter().enumerate() {
        let out_path = workspace.composited_dir().join(frame_file_name(index));
        composite_frame(
            params.canvas,
            params.placement_ratio,
            params.width_ratio,
            frame_path,
            &out_path,
        )?;
    }

    let out_path = params.output_path();
    match encode_animation(workspace.composited_dir(), &out_path, params.interval_ms)? {
        EncodeOutcome::Written { frames } => {
            tracing::debug!(frames, out = %out_path.display(), "encoded output animation");
            Ok(PipelineOutcome::Written(out_path))
        }
        EncodeOutcome::NoFrames => Ok(PipelineOutcome::NoFrames),
    }
}
