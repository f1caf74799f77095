//! Turn an animated GIF into a fixed-size "background" animation.
//!
//! The whole crate is one strictly sequential pipeline:
//!
//! 1. **Collect**: dialogs + console prompts produce a validated [`RunParameters`]
//! 2. **Extract**: the source GIF becomes numbered PNG frames in a scratch workspace
//! 3. **Composite**: each frame is scaled and pasted onto a white canvas
//! 4. **Encode**: the composited frames become one looping GIF with a uniform delay
//!
//! The scratch workspace is an RAII guard; its frame files never outlive a run.
#![forbid(unsafe_code)]

pub mod compose;
pub mod dialog;
pub mod encode;
pub mod error;
pub mod extract;
pub mod params;
pub mod pipeline;
pub mod prompt;
pub mod workspace;

pub use compose::{composite_frame, paste_offsets, scaled_size};
pub use dialog::{FilePicker, NativePicker};
pub use encode::{EncodeOutcome, encode_animation};
pub use error::{BackdropError, BackdropResult};
pub use extract::{extract_frames, frame_file_name};
pub use params::{
    Canvas, InvalidEntry, OUTPUT_FILE_NAME, RunParameters, parse_interval_ms, parse_pixels,
    parse_placement_ratio, parse_width_ratio,
};
pub use pipeline::{PipelineOutcome, run_pipeline};
pub use prompt::{collect_parameters, read_until_valid};
pub use workspace::ScratchWorkspace;
