use std::path::PathBuf;

const TITLE_PICK_GIF: &str = "GIF 파일을 선택하세요";
const TITLE_PICK_DEST: &str = "저장할 폴더를 선택하세요";

/// Native picker capability.
///
/// The interactive binary uses [`NativePicker`]; tests substitute a canned
/// implementation so the pipeline runs headless. `None` means the user
/// cancelled the dialog, which ends the run.
pub trait FilePicker {
    /// Open-file dialog restricted to `*.gif`.
    fn choose_gif(&self) -> Option<PathBuf>;

    /// Folder dialog for the output directory.
    fn choose_dest_dir(&self) -> Option<PathBuf>;
}

/// OS file dialogs via `rfd`.
pub struct NativePicker;

impl FilePicker for NativePicker {
    fn choose_gif(&self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title(TITLE_PICK_GIF)
            .add_filter("GIF", &["gif"])
            .pick_file()
    }

    fn choose_dest_dir(&self) -> Option<PathBuf> {
        rfd::FileDialog::new().set_title(TITLE_PICK_DEST).pick_folder()
    }
}
