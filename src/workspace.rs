use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Context as _;

use crate::error::BackdropResult;

static WORKSPACE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Uniquely named temporary directory tree holding per-frame files.
///
/// Extracted frames land in the root, composited frames in the `processed`
/// subdirectory. Dropping the guard removes the whole tree, so no frame files
/// outlive the run on any exit path.
pub struct ScratchWorkspace {
    root: PathBuf,
    composited: PathBuf,
}

impl ScratchWorkspace {
    pub fn create() -> BackdropResult<Self> {
        let root = std::env::temp_dir().join(format!(
            "gifbackdrop_{}_{}_{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos())
                .unwrap_or(0),
            WORKSPACE_SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        let composited = root.join("processed");
        std::fs::create_dir_all(&composited)
            .with_context(|| format!("create scratch workspace '{}'", root.display()))?;
        Ok(Self { root, composited })
    }

    /// Directory the extractor writes numbered source frames into.
    pub fn frames_dir(&self) -> &Path {
        &self.root
    }

    /// Directory the compositor writes canvas-sized frames into.
    pub fn composited_dir(&self) -> &Path {
        &self.composited
    }
}

impl Drop for ScratchWorkspace {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_makes_both_directories() {
        let ws = ScratchWorkspace::create().unwrap();
        assert!(ws.frames_dir().is_dir());
        assert!(ws.composited_dir().is_dir());
        assert_eq!(ws.composited_dir(), ws.frames_dir().join("processed"));
    }

    #[test]
    fn drop_removes_the_tree_including_contents() {
        let ws = ScratchWorkspace::create().unwrap();
        let root = ws.frames_dir().to_path_buf();
        std::fs::write(root.join("frame_000.png"), b"x").unwrap();
        std::fs::write(ws.composited_dir().join("frame_000.png"), b"y").unwrap();
        drop(ws);
        assert!(!root.exists());
    }

    #[test]
    fn workspaces_do_not_collide() {
        let a = ScratchWorkspace::create().unwrap();
        let b = ScratchWorkspace::create().unwrap();
        assert_ne!(a.frames_dir(), b.frames_dir());
    }
}
