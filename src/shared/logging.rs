use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn chain_log_path(state_root: &Path) -> PathBuf {
    state_root.join("logs/chain-debug.log")
}

/// Truncates the debug log so each triggering event's diagnostics are
/// self-contained. Best-effort, like every diagnostic write in this crate.
pub fn reset_chain_log(state_root: &Path) {
    let path = chain_log_path(state_root);
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let _ = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path);
}

pub fn append_chain_log_line(state_root: &Path, line: &str) {
    let path = chain_log_path(state_root);
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let _ = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .and_then(|mut file| writeln!(file, "{line}"));
}
