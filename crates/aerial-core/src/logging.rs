use env_logger::Target;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Log to `log_file` when given. `RUST_LOG` overrides the Info default.
///
/// If the file cannot be opened (permissions, readonly FS, etc.), fall back
/// to stderr.
pub fn init_with(log_file: Option<PathBuf>) {
    let target = log_file
        .as_deref()
        .and_then(|path| open_log_file(path).ok())
        .unwrap_or(Target::Stderr);

    let _ = env_logger::Builder::new()
        .target(target)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init();
}

fn open_log_file(path: &Path) -> io::Result<Target> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    Ok(Target::Pipe(Box::new(file)))
}
