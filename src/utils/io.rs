// src/utils/io.rs
use std::path::PathBuf;

/// Get the application data directory (not created here)
pub fn get_app_data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "rustpassgen", "rust_passgen")
        .map(|proj_dirs| proj_dirs.data_dir().to_path_buf())
}
