use std::path::PathBuf;

/// Directory holding the client configuration.
/// Checks MULTIBLAST_CONFIG_DIR, falls back to the platform config dir
pub fn multiblast_config_dir() -> PathBuf {
    if let Ok(path) = std::env::var("MULTIBLAST_CONFIG_DIR") {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("multiblast")
}

/// Path of the config file.
/// MULTIBLAST_CONFIG names the file directly and wins over the directory lookup
pub fn config_path() -> PathBuf {
    match std::env::var("MULTIBLAST_CONFIG") {
        Ok(path) => PathBuf::from(path),
        Err(_) => multiblast_config_dir().join("config.toml"),
    }
}
