pub mod paths;

pub use paths::{config_path, multiblast_config_dir};
