mod file;
mod logging;

pub use file::{create_dir_if_missing, read_json_file, write_json_file};
pub use logging::setup_logging;
