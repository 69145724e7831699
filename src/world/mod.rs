mod finder;
mod loader;
mod model;
mod validator;

pub use finder::{SearchPath, find_file};
pub use loader::{
    LoadError, Record, load_data, load_data_from, load_records_from_path, parse_records,
    try_load_data,
};

// Minimal, intentional surface area: re-export only what the binary and tests use.
pub use model::{Location, World};
pub use validator::{ValidationError, validate_world};
