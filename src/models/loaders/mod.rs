pub mod toml_loader;

pub use toml_loader::{load_category_file, parse_category_toml};
