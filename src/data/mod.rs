mod loader;

pub use loader::{LoadError, load_quiz_from_json, parse_quiz};
