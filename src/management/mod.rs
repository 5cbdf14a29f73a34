mod token;

pub use token::{TokenManager, is_missing_cache};
