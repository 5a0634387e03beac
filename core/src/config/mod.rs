pub mod load;
pub mod types;

pub use load::{load_default, load_from_path, load_with_env, CONFIG_ENV, POLICY_ENV};
pub use types::*;
