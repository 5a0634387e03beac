pub mod input;

pub use input::read_hook_input;
