pub mod factory;
pub mod policy;
pub mod result;
