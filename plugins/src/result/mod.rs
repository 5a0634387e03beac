pub mod freshness;

pub use freshness::FreshnessResultPlugin;
