pub mod collector;
pub mod snapshot;
pub mod sources;
