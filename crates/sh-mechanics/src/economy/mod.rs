//! Spendable resources: the Style pool, the MP pool, and power tags.

pub mod pool;
pub mod power;
pub mod style;

pub use pool::ResourcePool;
pub use power::PowerTagSet;
pub use style::{ActionOption, StyleAction};
