//! Infrastructure layer - seed files and other process edges.

mod seed;

pub use seed::{load_seed, parse_seed};
