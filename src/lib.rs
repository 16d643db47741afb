//! Load ticket offers from a CSV file, filter them with a predicate over
//! single records, and print the matches as labeled text blocks.

pub mod filter;
pub mod loader;
pub mod model;
pub mod render;
