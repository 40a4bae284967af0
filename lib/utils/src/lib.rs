pub mod constants;
pub mod errors;
pub mod geometry;
pub mod node_utils;
