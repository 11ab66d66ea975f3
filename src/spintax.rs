//! Main module for spintax library functionality

pub mod analysis;
pub mod error;
pub mod parser;
pub mod similarity;
pub mod spin;
pub mod testing;
pub mod tree;
