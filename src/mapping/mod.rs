pub mod elements;
pub mod generator;
pub mod links;
pub mod processing;
