pub mod dictionary;
pub mod error;
pub mod facts;
pub mod graph;
pub mod label;
pub mod mapping;
pub mod propagate;
pub mod registry;
pub mod trace;
pub mod types;
