pub mod catalog;
pub mod categorizer;
pub mod command;
pub mod interpreter;
pub mod store;
