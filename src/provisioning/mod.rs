pub mod catalog;
pub mod fields;
pub mod options;
pub mod workflow;
