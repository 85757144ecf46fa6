pub mod deadline;
pub mod errors;
pub mod message;
pub mod rules;
