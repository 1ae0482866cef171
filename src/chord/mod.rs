pub mod classifier;
pub mod recognizer;
pub mod types;
