pub mod controller;
pub mod message;
