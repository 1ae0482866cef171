pub mod character;
pub mod physics;
