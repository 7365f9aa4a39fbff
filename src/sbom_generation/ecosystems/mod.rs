pub mod cargo;
pub mod golang;
