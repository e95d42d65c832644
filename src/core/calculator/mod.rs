pub mod derive;
pub mod spans;
