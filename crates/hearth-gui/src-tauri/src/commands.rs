pub mod common;
pub mod salat;
