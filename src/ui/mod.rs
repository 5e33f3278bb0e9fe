pub mod colors;
pub mod markdown;

pub use colors::*;
pub use markdown::*;
