mod color;
mod date;
mod draft;

pub use color::*;
pub use date::*;
pub use draft::*;
