mod fare;
mod table;

pub use fare::*;
pub use table::*;
