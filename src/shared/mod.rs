pub mod money;
pub mod time;

pub use money::*;
pub use time::*;
