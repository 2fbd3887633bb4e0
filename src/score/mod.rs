pub mod points;
pub mod standings;

pub use points::*;
pub use standings::*;
