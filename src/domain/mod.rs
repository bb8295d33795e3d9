mod money;
mod obligation;

pub use money::*;
pub use obligation::*;
