pub use enums::*;
pub use result::*;

pub use crate::consts::*;

mod enums;
mod result;
