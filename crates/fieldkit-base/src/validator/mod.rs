pub mod num;
pub mod text;

pub use num::Quantity;
pub use text::{MaxLen, NonBlank};
