pub mod product;
pub mod status;

pub use product::*;
pub use status::*;
