pub mod mint;
pub mod supply;

pub use mint::*;
pub use supply::*;
