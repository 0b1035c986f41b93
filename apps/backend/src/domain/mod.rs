//! Color domain: canonical hex codes and mixing.

pub mod hex;
pub mod mix;

pub use hex::HexColor;
pub use mix::mix;
