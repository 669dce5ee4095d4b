//! Display adapters that render blocks, words and text the way the demo
//! session prints them.

mod block;
mod summary;
mod text;
mod word;

pub use block::{BlockHex, BlockWords};
pub use summary::PaddingSummary;
pub use text::TextPreview;
pub use word::HexWord;
