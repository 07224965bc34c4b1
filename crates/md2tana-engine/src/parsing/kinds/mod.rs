pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_item;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::{BoldHeading, HashHeading};
pub use list_item::{ListItem, Marker};
