pub mod convert;
pub mod io;
pub mod outline;
pub mod parsing;
pub mod snapshot;

// Re-export key types for easier usage
pub use convert::{build_outline, convert};
pub use outline::{Node, NodeId, NodeKind, OutlineTree, serialize::TANA_MARKER};
pub use parsing::CodeBlock;
