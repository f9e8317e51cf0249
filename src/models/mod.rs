//! 数据模型层

pub mod file_tree;

pub use file_tree::{FileNodeSnapshot, FileTree, FileTreeError, FileTreeRow, Node, NodeId, NodeKind};
