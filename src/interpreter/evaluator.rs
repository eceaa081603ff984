/// Binary operators: arithmetic and comparison evaluation over values.
pub mod binary;
/// The built-in function table and its argument checking.
pub mod builtin;
/// The evaluation context and the tree-walking dispatch over AST nodes.
pub mod core;
