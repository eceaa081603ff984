/// Expression parsing: precedence climbing over `+ -`, `* /`, and factors,
/// plus the comparison rule used in condition position.
pub mod core;
/// Statement parsing: the program rule, statement dispatch, and the
/// compound statements (`if`, `for`, `while`, `print`, assignment).
pub mod statement;
/// Shared parsing helpers: token expectation and comma-separated lists.
pub mod utils;
