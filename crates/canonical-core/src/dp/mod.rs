//! Dynamic-programming exercises.
//!
//! Two independent pure functions, both computed with bottom-up tables:
//!
//! - [`lcs`] — longest common subsequence of two strings.
//! - [`min_insertions_palindrome`] — fewest insertions that make a string a
//!   palindrome.

pub mod lcs;
pub mod palindrome;

pub use lcs::{lcs, lcs_len};
pub use palindrome::min_insertions_palindrome;
