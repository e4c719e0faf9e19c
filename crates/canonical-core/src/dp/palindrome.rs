//! Minimum insertions to turn a string into a palindrome.
//!
//! For the substring `s[i..=j]`:
//!
//! ```text
//! D(i, j) = 0                                  if i >= j
//!         = D(i+1, j-1)                        if s[i] == s[j]
//!         = 1 + min(D(i+1, j), D(i, j-1))      otherwise
//! ```
//!
//! Filled bottom-up by increasing substring length. Comparison is by `char`
//! and case-sensitive.

/// Minimum number of characters to insert into `s` to make it a palindrome.
///
/// ```
/// use canonical_core::dp::min_insertions_palindrome;
///
/// assert_eq!(min_insertions_palindrome("Ab3bd"), 2);
/// assert_eq!(min_insertions_palindrome(""), 0);
/// ```
#[must_use]
pub fn min_insertions_palindrome(s: &str) -> usize {
    let s: Vec<char> = s.chars().collect();
    let n = s.len();
    if n < 2 {
        return 0;
    }

    // table[i][j] = D(i, j); entries with i >= j stay 0.
    let mut table = vec![vec![0_usize; n]; n];
    for len in 2..=n {
        for i in 0..=n - len {
            let j = i + len - 1;
            table[i][j] = if s[i] == s[j] {
                if len == 2 { 0 } else { table[i + 1][j - 1] }
            } else {
                1 + table[i + 1][j].min(table[i][j - 1])
            };
        }
    }
    table[0][n - 1]
}
