//! Longest common subsequence.
//!
//! The recurrence over prefix lengths `i` of `x` and `j` of `y` is
//!
//! ```text
//! L(i, j) = 0                                 if i == 0 or j == 0
//!         = L(i-1, j-1) + 1                   if x[i-1] == y[j-1]
//!         = max(L(i-1, j), L(i, j-1))         otherwise
//! ```
//!
//! The length table is filled bottom-up and the subsequence is read back by
//! walking from `(|x|, |y|)` to the origin. On a tie the walk prefers
//! `L(i, j-1)`, which picks the same subsequence as the naive top-down
//! recursion that keeps the later-computed branch on equal lengths.
//!
//! O(|x|·|y|) time and space.

/// Longest common subsequence of `x` and `y`, compared by `char`.
///
/// ```
/// use canonical_core::dp::lcs;
///
/// assert_eq!(lcs("ABCBDAB", "XYZAYZXBDCABC"), "ABDAB");
/// assert_eq!(lcs("abc", ""), "");
/// ```
#[must_use]
pub fn lcs(x: &str, y: &str) -> String {
    let x: Vec<char> = x.chars().collect();
    let y: Vec<char> = y.chars().collect();
    let table = lengths(&x, &y);

    let mut out: Vec<char> = Vec::with_capacity(table[x.len()][y.len()]);
    let (mut i, mut j) = (x.len(), y.len());
    while i > 0 && j > 0 {
        if x[i - 1] == y[j - 1] {
            out.push(x[i - 1]);
            i -= 1;
            j -= 1;
        } else if table[i][j - 1] >= table[i - 1][j] {
            j -= 1;
        } else {
            i -= 1;
        }
    }

    out.iter().rev().collect()
}

/// Length of the longest common subsequence of `x` and `y`.
#[must_use]
pub fn lcs_len(x: &str, y: &str) -> usize {
    let x: Vec<char> = x.chars().collect();
    let y: Vec<char> = y.chars().collect();
    lengths(&x, &y)[x.len()][y.len()]
}

fn lengths(x: &[char], y: &[char]) -> Vec<Vec<usize>> {
    let mut table = vec![vec![0_usize; y.len() + 1]; x.len() + 1];
    for i in 1..=x.len() {
        for j in 1..=y.len() {
            table[i][j] = if x[i - 1] == y[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }
    table
}
