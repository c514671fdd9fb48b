//! Lexicographic permutations of `0..n`.
//!
//! The identity comes first, so a truncated enumeration always tries the
//! catalog order before any reordering.

/// Iterator over every ordering of `0..n` in lexicographic order.
#[derive(Debug, Clone)]
pub struct Permutations {
    current: Option<Vec<usize>>,
}

impl Permutations {
    pub fn new(n: usize) -> Self {
        Self {
            current: Some((0..n).collect()),
        }
    }
}

/// Advance `perm` to its lexicographic successor in place. Returns false
/// when `perm` was already the last permutation.
fn next_permutation(perm: &mut [usize]) -> bool {
    let n = perm.len();
    if n < 2 {
        return false;
    }
    let mut i = n - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = n - 1;
    while perm[j] <= perm[i - 1] {
        j -= 1;
    }
    perm.swap(i - 1, j);
    perm[i..].reverse();
    true
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let perm = self.current.take()?;
        let mut successor = perm.clone();
        if next_permutation(&mut successor) {
            self.current = Some(successor);
        }
        Some(perm)
    }
}

/// `n!`, saturating.
pub fn factorial(n: usize) -> usize {
    (1..=n).fold(1usize, |acc, k| acc.saturating_mul(k))
}
