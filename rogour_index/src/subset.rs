use crate::binomial::Binomial;

/// Rank of the `k`-subset `flags` of `n` positions among all `k`-subsets.
///
/// Walking positions from low to high, a set bit at position `j` with `r`
/// set bits not yet consumed contributes C(n - j - 1, r). The subset holding
/// the last `k` positions ranks 0, the one holding the first `k` positions
/// ranks C(n, k) - 1.
pub fn subset_rank(binomial: &Binomial, flags: u16, k: u32, n: u32) -> u64 {
  debug_assert_eq!(flags.count_ones(), k);
  debug_assert!((flags as u32) < (1u32 << n));
  let mut remaining = k;
  let mut rank = 0;
  for position in 0..n {
    if flags & (1 << position) != 0 {
      rank += binomial.get(n - position - 1, remaining);
      remaining -= 1;
    }
  }
  rank
}

/// Inverse of [`subset_rank`]: the `k`-subset of `n` positions with the
/// given rank.
pub fn subset_unrank(binomial: &Binomial, mut index: u64, k: u32, n: u32) -> u16 {
  debug_assert!(index < binomial.get(n, k));
  let mut remaining = k;
  let mut flags = 0u16;
  for position in 0..n {
    if remaining == 0 {
      break;
    }
    let with_set = binomial.get(n - position - 1, remaining);
    if index >= with_set {
      index -= with_set;
      remaining -= 1;
      flags |= 1 << position;
    }
  }
  debug_assert_eq!(index, 0);
  flags
}

/// Positions of the set bits of `mask`, low to high.
pub fn iter_ones(mask: u16) -> impl Iterator<Item = u32> {
  std::iter::successors((mask != 0).then_some(mask), |&rest| {
    let rest = rest & (rest - 1);
    (rest != 0).then_some(rest)
  })
  .map(|rest| rest.trailing_zeros())
}

/// All masks of `n` bits with exactly `k` set, in increasing numeric order.
pub struct Subsets {
  next: Option<u16>,
  limit: u16,
}

impl Subsets {
  pub fn new(n: u32, k: u32) -> Self {
    debug_assert!(k <= n && n < 16);
    let first = (1u16 << k) - 1;
    let limit = (1u16 << n) - 1;
    Subsets {
      next: (first <= limit).then_some(first),
      limit,
    }
  }
}

impl Iterator for Subsets {
  type Item = u16;

  fn next(&mut self) -> Option<u16> {
    let mask = self.next?;
    self.next = gosper_successor(mask).filter(|&next| next <= self.limit);
    Some(mask)
  }
}

/// The next mask above `mask` with the same number of set bits, if one fits
/// in 16 bits. Gosper's hack.
fn gosper_successor(mask: u16) -> Option<u16> {
  if mask == 0 {
    return None;
  }
  let mask = mask as u32;
  let low = mask & mask.wrapping_neg();
  let carry = mask + low;
  let next = carry | (((mask ^ carry) / low) >> 2);
  (next <= u16::MAX as u32).then_some(next as u16)
}
