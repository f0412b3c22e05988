/// Exclusive bound on the `n` the table covers. Red's placement domain is at
/// most 14 cells wide, so nothing here asks past C(14, 7).
pub const BINOMIAL_BOUND: usize = 20;

/// Binomial coefficients C(n, k) for all `n`, `k` below [`BINOMIAL_BOUND`],
/// computed once from Pascal's rule.
#[derive(Debug, Clone)]
pub struct Binomial {
  table: [[u64; BINOMIAL_BOUND]; BINOMIAL_BOUND],
}

impl Binomial {
  pub const fn new() -> Self {
    let mut table = [[0u64; BINOMIAL_BOUND]; BINOMIAL_BOUND];
    let mut n = 0;
    while n < BINOMIAL_BOUND {
      table[n][0] = 1;
      let mut k = 1;
      while k <= n {
        table[n][k] = table[n - 1][k - 1] + table[n - 1][k];
        k += 1;
      }
      n += 1;
    }
    Binomial { table }
  }

  /// C(n, k), which is 0 for `k > n`.
  pub const fn get(&self, n: u32, k: u32) -> u64 {
    debug_assert!((n as usize) < BINOMIAL_BOUND && (k as usize) < BINOMIAL_BOUND);
    self.table[n as usize][k as usize]
  }
}
