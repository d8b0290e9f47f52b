use super::{Finding, Workload};

/// Trial division up to the square root.
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    let mut i = 2;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Counts primes in `0..limit`.
pub struct Primes {
    limit: u64,
    count: Option<u64>,
}

impl Primes {
    pub fn new(limit: u64) -> Self {
        Self { limit, count: None }
    }
}

impl Workload for Primes {
    fn name(&self) -> &'static str {
        "primes"
    }

    fn run(&mut self) {
        let limit = std::hint::black_box(self.limit);
        self.count = Some((0..limit).filter(|&i| is_prime(i)).count() as u64);
    }

    fn findings(&self) -> Vec<Finding> {
        self.count
            .map(|c| Finding::new(format!("Primes up to {}", self.limit), c))
            .into_iter()
            .collect()
    }
}
