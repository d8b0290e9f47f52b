use super::{Finding, Workload};

/// Steps for `n` to reach 1 under the Collatz map.
pub fn collatz_steps(mut n: u64) -> u64 {
    let mut steps = 0;
    while n > 1 {
        n = if n % 2 == 0 { n / 2 } else { 3 * n + 1 };
        steps += 1;
    }
    steps
}

/// Longest Collatz chain for starting values `1..=limit`.
pub struct Collatz {
    limit: u64,
    max_steps: Option<u64>,
}

impl Collatz {
    pub fn new(limit: u64) -> Self {
        Self { limit, max_steps: None }
    }
}

impl Workload for Collatz {
    fn name(&self) -> &'static str {
        "collatz"
    }

    fn run(&mut self) {
        let mut max_steps = 0u64;
        for i in 1..=std::hint::black_box(self.limit) {
            max_steps = max_steps.max(collatz_steps(i));
        }
        self.max_steps = Some(max_steps);
    }

    fn findings(&self) -> Vec<Finding> {
        self.max_steps
            .map(|s| Finding::new("Max Collatz steps", s))
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps() {
        assert_eq!(collatz_steps(1), 0);
        assert_eq!(collatz_steps(2), 1);
        assert_eq!(collatz_steps(6), 8);
        assert_eq!(collatz_steps(27), 111);
    }

    #[test]
    fn max_below_thirty() {
        let mut workload = Collatz::new(30);
        workload.run();
        assert_eq!(workload.findings(), vec![Finding::new("Max Collatz steps", 111)]);
    }
}
