use super::{Finding, Workload};

/// Naive double recursion. No memoization; the exponential call tree is
/// the point.
pub fn fib(n: u32) -> u64 {
    if n < 2 {
        return n as u64;
    }
    fib(n - 1) + fib(n - 2)
}

pub struct Fibonacci {
    input: u32,
    result: Option<u64>,
}

impl Fibonacci {
    pub fn new(input: u32) -> Self {
        Self { input, result: None }
    }
}

impl Workload for Fibonacci {
    fn name(&self) -> &'static str {
        "fib"
    }

    fn run(&mut self) {
        self.result = Some(fib(std::hint::black_box(self.input)));
    }

    fn findings(&self) -> Vec<Finding> {
        self.result
            .map(|r| Finding::new(format!("Fibonacci({})", self.input), r))
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_cases() {
        assert_eq!(fib(0), 0);
        assert_eq!(fib(1), 1);
    }

    #[test]
    fn known_values() {
        assert_eq!(fib(10), 55);
        assert_eq!(fib(30), 832_040);
    }

    #[test]
    fn recurrence_holds() {
        for n in 2..20 {
            assert_eq!(fib(n), fib(n - 1) + fib(n - 2), "n = {n}");
        }
    }
}
