/// Canonical workload parameters.
///
/// `Default` carries the reference values every language implementation
/// uses, so timings stay comparable. Tests shrink them with struct-update
/// syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub fib_input: u32,
    pub dispatch_iterations: usize,
    pub collatz_limit: u64,
    pub prime_limit: u64,
    pub dict_entries: usize,
    pub array_len: usize,
    pub matrix_size: usize,
    pub nbody_steps: usize,
    pub nbody_dt: f64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            fib_input: 30,
            dispatch_iterations: 50_000,
            collatz_limit: 20_000,
            prime_limit: 5_000,
            dict_entries: 10_000,
            array_len: 50_000,
            matrix_size: 50,
            nbody_steps: 1_000,
            nbody_dt: 0.01,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_inputs() {
        let config = BenchConfig::default();
        assert_eq!(config.fib_input, 30);
        assert_eq!(config.dispatch_iterations, 50_000);
        assert_eq!(config.prime_limit, 5_000);
        assert_eq!(config.matrix_size, 50);
    }
}
