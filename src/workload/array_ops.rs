use super::{Finding, Workload};

/// Push, indexed sum, then pop half.
pub struct ArrayOps {
    len: usize,
    outcome: Option<(i64, usize)>,
}

impl ArrayOps {
    pub fn new(len: usize) -> Self {
        Self { len, outcome: None }
    }
}

impl Workload for ArrayOps {
    fn name(&self) -> &'static str {
        "array_ops"
    }

    fn run(&mut self) {
        let len = std::hint::black_box(self.len);
        let mut arr: Vec<i64> = Vec::new();
        for i in 0..len {
            arr.push(i as i64);
        }

        let mut sum = 0;
        for i in 0..arr.len() {
            sum += arr[i];
        }

        for _ in 0..len / 2 {
            arr.pop();
        }
        self.outcome = Some((sum, arr.len()));
    }

    fn findings(&self) -> Vec<Finding> {
        match self.outcome {
            Some((sum, len)) => vec![
                Finding::new("Array Sum", sum),
                Finding::new("Array Length", len),
            ],
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_outcome() {
        let mut workload = ArrayOps::new(50_000);
        workload.run();
        assert_eq!(
            workload.findings(),
            vec![
                Finding::new("Array Sum", 1_249_975_000i64),
                Finding::new("Array Length", 25_000),
            ]
        );
    }

    #[test]
    fn odd_length_keeps_the_larger_half() {
        let mut workload = ArrayOps::new(5);
        workload.run();
        assert_eq!(workload.findings()[1], Finding::new("Array Length", 3));
    }
}
