use super::{Finding, Workload};

/// Naive `n x n` product of `a[i][j] = i + j` and `b[i][j] = i - j`.
///
/// Matrices are nested `Vec`s built inside the timed region, matching the
/// row-of-rows layout the other language versions allocate.
pub struct MatrixMul {
    size: usize,
    corner: Option<i64>,
}

impl MatrixMul {
    pub fn new(size: usize) -> Self {
        Self { size, corner: None }
    }
}

fn multiply(a: &[Vec<i64>], b: &[Vec<i64>]) -> Vec<Vec<i64>> {
    let n = a.len();
    let mut c = Vec::with_capacity(n);
    for i in 0..n {
        let mut row = Vec::with_capacity(n);
        for j in 0..n {
            let mut sum = 0;
            for k in 0..n {
                sum += a[i][k] * b[k][j];
            }
            row.push(sum);
        }
        c.push(row);
    }
    c
}

impl Workload for MatrixMul {
    fn name(&self) -> &'static str {
        "matrix_mul"
    }

    fn run(&mut self) {
        let n = std::hint::black_box(self.size) as i64;
        let a: Vec<Vec<i64>> = (0..n).map(|i| (0..n).map(|j| i + j).collect::<Vec<i64>>()).collect();
        let b: Vec<Vec<i64>> = (0..n).map(|i| (0..n).map(|j| i - j).collect::<Vec<i64>>()).collect();
        let c = multiply(&a, &b);
        self.corner = c.first().and_then(|row| row.first()).copied();
    }

    fn findings(&self) -> Vec<Finding> {
        self.corner
            .map(|v| Finding::new("Matrix[0][0]", v))
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_by_two() {
        let a = vec![vec![1, 2], vec![3, 4]];
        let b = vec![vec![5, 6], vec![7, 8]];
        assert_eq!(multiply(&a, &b), vec![vec![19, 22], vec![43, 50]]);
    }

    #[test]
    fn reference_corner_is_sum_of_squares() {
        let mut workload = MatrixMul::new(50);
        workload.run();
        assert_eq!(workload.findings(), vec![Finding::new("Matrix[0][0]", 40_425)]);
    }

    #[test]
    fn zero_size_has_no_corner() {
        let mut workload = MatrixMul::new(0);
        workload.run();
        assert!(workload.findings().is_empty());
    }
}
