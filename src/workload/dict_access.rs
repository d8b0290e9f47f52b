use ahash::AHashMap;

use super::{Finding, Workload};

/// Inserts `key<i> -> i` then sums lookups of the same keys.
///
/// Key formatting happens inside the timed region on both passes, as the
/// other language versions allocate a fresh key string per access.
pub struct DictAccess {
    entries: usize,
    sum: Option<i64>,
}

impl DictAccess {
    pub fn new(entries: usize) -> Self {
        Self { entries, sum: None }
    }
}

impl Workload for DictAccess {
    fn name(&self) -> &'static str {
        "dict_access"
    }

    fn run(&mut self) {
        let entries = std::hint::black_box(self.entries);
        let mut map: AHashMap<String, i64> = AHashMap::new();
        for i in 0..entries {
            map.insert(format!("key{i}"), i as i64);
        }

        let mut sum = 0;
        for i in 0..entries {
            sum += map.get(&format!("key{i}")).copied().unwrap_or_default();
        }
        self.sum = Some(sum);
    }

    fn findings(&self) -> Vec<Finding> {
        self.sum
            .map(|s| Finding::new("Dict Sum", s))
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_sum() {
        let mut workload = DictAccess::new(10_000);
        workload.run();
        assert_eq!(workload.findings(), vec![Finding::new("Dict Sum", 49_995_000)]);
    }

    #[test]
    fn empty() {
        let mut workload = DictAccess::new(0);
        workload.run();
        assert_eq!(workload.findings(), vec![Finding::new("Dict Sum", 0)]);
    }
}
