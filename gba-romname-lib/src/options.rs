/// Header reads kept in flight when nothing else is asked for.
pub const DEFAULT_JOBS: usize = 8;

/// Options that control how a ROM tree is catalogued.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Maximum number of ROM files open at once while reading headers.
    /// Values below 1 are treated as 1.
    pub jobs: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { jobs: DEFAULT_JOBS }
    }
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_jobs() {
        assert_eq!(ScanOptions::new().jobs, DEFAULT_JOBS);
    }

    #[test]
    fn test_jobs_clamped_to_one() {
        assert_eq!(ScanOptions::new().jobs(0).jobs, 1);
        assert_eq!(ScanOptions::new().jobs(3).jobs, 3);
    }
}
