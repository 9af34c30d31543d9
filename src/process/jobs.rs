/// One background launch. Jobs are never mutated or removed; the session
/// never learns when a background process exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub seq: u32,
    pub pid: u32,
}

/// Append-only table of background jobs, kept for the `[<seq>] <pid>`
/// announcement. Sequence numbers start at 1 and strictly increase for the
/// lifetime of the session.
#[derive(Debug)]
pub struct JobTable {
    jobs: Vec<Job>,
    next_seq: u32,
}

impl Default for JobTable {
    fn default() -> Self {
        Self::new()
    }
}

impl JobTable {
    pub fn new() -> Self {
        JobTable {
            jobs: Vec::new(),
            next_seq: 1,
        }
    }

    pub fn register(&mut self, pid: u32) -> u32 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.jobs.push(Job { seq, pid });
        seq
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_starts_at_one() {
        let mut table = JobTable::new();
        assert_eq!(table.register(4242), 1);
    }

    #[test]
    fn test_sequence_strictly_increasing() {
        let mut table = JobTable::new();
        let seqs: Vec<u32> = (0..10).map(|i| table.register(1000 + i)).collect();
        assert_eq!(seqs, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_duplicate_pids_get_distinct_sequences() {
        // Pids can be recycled by the OS; sequence numbers never are.
        let mut table = JobTable::new();
        let a = table.register(77);
        let b = table.register(77);
        assert_ne!(a, b);
        assert_eq!(table.jobs().len(), 2);
    }

    #[test]
    fn test_table_keeps_registration_order() {
        let mut table = JobTable::new();
        table.register(10);
        table.register(20);
        let pids: Vec<u32> = table.jobs().iter().map(|j| j.pid).collect();
        assert_eq!(pids, vec![10, 20]);
    }
}
