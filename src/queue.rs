//! A minimal multi-consumer job queue for the enrichment worker pool.
//!
//! The producer (the caller) enqueues the entire deduplicated candidate set
//! up front; workers then drain it non-blockingly. An empty queue means
//! "no more work", not "wait for more" — this mirrors how the original tool
//! drove a fixed-size `queue.Queue` with non-blocking `get()` calls from a
//! pool of OS threads.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::permutate::Permutation;

#[derive(Clone)]
pub struct JobQueue {
    inner: Arc<Mutex<VecDeque<Permutation>>>,
    len: Arc<AtomicUsize>,
}

impl JobQueue {
    /// Build a queue already populated with `jobs`.
    pub fn new(jobs: Vec<Permutation>) -> Self {
        let len = jobs.len();

        Self {
            inner: Arc::new(Mutex::new(VecDeque::from(jobs))),
            len: Arc::new(AtomicUsize::new(len)),
        }
    }

    /// Push a single job onto the back of the queue.
    pub async fn push(&self, job: Permutation) {
        self.inner.lock().await.push_back(job);
        self.len.fetch_add(1, Ordering::SeqCst);
    }

    /// Pop the next job, or `None` if the queue is currently empty. Never
    /// awaits for a future item — an empty queue is a worker's signal to
    /// exit, not to keep polling.
    pub async fn pop(&self) -> Option<Permutation> {
        let job = self.inner.lock().await.pop_front();
        if job.is_some() {
            self.len.fetch_sub(1, Ordering::SeqCst);
        }
        job
    }

    /// Lock-free approximate depth, used by the progress reporter.
    pub fn len(&self) -> usize {
        self.len.load(Ordering::SeqCst)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Permissive;
    use crate::permutate::Domain;

    fn sample_jobs(n: usize) -> Vec<Permutation> {
        let domain = Domain::new("example.com").unwrap();
        domain.addition(&Permissive).take(n).collect()
    }

    #[tokio::test]
    async fn test_push_pop_round_trip() {
        let queue = JobQueue::new(sample_jobs(3));
        assert_eq!(queue.len(), 3);

        assert!(queue.pop().await.is_some());
        assert!(queue.pop().await.is_some());
        assert!(queue.pop().await.is_some());
        assert!(queue.pop().await.is_none());
        assert!(queue.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_pop_never_double_delivers() {
        let queue = JobQueue::new(sample_jobs(26));

        let mut handles = Vec::new();
        for _ in 0..4 {
            let queue = queue.clone();
            handles.push(tokio::spawn(async move {
                let mut popped = 0;
                while queue.pop().await.is_some() {
                    popped += 1;
                }
                popped
            }));
        }

        let mut total = 0;
        for handle in handles {
            total += handle.await.unwrap();
        }

        assert_eq!(total, 26);
    }
}
