use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Process-wide count of requests served under `/app/`.
///
/// Lives in `AppState` behind an `Arc`; every operation is a single atomic
/// instruction, so concurrent requests never lose an increment.
#[derive(Debug, Default)]
pub struct VisitCounter {
    hits: AtomicU64,
}

impl VisitCounter {
    pub fn increment(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn read(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }
}

/// Middleware counting one visit per request before handing it to the
/// file server.
pub async fn count_visit(
    State(visits): State<Arc<VisitCounter>>,
    request: Request,
    next: Next,
) -> Response {
    visits.increment();
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(VisitCounter::default().read(), 0);
    }

    #[test]
    fn test_increment_and_reset() {
        let counter = VisitCounter::default();
        counter.increment();
        counter.increment();
        assert_eq!(counter.read(), 2);
        counter.reset();
        assert_eq!(counter.read(), 0);
        counter.increment();
        assert_eq!(counter.read(), 1);
    }

    #[test]
    fn test_concurrent_increments_are_not_lost() {
        const THREADS: u64 = 16;
        const PER_THREAD: u64 = 1_000;

        let counter = VisitCounter::default();
        std::thread::scope(|scope| {
            for _ in 0..THREADS {
                scope.spawn(|| {
                    for _ in 0..PER_THREAD {
                        counter.increment();
                    }
                });
            }
        });

        assert_eq!(counter.read(), THREADS * PER_THREAD);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_tasks_share_counter() {
        let counter = Arc::new(VisitCounter::default());
        let tasks: Vec<_> = (0..100)
            .map(|_| {
                let counter = counter.clone();
                tokio::spawn(async move { counter.increment() })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }
        assert_eq!(counter.read(), 100);
    }
}
