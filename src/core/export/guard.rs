//! Single-flight guard for report generation

use std::sync::atomic::{AtomicBool, Ordering};

/// Flag that admits at most one generation at a time
#[derive(Debug, Default)]
pub struct GenerationGuard {
    busy: AtomicBool,
}

impl GenerationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the guard, or returns `None` if it is already held
    ///
    /// The guard is released when the returned token is dropped, including
    /// during unwinding.
    pub fn try_acquire(&self) -> Option<GuardToken<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| GuardToken { flag: &self.busy })
    }

    /// Whether a generation currently holds the guard
    pub fn is_held(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Proof of holding the [`GenerationGuard`]
#[derive(Debug)]
#[must_use = "the guard is released as soon as the token is dropped"]
pub struct GuardToken<'a> {
    flag: &'a AtomicBool,
}

impl Drop for GuardToken<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_second_acquire_is_refused() {
        let guard = GenerationGuard::new();
        let token = guard.try_acquire();
        assert!(token.is_some());
        assert!(guard.is_held());
        assert!(guard.try_acquire().is_none());
    }

    #[test]
    fn test_drop_releases_guard() {
        let guard = GenerationGuard::new();
        {
            let _token = guard.try_acquire().unwrap();
        }
        assert!(!guard.is_held());
        assert!(guard.try_acquire().is_some());
    }

    #[test]
    fn test_panic_releases_guard() {
        let guard = Arc::new(GenerationGuard::new());
        let inner = Arc::clone(&guard);
        let result = std::thread::spawn(move || {
            let _token = inner.try_acquire().unwrap();
            panic!("generation blew up");
        })
        .join();

        assert!(result.is_err());
        assert!(!guard.is_held());
    }

    #[test]
    fn test_only_one_thread_wins() {
        let guard = Arc::new(GenerationGuard::new());
        let barrier = Arc::new(std::sync::Barrier::new(8));
        let (tx, rx) = std::sync::mpsc::channel();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let guard = Arc::clone(&guard);
                let barrier = Arc::clone(&barrier);
                let tx = tx.clone();
                std::thread::spawn(move || {
                    barrier.wait();
                    let token = guard.try_acquire();
                    tx.send(token.is_some()).unwrap();
                    // Hold until every thread has tried
                    barrier.wait();
                    drop(token);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        drop(tx);
        let winners = rx.iter().filter(|won| *won).count();
        assert_eq!(winners, 1);
    }
}
