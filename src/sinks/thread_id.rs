//! OS thread identifiers for log annotation
//!
//! One stable decimal integer per thread, chosen per target platform:
//! the kernel thread id on Linux (`gettid(2)`) and macOS
//! (`pthread_threadid_np`), and a process-local counter assigned on first
//! use everywhere else. The value is cached per thread so a log line costs
//! at most one id lookup per thread lifetime.

thread_local! {
    static CACHED: u64 = imp::current();
}

pub(crate) fn current() -> u64 {
    CACHED.with(|tid| *tid)
}

#[cfg(target_os = "linux")]
mod imp {
    pub(super) fn current() -> u64 {
        // gettid(2) has no portable libc wrapper on older targets; the raw
        // syscall works everywhere this crate builds.
        unsafe { libc::syscall(libc::SYS_gettid) as u64 }
    }
}

#[cfg(target_os = "macos")]
mod imp {
    pub(super) fn current() -> u64 {
        let mut tid: u64 = 0;
        unsafe {
            libc::pthread_threadid_np(libc::pthread_self(), &mut tid);
        }
        tid
    }
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
mod imp {
    use std::sync::atomic::{AtomicU64, Ordering};

    static NEXT: AtomicU64 = AtomicU64::new(1);

    pub(super) fn current() -> u64 {
        NEXT.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_within_a_thread() {
        assert_eq!(current(), current());
    }

    #[test]
    fn test_distinct_across_threads() {
        let here = current();
        let there = std::thread::spawn(current).join().expect("join");
        assert_ne!(here, there);
    }
}
