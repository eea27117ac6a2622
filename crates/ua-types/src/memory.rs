// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Allocation admission.
//!
//! Every owned buffer the engine creates (string payloads, array blocks,
//! structure member lists, boxed links) is first admitted by an
//! [`Allocator`] and then reserved with `try_reserve_exact`, so both a
//! refused admission and real heap exhaustion surface as
//! [`Error::OutOfMemory`] instead of aborting the process.
//!
//! [`FailingAllocator`] is the fault-injection counterpart used to exercise
//! the rollback paths of copy operations.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{Error, Result};

/// Gatekeeper consulted before the engine allocates `bytes` bytes.
pub trait Allocator: Send + Sync {
    fn admit(&self, bytes: usize) -> Result<()>;
}

/// Admits every request; the heap decides.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemAllocator;

impl Allocator for SystemAllocator {
    #[inline]
    fn admit(&self, _bytes: usize) -> Result<()> {
        Ok(())
    }
}

const NEVER: usize = usize::MAX;

/// Allocator that refuses one chosen admission.
///
/// Either the n-th admission (1-based) or the first admission of an exact
/// byte size fails; every other request is admitted. Once the failure has
/// fired the allocator admits everything again.
#[derive(Debug)]
pub struct FailingAllocator {
    fail_at: AtomicUsize,
    fail_size: AtomicUsize,
    admissions: AtomicUsize,
    failures: AtomicUsize,
}

impl FailingAllocator {
    fn with(fail_at: usize, fail_size: usize) -> Self {
        Self {
            fail_at: AtomicUsize::new(fail_at),
            fail_size: AtomicUsize::new(fail_size),
            admissions: AtomicUsize::new(0),
            failures: AtomicUsize::new(0),
        }
    }

    /// Fail the `n`-th admission (1-based).
    pub fn fail_nth(n: usize) -> Self {
        Self::with(n, NEVER)
    }

    /// Fail the first admission of exactly `bytes` bytes.
    pub fn fail_on_size(bytes: usize) -> Self {
        Self::with(NEVER, bytes)
    }

    /// Admit everything, only counting.
    pub fn counting() -> Self {
        Self::with(NEVER, NEVER)
    }

    /// Number of admission requests seen so far, refused ones included.
    pub fn admissions(&self) -> usize {
        self.admissions.load(Ordering::Relaxed)
    }

    /// Number of refused admissions.
    pub fn failures(&self) -> usize {
        self.failures.load(Ordering::Relaxed)
    }

    /// Re-arm to fail the `n`-th admission counted from now.
    pub fn rearm_nth(&self, n: usize) {
        let base = self.admissions();
        self.fail_at.store(base.saturating_add(n), Ordering::Relaxed);
    }

    fn disarm(&self) {
        self.fail_at.store(NEVER, Ordering::Relaxed);
        self.fail_size.store(NEVER, Ordering::Relaxed);
    }
}

impl Allocator for FailingAllocator {
    fn admit(&self, bytes: usize) -> Result<()> {
        let nth = self.admissions.fetch_add(1, Ordering::Relaxed) + 1;
        let hit_nth = nth == self.fail_at.load(Ordering::Relaxed);
        let hit_size = bytes == self.fail_size.load(Ordering::Relaxed);
        if hit_nth || hit_size {
            self.disarm();
            self.failures.fetch_add(1, Ordering::Relaxed);
            log::debug!("[memory] injected allocation failure: {} bytes (#{})", bytes, nth);
            return Err(Error::oom(bytes));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_admits_everything() {
        assert!(SystemAllocator.admit(0).is_ok());
        assert!(SystemAllocator.admit(usize::MAX).is_ok());
    }

    #[test]
    fn test_fail_nth_fires_once() {
        let alloc = FailingAllocator::fail_nth(2);
        assert!(alloc.admit(8).is_ok());
        assert_eq!(alloc.admit(8), Err(Error::OutOfMemory { bytes: 8 }));
        assert!(alloc.admit(8).is_ok());
        assert_eq!(alloc.admissions(), 3);
        assert_eq!(alloc.failures(), 1);
    }

    #[test]
    fn test_fail_on_size() {
        let alloc = FailingAllocator::fail_on_size(3);
        assert!(alloc.admit(1).is_ok());
        assert!(alloc.admit(2).is_ok());
        assert!(alloc.admit(3).is_err());
        assert!(alloc.admit(3).is_ok());
    }

    #[test]
    fn test_rearm() {
        let alloc = FailingAllocator::counting();
        assert!(alloc.admit(1).is_ok());
        alloc.rearm_nth(1);
        assert!(alloc.admit(1).is_err());
        assert_eq!(alloc.failures(), 1);
    }
}
