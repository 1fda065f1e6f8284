//! Fixed-capacity admission pool with FIFO eviction.
//!
//! The pool holds everyone currently drawing on society's resources. It never
//! grows past [`Population::CAPACITY`]: admitting into a full pool pushes the
//! oldest resident out. Rejected applicants never touch the pool, and
//! eviction-on-overflow is the only removal there is.

use std::collections::VecDeque;

use serde::Serialize;

use crate::applicant::{Applicant, ApplicantKind};
use crate::content;

/// What a committed resident is. Pre-session placeholders are `Local`;
/// everyone else keeps the kind they applied as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResidentKind {
    Local,
    Good,
    Spy,
    ResourceHeavy,
}

impl From<ApplicantKind> for ResidentKind {
    fn from(kind: ApplicantKind) -> Self {
        match kind {
            ApplicantKind::Good => Self::Good,
            ApplicantKind::Spy => Self::Spy,
            ApplicantKind::ResourceHeavy => Self::ResourceHeavy,
        }
    }
}

/// A committed pool entry. Immutable once created; only eviction removes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resident {
    pub kind: ResidentKind,
    /// Display token carried over from the applicant.
    pub face: &'static str,
}

impl Resident {
    /// A pre-session local placeholder.
    pub fn local() -> Self {
        Self {
            kind: ResidentKind::Local,
            face: content::LOCAL_FACE,
        }
    }

    /// The resident an approved applicant commits as.
    pub fn from_applicant(applicant: &Applicant) -> Self {
        Self {
            kind: applicant.kind.into(),
            face: applicant.face,
        }
    }
}

/// Ordered admission pool — insertion order is admission order.
#[derive(Debug, Clone, Serialize)]
pub struct Population {
    residents: VecDeque<Resident>,
}

impl Population {
    /// Hard cap on pool size.
    pub const CAPACITY: usize = 12;

    /// A pool seeded with `count` local placeholders.
    pub fn seeded(count: usize) -> Self {
        Self {
            residents: (0..count).map(|_| Resident::local()).collect(),
        }
    }

    /// Admit a resident at the back. Returns the evicted front resident when
    /// the admission would overflow capacity.
    pub fn admit(&mut self, resident: Resident) -> Option<Resident> {
        self.residents.push_back(resident);
        if self.residents.len() > Self::CAPACITY {
            self.residents.pop_front()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.residents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residents.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.residents.len() >= Self::CAPACITY
    }

    /// Residents in admission order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Resident> {
        self.residents.iter()
    }

    /// Snapshot copy in admission order.
    pub fn to_vec(&self) -> Vec<Resident> {
        self.residents.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applicant::ReviewTrack;

    fn applicant(kind: ApplicantKind) -> Applicant {
        Applicant::compose(0, ReviewTrack::FourYear, kind, 0, 0)
    }

    #[test]
    fn test_seeded_all_local() {
        let pool = Population::seeded(10);
        assert_eq!(pool.len(), 10);
        assert!(pool.iter().all(|r| r.kind == ResidentKind::Local));
    }

    #[test]
    fn test_admit_below_capacity_no_eviction() {
        let mut pool = Population::seeded(5);
        let evicted = pool.admit(Resident::from_applicant(&applicant(ApplicantKind::Good)));
        assert!(evicted.is_none());
        assert_eq!(pool.len(), 6);
    }

    #[test]
    fn test_admit_at_capacity_evicts_oldest() {
        let mut pool = Population::seeded(Population::CAPACITY);
        let spy = applicant(ApplicantKind::Spy);
        let evicted = pool.admit(Resident::from_applicant(&spy));
        assert_eq!(evicted, Some(Resident::local()));
        assert_eq!(pool.len(), Population::CAPACITY);
        // The newcomer sits at the back.
        assert_eq!(pool.iter().last().map(|r| r.kind), Some(ResidentKind::Spy));
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut pool = Population::seeded(Population::CAPACITY);
        for _ in 0..100 {
            pool.admit(Resident::from_applicant(&applicant(ApplicantKind::Good)));
            assert_eq!(pool.len(), Population::CAPACITY);
        }
    }

    #[test]
    fn test_eviction_order_is_fifo() {
        let mut pool = Population::seeded(Population::CAPACITY);
        // Fill the pool with non-locals, displacing all 12 locals...
        for _ in 0..Population::CAPACITY {
            let out = pool.admit(Resident::from_applicant(&applicant(ApplicantKind::Good)));
            assert_eq!(out.map(|r| r.kind), Some(ResidentKind::Local));
        }
        // ...after which the oldest evictee is a Good resident, not a Local.
        let out = pool.admit(Resident::from_applicant(&applicant(ApplicantKind::Spy)));
        assert_eq!(out.map(|r| r.kind), Some(ResidentKind::Good));
    }
}
