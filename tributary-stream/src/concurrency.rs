// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::num::NonZeroUsize;
use tributary_core::{Result, TributaryError};

/// Upper bound on the number of work items a fan-out keeps in flight.
///
/// ```
/// use tributary_stream::Concurrency;
///
/// assert_eq!(Concurrency::default(), Concurrency::Unbounded);
/// assert_eq!(Concurrency::bounded(4).unwrap().limit(), Some(4));
/// assert!(Concurrency::bounded(0).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Concurrency {
    /// Launch every work item as soon as it is available.
    #[default]
    Unbounded,
    /// Keep at most this many work items running.
    Bounded(NonZeroUsize),
}

impl Concurrency {
    /// Bounded concurrency of `limit` items.
    ///
    /// # Errors
    ///
    /// Returns [`TributaryError::InvalidArgument`] when `limit` is zero, since
    /// no work item could ever start.
    pub fn bounded(limit: usize) -> Result<Self> {
        NonZeroUsize::new(limit)
            .map(Self::Bounded)
            .ok_or_else(|| TributaryError::invalid_argument("concurrency limit must be at least 1"))
    }

    /// The limit, or `None` when unbounded.
    #[must_use]
    pub const fn limit(self) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::Bounded(limit) => Some(limit.get()),
        }
    }

    pub(crate) const fn admits(self, in_flight: usize) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Bounded(limit) => in_flight < limit.get(),
        }
    }
}

impl From<NonZeroUsize> for Concurrency {
    fn from(limit: NonZeroUsize) -> Self {
        Self::Bounded(limit)
    }
}
