//! Errors.

use crate::command::RegionId;
use thiserror::Error;

/// A frame failed to render.
#[derive(Debug, Error)]
pub enum Error<E: std::error::Error + 'static> {
    /// A backend node operation failed.
    ///
    /// `slot` is the index of the command being reconciled, or `None` for root properties.
    #[error("backend operation failed at slot {slot:?}")]
    Backend {
        slot: Option<usize>,
        #[source]
        source: E,
    },
}

impl<E: std::error::Error + 'static> Error<E> {
    pub(crate) fn backend(slot: Option<usize>) -> impl FnOnce(E) -> Error<E> {
        move |source| Error::Backend { slot, source }
    }
}

/// Programming errors in the way the API is used.
///
/// These are never returned; they are raised as panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("unbalanced regions: {open} region(s) still open at the end of the frame")]
    UnbalancedRegions { open: usize },

    #[error("unbalanced regions: end region at slot {slot} without a matching begin")]
    EndWithoutBegin { slot: usize },

    #[error("closed region {found:?}, which is not the innermost open region ({expected:?})")]
    MismatchedRegion {
        expected: Option<RegionId>,
        found: RegionId,
    },
}
