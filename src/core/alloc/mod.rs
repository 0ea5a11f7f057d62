use std::cell::Cell;

use crate::core::queue::QueueError;

thread_local! {
    /// Remaining allocation budget for this thread. `None` means unlimited.
    static BUDGET: Cell<Option<u64>> = const { Cell::new(None) };
}

/// Let the next `n` gated allocations on this thread succeed and refuse
/// every later one, until [`reset`] is called. Simulates running out of
/// memory at a chosen point, which a real allocator will not do on demand.
pub fn fail_after(n: u64) {
    BUDGET.with(|budget| budget.set(Some(n)));
}

/// Lift any limit installed by [`fail_after`].
pub fn reset() {
    BUDGET.with(|budget| budget.set(None));
}

fn charge() -> Result<(), QueueError> {
    BUDGET.with(|budget| match budget.get() {
        None => Ok(()),
        Some(0) => Err(QueueError::AllocFailed),
        Some(left) => {
            budget.set(Some(left - 1));
            Ok(())
        }
    })
}

/// Gated box allocation.
pub(crate) fn try_box<T>(value: T) -> Result<Box<T>, QueueError> {
    charge()?;
    Ok(Box::new(value))
}

/// Gated independent copy of a byte payload.
pub(crate) fn try_copy(bytes: &[u8]) -> Result<Box<[u8]>, QueueError> {
    charge()?;
    Ok(bytes.into())
}
