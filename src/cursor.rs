//! Positions into a [`ForwardList`](crate::ForwardList).
//!
//! A cursor is a `(list handle, slot index)` pair. It does not borrow the list, so it stays
//! usable across insertions and removals, and every list operation taking a cursor first checks
//! that the cursor was issued by that very list.

use core::num::NonZeroUsize;

#[cfg(not(feature = "portable-atomic"))]
use core::sync::atomic;
#[cfg(feature = "portable-atomic")]
use portable_atomic as atomic;

use atomic::{AtomicUsize, Ordering};

use crate::diag;

/// Slot index carried by `end()` cursors.
pub(crate) const END: usize = usize::MAX;

/// Identity of a list instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListHandle(NonZeroUsize);

impl ListHandle {
    /// Hands out a handle no other live list holds.
    pub(crate) fn next() -> Self {
        static NEXT: AtomicUsize = AtomicUsize::new(1);

        loop {
            // Zero only comes back once the counter wrapped around.
            if let Some(id) = NonZeroUsize::new(NEXT.fetch_add(1, Ordering::Relaxed)) {
                return ListHandle(id);
            }
        }
    }
}

/// A mutable position in a list.
///
/// Obtained from [`before_begin`], [`begin`], [`end`] or returned by insertions and removals.
/// Dereference it with [`get`] or [`get_mut`], move it with [`advance`].
///
/// [`before_begin`]: crate::ForwardListInner::before_begin
/// [`begin`]: crate::ForwardListInner::begin
/// [`end`]: crate::ForwardListInner::end
/// [`get`]: crate::ForwardListInner::get
/// [`get_mut`]: crate::ForwardListInner::get_mut
/// [`advance`]: crate::ForwardListInner::advance
#[derive(Clone, Copy, Debug)]
pub struct Cursor {
    list: ListHandle,
    index: usize,
}

/// A read-only position in a list.
///
/// Every [`Cursor`] converts into a `ConstCursor`; the reverse conversion does not exist.
/// A `ConstCursor` can anchor insertions and removals but can't be passed to
/// [`get_mut`](crate::ForwardListInner::get_mut).
#[derive(Clone, Copy, Debug)]
pub struct ConstCursor {
    list: ListHandle,
    index: usize,
}

impl Cursor {
    pub(crate) fn new(list: ListHandle, index: usize) -> Self {
        Cursor { list, index }
    }
}

impl ConstCursor {
    pub(crate) fn new(list: ListHandle, index: usize) -> Self {
        ConstCursor { list, index }
    }
}

impl From<Cursor> for ConstCursor {
    fn from(cursor: Cursor) -> Self {
        ConstCursor {
            list: cursor.list,
            index: cursor.index,
        }
    }
}

/// Sealed traits
mod private {
    use super::ListHandle;

    pub trait Sealed {
        fn handle(&self) -> ListHandle;
        fn index(&self) -> usize;
        fn set_index(&mut self, index: usize);
    }
}

/// A position in a list: either a [`Cursor`] or a [`ConstCursor`].
pub trait Position: private::Sealed + Copy + Into<ConstCursor> {
    /// Returns `true` if this is the one-past-the-last position.
    fn is_end(&self) -> bool {
        self.index() == END
    }
}

impl private::Sealed for Cursor {
    fn handle(&self) -> ListHandle {
        self.list
    }

    fn index(&self) -> usize {
        self.index
    }

    fn set_index(&mut self, index: usize) {
        self.index = index;
    }
}

impl private::Sealed for ConstCursor {
    fn handle(&self) -> ListHandle {
        self.list
    }

    fn index(&self) -> usize {
        self.index
    }

    fn set_index(&mut self, index: usize) {
        self.index = index;
    }
}

impl Position for Cursor {}
impl Position for ConstCursor {}

impl PartialEq for ConstCursor {
    /// Compares slot indices.
    ///
    /// # Panics
    ///
    /// Panics if the cursors were issued by different lists.
    #[track_caller]
    fn eq(&self, other: &Self) -> bool {
        if self.list != other.list {
            diag::contract_violation("cursors of different lists can't be compared");
        }

        self.index == other.index
    }
}

impl PartialEq for Cursor {
    #[track_caller]
    fn eq(&self, other: &Self) -> bool {
        ConstCursor::from(*self) == ConstCursor::from(*other)
    }
}

impl PartialEq<ConstCursor> for Cursor {
    #[track_caller]
    fn eq(&self, other: &ConstCursor) -> bool {
        ConstCursor::from(*self) == *other
    }
}

impl PartialEq<Cursor> for ConstCursor {
    #[track_caller]
    fn eq(&self, other: &Cursor) -> bool {
        *self == ConstCursor::from(*other)
    }
}

#[cfg(test)]
pub(crate) use private::Sealed;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_unique() {
        let a = ListHandle::next();
        let b = ListHandle::next();

        assert_ne!(a, b);
    }

    #[test]
    fn widening_keeps_position() {
        let list = ListHandle::next();
        let cursor = Cursor::new(list, 4);
        let widened = ConstCursor::from(cursor);

        assert_eq!(widened.index(), 4);
        assert_eq!(widened.handle(), list);
        assert!(cursor == widened);
        assert!(widened == cursor);
    }

    #[test]
    fn end() {
        let list = ListHandle::next();

        assert!(Cursor::new(list, END).is_end());
        assert!(!ConstCursor::new(list, 1).is_end());
        assert!(Cursor::new(list, 2) != Cursor::new(list, END));
    }

    #[test]
    #[should_panic(expected = "cursors of different lists can't be compared")]
    fn foreign_comparison() {
        let a = Cursor::new(ListHandle::next(), END);
        let b = Cursor::new(ListHandle::next(), END);

        let _ = a == b;
    }
}
