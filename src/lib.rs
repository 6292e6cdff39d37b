//! `static` friendly singly linked list that doesn't require dynamic memory allocation
//!
//! All the storage of a [`ForwardList`] lives inline in the list value and its capacity is
//! fixed at compile time. Elements are threaded through the slots of that storage by two
//! index chains: one holding the elements in list order and one holding the free slots.
//!
//! # Examples
//!
//! ```
//! use fixed_forward_list::ForwardList;
//!
//! // A list with a fixed capacity of 3 elements allocated on the stack
//! let mut list: ForwardList<u8, 3> = ForwardList::new();
//!
//! assert!(list.push_front(3).is_ok());
//! assert!(list.push_front(1).is_ok());
//!
//! // Positions are plain cursors, checked against the list that issued them.
//! let first = list.begin();
//! let second = list.insert_after(first, 2).unwrap();
//! assert_eq!(list.get(second), &2);
//!
//! assert!(list.is_full());
//! assert_eq!(list.push_front(0), Err(0));
//!
//! assert!(list.iter().eq([1, 2, 3].iter()));
//!
//! assert_eq!(list.pop_front(), Some(1));
//! assert_eq!(list.len(), 2);
//! ```
//!
//! # Failure policy
//!
//! Running out of capacity is the only recoverable failure: insertions return an `Err` and the
//! list is left untouched. Misusing a cursor (using it with a list that didn't issue it,
//! dereferencing `end()` or a sentinel, anchoring on a removed element) and calling
//! [`front`](ForwardListInner::front) on an empty list are contract violations: the crate
//! reports a diagnostic and panics. Build with `panic = "abort"` to turn these into an immediate
//! process termination.
//!
//! # Optional features
//!
//! - `log`: diagnostics are forwarded to the [`log`](https://docs.rs/log) facade.
//! - `defmt`: diagnostics are forwarded to [`defmt`](https://docs.rs/defmt) and the list types
//!   implement `defmt::Format`.
//! - `portable-atomic`: container handles are allocated through
//!   [`portable-atomic`](https://docs.rs/portable-atomic), for targets without atomic CAS.

#![no_std]
#![deny(missing_docs)]

#[cfg(test)]
extern crate std;

pub use cursor::{ConstCursor, Cursor, Position};
pub use forward_list::{ForwardList, ForwardListInner, ForwardListView};
pub use len_type::LenType;

#[macro_use]
#[cfg(test)]
mod test_helpers;

mod cursor;
mod diag;
pub mod forward_list;
mod len_type;

#[cfg(feature = "defmt")]
mod defmt;

#[cfg(doctest)]
mod cfail;

/// The error type for fallible [`ForwardList`] insertions.
///
/// Returned when every slot of the list is already in use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CapacityError;

impl core::fmt::Display for CapacityError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("insufficient capacity")
    }
}

impl core::error::Error for CapacityError {}
