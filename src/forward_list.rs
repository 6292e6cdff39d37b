//! A fixed capacity singly linked list, similar to `std::collections::LinkedList` but with
//! insertions and removals anchored on a position, the way a forward list works.
//!
//! The list never allocates: all the slots live inline in the list value. Elements are kept in
//! one chain of slot indices, free slots in a second chain threaded through the same slots. Two
//! reserved sentinel indices anchor the chains, so that "insert after" and "erase after" work the
//! same for the first element as for any other.
//!
//! # Examples
//!
//! ```
//! use fixed_forward_list::ForwardList;
//! let mut ll: ForwardList<_, 4> = ForwardList::new();
//!
//! // Insert after the position returned by the previous insertion to keep the order
//! let mut pos = ll.before_begin();
//! for v in [1, 2, 3] {
//!     pos = ll.insert_after(pos, v).unwrap();
//! }
//! assert!(ll.iter().eq([1, 2, 3].iter()));
//!
//! // Remove the element after the first one
//! let first = ll.begin();
//! let next = ll.erase_after(first);
//! assert_eq!(ll.get(next), &3);
//! assert!(ll.iter().eq([1, 3].iter()));
//!
//! // This will not fit in the list.
//! ll.push_front(0).unwrap();
//! ll.push_front(-1).unwrap();
//! assert_eq!(ll.push_front(-2), Err(-2));
//! ```

use core::cell::Cell;
use core::cmp;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem::MaybeUninit;

use crate::cursor::{ConstCursor, Cursor, ListHandle, Position, END};
use crate::diag;
use crate::len_type::{as_len_type, check_capacity_fits, LenType};
use crate::CapacityError;

mod storage {
    use super::{ForwardListInner, ForwardListView, LenType, Node};

    /// Trait defining how data for a list is stored.
    ///
    /// There's two implementations available:
    ///
    /// - [`OwnedForwardListStorage`]: stores the data in an array `[T; N]` whose size is known at compile time.
    /// - [`ViewForwardListStorage`]: stores the data in an unsized `[T]`.
    ///
    /// This allows [`ForwardList`] to be generic over either sized or unsized storage. The [`forward_list`](super)
    /// module contains a [`ForwardListInner`] struct that's generic on [`ForwardListStorage`],
    /// and two type aliases for convenience:
    ///
    /// - [`ForwardList<T, N, Idx>`](super::ForwardList) = `ForwardListInner<T, Idx, OwnedForwardListStorage<T, Idx, N>>`
    /// - [`ForwardListView<T, Idx>`](super::ForwardListView) = `ForwardListInner<T, Idx, ViewForwardListStorage<T, Idx>>`
    ///
    /// `ForwardList` can be unsized into `ForwardListView`, either by unsizing coercions such as `&mut ForwardList -> &mut ForwardListView` or
    /// `Box<ForwardList> -> Box<ForwardListView>`, or explicitly with [`.as_view()`](super::ForwardListInner::as_view) or [`.as_mut_view()`](super::ForwardListInner::as_mut_view).
    ///
    /// This trait is sealed, so you cannot implement it for your own types. You can only use
    /// the implementations provided by this crate.
    ///
    /// [`ForwardListInner`]: super::ForwardListInner
    /// [`ForwardList`]: super::ForwardList
    #[allow(private_bounds)]
    pub trait ForwardListStorage<T, Idx>: ForwardListSealedStorage<T, Idx> {}

    pub trait ForwardListSealedStorage<T, Idx> {
        // part of the sealed trait so that no trait is publicly implemented by `OwnedForwardListStorage` besides `Storage`
        fn borrow(&self) -> &[Node<T, Idx>];
        fn borrow_mut(&mut self) -> &mut [Node<T, Idx>];
        fn as_view(this: &ForwardListInner<T, Idx, Self>) -> &ForwardListView<T, Idx>
        where
            Idx: LenType,
            Self: ForwardListStorage<T, Idx>;
        fn as_mut_view(this: &mut ForwardListInner<T, Idx, Self>) -> &mut ForwardListView<T, Idx>
        where
            Idx: LenType,
            Self: ForwardListStorage<T, Idx>;
    }

    // One sealed layer of indirection to hide the internal details (The MaybeUninit).
    pub struct ForwardListStorageInner<B: ?Sized> {
        pub(crate) buffer: B,
    }

    /// Implementation of [`ForwardListStorage`] that stores the data in an array `[T; N]` whose size is known at compile time.
    pub type OwnedForwardListStorage<T, Idx, const N: usize> =
        ForwardListStorageInner<[Node<T, Idx>; N]>;
    /// Implementation of [`ForwardListStorage`] that stores the data in an unsized `[T]`.
    pub type ViewForwardListStorage<T, Idx> = ForwardListStorageInner<[Node<T, Idx>]>;

    impl<T, Idx, const N: usize> ForwardListSealedStorage<T, Idx>
        for OwnedForwardListStorage<T, Idx, N>
    {
        fn borrow(&self) -> &[Node<T, Idx>] {
            &self.buffer
        }
        fn borrow_mut(&mut self) -> &mut [Node<T, Idx>] {
            &mut self.buffer
        }
        fn as_view(this: &ForwardListInner<T, Idx, Self>) -> &ForwardListView<T, Idx>
        where
            Self: ForwardListStorage<T, Idx>,
            Idx: LenType,
        {
            this
        }
        fn as_mut_view(this: &mut ForwardListInner<T, Idx, Self>) -> &mut ForwardListView<T, Idx>
        where
            Self: ForwardListStorage<T, Idx>,
            Idx: LenType,
        {
            this
        }
    }
    impl<T, Idx, const N: usize> ForwardListStorage<T, Idx> for OwnedForwardListStorage<T, Idx, N> {}

    impl<T, Idx> ForwardListSealedStorage<T, Idx> for ViewForwardListStorage<T, Idx> {
        fn borrow(&self) -> &[Node<T, Idx>] {
            &self.buffer
        }
        fn borrow_mut(&mut self) -> &mut [Node<T, Idx>] {
            &mut self.buffer
        }
        fn as_view(this: &ForwardListInner<T, Idx, Self>) -> &ForwardListView<T, Idx>
        where
            Self: ForwardListStorage<T, Idx>,
            Idx: LenType,
        {
            this
        }
        fn as_mut_view(this: &mut ForwardListInner<T, Idx, Self>) -> &mut ForwardListView<T, Idx>
        where
            Self: ForwardListStorage<T, Idx>,
            Idx: LenType,
        {
            this
        }
    }
    impl<T, Idx> ForwardListStorage<T, Idx> for ViewForwardListStorage<T, Idx> {}
}
pub use storage::{ForwardListStorage, OwnedForwardListStorage, ViewForwardListStorage};

/// Slot index of the sentinel anchoring the free chain.
const BEFORE_BEGIN_FREE: usize = 0;
/// Slot index of the sentinel anchoring the element chain.
const BEFORE_BEGIN_USED: usize = 1;
/// Slot index of the first element slot, `buffer[0]`.
const FIRST_SLOT: usize = 2;

/// A slot in the [`ForwardList`].
pub struct Node<T, Idx> {
    val: MaybeUninit<T>,
    next: Idx,
    /// Set while the slot is on the element chain.
    used: bool,
}

/// Base struct for [`ForwardList`] and [`ForwardListView`], generic over the [`ForwardListStorage`].
///
/// In most cases you should use [`ForwardList`] or [`ForwardListView`] directly. Only use this
/// struct if you want to write code that's generic over both.
pub struct ForwardListInner<T, Idx, S>
where
    Idx: LenType,
    S: ForwardListStorage<T, Idx> + ?Sized,
{
    handle: Cell<Option<ListHandle>>,
    len: Idx,
    /// Link of the `BEFORE_BEGIN_FREE` sentinel.
    free: Idx,
    /// Link of the `BEFORE_BEGIN_USED` sentinel.
    head: Idx,
    phantom: PhantomData<T>,
    list: S,
}

/// A fixed capacity singly linked list.
///
/// `Idx` is the integer type of the slot links. It must be able to hold `N + 2`; smaller types
/// make the list smaller.
pub type ForwardList<T, const N: usize, Idx = usize> =
    ForwardListInner<T, Idx, OwnedForwardListStorage<T, Idx, N>>;

/// A singly linked list with the capacity erased.
pub type ForwardListView<T, Idx = usize> =
    ForwardListInner<T, Idx, ViewForwardListStorage<T, Idx>>;

impl<T, Idx: LenType, const N: usize> ForwardList<T, N, Idx> {
    /// Creates an empty list, with every slot on the free chain.
    ///
    /// # Example
    ///
    /// ```
    /// use fixed_forward_list::ForwardList;
    ///
    /// // allocate the list on the stack
    /// let mut x: ForwardList<u8, 16> = ForwardList::new();
    ///
    /// // allocate the list in a static variable, with a one byte index type
    /// static mut X: ForwardList<u8, 16, u8> = ForwardList::new();
    /// ```
    pub const fn new() -> Self {
        const { check_capacity_fits::<Idx, N>() }

        let mut list = Self {
            handle: Cell::new(None),
            len: Idx::ZERO,
            free: if N == 0 {
                Idx::MAX
            } else {
                as_len_type(FIRST_SLOT)
            },
            head: Idx::MAX,
            phantom: PhantomData,
            list: OwnedForwardListStorage {
                buffer: [const {
                    Node {
                        val: MaybeUninit::uninit(),
                        next: Idx::MAX,
                        used: false,
                    }
                }; N],
            },
        };

        // Chain the free slots in ascending order, the last one keeps the terminal marker
        let mut slot = 0;
        while slot + 1 < N {
            list.list.buffer[slot].next = as_len_type(slot + FIRST_SLOT + 1);
            slot += 1;
        }

        list
    }

    /// Builds a list out of the values of `source`, leaving `source` empty.
    ///
    /// Values are moved one by one into the slots of the new list, storage is never shared.
    ///
    /// # Example
    ///
    /// ```
    /// use fixed_forward_list::ForwardList;
    /// let mut a: ForwardList<_, 4> = ForwardList::new();
    /// a.push_front(2).unwrap();
    /// a.push_front(1).unwrap();
    ///
    /// let b = ForwardList::take(&mut a);
    ///
    /// assert!(a.is_empty());
    /// assert!(b.iter().eq([1, 2].iter()));
    /// ```
    pub fn take(source: &mut Self) -> Self {
        let mut list = Self::new();
        list.take_from(source);
        list
    }

    /// Replaces the content of `self` with the values of `source`, leaving `source` empty.
    ///
    /// Elements already present in `self` are assigned in place, surplus source values are
    /// inserted after them and surplus elements of `self` are dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use fixed_forward_list::ForwardList;
    /// let mut a: ForwardList<_, 4> = [1, 2, 3].into_iter().collect();
    /// let mut b: ForwardList<_, 4> = [7].into_iter().collect();
    ///
    /// b.take_from(&mut a);
    ///
    /// assert!(a.is_empty());
    /// assert!(b.iter().eq([1, 2, 3].iter()));
    /// ```
    pub fn take_from(&mut self, source: &mut Self) {
        let shared = cmp::min(self.len(), source.len());
        let mut tail = BEFORE_BEGIN_USED;

        for _ in 0..shared {
            tail = self.link(tail).into_usize();
            if let Some(value) = source.unlink_after(BEFORE_BEGIN_USED) {
                *self.read_mut_data_in_node_at(tail) = value;
            }
        }

        while let Some(value) = source.unlink_after(BEFORE_BEGIN_USED) {
            match self.allocate() {
                Ok(slot) => {
                    self.link_after(tail, slot, value);
                    tail = slot;
                }
                Err(_) => diag::contract_violation("assignment exceeds the list capacity"),
            }
        }

        while self.unlink_after(tail).is_some() {}
    }

    fn assign_cloned(&mut self, source: &Self)
    where
        T: Clone,
    {
        let shared = cmp::min(self.len(), source.len());
        let mut values = source.iter();
        let mut tail = BEFORE_BEGIN_USED;

        for value in values.by_ref().take(shared) {
            tail = self.link(tail).into_usize();
            self.read_mut_data_in_node_at(tail).clone_from(value);
        }

        for value in values {
            let value = value.clone();
            match self.allocate() {
                Ok(slot) => {
                    self.link_after(tail, slot, value);
                    tail = slot;
                }
                Err(_) => diag::contract_violation("assignment exceeds the list capacity"),
            }
        }

        while self.unlink_after(tail).is_some() {}
    }
}

impl<T, Idx, S> ForwardListInner<T, Idx, S>
where
    Idx: LenType,
    S: ForwardListStorage<T, Idx> + ?Sized,
{
    /// Get a reference to the `ForwardList`, erasing the `N` const-generic.
    pub fn as_view(&self) -> &ForwardListView<T, Idx> {
        S::as_view(self)
    }

    /// Get a mutable reference to the `ForwardList`, erasing the `N` const-generic.
    pub fn as_mut_view(&mut self) -> &mut ForwardListView<T, Idx> {
        S::as_mut_view(self)
    }

    /// Identity checked against the cursors handed to this list.
    fn handle(&self) -> ListHandle {
        match self.handle.get() {
            Some(handle) => handle,
            None => {
                let handle = ListHandle::next();
                self.handle.set(Some(handle));
                handle
            }
        }
    }

    /// Internal access helper
    #[inline(always)]
    fn node_at(&self, index: usize) -> &Node<T, Idx> {
        &self.list.borrow()[index - FIRST_SLOT]
    }

    /// Internal access helper
    #[inline(always)]
    fn node_at_mut(&mut self, index: usize) -> &mut Node<T, Idx> {
        &mut self.list.borrow_mut()[index - FIRST_SLOT]
    }

    /// Internal access helper
    #[inline(always)]
    fn read_data_in_node_at(&self, index: usize) -> &T {
        // Safety: Only called on slots of the element chain, which hold an initialized value.
        unsafe { self.node_at(index).val.assume_init_ref() }
    }

    /// Internal access helper
    #[inline(always)]
    fn read_mut_data_in_node_at(&mut self, index: usize) -> &mut T {
        // Safety: Only called on slots of the element chain, which hold an initialized value.
        unsafe { self.node_at_mut(index).val.assume_init_mut() }
    }

    /// Successor link of any slot, sentinels included.
    #[inline]
    fn link(&self, index: usize) -> Idx {
        match index {
            BEFORE_BEGIN_FREE => self.free,
            BEFORE_BEGIN_USED => self.head,
            _ => self.node_at(index).next,
        }
    }

    #[inline]
    fn set_link(&mut self, index: usize, next: Idx) {
        match index {
            BEFORE_BEGIN_FREE => self.free = next,
            BEFORE_BEGIN_USED => self.head = next,
            _ => self.node_at_mut(index).next = next,
        }
    }

    /// Slot index of the last element, or of the element sentinel when empty.
    fn tail(&self) -> usize {
        let mut tail = BEFORE_BEGIN_USED;
        while let Some(next) = self.link(tail).to_non_max() {
            tail = next;
        }
        tail
    }

    fn is_element(&self, index: usize) -> bool {
        index >= FIRST_SLOT && index - FIRST_SLOT < self.capacity() && self.node_at(index).used
    }

    fn is_anchor(&self, index: usize) -> bool {
        index == BEFORE_BEGIN_USED || self.is_element(index)
    }

    /// Pops the head of the free chain.
    fn allocate(&mut self) -> Result<usize, CapacityError> {
        let slot = self.free.to_non_max().ok_or(CapacityError)?;
        self.free = self.node_at(slot).next;
        Ok(slot)
    }

    /// Pushes `slot` onto the head of the free chain.
    fn deallocate(&mut self, slot: usize) {
        let free = self.free;
        self.node_at_mut(slot).next = free;
        self.free = Idx::from_usize(slot);
    }

    /// Moves `value` into the freshly allocated `slot` and splices it after `after`.
    fn link_after(&mut self, after: usize, slot: usize, value: T) {
        let next = self.link(after);
        let node = self.node_at_mut(slot);
        node.val.write(value);
        node.next = next;
        node.used = true;
        self.set_link(after, Idx::from_usize(slot));
        self.len += Idx::one();
    }

    /// Unsplices the element following `after` and gives its slot back to the free chain.
    fn unlink_after(&mut self, after: usize) -> Option<T> {
        let slot = self.link(after).to_non_max()?;
        let node = self.node_at_mut(slot);
        let next = node.next;
        node.used = false;
        // Safety: `slot` was on the element chain, and is now marked free so it's read only once.
        let value = unsafe { node.val.assume_init_read() };
        self.set_link(after, next);
        self.deallocate(slot);
        self.len -= Idx::one();
        Some(value)
    }

    /// Checks that `cursor` was issued by this list and returns its slot index.
    #[track_caller]
    fn bind<P: Position>(&self, cursor: P) -> usize {
        if cursor.handle() != self.handle() {
            diag::contract_violation("cursor of another list can't be used");
        }
        cursor.index()
    }

    #[track_caller]
    fn bind_anchor<P: Position>(&self, cursor: P) -> usize {
        let index = self.bind(cursor);
        if !self.is_anchor(index) {
            diag::contract_violation("cursor is end() or no longer points to an element");
        }
        index
    }

    #[track_caller]
    fn bind_element<P: Position>(&self, cursor: P) -> usize {
        let index = self.bind(cursor);
        if !self.is_element(index) {
            diag::contract_violation("cursor can't be dereferenced");
        }
        index
    }

    /// Anchor of a removal, `None` for `end()`.
    #[track_caller]
    fn bind_removal<P: Position>(&self, cursor: P) -> Option<usize> {
        if self.bind(cursor) == END {
            diag::warn("cursor is end(), nothing follows it");
            None
        } else {
            Some(self.bind_anchor(cursor))
        }
    }

    fn index_of(link: Idx) -> usize {
        link.to_non_max().unwrap_or(END)
    }

    /// Returns a cursor positioned before the first element.
    ///
    /// It can't be dereferenced, only used as the anchor of insertions and removals.
    pub fn before_begin(&self) -> Cursor {
        Cursor::new(self.handle(), BEFORE_BEGIN_USED)
    }

    /// Read-only version of [`before_begin`](Self::before_begin).
    pub fn cbefore_begin(&self) -> ConstCursor {
        ConstCursor::new(self.handle(), BEFORE_BEGIN_USED)
    }

    /// Returns a cursor to the first element, equal to [`end`](Self::end) when the list is empty.
    pub fn begin(&self) -> Cursor {
        Cursor::new(self.handle(), Self::index_of(self.head))
    }

    /// Read-only version of [`begin`](Self::begin).
    pub fn cbegin(&self) -> ConstCursor {
        ConstCursor::new(self.handle(), Self::index_of(self.head))
    }

    /// Returns the one-past-the-last cursor.
    pub fn end(&self) -> Cursor {
        Cursor::new(self.handle(), END)
    }

    /// Read-only version of [`end`](Self::end).
    pub fn cend(&self) -> ConstCursor {
        ConstCursor::new(self.handle(), END)
    }

    /// Moves `cursor` to the next position.
    ///
    /// Advancing `end()` leaves the cursor unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` comes from another list or points to a removed element.
    ///
    /// # Example
    ///
    /// ```
    /// use fixed_forward_list::ForwardList;
    /// let ll: ForwardList<_, 3> = [1, 2].into_iter().collect();
    ///
    /// let mut pos = ll.cbegin();
    /// assert_eq!(ll.get(pos), &1);
    /// ll.advance(&mut pos);
    /// assert_eq!(ll.get(pos), &2);
    /// ll.advance(&mut pos);
    /// assert!(pos == ll.cend());
    /// ll.advance(&mut pos);
    /// assert!(pos == ll.cend());
    /// ```
    #[track_caller]
    pub fn advance<P: Position>(&self, cursor: &mut P) {
        let index = self.bind(*cursor);
        if index == END {
            diag::warn("cursor is end() and can't be advanced");
            return;
        }
        if !self.is_anchor(index) {
            diag::contract_violation("cursor no longer points to an element");
        }
        cursor.set_index(Self::index_of(self.link(index)));
    }

    /// By value version of [`advance`](Self::advance).
    #[track_caller]
    pub fn next_cursor<P: Position>(&self, mut cursor: P) -> P {
        self.advance(&mut cursor);
        cursor
    }

    /// Returns a reference to the element at `cursor`.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` comes from another list, is `before_begin()`, `end()`, or points to a
    /// removed element.
    #[track_caller]
    pub fn get<P: Position>(&self, cursor: P) -> &T {
        let index = self.bind_element(cursor);
        self.read_data_in_node_at(index)
    }

    /// Returns a mutable reference to the element at `cursor`.
    ///
    /// # Panics
    ///
    /// Same as [`get`](Self::get).
    #[track_caller]
    pub fn get_mut(&mut self, cursor: Cursor) -> &mut T {
        let index = self.bind_element(cursor);
        self.read_mut_data_in_node_at(index)
    }

    /// Constructs an element with `f` right after `pos` and returns a cursor to it.
    ///
    /// Complexity is *O*(1).
    ///
    /// When the list is full `f` is not called and the list is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `pos` comes from another list, is `end()`, or points to a removed element.
    ///
    /// # Example
    ///
    /// ```
    /// use fixed_forward_list::{CapacityError, ForwardList};
    /// let mut ll: ForwardList<_, 1> = ForwardList::new();
    ///
    /// let pos = ll.emplace_after(ll.before_begin(), || [0u8; 4]).unwrap();
    /// assert_eq!(ll.get(pos), &[0; 4]);
    ///
    /// assert_eq!(ll.emplace_after(pos, || [1; 4]), Err(CapacityError));
    /// ```
    #[track_caller]
    pub fn emplace_after<P, F>(&mut self, pos: P, f: F) -> Result<Cursor, CapacityError>
    where
        P: Position,
        F: FnOnce() -> T,
    {
        let after = self.bind_anchor(pos);
        if self.is_full() {
            diag::warn("capacity exhausted");
            return Err(CapacityError);
        }

        let value = f();
        let slot = self.allocate()?;
        self.link_after(after, slot, value);

        Ok(Cursor::new(self.handle(), slot))
    }

    /// Inserts `value` right after `pos` and returns a cursor to it.
    ///
    /// Complexity is *O*(1).
    ///
    /// Returns back the `value` if the list is full.
    ///
    /// # Panics
    ///
    /// Panics if `pos` comes from another list, is `end()`, or points to a removed element.
    ///
    /// # Example
    ///
    /// ```
    /// use fixed_forward_list::ForwardList;
    /// let mut ll: ForwardList<_, 3> = ForwardList::new();
    ///
    /// let mut pos = ll.before_begin();
    /// pos = ll.insert_after(pos, 'a').unwrap();
    /// pos = ll.insert_after(pos, 'b').unwrap();
    /// ll.insert_after(pos, 'c').unwrap();
    ///
    /// assert!(ll.iter().eq(['a', 'b', 'c'].iter()));
    /// assert_eq!(ll.insert_after(pos, 'd'), Err('d'));
    /// ```
    #[track_caller]
    pub fn insert_after<P: Position>(&mut self, pos: P, value: T) -> Result<Cursor, T> {
        let after = self.bind_anchor(pos);
        match self.allocate() {
            Ok(slot) => {
                self.link_after(after, slot, value);
                Ok(Cursor::new(self.handle(), slot))
            }
            Err(_) => {
                diag::warn("capacity exhausted");
                Err(value)
            }
        }
    }

    /// Drops the element following `pos` and returns a cursor to the element that now follows
    /// `pos`.
    ///
    /// Complexity is *O*(1).
    ///
    /// Returns `end()` without touching the list if `pos` is `end()` or nothing follows it.
    ///
    /// # Panics
    ///
    /// Panics if `pos` comes from another list or points to a removed element.
    ///
    /// # Example
    ///
    /// ```
    /// use fixed_forward_list::ForwardList;
    /// let mut ll: ForwardList<_, 3> = [1, 2, 3].into_iter().collect();
    ///
    /// let next = ll.erase_after(ll.begin());
    /// assert_eq!(ll.get(next), &3);
    ///
    /// let next = ll.erase_after(next);
    /// assert!(next == ll.end());
    /// assert!(ll.iter().eq([1, 3].iter()));
    /// ```
    #[track_caller]
    pub fn erase_after<P: Position>(&mut self, pos: P) -> Cursor {
        match self.bind_removal(pos) {
            Some(after) => {
                drop(self.unlink_after(after));
                Cursor::new(self.handle(), Self::index_of(self.link(after)))
            }
            None => self.end(),
        }
    }

    /// Removes the element following `pos` and returns it, or `None` if nothing follows `pos`.
    ///
    /// Complexity is *O*(1).
    ///
    /// # Panics
    ///
    /// Panics if `pos` comes from another list or points to a removed element.
    ///
    /// # Example
    ///
    /// ```
    /// use fixed_forward_list::ForwardList;
    /// let mut ll: ForwardList<_, 3> = [1, 2].into_iter().collect();
    ///
    /// let first = ll.begin();
    /// assert_eq!(ll.remove_after(first), Some(2));
    /// assert_eq!(ll.remove_after(first), None);
    /// ```
    #[track_caller]
    pub fn remove_after<P: Position>(&mut self, pos: P) -> Option<T> {
        let after = self.bind_removal(pos)?;
        self.unlink_after(after)
    }

    /// Constructs an element with `f` at the front of the list.
    ///
    /// When the list is full `f` is not called and the list is left untouched.
    #[track_caller]
    pub fn emplace_front<F>(&mut self, f: F) -> Result<(), CapacityError>
    where
        F: FnOnce() -> T,
    {
        self.emplace_after(self.cbefore_begin(), f).map(drop)
    }

    /// Pushes `value` at the front of the list.
    ///
    /// Complexity is *O*(1).
    ///
    /// Returns back the `value` if the list is full.
    ///
    /// # Example
    ///
    /// ```
    /// use fixed_forward_list::ForwardList;
    /// let mut ll: ForwardList<_, 2> = ForwardList::new();
    ///
    /// ll.push_front(1).unwrap();
    /// ll.push_front(2).unwrap();
    /// assert_eq!(ll.push_front(3), Err(3));
    ///
    /// assert_eq!(ll.front(), &2);
    /// ```
    #[track_caller]
    pub fn push_front(&mut self, value: T) -> Result<(), T> {
        self.insert_after(self.cbefore_begin(), value).map(drop)
    }

    /// Removes the first element and returns it, or `None` if the list is empty.
    ///
    /// Complexity is *O*(1).
    ///
    /// # Example
    ///
    /// ```
    /// use fixed_forward_list::ForwardList;
    /// let mut ll: ForwardList<_, 3> = ForwardList::new();
    ///
    /// ll.push_front(1).unwrap();
    /// ll.push_front(2).unwrap();
    ///
    /// assert_eq!(ll.pop_front(), Some(2));
    /// assert_eq!(ll.pop_front(), Some(1));
    /// assert_eq!(ll.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.unlink_after(BEFORE_BEGIN_USED)
    }

    /// Returns a reference to the first element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[track_caller]
    pub fn front(&self) -> &T {
        match self.head.to_non_max() {
            Some(first) => self.read_data_in_node_at(first),
            None => diag::contract_violation("front() called on an empty list"),
        }
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        match self.head.to_non_max() {
            Some(first) => self.read_mut_data_in_node_at(first),
            None => diag::contract_violation("front_mut() called on an empty list"),
        }
    }

    /// Drops every element, front to back.
    ///
    /// Complexity is *O*(n).
    pub fn clear(&mut self) {
        while self.unlink_after(BEFORE_BEGIN_USED).is_some() {}
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len.into_usize()
    }

    /// Checks if the list is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use fixed_forward_list::ForwardList;
    /// let mut ll: ForwardList<_, 3> = ForwardList::new();
    ///
    /// assert_eq!(ll.is_empty(), true);
    ///
    /// ll.push_front(1).unwrap();
    /// assert_eq!(ll.is_empty(), false);
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == Idx::ZERO
    }

    /// Checks if the list is full.
    ///
    /// # Example
    ///
    /// ```
    /// use fixed_forward_list::ForwardList;
    /// let mut ll: ForwardList<_, 2> = ForwardList::new();
    ///
    /// assert_eq!(ll.is_full(), false);
    ///
    /// ll.push_front(1).unwrap();
    /// assert_eq!(ll.is_full(), false);
    /// ll.push_front(2).unwrap();
    /// assert_eq!(ll.is_full(), true);
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Returns the maximum number of elements the list can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.list.borrow().len()
    }

    /// Same as [`capacity`](Self::capacity).
    #[inline]
    pub fn max_size(&self) -> usize {
        self.capacity()
    }

    /// Get an iterator over the list, front to back.
    ///
    /// # Example
    ///
    /// ```
    /// use fixed_forward_list::ForwardList;
    /// let mut ll: ForwardList<_, 3> = ForwardList::new();
    ///
    /// ll.push_front(1).unwrap();
    /// ll.push_front(2).unwrap();
    ///
    /// let mut iter = ll.iter();
    ///
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T, Idx> {
        Iter {
            list: S::as_view(self),
            index: self.head,
            len: self.len(),
        }
    }

    /// Get an iterator over the list that allows modifying each element.
    ///
    /// # Example
    ///
    /// ```
    /// use fixed_forward_list::ForwardList;
    /// let mut ll: ForwardList<_, 3> = [1, 2, 3].into_iter().collect();
    ///
    /// for v in ll.iter_mut() {
    ///     *v *= 10;
    /// }
    ///
    /// assert!(ll.iter().eq([10, 20, 30].iter()));
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T, Idx> {
        let index = self.head;
        let len = self.len();

        IterMut {
            nodes: self.list.borrow_mut().as_mut_ptr(),
            index,
            len,
            phantom: PhantomData,
        }
    }
}

/// Iterator for the linked list.
pub struct Iter<'a, T, Idx>
where
    Idx: LenType,
{
    list: &'a ForwardListView<T, Idx>,
    index: Idx,
    len: usize,
}

impl<'a, T, Idx> Iterator for Iter<'a, T, Idx>
where
    Idx: LenType,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.index.to_non_max()?;

        self.index = self.list.node_at(index).next;
        self.len -= 1;

        Some(self.list.read_data_in_node_at(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T, Idx: LenType> ExactSizeIterator for Iter<'_, T, Idx> {}
impl<T, Idx: LenType> FusedIterator for Iter<'_, T, Idx> {}

impl<T, Idx: LenType> Clone for Iter<'_, T, Idx> {
    fn clone(&self) -> Self {
        Iter {
            list: self.list,
            index: self.index,
            len: self.len,
        }
    }
}

/// Mutable iterator for the linked list.
pub struct IterMut<'a, T, Idx>
where
    Idx: LenType,
{
    nodes: *mut Node<T, Idx>,
    index: Idx,
    len: usize,
    phantom: PhantomData<&'a mut T>,
}

impl<'a, T, Idx> Iterator for IterMut<'a, T, Idx>
where
    Idx: LenType,
{
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.index.to_non_max()?;

        // Safety: `index` comes from the element chain, so it's in bounds and initialized. The
        // chain has no cycle, every node is handed out at most once.
        let node = unsafe { &mut *self.nodes.add(index - FIRST_SLOT) };
        self.index = node.next;
        self.len -= 1;

        Some(unsafe { node.val.assume_init_mut() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

// Safety: `IterMut` hands out `&mut T`, like `core::slice::IterMut`.
unsafe impl<T: Send, Idx: LenType> Send for IterMut<'_, T, Idx> {}
unsafe impl<T: Sync, Idx: LenType> Sync for IterMut<'_, T, Idx> {}

impl<T, Idx: LenType> ExactSizeIterator for IterMut<'_, T, Idx> {}
impl<T, Idx: LenType> FusedIterator for IterMut<'_, T, Idx> {}

/// An iterator that moves out of a [`ForwardList`], front to back.
///
/// This struct is created by calling the `into_iter` method on [`ForwardList`].
pub struct IntoIter<T, const N: usize, Idx = usize>
where
    Idx: LenType,
{
    list: ForwardList<T, N, Idx>,
}

impl<T, Idx: LenType, const N: usize> Iterator for IntoIter<T, N, Idx> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T, Idx: LenType, const N: usize> ExactSizeIterator for IntoIter<T, N, Idx> {}
impl<T, Idx: LenType, const N: usize> FusedIterator for IntoIter<T, N, Idx> {}

impl<T, Idx: LenType, const N: usize> IntoIterator for ForwardList<T, N, Idx> {
    type Item = T;
    type IntoIter = IntoIter<T, N, Idx>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T, Idx, S> IntoIterator for &'a ForwardListInner<T, Idx, S>
where
    Idx: LenType,
    S: ForwardListStorage<T, Idx> + ?Sized,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, Idx>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, Idx, S> IntoIterator for &'a mut ForwardListInner<T, Idx, S>
where
    Idx: LenType,
    S: ForwardListStorage<T, Idx> + ?Sized,
{
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, Idx>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, Idx, S> Extend<T> for ForwardListInner<T, Idx, S>
where
    Idx: LenType,
    S: ForwardListStorage<T, Idx> + ?Sized,
{
    /// Appends the values after the last element.
    ///
    /// # Panics
    ///
    /// Panics if the list runs out of capacity.
    #[track_caller]
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut tail = self.tail();
        for value in iter {
            match self.allocate() {
                Ok(slot) => {
                    self.link_after(tail, slot, value);
                    tail = slot;
                }
                Err(_) => diag::contract_violation("extend() exceeds the list capacity"),
            }
        }
    }
}

impl<'a, T, Idx, S> Extend<&'a T> for ForwardListInner<T, Idx, S>
where
    T: 'a + Clone,
    Idx: LenType,
    S: ForwardListStorage<T, Idx> + ?Sized,
{
    #[track_caller]
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a T>,
    {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T, Idx: LenType, const N: usize> FromIterator<T> for ForwardList<T, N, Idx> {
    /// # Panics
    ///
    /// Panics if the iterator yields more than `N` values.
    #[track_caller]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, Idx: LenType, const N: usize> Default for ForwardList<T, N, Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Idx: LenType, const N: usize> Clone for ForwardList<T, N, Idx>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut list = Self::new();
        list.assign_cloned(self);
        list
    }

    /// Assigns the elements of `source` to the elements of `self` in place, then inserts or
    /// drops the difference.
    fn clone_from(&mut self, source: &Self) {
        self.assign_cloned(source);
    }
}

impl<T, Idx, S> fmt::Debug for ForwardListInner<T, Idx, S>
where
    T: fmt::Debug,
    Idx: LenType,
    S: ForwardListStorage<T, Idx> + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<A, B, IdxA, IdxB, SA, SB> PartialEq<ForwardListInner<B, IdxB, SB>>
    for ForwardListInner<A, IdxA, SA>
where
    A: PartialEq<B>,
    IdxA: LenType,
    IdxB: LenType,
    SA: ForwardListStorage<A, IdxA> + ?Sized,
    SB: ForwardListStorage<B, IdxB> + ?Sized,
{
    fn eq(&self, other: &ForwardListInner<B, IdxB, SB>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T, Idx, S> Eq for ForwardListInner<T, Idx, S>
where
    T: Eq,
    Idx: LenType,
    S: ForwardListStorage<T, Idx> + ?Sized,
{
}

impl<T, Idx, S> Hash for ForwardListInner<T, Idx, S>
where
    T: Hash,
    Idx: LenType,
    S: ForwardListStorage<T, Idx> + ?Sized,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T, Idx, S> Drop for ForwardListInner<T, Idx, S>
where
    Idx: LenType,
    S: ForwardListStorage<T, Idx> + ?Sized,
{
    fn drop(&mut self) {
        self.clear();
    }
}
