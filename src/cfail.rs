//! Compile fail tests
//!
//! # `Send`-ness
//!
//! Lists of `Send`-able things are `Send`, and so are cursors
//!
//! ```
//! use fixed_forward_list::{ConstCursor, Cursor, ForwardList};
//!
//! struct IsSend;
//!
//! unsafe impl Send for IsSend {}
//!
//! fn is_send<T>() where T: Send {}
//!
//! is_send::<ForwardList<IsSend, 4>>();
//! is_send::<ForwardList<IsSend, 4, u8>>();
//! is_send::<Cursor>();
//! is_send::<ConstCursor>();
//! ```
//!
//! Lists of non-`Send`-able things are *not* `Send`
//!
//! ``` compile_fail
//! use std::marker::PhantomData;
//! use fixed_forward_list::ForwardList;
//!
//! type NotSend = PhantomData<*const ()>;
//!
//! fn is_send<T>() where T: Send {}
//!
//! is_send::<ForwardList<NotSend, 4>>();
//! ```
//!
//! Lists are never `Sync`
//!
//! ``` compile_fail
//! use fixed_forward_list::ForwardList;
//!
//! fn is_sync<T>() where T: Sync {}
//!
//! is_sync::<ForwardList<u8, 4>>();
//! ```
//!
//! # Cursor constness
//!
//! A `ConstCursor` can't be turned back into a `Cursor`
//!
//! ``` compile_fail
//! use fixed_forward_list::{Cursor, ForwardList};
//!
//! let list: ForwardList<u8, 4> = ForwardList::new();
//! let _ = Cursor::from(list.cbegin());
//! ```
//!
//! nor be used to get a mutable reference
//!
//! ``` compile_fail
//! use fixed_forward_list::ForwardList;
//!
//! let mut list: ForwardList<u8, 4> = ForwardList::new();
//! list.push_front(1).unwrap();
//! *list.get_mut(list.cbegin()) = 2;
//! ```
//!
//! # Self assignment
//!
//! ``` compile_fail
//! use fixed_forward_list::ForwardList;
//!
//! let mut list: ForwardList<u8, 4> = ForwardList::new();
//! list.clone_from(&list);
//! ```
//!
//! ``` compile_fail
//! use fixed_forward_list::ForwardList;
//!
//! let mut list: ForwardList<u8, 4> = ForwardList::new();
//! list.take_from(&mut list);
//! ```
//!
//! # Capacity
//!
//! The index type must leave room for the two sentinels and the terminal marker
//!
//! ``` compile_fail
//! use fixed_forward_list::ForwardList;
//!
//! let _list: ForwardList<u8, 254, u8> = ForwardList::new();
//! ```
