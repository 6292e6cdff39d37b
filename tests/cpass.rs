//! Lists of `Send`-able things are `Send`

use fixed_forward_list::{ConstCursor, Cursor, ForwardList, ForwardListView};

#[test]
fn send() {
    struct IsSend;

    unsafe impl Send for IsSend {}

    fn is_send<T>()
    where
        T: Send + ?Sized,
    {
    }

    is_send::<ForwardList<IsSend, 4>>();
    is_send::<ForwardList<IsSend, 4, u8>>();
    is_send::<ForwardListView<IsSend>>();
    is_send::<Cursor>();
    is_send::<ConstCursor>();
}

#[test]
fn moved_list_keeps_its_cursors() {
    let mut list: ForwardList<u8, 4> = ForwardList::new();
    list.push_front(1).unwrap();
    let first = list.begin();

    let moved = std::thread::spawn(move || list).join().unwrap();

    assert_eq!(moved.get(first), &1);
}

#[test]
fn capacity_error_is_matchable() {
    use fixed_forward_list::CapacityError;

    let mut list: ForwardList<u8, 1> = ForwardList::new();
    list.emplace_front(|| 1).unwrap();

    assert_eq!(list.emplace_front(|| 2), Err(CapacityError));
    assert!(matches!(list.emplace_after(list.cbegin(), || 3), Err(CapacityError)));
}
