use fixed_forward_list::{ForwardList, ForwardListInner, LenType};
use fixed_forward_list::forward_list::ForwardListStorage;
use proptest::prelude::*;

const CAPACITY: usize = 8;

fn contents<Idx: LenType, S: ForwardListStorage<u32, Idx> + ?Sized>(
    list: &ForwardListInner<u32, Idx, S>,
) -> Vec<u32> {
    list.iter().copied().collect()
}

proptest! {
    #[test]
    fn random_insert_and_erase(
        actions in proptest::collection::vec((any::<bool>(), any::<usize>(), any::<u32>()), 0..64)
    ) {
        let mut list: ForwardList<u32, CAPACITY, u8> = ForwardList::new();
        let mut model: Vec<u32> = Vec::new();

        for (insert, at, value) in actions {
            // Anchor on the sentinel or on one of the elements.
            let at = at % (model.len() + 1);
            let mut pos = list.cbefore_begin();
            for _ in 0..at {
                list.advance(&mut pos);
            }

            if insert {
                let result = list.insert_after(pos, value);
                if model.len() < CAPACITY {
                    let new = result.unwrap();
                    prop_assert_eq!(*list.get(new), value);
                    model.insert(at, value);
                } else {
                    prop_assert_eq!(result.err(), Some(value));
                }
            } else {
                let next = list.erase_after(pos);
                if at < model.len() {
                    model.remove(at);
                }
                if at < model.len() {
                    prop_assert_eq!(*list.get(next), model[at]);
                } else {
                    prop_assert!(next == list.end());
                }
            }

            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.is_empty(), model.is_empty());
            prop_assert_eq!(list.is_full(), model.len() == CAPACITY);
            prop_assert!(list.len() <= list.capacity());
            prop_assert_eq!(contents(&list), model.clone());
        }
    }
}

proptest! {
    #[test]
    fn push_then_clear_frees_every_slot(
        values in proptest::collection::vec(any::<u32>(), 0..=CAPACITY)
    ) {
        let mut list: ForwardList<u32, CAPACITY> = ForwardList::new();
        for value in values.iter().rev() {
            list.push_front(*value).unwrap();
        }
        prop_assert_eq!(contents(&list), values);

        list.clear();
        prop_assert!(list.is_empty());

        for value in 0..CAPACITY as u32 {
            prop_assert!(list.push_front(value).is_ok());
        }
        prop_assert!(list.is_full());
        prop_assert_eq!(list.push_front(0), Err(0));
    }
}

proptest! {
    #[test]
    fn assignments_match_source(
        source in proptest::collection::vec(any::<u32>(), 0..=CAPACITY),
        target in proptest::collection::vec(any::<u32>(), 0..=CAPACITY),
    ) {
        let source: ForwardList<u32, CAPACITY> = source.into_iter().collect();
        let target: ForwardList<u32, CAPACITY> = target.into_iter().collect();

        let mut copy = target.clone();
        copy.clone_from(&source);
        prop_assert_eq!(&copy, &source);

        let mut moved_from = source.clone();
        let mut moved_to = target.clone();
        moved_to.take_from(&mut moved_from);
        prop_assert_eq!(&moved_to, &source);
        prop_assert!(moved_from.is_empty());

        // Both lists keep working on their own storage.
        let pushed = moved_from.push_front(1);
        prop_assert!(pushed.is_ok());
        prop_assert_eq!(&moved_to, &source);
    }
}
