#![no_main]

use libfuzzer_sys::fuzz_target;

use fixed_forward_list::ForwardList;

/// Replays `data` as a sequence of operations, checking the list against a `Vec`.
fn test_ops<const N: usize>(data: &[u8]) {
    let mut list: ForwardList<u8, N, u8> = ForwardList::new();
    let mut model: Vec<u8> = Vec::new();

    for pair in data.chunks_exact(2) {
        let (op, arg) = (pair[0], pair[1]);
        let at = usize::from(arg) % (model.len() + 1);

        let mut pos = list.cbefore_begin();
        for _ in 0..at {
            list.advance(&mut pos);
        }

        match op % 4 {
            0 => match list.insert_after(pos, arg) {
                Ok(_) => model.insert(at, arg),
                Err(v) => assert_eq!((v, model.len()), (arg, N)),
            },
            1 => {
                list.erase_after(pos);
                if at < model.len() {
                    model.remove(at);
                }
            }
            2 => {
                assert_eq!(list.pop_front(), (!model.is_empty()).then(|| model.remove(0)));
            }
            _ => {
                let copy = list.clone();
                assert_eq!(copy, list);
            }
        }

        assert_eq!(list.len(), model.len());
        assert!(list.iter().eq(model.iter()));
    }
}

fuzz_target!(|data: &[u8]| {
    match data.first() {
        None => (),
        Some(n) if n % 3 == 0 => test_ops::<1>(&data[1..]),
        Some(n) if n % 3 == 1 => test_ops::<16>(&data[1..]),
        Some(_) => test_ops::<253>(&data[1..]),
    }
});
