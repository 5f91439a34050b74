mod common;

use lazy_treap::treap::{Mode, NaturalOrder, TreapList, TreapMultiset};
use lazy_treap::Error;
use rand::{Rng, SeedableRng, XorShiftRng};

const NUM_OF_OPERATIONS: usize = 100_000;

fn seeded_list() -> TreapList<u32, XorShiftRng> {
    TreapList::with_rng(SeedableRng::from_seed([1, 1, 1, 1]))
}

#[test]
fn int_test_list() {
    common::init_logger();
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut list = seeded_list();
    let mut expected = Vec::new();

    for i in 0..NUM_OF_OPERATIONS {
        let index = rng.gen_range(0, i + 1);
        let val = rng.gen::<u32>();

        list.insert(index, val);
        expected.insert(index, val);
    }

    assert_eq!(list.len(), expected.len());
    assert_eq!(
        list.iter().collect::<Vec<&u32>>(),
        expected.iter().collect::<Vec<&u32>>(),
    );

    for i in (0..NUM_OF_OPERATIONS).rev() {
        let index = rng.gen_range(0, i + 1);
        let val = rng.gen::<u32>();

        list.replace(index, val);
        expected[index] = val;

        assert_eq!(list.get(index), Ok(&expected[index]));
        assert_eq!(list.remove(index), Some(expected.remove(index)));
    }
    assert!(list.is_empty());
}

#[test]
fn int_test_list_ranges() {
    common::init_logger();
    let mut rng: XorShiftRng = SeedableRng::from_seed([2, 2, 2, 2]);
    let mut list = seeded_list();
    let mut expected: Vec<u32> = Vec::new();

    for i in 0..2_000 {
        let index = rng.gen_range(0, expected.len() + 1);
        let val = rng.gen_range(0, 1_000);
        list.insert(index, val);
        expected.insert(index, val);

        let start = rng.gen_range(0, expected.len());
        let end = rng.gen_range(start, expected.len());
        match i % 4 {
            0 | 1 => {
                list.reverse_range(start, end).unwrap();
                expected[start..=end].reverse();
            },
            2 => {
                list.assign_range(start, end, val).unwrap();
                for value in &mut expected[start..=end] {
                    *value = val;
                }
            },
            _ => {
                let index = rng.gen_range(0, expected.len());
                assert_eq!(list.remove(index), Some(expected.remove(index)));
            },
        }

        if i % 100 == 0 {
            let mut actual = Vec::new();
            list.for_each(|value| actual.push(*value));
            assert_eq!(actual, expected);
        }
    }

    assert_eq!(list.into_iter().collect::<Vec<u32>>(), expected);
}

#[test]
fn test_scenario() {
    common::init_logger();
    let mut list = TreapList::new();
    list.insert(0, 10);
    list.insert(0, 20);
    list.insert(1, 30);
    assert_eq!(list.iter().cloned().collect::<Vec<u32>>(), vec![20, 30, 10]);

    list.reverse_range(0, 2).unwrap();
    assert_eq!(list.iter().cloned().collect::<Vec<u32>>(), vec![10, 30, 20]);

    list.assign_range(1, 1, 99).unwrap();
    assert_eq!(list.iter().cloned().collect::<Vec<u32>>(), vec![10, 99, 20]);
    assert_eq!(list.get(1), Ok(&99));

    list.remove(0);
    assert_eq!(list.iter().cloned().collect::<Vec<u32>>(), vec![99, 20]);
}

#[test]
fn test_out_of_range_leaves_list_unchanged() {
    common::init_logger();
    let mut list: TreapList<u32> = (0..5).collect();
    list.reverse_range(1, 3).unwrap();

    assert_eq!(list.get(5), Err(Error::OutOfRange { index: 5, len: 5 }));
    assert_eq!(
        list.apply(0, 5, |range| range.len()),
        Err(Error::OutOfRange { index: 5, len: 5 }),
    );
    assert_eq!(
        list.assign_range(7, 2, 0),
        Err(Error::OutOfRange { index: 7, len: 5 }),
    );
    assert_eq!(list.iter().cloned().collect::<Vec<u32>>(), vec![0, 3, 2, 1, 4]);
}

#[test]
fn test_deep_list_drops() {
    let mut list = TreapList::with_rng(ConstantRng);
    for i in 0..200_000u32 {
        list.push_back(i);
    }
    assert_eq!(list.get(123_456), Ok(&123_456));
    list.clear();
    assert!(list.is_empty());

    for i in 0..200_000u32 {
        list.push_back(i);
    }
}

/// Gives every node the same priority, which degrades the treap into a path.
struct ConstantRng;

impl Rng for ConstantRng {
    fn next_u32(&mut self) -> u32 {
        0
    }
}

#[test]
fn test_multiset_scenario() {
    common::init_logger();
    let mut set = TreapMultiset::new(NaturalOrder);
    for key in [1, 5, 3].iter() {
        set.add(*key);
    }
    assert_eq!(set.remove(&3), 1);
    assert!(!set.contains(&3));
    assert_eq!(set.iter().cloned().collect::<Vec<u32>>(), vec![1, 5]);
}

#[test]
fn test_multiset_with_closure() {
    common::init_logger();
    let by_len = |value: &String, key: &usize, mode: Mode| match mode {
        Mode::Greater => value.len() > *key,
        Mode::GreaterOrEqual => value.len() >= *key,
    };
    let mut set = TreapMultiset::new(by_len);
    for word in ["pear", "fig", "banana", "kiwi", "apple"].iter() {
        set.insert(&word.len(), word.to_string());
    }

    assert_eq!(set.count(&4), 2);
    assert_eq!(set.remove(&4), 2);
    assert_eq!(
        set.into_iter().collect::<Vec<String>>(),
        vec!["fig", "apple", "banana"],
    );
}
