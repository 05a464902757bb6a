use ordered_float::OrderedFloat;
use rstest::rstest;
use rstream::generate::{counter, range, repeat};
use rstream::{Enumerated, Integer, StreamErr, from, from_iter};
use std::cell::Cell;
use std::collections::LinkedList;

#[test]
fn test_sum_of_squared_multiples_of_17() {
    let vec = vec![0, 17, 18, 34, 35, 36, 37, 170];
    let sum = from(&vec).filter(|e| *e % 17 == 0).map(|e| *e * *e).fold(0, |acc, e| acc + e);
    assert_eq!(30345, sum);

    let below_100 = range(0, 100, 1).unwrap().filter(|e| e % 17 == 0).map(|e| e * e).fold(0, |acc, e| acc + e);
    assert_eq!(15895, below_100);
}

#[test]
fn test_building_is_lazy() {
    let pulls = Cell::new(0);
    let mut stream = counter(0)
        .inspect(|_| pulls.set(pulls.get() + 1))
        .filter(|n| n % 3 == 0)
        .map(|n| n * 10)
        .skip(1)
        .take(2);
    assert_eq!(0, pulls.get());
    assert_eq!(Some(30), stream.next());
    assert_eq!(4, pulls.get());
    assert_eq!(Some(60), stream.next());
    assert_eq!(None, stream.next());
    assert_eq!(7, pulls.get());
}

#[test]
fn test_nth_consumes_cumulatively() {
    let data = range(0, 99, 1).unwrap().to_vec();
    let mut stream = from(&data);
    assert_eq!(Some(&0), stream.nth(0));
    assert_eq!(Some(&1), stream.nth(0));
    assert_eq!(Some(&12), stream.nth(10));
}

#[test]
fn test_clone_branches_independently() {
    let mut left = counter(0).filter(|n| n % 2 == 0);
    assert_eq!(Some(0), left.next());
    let mut right = left.clone();
    assert_eq!(Some(2), left.next());
    assert_eq!(Some(4), left.next());
    assert_eq!(Some(2), right.next());
    assert_eq!(vec![6, 8], left.take(2).to_vec());
    assert_eq!(vec![4, 6], right.take(2).to_vec());
}

#[test]
fn test_chain_and_zip_take_branches_by_value() {
    let base = counter(1).take(3);
    let chained = base.clone().chain(base.clone().map(|n| n * 10)).to_vec();
    assert_eq!(vec![1, 2, 3, 10, 20, 30], chained);
    let zipped = base.clone().zip(base.skip(1)).to_vec();
    assert_eq!(vec![(1, 2), (2, 3)], zipped);
}

#[test]
fn test_map_reruns_transform_per_read() {
    let calls = Cell::new(0);
    let mut stream = counter(0).map(|n| {
        calls.set(calls.get() + 1);
        n + 1
    });
    assert_eq!(Some(6), stream.nth(5));
    assert_eq!(1, calls.get());
    assert_eq!(Some(7), stream.find(|_| true));
    assert_eq!(2, calls.get());
}

#[test]
fn test_inspect_and_spy_counts() {
    let inspected = Cell::new(0);
    let spied = Cell::new(0);
    let kept = counter(0)
        .take(10)
        .inspect(|_| inspected.set(inspected.get() + 1))
        .spy(|_| spied.set(spied.get() + 1))
        .filter(|n| n % 5 == 0)
        .count();
    assert_eq!(2, kept);
    assert_eq!(10, inspected.get());
    assert_eq!(10, spied.get());
}

#[test]
fn test_purify() {
    let sparse = vec![Some(1), None, Some(3), None, Some(5)];
    assert_eq!(vec![1, 3, 5], from(&sparse).purify().to_vec());
}

#[test]
fn test_flat_map_over_words() {
    let words = vec!["ab".to_string(), "c".to_string()];
    assert_eq!(vec!['a', 'b', 'c'], from(&words).flat_map(|word| word.chars().collect::<Vec<_>>()).to_vec());
}

#[test]
fn test_flat_map_identity_and_flatten_agree() {
    let words: Vec<Vec<char>> = vec![vec!['o', 'n'], vec![], vec!['e']];
    assert_eq!(vec!['o', 'n', 'e'], from_iter(words.clone()).flat_map(|word| word.clone()).to_vec());
    assert_eq!(vec!['o', 'n', 'e'], from_iter(words).flatten().to_vec());
}

#[test]
fn test_enumerate_after_filter() {
    let names = vec!["ann", "bob", "cid"];
    let picked = from_iter(names).filter(|name| !name.starts_with('b')).enumerate_from(1).to_vec();
    assert_eq!(vec![Enumerated::new(1, "ann"), Enumerated::new(2, "cid")], picked);
    assert_eq!("(1, ann)", picked[0].to_string());
}

#[test]
fn test_partition_odd_even() {
    let (odd, even): (LinkedList<Integer>, LinkedList<Integer>) = counter(0).take(7).partition(|n| n % 2 == 1);
    assert_eq!(LinkedList::from([1, 3, 5]), odd);
    assert_eq!(LinkedList::from([0, 2, 4, 6]), even);
}

#[test]
fn test_collect_with_conversion() {
    let doubles = from_iter(vec![1i32, 2, 3]).collect_as::<Vec<f64>, f64>();
    assert_eq!(vec![1.0, 2.0, 3.0], doubles);
}

#[test]
fn test_min_max_by_key_with_floats() {
    let readings = vec![1.5, -0.5, 2.25, -0.5];
    assert_eq!(Some(-0.5), from_iter(readings.clone()).min_by_key(|x| OrderedFloat(*x)));
    assert_eq!(Some(2.25), from_iter(readings).max_by_key(|x| OrderedFloat(*x)));
}

#[test]
fn test_min_by_custom_comparator() {
    let words = vec!["Keep", "Stay", "Calm", "And", "Stream", "On"];
    assert_eq!(Some(&"On"), from(&words).min_by(|l, r| l.len().cmp(&r.len())));
    assert_eq!(Some(&"Stream"), from(&words).max_by(|l, r| l.len().cmp(&r.len())));
}

#[test]
fn test_range_rejects_zero_step() {
    assert_eq!(Some(StreamErr::ZeroStep { start: 3, end: 9 }), range(3, 9, 0).err());
}

#[test]
fn test_try_fold_resumes_after_failure() {
    let mut stream = from_iter(vec!["1", "2", "x", "4"]);
    let parsed = stream.try_fold(0, |acc, s| s.parse::<i32>().map(|n| acc + n));
    assert!(parsed.is_err());
    assert_eq!(Some("4"), stream.next());
}

#[test]
fn test_repeat_with_zip() {
    let labelled = repeat("item").zip(counter(1)).take(2).map(|(label, n)| format!("{label}-{n}")).to_vec();
    assert_eq!(vec!["item-1", "item-2"], labelled);
}

#[rstest]
#[case(0, vec![])]
#[case(2, vec![0, 1])]
#[case(5, vec![0, 1, 2, 3, 4])]
#[case(9, vec![0, 1, 2, 3, 4])]
fn test_take_len(#[case] n: usize, #[case] expected: Vec<Integer>) {
    assert_eq!(expected, range(0, 5, 1).unwrap().take(n).to_vec());
}

#[rstest]
#[case(0, vec![0, 1, 2, 3, 4])]
#[case(3, vec![3, 4])]
#[case(5, vec![])]
#[case(9, vec![])]
fn test_skip_len(#[case] n: usize, #[case] expected: Vec<Integer>) {
    assert_eq!(expected, range(0, 5, 1).unwrap().skip(n).to_vec());
}

#[rstest]
#[case(vec![], true, false)]
#[case(vec![2, 4], true, true)]
#[case(vec![2, 3], false, true)]
#[case(vec![1, 3], false, false)]
fn test_all_any(#[case] data: Vec<Integer>, #[case] all_even: bool, #[case] any_even: bool) {
    assert_eq!(all_even, from(&data).all(|n| *n % 2 == 0));
    assert_eq!(any_even, from(&data).any(|n| *n % 2 == 0));
}

#[test]
fn test_all_on_exhausted_stream_stays_true() {
    let mut stream = from_iter(vec![1, 2]);
    assert_eq!(2, stream.count());
    assert!(stream.all(|_| false));
    assert!(stream.all(|_| false));
    assert!(!stream.any(|_| true));
}

#[rstest]
#[case(vec![], None, None)]
#[case(vec![7], Some(7), Some(7))]
#[case(vec![3, -1, 8, -1], Some(-1), Some(8))]
fn test_min_max(#[case] data: Vec<Integer>, #[case] min: Option<Integer>, #[case] max: Option<Integer>) {
    assert_eq!(min, from_iter(data.clone()).min());
    assert_eq!(max, from_iter(data).max());
}
