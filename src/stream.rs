use crate::extract::Extract;
use crate::item::{Enumerated, Optional};
use crate::stage::{
    Chain, Enumerate, Filter, FilterMap, FlatMap, Flatten, Inspect, Map, Purify, Skip, SkipWhile, Spy, Take,
    TakeWhile, Zip,
};
use itertools::Itertools;
use std::cmp::{Ordering, Reverse};
use std::fmt::Display;

/// 流水线：持有一条提取器链，提供中间操作、单步操作和终结操作。
///
/// 中间操作消耗自身并返回包装了新阶段的流水线，不会拉取任何元素；
/// 单步操作和终结操作通过`&mut self`驱动提取器链，流水线之后仍可继续使用。
/// 克隆流水线会深拷贝整条提取器链，两个副本此后互不影响。
#[derive(Debug, Clone)]
pub struct Stream<E> {
    extractor: E,
}

impl<E: Extract> Stream<E> {
    pub fn new(extractor: E) -> Self {
        Stream { extractor }
    }

    pub fn into_extractor(self) -> E {
        self.extractor
    }

    /* **************************************** 中间操作 **************************************** */

    /// 转换每个元素，转换函数在每次读取元素时执行。
    pub fn map<U, F>(self, f: F) -> Stream<Map<E, F, U>>
    where
        F: FnMut(&E::Item) -> U,
    {
        Stream::new(Map::new(self.extractor, f))
    }

    pub fn filter<P>(self, predicate: P) -> Stream<Filter<E, P>>
    where
        P: FnMut(&E::Item) -> bool,
    {
        Stream::new(Filter::new(self.extractor, predicate))
    }

    pub fn filter_map<U, F>(self, f: F) -> Stream<FilterMap<E, F, U>>
    where
        F: FnMut(&E::Item) -> Option<U>,
    {
        Stream::new(FilterMap::new(self.extractor, f))
    }

    pub fn flat_map<U, F>(self, f: F) -> Stream<FlatMap<E, F, U>>
    where
        F: FnMut(&E::Item) -> U,
        U: IntoIterator,
    {
        Stream::new(FlatMap::new(self.extractor, f))
    }

    /// 展开一层嵌套。
    ///
    /// 元素自身必须实现[`IntoIterator`]，`&Vec<T>`可以直接展开，`&String`不行，
    /// 字符串需先用`flat_map(|s| s.chars().collect::<Vec<_>>())`转换。
    pub fn flatten(self) -> Stream<Flatten<E>>
    where
        E::Item: Clone + IntoIterator,
    {
        self.flat_map(Clone::clone as fn(&E::Item) -> E::Item)
    }

    pub fn skip(self, count: usize) -> Stream<Skip<E>> {
        Stream::new(Skip::new(self.extractor, count))
    }

    pub fn skip_while<P>(self, predicate: P) -> Stream<SkipWhile<E, P>>
    where
        P: FnMut(&E::Item) -> bool,
    {
        Stream::new(SkipWhile::new(self.extractor, predicate))
    }

    pub fn take(self, limit: usize) -> Stream<Take<E>> {
        Stream::new(Take::new(self.extractor, limit))
    }

    pub fn take_while<P>(self, predicate: P) -> Stream<TakeWhile<E, P>>
    where
        P: FnMut(&E::Item) -> bool,
    {
        Stream::new(TakeWhile::new(self.extractor, predicate))
    }

    /// 每个经过的元素都会触发一次`f`。
    pub fn inspect<F>(self, f: F) -> Stream<Inspect<E, F>>
    where
        F: FnMut(&E::Item),
    {
        Stream::new(Inspect::new(self.extractor, f))
    }

    /// 每次读取元素都会触发一次`f`，被跳过的元素不会触发。
    pub fn spy<F>(self, f: F) -> Stream<Spy<E, F>>
    where
        F: FnMut(&E::Item),
    {
        Stream::new(Spy::new(self.extractor, f))
    }

    pub fn enumerate(self) -> Stream<Enumerate<E, Enumerated<E::Item>>>
    where
        E::Item: Clone,
    {
        self.enumerate_from(0)
    }

    pub fn enumerate_from(self, start: usize) -> Stream<Enumerate<E, Enumerated<E::Item>>>
    where
        E::Item: Clone,
    {
        Stream::new(Enumerate::new(self.extractor, start))
    }

    pub fn enumerate_tup(self) -> Stream<Enumerate<E, (usize, E::Item)>>
    where
        E::Item: Clone,
    {
        self.enumerate_tup_from(0)
    }

    pub fn enumerate_tup_from(self, start: usize) -> Stream<Enumerate<E, (usize, E::Item)>>
    where
        E::Item: Clone,
    {
        Stream::new(Enumerate::new(self.extractor, start))
    }

    pub fn chain<B>(self, other: Stream<B>) -> Stream<Chain<E, B>>
    where
        B: Extract<Item = E::Item>,
    {
        Stream::new(Chain::new(self.extractor, other.extractor))
    }

    pub fn zip<R>(self, other: Stream<R>) -> Stream<Zip<E, R>>
    where
        R: Extract,
        E::Item: Clone,
        R::Item: Clone,
    {
        Stream::new(Zip::new(self.extractor, other.extractor))
    }

    /// 丢弃缺失的元素，解包其余元素。
    pub fn purify(self) -> Stream<Purify<E>>
    where
        E::Item: Optional,
    {
        Stream::new(Purify::new(self.extractor))
    }

    /// 把`&T`元素克隆为`T`。
    pub fn cloned<'a, T>(self) -> Stream<Map<E, fn(&&'a T) -> T, T>>
    where
        E: Extract<Item = &'a T>,
        T: Clone + 'a,
    {
        self.map(clone_ref as fn(&&'a T) -> T)
    }

    /// 借用当前流水线构建子流水线，子流水线消耗的元素不会再出现在当前流水线中。
    pub fn by_ref(&mut self) -> Stream<&mut E> {
        Stream::new(&mut self.extractor)
    }

    /// 擦除提取器链的具体类型。
    pub fn boxed<'a>(self) -> Stream<Box<dyn Extract<Item = E::Item> + 'a>>
    where
        E: 'a,
    {
        Stream::new(Box::new(self.extractor))
    }

    /* **************************************** 单步操作 **************************************** */

    pub fn next(&mut self) -> Option<E::Item>
    where
        E::Item: Clone,
    {
        if self.extractor.advance() { Some(self.extractor.get().clone()) } else { None }
    }

    /// 丢弃`n`个元素后返回下一个元素，多次调用的消耗是累加的。
    pub fn nth(&mut self, mut n: usize) -> Option<E::Item>
    where
        E::Item: Clone,
    {
        while n != 0 && self.extractor.advance() {
            n -= 1;
        }
        self.next()
    }

    /* **************************************** 终结操作 **************************************** */

    pub fn for_each<F>(&mut self, mut f: F)
    where
        F: FnMut(&E::Item),
    {
        while self.extractor.advance() {
            f(self.extractor.get());
        }
    }

    pub fn count(&mut self) -> usize {
        let mut count = 0;
        while self.extractor.advance() {
            count += 1;
        }
        count
    }

    pub fn any<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&E::Item) -> bool,
    {
        while self.extractor.advance() {
            if predicate(self.extractor.get()) {
                return true;
            }
        }
        false
    }

    /// 已经耗尽的流水线总是返回`true`。
    pub fn all<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&E::Item) -> bool,
    {
        while self.extractor.advance() {
            if !predicate(self.extractor.get()) {
                return false;
            }
        }
        true
    }

    pub fn fold<A, F>(&mut self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &E::Item) -> A,
    {
        let mut acc = init;
        while self.extractor.advance() {
            acc = f(acc, self.extractor.get());
        }
        acc
    }

    /// 遇到第一个错误即停止，流水线停在出错元素之后。
    pub fn try_fold<A, Er, F>(&mut self, init: A, mut f: F) -> Result<A, Er>
    where
        F: FnMut(A, &E::Item) -> Result<A, Er>,
    {
        let mut acc = init;
        while self.extractor.advance() {
            acc = f(acc, self.extractor.get())?;
        }
        Ok(acc)
    }

    pub fn try_for_each<Er, F>(&mut self, mut f: F) -> Result<(), Er>
    where
        F: FnMut(&E::Item) -> Result<(), Er>,
    {
        self.try_fold((), |_, item| f(item))
    }

    pub fn collect<C>(&mut self) -> C
    where
        C: FromIterator<E::Item>,
        E::Item: Clone,
    {
        self.iter().collect()
    }

    /// 收集时把每个元素转换为`U`。
    pub fn collect_as<C, U>(&mut self) -> C
    where
        C: FromIterator<U>,
        U: From<E::Item>,
        E::Item: Clone,
    {
        self.iter().map(U::from).collect()
    }

    pub fn to_vec(&mut self) -> Vec<E::Item>
    where
        E::Item: Clone,
    {
        self.collect()
    }

    /// 按条件拆分为（满足的，不满足的）两部分，各自保持原有顺序。
    pub fn partition<C, P>(&mut self, mut predicate: P) -> (C, C)
    where
        C: Default + Extend<E::Item>,
        P: FnMut(&E::Item) -> bool,
        E::Item: Clone,
    {
        let mut matched = C::default();
        let mut rest = C::default();
        while self.extractor.advance() {
            let item = self.extractor.get();
            if predicate(item) {
                matched.extend(Some(item.clone()));
            } else {
                rest.extend(Some(item.clone()));
            }
        }
        (matched, rest)
    }

    pub fn min(&mut self) -> Option<E::Item>
    where
        E::Item: Ord + Clone,
    {
        self.min_by(|left, right| left.cmp(right))
    }

    pub fn max(&mut self) -> Option<E::Item>
    where
        E::Item: Ord + Clone,
    {
        self.max_by(|left, right| left.cmp(right))
    }

    /// 比较结果相等时保留先出现的元素。
    pub fn min_by<F>(&mut self, mut compare: F) -> Option<E::Item>
    where
        F: FnMut(&E::Item, &E::Item) -> Ordering,
        E::Item: Clone,
    {
        let mut best: Option<E::Item> = None;
        while self.extractor.advance() {
            let item = self.extractor.get();
            let better = match &best {
                Some(best) => compare(item, best) == Ordering::Less,
                None => true,
            };
            if better {
                best = Some(item.clone());
            }
        }
        best
    }

    pub fn max_by<F>(&mut self, mut compare: F) -> Option<E::Item>
    where
        F: FnMut(&E::Item, &E::Item) -> Ordering,
        E::Item: Clone,
    {
        self.min_by(|left, right| compare(right, left))
    }

    pub fn min_by_key<K, F>(&mut self, mut key: F) -> Option<E::Item>
    where
        K: Ord,
        F: FnMut(&E::Item) -> K,
        E::Item: Clone,
    {
        let mut best: Option<(K, E::Item)> = None;
        while self.extractor.advance() {
            let item = self.extractor.get();
            let item_key = key(item);
            if best.as_ref().is_none_or(|(best_key, _)| item_key < *best_key) {
                best = Some((item_key, item.clone()));
            }
        }
        best.map(|(_, item)| item)
    }

    pub fn max_by_key<K, F>(&mut self, mut key: F) -> Option<E::Item>
    where
        K: Ord,
        F: FnMut(&E::Item) -> K,
        E::Item: Clone,
    {
        self.min_by_key(|item| Reverse(key(item)))
    }

    pub fn find<P>(&mut self, mut predicate: P) -> Option<E::Item>
    where
        P: FnMut(&E::Item) -> bool,
        E::Item: Clone,
    {
        while self.extractor.advance() {
            let item = self.extractor.get();
            if predicate(item) {
                return Some(item.clone());
            }
        }
        None
    }

    /// 返回首个满足条件的元素的位置，从1开始计数。
    pub fn position<P>(&mut self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&E::Item) -> bool,
    {
        let mut advances = 0;
        while self.extractor.advance() {
            advances += 1;
            if predicate(self.extractor.get()) {
                return Some(advances);
            }
        }
        None
    }

    pub fn last(&mut self) -> Option<E::Item>
    where
        E::Item: Clone,
    {
        let mut last = None;
        while self.extractor.advance() {
            last = Some(self.extractor.get().clone());
        }
        last
    }

    pub fn join(&mut self, separator: &str) -> String
    where
        E::Item: Display + Clone,
    {
        self.iter().join(separator)
    }

    /// 以标准迭代器的方式借用流水线。
    pub fn iter(&mut self) -> IntoIter<&mut E> {
        IntoIter { extractor: &mut self.extractor }
    }
}

fn clone_ref<T: Clone>(item: &&T) -> T {
    (*item).clone()
}

/// 流水线到[`Iterator`]的桥接，产出克隆的元素。
#[derive(Debug, Clone)]
pub struct IntoIter<E> {
    extractor: E,
}

impl<E> Iterator for IntoIter<E>
where
    E: Extract,
    E::Item: Clone,
{
    type Item = E::Item;

    fn next(&mut self) -> Option<E::Item> {
        if self.extractor.advance() { Some(self.extractor.get().clone()) } else { None }
    }
}

impl<E> IntoIterator for Stream<E>
where
    E: Extract,
    E::Item: Clone,
{
    type Item = E::Item;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> IntoIter<E> {
        IntoIter { extractor: self.extractor }
    }
}

#[cfg(test)]
mod tests {
    use crate::generate::counter;
    use crate::{StreamErr, from, from_iter};
    use std::collections::{BTreeSet, LinkedList};

    #[test]
    fn test_next() {
        let mut stream = from_iter(vec![1, 2]);
        assert_eq!(Some(1), stream.next());
        assert_eq!(Some(2), stream.next());
        assert_eq!(None, stream.next());
        assert_eq!(None, stream.next());
    }

    #[test]
    fn test_nth_is_cumulative() {
        let mut stream = counter(0);
        assert_eq!(Some(12), stream.nth(12));
        assert_eq!(Some(33), stream.nth(20));
        assert_eq!(Some(34), stream.nth(0));
        assert_eq!(None, from_iter(vec![1, 2]).nth(2));
    }

    #[test]
    fn test_count() {
        assert_eq!(100, counter(0).take(100).count());
        assert_eq!(0, from_iter(Vec::<u8>::new()).count());
    }

    #[test]
    fn test_any_all() {
        let mut stream = from_iter(vec![1, 2, 3]);
        assert!(stream.any(|n| *n == 2));
        assert!(!stream.any(|n| *n == 1));
        assert!(!stream.any(|_| true));

        let mut stream = from_iter(vec![2, 4, 5, 6]);
        assert!(!stream.all(|n| n % 2 == 0));
        assert!(stream.all(|n| n % 2 == 0));
        assert!(stream.all(|_| false));
        assert!(stream.all(|_| false));
    }

    #[test]
    fn test_fold() {
        let sum = counter(0).take(99).filter(|n| n % 17 == 0).map(|n| n * n).fold(0, |acc, n| acc + n);
        assert_eq!(15895, sum);
        let text = from_iter(vec!['a', 'b']).fold(String::new(), |mut acc, c| {
            acc.push(*c);
            acc
        });
        assert_eq!("ab", text);
    }

    #[test]
    fn test_try_fold_stops_at_first_err() {
        let mut stream = from_iter(vec![1, 2, -3, 4, 5]);
        let sum = stream.try_fold(0, |acc, n| if *n < 0 { Err(*n) } else { Ok(acc + n) });
        assert_eq!(Err(-3), sum);
        assert_eq!(Some(4), stream.next());

        let mut seen = Vec::new();
        let res: Result<(), StreamErr> = from_iter(vec![1, 2]).try_for_each(|n| {
            seen.push(*n);
            Ok(())
        });
        assert_eq!(Ok(()), res);
        assert_eq!(vec![1, 2], seen);
    }

    #[test]
    fn test_collect() {
        let data = vec![3, 1, 3, 2];
        assert_eq!(BTreeSet::from([1, 2, 3]), from_iter(data.clone()).collect::<BTreeSet<_>>());
        let floats = from_iter(data).collect_as::<LinkedList<f64>, f64>();
        assert_eq!(LinkedList::from([3.0, 1.0, 3.0, 2.0]), floats);
    }

    #[test]
    fn test_partition() {
        let (odd, even): (Vec<_>, Vec<_>) = counter(1).take(6).partition(|n| n % 2 == 1);
        assert_eq!(vec![1, 3, 5], odd);
        assert_eq!(vec![2, 4, 6], even);
    }

    #[test]
    fn test_min_max() {
        let data = vec![4, 1, 7, 1, 7];
        assert_eq!(Some(&1), from(&data).min());
        assert_eq!(Some(&7), from(&data).max());
        assert_eq!(None, from_iter(Vec::<i32>::new()).min());
        assert_eq!(None, from_iter(Vec::<i32>::new()).max());
    }

    #[test]
    fn test_min_max_by_keep_earliest() {
        let words = vec!["Keep", "Stay", "go", "Slow", "Stop"];
        assert_eq!(Some("go"), from_iter(words.clone()).min_by(|l, r| l.len().cmp(&r.len())));
        assert_eq!(Some("Keep"), from_iter(words.clone()).max_by(|l, r| l.len().cmp(&r.len())));
        assert_eq!(Some("go"), from_iter(words.clone()).min_by_key(|w| w.len()));
        assert_eq!(Some("Keep"), from_iter(words).max_by_key(|w| w.len()));
    }

    #[test]
    fn test_find_position() {
        assert_eq!(Some(34), counter(1).find(|n| n % 17 == 0 && n % 2 == 0));
        assert_eq!(Some(100), counter(0).take(200).position(|n| *n == 99));
        assert_eq!(Some(1), counter(5).position(|_| true));
        assert_eq!(None, counter(0).take(10).position(|n| *n > 10));
    }

    #[test]
    fn test_last() {
        assert_eq!(Some(9), counter(0).take(10).last());
        assert_eq!(None, from_iter(Vec::<i32>::new()).last());
    }

    #[test]
    fn test_join() {
        assert_eq!("1, 2, 3", counter(1).take(3).join(", "));
        assert_eq!("", from_iter(Vec::<i32>::new()).join(","));
    }

    #[test]
    fn test_by_ref() {
        let mut stream = counter(0);
        assert_eq!(vec![0, 1, 2], stream.by_ref().take(3).to_vec());
        assert_eq!(Some(3), stream.next());
    }

    #[test]
    fn test_boxed() {
        let mut stream = counter(0).filter(|n| n % 2 == 0).boxed();
        assert_eq!(Some(0), stream.next());
        stream = stream.skip(1).boxed();
        assert_eq!(Some(4), stream.next());
    }

    #[test]
    fn test_into_iter() {
        let mut total = 0;
        for n in counter(1).take(4) {
            total += n;
        }
        assert_eq!(10, total);

        let mut stream = counter(0);
        let firsts: Vec<_> = stream.iter().take(2).collect();
        assert_eq!(vec![0, 1], firsts);
        assert_eq!(Some(2), stream.next());
    }
}
