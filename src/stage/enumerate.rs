use crate::extract::Extract;

/// 为每个元素附加从`start`开始的序号。
///
/// `P`为产出的配对类型，可以是[`Enumerated`](crate::Enumerated)或`(usize, T)`元组。
#[derive(Debug, Clone)]
pub struct Enumerate<E, P> {
    source: E,
    next: Option<usize>,
    index: usize,
    slot: Option<P>,
}

impl<E, P> Enumerate<E, P> {
    pub fn new(source: E, start: usize) -> Self {
        Enumerate { source, next: Some(start), index: start, slot: None }
    }
}

impl<E, P> Extract for Enumerate<E, P>
where
    E: Extract,
    E::Item: Clone,
    P: From<(usize, E::Item)>,
{
    type Item = P;

    fn advance(&mut self) -> bool {
        if !self.source.advance() {
            return false;
        }
        // 序号只在真正产出下一个元素时才会越界
        match self.next {
            Some(index) => {
                self.index = index;
                self.next = index.checked_add(1);
                true
            }
            None => panic!("enumerate index overflowed after {}", self.index),
        }
    }

    fn get(&mut self) -> &P {
        let value = self.source.get().clone();
        self.slot.insert(P::from((self.index, value)))
    }
}

#[cfg(test)]
mod tests {
    use crate::item::Enumerated;
    use crate::{from, from_iter};

    #[test]
    fn test_enumerate() {
        let letters = vec!['a', 'b', 'c'];
        assert_eq!(
            vec![Enumerated::new(0, &'a'), Enumerated::new(1, &'b'), Enumerated::new(2, &'c')],
            from(&letters).enumerate().to_vec()
        );
    }

    #[test]
    fn test_enumerate_from() {
        let indexes = from_iter(vec!['x', 'y']).enumerate_from(5).map(|e| e.index).to_vec();
        assert_eq!(vec![5, 6], indexes);
    }

    #[test]
    fn test_enumerate_tup() {
        assert_eq!(vec![(0, "a"), (1, "b")], from_iter(vec!["a", "b"]).enumerate_tup().to_vec());
        assert_eq!(vec![(3, "a")], from_iter(vec!["a"]).enumerate_tup_from(3).to_vec());
    }

    #[test]
    fn test_enumerate_from_max_index() {
        assert_eq!(vec![(usize::MAX, 'a')], from_iter(vec!['a']).enumerate_tup_from(usize::MAX).to_vec());
        let last = from_iter(vec!['z']).enumerate_from(usize::MAX).to_vec();
        assert_eq!(vec![Enumerated::new(usize::MAX, 'z')], last);
    }

    #[test]
    #[should_panic(expected = "enumerate index overflowed")]
    fn test_enumerate_overflow_on_second_element() {
        from_iter(vec!['a', 'b']).enumerate_tup_from(usize::MAX).count();
    }

    #[test]
    fn test_enumerate_counts_only_passing_elements() {
        let odd = from_iter(1..=6).filter(|n| n % 2 == 1).enumerate_tup().to_vec();
        assert_eq!(vec![(0, 1), (1, 3), (2, 5)], odd);
    }
}
