use crate::extract::{Extract, current};
use crate::item::Optional;

/// 丢弃缺失的元素，并把存在的元素解包。
#[derive(Debug, Clone)]
pub struct Purify<E> {
    source: E,
}

impl<E> Purify<E> {
    pub fn new(source: E) -> Self {
        Purify { source }
    }
}

impl<E> Extract for Purify<E>
where
    E: Extract,
    E::Item: Optional,
{
    type Item = <E::Item as Optional>::Value;

    fn advance(&mut self) -> bool {
        while self.source.advance() {
            if self.source.get().present().is_some() {
                return true;
            }
        }
        false
    }

    fn get(&mut self) -> &Self::Item {
        current(self.source.get().present())
    }
}

#[cfg(test)]
mod tests {
    use crate::{from, from_iter};

    #[test]
    fn test_purify() {
        let sparse = vec![Some(1), None, Some(3), None, Some(5), Some(6), Some(7), None, None];
        assert_eq!(vec![1, 3, 5, 6, 7], from(&sparse).purify().to_vec());
        assert_eq!(vec![1, 3, 5, 6, 7], from_iter(sparse).purify().to_vec());
    }

    #[test]
    fn test_purify_all_absent() {
        assert_eq!(0, from_iter(vec![None::<i32>; 4]).purify().count());
    }
}
