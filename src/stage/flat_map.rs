use crate::extract::{Extract, current};
use crate::source::Sequence;

/// 把每个元素映射为一个可迭代集合，并依次产出集合中的元素，空集合被直接跳过。
pub struct FlatMap<E, F, U: IntoIterator> {
    source: E,
    f: F,
    inner: Option<Sequence<U::IntoIter>>,
}

/// 展开一层嵌套，相当于以克隆函数为转换的[`FlatMap`]。
pub type Flatten<E> = FlatMap<E, fn(&<E as Extract>::Item) -> <E as Extract>::Item, <E as Extract>::Item>;

impl<E, F, U: IntoIterator> FlatMap<E, F, U> {
    pub fn new(source: E, f: F) -> Self {
        FlatMap { source, f, inner: None }
    }
}

impl<E, F, U> Clone for FlatMap<E, F, U>
where
    E: Clone,
    F: Clone,
    U: IntoIterator,
    Sequence<U::IntoIter>: Clone,
{
    fn clone(&self) -> Self {
        FlatMap { source: self.source.clone(), f: self.f.clone(), inner: self.inner.clone() }
    }
}

impl<E, F, U> Extract for FlatMap<E, F, U>
where
    E: Extract,
    F: FnMut(&E::Item) -> U,
    U: IntoIterator,
{
    type Item = U::Item;

    fn advance(&mut self) -> bool {
        loop {
            if let Some(inner) = &mut self.inner
                && inner.advance()
            {
                return true;
            }
            if !self.source.advance() {
                return false;
            }
            self.inner = Some(Sequence::new((self.f)(self.source.get()).into_iter()));
        }
    }

    fn get(&mut self) -> &U::Item {
        current(self.inner.as_mut()).get()
    }
}
