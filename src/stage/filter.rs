use crate::extract::{Extract, current};

/// 仅保留满足条件的元素。
#[derive(Clone)]
pub struct Filter<E, P> {
    source: E,
    predicate: P,
}

impl<E, P> Filter<E, P> {
    pub fn new(source: E, predicate: P) -> Self {
        Filter { source, predicate }
    }
}

impl<E, P> Extract for Filter<E, P>
where
    E: Extract,
    P: FnMut(&E::Item) -> bool,
{
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        while self.source.advance() {
            if (self.predicate)(self.source.get()) {
                return true;
            }
        }
        false
    }

    fn get(&mut self) -> &E::Item {
        self.source.get()
    }
}

/// 过滤并转换：函数返回`None`的元素被丢弃，返回`Some`的元素被解包保留。
#[derive(Clone)]
pub struct FilterMap<E, F, U> {
    source: E,
    f: F,
    slot: Option<U>,
}

impl<E, F, U> FilterMap<E, F, U> {
    pub fn new(source: E, f: F) -> Self {
        FilterMap { source, f, slot: None }
    }
}

impl<E, F, U> Extract for FilterMap<E, F, U>
where
    E: Extract,
    F: FnMut(&E::Item) -> Option<U>,
{
    type Item = U;

    fn advance(&mut self) -> bool {
        while self.source.advance() {
            if let Some(value) = (self.f)(self.source.get()) {
                self.slot = Some(value);
                return true;
            }
        }
        false
    }

    fn get(&mut self) -> &U {
        current(self.slot.as_ref())
    }
}
