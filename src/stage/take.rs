use crate::extract::Extract;

/// 最多保留`limit`个元素，达到上限后不再拉取上游。
#[derive(Debug, Clone)]
pub struct Take<E> {
    source: E,
    limit: usize,
}

impl<E> Take<E> {
    pub fn new(source: E, limit: usize) -> Self {
        Take { source, limit }
    }
}

impl<E: Extract> Extract for Take<E> {
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        if self.limit != 0 {
            self.limit -= 1;
            self.source.advance()
        } else {
            false
        }
    }

    fn get(&mut self) -> &E::Item {
        self.source.get()
    }
}

/// 保留开头连续满足条件的元素，首个不满足的元素之后结束。
#[derive(Clone)]
pub struct TakeWhile<E, P> {
    source: E,
    predicate: P,
    taking: bool,
}

impl<E, P> TakeWhile<E, P> {
    pub fn new(source: E, predicate: P) -> Self {
        TakeWhile { source, predicate, taking: true }
    }
}

impl<E, P> Extract for TakeWhile<E, P>
where
    E: Extract,
    P: FnMut(&E::Item) -> bool,
{
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        self.taking = self.taking && self.source.advance() && (self.predicate)(self.source.get());
        self.taking
    }

    fn get(&mut self) -> &E::Item {
        self.source.get()
    }
}
