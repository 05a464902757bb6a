use crate::extract::Extract;

/// 丢弃前`count`个元素。
#[derive(Debug, Clone)]
pub struct Skip<E> {
    source: E,
    count: usize,
}

impl<E> Skip<E> {
    pub fn new(source: E, count: usize) -> Self {
        Skip { source, count }
    }
}

impl<E: Extract> Extract for Skip<E> {
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        while self.count != 0 {
            self.count -= 1;
            if !self.source.advance() {
                return false;
            }
        }
        self.source.advance()
    }

    fn get(&mut self) -> &E::Item {
        self.source.get()
    }
}

/// 丢弃开头连续满足条件的元素，之后的元素全部保留。
#[derive(Clone)]
pub struct SkipWhile<E, P> {
    source: E,
    predicate: P,
    skipping: bool,
}

impl<E, P> SkipWhile<E, P> {
    pub fn new(source: E, predicate: P) -> Self {
        SkipWhile { source, predicate, skipping: true }
    }
}

impl<E, P> Extract for SkipWhile<E, P>
where
    E: Extract,
    P: FnMut(&E::Item) -> bool,
{
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        if self.skipping {
            while self.skipping && self.source.advance() {
                self.skipping = (self.predicate)(self.source.get());
            }
            !self.skipping
        } else {
            self.source.advance()
        }
    }

    fn get(&mut self) -> &E::Item {
        self.source.get()
    }
}
