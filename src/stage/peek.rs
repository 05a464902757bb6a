use crate::extract::Extract;

/// 每次成功前进时观察当前元素，即便该元素之后从未被读取。
#[derive(Clone)]
pub struct Inspect<E, F> {
    source: E,
    f: F,
}

impl<E, F> Inspect<E, F> {
    pub fn new(source: E, f: F) -> Self {
        Inspect { source, f }
    }
}

impl<E, F> Extract for Inspect<E, F>
where
    E: Extract,
    F: FnMut(&E::Item),
{
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        if self.source.advance() {
            (self.f)(self.source.get());
            true
        } else {
            false
        }
    }

    fn get(&mut self) -> &E::Item {
        self.source.get()
    }
}

/// 仅在元素被读取时观察该元素，被跳过的元素不会触发。
#[derive(Clone)]
pub struct Spy<E, F> {
    source: E,
    f: F,
}

impl<E, F> Spy<E, F> {
    pub fn new(source: E, f: F) -> Self {
        Spy { source, f }
    }
}

impl<E, F> Extract for Spy<E, F>
where
    E: Extract,
    F: FnMut(&E::Item),
{
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        self.source.advance()
    }

    fn get(&mut self) -> &E::Item {
        let item = self.source.get();
        (self.f)(item);
        item
    }
}
