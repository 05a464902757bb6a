use crate::extract::Extract;

/// 对每个元素应用转换函数。
///
/// 转换在`get`时执行：同一个元素被多次`get`会多次调用转换函数，未被`get`的元素不会被转换。
#[derive(Clone)]
pub struct Map<E, F, U> {
    source: E,
    f: F,
    slot: Option<U>,
}

impl<E, F, U> Map<E, F, U> {
    pub fn new(source: E, f: F) -> Self {
        Map { source, f, slot: None }
    }
}

impl<E, F, U> Extract for Map<E, F, U>
where
    E: Extract,
    F: FnMut(&E::Item) -> U,
{
    type Item = U;

    fn advance(&mut self) -> bool {
        self.source.advance()
    }

    fn get(&mut self) -> &U {
        let value = (self.f)(self.source.get());
        self.slot.insert(value)
    }
}
