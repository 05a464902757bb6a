use crate::extract::Extract;

/// 先产出第一个流的全部元素，再产出第二个流的元素。
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
    on_first: bool,
}

impl<A, B> Chain<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Chain { first, second, on_first: true }
    }
}

impl<A, B> Extract for Chain<A, B>
where
    A: Extract,
    B: Extract<Item = A::Item>,
{
    type Item = A::Item;

    fn advance(&mut self) -> bool {
        if self.on_first {
            if self.first.advance() {
                return true;
            }
            self.on_first = false;
        }
        self.second.advance()
    }

    fn get(&mut self) -> &A::Item {
        if self.on_first { self.first.get() } else { self.second.get() }
    }
}
