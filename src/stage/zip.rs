use crate::extract::Extract;

/// 把两个流的元素按位置配对，较短的一方耗尽时结束。
#[derive(Debug, Clone)]
pub struct Zip<L: Extract, R: Extract> {
    left: L,
    right: R,
    slot: Option<(L::Item, R::Item)>,
}

impl<L: Extract, R: Extract> Zip<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Zip { left, right, slot: None }
    }
}

impl<L, R> Extract for Zip<L, R>
where
    L: Extract,
    R: Extract,
    L::Item: Clone,
    R::Item: Clone,
{
    type Item = (L::Item, R::Item);

    fn advance(&mut self) -> bool {
        // 两侧都要前进，保持彼此的游标同步
        let left = self.left.advance();
        let right = self.right.advance();
        left && right
    }

    fn get(&mut self) -> &(L::Item, R::Item) {
        let pair = (self.left.get().clone(), self.right.get().clone());
        self.slot.insert(pair)
    }
}
