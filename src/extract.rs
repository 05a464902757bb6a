/// 拉取式提取器，流水线中的每个阶段都实现这一最小协议。
///
/// 调用方必须先调用 [`Extract::advance`] 并得到 `true`，才能通过 [`Extract::get`] 读取当前元素。
/// `advance` 一旦返回 `false`，后续调用也都返回 `false`（本库提供的所有阶段均满足）。
pub trait Extract {
    /// 元素类型
    type Item;

    /// 尝试前进到下一个元素，存在新的当前元素时返回 `true`。
    fn advance(&mut self) -> bool;

    /// 获取当前元素。
    ///
    /// 在首次成功的 `advance` 之前调用属于违反协议：可能返回过期元素，也可能直接 panic。
    fn get(&mut self) -> &Self::Item;
}

impl<E: Extract + ?Sized> Extract for &mut E {
    type Item = E::Item;

    #[inline]
    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    #[inline]
    fn get(&mut self) -> &Self::Item {
        (**self).get()
    }
}

impl<E: Extract + ?Sized> Extract for Box<E> {
    type Item = E::Item;

    #[inline]
    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    #[inline]
    fn get(&mut self) -> &Self::Item {
        (**self).get()
    }
}

/// 取出当前元素，为空说明调用方在成功的 `advance` 之前调用了 `get`。
#[inline]
#[track_caller]
pub(crate) fn current<T>(item: Option<T>) -> T {
    match item {
        Some(item) => item,
        None => panic!("`get()` called before a successful `advance()`"),
    }
}
