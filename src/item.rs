use std::fmt::{Display, Formatter};

/// 带序号的元素，由`enumerate`系列操作产生。
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub struct Enumerated<T> {
    pub index: usize,
    pub value: T,
}

impl<T> Enumerated<T> {
    pub fn new(index: usize, value: T) -> Self {
        Enumerated { index, value }
    }
}

impl<T> From<(usize, T)> for Enumerated<T> {
    fn from((index, value): (usize, T)) -> Self {
        Enumerated { index, value }
    }
}

impl<T> From<Enumerated<T>> for (usize, T) {
    fn from(enumerated: Enumerated<T>) -> Self {
        (enumerated.index, enumerated.value)
    }
}

impl<T: Display> Display for Enumerated<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.index, self.value)
    }
}

/// 可能缺失的值，`purify`据此丢弃缺失的元素并解包其余元素。
pub trait Optional {
    type Value;

    fn present(&self) -> Option<&Self::Value>;
}

impl<T> Optional for Option<T> {
    type Value = T;

    #[inline]
    fn present(&self) -> Option<&T> {
        self.as_ref()
    }
}

impl<O: Optional + ?Sized> Optional for &O {
    type Value = O::Value;

    #[inline]
    fn present(&self) -> Option<&O::Value> {
        (**self).present()
    }
}
