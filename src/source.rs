use crate::err::StreamErr;
use crate::extract::{Extract, current};
use crate::Integer;
use std::iter::Fuse;

/// 序列源，在任意迭代器上维护一个游标。
#[derive(Debug, Clone)]
pub struct Sequence<I: Iterator> {
    iter: Fuse<I>,
    current: Option<I::Item>,
}

impl<I: Iterator> Sequence<I> {
    pub fn new(iter: I) -> Self {
        Sequence { iter: iter.fuse(), current: None }
    }
}

impl<I: Iterator> Extract for Sequence<I> {
    type Item = I::Item;

    fn advance(&mut self) -> bool {
        match self.iter.next() {
            Some(item) => {
                self.current = Some(item);
                true
            }
            None => false,
        }
    }

    fn get(&mut self) -> &I::Item {
        current(self.current.as_ref())
    }
}

/// 计数器，从起始值开始逐一递增，到达[`Integer::MAX`]后耗尽。
#[derive(Debug, Clone)]
pub struct Counter {
    next: Option<Integer>,
    current: Option<Integer>,
}

impl Counter {
    pub fn new(from: Integer) -> Self {
        Counter { next: Some(from), current: None }
    }
}

impl Extract for Counter {
    type Item = Integer;

    fn advance(&mut self) -> bool {
        match self.next {
            Some(value) => {
                self.current = Some(value);
                self.next = value.checked_add(1);
                true
            }
            None => false,
        }
    }

    fn get(&mut self) -> &Integer {
        current(self.current.as_ref())
    }
}

/// 范围生成器：`start`包含、`end`不包含，按`step`步进，步长为负时递减。
#[derive(Debug, Clone)]
pub struct Range {
    next: Option<Integer>,
    end: Integer,
    step: Integer,
    current: Option<Integer>,
}

impl Range {
    pub fn new(start: Integer, end: Integer, step: Integer) -> Result<Self, StreamErr> {
        if step == 0 {
            return Err(StreamErr::ZeroStep { start, end });
        }
        Ok(Range { next: Some(start), end, step, current: None })
    }
}

impl Extract for Range {
    type Item = Integer;

    fn advance(&mut self) -> bool {
        match self.next {
            Some(value) if (self.step > 0 && value < self.end) || (self.step < 0 && value > self.end) => {
                self.current = Some(value);
                // 溢出即越过终点
                self.next = value.checked_add(self.step);
                true
            }
            _ => {
                self.next = None;
                false
            }
        }
    }

    fn get(&mut self) -> &Integer {
        current(self.current.as_ref())
    }
}

/// 重复同一个值，`remaining`为`None`时无限重复。
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
    remaining: Option<usize>,
}

impl<T> Repeat<T> {
    pub fn new(value: T, remaining: Option<usize>) -> Self {
        Repeat { value, remaining }
    }
}

impl<T> Extract for Repeat<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        match &mut self.remaining {
            Some(0) => false,
            Some(remaining) => {
                *remaining -= 1;
                true
            }
            None => true,
        }
    }

    fn get(&mut self) -> &T {
        &self.value
    }
}
