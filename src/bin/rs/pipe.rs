use rstream::{Extract, Integer, Stream};

/// 类型擦除后的整数流水线，命令行中的操作逐个包装在它上面。
pub(crate) struct Pipe {
    pub(crate) stream: Stream<Box<dyn Extract<Item = Integer>>>,
}

impl Pipe {
    pub(crate) fn new(stream: Stream<impl Extract<Item = Integer> + 'static>) -> Pipe {
        Pipe { stream: stream.boxed() }
    }

    pub(crate) fn op_skip(self, count: usize) -> Pipe {
        Pipe::new(self.stream.skip(count))
    }

    pub(crate) fn op_take(self, count: usize) -> Pipe {
        Pipe::new(self.stream.take(count))
    }

    pub(crate) fn op_filter(self, f: impl FnMut(&Integer) -> bool + 'static) -> Pipe {
        Pipe::new(self.stream.filter(f))
    }

    pub(crate) fn op_skip_while(self, f: impl FnMut(&Integer) -> bool + 'static) -> Pipe {
        Pipe::new(self.stream.skip_while(f))
    }

    pub(crate) fn op_take_while(self, f: impl FnMut(&Integer) -> bool + 'static) -> Pipe {
        Pipe::new(self.stream.take_while(f))
    }

    pub(crate) fn op_map(self, f: impl FnMut(&Integer) -> Integer + 'static) -> Pipe {
        Pipe::new(self.stream.map(f))
    }

    pub(crate) fn op_inspect(self, f: impl FnMut(&Integer) + 'static) -> Pipe {
        Pipe::new(self.stream.inspect(f))
    }
}
