//! Push-style adapter from chunked text to per-line delivery.

use crate::line_buffer::LineBuffer;

/// Feeds a privately-owned [`LineBuffer`] and hands each completed line to
/// a consumer.
///
/// Every sink owns its own buffer; two sinks never share partial-line
/// state, so the same stream can be mirrored through independent consumers.
pub struct LineSink<F: FnMut(&str)> {
    buffer: LineBuffer,
    consumer: F,
}

impl<F: FnMut(&str)> LineSink<F> {
    pub fn new(consumer: F) -> Self {
        Self {
            buffer: LineBuffer::new(),
            consumer,
        }
    }

    /// Push a chunk (`Some`) or the end-of-stream marker (`None`).
    ///
    /// The consumer is invoked synchronously, once per completed line, in
    /// input order, before this returns. `None` flushes any unterminated
    /// trailing text through the consumer as well.
    pub fn push(&mut self, chunk: Option<&str>) {
        let lines = match chunk {
            Some(chunk) => self.buffer.feed(chunk),
            None => self.buffer.flush(),
        };
        for line in &lines {
            (self.consumer)(line);
        }
    }
}
