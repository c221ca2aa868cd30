//! Resumable line splitting over arbitrarily-chunked text.

/// Reassembles complete lines from a stream of text chunks.
///
/// Chunk boundaries carry no meaning: a line may span any number of chunks,
/// and one chunk may complete any number of lines. The buffer holds the
/// unterminated prefix seen since the last completed line; [`flush`] drains
/// whatever never got a terminating newline.
///
/// [`flush`]: LineBuffer::flush
#[derive(Debug, Default)]
pub struct LineBuffer {
    partial: String,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk, returning every line it completed, in input order.
    ///
    /// A line is complete the instant its newline is observed, even as the
    /// chunk's last character; the returned content excludes the newline.
    /// A chunk without a newline returns nothing and only grows the partial.
    pub fn feed(&mut self, chunk: &str) -> Vec<String> {
        let Some((terminated, tail)) = chunk.rsplit_once('\n') else {
            self.partial.push_str(chunk);
            return Vec::new();
        };

        let mut segments = terminated.split('\n');
        let mut lines = Vec::new();
        if let Some(first) = segments.next() {
            self.partial.push_str(first);
            lines.push(std::mem::take(&mut self.partial));
        }
        lines.extend(segments.map(str::to_string));
        self.partial = tail.to_string();
        lines
    }

    /// Flush the unterminated remainder at end of stream.
    ///
    /// Non-empty trailing text comes back as a single line with a `%`
    /// marker appended; an empty buffer flushes to nothing. The buffer is
    /// reset and can be fed again afterwards.
    pub fn flush(&mut self) -> Vec<String> {
        if self.partial.is_empty() {
            return Vec::new();
        }
        let mut line = std::mem::take(&mut self.partial);
        line.push('%');
        vec![line]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_then_flush() {
        let mut buffer = LineBuffer::new();
        assert_eq!(buffer.feed("a\nb\nc"), vec!["a", "b"]);
        assert_eq!(buffer.flush(), vec!["c%"]);
    }

    #[test]
    fn test_line_spanning_chunks() {
        let mut buffer = LineBuffer::new();
        assert!(buffer.feed("line1").is_empty());
        assert_eq!(buffer.feed("line2\n"), vec!["line1line2"]);
    }

    #[test]
    fn test_line_spanning_many_chunks() {
        let mut buffer = LineBuffer::new();
        assert!(buffer.feed("a").is_empty());
        assert!(buffer.feed("b").is_empty());
        assert!(buffer.feed("c").is_empty());
        assert_eq!(buffer.feed("\n"), vec!["abc"]);
    }

    #[test]
    fn test_empty_chunk() {
        let mut buffer = LineBuffer::new();
        assert!(buffer.feed("").is_empty());
        assert_eq!(buffer.feed("x\n"), vec!["x"]);
    }

    #[test]
    fn test_newline_only_chunk() {
        let mut buffer = LineBuffer::new();
        assert_eq!(buffer.feed("\n"), vec![""]);
    }

    #[test]
    fn test_consecutive_newlines_produce_empty_lines() {
        let mut buffer = LineBuffer::new();
        assert_eq!(buffer.feed("a\n\n\nb"), vec!["a", "", ""]);
        assert_eq!(buffer.flush(), vec!["b%"]);
    }

    #[test]
    fn test_flush_empty_buffer() {
        let mut buffer = LineBuffer::new();
        assert!(buffer.flush().is_empty());
    }

    #[test]
    fn test_flush_after_terminated_line_is_empty() {
        let mut buffer = LineBuffer::new();
        assert_eq!(buffer.feed("x\n"), vec!["x"]);
        assert!(buffer.flush().is_empty());
    }

    #[test]
    fn test_reusable_after_flush() {
        let mut buffer = LineBuffer::new();
        assert!(buffer.feed("tail").is_empty());
        assert_eq!(buffer.flush(), vec!["tail%"]);
        assert_eq!(buffer.feed("next\n"), vec!["next"]);
        assert!(buffer.flush().is_empty());
    }

    #[test]
    fn test_chunked_input_reconstructs() {
        // 4 newlines not at the very end -> 4 lines on feed, 1 more on flush
        let chunks = ["first ", "line\nsec", "ond\n\nthi", "rd\ntrail", "ing"];
        let mut buffer = LineBuffer::new();
        let mut lines = Vec::new();
        for chunk in chunks {
            lines.extend(buffer.feed(chunk));
        }
        assert_eq!(lines, vec!["first line", "second", "", "third"]);
        assert_eq!(buffer.flush(), vec!["trailing%"]);
        assert_eq!(lines.join("\n") + "\ntrailing", chunks.concat());
    }
}
