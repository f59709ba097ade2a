//! Incremental SSE decoding for streamed chat completions.

use serde_json::Value;

/// One event of a streamed chat completion.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// A `data:` payload, parsed as JSON (usually a `chat.completion.chunk`).
    Chunk(Value),
    /// The `data: [DONE]` terminator.
    Done,
}

impl StreamEvent {
    /// Text delta of the first choice, if this chunk carries one.
    #[must_use]
    pub fn content_delta(&self) -> Option<&str> {
        match self {
            Self::Chunk(chunk) => chunk
                .pointer("/choices/0/delta/content")
                .and_then(Value::as_str),
            Self::Done => None,
        }
    }

    /// Returns `true` for the terminator event.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Line-buffered SSE decoder.
///
/// Network chunks may end mid-line (or mid-codepoint); incomplete lines are
/// kept until the rest arrives. An event ends at a blank line, and the
/// `data:` lines of one event are joined with `\n` before parsing, so a JSON
/// payload may span several lines.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
    data: Vec<String>,
}

impl SseDecoder {
    /// Create an empty decoder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of the body and return every event it completes.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<StreamEvent> {
        self.buffer.extend_from_slice(bytes);

        let mut events = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            events.extend(self.line(&String::from_utf8_lossy(&line)));
        }
        events
    }

    /// Flush a trailing line and any event not closed by a blank line.
    pub fn finish(&mut self) -> Option<StreamEvent> {
        let line = std::mem::take(&mut self.buffer);
        if let Some(event) = self.line(&String::from_utf8_lossy(&line)) {
            return Some(event);
        }
        self.dispatch()
    }

    fn line(&mut self, line: &str) -> Option<StreamEvent> {
        let line = line.trim();

        // Blank lines end events; ':' starts a comment.
        if line.is_empty() {
            return self.dispatch();
        }
        if line.starts_with(':') {
            return None;
        }

        // `event:`, `id:` and `retry:` carry nothing we use.
        if let Some(data) = line.strip_prefix("data:") {
            self.data.push(data.trim().to_owned());
        }
        None
    }

    fn dispatch(&mut self) -> Option<StreamEvent> {
        if self.data.is_empty() {
            return None;
        }
        let data = std::mem::take(&mut self.data).join("\n");

        if data == "[DONE]" {
            return Some(StreamEvent::Done);
        }

        match serde_json::from_str::<Value>(&data) {
            Ok(chunk) => Some(StreamEvent::Chunk(chunk)),
            Err(e) => {
                tracing::warn!("Failed to parse SSE chunk: {e}, data: {data}");
                None
            }
        }
    }
}

/// Parse SSE events from a complete text buffer.
#[must_use]
pub fn parse_sse_events(text: &str) -> Vec<StreamEvent> {
    let mut decoder = SseDecoder::new();
    let mut events = decoder.feed(text.as_bytes());
    events.extend(decoder.finish());
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO: &str = r#"data: {"id":"chatcmpl-123","object":"chat.completion.chunk","created":1677858242,"model":"gpt-4o","choices":[{"index":0,"delta":{"content":"Hello"},"finish_reason":null}]}"#;

    #[test]
    fn test_parse_text_chunk() {
        let events = parse_sse_events(HELLO);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].content_delta(), Some("Hello"));
    }

    #[test]
    fn test_parse_done() {
        let events = parse_sse_events("data: [DONE]");
        assert_eq!(events, vec![StreamEvent::Done]);
        assert!(events[0].is_done());
    }

    #[test]
    fn test_parse_multiple_lines() {
        let data = r#"data: {"id":"1","object":"chat.completion.chunk","choices":[{"index":0,"delta":{"content":"Hi"}}]}

data: {"id":"1","object":"chat.completion.chunk","choices":[{"index":0,"delta":{"content":" there"}}]}

data: [DONE]"#;

        let events = parse_sse_events(data);
        assert_eq!(events.len(), 3);
        assert_eq!(events[1].content_delta(), Some(" there"));
        assert!(events[2].is_done());
    }

    #[test]
    fn test_skips_comments_and_other_fields() {
        let data = ": keep-alive\nevent: message\nid: 7\ndata: {\"choices\":[]}\n\n";
        let events = parse_sse_events(data);
        assert_eq!(events, vec![StreamEvent::Chunk(serde_json::json!({ "choices": [] }))]);
    }

    #[test]
    fn test_skips_malformed_json() {
        let events = parse_sse_events("data: {not json}\n\ndata: [DONE]\n\n");
        assert_eq!(events, vec![StreamEvent::Done]);
    }

    #[test]
    fn test_reassembles_split_events() {
        let full = format!("{HELLO}\n\ndata: [DONE]\n\n");
        let (head, tail) = full.split_at(37);

        let mut decoder = SseDecoder::new();
        assert!(decoder.feed(head.as_bytes()).is_empty());
        let events = decoder.feed(tail.as_bytes());

        assert_eq!(events, parse_sse_events(&full));
        assert_eq!(events.len(), 2);
        assert!(decoder.finish().is_none());
    }

    #[test]
    fn test_split_inside_multibyte_character() {
        let line = "data: {\"choices\":[{\"delta\":{\"content\":\"héllo\"}}]}\n\n";
        let bytes = line.as_bytes();
        let cut = line.find('é').unwrap_or_default() + 1;

        let mut decoder = SseDecoder::new();
        assert!(decoder.feed(&bytes[..cut]).is_empty());
        let events = decoder.feed(&bytes[cut..]);
        assert_eq!(events[0].content_delta(), Some("héllo"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let events = parse_sse_events("data: {\"a\":1}\r\n\r\ndata: [DONE]\r\n");
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_joins_multiline_data() {
        let events = parse_sse_events("data: {\"choices\":\ndata: []}\n\ndata: [DONE]\n\n");
        assert_eq!(
            events,
            vec![
                StreamEvent::Chunk(serde_json::json!({ "choices": [] })),
                StreamEvent::Done,
            ]
        );
    }

    #[test]
    fn test_event_waits_for_blank_line() {
        let mut decoder = SseDecoder::new();
        assert!(decoder.feed(b"data: {\"a\":\n").is_empty());
        assert!(decoder.feed(b"data: 1}\n").is_empty());
        let events = decoder.feed(b"\n");
        assert_eq!(events, vec![StreamEvent::Chunk(serde_json::json!({ "a": 1 }))]);
    }

    #[test]
    fn test_finish_flushes_unterminated_event() {
        let mut decoder = SseDecoder::new();
        assert!(decoder.feed(b"data: [DONE]\n").is_empty());
        assert_eq!(decoder.finish(), Some(StreamEvent::Done));
        assert!(decoder.finish().is_none());
    }
}
