use crate::webc::error::failed_status;
use crate::webc::{Error, Result};
use bytes::Bytes;
use futures::stream::TryStreamExt;
use futures::{Future, Stream};
use reqwest::{RequestBuilder, Response};
use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};

/// WebStream is the streaming handle returned by the `..._stream` facade methods.
/// - The request is sent on the first poll.
/// - A non-2xx status is yielded as a single `Error::ResponseFailedStatus` item, then the stream ends.
/// - In `Raw` mode, each item is a chunk of the response body as received.
/// - In `Delimiter` mode, each item is one complete UTF-8 message (delimiter excluded, empty messages skipped).
///   A UTF-8 sequence split across chunks is carried over, an invalid (or unterminated) one
///   is yielded as an `Error::ResponseFailedDecode` item.
#[allow(clippy::type_complexity)]
pub struct WebStream {
	stream_mode: StreamMode,
	reqwest_builder: Option<RequestBuilder>,
	response_future: Option<Pin<Box<dyn Future<Output = Result<Response>> + Send>>>,
	bytes_stream: Option<Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>>,
	// If a poll was a partial message, then we keep the previous part
	partial_message: Option<String>,
	// If a poll retrieved multiple messages, we keep them to be sent in the next poll
	remaining_messages: Option<VecDeque<String>>,
	// Trailing bytes of an UTF-8 sequence split across chunks
	undecoded: Vec<u8>,
	// Set after an error item, nothing is polled afterward
	done: bool,
}

#[derive(Debug, Clone, Copy)]
pub enum StreamMode {
	Raw,
	// e.g., `\n` for `text/csv` rows
	Delimiter(&'static str),
}

impl WebStream {
	pub fn new_raw(reqwest_builder: RequestBuilder) -> Self {
		Self::new(reqwest_builder, StreamMode::Raw)
	}

	pub fn new_with_delimiter(reqwest_builder: RequestBuilder, message_delimiter: &'static str) -> Self {
		Self::new(reqwest_builder, StreamMode::Delimiter(message_delimiter))
	}

	fn new(reqwest_builder: RequestBuilder, stream_mode: StreamMode) -> Self {
		Self {
			stream_mode,
			reqwest_builder: Some(reqwest_builder),
			response_future: None,
			bytes_stream: None,
			partial_message: None,
			remaining_messages: None,
			undecoded: Vec::new(),
			done: false,
		}
	}

	pub fn stream_mode(&self) -> StreamMode {
		self.stream_mode
	}
}

impl Stream for WebStream {
	type Item = Result<Bytes>;

	fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
		let this = self.get_mut();

		// -- First, we check if we have any remaining messages to send.
		if let Some(ref mut remaining_messages) = this.remaining_messages
			&& let Some(msg) = remaining_messages.pop_front()
		{
			return Poll::Ready(Some(Ok(Bytes::from(msg))));
		}

		if this.done {
			return Poll::Ready(None);
		}

		// -- Then execute the web poll and processing loop
		loop {
			if let Some(ref mut fut) = this.response_future {
				match Pin::new(fut).poll(cx) {
					Poll::Ready(Ok(response)) => {
						let bytes_stream = response.bytes_stream().map_err(Error::from);
						this.bytes_stream = Some(Box::pin(bytes_stream));
						this.response_future = None;
					}
					Poll::Ready(Err(e)) => {
						this.response_future = None;
						this.done = true;
						return Poll::Ready(Some(Err(e)));
					}
					Poll::Pending => return Poll::Pending,
				}
			}

			if let Some(ref mut stream) = this.bytes_stream {
				match stream.as_mut().poll_next(cx) {
					Poll::Ready(Some(Ok(bytes))) => {
						let StreamMode::Delimiter(delimiter) = this.stream_mode else {
							return Poll::Ready(Some(Ok(bytes)));
						};

						let buff_string = match decode_utf8_chunk(&mut this.undecoded, &bytes) {
							Ok(s) => s,
							Err(e) => {
								this.done = true;
								return Poll::Ready(Some(Err(e)));
							}
						};

						let BuffResponse {
							mut first_message,
							next_messages,
							candidate_message,
						} = process_buff_string_delimited(buff_string, &mut this.partial_message, delimiter);

						// -- Add next_messages as remaining messages if present
						if let Some(next_messages) = next_messages {
							this.remaining_messages.get_or_insert(VecDeque::new()).extend(next_messages);
						}

						// -- If we still have a candidate, it's the partial for the next one
						if let Some(candidate_message) = candidate_message {
							if this.partial_message.is_some() {
								tracing::warn!("WebStream - partial_message is not none");
							}
							this.partial_message = Some(candidate_message);
						}

						// -- If we have a first message, we have to send it.
						if let Some(first_message) = first_message.take() {
							return Poll::Ready(Some(Ok(Bytes::from(first_message))));
						} else {
							continue;
						}
					}
					Poll::Ready(Some(Err(e))) => {
						this.done = true;
						return Poll::Ready(Some(Err(e)));
					}
					Poll::Ready(None) => {
						this.bytes_stream = None;
						if !this.undecoded.is_empty() {
							this.done = true;
							let tail_len = this.undecoded.len();
							this.undecoded.clear();
							return Poll::Ready(Some(Err(Error::ResponseFailedDecode {
								content_type: None,
								cause: format!("incomplete utf-8 byte sequence of {tail_len} byte(s) at end of stream"),
							})));
						}
						if let Some(partial) = this.partial_message.take()
							&& !partial.is_empty()
						{
							return Poll::Ready(Some(Ok(Bytes::from(partial))));
						}
					}
					Poll::Pending => return Poll::Pending,
				}
			}

			if let Some(reqwest_builder) = this.reqwest_builder.take() {
				let fut = async move {
					let response = reqwest_builder.send().await?;
					let status = response.status();
					if !status.is_success() {
						tracing::warn!("watson stream call failed with status {status}");
						let raw_body = response.text().await?;
						return Err(failed_status(status, raw_body));
					}
					Ok::<Response, Error>(response)
				};
				this.response_future = Some(Box::pin(fut));
				continue;
			}

			return Poll::Ready(None);
		}
	}
}

/// Appends `chunk` to `carry` and decodes the longest valid UTF-8 prefix.
/// An incomplete trailing sequence stays in `carry` for the next chunk.
fn decode_utf8_chunk(carry: &mut Vec<u8>, chunk: &[u8]) -> Result<String> {
	carry.extend_from_slice(chunk);
	let valid_up_to = match std::str::from_utf8(carry).map(|_| ()) {
		Ok(()) => carry.len(),
		// `error_len() == None` means the input ended in the middle of a sequence
		Err(err) if err.error_len().is_none() => err.valid_up_to(),
		Err(err) => {
			carry.clear();
			return Err(Error::ResponseFailedDecode {
				content_type: None,
				cause: err.to_string(),
			});
		}
	};
	let valid: Vec<u8> = carry.drain(..valid_up_to).collect();
	String::from_utf8(valid).map_err(|err| Error::ResponseFailedDecode {
		content_type: None,
		cause: err.to_string(),
	})
}

struct BuffResponse {
	first_message: Option<String>,
	next_messages: Option<Vec<String>>,
	candidate_message: Option<String>,
}

/// Process a string buffer for the delimited mode (e.g., CSV rows)
fn process_buff_string_delimited(
	buff_string: String,
	partial_message: &mut Option<String>,
	delimiter: &str,
) -> BuffResponse {
	let mut first_message: Option<String> = None;
	let mut candidate_message: Option<String> = None;
	let mut next_messages: Option<Vec<String>> = None;

	for part in buff_string.split(delimiter) {
		// If we already have a candidate, the candidate becomes the message
		if let Some(message) = candidate_message.take() {
			// Empty messages are skipped
			if !message.is_empty() {
				if first_message.is_none() {
					first_message = Some(message);
				} else {
					next_messages.get_or_insert_with(Vec::new).push(message);
				}
			}
		}

		// And then, this part becomes the candidate
		if let Some(partial) = partial_message.take() {
			candidate_message = Some(format!("{partial}{part}"));
		} else {
			candidate_message = Some(part.to_string());
		}
	}

	BuffResponse {
		first_message,
		next_messages,
		candidate_message,
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_delimited_complete_lines() {
		let mut partial = None;
		let res = process_buff_string_delimited("a,b\n1,2\n".to_string(), &mut partial, "\n");

		assert_eq!(res.first_message.as_deref(), Some("a,b"));
		assert_eq!(res.next_messages, Some(vec!["1,2".to_string()]));
		// trailing empty part is the candidate
		assert_eq!(res.candidate_message.as_deref(), Some(""));
	}

	#[test]
	fn test_delimited_partial_across_chunks() {
		let mut partial = None;
		let res = process_buff_string_delimited("a,b\n1,".to_string(), &mut partial, "\n");
		assert_eq!(res.first_message.as_deref(), Some("a,b"));
		assert_eq!(res.candidate_message.as_deref(), Some("1,"));

		let mut partial = res.candidate_message;
		let res = process_buff_string_delimited("2\n3,4".to_string(), &mut partial, "\n");
		assert_eq!(res.first_message.as_deref(), Some("1,2"));
		assert_eq!(res.next_messages, None);
		assert_eq!(res.candidate_message.as_deref(), Some("3,4"));
		assert_eq!(partial, None);
	}

	#[test]
	fn test_utf8_split_across_chunks() {
		let mut carry = Vec::new();
		let mut partial = None;

		// "é" is 0xC3 0xA9, split over the two chunks
		let text = decode_utf8_chunk(&mut carry, b"name\nJos\xC3").unwrap();
		assert_eq!(text, "name\nJos");
		assert_eq!(carry, vec![0xC3]);
		let res = process_buff_string_delimited(text, &mut partial, "\n");
		assert_eq!(res.first_message.as_deref(), Some("name"));

		let mut partial = res.candidate_message;
		let text = decode_utf8_chunk(&mut carry, b"\xA9\n").unwrap();
		assert_eq!(text, "\u{e9}\n");
		assert!(carry.is_empty());
		let res = process_buff_string_delimited(text, &mut partial, "\n");
		assert_eq!(res.first_message.as_deref(), Some("Jos\u{e9}"));
	}

	#[test]
	fn test_utf8_invalid_sequence() {
		let mut carry = Vec::new();
		let res = decode_utf8_chunk(&mut carry, b"ok\xFFrest");
		assert!(matches!(res, Err(Error::ResponseFailedDecode { .. })));
		assert!(carry.is_empty());
	}

	#[test]
	fn test_delimited_no_delimiter() {
		let mut partial = Some("ab".to_string());
		let res = process_buff_string_delimited("cd".to_string(), &mut partial, "\n");
		assert_eq!(res.first_message, None);
		assert_eq!(res.candidate_message.as_deref(), Some("abcd"));
	}
}

// endregion: --- Tests
