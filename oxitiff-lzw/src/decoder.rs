//! LZW decoder (decompression).
//!
//! The decoder is a small state machine over the code stream:
//!
//! ```text
//! AwaitCode ──CLEAR──▶ AfterClear ──literal──▶ Streaming
//!     │                    ▲                       │
//!     └──literal───────────┼───────────────────────┤
//!                          └─────────CLEAR─────────┘
//! ```
//!
//! `AfterClear` emits its code verbatim and defines nothing, because no
//! previous string exists yet. `Streaming` defines one new entry per code.
//! Output never grows past the caller's capacity.

use crate::bitstream_msb::MsbBitReader;
use crate::config::LzwConfig;
use crate::dictionary::LzwDictionary;
use crate::error::{LzwError, Result};
use tracing::trace;

/// Result of decoding one LZW stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Bytes produced, never more than the requested capacity.
    pub data: Vec<u8>,
    /// Decoding stopped at the capacity while the stream still had data.
    pub truncated: bool,
}

impl Decoded {
    /// Number of bytes actually produced.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether nothing was produced.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No code read yet; the table holds only literals.
    AwaitCode,
    /// Just saw CLEAR.
    AfterClear,
    /// At least one string emitted since the last CLEAR.
    Streaming { previous: u16 },
}

/// LZW decoder for decompression.
#[derive(Debug)]
pub struct LzwDecoder {
    /// Dictionary for code lookup.
    dict: LzwDictionary,
}

impl LzwDecoder {
    /// Create a new LZW decoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        let dict = LzwDictionary::new(config)?;
        Ok(Self { dict })
    }

    /// Decode one LZW stream into at most `capacity` bytes.
    ///
    /// Decoding ends at the END code, or when `capacity` bytes have been
    /// produced. In the latter case the next code is inspected: if the
    /// stream ends there (END or clean end of input) the output is
    /// complete, otherwise [`Decoded::truncated`] is set.
    ///
    /// # Errors
    ///
    /// - [`LzwError::InvalidCode`] for a code that is neither defined nor
    ///   the next free code
    /// - [`LzwError::TableFull`] when a 4097th entry would be defined
    ///   without a CLEAR
    /// - [`LzwError::UnexpectedEof`] when the input runs out mid-code
    pub fn decode(&mut self, input: &[u8], capacity: usize) -> Result<Decoded> {
        self.dict.reset();
        let clear_code = self.dict.config().clear_code();
        let eoi_code = self.dict.config().eoi_code();

        let mut reader = MsbBitReader::new(input);
        // Capacity is only an upper bound; reserve for a typical ratio and
        // let `emit` grow the buffer past that.
        let mut output = Vec::with_capacity(capacity.min(input.len().saturating_mul(8)));
        let mut state = State::AwaitCode;
        let mut truncated = false;

        loop {
            if output.len() >= capacity {
                truncated = !self.stream_ends(&mut reader)?;
                break;
            }

            let code = reader.read_bits(self.dict.current_bits())?;

            if code == clear_code {
                self.dict.reset();
                state = State::AfterClear;
                continue;
            }

            if code == eoi_code {
                break;
            }

            let complete = match state {
                State::AwaitCode | State::AfterClear => {
                    if !self.dict.contains(code) {
                        return Err(self.invalid(code, &reader));
                    }
                    self.emit(code, &mut output, capacity)
                }
                State::Streaming { previous } => {
                    let position = reader.bits_read();
                    if self.dict.contains(code) {
                        let byte = self.dict.first_byte(code);
                        self.dict.add(previous, byte, position)?;
                        self.emit(code, &mut output, capacity)
                    } else if code == self.dict.next_code() {
                        // KwKwK: the code being defined is already in use.
                        let byte = self.dict.first_byte(previous);
                        let added = self.dict.add(previous, byte, position)?;
                        self.emit(added, &mut output, capacity)
                    } else {
                        return Err(self.invalid(code, &reader));
                    }
                }
            };

            if !complete {
                truncated = true;
                break;
            }

            state = State::Streaming { previous: code };
        }

        trace!(
            input = input.len(),
            output = output.len(),
            truncated,
            "lzw stream decoded"
        );

        Ok(Decoded {
            data: output,
            truncated,
        })
    }

    /// Append the string for `code`, clipped to `capacity`.
    ///
    /// Returns `false` if the string did not fit entirely.
    fn emit(&self, code: u16, output: &mut Vec<u8>, capacity: usize) -> bool {
        let len = self.dict.string_len(code);
        let start = output.len();
        let take = len.min(capacity - start);
        output.resize(start + take, 0);
        self.dict.copy_string(code, &mut output[start..]);
        take == len
    }

    /// Whether the stream terminates at the reader's position.
    fn stream_ends(&self, reader: &mut MsbBitReader<'_>) -> Result<bool> {
        let config = *self.dict.config();
        let code = match reader.read_bits(self.dict.current_bits()) {
            Ok(code) => code,
            Err(LzwError::UnexpectedEof { .. }) => return Ok(true),
            Err(e) => return Err(e),
        };

        if code == config.eoi_code() {
            return Ok(true);
        }

        // Writers that fill the table on the last code emit CLEAR before END.
        if code == config.clear_code() {
            return match reader.read_bits(config.min_bits) {
                Ok(next) => Ok(next == config.eoi_code()),
                Err(LzwError::UnexpectedEof { .. }) => Ok(true),
                Err(e) => Err(e),
            };
        }

        Ok(false)
    }

    fn invalid(&self, code: u16, reader: &MsbBitReader<'_>) -> LzwError {
        LzwError::InvalidCode {
            code,
            next_code: self.dict.next_code(),
            position: reader.bits_read(),
        }
    }

    /// Reset the decoder to initial state.
    pub fn reset(&mut self) {
        self.dict.reset();
    }
}
