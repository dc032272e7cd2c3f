//! LZW dictionary (code table) arena.
//!
//! Every entry is stored as a link to its prefix code plus one suffix
//! byte, so the table never holds more than `max_codes` fixed-size
//! records no matter how long the strings grow. A string is materialised
//! by walking the prefix links from its last byte back to its first.

use crate::config::LzwConfig;
use crate::error::{LzwError, Result};
use std::collections::HashMap;

/// One code table record.
#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    /// Code of the string minus its last byte (unused for literals).
    prefix: u16,
    /// Last byte of the string.
    suffix: u8,
    /// First byte of the string.
    first: u8,
    /// Length of the string in bytes (0 for the clear/end placeholders).
    len: u16,
}

/// LZW dictionary for decoding, with a reverse index for encoding.
#[derive(Debug)]
pub struct LzwDictionary {
    /// Code table, indexed by code.
    slots: Vec<Slot>,
    /// Reverse lookup: (prefix code, next byte) -> code (encoding only).
    reverse: HashMap<(u16, u8), u16>,
    /// Configuration.
    config: LzwConfig,
    /// Next available code.
    next_code: u16,
}

impl LzwDictionary {
    /// Create a new LZW dictionary with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        if !config.is_valid() {
            return Err(LzwError::InvalidBitWidth(config.min_bits));
        }

        let mut dict = Self {
            slots: Vec::with_capacity(config.max_codes()),
            reverse: HashMap::new(),
            config,
            next_code: 0,
        };

        dict.reset();
        Ok(dict)
    }

    /// Reset the dictionary to the literal entries.
    pub fn reset(&mut self) {
        self.slots.clear();
        self.reverse.clear();

        let clear_code = self.config.clear_code();
        for i in 0..clear_code {
            let byte = i as u8;
            self.slots.push(Slot {
                prefix: 0,
                suffix: byte,
                first: byte,
                len: 1,
            });
        }

        // Placeholders for the clear and end codes.
        self.slots.push(Slot::default());
        self.slots.push(Slot::default());

        self.next_code = self.config.first_code();
    }

    /// Whether `code` currently maps to a string.
    #[inline]
    pub fn contains(&self, code: u16) -> bool {
        code < self.next_code && self.slots[code as usize].len > 0
    }

    /// Length of the string for a defined code.
    #[inline]
    pub fn string_len(&self, code: u16) -> usize {
        self.slots[code as usize].len as usize
    }

    /// First byte of the string for a defined code.
    #[inline]
    pub fn first_byte(&self, code: u16) -> u8 {
        self.slots[code as usize].first
    }

    /// Copy the string for `code` into `dest`.
    ///
    /// When `dest` is shorter than the string only its leading
    /// `dest.len()` bytes are written.
    pub fn copy_string(&self, code: u16, dest: &mut [u8]) {
        let mut slot = self.slots[code as usize];
        let mut idx = slot.len as usize;
        while idx > 0 {
            idx -= 1;
            if idx < dest.len() {
                dest[idx] = slot.suffix;
            }
            if idx > 0 {
                slot = self.slots[slot.prefix as usize];
            }
        }
    }

    /// Define the next code as the string of `prefix` followed by `byte`.
    ///
    /// `prefix` must be a defined code. Returns the new code, or an error
    /// if the table already holds `max_codes` entries.
    pub fn add(&mut self, prefix: u16, byte: u8, position: u64) -> Result<u16> {
        if self.is_full() {
            return Err(LzwError::TableFull {
                max_codes: self.config.max_codes(),
                position,
            });
        }

        let parent = self.slots[prefix as usize];
        let code = self.next_code;
        self.slots.push(Slot {
            prefix,
            suffix: byte,
            first: parent.first,
            len: parent.len + 1,
        });
        self.next_code += 1;

        Ok(code)
    }

    /// Define the next code and index it for [`find_code`](Self::find_code).
    pub fn add_indexed(&mut self, prefix: u16, byte: u8) -> Result<u16> {
        let code = self.add(prefix, byte, 0)?;
        self.reverse.insert((prefix, byte), code);
        Ok(code)
    }

    /// Find the code for `prefix` extended by `byte` (for encoding).
    pub fn find_code(&self, prefix: u16, byte: u8) -> Option<u16> {
        self.reverse.get(&(prefix, byte)).copied()
    }

    /// Check if the dictionary is full.
    pub fn is_full(&self) -> bool {
        self.next_code as usize >= self.config.max_codes()
    }

    /// Number of codes defined so far, placeholders included.
    pub fn next_code(&self) -> u16 {
        self.next_code
    }

    /// Width of the next code the decoder reads.
    pub fn current_bits(&self) -> u8 {
        self.config.code_width(self.next_code as usize)
    }

    /// Get the configuration.
    pub fn config(&self) -> &LzwConfig {
        &self.config
    }
}
