// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Length-prefixed byte strings: `String`, `ByteString` and `XmlElement`.
//!
//! All three share one representation: an optional exclusively-owned byte
//! buffer. `None` is the null string (wire length -1), an empty buffer is the
//! empty string (wire length 0). An empty buffer never allocates.

use std::fmt::{self, Write as _};
use std::hash::{Hash, Hasher};

use crate::engine::Engine;
use crate::error::{Error, Result};

use super::UaType;

macro_rules! byte_string_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Default)]
        pub struct $name {
            data: Option<Box<[u8]>>,
        }

        impl $name {
            /// The null value (length -1).
            pub const NULL: Self = Self { data: None };

            /// The empty value (length 0).
            pub fn empty() -> Self {
                Self {
                    data: Some(Box::default()),
                }
            }

            /// Wire length: -1 for null, otherwise the byte count.
            pub fn length(&self) -> i32 {
                match &self.data {
                    None => -1,
                    Some(bytes) => bytes.len() as i32,
                }
            }

            pub fn is_null(&self) -> bool {
                self.data.is_none()
            }

            /// True when the length is 0 or -1.
            pub fn is_empty(&self) -> bool {
                self.data.as_ref().map_or(true, |bytes| bytes.is_empty())
            }

            /// Payload bytes; empty for both the null and the empty value.
            pub fn as_bytes(&self) -> &[u8] {
                self.data.as_deref().unwrap_or(&[])
            }

            /// Copy `bytes` into a new value. An empty slice yields the empty value.
            pub fn from_bytes_with(engine: &Engine<'_>, bytes: &[u8]) -> Result<Self> {
                if bytes.len() > i32::MAX as usize {
                    return Err(Error::Encoding(format!(
                        "{} of {} bytes exceeds the wire length limit",
                        stringify!($name),
                        bytes.len()
                    )));
                }
                if bytes.is_empty() {
                    return Ok(Self::empty());
                }
                Ok(Self {
                    data: Some(engine.dup_bytes(bytes)?),
                })
            }

            pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
                Self::from_bytes_with(&Engine::system(), bytes)
            }

            /// Take ownership of an existing buffer without copying.
            pub fn from_boxed(bytes: Box<[u8]>) -> Self {
                Self { data: Some(bytes) }
            }

            pub fn into_boxed(self) -> Option<Box<[u8]>> {
                self.data
            }
        }

        impl UaType for $name {
            fn copy_with(&self, engine: &Engine<'_>) -> Result<Self> {
                match &self.data {
                    None => Ok(Self::NULL),
                    Some(bytes) if bytes.is_empty() => Ok(Self::empty()),
                    Some(bytes) => Ok(Self {
                        data: Some(engine.dup_bytes(bytes)?),
                    }),
                }
            }
        }

        /// Any two values of length 0 or -1 are equal.
        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                if self.is_empty() && other.is_empty() {
                    return true;
                }
                self.as_bytes() == other.as_bytes()
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.as_bytes().hash(state);
            }
        }
    };
}

byte_string_type! {
    /// Protocol text string (UTF-8 by convention, not validated).
    UaString
}

byte_string_type! {
    /// Opaque byte sequence.
    ByteString
}

byte_string_type! {
    /// XML fragment carried as bytes.
    XmlElement
}

impl UaString {
    /// Copy a text literal.
    pub fn from_text_with(engine: &Engine<'_>, text: &str) -> Result<Self> {
        Self::from_bytes_with(engine, text.as_bytes())
    }

    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_text_with(&Engine::system(), text)
    }

    /// Render `args` into the engine's bounded scratch buffer and copy the
    /// result. Output beyond the buffer is truncated.
    ///
    /// ```
    /// use ua_types::{Engine, UaString};
    ///
    /// let s = UaString::copy_fmt(&Engine::system(), format_args!("ns={};i={}", 1, 42)).unwrap();
    /// assert_eq!(s.as_str(), Some("ns=1;i=42"));
    /// ```
    pub fn copy_fmt(engine: &Engine<'_>, args: fmt::Arguments<'_>) -> Result<Self> {
        let mut scratch = BoundedWriter::new(engine.config().format_buffer_size);
        scratch.write_fmt(args)?;
        Self::from_bytes_with(engine, scratch.as_bytes())
    }

    /// Text view, if the payload is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }
}

impl ByteString {
    /// Allocate a zeroed buffer of `length` bytes. 0 yields the empty value,
    /// a negative length the null value.
    pub fn with_length(engine: &Engine<'_>, length: i32) -> Result<Self> {
        match usize::try_from(length) {
            Err(_) => Ok(Self::NULL),
            Ok(0) => Ok(Self::empty()),
            Ok(len) => Ok(Self {
                data: Some(engine.alloc_zeroed(len)?),
            }),
        }
    }

    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        self.data.as_deref_mut().unwrap_or(&mut [])
    }
}

impl fmt::Debug for UaString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            None => f.write_str("String(null)"),
            Some(bytes) => write!(f, "String({:?})", String::from_utf8_lossy(bytes)),
        }
    }
}

impl fmt::Display for UaString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            None => f.write_str("ByteString(null)"),
            Some(bytes) => write!(f, "ByteString({:02x?})", bytes),
        }
    }
}

impl fmt::Debug for XmlElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            None => f.write_str("XmlElement(null)"),
            Some(bytes) => write!(f, "XmlElement({:?})", String::from_utf8_lossy(bytes)),
        }
    }
}

/// `fmt::Write` sink keeping at most `capacity - 1` bytes; the rest of the
/// output is dropped.
struct BoundedWriter {
    buf: Vec<u8>,
    limit: usize,
}

impl BoundedWriter {
    fn new(capacity: usize) -> Self {
        let limit = capacity.saturating_sub(1);
        Self {
            buf: Vec::with_capacity(limit),
            limit,
        }
    }

    fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

impl fmt::Write for BoundedWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.limit - self.buf.len();
        let take = s.len().min(room);
        self.buf.extend_from_slice(&s.as_bytes()[..take]);
        Ok(())
    }
}
