// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! 128-bit globally unique identifier.

use std::fmt;

/// Four fixed fields, no owned memory. Copy and equality are bitwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl Guid {
    pub const NULL: Guid = Guid {
        data1: 0,
        data2: 0,
        data3: 0,
        data4: [0; 8],
    };

    pub const SIZE: usize = 16;

    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }

    /// Pseudo-random guid from a thread-local generator.
    pub fn random() -> Self {
        Self::random_with(&mut fastrand::Rng::new())
    }

    /// Pseudo-random guid drawn from `rng`; a seeded generator gives a
    /// reproducible sequence.
    pub fn random_with(rng: &mut fastrand::Rng) -> Self {
        let data1 = rng.u32(..);
        let r = rng.u32(..);
        let mut data4 = [0u8; 8];
        for half in data4.chunks_mut(4) {
            let r = rng.u32(..);
            for (i, byte) in half.iter_mut().enumerate() {
                *byte = (r >> (i * 4)) as u8;
            }
        }
        Self {
            data1,
            data2: r as u16,
            data3: (r >> 16) as u16,
            data4,
        }
    }

    /// Little-endian packed form used by array blocks and structure bodies.
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[0..4].copy_from_slice(&self.data1.to_le_bytes());
        out[4..6].copy_from_slice(&self.data2.to_le_bytes());
        out[6..8].copy_from_slice(&self.data3.to_le_bytes());
        out[8..16].copy_from_slice(&self.data4);
        out
    }

    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        let mut data4 = [0u8; 8];
        data4.copy_from_slice(&bytes[8..16]);
        Self {
            data1: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            data2: u16::from_le_bytes([bytes[4], bytes[5]]),
            data3: u16::from_le_bytes([bytes[6], bytes[7]]),
            data4,
        }
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08X}-{:04X}-{:04X}-{:02X}{:02X}-",
            self.data1, self.data2, self.data3, self.data4[0], self.data4[1]
        )?;
        for byte in &self.data4[2..] {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null() {
        assert!(Guid::default().is_null());
        assert!(!Guid {
            data3: 1,
            ..Guid::NULL
        }
        .is_null());
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let a = Guid::random_with(&mut fastrand::Rng::with_seed(7));
        let b = Guid::random_with(&mut fastrand::Rng::with_seed(7));
        assert_eq!(a, b);
        let mut rng = fastrand::Rng::with_seed(7);
        let first = Guid::random_with(&mut rng);
        let second = Guid::random_with(&mut rng);
        assert_ne!(first, second);
    }

    #[test]
    fn test_packed_form() {
        let g = Guid {
            data1: 0x7260_8FA1,
            data2: 0x1ABC,
            data3: 0x2DEF,
            data4: [1, 2, 3, 4, 5, 6, 7, 8],
        };
        let bytes = g.to_bytes();
        assert_eq!(&bytes[0..4], &[0xA1, 0x8F, 0x60, 0x72]);
        assert_eq!(Guid::from_bytes(bytes), g);
        assert_eq!(g.to_string(), "72608FA1-1ABC-2DEF-0102-030405060708");
    }
}
