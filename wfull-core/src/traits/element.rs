//! Record element type constraints
//!
//! This module defines the trait that constrains what types a record
//! payload can be reinterpreted as. All WFULL payloads are little-endian
//! and tightly packed.

use num_complex::Complex64;

/// Element types a record payload may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ElementType {
    /// 32-bit signed integer
    I32 = 0,
    /// 64-bit IEEE float
    F64 = 1,
    /// Two 64-bit floats, real part first
    Complex128 = 2,
}

impl ElementType {
    /// All element types, smallest first
    pub const ALL: [ElementType; 3] = [
        ElementType::I32,
        ElementType::F64,
        ElementType::Complex128,
    ];

    /// Get the size in bytes for this element type
    pub const fn size_bytes(&self) -> usize {
        match self {
            ElementType::I32 => 4,
            ElementType::F64 => 8,
            ElementType::Complex128 => 16,
        }
    }
}

impl core::fmt::Display for ElementType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ElementType::I32 => write!(f, "int32"),
            ElementType::F64 => write!(f, "float64"),
            ElementType::Complex128 => write!(f, "complex128"),
        }
    }
}

/// Trait for types that can be read from a record payload
///
/// Implementors must be:
/// - Copy: decoded values are plain data
/// - PartialEq: decoded matrices can be compared
/// - Sized: a fixed width on disk
pub trait RecordElement: Copy + PartialEq + Sized {
    /// The on-disk element type this Rust type maps to
    const ELEMENT_TYPE: ElementType;

    /// Width of one element in the payload
    const SIZE: usize = Self::ELEMENT_TYPE.size_bytes();

    /// Decode one element from exactly `Self::SIZE` little-endian bytes
    fn from_le_slice(bytes: &[u8]) -> Self;

    /// Encode one element into exactly `Self::SIZE` little-endian bytes
    fn write_le(&self, out: &mut [u8]);
}

impl RecordElement for i32 {
    const ELEMENT_TYPE: ElementType = ElementType::I32;

    fn from_le_slice(bytes: &[u8]) -> Self {
        i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    fn write_le(&self, out: &mut [u8]) {
        out[..4].copy_from_slice(&self.to_le_bytes());
    }
}

impl RecordElement for f64 {
    const ELEMENT_TYPE: ElementType = ElementType::F64;

    fn from_le_slice(bytes: &[u8]) -> Self {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(&bytes[..8]);
        f64::from_le_bytes(raw)
    }

    fn write_le(&self, out: &mut [u8]) {
        out[..8].copy_from_slice(&self.to_le_bytes());
    }
}

impl RecordElement for Complex64 {
    const ELEMENT_TYPE: ElementType = ElementType::Complex128;

    fn from_le_slice(bytes: &[u8]) -> Self {
        Complex64::new(f64::from_le_slice(&bytes[..8]), f64::from_le_slice(&bytes[8..16]))
    }

    fn write_le(&self, out: &mut [u8]) {
        self.re.write_le(&mut out[..8]);
        self.im.write_le(&mut out[8..16]);
    }
}
