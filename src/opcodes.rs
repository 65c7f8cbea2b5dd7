//! # Opcode Decode Table
//!
//! This module contains the 256-entry decode table that serves as the
//! single source of truth for instruction decoding: opcode byte in,
//! operation plus addressing mode out.
//!
//! Only the load-accumulator family and the immediate form of
//! add-with-carry are wired up; every other byte decodes to `None` and is
//! reported by the engine as an unsupported opcode. Keeping the table as a
//! flat array (rather than a match in the engine) means growing the
//! instruction set is a matter of adding entries.

use crate::addressing::AddressingMode;

/// Operation half of a decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Load a byte into the accumulator.
    Lda,
    /// Add with carry (partial: carry evaluation only).
    Adc,
}

/// Decoded metadata for a single opcode byte.
///
/// # Examples
///
/// ```
/// use mos6502::{AddressingMode, Operation, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = OPCODE_TABLE[0xA9].unwrap();
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
///
/// // Bytes with no mapping decode to None
/// assert!(OPCODE_TABLE[0x02].is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeInfo {
    /// Instruction mnemonic (e.g., "LDA").
    pub mnemonic: &'static str,

    /// The operation this opcode performs.
    pub operation: Operation,

    /// Addressing mode for this opcode.
    pub addressing_mode: AddressingMode,
}

/// 256-entry decode table indexed by opcode byte value.
///
/// Entries exist only for supported instructions; indexing with any other
/// byte yields `None`, which [`Cpu::step`](crate::Cpu::step) reports and
/// skips.
pub const OPCODE_TABLE: [Option<OpcodeInfo>; 256] = {
    const fn entry(
        mnemonic: &'static str,
        operation: Operation,
        addressing_mode: AddressingMode,
    ) -> Option<OpcodeInfo> {
        Some(OpcodeInfo {
            mnemonic,
            operation,
            addressing_mode,
        })
    }

    let mut table: [Option<OpcodeInfo>; 256] = [None; 256];

    // ADC - Add With Carry
    table[0x69] = entry("ADC", Operation::Adc, AddressingMode::Immediate);

    // LDA - Load Accumulator
    table[0xA9] = entry("LDA", Operation::Lda, AddressingMode::Immediate);
    table[0xA5] = entry("LDA", Operation::Lda, AddressingMode::ZeroPage);
    table[0xB5] = entry("LDA", Operation::Lda, AddressingMode::ZeroPageX);
    table[0xAD] = entry("LDA", Operation::Lda, AddressingMode::Absolute);
    table[0xBD] = entry("LDA", Operation::Lda, AddressingMode::AbsoluteX);
    table[0xB9] = entry("LDA", Operation::Lda, AddressingMode::AbsoluteY);
    table[0xA1] = entry("LDA", Operation::Lda, AddressingMode::IndexedIndirect);
    table[0xB1] = entry("LDA", Operation::Lda, AddressingMode::IndirectIndexed);

    table
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lda_family_decodes() {
        let cases = [
            (0xA9u8, AddressingMode::Immediate),
            (0xA5, AddressingMode::ZeroPage),
            (0xB5, AddressingMode::ZeroPageX),
            (0xAD, AddressingMode::Absolute),
            (0xBD, AddressingMode::AbsoluteX),
            (0xB9, AddressingMode::AbsoluteY),
            (0xA1, AddressingMode::IndexedIndirect),
            (0xB1, AddressingMode::IndirectIndexed),
        ];
        for (opcode, mode) in cases {
            let info = OPCODE_TABLE[opcode as usize]
                .unwrap_or_else(|| panic!("opcode 0x{:02X} should decode", opcode));
            assert_eq!(info.mnemonic, "LDA");
            assert_eq!(info.operation, Operation::Lda);
            assert_eq!(info.addressing_mode, mode);
        }
    }

    #[test]
    fn test_adc_immediate_decodes() {
        let info = OPCODE_TABLE[0x69].unwrap();
        assert_eq!(info.mnemonic, "ADC");
        assert_eq!(info.operation, Operation::Adc);
        assert_eq!(info.addressing_mode, AddressingMode::Immediate);
    }

    #[test]
    fn test_table_is_sparse() {
        let mapped = OPCODE_TABLE.iter().filter(|e| e.is_some()).count();
        assert_eq!(mapped, 9);

        // A few bytes that must stay unmapped, including BRK
        for opcode in [0x00usize, 0x02, 0xEA, 0xFF] {
            assert!(OPCODE_TABLE[opcode].is_none());
        }
    }
}
