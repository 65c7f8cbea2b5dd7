//! # Addressing Modes
//!
//! This module defines the addressing modes the decode table can attach to
//! an operation. Each mode determines how the CPU interprets the operand
//! bytes that follow an opcode and how the effective memory address is
//! calculated.

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how many operand bytes an instruction
/// carries and how those bytes map to an effective address or literal
/// value.
///
/// # Operand Sizes
///
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY,
///   IndexedIndirect, IndirectIndexed
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
///
/// Two-byte operands are fetched high byte first; see
/// [`Cpu::fetch_operand`](crate::Cpu) for the assembly rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// 8-bit constant operand in the instruction stream.
    ///
    /// Example: LDA #$10. The engine fetches the literal directly; this
    /// mode never reaches the address resolver.
    Immediate,

    /// 8-bit address in the zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by the X register.
    ///
    /// Example: LDA $80,X. Sums above 0xFF are folded back into the zero
    /// page; see [`Cpu::effective_address`](crate::Cpu) for the fold rule.
    ZeroPageX,

    /// Zero page address indexed by the Y register.
    ///
    /// Declared for decode-table completeness; the resolver reports it as
    /// unsupported.
    ZeroPageY,

    /// Full 16-bit address.
    ///
    /// Example: LDA $1234
    Absolute,

    /// 16-bit address indexed by the X register.
    ///
    /// Example: LDA $1234,X. Full 16-bit add, free to cross a page
    /// boundary.
    AbsoluteX,

    /// 16-bit address indexed by the Y register.
    ///
    /// Example: LDA $1234,Y. Full 16-bit add, free to cross a page
    /// boundary.
    AbsoluteY,

    /// Jump through a 16-bit pointer.
    ///
    /// Declared for decode-table completeness; the resolver reports it as
    /// unsupported.
    Indirect,

    /// Indexed indirect: (operand + X) names a zero-page pointer, which is
    /// dereferenced.
    ///
    /// Example: LDA ($40,X)
    IndexedIndirect,

    /// Indirect indexed: the operand names a zero-page pointer, and Y is
    /// added to the pointer value.
    ///
    /// Example: LDA ($40),Y
    IndirectIndexed,
}
