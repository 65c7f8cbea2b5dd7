//! # CPU State and Execution
//!
//! This module contains the `Cpu` struct representing processor state and
//! the fetch-decode-execute cycle.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next byte to fetch
//! - **Stack pointer** (SP): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status flags**: C, Z, I, D, B, V, N as individual bool fields
//!
//! ## Execution Model
//!
//! [`Cpu::step`] executes exactly one instruction and returns control to
//! the caller. There is no internal run loop and no halt state; the host
//! decides whether and when to step again. Unknown opcodes are reported on
//! the log side channel and skipped.
//!
//! ## Operand Conventions
//!
//! Two conventions run through the whole core and are preserved exactly:
//!
//! - Two-byte operands are fetched **high byte first**. Fetching `0x12`
//!   then `0x34` assembles the address `0x1234`. Zero-page pointers are
//!   assembled the same way: the first byte read supplies bits 15..8.
//! - Zero-page index sums above `0xFF` are folded back into the zero page
//!   by subtracting 255, which lands one address past a modulo-256 wrap.

use log::{error, warn};

use crate::addressing::AddressingMode;
use crate::memory::{MemoryBus, RESET_VECTOR, STACK_BASE, STACK_SIZE, ZERO_PAGE_SIZE};
use crate::opcodes::{Operation, OPCODE_TABLE};
use crate::{instructions, ExecutionError};

/// 6502 CPU state and execution context.
///
/// Bundles the register file with a memory implementation. Generic over
/// the memory backend via the [`MemoryBus`] trait. Each `Cpu` owns its
/// memory exclusively; hosts embedding several emulator instances must
/// give each one an independent bus.
///
/// # Examples
///
/// ```
/// use mos6502::{Cpu, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x8000, 0xA5); // LDA $10
/// memory.write(0x8001, 0x10);
///
/// let mut cpu = Cpu::new(memory);
/// cpu.memory_mut().write(0x0010, 0x99);
/// cpu.set_pc(0x8000);
/// cpu.step();
///
/// assert_eq!(cpu.a(), 0x99);
/// assert!(cpu.flag_n()); // 0x99 has bit 7 set
/// ```
pub struct Cpu<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of the next byte to fetch)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives the full stack address)
    pub(crate) sp: u8,

    /// Carry flag
    pub(crate) flag_c: bool,

    /// Zero flag (set if the last defining result was zero)
    pub(crate) flag_z: bool,

    /// Interrupt disable flag
    pub(crate) flag_i: bool,

    /// Decimal mode flag
    pub(crate) flag_d: bool,

    /// Break command flag
    pub(crate) flag_b: bool,

    /// Overflow flag
    pub(crate) flag_v: bool,

    /// Negative flag (set if bit 7 of the last defining result was 1)
    pub(crate) flag_n: bool,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates a new CPU over the given memory bus and resets it.
    ///
    /// See [`Cpu::reset`] for the state this establishes.
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0,
            flag_c: false,
            flag_z: false,
            flag_i: false,
            flag_d: false,
            flag_b: false,
            flag_v: false,
            flag_n: false,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Resets the CPU to its power-on state.
    ///
    /// - The program counter is set to the reset vector location
    ///   ([`RESET_VECTOR`], 0xFFFC). The vector contents are not
    ///   dereferenced; the first fetch after reset reads the byte stored
    ///   there. Hosts position programs with [`Cpu::set_pc`].
    /// - All other registers and every status flag are cleared.
    /// - The zero page and the stack page are zeroed.
    ///
    /// Reset is idempotent and has no failure mode. It is the only way to
    /// establish a known initial state.
    pub fn reset(&mut self) {
        self.pc = RESET_VECTOR;

        self.sp = 0;
        self.a = 0;
        self.x = 0;
        self.y = 0;

        self.flag_c = false;
        self.flag_z = false;
        self.flag_i = false;
        self.flag_d = false;
        self.flag_b = false;
        self.flag_v = false;
        self.flag_n = false;

        for addr in 0..ZERO_PAGE_SIZE {
            self.memory.write(addr, 0);
        }
        for offset in 0..STACK_SIZE {
            self.memory.write(STACK_BASE + offset, 0);
        }
    }

    /// Executes one instruction and returns control to the caller.
    ///
    /// Performs the fetch-decode-execute cycle: fetch the opcode byte at
    /// PC, look it up in [`OPCODE_TABLE`], let the instruction routine
    /// fetch its operand bytes, resolve the effective address, apply the
    /// effect, and update flags.
    ///
    /// An opcode with no decode entry is reported through [`log`] and
    /// skipped: the PC has already advanced one byte past it and no
    /// register changes. A resolver failure mid-instruction is reported
    /// the same way, with state left exactly as mutated up to that point.
    /// The host decides whether to keep stepping either way.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::{Cpu, FlatMemory, MemoryBus};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.write(0x8000, 0xA9); // LDA #$00
    /// memory.write(0x8001, 0x00);
    ///
    /// let mut cpu = Cpu::new(memory);
    /// cpu.set_pc(0x8000);
    /// cpu.step();
    ///
    /// assert!(cpu.flag_z());
    /// ```
    pub fn step(&mut self) {
        let opcode = self.fetch();

        let Some(info) = OPCODE_TABLE[opcode as usize] else {
            let err = ExecutionError::UnsupportedOpcode(opcode);
            warn!("{} at PC 0x{:04X}", err, self.pc.wrapping_sub(1));
            return;
        };

        let result = match info.operation {
            Operation::Lda => instructions::load_store::execute_lda(self, info.addressing_mode),
            Operation::Adc => instructions::alu::execute_adc(self, info.addressing_mode),
        };

        if let Err(err) = result {
            error!("{} while executing {}", err, info.mnemonic);
        }
    }

    /// Fetches the byte at PC and advances PC by one, wrapping at the top
    /// of the address space.
    ///
    /// This is the only operation that advances the instruction stream.
    pub(crate) fn fetch(&mut self) -> u8 {
        let byte = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    /// Fetches the raw operand for `mode` from the instruction stream.
    ///
    /// Two-byte absolute operands are assembled high byte first: the first
    /// fetched byte supplies bits 15..8 and the second bits 7..0. All
    /// other modes carry a single operand byte, widened to `u16`.
    pub(crate) fn fetch_operand(&mut self, mode: AddressingMode) -> u16 {
        match mode {
            AddressingMode::Absolute | AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => {
                let msb = u16::from(self.fetch());
                let lsb = u16::from(self.fetch());
                (msb << 8) | lsb
            }
            _ => u16::from(self.fetch()),
        }
    }

    /// Folds a zero-page index sum back into the zero page.
    ///
    /// Sums above 0xFF have 255 subtracted, which is one address past a
    /// modulo-256 wrap: 0xFF + 0x02 folds to 0x02, not 0x01.
    fn fold_zero_page(address: u16) -> u16 {
        if address > 0xFF {
            address - 255
        } else {
            address
        }
    }

    /// Computes the effective address for a raw operand under `mode`.
    ///
    /// `operand` is the value produced by the operand fetch: a single
    /// zero-page byte widened to `u16`, or a two-byte absolute operand
    /// already assembled high byte first.
    ///
    /// Indexed absolute modes perform a full 16-bit add and may cross a
    /// page boundary; zero-page indexed modes fold back into the zero
    /// page. Indirect modes assemble the pointer high byte first, and the
    /// pointer's second byte is read at `addr + 1` without folding, so a
    /// zero-page pointer at 0xFF takes its low half from 0x0100.
    ///
    /// Returns [`ExecutionError::UnsupportedAddressingMode`] for modes the
    /// resolver does not implement; the engine treats that as a decode
    /// table misconfiguration and reports it.
    pub fn effective_address(
        &self,
        operand: u16,
        mode: AddressingMode,
    ) -> Result<u16, ExecutionError> {
        match mode {
            AddressingMode::ZeroPage | AddressingMode::Absolute => Ok(operand),

            AddressingMode::ZeroPageX => {
                Ok(Self::fold_zero_page(operand.wrapping_add(u16::from(self.x))))
            }

            AddressingMode::AbsoluteX => Ok(operand.wrapping_add(u16::from(self.x))),

            AddressingMode::AbsoluteY => Ok(operand.wrapping_add(u16::from(self.y))),

            AddressingMode::IndexedIndirect => {
                let addr = Self::fold_zero_page(operand.wrapping_add(u16::from(self.x)));
                let pointer = (u16::from(self.memory.read(addr)) << 8)
                    | u16::from(self.memory.read(addr.wrapping_add(1)));
                Ok(pointer)
            }

            AddressingMode::IndirectIndexed => {
                let pointer = (u16::from(self.memory.read(operand)) << 8)
                    | u16::from(self.memory.read(operand.wrapping_add(1)));
                Ok(pointer.wrapping_add(u16::from(self.y)))
            }

            mode => Err(ExecutionError::UnsupportedAddressingMode(mode)),
        }
    }

    /// Reads the single byte a read-type access under `mode` refers to.
    ///
    /// This is the read half of the resolver: the effective address is
    /// computed by [`Cpu::effective_address`] and dereferenced once.
    pub fn operand_value(&self, operand: u16, mode: AddressingMode) -> Result<u8, ExecutionError> {
        let addr = self.effective_address(operand, mode)?;
        Ok(self.memory.read(addr))
    }

    // ========== Flag Updaters ==========

    /// Sets the zero flag if `value` is 0, clears it otherwise.
    pub(crate) fn update_zero_flag(&mut self, value: u8) {
        self.flag_z = value == 0;
    }

    /// Sets the negative flag if bit 7 of `value` is 1, clears it
    /// otherwise.
    pub(crate) fn update_negative_flag(&mut self, value: u8) {
        self.flag_n = (value & 0x80) != 0;
    }

    /// Derives the carry flag from a widened signed addition result.
    ///
    /// Sets the carry flag when `result` falls outside the signed 8-bit
    /// range -128..=127, clears it otherwise. Not wired into any executing
    /// instruction yet; arithmetic operations gain it together with their
    /// result write-back.
    pub fn update_carry_flag(&mut self, result: i16) {
        self.flag_c = result > 127 || result < -128;
    }

    // ========== Register Accessors ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Sets the accumulator register value.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Sets the X index register value.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Sets the Y index register value.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Sets the program counter.
    ///
    /// The next [`Cpu::step`] fetches its opcode from this address.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 + SP.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Sets the stack pointer value.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    // ========== Status Flag Accessors ==========

    /// Returns true if the carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    /// Sets or clears the carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    /// Returns true if the zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Sets or clears the zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Returns true if the interrupt disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Sets or clears the interrupt disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    /// Returns true if the decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Sets or clears the decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    /// Returns true if the break command flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Sets or clears the break command flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    /// Returns true if the overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Sets or clears the overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Returns true if the negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Sets or clears the negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    /// Returns the status register packed into a byte.
    ///
    /// Bit layout (NV-BDIZC): N bit 7, V bit 6, bit 5 always 1, B bit 4,
    /// D bit 3, I bit 2, Z bit 1, C bit 0. The core itself only reads and
    /// writes the individual flags; the packed form exists for hosts and
    /// for status push/pop if the instruction set grows stack support.
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b0010_0000; // Bit 5 always 1

        if self.flag_n {
            status |= 0b1000_0000;
        }
        if self.flag_v {
            status |= 0b0100_0000;
        }
        if self.flag_b {
            status |= 0b0001_0000;
        }
        if self.flag_d {
            status |= 0b0000_1000;
        }
        if self.flag_i {
            status |= 0b0000_0100;
        }
        if self.flag_z {
            status |= 0b0000_0010;
        }
        if self.flag_c {
            status |= 0b0000_0001;
        }

        status
    }

    // ========== Host Facilities ==========

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    ///
    /// Hosts use this to load programs and inspect or patch memory between
    /// steps.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Formats the current register and flag values for inspection.
    ///
    /// Purely observational: callable at any point without disturbing
    /// engine state. The host owns the actual output channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::{Cpu, FlatMemory};
    ///
    /// let cpu = Cpu::new(FlatMemory::new());
    /// println!("{}", cpu.dump_registers());
    /// ```
    pub fn dump_registers(&self) -> String {
        format!(
            "PC: 0x{:04X}  SP: 0x{:02X}  A: 0x{:02X}  X: 0x{:02X}  Y: 0x{:02X}\n\
             flags: C={} Z={} I={} D={} B={} V={} N={}",
            self.pc,
            self.sp,
            self.a,
            self.x,
            self.y,
            u8::from(self.flag_c),
            u8::from(self.flag_z),
            u8::from(self.flag_i),
            u8::from(self.flag_d),
            u8::from(self.flag_b),
            u8::from(self.flag_v),
            u8::from(self.flag_n),
        )
    }
}
