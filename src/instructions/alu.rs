//! # ALU Instructions
//!
//! Arithmetic operations. Only the immediate form of ADC is present, and
//! only as its carry-evaluation skeleton.

use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use crate::ExecutionError;

/// Executes the ADC (Add with Carry) instruction, immediate mode.
///
/// Fetches the operand byte and computes the widened signed sum of the
/// operand, the accumulator, and the carry bit. The accumulator and every
/// status flag are left untouched: the instruction currently consumes its
/// operand and evaluates the sum, nothing more.
pub(crate) fn execute_adc<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    match mode {
        AddressingMode::Immediate => {
            let value = cpu.fetch() as i8;
            // TODO: write the sum back to the accumulator and derive carry
            // via Cpu::update_carry_flag when the rest of the ADC family
            // lands.
            let _sum = i16::from(value) + i16::from(cpu.a as i8) + i16::from(cpu.flag_c);
            Ok(())
        }
        mode => Err(ExecutionError::UnsupportedAddressingMode(mode)),
    }
}
