//! # Load Instructions
//!
//! The load-accumulator family across its eight addressing modes.

use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use crate::ExecutionError;

/// Executes the LDA (Load Accumulator) instruction.
///
/// Loads a byte into the accumulator and derives the negative and zero
/// flags from it, atomically with the register write. No other flags are
/// affected.
///
/// Immediate mode takes its value straight from the instruction stream;
/// every other mode fetches its raw operand bytes and goes through the
/// address resolver.
pub(crate) fn execute_lda<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = if mode == AddressingMode::Immediate {
        cpu.fetch()
    } else {
        let operand = cpu.fetch_operand(mode);
        cpu.operand_value(operand, mode)?
    };

    cpu.a = value;
    cpu.update_negative_flag(value);
    cpu.update_zero_flag(value);

    Ok(())
}
