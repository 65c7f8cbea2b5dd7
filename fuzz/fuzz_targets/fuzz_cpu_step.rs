//! Fuzz target for CPU step execution.
//!
//! Creates arbitrary register state and memory contents, then executes
//! one instruction. Unknown opcodes and resolver misconfigurations are
//! reported on the log side channel, so the only failure this target can
//! surface is a panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mos6502::{Cpu, FlatMemory, MemoryBus};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    flag_c: bool,
    flag_z: bool,
    flag_i: bool,
    flag_d: bool,
    flag_b: bool,
    flag_v: bool,
    flag_n: bool,
}

/// Memory regions the in-scope addressing modes can reach
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents (indirect pointer reads can spill into it)
    stack_page: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut cpu = Cpu::new(FlatMemory::new());

    // Write instruction bytes at 0x8000
    for (i, &byte) in input.memory.instruction_bytes.iter().enumerate() {
        cpu.memory_mut().write(0x8000 + i as u16, byte);
    }

    // Write zero page and stack page (after reset, which zeroes them)
    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        cpu.memory_mut().write(i as u16, byte);
    }
    for (i, &byte) in input.memory.stack_page.iter().enumerate() {
        cpu.memory_mut().write(0x0100 + i as u16, byte);
    }

    // Set CPU state from fuzz input
    cpu.set_pc(0x8000);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_flag_c(input.cpu_state.flag_c);
    cpu.set_flag_z(input.cpu_state.flag_z);
    cpu.set_flag_i(input.cpu_state.flag_i);
    cpu.set_flag_d(input.cpu_state.flag_d);
    cpu.set_flag_b(input.cpu_state.flag_b);
    cpu.set_flag_v(input.cpu_state.flag_v);
    cpu.set_flag_n(input.cpu_state.flag_n);

    // Execute one instruction; must not panic
    cpu.step();

    // Every instruction in scope is 1-3 bytes, so PC always moves
    assert_ne!(cpu.pc(), 0x8000);
});
