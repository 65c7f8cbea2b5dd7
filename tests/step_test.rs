//! Engine-level tests: one instruction per step, the skip-and-report
//! policy for unknown opcodes, and the host-facing register dump.

use mos6502::{Cpu, FlatMemory, MemoryBus};

/// Helper to create a CPU pointed at a program area at 0x8000.
fn setup_cpu() -> Cpu<FlatMemory> {
    let mut cpu = Cpu::new(FlatMemory::new());
    cpu.set_pc(0x8000);
    cpu
}

#[test]
fn test_unknown_opcode_skips_one_byte() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xFF); // No decode entry

    cpu.set_a(0x11);
    cpu.set_x(0x22);
    cpu.set_y(0x33);
    cpu.set_sp(0x44);
    let status_before = cpu.status();

    cpu.step();

    // PC moved exactly one byte past the unknown opcode, nothing else
    // changed
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.a(), 0x11);
    assert_eq!(cpu.x(), 0x22);
    assert_eq!(cpu.y(), 0x33);
    assert_eq!(cpu.sp(), 0x44);
    assert_eq!(cpu.status(), status_before);

    // Memory untouched
    assert_eq!(cpu.memory().read(0x8000), 0xFF);
    assert_eq!(cpu.memory().read(0x0000), 0x00);
}

#[test]
fn test_unmapped_brk_byte_is_skipped_too() {
    let mut cpu = setup_cpu();

    // 0x00 has no decode entry either; empty memory is a run of
    // skippable bytes
    cpu.step();
    cpu.step();

    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.a(), 0x00);
}

#[test]
fn test_execution_continues_past_unknown_opcode() {
    let mut cpu = setup_cpu();

    // Unknown byte, then a valid LDA #$42
    cpu.memory_mut().write(0x8000, 0xFF);
    cpu.memory_mut().write(0x8001, 0xA9);
    cpu.memory_mut().write(0x8002, 0x42);

    cpu.step();
    cpu.step();

    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_step_executes_exactly_one_instruction() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xA9); // LDA #$01
    cpu.memory_mut().write(0x8001, 0x01);
    cpu.memory_mut().write(0x8002, 0xA9); // LDA #$02
    cpu.memory_mut().write(0x8003, 0x02);

    cpu.step();
    assert_eq!(cpu.a(), 0x01);
    assert_eq!(cpu.pc(), 0x8002);

    cpu.step();
    assert_eq!(cpu.a(), 0x02);
    assert_eq!(cpu.pc(), 0x8004);
}

#[test]
fn test_step_wraps_pc_at_top_of_address_space() {
    let mut cpu = setup_cpu();

    // LDA immediate split across the address-space wrap: opcode at
    // 0xFFFF, operand at 0x0000
    cpu.memory_mut().write(0xFFFF, 0xA9);
    cpu.memory_mut().write(0x0000, 0x42);

    cpu.set_pc(0xFFFF);
    cpu.step();

    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.pc(), 0x0001);
}

#[test]
fn test_dump_registers_between_steps() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xA9); // LDA #$80
    cpu.memory_mut().write(0x8001, 0x80);

    let before = cpu.dump_registers();
    assert!(before.contains("PC: 0x8000"));
    assert!(before.contains("A: 0x00"));

    cpu.step();

    let after = cpu.dump_registers();
    assert!(after.contains("PC: 0x8002"));
    assert!(after.contains("A: 0x80"));
    assert!(after.contains("N=1"));

    // Dumping changed nothing the next dump could see
    assert_eq!(cpu.dump_registers(), after);
}
