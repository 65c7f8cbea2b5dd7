//! # Instruction Implementations
//!
//! Instruction routines organized by category, each a standalone function
//! taking a mutable reference to the CPU and the addressing mode the
//! decode table attached to the opcode.
//!
//! ## Categories
//!
//! - **load_store**: load instructions (the LDA family)
//! - **alu**: arithmetic operations (partial ADC)

pub(crate) mod alu;
pub(crate) mod load_store;
