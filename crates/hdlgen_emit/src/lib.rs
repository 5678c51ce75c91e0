//! Boilerplate text generation from extracted module interfaces.
//!
//! Three generators, each rendering one kind of scaffold for a module's
//! [`ModuleInterface`]:
//!
//! - [`testbench`] — a Verilog testbench skeleton wired for
//!   `$from_myhdl`/`$to_myhdl`.
//! - [`cosim`] — a Python cosimulation binding: iverilog compile command,
//!   `Ports`/`Params` namedtuples, and a `Cosimulation` factory function.
//! - [`unittest`] — a Python `unittest` scaffold driving the cosimulation.
//!
//! Generated Python text is wrapped at 79 columns by the helpers in
//! [`wrap`].

#![warn(missing_docs)]

pub mod cosim;
pub mod interface;
pub mod testbench;
pub mod unittest;
pub mod wrap;

pub use interface::{ModuleInterface, PortDecl};
