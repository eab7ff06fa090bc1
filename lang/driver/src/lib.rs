//! A minimal build pipeline for subleq programs.
//!
//! Source text is parsed into a [`Program`](subleq_syntax::Program), which is
//! then either translated to x86-64 assembly and handed to the system C
//! compiler for assembling and linking, or run directly by the reference
//! interpreter.

pub mod conf;
pub mod err;

/// source text to program to assembly
pub mod compile {
    pub mod err;
    pub mod pack;
}

/// assembling, linking and running native executables
pub mod amd64 {
    pub mod err;
    pub mod pack;
}

/// running programs with the reference interpreter
pub mod interp {
    pub mod err;
    pub mod pack;
}


pub use amd64::pack::{PackageAmd64, PackageAmd64Executable};
pub use compile::pack::{PackageProgram, PackageSource};
pub use conf::{BuildConf, Conf};
pub use err::*;
pub use interp::pack::PackageRuntime;
pub use subleq_dynamics::Exit;
