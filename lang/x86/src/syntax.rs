use derive_more::From;
use std::fmt;

/// Unadorned reg is a 64-bit reg
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Reg {
    Rax,
    Rbx,
    Rdx,
    Rcx,
    Rsi,
    Rdi,
    Rsp,
    Rbp,
    R8,
    R9,
    R10,
    R11,
    R12,
    R13,
    R14,
    R15,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConditionCode {
    E,
    L,
    LE,
}

/// `disp(base, index, scale)`
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MemRef {
    pub base: Reg,
    /// index register and scale, if any
    pub index: Option<(Reg, u8)>,
    pub disp: i32,
}

impl MemRef {
    /// Address of the `index`-th 8-byte slot after `base`, shifted by `disp` bytes.
    pub fn scaled(base: Reg, index: Reg, disp: i32) -> Self {
        Self { base, index: Some((index, 8)), disp }
    }
}

/// `label(%rip)`
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RelLabel {
    pub label: String,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, From)]
pub enum Arg64 {
    Reg(Reg),
    Imm(i64),
    Mem(MemRef),
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, From)]
pub enum Loc {
    Reg(Reg),
    Mem(MemRef),
}

/// Source and destination, in AT&T order.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BinArgs {
    pub src: Arg64,
    pub dst: Loc,
}

impl BinArgs {
    pub fn new(src: impl Into<Arg64>, dst: impl Into<Loc>) -> Self {
        Self { src: src.into(), dst: dst.into() }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Instr {
    Mov(BinArgs),
    Lea(RelLabel, Reg),

    Add(BinArgs),
    Sub(BinArgs),
    Cmp(BinArgs),

    Push(Reg),
    Pop(Reg),

    Label(String),
    Comment(String),
    Global(String),
    Section(String),

    Jmp(String),
    JCC(ConditionCode, String),
    Call(String),
    Ret,

    // Define data
    P2Align(u8),
    Quad(i64),
    Zero(usize),
}

/// A complete assembly listing for the GNU assembler.
///
/// - **`.data`**: the memory image; initialized and writable, because the
///   running program rewrites its own cells.
/// - **`.text`**: the entry point and the dispatch loop.
///
/// Sections are printed in that order.
#[derive(Default, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct AsmFile {
    /// Instructions and data for the `.data` section.
    pub data: Vec<Instr>,
    /// Instructions for the `.text` section.
    pub text: Vec<Instr>,
}

impl fmt::Display for ConditionCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ConditionCode::*;
        match self {
            | E => write!(f, "e"),
            | L => write!(f, "l"),
            | LE => write!(f, "le"),
        }
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            | Reg::Rax => write!(f, "%rax"),
            | Reg::Rbx => write!(f, "%rbx"),
            | Reg::Rcx => write!(f, "%rcx"),
            | Reg::Rdx => write!(f, "%rdx"),
            | Reg::Rsi => write!(f, "%rsi"),
            | Reg::Rdi => write!(f, "%rdi"),
            | Reg::Rsp => write!(f, "%rsp"),
            | Reg::Rbp => write!(f, "%rbp"),
            | Reg::R8 => write!(f, "%r8"),
            | Reg::R9 => write!(f, "%r9"),
            | Reg::R10 => write!(f, "%r10"),
            | Reg::R11 => write!(f, "%r11"),
            | Reg::R12 => write!(f, "%r12"),
            | Reg::R13 => write!(f, "%r13"),
            | Reg::R14 => write!(f, "%r14"),
            | Reg::R15 => write!(f, "%r15"),
        }
    }
}

impl fmt::Display for MemRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.disp != 0 {
            write!(f, "{}", self.disp)?;
        }
        match self.index {
            | Some((index, scale)) => write!(f, "({}, {}, {})", self.base, index, scale),
            | None => write!(f, "({})", self.base),
        }
    }
}

impl fmt::Display for RelLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(%rip)", self.label)
    }
}

impl fmt::Display for Arg64 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            | Arg64::Reg(r) => write!(f, "{}", r),
            | Arg64::Imm(i) => write!(f, "${}", i),
            | Arg64::Mem(m) => write!(f, "{}", m),
        }
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            | Loc::Reg(r) => write!(f, "{}", r),
            | Loc::Mem(m) => write!(f, "{}", m),
        }
    }
}

impl fmt::Display for BinArgs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.src, self.dst)
    }
}

impl fmt::Display for Instr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            | Instr::Mov(args) => {
                write!(f, "        movq {}", args)
            }
            | Instr::Lea(rl, r) => {
                write!(f, "        leaq {}, {}", rl, r)
            }
            | Instr::Add(args) => {
                write!(f, "        addq {}", args)
            }
            | Instr::Sub(args) => {
                write!(f, "        subq {}", args)
            }
            | Instr::Cmp(args) => {
                write!(f, "        cmpq {}", args)
            }
            | Instr::Push(r) => {
                write!(f, "        pushq {}", r)
            }
            | Instr::Pop(r) => {
                write!(f, "        popq {}", r)
            }
            | Instr::Label(s) => {
                write!(f, "{}:", s)
            }
            | Instr::Comment(s) => {
                write!(f, "        # {}", s)
            }
            | Instr::Global(s) => {
                write!(f, "        .globl {}", s)
            }
            | Instr::Section(s) => {
                write!(f, "        .section {}", s)
            }
            | Instr::Jmp(l) => {
                write!(f, "        jmp {}", l)
            }
            | Instr::JCC(cc, l) => {
                write!(f, "        j{} {}", cc, l)
            }
            | Instr::Call(s) => {
                write!(f, "        call {}", s)
            }
            | Instr::Ret => {
                write!(f, "        ret")
            }
            | Instr::P2Align(n) => {
                write!(f, "        .p2align {}", n)
            }
            | Instr::Quad(v) => {
                write!(f, "        .quad {}", v)
            }
            | Instr::Zero(n) => {
                write!(f, "        .zero {}", n)
            }
        }
    }
}

impl fmt::Display for AsmFile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // The data section is always present: the memory image has at least
        // its zero-filled extension.
        writeln!(f, "        .data")?;
        for instr in &self.data {
            writeln!(f, "{}", instr)?;
        }

        writeln!(f, "        .text")?;
        for instr in &self.text {
            writeln!(f, "{}", instr)?;
        }

        Ok(())
    }
}
