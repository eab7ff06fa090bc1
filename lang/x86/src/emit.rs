use super::syntax::*;
use std::fmt;
use subleq_syntax::{EXTENSION_CELLS, IO_SENTINEL};

/// Size in bytes of one memory cell.
pub const CELL_BYTES: usize = 8;
/// Zero-filled bytes appended after the program cells.
pub const EXTENSION_BYTES: usize = EXTENSION_CELLS * CELL_BYTES;
/// Label of the first cell of the memory image.
pub const MEMORY_LABEL: &str = "memory";

/* -------------------------------- Registers ------------------------------- */

// PC and BASE are callee-saved under both System V and Win64 so they
// survive `putchar`; everything else is reloaded on every fetch.
const PC: Reg = Reg::R12;
const BASE: Reg = Reg::R13;
const A: Reg = Reg::Rax;
const B: Reg = Reg::Rdx;
// dead on the print path, where Win64 takes its argument in rcx
const C: Reg = Reg::Rcx;
const SRC: Reg = Reg::Rsi;
const DST: Reg = Reg::R8;

/* --------------------------------- Target --------------------------------- */

/// Object format the listing is written for, together with the calling
/// convention used for `putchar`.
///
/// - **`Elf64`**: Linux, System V AMD64, `putchar` called through the PLT.
/// - **`MachO64`**: macOS, System V AMD64, symbols prefixed with `_`.
/// - **`Coff64`**: Windows with a MinGW toolchain, Microsoft x64 convention.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum TargetFormat {
    Elf64,
    MachO64,
    Coff64,
}

impl TargetFormat {
    pub fn host() -> Self {
        if cfg!(target_os = "macos") {
            TargetFormat::MachO64
        } else if cfg!(target_os = "windows") {
            TargetFormat::Coff64
        } else {
            TargetFormat::Elf64
        }
    }
    pub fn from_os(os: &str) -> Option<Self> {
        match os {
            | "linux" | "elf64" => Some(TargetFormat::Elf64),
            | "macos" | "darwin" | "macho64" => Some(TargetFormat::MachO64),
            | "windows" | "win64" | "coff64" => Some(TargetFormat::Coff64),
            | _ => None,
        }
    }
    /// A C-level symbol as the linker sees it; Mach-O prefixes an underscore.
    pub fn symbol(self, name: &str) -> String {
        match self {
            | TargetFormat::Elf64 | TargetFormat::Coff64 => name.to_string(),
            | TargetFormat::MachO64 => format!("_{}", name),
        }
    }
    /// An assembler-local label that never reaches the symbol table.
    pub fn local_label(self, name: &str) -> String {
        match self {
            | TargetFormat::Elf64 | TargetFormat::Coff64 => format!(".L{}", name),
            | TargetFormat::MachO64 => format!("L{}", name),
        }
    }
    /// Suffix the linker gives executables for this format.
    pub fn exe_suffix(self) -> &'static str {
        match self {
            | TargetFormat::Elf64 | TargetFormat::MachO64 => "",
            | TargetFormat::Coff64 => ".exe",
        }
    }
    fn call_target(self, name: &str) -> String {
        match self {
            | TargetFormat::Elf64 => format!("{}@PLT", name),
            | TargetFormat::MachO64 | TargetFormat::Coff64 => self.symbol(name),
        }
    }
    /// Register holding the first integer argument of a call.
    fn arg0(self) -> Reg {
        match self {
            | TargetFormat::Elf64 | TargetFormat::MachO64 => Reg::Rdi,
            | TargetFormat::Coff64 => Reg::Rcx,
        }
    }
    /// Bytes the caller reserves above the return address for the callee.
    fn shadow_space(self) -> i64 {
        match self {
            | TargetFormat::Elf64 | TargetFormat::MachO64 => 0,
            | TargetFormat::Coff64 => 32,
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            | TargetFormat::Elf64 => write!(f, "elf64"),
            | TargetFormat::MachO64 => write!(f, "macho64"),
            | TargetFormat::Coff64 => write!(f, "coff64"),
        }
    }
}

/* --------------------------------- Emitter -------------------------------- */

pub trait Emit {
    fn emit(&self, em: &mut Emitter);
}

pub struct Emitter {
    pub format: TargetFormat,
    pub data: Vec<Instr>,
    pub text: Vec<Instr>,
}

impl Emitter {
    pub fn new(format: TargetFormat) -> Self {
        Self { format, data: Vec::new(), text: Vec::new() }
    }

    pub fn run(mut self, program: &[i64]) -> AsmFile {
        log::debug!(
            "emitting {} program cells and {} extension cells for {}",
            program.len(),
            EXTENSION_CELLS,
            self.format
        );
        DataSection { cells: program }.emit(&mut self);
        DispatchLoop.emit(&mut self);
        let Emitter { data, text, .. } = self;
        AsmFile { data, text }
    }

    fn label(&self, name: &str) -> String {
        self.format.local_label(name)
    }
}

/// The memory image: every program cell in order, then the zero-filled extension.
pub struct DataSection<'p> {
    pub cells: &'p [i64],
}

impl Emit for DataSection<'_> {
    fn emit(&self, em: &mut Emitter) {
        em.data.extend([Instr::P2Align(3), Instr::Label(MEMORY_LABEL.to_string())]);
        em.data.extend(self.cells.iter().map(|&cell| Instr::Quad(cell)));
        em.data.push(Instr::Zero(EXTENSION_BYTES));
    }
}

/// The fetch/execute loop. Its text never depends on the program.
pub struct DispatchLoop;

impl Emit for DispatchLoop {
    fn emit(&self, em: &mut Emitter) {
        let main = em.format.symbol("main");
        let putchar = em.format.call_target("putchar");
        let fetch = em.label("fetch");
        let jump = em.label("jump");
        let print = em.label("print");
        let exit = em.label("exit");
        let cell = |index: Reg| MemRef::scaled(BASE, index, 0);

        // entry
        em.text.extend([
            Instr::Global(main.clone()),
            Instr::Label(main),
            Instr::Push(Reg::Rbp),
            Instr::Mov(BinArgs::new(Reg::Rsp, Reg::Rbp)),
            Instr::Push(PC),
            Instr::Push(BASE),
            Instr::Comment("resolve the memory image once".to_string()),
            Instr::Lea(RelLabel { label: MEMORY_LABEL.to_string() }, BASE),
            Instr::Mov(BinArgs::new(0i64, PC)),
        ]);

        // fetch: all three operands are read before anything is written
        em.text.extend([
            Instr::Label(fetch.clone()),
            Instr::Cmp(BinArgs::new(0i64, PC)),
            Instr::JCC(ConditionCode::L, exit.clone()),
            Instr::Mov(BinArgs::new(MemRef::scaled(BASE, PC, 0), A)),
            Instr::Mov(BinArgs::new(MemRef::scaled(BASE, PC, CELL_BYTES as i32), B)),
            Instr::Mov(BinArgs::new(MemRef::scaled(BASE, PC, 2 * CELL_BYTES as i32), C)),
            Instr::Cmp(BinArgs::new(IO_SENTINEL, B)),
            Instr::JCC(ConditionCode::E, print.clone()),
        ]);

        // subtract and branch
        em.text.extend([
            Instr::Comment("mem[b] <- mem[b] - mem[a]".to_string()),
            Instr::Mov(BinArgs::new(cell(A), SRC)),
            Instr::Mov(BinArgs::new(cell(B), DST)),
            Instr::Sub(BinArgs::new(SRC, DST)),
            Instr::Mov(BinArgs::new(DST, cell(B))),
            Instr::Cmp(BinArgs::new(0i64, DST)),
            Instr::JCC(ConditionCode::LE, jump.clone()),
            Instr::Add(BinArgs::new(3i64, PC)),
            Instr::Jmp(fetch.clone()),
            Instr::Label(jump),
            Instr::Mov(BinArgs::new(C, PC)),
            Instr::Jmp(fetch.clone()),
        ]);

        // print: c was fetched but is unused
        let shadow = em.format.shadow_space();
        em.text.extend([Instr::Label(print), Instr::Mov(BinArgs::new(cell(A), em.format.arg0()))]);
        if shadow > 0 {
            em.text.push(Instr::Sub(BinArgs::new(shadow, Reg::Rsp)));
        }
        em.text.push(Instr::Call(putchar));
        if shadow > 0 {
            em.text.push(Instr::Add(BinArgs::new(shadow, Reg::Rsp)));
        }
        em.text.extend([Instr::Add(BinArgs::new(3i64, PC)), Instr::Jmp(fetch)]);

        // exit with status 0
        em.text.extend([
            Instr::Label(exit),
            Instr::Mov(BinArgs::new(0i64, Reg::Rax)),
            Instr::Pop(BASE),
            Instr::Pop(PC),
            Instr::Pop(Reg::Rbp),
            Instr::Ret,
        ]);

        if em.format == TargetFormat::Elf64 {
            // no executable stack
            em.text.push(Instr::Section(".note.GNU-stack,\"\",@progbits".to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use unindent::unindent;

    fn listing(program: &[i64], format: TargetFormat) -> String {
        Emitter::new(format).run(program).to_string()
    }

    #[test]
    fn hello_listing_elf64() {
        let expected = unindent(
            r#"
                    .data
                    .p2align 3
            memory:
                    .quad 3
                    .quad -1
                    .quad 0
                    .quad 72
                    .zero 65536
                    .text
                    .globl main
            main:
                    pushq %rbp
                    movq %rsp, %rbp
                    pushq %r12
                    pushq %r13
                    # resolve the memory image once
                    leaq memory(%rip), %r13
                    movq $0, %r12
            .Lfetch:
                    cmpq $0, %r12
                    jl .Lexit
                    movq (%r13, %r12, 8), %rax
                    movq 8(%r13, %r12, 8), %rdx
                    movq 16(%r13, %r12, 8), %rcx
                    cmpq $-1, %rdx
                    je .Lprint
                    # mem[b] <- mem[b] - mem[a]
                    movq (%r13, %rax, 8), %rsi
                    movq (%r13, %rdx, 8), %r8
                    subq %rsi, %r8
                    movq %r8, (%r13, %rdx, 8)
                    cmpq $0, %r8
                    jle .Ljump
                    addq $3, %r12
                    jmp .Lfetch
            .Ljump:
                    movq %rcx, %r12
                    jmp .Lfetch
            .Lprint:
                    movq (%r13, %rax, 8), %rdi
                    call putchar@PLT
                    addq $3, %r12
                    jmp .Lfetch
            .Lexit:
                    movq $0, %rax
                    popq %r13
                    popq %r12
                    popq %rbp
                    ret
                    .section .note.GNU-stack,"",@progbits
            "#,
        );
        assert_eq!(listing(&[3, -1, 0, 72], TargetFormat::Elf64), expected);
    }

    #[test]
    fn layout_has_one_quad_per_cell_and_fixed_extension() {
        assert_eq!(EXTENSION_BYTES, 65536);
        for n in [0usize, 1, 3, 17, 300] {
            let program: Vec<i64> = (0..n as i64).map(|i| i * 7 - 11).collect();
            let file = Emitter::new(TargetFormat::Elf64).run(&program);
            let quads: Vec<i64> = (file.data.iter())
                .filter_map(|instr| match instr {
                    | Instr::Quad(v) => Some(*v),
                    | _ => None,
                })
                .collect();
            assert_eq!(quads, program);
            let zeros: Vec<usize> = (file.data.iter())
                .filter_map(|instr| match instr {
                    | Instr::Zero(n) => Some(*n),
                    | _ => None,
                })
                .collect();
            assert_eq!(zeros, vec![EXTENSION_BYTES]);
            assert_eq!(file.data.last(), Some(&Instr::Zero(EXTENSION_CELLS * CELL_BYTES)));
        }
    }

    #[test]
    fn empty_program_is_label_then_extension() {
        let file = Emitter::new(TargetFormat::Elf64).run(&[]);
        assert_eq!(
            file.data,
            vec![
                Instr::P2Align(3),
                Instr::Label(MEMORY_LABEL.to_string()),
                Instr::Zero(EXTENSION_BYTES)
            ]
        );
    }

    #[test]
    fn loop_text_is_independent_of_program() {
        for format in [TargetFormat::Elf64, TargetFormat::MachO64] {
            let a = Emitter::new(format).run(&[]);
            let b = Emitter::new(format).run(&[0, 0, 0]);
            let c = Emitter::new(format).run(&[12, -1, 3, 14, 13, 9, 15, 15, 0, 42, 3, 1, 0]);
            assert_eq!(a.text, b.text);
            assert_eq!(a.text, c.text);
        }
    }

    #[test]
    fn macho_mangles_symbols() {
        let text = listing(&[0, 0, -1], TargetFormat::MachO64);
        assert!(text.contains("        .globl _main\n_main:\n"));
        assert!(text.contains("        call _putchar\n"));
        assert!(text.contains("Lfetch:\n"));
        assert!(!text.contains(".Lfetch"));
        assert!(!text.contains("GNU-stack"));
    }

    #[test]
    fn emit_program_writes_the_whole_listing() {
        let mut out = String::new();
        crate::emit_program(&[0, 0, -1], TargetFormat::Elf64, &mut out).unwrap();
        assert_eq!(out, listing(&[0, 0, -1], TargetFormat::Elf64));
        assert!(out.starts_with("        .data\n        .p2align 3\nmemory:\n        .quad 0\n"));
    }

    #[test]
    fn print_path_coff64() {
        let text = listing(&[3, -1, 0, 72], TargetFormat::Coff64);
        let print = text.find(".Lprint:\n").unwrap();
        let exit = text.find(".Lexit:\n").unwrap();
        let expected = unindent(
            r#"
            .Lprint:
                    movq (%r13, %rax, 8), %rcx
                    subq $32, %rsp
                    call putchar
                    addq $32, %rsp
                    addq $3, %r12
                    jmp .Lfetch
            "#,
        );
        assert_eq!(&text[print..exit], expected);
        assert!(text.contains("        .globl main\nmain:\n"));
        assert!(!text.contains("@PLT"));
        assert!(!text.contains("GNU-stack"));
    }

    #[test]
    fn coff64_differs_only_in_the_print_path() {
        let elf = Emitter::new(TargetFormat::Elf64).run(&[0, 0, -1]);
        let coff = Emitter::new(TargetFormat::Coff64).run(&[0, 0, -1]);
        assert_eq!(elf.data, coff.data);
        let removed: Vec<&Instr> = elf.text.iter().filter(|i| !coff.text.contains(i)).collect();
        assert_eq!(
            removed,
            vec![
                &Instr::Mov(BinArgs::new(MemRef::scaled(BASE, A, 0), Reg::Rdi)),
                &Instr::Call("putchar@PLT".to_string()),
                &Instr::Section(".note.GNU-stack,\"\",@progbits".to_string()),
            ]
        );
    }

    #[test]
    fn formats_from_os_names() {
        assert_eq!(TargetFormat::from_os("linux"), Some(TargetFormat::Elf64));
        assert_eq!(TargetFormat::from_os("elf64"), Some(TargetFormat::Elf64));
        assert_eq!(TargetFormat::from_os("darwin"), Some(TargetFormat::MachO64));
        assert_eq!(TargetFormat::from_os("windows"), Some(TargetFormat::Coff64));
        assert_eq!(TargetFormat::from_os("plan9"), None);
        assert_eq!(TargetFormat::Coff64.exe_suffix(), ".exe");
        assert_eq!(TargetFormat::Elf64.exe_suffix(), "");
    }
}
