use super::err::{LinkError, Result};
use crate::BuildConf;
use std::{
    fs::File,
    io::Write,
    path::PathBuf,
    process::{Command, ExitStatus, Output, Stdio},
};
use subleq_x86::TargetFormat;

pub struct PackageAmd64 {
    pub name: String,
    pub format: TargetFormat,
    pub assembly: String,
    pub build_conf: BuildConf,
}

/// Extra flags for the C compiler driver; Mach-O toolchains may default to
/// another architecture.
pub fn arch_flags(format: TargetFormat) -> &'static [&'static str] {
    match format {
        | TargetFormat::Elf64 | TargetFormat::Coff64 => &[],
        | TargetFormat::MachO64 => &["-arch", "x86_64"],
    }
}

impl PackageAmd64 {
    /// Write the assembly into the build directory, then assemble and link it
    /// against the C library with the configured compiler driver.
    pub fn link(self) -> Result<PackageAmd64Executable> {
        let PackageAmd64 { name, format, assembly, build_conf } = self;
        let BuildConf { build_dir, cc, target_os: _, target_arch, link_existing } = build_conf;
        match target_arch.as_str() {
            | "x86_64" | "amd64" => {}
            | _ => Err(LinkError::UnsupportedTargetArch(target_arch))?,
        }
        let flags = arch_flags(format);
        std::fs::create_dir_all(&build_dir).map_err(LinkError::BuildDirError)?;

        let asm_fname = build_dir.join(format!("{}.s", name));
        let obj_fname = build_dir.join(format!("{}.o", name));
        let exe_fname = build_dir.join(format!("{}{}", name, format.exe_suffix()));

        // remove existing files
        if !link_existing {
            std::fs::remove_file(&asm_fname).ok();
        }
        std::fs::remove_file(&obj_fname).ok();
        std::fs::remove_file(&exe_fname).ok();

        if !link_existing {
            let mut asm_file = File::create(&asm_fname).map_err(LinkError::AssemblyWriteError)?;
            asm_file.write_all(assembly.as_bytes()).map_err(LinkError::AssemblyWriteError)?;
            asm_file.flush().map_err(LinkError::AssemblyWriteError)?;
        }
        log::debug!("Assembly written to {}", asm_fname.display());

        // cc -c -o prog.o prog.s
        let as_out = Command::new(&cc)
            .args(flags)
            .arg("-c")
            .arg("-o")
            .arg(&obj_fname)
            .arg(&asm_fname)
            .output()
            .map_err(LinkError::AssemblerRunError)?;
        if !as_out.status.success() {
            Err(LinkError::AssemblerOutputError(format!(
                "{}\n{}",
                as_out.status,
                String::from_utf8_lossy(&as_out.stderr)
            )))?
        }

        // cc -o prog prog.o
        let ld_out = Command::new(&cc)
            .args(flags)
            .arg("-o")
            .arg(&exe_fname)
            .arg(&obj_fname)
            .output()
            .map_err(LinkError::LinkerRunError)?;
        if !ld_out.status.success() {
            Err(LinkError::LinkerOutputError(format!(
                "{}\n{}",
                ld_out.status,
                String::from_utf8_lossy(&ld_out.stderr)
            )))?
        }
        log::info!("Linked {}", exe_fname.display());

        Ok(PackageAmd64Executable { name, executable: exe_fname })
    }
}

pub struct PackageAmd64Executable {
    pub name: String,
    pub executable: PathBuf,
}

impl PackageAmd64Executable {
    /// Run with interactive I/O.
    pub fn run(self) -> Result<ExitStatus> {
        let PackageAmd64Executable { name, executable } = self;
        log::info!("Running program: {}", name);
        let mut child = Command::new(&executable)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(LinkError::ExecutableRunError)?;
        let status = child.wait().map_err(LinkError::ExecutableRunError)?;
        log::info!("Program exited with {}", status);
        Ok(status)
    }
    /// Run to completion and capture what the program writes.
    pub fn output(self) -> Result<Output> {
        let PackageAmd64Executable { name, executable } = self;
        log::info!("Running program: {}", name);
        let output = Command::new(&executable)
            .stdin(Stdio::null())
            .output()
            .map_err(LinkError::ExecutableRunError)?;
        log::info!("Program exited with {}", output.status);
        Ok(output)
    }
}
