use super::err::{CompileError, Result};
use crate::{BuildConf, amd64::pack::PackageAmd64};
use std::path::{Path, PathBuf};
use subleq_syntax::{Program, parse_program};
use subleq_x86::{Emitter, TargetFormat};

/// Program text that has not been parsed yet.
pub struct PackageSource {
    pub name: String,
    pub path: Option<PathBuf>,
    pub source: String,
}

impl PackageSource {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self { name: name.into(), path: None, source: source.into() }
    }
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            Err(CompileError::SrcFileNotFound(path.to_path_buf()))?
        }
        let source = std::fs::read_to_string(path)
            .map_err(|err| CompileError::SrcFileInvalid(path.to_path_buf(), err))?;
        let name = (path.file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "main".to_string());
        Ok(Self { name, path: Some(path.to_path_buf()), source })
    }
    pub fn parse(self) -> Result<PackageProgram> {
        let PackageSource { name, path, source } = self;
        let program = parse_program(&source).map_err(|err| {
            let file = match &path {
                | Some(path) => path.display().to_string(),
                | None => name.clone(),
            };
            CompileError::ParseError(file, err)
        })?;
        log::info!("Parsed {}: {} cells", name, program.len());
        Ok(PackageProgram { name, program })
    }
}

/// A parsed program, ready to be translated or interpreted.
#[derive(Clone, Debug)]
pub struct PackageProgram {
    pub name: String,
    pub program: Program,
}

impl PackageProgram {
    /// The assembly listing of the program for `format`.
    pub fn emit(&self, format: TargetFormat) -> String {
        let assembly = Emitter::new(format).run(self.program.cells()).to_string();
        log::debug!("Emitted {} bytes of assembly for {}", assembly.len(), self.name);
        assembly
    }
    pub fn compile(self, build_conf: BuildConf) -> Result<PackageAmd64> {
        let format = (build_conf.target_format())
            .ok_or_else(|| CompileError::UnsupportedTargetOs(build_conf.target_os.clone()))?;
        let assembly = self.emit(format);
        let PackageProgram { name, .. } = self;
        Ok(PackageAmd64 { name, format, assembly, build_conf })
    }
}
