mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::{fs, path::Path};
use subleq_driver::{
    BuildConf, BuildError, Conf, Exit, PackageRuntime, PackageSource,
    compile::err::CompileError,
};
use subleq_x86::TargetFormat;

fn main() {
    let Cli { conf, command } = Cli::parse();

    let mut logger = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    if command.verbose() {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    match run(conf.as_deref(), command) {
        | Ok(code) => std::process::exit(code),
        | Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            std::process::exit(1);
        }
    }
}

fn run(conf: Option<&Path>, command: Commands) -> Result<i32, BuildError> {
    let conf = match conf {
        | Some(path) => Conf::load(path)?,
        | None => Conf::default(),
    };
    match command {
        | Commands::Emit { file, output, target_os, verbose: _ } => {
            let target_os = target_os.or(conf.target_os.clone());
            let format = match target_os {
                | Some(os) => {
                    TargetFormat::from_os(&os).ok_or(CompileError::UnsupportedTargetOs(os))?
                }
                | None => TargetFormat::host(),
            };
            let pack = PackageSource::from_file(&file)?.parse()?;
            let assembly = pack.emit(format);
            match output {
                | Some(path) => fs::write(&path, assembly)?,
                | None => print!("{}", assembly),
            }
            Ok(0)
        }
        | Commands::Build {
            file,
            bin,
            build_dir,
            cc,
            target_os,
            target_arch,
            link_existing,
            execute,
            verbose: _,
        } => {
            let mut build_conf = BuildConf::new(&conf);
            if let Some(build_dir) = build_dir {
                build_conf.build_dir = build_dir;
            }
            if let Some(cc) = cc {
                build_conf.cc = cc;
            }
            if let Some(target_os) = target_os {
                build_conf.target_os = target_os;
            }
            if let Some(target_arch) = target_arch {
                build_conf.target_arch = target_arch;
            }
            build_conf.link_existing = link_existing;

            let mut pack = PackageSource::from_file(&file)?.parse()?;
            if let Some(bin) = bin {
                pack.name = bin;
            }
            let exe = pack.compile(build_conf)?.link()?;
            if !execute {
                println!("{}", exe.executable.display());
                return Ok(0);
            }
            let status = exe.run()?;
            Ok(status.code().unwrap_or(1))
        }
        | Commands::Interp { file, fuel, verbose: _ } => {
            let pack: PackageRuntime = PackageSource::from_file(&file)?.parse()?.into();
            let fuel = fuel.or(conf.fuel);
            if let Exit::OutOfFuel { steps } = pack.run(fuel)? {
                log::warn!("stopped after {} steps without halting", steps);
            }
            Ok(0)
        }
    }
}
