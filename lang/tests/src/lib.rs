pub mod utils {
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use subleq_driver::{BuildConf, PackageRuntime, PackageSource};

    /// Enough steps for every program under `lang/lib`.
    pub const FUEL: u64 = 1_000_000;

    pub fn lib_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../lib")
    }

    fn source_and_expected(binary: &str) -> (PathBuf, Vec<u8>) {
        let dir = lib_dir();
        let src = dir.join(format!("{}.slq", binary));
        let out = dir.join(format!("{}.out", binary));
        let expected = std::fs::read(&out)
            .unwrap_or_else(|err| panic!("No expected output for {}: {}", binary, err));
        (src, expected)
    }

    pub fn wrapper_interp_bin(binary: &str) {
        let (src, expected) = source_and_expected(binary);
        let res = PackageSource::from_file(&src)
            .map_err(|err| err.to_string())
            .and_then(|pack| pack.parse().map_err(|err| err.to_string()))
            .and_then(|pack| {
                PackageRuntime::from(pack)
                    .test(&expected, FUEL, false)
                    .map_err(|err| err.to_string())
            });
        match res {
            | Ok(_) => {}
            | Err(err) => {
                eprintln!("{}", err);
                panic!("Error running program");
            }
        }
    }

    pub fn wrapper_native_bin(binary: &str) {
        let (src, expected) = source_and_expected(binary);
        let build_conf = BuildConf {
            build_dir: std::env::temp_dir().join("subleq-tests").join(binary),
            ..BuildConf::default()
        };
        let res = PackageSource::from_file(&src)
            .map_err(|err| err.to_string())
            .and_then(|pack| pack.parse().map_err(|err| err.to_string()))
            .and_then(|pack| pack.compile(build_conf).map_err(|err| err.to_string()))
            .and_then(|pack| pack.link().map_err(|err| err.to_string()))
            .and_then(|exe| exe.output().map_err(|err| err.to_string()));
        match res {
            | Ok(output) => {
                assert!(output.status.success(), "{} exited with {}", binary, output.status);
                assert_eq!(output.stdout, expected);
            }
            | Err(err) => {
                eprintln!("{}", err);
                panic!("Error building program");
            }
        }
    }
}

#[macro_export]
macro_rules! interp_bin {
    ($name:ident, $binary:expr) => {
        #[test]
        fn $name() {
            ::subleq_tests::utils::wrapper_interp_bin($binary);
        }
    };
}

/// Needs `cc` and an x86-64 host, so these only run with `--ignored`.
#[macro_export]
macro_rules! native_bin {
    ($name:ident, $binary:expr) => {
        #[test]
        #[ignore = "needs an x86-64 C toolchain"]
        fn $name() {
            ::subleq_tests::utils::wrapper_native_bin($binary);
        }
    };
}
