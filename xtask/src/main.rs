use std::{
    env,
    path::{Path, PathBuf},
};

use xshell::{cmd, Shell};

xflags::xflags! {
    cmd xtask {
        /// Run the test suite
        cmd test {
            /// Only run tests containing `filter` as substring.
            optional filter: String
        }
        /// Run the conformance check, e.g. `cargo xtask run -- -Sverbose -Swidth=64`
        cmd run {
            /// Build and run in release mode
            optional --release
            /// Options passed to `shiftck`
            repeated opts: String
        }
        /// Install the `shiftck` binary to ~/.cargo/bin
        cmd install { }
        /// Uninstall the `shiftck` binary
        cmd uninstall { }
        /// Build the documentation
        cmd doc {
            optional -o,--open
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cmd = match Xtask::from_env() {
        Ok(cmd) => cmd,
        Err(err) => {
            if err.is_help() {
                std::process::exit(0);
            } else {
                eprintln!("error: {err}\n");
                println!("{}", Xtask::HELP_);
                std::process::exit(2);
            }
        }
    };

    let sh = Shell::new()?;
    sh.change_dir(project_root()?);
    match cmd.subcommand {
        XtaskCmd::Test(args) => test(&sh, args),
        XtaskCmd::Run(args) => run(&sh, args),
        XtaskCmd::Install(_) => install(&sh),
        XtaskCmd::Uninstall(_) => uninstall(&sh),
        XtaskCmd::Doc(args) => doc(&sh, args),
    }
}

fn test(sh: &Shell, args: Test) -> anyhow::Result<()> {
    let Test { filter } = args;
    if let Some(filter) = filter {
        cmd!(sh, "cargo test --workspace -- {filter}").run()?;
    } else {
        cmd!(sh, "cargo test --workspace").run()?;
    }
    Ok(())
}

fn run(sh: &Shell, args: Run) -> anyhow::Result<()> {
    let Run { release, opts } = args;
    let profile = if release { &["--release"][..] } else { &[] };
    cmd!(sh, "cargo run {profile...} --bin shiftck -- {opts...}").run()?;
    Ok(())
}

fn install(sh: &Shell) -> anyhow::Result<()> {
    cmd!(sh, "cargo install --path crates/shiftck-driver --force").run()?;
    Ok(())
}

fn uninstall(sh: &Shell) -> anyhow::Result<()> {
    cmd!(sh, "cargo uninstall -p shiftck-driver").run()?;
    Ok(())
}

fn doc(sh: &Shell, args: Doc) -> anyhow::Result<()> {
    cmd!(sh, "cargo doc --document-private-items --no-deps").run()?;
    if args.open {
        opener::open("target/doc/shiftck_driver/index.html")?;
    }
    Ok(())
}

fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| env!("CARGO_MANIFEST_DIR").to_owned());
    Path::new(&manifest_dir)
        .ancestors()
        .nth(1)
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow::anyhow!("xtask manifest has no parent directory"))
}
