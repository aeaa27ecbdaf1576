use std::{
    env,
    fs,
    path::{Path, PathBuf},
    process::{Command, ExitCode},
};

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask", about = "charmapper dev tasks")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Run clippy --fix then cargo +nightly fmt
    Fmt {
        /// Extra arguments passed to `cargo fmt`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Regenerate docs/cli.md from the chmap clap definitions
    CliDocs,
}

fn repo_root() -> PathBuf {
    let manifest = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    Path::new(&manifest)
        .parent()
        .expect("xtask should be one level below repo root")
        .to_path_buf()
}

fn run(cmd: &mut Command) -> Result<(), String> {
    let status = cmd
        .status()
        .map_err(|e| format!("failed to run {:?}: {e}", cmd.get_program()))?;
    if !status.success() {
        return Err(format!("{:?} exited with {status}", cmd.get_program()));
    }
    Ok(())
}

fn cmd_fmt(args: &[String]) -> Result<(), String> {
    run(Command::new("cargo").args(["clippy", "--fix", "--allow-dirty", "--allow-staged"]))?;
    let mut cmd = Command::new("cargo");
    cmd.args(["+nightly", "fmt"]);
    cmd.args(args);
    run(&mut cmd)
}

fn cmd_cli_docs(root: &Path) -> Result<(), String> {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "-p", "chmap", "--", "markdown-help"])
        .current_dir(root)
        .output()
        .map_err(|e| format!("failed to run chmap: {e}"))?;
    if !output.status.success() {
        return Err(format!(
            "chmap markdown-help exited with {}:\n{}",
            output.status,
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    let docs = root.join("docs");
    fs::create_dir_all(&docs).map_err(|e| format!("create docs dir: {e}"))?;
    let dest = docs.join("cli.md");
    fs::write(&dest, &output.stdout).map_err(|e| format!("write {}: {e}", dest.display()))?;

    println!("Wrote {}", dest.display());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let root = repo_root();

    let result = match cli.cmd {
        Cmd::Fmt { args } => cmd_fmt(&args),
        Cmd::CliDocs => cmd_cli_docs(&root),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
