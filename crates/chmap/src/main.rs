mod commands;
mod input_output;
mod logging;
mod map_selector;

use clap::Parser;
use commands::Commands;
use input_output::DirArgs;
use logging::LogArgs;

/// chmap: character map encoder / decoder.
#[derive(clap::Parser, Debug)]
#[command(version)]
pub struct Args {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[clap(flatten)]
    pub files: DirArgs,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.setup_logging(2)?;

    let dir = args.files.resolve_dir();
    args.command.run(&dir)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_decode() {
        let args = Args::try_parse_from([
            "chmap",
            "-v",
            "--dir",
            "maps",
            "decode",
            "--map",
            "1",
            "--input",
            "2",
            "--placeholder",
            "_",
        ])
        .unwrap();

        assert_eq!(args.files.resolve_dir(), std::path::PathBuf::from("maps"));
        assert!(matches!(args.command, Commands::Decode(_)));
    }

    #[test]
    fn test_map_is_required() {
        assert!(Args::try_parse_from(["chmap", "encode", "--input", "main.c"]).is_err());
    }
}
