use std::path::Path;

mod decode;
mod encode;
mod enumerate;
mod generate_map;
mod show;

/// Subcommands for chmap
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Load a character map and list its slots.
    Show(show::ShowArgs),

    /// Encode text into map indices.
    Encode(encode::EncodeArgs),

    /// Decode map indices into text.
    Decode(decode::DecodeArgs),

    /// Write a character map over an alphabet.
    GenerateMap(generate_map::GenerateMapArgs),

    /// List every fixed-length string over an alphabet.
    Enumerate(enumerate::EnumerateArgs),

    /// Print the CLI reference as markdown.
    #[command(hide = true)]
    MarkdownHelp,
}

impl Commands {
    /// Run the subcommand.
    pub fn run(
        &self,
        dir: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Show(cmd) => cmd.run(dir),
            Commands::Encode(cmd) => cmd.run(dir),
            Commands::Decode(cmd) => cmd.run(dir),
            Commands::GenerateMap(cmd) => cmd.run(dir),
            Commands::Enumerate(cmd) => cmd.run(dir),
            Commands::MarkdownHelp => {
                clap_markdown::print_help_markdown::<crate::Args>();
                Ok(())
            }
        }
    }
}
