use std::path::Path;

use charmapper::enumerate::{
    CellEnumerator,
    DEFAULT_ALPHABET,
    DEFAULT_ENUMERATION_LIMIT,
    EnumerateOptions,
};

use crate::input_output::OutputArgs;

/// Args for the enumerate command.
#[derive(clap::Args, Debug)]
pub struct EnumerateArgs {
    /// Number of cells per string.
    #[arg(long)]
    cells: usize,

    /// Alphabet; defaults to letters, digits, punctuation, and whitespace.
    #[arg(long, default_value = None)]
    alphabet: Option<String>,

    /// Refuse enumerations longer than this.
    #[arg(long, default_value_t = DEFAULT_ENUMERATION_LIMIT)]
    limit: u64,

    #[command(flatten)]
    output: OutputArgs,
}

impl EnumerateArgs {
    /// Run the enumerate command.
    pub fn run(
        &self,
        dir: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let alphabet = self.alphabet.as_deref().unwrap_or(DEFAULT_ALPHABET);
        let options = EnumerateOptions::default()
            .with_cells(self.cells)
            .with_limit(self.limit);
        let enumerator = CellEnumerator::new(alphabet.chars(), &options)?;

        let mut writer = self.output.open_writer(dir)?;
        enumerator.write_listing(&mut writer)?;

        Ok(())
    }
}
