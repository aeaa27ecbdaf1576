use std::{io::Write, path::Path};

use charmapper::{
    CharMap,
    enumerate::DEFAULT_ALPHABET,
    map::{DEFAULT_MAP_CAPACITY, write_char_map},
};

use crate::input_output::OutputArgs;

/// Args for the generate-map command.
#[derive(clap::Args, Debug)]
pub struct GenerateMapArgs {
    /// Alphabet, in index order; defaults to letters, digits, punctuation, and whitespace.
    #[arg(long, default_value = None)]
    alphabet: Option<String>,

    /// Map slot capacity; the alphabet must fit, and the map must be loaded
    /// with the same "--capacity".
    #[arg(long, default_value_t = DEFAULT_MAP_CAPACITY)]
    capacity: usize,

    #[command(flatten)]
    output: OutputArgs,
}

impl GenerateMapArgs {
    /// Build the character map.
    pub fn build_map(&self) -> Result<CharMap, Box<dyn std::error::Error>> {
        let alphabet = self.alphabet.as_deref().unwrap_or(DEFAULT_ALPHABET);
        let map = CharMap::from_alphabet(alphabet.chars(), self.capacity)
            .map_err(|e| format!("{e}; pass a larger --capacity"))?;

        log::info!("generated character map with {} characters", map.size());
        if self.capacity != DEFAULT_MAP_CAPACITY {
            log::warn!(
                "map capacity is {}; load it with --capacity {}",
                self.capacity,
                self.capacity
            );
        }
        Ok(map)
    }

    /// Run the generate-map command.
    pub fn run(
        &self,
        dir: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let map = self.build_map()?;

        let mut writer = self.output.open_writer(dir)?;
        write_char_map(&map, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}
