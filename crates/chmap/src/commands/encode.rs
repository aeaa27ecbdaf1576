use std::path::Path;

use charmapper::CharMapEncoder;

use crate::{
    input_output::{InputArgs, OutputArgs},
    map_selector::MapSelectorArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    map_selector: MapSelectorArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(
        &self,
        dir: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let encoder = CharMapEncoder::new(self.map_selector.load_map(dir)?);

        let mut reader = self.input.open_reader(dir)?;
        let mut writer = self.output.open_writer(dir)?;

        let stats = encoder.encode_stream(&mut reader, &mut writer)?;
        if stats.unmapped > 0 {
            log::warn!(
                "{} of {} characters are not in the map and were encoded as 0",
                stats.unmapped,
                stats.chars
            );
        }

        Ok(())
    }
}
