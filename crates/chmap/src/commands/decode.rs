use std::path::Path;

use charmapper::codec::{CharMapDecoder, DEFAULT_PLACEHOLDER, DecodeOptions};

use crate::{
    input_output::{InputArgs, OutputArgs},
    map_selector::MapSelectorArgs,
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    map_selector: MapSelectorArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Character written for index 0.
    #[arg(long, default_value_t = DEFAULT_PLACEHOLDER)]
    placeholder: char,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(
        &self,
        dir: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let options = DecodeOptions::default().with_placeholder(self.placeholder);
        let decoder = CharMapDecoder::with_options(self.map_selector.load_map(dir)?, options);

        let mut reader = self.input.open_reader(dir)?;
        let mut writer = self.output.open_writer(dir)?;

        let stats = decoder.decode_stream(&mut reader, &mut writer)?;
        if stats.skipped > 0 {
            log::warn!("skipped {} invalid or out-of-range tokens", stats.skipped);
        }

        Ok(())
    }
}
