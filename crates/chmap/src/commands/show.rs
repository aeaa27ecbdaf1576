use std::{io::Write, path::Path};

use charmapper::map::write_char_map_listing;

use crate::{input_output::OutputArgs, map_selector::MapSelectorArgs};

/// Args for the show command.
#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    map_selector: MapSelectorArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl ShowArgs {
    /// Run the show command.
    pub fn run(
        &self,
        dir: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let map = self.map_selector.load_map(dir)?;

        let mut writer = self.output.open_writer(dir)?;
        write_char_map_listing(&map, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}
