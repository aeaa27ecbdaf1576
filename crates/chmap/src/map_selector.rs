use std::{path::Path, sync::Arc};

use charmapper::{
    CharMap,
    LoadOptions,
    files::FileRef,
    map::{DEFAULT_MAP_CAPACITY, load_char_map_path},
};

/// Character map selector arg group.
#[derive(clap::Args, Debug)]
pub struct MapSelectorArgs {
    /// Character map file; a bare number "n" means "n.txt".
    #[arg(long)]
    map: String,

    /// Map slot capacity; lines with larger indices are skipped.
    #[arg(long, default_value_t = DEFAULT_MAP_CAPACITY)]
    capacity: usize,
}

impl MapSelectorArgs {
    /// Get the map file reference.
    pub fn map_ref(&self) -> FileRef {
        FileRef::parse(&self.map)
    }

    /// Load the character map.
    pub fn load_map(
        &self,
        dir: &Path,
    ) -> Result<Arc<CharMap>, Box<dyn std::error::Error>> {
        let path = self.map_ref().resolve(dir);
        let options = LoadOptions::default().with_capacity(self.capacity);

        let report = load_char_map_path(&path, &options)
            .map_err(|e| format!("failed to load character map {}: {e}", path.display()))?;

        if report.skipped() > 0 {
            log::warn!(
                "{}: skipped {} malformed lines",
                path.display(),
                report.skipped()
            );
        }
        if report.map.is_empty() {
            log::warn!("{}: character map is empty", path.display());
        }

        Ok(Arc::new(report.map))
    }
}
