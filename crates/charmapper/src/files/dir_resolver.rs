//! # Directory Resolver

use std::{
    env,
    path::{Path, PathBuf},
};

/// The environment variable naming the numbered-file directory.
pub const CHARMAPPER_DIR_ENV: &str = "CHARMAPPER_DIR";

/// Static configuration for numbered-file directory resolution.
pub struct DirResolver {
    /// The resolution order for directory environment variables.
    pub env_vars: &'static [&'static str],
}

/// The default resolver, consulting [`CHARMAPPER_DIR_ENV`].
pub const DEFAULT_DIR_RESOLVER: DirResolver = DirResolver {
    env_vars: &[CHARMAPPER_DIR_ENV],
};

impl DirResolver {
    /// Resolve the numbered-file directory.
    ///
    /// Resolution Order:
    /// 1. `path`, if present.
    /// 2. ``env[$VAR]`` for each `self.env_vars`; in order.
    /// 3. the current directory, `"."`.
    pub fn resolve_dir<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> PathBuf {
        if let Some(path) = path.as_ref() {
            return path.as_ref().to_path_buf();
        }

        for env_var in self.env_vars {
            if let Ok(path) = env::var(env_var)
                && !path.is_empty()
            {
                return PathBuf::from(path);
            }
        }

        PathBuf::from(".")
    }
}
