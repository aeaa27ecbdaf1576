use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use charmapper::files::{DEFAULT_DIR_RESOLVER, FileRef};

fn squash_standard_io(path: &Option<String>) -> Option<FileRef> {
    match path {
        Some(p) if p == "-" => None,
        Some(p) => Some(FileRef::parse(p)),
        None => None,
    }
}

/// Numbered-file directory arg group.
#[derive(clap::Args, Debug)]
pub struct DirArgs {
    /// Directory for numbered files ("5" => "DIR/5.txt");
    /// defaults to `$CHARMAPPER_DIR`, then ".".
    #[arg(long, global = true, default_value = None)]
    pub dir: Option<String>,
}

impl DirArgs {
    /// Resolve the numbered-file directory.
    pub fn resolve_dir(&self) -> PathBuf {
        DEFAULT_DIR_RESOLVER.resolve_dir(self.dir.as_ref())
    }
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file or file number; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(
        &self,
        dir: &Path,
    ) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.input) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(r) => {
                let path = r.resolve(dir);
                log::info!("input: {}", path.display());
                Box::new(BufReader::new(File::open(path)?))
            }
        })
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file or file number; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(
        &self,
        dir: &Path,
    ) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(r) => {
                let path = r.resolve(dir);
                log::info!("output: {}", path.display());
                Box::new(BufWriter::new(File::create(path)?))
            }
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}
