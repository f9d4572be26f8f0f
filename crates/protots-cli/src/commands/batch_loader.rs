use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use protots_compiler::{Batch, Options};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error(transparent)]
    Batch(#[from] protots_compiler::Error),
}

/// Read a descriptor set (`-` is stdin) and preprocess it into a batch.
pub fn load_batch(path: &Path, options: Options) -> Result<Batch, LoadError> {
    let json = read_input(path)?;
    Ok(Batch::from_json(options, &json)?)
}

fn read_input(path: &Path) -> Result<String, LoadError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(LoadError::Stdin)?;
        return Ok(buf);
    }

    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_owned(),
        source,
    })
}

/// Print the error and exit, the way every command reports a failed load.
pub fn load_or_exit(path: &Path, options: Options) -> Batch {
    load_batch(path, options).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}
