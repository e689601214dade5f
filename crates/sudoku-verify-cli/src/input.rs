//! Grid loading for the CLI: a file, standard input, or the built-in
//! sample solution.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use sudoku_verify_core::{Grid, GridParseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("cannot read standard input: {0}")]
    Stdin(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] GridParseError),
}

/// Load the grid named on the command line, or the sample solution when no
/// path was given. `-` reads standard input.
pub fn load_grid(path: Option<&Path>) -> Result<Grid, LoadError> {
    match path {
        None => Ok(Grid::sample()),
        Some(path) if path == Path::new("-") => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(Grid::from_text(&text)?)
        }
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
                path: path.display().to_string(),
                source,
            })?;
            Ok(Grid::from_text(&text)?)
        }
    }
}
