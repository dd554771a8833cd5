use std::fs;
use std::io;
use std::path::Path;

use super::CliError;

/// Inline text wins over a path; `-` reads stdin.
pub fn load_source(path: Option<&Path>, text: Option<&str>) -> Result<String, CliError> {
    if let Some(text) = text {
        return Ok(text.to_owned());
    }
    let Some(path) = path else {
        return Err(CliError::MissingSource);
    };
    if path.as_os_str() == "-" {
        return io::read_to_string(io::stdin()).map_err(|source| CliError::Read {
            path: path.to_owned(),
            source,
        });
    }
    read_file(path)
}

pub fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}
