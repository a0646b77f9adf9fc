use eyre::{Result, eyre};
use std::path::PathBuf;

/// Load a `.env` file from the working directory or its ancestors.
///
/// Returns the path that was loaded, or `None` when there is no file. A file
/// that exists but cannot be parsed is an error.
pub fn load_env() -> Result<Option<PathBuf>> {
    interpret_dotenv(dotenvy::dotenv())
}

fn interpret_dotenv(result: dotenvy::Result<PathBuf>) -> Result<Option<PathBuf>> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(eyre!("Failed to load .env file: {}", err)),
    }
}
