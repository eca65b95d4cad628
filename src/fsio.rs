use std::fs;
use std::path::Path;

use crate::error::BuildError;

pub fn read_file(path: &Path) -> Result<String, BuildError> {
    fs::read_to_string(path).map_err(|err| BuildError::from_io(err, path))
}

pub fn write_file(path: &Path, content: &str) -> Result<(), BuildError> {
    fs::write(path, content).map_err(|err| BuildError::from_io(err, path))
}

/// Copy a file and carry its accessed/modified timestamps over to the
/// destination. `fs::copy` already preserves permissions, so this is the
/// full metadata set the deployment copy cares about.
pub fn copy_preserving_times(source: &Path, dest: &Path) -> Result<(), BuildError> {
    fs::copy(source, dest).map_err(|err| BuildError::from_io(err, source))?;

    let metadata = fs::metadata(source).map_err(|err| BuildError::from_io(err, source))?;
    let mut times = fs::FileTimes::new();
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }

    let dest_file = fs::File::options()
        .write(true)
        .open(dest)
        .map_err(|err| BuildError::from_io(err, dest))?;
    dest_file
        .set_times(times)
        .map_err(|err| BuildError::from_io(err, dest))?;
    Ok(())
}
