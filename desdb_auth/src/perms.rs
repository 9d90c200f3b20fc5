use crate::{Error, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Group and other read/write/execute bits.
#[cfg(unix)]
const GROUP_OTHER_MASK: u32 = 0o077;

/// Opens a credential file and reads it, refusing files that are not private
/// to their owner.
///
/// Returns `Ok(None)` when the file does not exist. The mode is taken from the
/// already opened handle, so the file checked is the file read.
pub fn read_private(path: &Path) -> Result<Option<String>> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::io(path, e)),
    };
    check_mode(&file, path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData => Error::format(path, "file is not valid UTF-8"),
        _ => Error::io(path, e),
    })?;
    Ok(Some(contents))
}

#[cfg(unix)]
fn check_mode(file: &File, path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = file
        .metadata()
        .map_err(|e| Error::io(path, e))?
        .permissions()
        .mode();
    if mode & GROUP_OTHER_MASK != 0 {
        return Err(Error::Permission {
            path: path.to_path_buf(),
            mode: mode & 0o777,
        });
    }
    Ok(())
}

// No group/other mode bits to inspect here.
#[cfg(not(unix))]
fn check_mode(_file: &File, _path: &Path) -> Result<()> {
    Ok(())
}
