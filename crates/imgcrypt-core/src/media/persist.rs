use std::io::{BufWriter, Write};
use std::path::Path;

use log::error;
use tempfile::Builder;

use crate::result::Result;
use crate::ImgCryptError;

/// Writes `target` through a temporary file next to it, which is renamed into
/// place only after `write` succeeded. A failed write leaves no file behind.
pub fn write_atomically<F>(target: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut builder = Builder::new();
    // temp files default to owner only; let the umask decide like fs::write does
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir).map_err(|source| {
        error!("Error creating temporary file in {dir:?}: {source}");
        ImgCryptError::WriteError { source }
    })?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write(&mut writer)?;
        writer
            .flush()
            .map_err(|source| ImgCryptError::WriteError { source })?;
    }

    tmp.persist(target).map_err(|e| {
        error!("Error moving finished file to {target:?}: {}", e.error);
        ImgCryptError::WriteError { source: e.error }
    })?;

    Ok(())
}
