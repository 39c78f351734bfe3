use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::template::Operation;

/// Creates every folder, including missing parents. Existing folders are fine.
///
/// Stops at the first folder that cannot be created.
pub fn create_folders<P: AsRef<Path>>(folders: &[P]) -> Result<()> {
    for folder in folders {
        let folder = folder.as_ref();
        std::fs::create_dir_all(folder).map_err(|source| Error::CreateDirectoryError {
            path: folder.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Writes every `(path, content)` pair in order.
///
/// Stops at the first failure; files written before it are left in place.
pub fn create_files<I, P, S>(files: I) -> Result<()>
where
    I: IntoIterator<Item = (P, S)>,
    P: AsRef<Path>,
    S: AsRef<str>,
{
    for (path, content) in files {
        write_file(content.as_ref(), path)?;
    }
    Ok(())
}

/// Creates or truncates `dest_path` and writes `content` to it verbatim.
///
/// The parent directory must already exist. The file handle is closed when this
/// function returns, whether the write succeeded or not.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    let to_error =
        |source: std::io::Error| Error::WriteFileError { path: dest_path.to_path_buf(), source };

    let file = File::create(dest_path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes()).map_err(to_error)?;
    writer.flush().map_err(to_error)
}

/// Runs planned operations in order: directories first, then files.
///
/// With `dry_run` the operations are only logged.
pub fn apply(operations: &[Operation], dry_run: bool) -> Result<()> {
    let mut folders = Vec::new();
    let mut files = Vec::new();
    for operation in operations {
        log::info!("{}", operation.get_message(dry_run));
        match operation {
            Operation::CreateDirectory { target, .. } => folders.push(target),
            Operation::Write { target, content, .. } => files.push((target, content)),
        }
    }

    if dry_run {
        return Ok(());
    }

    create_folders(&folders)?;
    create_files(files)
}

/// Reads a single line, keeping its line terminator. Returns an empty string at EOF.
pub fn read_line(mut reader: impl BufRead) -> Result<String> {
    let mut buf = String::new();
    reader.read_line(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}
