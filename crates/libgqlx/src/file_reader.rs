use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ReadContentError>;

/// Reads a schema file as UTF-8 text.
pub(crate) fn read_content(file_path: &Path) -> Result<String> {
    let metadata = std::fs::metadata(file_path)
        .map_err(|err| ReadContentError::from_io(file_path, err))?;
    if !metadata.is_file() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)
        .map_err(|err| ReadContentError::from_io(file_path, err))?;

    String::from_utf8(bytes).map_err(|err| ReadContentError::FileDecodeError {
        file_path: file_path.to_path_buf(),
        valid_up_to: err.utf8_error().valid_up_to(),
    })
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ReadContentError {
    #[error(
        "schema file is not valid UTF-8 (first invalid byte at offset \
        {valid_up_to}): {}",
        file_path.display(),
    )]
    FileDecodeError {
        file_path: PathBuf,
        valid_up_to: usize,
    },

    #[error("schema file does not exist: {}", .0.display())]
    FileDoesNotExist(PathBuf),

    #[error("failed to read schema file {}: {message}", file_path.display())]
    FileReadError {
        file_path: PathBuf,
        kind: ErrorKind,
        message: String,
    },

    #[error("schema path is not a file: {}", .0.display())]
    PathIsNotAFile(PathBuf),
}
impl ReadContentError {
    fn from_io(file_path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            ErrorKind::NotFound => Self::FileDoesNotExist(file_path.to_path_buf()),
            kind => Self::FileReadError {
                file_path: file_path.to_path_buf(),
                kind,
                message: err.to_string(),
            },
        }
    }
}
