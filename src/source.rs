//! Input source selection
//!
//! Numbers come either from standard input or from a file. A regular file
//! also reports its size up front, which is what progress reporting is
//! measured against.

use crate::error::{Error, Result};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Where numbers are read from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl From<Option<PathBuf>> for InputSource {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => InputSource::File(path),
            None => InputSource::Stdin,
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl InputSource {
    /// Open the source for buffered reading
    pub fn open(&self) -> Result<Input> {
        match self {
            InputSource::Stdin => Ok(Input {
                reader: Box::new(io::stdin().lock()),
                size: None,
            }),
            InputSource::File(path) => open_file(path),
        }
    }
}

fn open_file(path: &Path) -> Result<Input> {
    let open_err = |source| Error::Open {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(open_err)?;
    let metadata = file.metadata().map_err(open_err)?;

    // Pipes and devices have no meaningful length
    let size = metadata.is_file().then(|| metadata.len());
    log::debug!("opened {} (size: {:?})", path.display(), size);

    Ok(Input {
        reader: Box::new(BufReader::new(file)),
        size,
    })
}

/// An opened source
pub struct Input {
    reader: Box<dyn BufRead>,
    size: Option<u64>,
}

impl Input {
    /// Wrap any reader, with an optional known total size in bytes
    pub fn from_reader<R: BufRead + 'static>(reader: R, size: Option<u64>) -> Self {
        Self {
            reader: Box::new(reader),
            size,
        }
    }

    /// Total size in bytes, when known in advance
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    /// The buffered reader
    pub fn into_reader(self) -> Box<dyn BufRead> {
        self.reader
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};

    #[test]
    fn test_from_arg() {
        assert_eq!(InputSource::from(None), InputSource::Stdin);
        assert_eq!(
            InputSource::from(Some(PathBuf::from("data.txt"))),
            InputSource::File(PathBuf::from("data.txt"))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(InputSource::Stdin.to_string(), "<stdin>");
        assert_eq!(InputSource::File("a/b.txt".into()).to_string(), "a/b.txt");
    }

    #[test]
    fn test_open_file_reports_size() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"1\n2\n3\n").unwrap();

        let input = InputSource::File(file.path().to_path_buf()).open().unwrap();
        assert_eq!(input.size(), Some(6));

        let mut text = String::new();
        input.into_reader().read_to_string(&mut text).unwrap();
        assert_eq!(text, "1\n2\n3\n");
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        match InputSource::File(path.clone()).open() {
            Err(Error::Open { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("opening a missing file succeeded"),
        }
    }
}
