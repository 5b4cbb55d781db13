use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;

use log::trace;

pub fn read(path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
    trace!("reading from: {}", path.as_ref().display());
    fs::read(path)
}

pub fn read_to_string(path: impl AsRef<Path>) -> io::Result<String> {
    trace!("reading from: {}", path.as_ref().display());
    fs::read_to_string(path)
}

pub fn write(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> io::Result<()> {
    trace!("writing to: {}", path.as_ref().display());
    fs::write(path, contents)
}

pub fn create_dir_all(path: impl AsRef<Path>) -> io::Result<()> {
    trace!("creating directory: {}", path.as_ref().display());
    fs::create_dir_all(path)
}

pub trait PathExt {
    #[must_use]
    fn has_extension<E>(&self, extension: E) -> bool
    where
        for<'a> &'a OsStr: PartialEq<E>;
}

impl PathExt for Path {
    fn has_extension<E>(&self, extension: E) -> bool
    where
        for<'a> &'a OsStr: PartialEq<E>,
    {
        self.extension().map_or(false, |ext| ext == extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_extension() {
        assert!(Path::new("output/out.pdf").has_extension("pdf"));
        assert!(!Path::new("output/out.html").has_extension("pdf"));
        assert!(!Path::new("out").has_extension("pdf"));
    }
}
