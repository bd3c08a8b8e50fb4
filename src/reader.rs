//! Buffered deck reader, with integrated .gz decompression.
#[cfg(feature = "flate2")]
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug)]
pub(crate) enum BufferedReader {
    /// Readable (plain) deck file
    Plain(BufReader<File>),
    /// gzip compressed deck, as served by the ATCF archives
    #[cfg(feature = "flate2")]
    Gz(BufReader<GzDecoder<File>>),
}

impl BufferedReader {
    /// Builds a new BufferedReader for efficient deck interation,
    /// with possible .gz decompression
    pub fn new(path: &Path) -> std::io::Result<Self> {
        let file = File::open(path)?;
        let gzip = path
            .extension()
            .map(|extension| extension == "gz")
            .unwrap_or(false);
        if gzip {
            #[cfg(feature = "flate2")]
            {
                Ok(Self::Gz(BufReader::new(GzDecoder::new(file))))
            }
            #[cfg(not(feature = "flate2"))]
            {
                Err(std::io::Error::new(
                    std::io::ErrorKind::Unsupported,
                    ".gz decks require the flate2 feature",
                ))
            }
        } else {
            // assumes no extra compression
            Ok(Self::Plain(BufReader::new(file)))
        }
    }
}

impl std::io::Read for BufferedReader {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, std::io::Error> {
        match self {
            Self::Plain(ref mut reader) => reader.read(buf),
            #[cfg(feature = "flate2")]
            Self::Gz(ref mut reader) => reader.read(buf),
        }
    }
}

impl std::io::BufRead for BufferedReader {
    fn fill_buf(&mut self) -> Result<&[u8], std::io::Error> {
        match self {
            Self::Plain(ref mut reader) => reader.fill_buf(),
            #[cfg(feature = "flate2")]
            Self::Gz(ref mut reader) => reader.fill_buf(),
        }
    }
    fn consume(&mut self, s: usize) {
        match self {
            Self::Plain(ref mut reader) => reader.consume(s),
            #[cfg(feature = "flate2")]
            Self::Gz(ref mut reader) => reader.consume(s),
        }
    }
}
