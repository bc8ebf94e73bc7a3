use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse BioNetGen XML: {details} (at line {line}, column {column})")]
    Parse {
        line: u32,
        column: u32,
        details: String,
    },
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        let pos = e.pos();
        Error::parse(pos.row, pos.col, e.to_string())
    }
}

impl Error {
    pub fn parse(line: u32, column: u32, details: impl Into<String>) -> Self {
        Self::Parse {
            line,
            column,
            details: details.into(),
        }
    }
}
