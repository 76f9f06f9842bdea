use std::fmt;

#[derive(Debug, PartialEq)]
pub enum Error {
    /// The chain or a strategy was wired incorrectly at build time.
    Initialization(String),
    /// An injected token verifier or record lookup rejected.
    Verification(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Initialization(err) => write!(f, "{err}"),
            Error::Verification(err) => write!(f, "Verification failed: {err}"),
        }
    }
}
