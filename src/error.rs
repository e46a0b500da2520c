use std::{error, fmt};

pub enum Error {
    /// A date value didn't match any of the expected formats.
    Parse { value: String },
    /// A month abbreviation wasn't found in the lookup table.
    UnknownMonth { abbr: String },
    Other {
        message: String,
        source: Option<Box<dyn error::Error>>,
    },
}

impl Error {
    pub fn new(message: &str) -> Self {
        Self::Other {
            message: message.into(),
            source: None,
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::Parse {
            value: value.into(),
        }
    }

    pub fn unknown_month(abbr: &str) -> Self {
        Self::UnknownMonth { abbr: abbr.into() }
    }

    /// The raw value that failed to parse, if this is a parse failure.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Parse { value } => Some(value),
            Self::UnknownMonth { abbr } => Some(abbr),
            Self::Other { .. } => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Parse { value } => format!("couldn't parse date value '{}'", value),
            Self::UnknownMonth { abbr } => {
                format!("unrecognized month abbreviation '{}'", abbr)
            }
            Self::Other { message, .. } => message.clone(),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unexpected error: {}", self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Other {
                message,
                source: Some(err),
            } => write!(f, "{}. Source error: {}", message, err),
            _ => write!(f, "{}", self.message()),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Other {
                source: Some(ref err),
                ..
            } => Some(&**err),
            _ => None,
        }
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::Other {
            message,
            source: None,
        }
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::Other {
            message: message.into(),
            source: None,
        }
    }
}

impl<E: error::Error + 'static> From<(String, E)> for Error {
    fn from((message, err): (String, E)) -> Self {
        Self::Other {
            message,
            source: Some(Box::new(err)),
        }
    }
}

impl<E: error::Error + 'static> From<(&str, E)> for Error {
    fn from((message, err): (&str, E)) -> Self {
        Self::Other {
            message: message.into(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        format!("{}", err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
