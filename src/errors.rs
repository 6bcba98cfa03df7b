use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    NotFound(String),
    Regex(regex::Error),
    Usage(String),
    Validation(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Regex(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while reading or writing the terminal: {}", e)
            }
            AppError::NotFound(username) => {
                write!(f, "User '{}' doesn't exist.", username)
            }
            AppError::Regex(e) => {
                write!(f, "Invalid validation pattern: {}", e)
            }
            AppError::Usage(msg) => {
                write!(f, "{}", msg)
            }
            AppError::Validation(msg) => {
                write!(f, "{}", msg)
            }
        }
    }
}
