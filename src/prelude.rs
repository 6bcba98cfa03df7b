pub use crate::cli::{
    command::{self, Cli, Command, parse_input},
    run_app,
};
pub use crate::domain::{
    Reply,
    book::ContactBook,
    contact::{Contact, normalize_username},
};
pub use crate::errors::AppError;
pub use crate::validation::validate_phone;
