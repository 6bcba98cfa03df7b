pub mod book;
pub mod contact;

pub use book::ContactBook;
pub use contact::Contact;

/// Outcome of a handler that did not fail.
///
/// `Warning` covers the one non-error, non-success path: adding a username
/// that already exists leaves the book untouched and warns instead of
/// raising.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    Warning(String),
}
