//! Model -> entity mappers
//!
//! Rows are trusted: values the schema constrains (status, priority) fall
//! back to their defaults rather than failing the whole query.

mod admin;
mod blog;
mod contact_message;
mod destination;
mod employee;
mod partner;
