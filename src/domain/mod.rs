pub mod contact;

pub use contact::{ContactForm, FieldError};
