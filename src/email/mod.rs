pub mod mailer;
pub mod templates;

pub use mailer::{EmailMessage, HttpMailer, Mailer};
