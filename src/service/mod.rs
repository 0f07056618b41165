pub mod mailer;
pub mod productivity;
pub mod reminder;
