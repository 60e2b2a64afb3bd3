pub mod layout;
pub mod templates;
pub mod uploads;
