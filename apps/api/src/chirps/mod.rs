pub mod handlers;
pub mod moderation;
pub mod validation;
