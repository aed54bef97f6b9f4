pub mod handlers;
pub mod visits;
