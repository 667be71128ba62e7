pub mod action;
pub mod message;
