pub mod commands;
pub mod emailjs;
pub mod environment;
