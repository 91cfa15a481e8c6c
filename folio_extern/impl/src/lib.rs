pub mod emailjs;
pub mod http;
