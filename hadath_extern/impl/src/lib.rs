pub mod contact_messages;
mod http;
