pub mod auth_gate;
pub mod request_context;
