pub mod api_client;
pub mod http;
pub mod observability;
pub mod providers;
pub mod runtime;
