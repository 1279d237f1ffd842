pub mod panic;
pub mod request_id;
pub mod route_path;
