pub mod email;
pub mod repo;
pub mod service;
pub mod user_id;
