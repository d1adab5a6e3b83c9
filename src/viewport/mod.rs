pub mod mapper;
pub mod controls;
