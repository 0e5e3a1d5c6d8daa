//! HTTP surface

pub mod dto;
pub mod error;
pub mod mapper;
pub mod routes;
pub mod server;
