pub(crate) mod controller;
pub(crate) mod dto;
pub(crate) mod mapper;
