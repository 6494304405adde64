pub mod configs;
pub mod count_request;
pub mod elastic_dto;
pub mod error_group;
