pub mod check_dto;
