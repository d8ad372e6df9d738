pub mod check_controller;
pub mod health_controller;
