pub mod account_service;
pub mod high_score_service;
pub mod registration_form;
