pub mod dashboard;
pub mod db;
pub mod followup;
pub mod forms;
