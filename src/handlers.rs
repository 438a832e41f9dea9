pub mod auth;
pub mod dashboard;
pub mod health;
pub mod lunches;
pub mod meals;
pub mod orders;
pub mod users;
