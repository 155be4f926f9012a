pub mod credential;
pub mod health;
