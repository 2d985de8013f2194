pub mod comments;
pub mod health;
pub mod likes;
pub mod threads;
