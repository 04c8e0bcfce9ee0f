pub mod answers;
pub mod audit;
pub mod catalog;
pub mod contexts;
pub mod init;
pub mod score;
