pub mod attachment;
pub mod audit;
pub mod complaint;
pub mod health;
pub mod message;
pub mod profile;
