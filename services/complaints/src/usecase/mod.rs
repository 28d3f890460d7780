pub mod attachment;
pub mod audit;
pub mod complaint;
pub mod message;
pub mod profile;
