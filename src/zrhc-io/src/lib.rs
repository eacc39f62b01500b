pub mod record;
pub mod read;
pub mod write;
