// Command modules for sunpad CLI

pub mod ata;
pub mod create;
pub mod metadata;
pub mod utils;
