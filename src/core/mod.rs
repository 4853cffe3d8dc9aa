//! Core module - Events and demo settings

pub mod events;
pub mod settings;
