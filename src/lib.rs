//! Gadget Skill - Voice skill backend for a connected gadget
//!
//! On launch the skill discovers the gadgets connected to the user's device
//! and binds the conversation to the first one. Command intents then send a
//! custom interface directive to that gadget.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
