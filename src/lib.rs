//! A terminal vertical shooter: a scene stack driving a fixed-rate frame
//! loop, a particle-effect engine and the shooter simulation itself.

pub mod assets;
pub mod compute;
pub mod config;
pub mod constants;
pub mod display;
pub mod effect;
pub mod entities;
pub mod error;
pub mod input;
pub mod scene;
pub mod sprite;
pub mod widget;
