//! Terminal Snake whose body is a ring of recycled segments.
//!
//! The core is [`snake::Snake`] and the tick loop in [`game_loop`]; drawing
//! and input reach the core only through [`renderer::Canvas`] and
//! [`input::InputSource`].

pub mod config;
pub mod food;
pub mod game;
pub mod game_loop;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod rng;
pub mod settings;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
