// Copyright (c) 2026 rezky_nightky

//! Canvas-style digital rain: columns of random glyphs fall down a pixel
//! surface and leave fading trails behind them.
//!
//! [`sim`] holds the pure per-column rules and [`renderer::Renderer`] composes
//! them into frames on any [`surface::Surface`]. The remaining modules are the
//! terminal host: [`frame::Frame`] emulates a canvas on a character grid,
//! [`terminal::Terminal`] puts it on screen and [`timer::RepeatingTimer`]
//! drives the frames.

pub mod cell;
pub mod charset;
pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod renderer;
pub mod runtime;
pub mod sim;
pub mod surface;
pub mod terminal;
pub mod timer;

pub use error::{Error, Result};
