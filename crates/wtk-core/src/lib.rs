//! Hardware-independent window/widget toolkit core for wtk-rs
//!
//! This crate contains the display-composition engine for small touch-screen
//! devices: the window tree, command-event dispatch, and the prebuilt widget
//! types (basic frame, label, icon button/group) that application code
//! composes into full-screen widget contexts.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).
//!
//! The engine is strictly single-threaded: one task owns a [`win::Ui`] and
//! drives all tree mutation, drawing, and dispatch through it. Interrupt
//! handlers never call into the tree; they push raw samples into an
//! [`input::TouchQueue`] that the owning task drains.

#![no_std]

extern crate alloc;

pub mod command;
pub mod error;
pub mod fill;
pub mod input;
pub mod widgets;
pub mod win;

pub use command::{Command, Dispatch};
pub use error::UiError;
pub use fill::{Bitmap, Fill};
pub use input::{TouchEvent, TouchPoint, TouchQueue, TouchSample};
pub use widgets::{FrameHandle, FrameHandler, GroupId, IconButtonHandle, LabelHandle};
pub use win::{Ui, WindowId};
