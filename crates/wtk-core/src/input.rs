// src/input.rs
//! Touch input surface.
//!
//! The touch-controller collaborator supplies raw press/release samples.
//! Interrupt context never calls into the window tree: samples go through
//! a [`TouchQueue`] that the task owning the [`Ui`] drains, preserving the
//! single-writer invariant on the tree. [`Ui::handle_touch`] then
//! hit-tests the sample against the mapped windows and runs the widget
//! press semantics.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embedded_graphics::prelude::*;
use log::warn;

use crate::command::Dispatch;
use crate::error::UiError;
use crate::win::{Ui, WidgetKind};

/// A 2D touch point in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

/// A touch transition reported by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchEvent {
    Press(TouchPoint),
    Release(TouchPoint),
}

/// A raw sample as delivered by the touch controller: the event plus the
/// controller's timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchSample {
    pub event: TouchEvent,
    pub timestamp_ms: u64,
}

/// Fixed-depth queue carrying touch samples from interrupt context to the
/// task that owns the [`Ui`].
///
/// Const-constructible so it can live in a `static`:
///
/// ```ignore
/// static TOUCH: TouchQueue = TouchQueue::new();
///
/// // interrupt context
/// TOUCH.try_push(sample);
///
/// // main task
/// while let Some(sample) = TOUCH.poll() {
///     ui.handle_touch(sample.event)?;
/// }
/// ```
pub struct TouchQueue<const N: usize = 8> {
    channel: Channel<CriticalSectionRawMutex, TouchSample, N>,
}

impl<const N: usize> TouchQueue<N> {
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    /// Enqueue a sample. Never blocks; when the queue is full the sample
    /// is dropped and `false` returned (the display simply misses a tap,
    /// which beats stalling the interrupt handler).
    pub fn try_push(&self, sample: TouchSample) -> bool {
        if self.channel.try_send(sample).is_err() {
            warn!("touch queue full, sample at {} ms dropped", sample.timestamp_ms);
            return false;
        }
        true
    }

    /// Dequeue the oldest pending sample, if any. Never blocks.
    pub fn poll(&self) -> Option<TouchSample> {
        self.channel.try_receive().ok()
    }
}

impl<const N: usize> Default for TouchQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui {
    /// Route one touch event through the tree.
    ///
    /// Presses hit-test for the topmost mapped window under the point
    /// (last-inserted sibling wins on overlap); a hit on an icon button
    /// runs the press semantics and dispatches its command. Presses on
    /// anything else, and all releases, are dropped.
    pub fn handle_touch(&mut self, event: TouchEvent) -> Result<Dispatch, UiError> {
        let TouchEvent::Press(point) = event else {
            return Ok(Dispatch::Dropped);
        };
        let Some(hit) = self.hit_test(point.to_point()) else {
            return Ok(Dispatch::Dropped);
        };
        if matches!(self.window(hit)?.widget, WidgetKind::IconButton(_)) {
            self.press_icon(hit)
        } else {
            Ok(Dispatch::Dropped)
        }
    }
}
