// src/widgets/icon.rs
//! Icon buttons and icon groups.
//!
//! An icon button is a leaf window that renders a bitmap and acts as a
//! pressable control. Buttons registered under an icon group get radio
//! semantics: at most one member of the group is in the pressed/active
//! visual state, and activating one deactivates the others before the
//! repaint. Buttons with no group are momentary triggers with no
//! persistent state.
//!
//! # Destruction order
//!
//! Groups and their member buttons have independent lifetimes. The group
//! table holds weak window ids, validated by generation on every use:
//! destroying a button first prunes it from its group, destroying the
//! group first downgrades the remaining members to momentary buttons.
//! Either order is safe.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use heapless::Vec;
use log::{debug, error};

use crate::command::{Command, Dispatch};
use crate::error::UiError;
use crate::fill::Bitmap;
use crate::win::{Ui, WidgetKind, WindowId};

/// Maximum number of simultaneously live icon groups.
pub const MAX_GROUPS: usize = 4;

/// Maximum number of buttons per group.
pub const MAX_GROUP_MEMBERS: usize = 8;

/// Border drawn around the active member of a group.
const SELECTION_COLOR: Rgb565 = Rgb565::YELLOW;
const SELECTION_WIDTH: u32 = 2;

/// Handle to an icon group. Generation-tagged like window handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupId {
    index: u8,
    generation: u8,
}

pub(crate) struct IconGroup {
    members: Vec<WindowId, MAX_GROUP_MEMBERS>,
}

pub(crate) struct GroupSlot {
    generation: u8,
    group: Option<IconGroup>,
}

pub(crate) struct IconButton {
    bitmap: Bitmap,
    pressed: bool,
    pub(crate) group: Option<GroupId>,
    command_id: u16,
}

impl IconButton {
    pub(crate) fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        area: Rectangle,
        display: &mut D,
    ) -> Result<(), D::Error> {
        self.bitmap.draw(area.top_left, display)?;
        if self.pressed {
            area.into_styled(PrimitiveStyle::with_stroke(
                SELECTION_COLOR,
                SELECTION_WIDTH,
            ))
            .draw(display)?;
        }
        Ok(())
    }
}

/// Typed handle to an icon button.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct IconButtonHandle(pub(crate) WindowId);

impl IconButtonHandle {
    /// The underlying window, for tree operations.
    pub fn as_window(self) -> WindowId {
        self.0
    }
}

/// Native dimensions of the button's bitmap, for reserving layout space
/// before creation.
pub fn icon_button_size_hint(bitmap: &Bitmap) -> Size {
    bitmap.size()
}

impl Ui {
    /// Create a logical group for mutually exclusive icon buttons.
    ///
    /// Groups are created independently of any window and are not cascaded
    /// by window destruction; the owning widget context destroys them with
    /// [`Ui::destroy_icon_group`].
    pub fn create_icon_group(&mut self) -> Result<GroupId, UiError> {
        let index = if let Some(index) = self.groups.iter().position(|s| s.group.is_none()) {
            index
        } else if self.groups.len() < MAX_GROUPS {
            self.groups
                .push(GroupSlot {
                    generation: 0,
                    group: None,
                })
                .map_err(|_| UiError::OutOfMemory)?;
            self.groups.len() - 1
        } else {
            return Err(UiError::OutOfMemory);
        };

        let slot = &mut self.groups[index];
        slot.group = Some(IconGroup {
            members: Vec::new(),
        });
        Ok(GroupId {
            index: index as u8,
            generation: slot.generation,
        })
    }

    /// Destroy an icon group.
    ///
    /// Member buttons may be destroyed before or after the group; a button
    /// outliving its group simply behaves as an ungrouped momentary button
    /// from then on.
    pub fn destroy_icon_group(&mut self, group: GroupId) -> Result<(), UiError> {
        let slot = self
            .groups
            .get_mut(group.index as usize)
            .filter(|s| s.generation == group.generation && s.group.is_some())
            .ok_or_else(|| {
                error!("stale icon group handle {:?}", group);
                UiError::InvalidHandle
            })?;
        slot.group = None;
        slot.generation = slot.generation.wrapping_add(1);
        Ok(())
    }

    fn group(&self, id: GroupId) -> Option<&IconGroup> {
        self.groups
            .get(id.index as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.group.as_ref())
    }

    fn group_mut(&mut self, id: GroupId) -> Option<&mut IconGroup> {
        self.groups
            .get_mut(id.index as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.group.as_mut())
    }

    /// Drop `member` from `group`, if both still exist. Called from window
    /// teardown; silently tolerates a group destroyed first.
    pub(crate) fn remove_group_member(&mut self, group: GroupId, member: WindowId) {
        if let Some(group) = self.group_mut(group) {
            group.members.retain(|m| *m != member);
        }
    }

    /// Create an icon button under `parent`, hidden until shown.
    ///
    /// `group` registers the button for radio semantics; `None` makes it a
    /// momentary trigger. `command_id` is dispatched from the button's
    /// window on every press. Creating a grouped button with
    /// `initial_pressed` set deactivates any previously active member, so
    /// at most one member is ever active regardless of creation order.
    pub fn create_icon_button(
        &mut self,
        parent: WindowId,
        area: Rectangle,
        bitmap: Bitmap,
        initial_pressed: bool,
        group: Option<GroupId>,
        command_id: u16,
    ) -> Result<IconButtonHandle, UiError> {
        if let Some(group_id) = group {
            let group = self.group(group_id).ok_or(UiError::InvalidHandle)?;
            if group.members.is_full() {
                return Err(UiError::OutOfMemory);
            }
        }

        let id = self.alloc_window(
            parent,
            area,
            WidgetKind::IconButton(IconButton {
                bitmap,
                pressed: initial_pressed,
                group,
                command_id,
            }),
        )?;

        if let Some(group_id) = group {
            if initial_pressed {
                self.deactivate_other_members(group_id, id);
            }
            if let Some(group) = self.group_mut(group_id) {
                // Capacity was checked above; the window slot would leak on
                // failure here.
                group.members.push(id).ok();
            }
        }
        Ok(IconButtonHandle(id))
    }

    /// Whether the button is in the pressed/active visual state.
    pub fn is_icon_pressed(&self, button: IconButtonHandle) -> Result<bool, UiError> {
        let node = self.window(button.0)?;
        let WidgetKind::IconButton(state) = &node.widget else {
            return Err(UiError::InvalidHandle);
        };
        Ok(state.pressed)
    }

    /// Handle a press landing on an icon button's window.
    ///
    /// Grouped: deactivate every other member (repainting only those that
    /// actually were active), activate this button, then dispatch its
    /// command from the button's window. Re-pressing the active member is
    /// idempotent on state but still dispatches. Ungrouped: dispatch only.
    pub(crate) fn press_icon(&mut self, window: WindowId) -> Result<Dispatch, UiError> {
        let node = self.window(window)?;
        let WidgetKind::IconButton(state) = &node.widget else {
            return Err(UiError::InvalidHandle);
        };
        let group = state.group;
        let command_id = state.command_id;

        if let Some(group_id) = group
            && self.group(group_id).is_some()
        {
            self.deactivate_other_members(group_id, window);
            self.set_icon_state(window, true)?;
        }

        debug!("icon button {:?} pressed, command {}", window, command_id);
        self.dispatch(window, Command::new(command_id))
    }

    /// Deactivate every member of `group` except `keep`. Stale member ids
    /// (buttons already destroyed) are skipped and pruned. A stale group id
    /// is a no-op: the caller then behaves as an ungrouped button.
    fn deactivate_other_members(&mut self, group: GroupId, keep: WindowId) {
        let Some(group_state) = self.group(group) else {
            return;
        };
        let members = group_state.members.clone();
        let mut stale = false;
        for member in members.iter().copied() {
            if member == keep {
                continue;
            }
            if !self.is_live(member) {
                stale = true;
                continue;
            }
            self.set_icon_state(member, false).ok();
        }
        if stale {
            let mut live: Vec<WindowId, MAX_GROUP_MEMBERS> = Vec::new();
            for member in members.iter().copied().filter(|m| self.is_live(*m)) {
                live.push(member).ok();
            }
            if let Some(group_state) = self.group_mut(group) {
                group_state.members = live;
            }
        }
    }

    /// Set the pressed state, invalidating the button's area only when the
    /// state actually changes.
    fn set_icon_state(&mut self, window: WindowId, pressed: bool) -> Result<(), UiError> {
        let node = self.window_mut(window)?;
        let WidgetKind::IconButton(state) = &mut node.widget else {
            return Err(UiError::InvalidHandle);
        };
        if state.pressed == pressed {
            return Ok(());
        }
        state.pressed = pressed;
        self.invalidate_window(window)
    }
}
