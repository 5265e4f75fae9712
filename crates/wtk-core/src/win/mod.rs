// src/win/mod.rs
//! Window tree: the hierarchical container of rectangular screen regions.
//!
//! The tree lives inside an explicit [`Ui`] context object (no globals, so
//! tests can build a fresh tree each) backed by a fixed-capacity arena of
//! generation-tagged slots. Parents own their children through an ordered
//! id list; children keep a non-owning back-reference, so destruction is a
//! plain top-down sweep with no cycle breaking.
//!
//! # Coordinates and painting
//!
//! A window's area is expressed in parent-relative coordinates and is
//! clipped to its ancestors when painted or hit-tested. Parents paint
//! before their children, siblings paint in insertion order, so the
//! last-inserted sibling ends up on top when areas overlap.
//!
//! # Redraw
//!
//! `show`, `hide`, `destroy` and caption changes accumulate a dirty region
//! (union of the affected on-screen areas). [`Ui::flush`] repaints only
//! when something is pending, restricted to that region; [`Ui::draw`]
//! unconditionally repaints everything.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;
use log::{debug, error};

use crate::error::UiError;
use crate::widgets::frame::Frame;
use crate::widgets::icon::{GroupSlot, IconButton, MAX_GROUPS};
use crate::widgets::label::Label;

/// Maximum number of simultaneously live windows, including the root.
pub const MAX_WINDOWS: usize = 32;

/// Maximum number of children per window.
pub const MAX_CHILDREN: usize = 12;

/// Handle to a window in the tree.
///
/// Handles are generation-tagged: after the window is destroyed the handle
/// goes stale and every operation on it reports
/// [`UiError::InvalidHandle`] instead of touching whatever reused the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId {
    pub(crate) index: u8,
    pub(crate) generation: u8,
}

/// Widget state attached to a window.
///
/// A tagged variant instead of a `void *` + function-pointer pair: the
/// renderer and the dispatcher match on the kind, so a window can never be
/// drawn or pressed as the wrong widget type.
pub(crate) enum WidgetKind {
    /// A bare region with no visual of its own (the display root).
    Plain,
    Frame(Frame),
    Label(Label),
    IconButton(IconButton),
}

pub(crate) struct Window {
    pub(crate) parent: Option<WindowId>,
    pub(crate) children: Vec<WindowId, MAX_CHILDREN>,
    /// Parent-relative bounding area.
    pub(crate) area: Rectangle,
    /// Explicit visibility flag; the window is only mapped (actually on
    /// screen) when every ancestor is shown as well.
    pub(crate) shown: bool,
    pub(crate) widget: WidgetKind,
}

struct Slot {
    generation: u8,
    window: Option<Window>,
}

/// The toolkit context: window arena, icon-group table and pending dirty
/// region. One per display; exclusively owned by the task that drives the
/// UI (single-writer, see the crate docs).
pub struct Ui {
    slots: Vec<Slot, MAX_WINDOWS>,
    pub(crate) groups: Vec<GroupSlot, MAX_GROUPS>,
    root: WindowId,
    dirty: Option<Rectangle>,
}

impl Ui {
    /// Create a context with a root window covering `display_size`.
    ///
    /// The root is created shown and lives for as long as the context does.
    pub fn new(display_size: Size) -> Self {
        let root = WindowId {
            index: 0,
            generation: 0,
        };
        let mut slots = Vec::new();
        // Capacity is MAX_WINDOWS >= 1, the push cannot fail.
        slots
            .push(Slot {
                generation: 0,
                window: Some(Window {
                    parent: None,
                    children: Vec::new(),
                    area: Rectangle::new(Point::zero(), display_size),
                    shown: true,
                    widget: WidgetKind::Plain,
                }),
            })
            .ok();

        Self {
            slots,
            groups: Vec::new(),
            root,
            dirty: None,
        }
    }

    /// The singleton display-root window of this context.
    pub fn root(&self) -> WindowId {
        self.root
    }

    /// Number of live windows, including the root. Mostly useful for leak
    /// assertions in tests.
    pub fn live_windows(&self) -> usize {
        self.slots.iter().filter(|s| s.window.is_some()).count()
    }

    // -----------------------------------------------------------------------
    // Handle validation
    // -----------------------------------------------------------------------

    pub(crate) fn window(&self, id: WindowId) -> Result<&Window, UiError> {
        self.slots
            .get(id.index as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.window.as_ref())
            .ok_or_else(|| {
                error!("stale window handle {:?}", id);
                UiError::InvalidHandle
            })
    }

    /// Quiet liveness probe for weak references (group membership); unlike
    /// [`Ui::window`] a stale id here is expected and not logged.
    pub(crate) fn is_live(&self, id: WindowId) -> bool {
        self.slots
            .get(id.index as usize)
            .is_some_and(|s| s.generation == id.generation && s.window.is_some())
    }

    pub(crate) fn window_mut(&mut self, id: WindowId) -> Result<&mut Window, UiError> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.window.as_mut())
            .ok_or_else(|| {
                error!("stale window handle {:?}", id);
                UiError::InvalidHandle
            })
    }

    // -----------------------------------------------------------------------
    // Creation / destruction
    // -----------------------------------------------------------------------

    /// Create a bare child window of `parent`, appended to its child order.
    ///
    /// The window starts hidden; nothing appears until [`Ui::show`].
    pub fn create_window(
        &mut self,
        parent: WindowId,
        area: Rectangle,
    ) -> Result<WindowId, UiError> {
        self.alloc_window(parent, area, WidgetKind::Plain)
    }

    pub(crate) fn alloc_window(
        &mut self,
        parent: WindowId,
        area: Rectangle,
        widget: WidgetKind,
    ) -> Result<WindowId, UiError> {
        self.window(parent)?;

        let index = self.vacant_slot()?;
        let id = WindowId {
            index,
            generation: self.slots[index as usize].generation,
        };

        // Link into the parent first so a full child list cannot leak the
        // slot we are about to occupy.
        let parent_node = self.window_mut(parent)?;
        parent_node
            .children
            .push(id)
            .map_err(|_| UiError::OutOfMemory)?;

        self.slots[id.index as usize].window = Some(Window {
            parent: Some(parent),
            children: Vec::new(),
            area,
            shown: false,
            widget,
        });

        debug!("created window {:?} under {:?}", id, parent);
        Ok(id)
    }

    fn vacant_slot(&mut self) -> Result<u8, UiError> {
        if let Some(index) = self.slots.iter().position(|s| s.window.is_none()) {
            return Ok(index as u8);
        }
        if self.slots.len() < MAX_WINDOWS {
            self.slots
                .push(Slot {
                    generation: 0,
                    window: None,
                })
                .map_err(|_| UiError::OutOfMemory)?;
            Ok((self.slots.len() - 1) as u8)
        } else {
            Err(UiError::OutOfMemory)
        }
    }

    /// Destroy `window` and all its descendants, depth-first.
    ///
    /// Invalidates the on-screen region the subtree occupied, releases each
    /// node's widget state and frees the arena slots; every handle into the
    /// subtree goes stale. Safe on a window with zero children.
    ///
    /// # Panics
    ///
    /// Panics when called on the display root, which is never destroyed.
    pub fn destroy(&mut self, window: WindowId) -> Result<(), UiError> {
        assert!(window != self.root, "destroy called on the display root");
        self.invalidate_window(window)?;

        let parent = self.window(window)?.parent;
        if let Some(parent) = parent {
            let parent_node = self.window_mut(parent)?;
            parent_node.children.retain(|c| *c != window);
        }

        self.teardown(window);
        Ok(())
    }

    fn teardown(&mut self, id: WindowId) {
        let Ok(node) = self.window_mut(id) else {
            return;
        };
        let children = core::mem::take(&mut node.children);
        for child in children {
            self.teardown(child);
        }

        let slot = &mut self.slots[id.index as usize];
        let released = slot.window.take();
        slot.generation = slot.generation.wrapping_add(1);

        // Widget-specific teardown: drop a destroyed button out of its
        // group so the group never dangles into the arena.
        if let Some(Window {
            widget: WidgetKind::IconButton(button),
            ..
        }) = released
            && let Some(group) = button.group
        {
            self.remove_group_member(group, id);
        }
        debug!("destroyed window {:?}", id);
    }

    // -----------------------------------------------------------------------
    // Visibility
    // -----------------------------------------------------------------------

    /// Mark `window` shown and invalidate its on-screen region.
    ///
    /// If an ancestor is still hidden nothing becomes visible yet; the
    /// region is painted once the whole ancestor chain is shown.
    pub fn show(&mut self, window: WindowId) -> Result<(), UiError> {
        let node = self.window_mut(window)?;
        if node.shown {
            return Ok(());
        }
        node.shown = true;
        self.invalidate_window(window)
    }

    /// Mark `window` hidden and invalidate the region it occupied.
    pub fn hide(&mut self, window: WindowId) -> Result<(), UiError> {
        // Invalidate while still mapped; afterwards the clip is empty.
        self.invalidate_window(window)?;
        let node = self.window_mut(window)?;
        node.shown = false;
        Ok(())
    }

    /// The window's own visibility flag, ignoring ancestors.
    pub fn is_shown(&self, window: WindowId) -> Result<bool, UiError> {
        Ok(self.window(window)?.shown)
    }

    /// Whether the window is actually on screen: shown, with every ancestor
    /// shown, and with a non-empty area after ancestor clipping.
    pub fn is_mapped(&self, window: WindowId) -> Result<bool, UiError> {
        Ok(self.mapped_clip(window)?.is_some())
    }

    // -----------------------------------------------------------------------
    // Geometry
    // -----------------------------------------------------------------------

    /// Parent-relative bounding area.
    pub fn area(&self, window: WindowId) -> Result<Rectangle, UiError> {
        Ok(self.window(window)?.area)
    }

    /// Absolute (display) bounding area, before ancestor clipping.
    pub fn screen_area(&self, window: WindowId) -> Result<Rectangle, UiError> {
        let node = self.window(window)?;
        let mut origin = node.area.top_left;
        let mut cursor = node.parent;
        while let Some(parent) = cursor {
            let parent_node = self.window(parent)?;
            origin += parent_node.area.top_left;
            cursor = parent_node.parent;
        }
        Ok(Rectangle::new(origin, node.area.size))
    }

    /// Absolute visible region of the window: its area clipped to every
    /// ancestor. `None` when the window or any ancestor is hidden, or when
    /// clipping leaves nothing.
    fn mapped_clip(&self, window: WindowId) -> Result<Option<Rectangle>, UiError> {
        let node = self.window(window)?;
        if !node.shown {
            return Ok(None);
        }

        // Walk upwards, keeping `clip` in the coordinate space of the
        // ancestor currently being examined.
        let mut clip = node.area;
        let mut cursor = node.parent;
        while let Some(parent) = cursor {
            let parent_node = self.window(parent)?;
            if !parent_node.shown {
                return Ok(None);
            }
            clip = clip.intersection(&Rectangle::new(Point::zero(), parent_node.area.size));
            if clip.is_zero_sized() {
                return Ok(None);
            }
            clip.top_left += parent_node.area.top_left;
            cursor = parent_node.parent;
        }
        Ok(Some(clip))
    }

    // -----------------------------------------------------------------------
    // Dirty-region tracking
    // -----------------------------------------------------------------------

    /// Add the window's mapped region to the pending dirty region.
    pub(crate) fn invalidate_window(&mut self, window: WindowId) -> Result<(), UiError> {
        if let Some(clip) = self.mapped_clip(window)? {
            self.invalidate(clip);
        }
        Ok(())
    }

    pub(crate) fn invalidate(&mut self, region: Rectangle) {
        self.dirty = Some(match self.dirty {
            Some(dirty) => union(dirty, region),
            None => region,
        });
    }

    /// The region waiting to be repainted, if any.
    pub fn dirty_region(&self) -> Option<Rectangle> {
        self.dirty
    }

    // -----------------------------------------------------------------------
    // Painting
    // -----------------------------------------------------------------------

    /// Repaint the whole tree: parents before children, siblings in
    /// insertion order, each window clipped to its ancestors.
    pub fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let root_area = match self.window(self.root) {
            Ok(node) => node.area,
            Err(_) => return Ok(()),
        };
        self.paint(self.root, Point::zero(), root_area, display)
    }

    /// Repaint the pending dirty region, if any. Returns whether anything
    /// was painted.
    pub fn flush<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<bool, D::Error> {
        let Some(region) = self.dirty.take() else {
            return Ok(false);
        };
        let root_area = match self.window(self.root) {
            Ok(node) => node.area,
            Err(_) => return Ok(false),
        };
        let clip = region.intersection(&root_area);
        if clip.is_zero_sized() {
            return Ok(false);
        }
        self.paint(self.root, Point::zero(), clip, display)?;
        Ok(true)
    }

    fn paint<D: DrawTarget<Color = Rgb565>>(
        &self,
        id: WindowId,
        origin: Point,
        clip: Rectangle,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let Ok(node) = self.window(id) else {
            return Ok(());
        };
        if !node.shown {
            return Ok(());
        }

        let abs = Rectangle::new(origin + node.area.top_left, node.area.size);
        let clip = clip.intersection(&abs);
        if clip.is_zero_sized() {
            return Ok(());
        }

        {
            // The draw routines receive the window's full absolute area;
            // restricting the target to `clip` is the tree's job, never the
            // widget's.
            let mut target = display.clipped(&clip);
            match &node.widget {
                WidgetKind::Plain => {}
                WidgetKind::Frame(frame) => frame.draw(abs, &mut target)?,
                WidgetKind::Label(label) => label.draw(abs, &mut target)?,
                WidgetKind::IconButton(button) => button.draw(abs, &mut target)?,
            }
        }

        for child in node.children.iter() {
            self.paint(*child, abs.top_left, clip, display)?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Hit testing
    // -----------------------------------------------------------------------

    /// Find the window under `point`: the deepest mapped window whose
    /// clipped area contains the point, preferring later-inserted siblings
    /// (topmost wins on overlap).
    pub fn hit_test(&self, point: Point) -> Option<WindowId> {
        let root_area = self.window(self.root).ok()?.area;
        self.hit(self.root, Point::zero(), root_area, point)
    }

    fn hit(
        &self,
        id: WindowId,
        origin: Point,
        clip: Rectangle,
        point: Point,
    ) -> Option<WindowId> {
        let node = self.window(id).ok()?;
        if !node.shown {
            return None;
        }

        let abs = Rectangle::new(origin + node.area.top_left, node.area.size);
        let clip = clip.intersection(&abs);
        if !clip.contains(point) {
            return None;
        }

        for child in node.children.iter().rev() {
            if let Some(hit) = self.hit(*child, abs.top_left, clip, point) {
                return Some(hit);
            }
        }
        Some(id)
    }
}

/// Bounding box of two rectangles.
fn union(a: Rectangle, b: Rectangle) -> Rectangle {
    if a.is_zero_sized() {
        return b;
    }
    if b.is_zero_sized() {
        return a;
    }
    let min_x = a.top_left.x.min(b.top_left.x);
    let min_y = a.top_left.y.min(b.top_left.y);
    let max_x = (a.top_left.x + a.size.width as i32).max(b.top_left.x + b.size.width as i32);
    let max_y = (a.top_left.y + a.size.height as i32).max(b.top_left.y + b.size.height as i32);
    Rectangle::new(
        Point::new(min_x, min_y),
        Size::new((max_x - min_x) as u32, (max_y - min_y) as u32),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fill::Fill;
    use alloc::vec::Vec as StdVec;
    use core::convert::Infallible;

    const DISPLAY: Size = Size::new(320, 240);

    /// Draw target that records every pixel write in order.
    struct Recorder {
        writes: StdVec<(Point, Rgb565)>,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                writes: StdVec::new(),
            }
        }

        /// Last colour written at `point`, i.e. what would be on screen.
        fn color_at(&self, point: Point) -> Option<Rgb565> {
            self.writes
                .iter()
                .rev()
                .find(|(p, _)| *p == point)
                .map(|(_, c)| *c)
        }
    }

    impl OriginDimensions for Recorder {
        fn size(&self) -> Size {
            DISPLAY
        }
    }

    impl DrawTarget for Recorder {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                self.writes.push((point, color));
            }
            Ok(())
        }
    }

    fn frame_area(ui: &mut Ui, area: Rectangle, color: Rgb565) -> WindowId {
        let frame = ui
            .create_frame(ui.root(), area, Fill::Solid(color), None, None)
            .unwrap();
        frame.as_window()
    }

    #[test]
    fn root_exists_and_covers_display() {
        let ui = Ui::new(DISPLAY);
        let root = ui.root();
        assert_eq!(
            ui.area(root).unwrap(),
            Rectangle::new(Point::zero(), DISPLAY)
        );
        assert!(ui.is_shown(root).unwrap());
        assert_eq!(ui.live_windows(), 1);
    }

    #[test]
    fn create_starts_hidden_and_appends_to_child_order() {
        let mut ui = Ui::new(DISPLAY);
        let area = Rectangle::new(Point::new(10, 10), Size::new(50, 50));
        let w = ui.create_window(ui.root(), area).unwrap();
        assert!(!ui.is_shown(w).unwrap());
        assert_eq!(ui.area(w).unwrap(), area);
        assert_eq!(ui.live_windows(), 2);
    }

    #[test]
    fn destroy_subtree_frees_every_slot() {
        let mut ui = Ui::new(DISPLAY);
        let area = Rectangle::new(Point::zero(), Size::new(100, 100));
        let top = ui.create_window(ui.root(), area).unwrap();
        let mid = ui.create_window(top, area).unwrap();
        let leaf = ui.create_window(mid, area).unwrap();
        assert_eq!(ui.live_windows(), 4);

        ui.destroy(top).unwrap();
        assert_eq!(ui.live_windows(), 1);

        // Every handle into the subtree is stale now.
        assert_eq!(ui.area(top), Err(UiError::InvalidHandle));
        assert_eq!(ui.area(mid), Err(UiError::InvalidHandle));
        assert_eq!(ui.area(leaf), Err(UiError::InvalidHandle));
    }

    #[test]
    fn destroy_leaf_with_no_children_is_safe() {
        let mut ui = Ui::new(DISPLAY);
        let w = ui
            .create_window(ui.root(), Rectangle::new(Point::zero(), Size::new(10, 10)))
            .unwrap();
        ui.destroy(w).unwrap();
        assert_eq!(ui.live_windows(), 1);
    }

    #[test]
    fn destroyed_slots_are_reused_with_fresh_generation() {
        let mut ui = Ui::new(DISPLAY);
        let area = Rectangle::new(Point::zero(), Size::new(10, 10));
        let first = ui.create_window(ui.root(), area).unwrap();
        ui.destroy(first).unwrap();
        let second = ui.create_window(ui.root(), area).unwrap();

        assert_eq!(first.index, second.index);
        assert_ne!(first, second);
        assert_eq!(ui.area(first), Err(UiError::InvalidHandle));
        assert!(ui.area(second).is_ok());
    }

    #[test]
    #[should_panic(expected = "display root")]
    fn destroying_the_root_is_fatal() {
        let mut ui = Ui::new(DISPLAY);
        let root = ui.root();
        let _ = ui.destroy(root);
    }

    #[test]
    fn window_arena_exhaustion_reports_out_of_memory() {
        let mut ui = Ui::new(DISPLAY);
        let area = Rectangle::new(Point::zero(), Size::new(4, 4));
        let mut created = StdVec::new();
        loop {
            // Spread across parents so the child-list cap is never the limit.
            let parent = *created.last().unwrap_or(&ui.root());
            match ui.create_window(parent, area) {
                Ok(w) => created.push(w),
                Err(e) => {
                    assert_eq!(e, UiError::OutOfMemory);
                    break;
                }
            }
        }
        assert_eq!(ui.live_windows(), MAX_WINDOWS);
    }

    #[test]
    fn paint_order_is_insertion_order() {
        let mut ui = Ui::new(DISPLAY);
        let overlap = Point::new(30, 30);
        let first = frame_area(
            &mut ui,
            Rectangle::new(Point::new(10, 10), Size::new(40, 40)),
            Rgb565::RED,
        );
        let second = frame_area(
            &mut ui,
            Rectangle::new(Point::new(25, 25), Size::new(40, 40)),
            Rgb565::BLUE,
        );
        ui.show(first).unwrap();
        ui.show(second).unwrap();

        let mut display = Recorder::new();
        ui.draw(&mut display).unwrap();

        // Later-inserted sibling paints over the earlier one.
        assert_eq!(display.color_at(overlap), Some(Rgb565::BLUE));
        // Non-overlapping part of the first frame is untouched.
        assert_eq!(display.color_at(Point::new(12, 12)), Some(Rgb565::RED));
    }

    #[test]
    fn hit_test_prefers_last_inserted_sibling() {
        let mut ui = Ui::new(DISPLAY);
        let area = Rectangle::new(Point::new(10, 10), Size::new(40, 40));
        let below = ui.create_window(ui.root(), area).unwrap();
        let above = ui.create_window(ui.root(), area).unwrap();
        ui.show(below).unwrap();
        ui.show(above).unwrap();

        assert_eq!(ui.hit_test(Point::new(20, 20)), Some(above));

        ui.hide(above).unwrap();
        assert_eq!(ui.hit_test(Point::new(20, 20)), Some(below));
    }

    #[test]
    fn hit_test_returns_deepest_mapped_window() {
        let mut ui = Ui::new(DISPLAY);
        let outer = ui
            .create_window(
                ui.root(),
                Rectangle::new(Point::new(10, 10), Size::new(100, 100)),
            )
            .unwrap();
        let inner = ui
            .create_window(outer, Rectangle::new(Point::new(5, 5), Size::new(20, 20)))
            .unwrap();
        ui.show(outer).unwrap();
        ui.show(inner).unwrap();

        // Inside the child: absolute (15..35, 15..35).
        assert_eq!(ui.hit_test(Point::new(20, 20)), Some(inner));
        // Inside the parent but not the child.
        assert_eq!(ui.hit_test(Point::new(90, 90)), Some(outer));
        // Outside everything but the root.
        assert_eq!(ui.hit_test(Point::new(200, 200)), Some(ui.root()));
    }

    #[test]
    fn children_are_clipped_to_ancestors() {
        let mut ui = Ui::new(DISPLAY);
        let parent = ui
            .create_window(
                ui.root(),
                Rectangle::new(Point::new(10, 10), Size::new(40, 40)),
            )
            .unwrap();
        // Child sticks out 20px past the parent's right edge.
        let child = ui
            .create_frame(
                parent,
                Rectangle::new(Point::new(30, 0), Size::new(40, 20)),
                Fill::Solid(Rgb565::GREEN),
                None,
                None,
            )
            .unwrap();
        ui.show(parent).unwrap();
        ui.show(child.as_window()).unwrap();

        let mut display = Recorder::new();
        ui.draw(&mut display).unwrap();

        // Absolute child area is (40..80, 10..30); visible only to x < 50.
        assert_eq!(display.color_at(Point::new(45, 15)), Some(Rgb565::GREEN));
        assert_eq!(display.color_at(Point::new(55, 15)), None);

        // Hit testing honours the same clip.
        assert_eq!(ui.hit_test(Point::new(45, 15)), Some(child.as_window()));
        assert_ne!(ui.hit_test(Point::new(55, 15)), Some(child.as_window()));
    }

    #[test]
    fn show_under_hidden_parent_paints_nothing() {
        let mut ui = Ui::new(DISPLAY);
        let parent = frame_area(
            &mut ui,
            Rectangle::new(Point::new(10, 10), Size::new(100, 100)),
            Rgb565::RED,
        );
        let child = ui
            .create_frame(
                parent,
                Rectangle::new(Point::new(5, 5), Size::new(20, 20)),
                Fill::Solid(Rgb565::BLUE),
                None,
                None,
            )
            .unwrap();

        // Parent never shown: showing the child schedules no repaint.
        ui.show(child.as_window()).unwrap();
        assert_eq!(ui.dirty_region(), None);

        let mut display = Recorder::new();
        assert!(!ui.flush(&mut display).unwrap());
        assert!(display.writes.is_empty());
        assert!(!ui.is_mapped(child.as_window()).unwrap());

        // Showing the parent maps the whole subtree and repaints it.
        ui.show(parent).unwrap();
        assert!(ui.is_mapped(child.as_window()).unwrap());
        assert!(ui.flush(&mut display).unwrap());
        assert_eq!(display.color_at(Point::new(20, 20)), Some(Rgb565::BLUE));
    }

    #[test]
    fn flush_without_pending_damage_is_a_no_op() {
        let mut ui = Ui::new(DISPLAY);
        let w = frame_area(
            &mut ui,
            Rectangle::new(Point::new(10, 10), Size::new(20, 20)),
            Rgb565::RED,
        );
        ui.show(w).unwrap();

        let mut display = Recorder::new();
        assert!(ui.flush(&mut display).unwrap());
        let painted = display.writes.len();
        assert!(painted > 0);

        // Second flush has nothing pending.
        assert!(!ui.flush(&mut display).unwrap());
        assert_eq!(display.writes.len(), painted);
    }

    #[test]
    fn hide_invalidates_the_vacated_region() {
        let mut ui = Ui::new(DISPLAY);
        let area = Rectangle::new(Point::new(10, 10), Size::new(20, 20));
        let w = frame_area(&mut ui, area, Rgb565::RED);
        ui.show(w).unwrap();

        let mut display = Recorder::new();
        ui.flush(&mut display).unwrap();

        ui.hide(w).unwrap();
        assert_eq!(ui.dirty_region(), Some(area));
    }

    #[test]
    fn screen_area_accumulates_ancestor_origins() {
        let mut ui = Ui::new(DISPLAY);
        let a = ui
            .create_window(
                ui.root(),
                Rectangle::new(Point::new(10, 20), Size::new(100, 100)),
            )
            .unwrap();
        let b = ui
            .create_window(a, Rectangle::new(Point::new(5, 5), Size::new(30, 30)))
            .unwrap();
        assert_eq!(
            ui.screen_area(b).unwrap(),
            Rectangle::new(Point::new(15, 25), Size::new(30, 30))
        );
    }
}
