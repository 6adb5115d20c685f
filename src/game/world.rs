use bstring::bfmt::ToBString;
use bstring::{bstr, BString};
use log::*;
use std::collections::VecDeque;

use crate::asset::ShapeId;
use crate::game::GameWindow;
use crate::game::object::{self, Object, Objects};
use crate::graphics::{Point, Rect};
use crate::graphics::color::Rgb15;
use crate::graphics::geometry::{ScrolledGrid, TileGridView};
use crate::ui::{Canvas, Cursor, Event};
use crate::ui::modal;

/// Where a dropped object ended up.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DropTarget {
    Tile(Point),
    Container(object::Handle),
}

/// Observable effect on the world.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WorldAction {
    Activated(object::Handle),
    DragStarted {
        object: object::Handle,
        pos: Point,
    },
    Dragged {
        pos: Point,
    },
    Dropped {
        object: object::Handle,
        target: DropTarget,
        force: bool,
    },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DrawOp {
    Shape {
        shape: ShapeId,
        pos: Point,
    },
    Text {
        text: BString,
        pos: Point,
        color: Rgb15,
    },
}

/// Canvas that remembers what was drawn.
#[derive(Default)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
    painted: usize,
}

impl RecordingCanvas {
    /// How many times the screen was marked as changed.
    pub fn painted(&self) -> usize {
        self.painted
    }

    pub fn shapes(&self) -> Vec<(ShapeId, Point)> {
        self.ops.iter()
            .filter_map(|op| match *op {
                DrawOp::Shape { shape, pos } => Some((shape, pos)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(String, Point)> {
        self.ops.iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, pos, .. } =>
                    Some((String::from_utf8_lossy(text.as_bytes()).into_owned(), *pos)),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn draw_shape(&mut self, shape: ShapeId, pos: Point) {
        self.ops.push(DrawOp::Shape { shape, pos });
    }

    fn draw_text(&mut self, text: &bstr, pos: Point, color: Rgb15) {
        self.ops.push(DrawOp::Text { text: BString::from(text.as_bytes()), pos, color });
    }

    fn set_painted(&mut self) {
        self.painted += 1;
    }
}

/// Headless game window: objects on a square tile grid, scripted input and a journal of
/// everything done to the world.
pub struct World {
    objects: Objects,
    width: i32,
    height: i32,
    scroll: Point,
    avatar: Option<object::Handle>,
    events: VecDeque<Event>,
    clicks: VecDeque<Point>,
    prompts: Vec<Cursor>,
    dragging: Option<object::Handle>,
    cursor: Cursor,
    canvas: RecordingCanvas,
    journal: Vec<WorldAction>,
}

impl World {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width >= 0 && height >= 0);
        Self {
            objects: Objects::new(),
            width,
            height,
            scroll: Point::new(0, 0),
            avatar: None,
            events: VecDeque::new(),
            clicks: VecDeque::new(),
            prompts: Vec::new(),
            dragging: None,
            cursor: Cursor::Arrow,
            canvas: RecordingCanvas::default(),
            journal: Vec::new(),
        }
    }

    pub fn add_object(&mut self, name: &str, tile: Point) -> object::Handle {
        self.objects.insert(Object::new(name.to_bstring(), tile))
    }

    pub fn objects(&self) -> &Objects {
        &self.objects
    }

    pub fn set_avatar(&mut self, avatar: object::Handle) {
        assert!(self.objects.contains(avatar));
        self.avatar = Some(avatar);
    }

    pub fn set_scroll(&mut self, scroll: Point) {
        self.scroll = scroll;
    }

    /// Queues input for `modal::Host::next_event()`.
    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Queues the answer for the next `get_click()` prompt.
    pub fn push_click(&mut self, pos: Point) {
        self.clicks.push_back(pos);
    }

    /// Cursors of the click prompts shown so far.
    pub fn prompts(&self) -> &[Cursor] {
        &self.prompts
    }

    pub fn journal(&self) -> &[WorldAction] {
        &self.journal
    }

    pub fn drawing(&self) -> &RecordingCanvas {
        &self.canvas
    }

    /// Screen position of the object's tile.
    pub fn screen_pos(&self, obj: object::Handle) -> Option<Point> {
        let tile = self.objects.get(obj)?.tile?;
        Some(self.grid().to_screen(tile))
    }

    /// Where the object is now: its tile or the container holding it.
    pub fn placement(&self, obj: object::Handle) -> Option<String> {
        let o = self.objects.get(obj)?;
        Some(match (o.container, o.tile) {
            (Some(c), _) => format!("in {}", self.object_name(c).display()),
            (None, Some(tile)) => format!("at tile {},{}", tile.x, tile.y),
            (None, None) => "nowhere".into(),
        })
    }

    /// Objects at the screen point, topmost first.
    pub fn objects_at(&self, pos: Point) -> Vec<object::Handle> {
        if !self.screen_rect().contains(pos) {
            return Vec::new();
        }
        let mut r: Vec<_> = self.objects.at(self.grid().from_screen(pos)).collect();
        r.reverse();
        r
    }

    fn grid(&self) -> ScrolledGrid {
        ScrolledGrid::new(self.scroll)
    }

    fn screen_rect(&self) -> Rect {
        Rect::with_size(0, 0, self.width, self.height)
    }

    fn record(&mut self, action: WorldAction) {
        info!("{:?}", action);
        self.journal.push(action);
    }
}

impl modal::Host for World {
    fn next_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    fn canvas(&mut self) -> &mut dyn Canvas {
        &mut self.canvas
    }

    fn cursor(&self) -> Cursor {
        self.cursor
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }
}

impl GameWindow for World {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn scroll_tile(&self) -> Point {
        self.scroll
    }

    fn main_actor(&self) -> Option<object::Handle> {
        self.avatar
    }

    fn object_tile(&self, obj: object::Handle) -> Option<Point> {
        self.objects.get(obj)?.tile
    }

    fn object_name(&self, obj: object::Handle) -> BString {
        self.objects.get(obj)
            .map(|o| o.name.clone())
            .unwrap_or_else(BString::new)
    }

    fn find_object(&self, pos: Point) -> Option<object::Handle> {
        self.objects_at(pos).first().copied()
    }

    fn start_dragging(&mut self, pos: Point) -> bool {
        if self.dragging.is_some() {
            warn!("already dragging {:?}", self.dragging);
            return false;
        }
        let obj = match self.find_object(pos) {
            Some(obj) if Some(obj) != self.avatar => obj,
            _ => {
                debug!("nothing to drag at {:?}", pos);
                return false;
            }
        };
        self.dragging = Some(obj);
        self.record(WorldAction::DragStarted { object: obj, pos });
        true
    }

    fn drag(&mut self, pos: Point) -> bool {
        if self.dragging.is_none() {
            return false;
        }
        self.record(WorldAction::Dragged { pos });
        true
    }

    fn drop_dragged(&mut self, pos: Point, force: bool) -> bool {
        let obj = if let Some(obj) = self.dragging.take() {
            obj
        } else {
            return false;
        };
        if !force && !self.screen_rect().contains(pos) {
            debug!("can't drop {:?} off screen at {:?}", obj, pos);
            return false;
        }

        let below = self.objects_at(pos).into_iter().find(|&h| h != obj);
        let target = match below {
            Some(h) if Some(h) == self.avatar => DropTarget::Container(h),
            _ => DropTarget::Tile(self.grid().from_screen(pos)),
        };
        if let Some(o) = self.objects.get_mut(obj) {
            match target {
                DropTarget::Tile(tile) => {
                    o.tile = Some(tile);
                    o.container = None;
                }
                DropTarget::Container(c) => {
                    o.tile = None;
                    o.container = Some(c);
                }
            }
        }
        self.objects.raise(obj);
        self.record(WorldAction::Dropped { object: obj, target, force });
        true
    }

    fn get_click(&mut self, cursor: Cursor) -> Option<Point> {
        self.prompts.push(cursor);
        self.clicks.pop_front()
    }

    fn activate(&mut self, obj: object::Handle) {
        self.record(WorldAction::Activated(obj));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn find_object_topmost() {
        let mut w = World::new(640, 480);
        let a = w.add_object("a", Point::new(2, 3));
        let b = w.add_object("b", Point::new(2, 3));
        assert_eq!(w.find_object(Point::new(16, 24)), Some(b));
        assert_eq!(w.find_object(Point::new(23, 31)), Some(b));
        assert_eq!(w.find_object(Point::new(24, 31)), None);
        assert_eq!(w.objects_at(Point::new(20, 30)), vec![b, a]);
    }

    #[test]
    fn find_object_off_screen() {
        let mut w = World::new(64, 64);
        let a = w.add_object("a", Point::new(2, 3));
        w.set_scroll(Point::new(5, 5));
        assert_eq!(w.screen_pos(a), Some(Point::new(-24, -16)));
        assert_eq!(w.find_object(Point::new(-24, -16)), None);
    }

    #[test]
    fn drag_requires_object() {
        let mut w = World::new(640, 480);
        assert!(!w.start_dragging(Point::new(5, 5)));
        assert!(!w.drag(Point::new(10, 10)));
        assert!(!w.drop_dragged(Point::new(10, 10), true));
        assert!(w.journal().is_empty());
    }

    #[test]
    fn avatar_cant_be_dragged() {
        let mut w = World::new(640, 480);
        let avatar = w.add_object("Avatar", Point::new(1, 1));
        w.set_avatar(avatar);
        assert!(!w.start_dragging(Point::new(8, 8)));
    }

    #[test]
    fn drop_on_tile() {
        let mut w = World::new(640, 480);
        let a = w.add_object("a", Point::new(1, 1));
        let b = w.add_object("b", Point::new(4, 4));
        assert!(w.start_dragging(Point::new(8, 8)));
        assert!(w.drag(Point::new(33, 33)));
        assert!(w.drop_dragged(Point::new(33, 33), false));

        assert_eq!(w.objects().get(a).unwrap().tile, Some(Point::new(4, 4)));
        assert_eq!(w.find_object(Point::new(33, 33)), Some(a));
        assert_eq!(w.objects_at(Point::new(33, 33)), vec![a, b]);
        assert_eq!(w.journal().last(), Some(&WorldAction::Dropped {
            object: a,
            target: DropTarget::Tile(Point::new(4, 4)),
            force: false,
        }));
    }

    #[test]
    fn drop_off_screen_needs_force() {
        let mut w = World::new(64, 64);
        w.add_object("a", Point::new(1, 1));
        assert!(w.start_dragging(Point::new(8, 8)));
        assert!(!w.drop_dragged(Point::new(100, 8), false));
        assert_eq!(w.journal().len(), 1);
    }

    #[test]
    fn drop_on_avatar_goes_to_inventory() {
        let mut w = World::new(640, 480);
        let avatar = w.add_object("Avatar", Point::new(1, 1));
        w.set_avatar(avatar);
        let a = w.add_object("a", Point::new(3, 3));
        assert!(w.start_dragging(Point::new(24, 24)));
        assert!(w.drop_dragged(Point::new(8, 8), true));

        assert_eq!(w.object_tile(a), None);
        assert_eq!(w.objects().contents(avatar).collect::<Vec<_>>(), vec![a]);
        assert_eq!(w.find_object(Point::new(8, 8)), Some(avatar));
        assert_eq!(w.placement(a).unwrap(), "in Avatar");
    }

    #[test]
    fn placement_follows_moves() {
        let mut w = World::new(640, 480);
        let a = w.add_object("a", Point::new(20, 10));
        let b = w.add_object("b", Point::new(20, 10));
        assert_eq!(w.placement(b).unwrap(), "at tile 20,10");

        assert!(w.start_dragging(Point::new(160, 80)));
        assert!(w.drop_dragged(Point::new(300, 200), false));
        assert_eq!(w.placement(b).unwrap(), "at tile 37,25");
        assert_eq!(w.placement(a).unwrap(), "at tile 20,10");
    }

    #[test]
    fn click_prompt() {
        let mut w = World::new(640, 480);
        w.push_click(Point::new(1, 2));
        assert_eq!(w.get_click(Cursor::GreenSelect), Some(Point::new(1, 2)));
        assert_eq!(w.get_click(Cursor::Hand), None);
        assert_eq!(w.prompts(), &[Cursor::GreenSelect, Cursor::Hand]);
    }
}
