use bstring::bfmt::ToBString;
use bstring::BString;
use if_chain::if_chain;
use log::*;
use num_traits::clamp;
use std::cmp;
use std::collections::HashMap;

use crate::asset::ShapeId;
use crate::game::GameWindow;
use crate::game::object;
use crate::graphics::{Point, Rect};
use crate::graphics::geometry::{ScrolledGrid, TileGridView};
use crate::ui::{Canvas, Cursor, MouseButton};
use crate::ui::button::{Button, Face};
use crate::ui::command::UiCommand;
use crate::ui::gump::{Gump, GumpBase};
use crate::ui::modal;

/// Vertical distance between the rows.
pub const ROW_SPACING: i32 = 22;
/// Horizontal room the menu needs on screen.
pub const MENU_WIDTH: i32 = 100;

const BUTTON_X: i32 = 10;
const BUTTON_WIDTH: i32 = 59;
const BUTTON_HEIGHT: i32 = 20;

/// What can be done to the selected object.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    Use,
    Pickup,
    Move,
}

impl Action {
    fn label(self) -> &'static str {
        match self {
            Action::Use => "Use",
            Action::Pickup => "Pickup",
            Action::Move => "Move",
        }
    }
}

/// Action performed once the menu closes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PendingAction {
    /// Object list: show the action list for the selected object.
    None,
    Use,
    Pickup,
    Move,
    /// Action list with nothing chosen yet.
    Submenu,
}

impl From<Action> for PendingAction {
    fn from(v: Action) -> Self {
        match v {
            Action::Use => PendingAction::Use,
            Action::Pickup => PendingAction::Pickup,
            Action::Move => PendingAction::Move,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Selection {
    pub object: object::Handle,
    /// Screen point the object was originally clicked at.
    pub click_pos: Point,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Pressed {
    Checkmark,
    Row(usize),
}

/// Popup listing either the objects found under a click or the actions for a single object.
///
/// The chosen action is deferred until the menu is closed and then [`finish`](Self::finish)ed.
pub struct ItemMenu {
    base: GumpBase,
    buttons: Vec<Button>,
    objects: HashMap<object::Handle, Point>,
    selection: Option<Selection>,
    action: PendingAction,
    pressed: Option<Pressed>,
}

impl ItemMenu {
    /// Lists `objects` (paired with the screen points they were clicked at) followed by "Cancel".
    /// Objects that don't fit on screen vertically are left out.
    pub fn with_objects(
        win: &dyn GameWindow,
        objects: impl IntoIterator<Item=(object::Handle, Point)>,
        pos: Point,
    ) -> Self {
        let mut r = Self::new(pos, PendingAction::None);

        let max_top = win.height() - 2 * ROW_SPACING;
        let mut objects = objects.into_iter();
        let mut top = 0;
        while top < max_top {
            let (obj, click_pos) = match objects.next() {
                Some(v) => v,
                None => break,
            };
            if r.objects.contains_key(&obj) {
                continue;
            }
            r.objects.insert(obj, click_pos);
            r.buttons.push(Button::text(win.object_name(obj), row_rect(top),
                UiCommand::SelectObject(obj)));
            top += ROW_SPACING;
        }
        let dropped = objects.count();
        if dropped > 0 {
            debug!("item menu: no room for {} more object(s)", dropped);
        }

        r.buttons.push(Button::text("Cancel".to_bstring(), row_rect(top), UiCommand::Cancel));
        r.fix_position(win);
        r
    }

    /// Lists the actions for `obj` clicked at `click_pos`.
    pub fn with_actions(win: &dyn GameWindow, obj: object::Handle, click_pos: Point, pos: Point)
        -> Self
    {
        let mut r = Self::new(pos, PendingAction::Submenu);
        r.selection = Some(Selection {
            object: obj,
            click_pos,
        });

        let mut top = 0;
        for &action in &[Action::Use, Action::Pickup, Action::Move] {
            r.buttons.push(Button::text(action.label().to_bstring(), row_rect(top),
                UiCommand::SetAction(action)));
            top += ROW_SPACING;
        }
        r.buttons.push(Button::text("Cancel".to_bstring(), row_rect(top), UiCommand::Cancel));
        r.fix_position(win);
        r
    }

    fn new(pos: Point, action: PendingAction) -> Self {
        Self {
            base: GumpBase::new(pos, ShapeId::TRANSPARENT_MENU),
            buttons: Vec::new(),
            objects: HashMap::new(),
            selection: None,
            action,
            pressed: None,
        }
    }

    pub fn pos(&self) -> Point {
        self.base.pos()
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn labels(&self) -> Vec<BString> {
        self.buttons.iter()
            .filter_map(|b| match b.face() {
                Face::Text(t) => Some(t.clone()),
                Face::Shape(_) => None,
            })
            .collect()
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn pending_action(&self) -> PendingAction {
        self.action
    }

    /// Click position recorded for a listed object.
    pub fn click_pos(&self, obj: object::Handle) -> Option<Point> {
        self.objects.get(&obj).copied()
    }

    /// Screen rect of the row `idx`.
    pub fn row_screen_rect(&self, idx: usize) -> Option<Rect> {
        let pos = self.pos();
        self.buttons.get(idx).map(|b| b.rect().translate(pos.x, pos.y))
    }

    pub fn select_object(&mut self, obj: object::Handle) {
        let click_pos = match self.objects.get(&obj) {
            Some(&p) => p,
            None => panic!("object {:?} isn't listed in the menu", obj),
        };
        self.selection = Some(Selection {
            object: obj,
            click_pos,
        });
        self.close();
    }

    fn fix_position(&mut self, win: &dyn GameWindow) {
        let pos = fit_position(self.pos(), self.buttons.len(), win.width(), win.height());
        self.base.set_pos(pos);
    }

    fn button_mut(&mut self, pressed: Pressed) -> Option<&mut Button> {
        match pressed {
            Pressed::Checkmark => self.base.checkmark_mut(),
            Pressed::Row(i) => self.buttons.get_mut(i),
        }
    }

    fn execute(&mut self, cmd: UiCommand) {
        match cmd {
            UiCommand::SelectObject(obj) => self.select_object(obj),
            UiCommand::SetAction(action) => {
                self.action = action.into();
                self.close();
            }
            UiCommand::Cancel => {
                self.selection = None;
                self.close();
            }
            UiCommand::Close => self.close(),
        }
    }

    /// The action list for the selected object, placed where this menu is.
    /// Only the object list produces one and only after an object was selected.
    pub fn submenu(&self, win: &dyn GameWindow) -> Option<ItemMenu> {
        match (self.action, self.selection) {
            (PendingAction::None, Some(sel)) =>
                Some(ItemMenu::with_actions(win, sel.object, sel.click_pos, self.pos())),
            _ => None,
        }
    }

    /// Performs the deferred action. Must be called once the menu is closed.
    pub fn finish(self, win: &mut dyn GameWindow) {
        let sel = if let Some(sel) = self.selection {
            sel
        } else {
            return;
        };
        match self.action {
            PendingAction::Use => {
                debug!("item menu: using {:?}", sel.object);
                win.activate(sel.object);
            }
            PendingAction::Pickup => pickup(win, sel),
            PendingAction::Move => {
                if let Some(to) = win.get_click(Cursor::GreenSelect) {
                    drag_and_drop(win, sel.click_pos, to);
                } else {
                    debug!("item menu: move of {:?} cancelled", sel.object);
                }
            }
            PendingAction::None => {
                if let Some(mut submenu) = self.submenu(win) {
                    modal::run(&mut submenu, &mut *win, Cursor::Hand);
                    submenu.finish(win);
                }
            }
            PendingAction::Submenu => {}
        }
    }
}

impl Gump for ItemMenu {
    fn paint(&self, canvas: &mut dyn Canvas) {
        self.base.paint(canvas);
        let origin = self.pos();
        for b in &self.buttons {
            b.paint(canvas, origin);
        }
        canvas.set_painted();
    }

    fn mouse_down(&mut self, pos: Point, button: MouseButton) -> bool {
        if self.is_closed() {
            return false;
        }
        if button != MouseButton::Left && button != MouseButton::Right {
            return false;
        }
        if self.pressed.is_some() {
            return true;
        }

        let local = self.base.to_local(pos);
        let hit = if self.base.on_button(local) {
            Some(Pressed::Checkmark)
        } else {
            self.buttons.iter()
                .position(|b| b.on_button(local))
                .map(Pressed::Row)
        };
        if let Some(hit) = hit {
            if self.button_mut(hit).map(|b| b.push(button)).unwrap_or(false) {
                self.pressed = Some(hit);
            }
        }

        button == MouseButton::Left || self.pressed.is_some()
    }

    fn mouse_up(&mut self, pos: Point, button: MouseButton) -> bool {
        if self.is_closed() {
            return false;
        }
        let pressed = if let Some(p) = self.pressed {
            p
        } else {
            self.close();
            return false;
        };

        let local = self.base.to_local(pos);
        let cmd = match self.button_mut(pressed) {
            Some(b) => {
                if b.pushed() != Some(button) {
                    return button == MouseButton::Left;
                }
                b.unpush(button);
                if b.on_button(local) {
                    b.activate(button)
                } else {
                    None
                }
            }
            None => None,
        };
        self.pressed = None;

        if let Some(cmd) = cmd {
            self.execute(cmd);
            true
        } else {
            false
        }
    }

    fn close(&mut self) {
        self.base.close();
    }

    fn is_closed(&self) -> bool {
        self.base.is_closed()
    }
}

/// Clamps the menu position so `rows` rows fit on the screen.
pub fn fit_position(pos: Point, rows: usize, screen_width: i32, screen_height: i32) -> Point {
    let menu_height = clamp(rows as i32 * ROW_SPACING, 0, screen_height);
    pos.clamp_in((0, 0),
        (cmp::max(screen_width - MENU_WIDTH, 0), screen_height - menu_height))
}

fn row_rect(top: i32) -> Rect {
    Rect::with_size(BUTTON_X, top, BUTTON_WIDTH, BUTTON_HEIGHT)
}

fn pickup(win: &mut dyn GameWindow, sel: Selection) {
    let avatar = if let Some(v) = win.main_actor() {
        v
    } else {
        debug!("item menu: no avatar to pick up {:?}", sel.object);
        return;
    };
    let avatar_pos = if let Some(tile) = win.object_tile(avatar) {
        ScrolledGrid::new(win.scroll_tile()).to_screen(tile)
    } else {
        debug!("item menu: avatar isn't on the map");
        return;
    };
    if win.find_object(avatar_pos) != Some(avatar) {
        debug!("item menu: avatar isn't at {:?}, not picking up {:?}", avatar_pos, sel.object);
        return;
    }
    drag_and_drop(win, sel.click_pos, avatar_pos);
}

fn drag_and_drop(win: &mut dyn GameWindow, from: Point, to: Point) {
    if_chain! {
        if win.start_dragging(from);
        if win.drag(to);
        then {
            win.drop_dragged(to, true);
        } else {
            debug!("item menu: couldn't drag from {:?} to {:?}", from, to);
        }
    }
}
