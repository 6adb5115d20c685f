use bstring::BString;
use enum_map::{enum_map, EnumMap};
use enum_map_derive::Enum;

use super::*;
use crate::graphics::Rect;
use crate::graphics::color::{MENU_TEXT, MENU_TEXT_DOWN};
use crate::ui::command::UiCommand;

#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq, Ord, PartialOrd)]
enum State {
    Up,
    Down,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Face {
    Text(BString),
    Shape(ShapeId),
}

/// Clickable widget that issues a command when clicked with the left mouse button.
/// The rect is relative to the owning gump's position.
pub struct Button {
    rect: Rect,
    face: Face,
    colors: EnumMap<State, Rgb15>,
    command: UiCommand,
    pushed: Option<MouseButton>,
}

impl Button {
    pub fn new(rect: Rect, face: Face, command: UiCommand) -> Self {
        Self {
            rect,
            face,
            colors: enum_map! {
                State::Up => MENU_TEXT,
                State::Down => MENU_TEXT_DOWN,
            },
            command,
            pushed: None,
        }
    }

    pub fn text(text: BString, rect: Rect, command: UiCommand) -> Self {
        Self::new(rect, Face::Text(text), command)
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn face(&self) -> &Face {
        &self.face
    }

    /// Button the widget is currently held down with.
    pub fn pushed(&self) -> Option<MouseButton> {
        self.pushed
    }

    /// Hit test, `pos` is relative to the owning gump.
    pub fn on_button(&self, pos: Point) -> bool {
        self.rect.contains(pos)
    }

    pub fn push(&mut self, button: MouseButton) -> bool {
        if button == MouseButton::Left {
            self.pushed = Some(button);
            true
        } else {
            false
        }
    }

    pub fn unpush(&mut self, button: MouseButton) {
        if self.pushed == Some(button) {
            self.pushed = None;
        }
    }

    pub fn activate(&self, button: MouseButton) -> Option<UiCommand> {
        if button == MouseButton::Left {
            Some(self.command.clone())
        } else {
            None
        }
    }

    pub fn paint(&self, canvas: &mut dyn Canvas, origin: Point) {
        let state = if self.pushed.is_some() {
            State::Down
        } else {
            State::Up
        };
        let pos = origin + self.rect.top_left();
        match &self.face {
            Face::Text(text) => canvas.draw_text(text, pos, self.colors[state]),
            Face::Shape(shape) => {
                let shift = if state == State::Down { Point::new(1, 1) } else { Point::new(0, 0) };
                canvas.draw_shape(*shape, pos + shift);
            }
        }
    }
}
