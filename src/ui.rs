pub mod button;
pub mod command;
pub mod gump;
pub mod modal;

use bstring::bstr;
use enum_primitive_derive::Primitive;
use num_traits::FromPrimitive;
use std::str::FromStr;

use crate::asset::ShapeId;
use crate::graphics::Point;
use crate::graphics::color::Rgb15;

/// Mouse button with the numeric codes used by the platform layer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Primitive)]
pub enum MouseButton {
    Left = 1,
    Middle = 2,
    Right = 3,
    X1 = 4,
    X2 = 5,
}

impl MouseButton {
    pub fn from_code(code: u8) -> Option<Self> {
        Self::from_u8(code)
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    MouseDown {
        pos: Point,
        button: MouseButton,
    },
    MouseMove {
        pos: Point,
    },
    MouseUp {
        pos: Point,
        button: MouseButton,
    },
    /// Keyboard cancel (Escape).
    Cancel,
    Quit,
}

/// Parses the textual event form used by scripted input:
/// `down:BUTTON:X,Y`, `up:BUTTON:X,Y`, `move:X,Y`, `cancel` or `quit`.
impl FromStr for Event {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn button(s: &str) -> Result<MouseButton, String> {
            s.parse::<u8>().ok()
                .and_then(MouseButton::from_code)
                .ok_or_else(|| format!("invalid mouse button: {}", s))
        }

        let parts: Vec<_> = s.split(':').collect();
        Ok(match &parts[..] {
            ["down", b, p] => Event::MouseDown { pos: p.parse()?, button: button(b)? },
            ["up", b, p] => Event::MouseUp { pos: p.parse()?, button: button(b)? },
            ["move", p] => Event::MouseMove { pos: p.parse()? },
            ["cancel"] => Event::Cancel,
            ["quit"] => Event::Quit,
            _ => return Err(format!("invalid event: {}", s)),
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cursor {
    Arrow,
    Hand,
    /// Target selection cursor used when prompting for a screen point.
    GreenSelect,
}

/// Drawing surface the host provides to widgets.
pub trait Canvas {
    fn draw_shape(&mut self, shape: ShapeId, pos: Point);

    fn draw_text(&mut self, text: &bstr, pos: Point, color: Rgb15);

    /// Marks the screen as changed so the host presents it.
    fn set_painted(&mut self);
}
