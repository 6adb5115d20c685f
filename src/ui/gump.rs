use super::*;
use crate::graphics::Rect;
use crate::ui::button::{Button, Face};
use crate::ui::command::UiCommand;

/// Widget contract the modal loop drives.
pub trait Gump {
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Returns `true` if the event is consumed.
    fn mouse_down(&mut self, pos: Point, button: MouseButton) -> bool;

    /// Returns `true` if the event is consumed.
    fn mouse_up(&mut self, pos: Point, button: MouseButton) -> bool;

    fn close(&mut self);

    fn is_closed(&self) -> bool;
}

/// State shared by all gumps: screen position, background shape and the optional checkmark
/// control that closes the gump.
pub struct GumpBase {
    pos: Point,
    shape: ShapeId,
    checkmark: Option<Button>,
    closed: bool,
}

impl GumpBase {
    pub fn new(pos: Point, shape: ShapeId) -> Self {
        Self {
            pos,
            shape,
            checkmark: None,
            closed: false,
        }
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn set_pos(&mut self, pos: Point) {
        self.pos = pos;
    }

    /// Converts screen coordinates to gump-relative.
    pub fn to_local(&self, pos: Point) -> Point {
        pos - self.pos
    }

    /// Adds the checkmark control at gump-relative `pos`.
    pub fn set_checkmark(&mut self, pos: Point) {
        self.checkmark = Some(Button::new(Rect::with_size(pos.x, pos.y, 13, 13),
            Face::Shape(ShapeId::CHECKMARK), UiCommand::Close));
    }

    pub fn checkmark_mut(&mut self) -> Option<&mut Button> {
        self.checkmark.as_mut()
    }

    /// Hit tests the gump's own controls, `pos` is gump-relative.
    pub fn on_button(&self, pos: Point) -> bool {
        self.checkmark.as_ref().map(|b| b.on_button(pos)).unwrap_or(false)
    }

    pub fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.draw_shape(self.shape, self.pos);
        if let Some(checkmark) = &self.checkmark {
            checkmark.paint(canvas, self.pos);
        }
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn checkmark_hit_test() {
        let mut base = GumpBase::new(Point::new(100, 50), ShapeId::TRANSPARENT_MENU);
        assert!(!base.on_button(Point::new(0, 0)));

        base.set_checkmark(Point::new(4, 4));
        let local = base.to_local(Point::new(106, 56));
        assert_eq!(local, Point::new(6, 6));
        assert!(base.on_button(local));
        assert!(!base.on_button(base.to_local(Point::new(100, 50))));
        assert_eq!(base.checkmark_mut().unwrap().activate(MouseButton::Left),
            Some(UiCommand::Close));
    }

    #[test]
    fn close() {
        let mut base = GumpBase::new(Point::new(0, 0), ShapeId::TRANSPARENT_MENU);
        assert!(!base.is_closed());
        base.close();
        assert!(base.is_closed());
    }
}
