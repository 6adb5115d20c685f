use log::*;

use super::*;
use crate::ui::gump::Gump;

/// Input and output services needed to run a gump modally.
pub trait Host {
    /// Blocks until the next input event. `None` means the input is gone for good.
    fn next_event(&mut self) -> Option<Event>;

    fn canvas(&mut self) -> &mut dyn Canvas;

    fn cursor(&self) -> Cursor;

    fn set_cursor(&mut self, cursor: Cursor);
}

/// Feeds input to `gump` until it closes. Everything else is blocked meanwhile.
pub fn run<H: Host + ?Sized>(gump: &mut dyn Gump, host: &mut H, cursor: Cursor) {
    let saved_cursor = host.cursor();
    host.set_cursor(cursor);

    gump.paint(host.canvas());
    while !gump.is_closed() {
        let event = if let Some(event) = host.next_event() {
            event
        } else {
            debug!("modal: input closed, closing gump");
            gump.close();
            break;
        };
        match event {
            Event::MouseDown { pos, button } => {
                gump.mouse_down(pos, button);
            }
            Event::MouseUp { pos, button } => {
                gump.mouse_up(pos, button);
            }
            Event::MouseMove { .. } => continue,
            Event::Cancel | Event::Quit => {
                gump.close();
                break;
            }
        }
        if !gump.is_closed() {
            gump.paint(host.canvas());
        }
    }

    host.set_cursor(saved_cursor);
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::VecDeque;

    use crate::graphics::color::Rgb15;

    #[derive(Default)]
    struct NullCanvas {
        painted: usize,
    }

    impl Canvas for NullCanvas {
        fn draw_shape(&mut self, _shape: ShapeId, _pos: Point) {}

        fn draw_text(&mut self, _text: &bstr, _pos: Point, _color: Rgb15) {}

        fn set_painted(&mut self) {
            self.painted += 1;
        }
    }

    struct TestHost {
        events: VecDeque<Event>,
        canvas: NullCanvas,
        cursor: Cursor,
        cursors: Vec<Cursor>,
    }

    impl TestHost {
        fn new(events: Vec<Event>) -> Self {
            Self {
                events: events.into(),
                canvas: NullCanvas::default(),
                cursor: Cursor::Arrow,
                cursors: Vec::new(),
            }
        }
    }

    impl Host for TestHost {
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
            self.cursors.push(cursor);
            self.cursor = cursor;
        }
    }

    /// Closes on the second mouse up.
    #[derive(Default)]
    struct CountingGump {
        downs: usize,
        ups: usize,
        closed: bool,
    }

    impl Gump for CountingGump {
        fn paint(&self, canvas: &mut dyn Canvas) {
            canvas.set_painted();
        }

        fn mouse_down(&mut self, _pos: Point, _button: MouseButton) -> bool {
            self.downs += 1;
            true
        }

        fn mouse_up(&mut self, _pos: Point, _button: MouseButton) -> bool {
            self.ups += 1;
            if self.ups == 2 {
                self.close();
            }
            true
        }

        fn close(&mut self) {
            self.closed = true;
        }

        fn is_closed(&self) -> bool {
            self.closed
        }
    }

    fn down() -> Event {
        Event::MouseDown { pos: Point::new(1, 1), button: MouseButton::Left }
    }

    fn up() -> Event {
        Event::MouseUp { pos: Point::new(1, 1), button: MouseButton::Left }
    }

    #[test]
    fn runs_until_closed() {
        let mut host = TestHost::new(vec![down(), Event::MouseMove { pos: Point::new(2, 2) },
            up(), down(), up(), down()]);
        let mut gump = CountingGump::default();
        run(&mut gump, &mut host, Cursor::Hand);

        assert!(gump.is_closed());
        assert_eq!((gump.downs, gump.ups), (2, 2));
        // The trailing event is left for the caller.
        assert_eq!(host.events.len(), 1);
        // Initial paint plus one per event that left the gump open.
        assert_eq!(host.canvas.painted, 4);
        assert_eq!(host.cursors, vec![Cursor::Hand, Cursor::Arrow]);
        assert_eq!(host.cursor, Cursor::Arrow);
    }

    #[test]
    fn cancel_closes() {
        let mut host = TestHost::new(vec![down(), Event::Cancel, up()]);
        let mut gump = CountingGump::default();
        run(&mut gump, &mut host, Cursor::Hand);

        assert!(gump.is_closed());
        assert_eq!((gump.downs, gump.ups), (1, 0));
    }

    #[test]
    fn quit_closes() {
        let mut host = TestHost::new(vec![down(), Event::Quit, up(), down()]);
        let mut gump = CountingGump::default();
        run(&mut gump, &mut host, Cursor::Hand);

        assert!(gump.is_closed());
        assert_eq!((gump.downs, gump.ups), (1, 0));
        assert_eq!(host.events.len(), 2);
        assert_eq!(host.cursors, vec![Cursor::Hand, Cursor::Arrow]);
        assert_eq!(host.cursor, Cursor::Arrow);
    }

    #[test]
    fn exhausted_input_closes() {
        let mut host = TestHost::new(vec![down()]);
        let mut gump = CountingGump::default();
        run(&mut gump, &mut host, Cursor::Hand);

        assert!(gump.is_closed());
        assert_eq!(host.cursor, Cursor::Arrow);
    }
}
