pub mod item_menu;
pub mod object;
pub mod world;

use bstring::BString;

use crate::graphics::Point;
use crate::ui::Cursor;
use crate::ui::modal;

/// Game window services the in-game gumps rely on.
pub trait GameWindow: modal::Host {
    /// Screen width in pixels.
    fn width(&self) -> i32;

    /// Screen height in pixels.
    fn height(&self) -> i32;

    /// Tile at the top left corner of the screen.
    fn scroll_tile(&self) -> Point;

    fn main_actor(&self) -> Option<object::Handle>;

    /// Map tile of the object, `None` if it's not on the map (e.g. in a container).
    fn object_tile(&self, obj: object::Handle) -> Option<Point>;

    fn object_name(&self, obj: object::Handle) -> BString;

    /// Topmost object at the screen point.
    fn find_object(&self, pos: Point) -> Option<object::Handle>;

    /// Starts dragging whatever is at the screen point.
    fn start_dragging(&mut self, pos: Point) -> bool;

    fn drag(&mut self, pos: Point) -> bool;

    /// Drops the dragged object at the screen point. With `force` the placement checks that
    /// would normally reject the spot are skipped.
    fn drop_dragged(&mut self, pos: Point, force: bool) -> bool;

    /// Prompts the player to click a screen point. Blocks until clicked or cancelled.
    fn get_click(&mut self, cursor: Cursor) -> Option<Point>;

    /// Runs the default action of the object (e.g. double click).
    fn activate(&mut self, obj: object::Handle);
}
