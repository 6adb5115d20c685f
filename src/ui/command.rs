use crate::game::item_menu::Action;
use crate::game::object;

/// Command a button issues to its owning gump when activated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UiCommand {
    /// Choose an object out of several listed.
    SelectObject(object::Handle),
    /// Choose what to do with the already selected object.
    SetAction(Action),
    /// Close dropping any selection.
    Cancel,
    /// Close keeping the selection as is.
    Close,
}
