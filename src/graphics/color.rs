macro_rules! rgb15 {
    ($r:expr, $g:expr, $b:expr) => {
        Rgb15 { r: $r, g: $g, b: $b }
    };
}

pub const MENU_TEXT     : Rgb15 = rgb15!(31, 31, 21);
pub const MENU_TEXT_DOWN: Rgb15 = rgb15!(31, 22, 0);

/// Color with 5 bits per component.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Rgb15 {
    r: u8,
    g: u8,
    b: u8,
}
