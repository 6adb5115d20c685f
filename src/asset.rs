/// Shape archive a shape is looked up in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ShapeFile {
    /// Engine-specific additions archive.
    Engine,
    /// Original game gumps archive.
    Gumps,
}

/// Identifies a single shape in one of the shape archives.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ShapeId {
    pub file: ShapeFile,
    pub index: u16,
}

impl ShapeId {
    pub const TRANSPARENT_MENU: Self = Self::new(ShapeFile::Engine, 0x17);
    pub const CHECKMARK: Self = Self::new(ShapeFile::Gumps, 0x02);

    pub const fn new(file: ShapeFile, index: u16) -> Self {
        Self {
            file,
            index,
        }
    }
}
