pub mod asset;
pub mod game;
pub mod graphics;
pub mod ui;
