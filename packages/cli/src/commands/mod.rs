pub mod init;
pub mod palette;
pub mod replay;

pub use init::{init, InitArgs};
pub use palette::{palette, PaletteArgs};
pub use replay::{replay, ReplayArgs};
