pub mod form;
pub mod header;
pub mod keybindings;
pub mod loading;
pub mod picker;
pub mod status;
pub mod util;
