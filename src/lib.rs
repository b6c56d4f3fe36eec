pub mod ico;
pub mod icon_gen;
pub mod png;
pub mod verify;
