#[path = "swar/word.rs"]
mod word;
#[path = "swar/core.rs"]
mod core;
#[path = "swar/sublane.rs"]
mod sublane;
#[path = "swar/misaligned.rs"]
mod misaligned;
