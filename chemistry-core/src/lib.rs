pub mod sound;
pub mod text;

pub use sound::{Sound, SoundCategory};
