// modules for making sounds
pub mod morse;
pub mod note;
pub mod synth;
pub mod wave;

// Putting messages together
pub mod output;
pub mod render;
