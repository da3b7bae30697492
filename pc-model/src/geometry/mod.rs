//! Mesh generators that know nothing about cats: curves, swept tubes,
//! whisker line batches and the fur normal map.

mod curve;
mod fur_texture;
mod tube;
mod whiskers;

pub use curve::*;
pub use fur_texture::*;
pub use tube::*;
pub use whiskers::*;
