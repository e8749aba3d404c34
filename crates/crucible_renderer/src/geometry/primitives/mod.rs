mod cube;
mod quad;

pub use cube::cube;
pub use quad::quad;
