pub use clumps::*;
pub use majority::*;
pub use validity::*;

mod clumps;
mod majority;
mod validity;
