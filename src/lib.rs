#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod class;
mod combination;
mod cracker;
pub mod math;
mod oracle;
mod range;
mod rules;
mod snapshot;
mod space;

pub use self::class::*;
pub use self::combination::*;
pub use self::cracker::*;
pub use self::oracle::*;
pub use self::range::*;
pub use self::rules::*;
pub use self::snapshot::*;
pub use self::space::*;
