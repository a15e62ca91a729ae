pub mod constants;
pub mod random;

pub use random::random_draw;
