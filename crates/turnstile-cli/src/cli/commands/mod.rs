pub mod decode;
mod dispatch;
pub mod evaluate;
pub mod table;

pub use dispatch::dispatch;
