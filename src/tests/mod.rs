#[macro_use]
mod util;

mod simplify;
