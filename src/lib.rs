pub mod compiler;
pub mod repl;
pub mod vm;

pub const MONKEY_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
#[macro_use]
extern crate matches;

#[cfg(test)]
extern crate quickcheck;

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
