mod from_row;
mod structs;

pub use structs::*;

#[cfg(test)]
mod tests;
