pub mod controller;
pub mod setup;
#[cfg(test)]
mod tests;
