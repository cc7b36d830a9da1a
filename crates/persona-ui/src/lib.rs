pub mod panels;
pub mod shortcuts;
pub mod state;
pub mod theme;

#[cfg(test)]
mod tests;
