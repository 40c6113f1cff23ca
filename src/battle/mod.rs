pub mod checks;
pub mod damage;
pub mod effectiveness;
pub mod multi_hit;
pub mod report;
pub mod resolution;

#[cfg(test)]
mod tests;
