pub mod config;
pub mod db;
pub mod domain;
pub mod output;

#[cfg(test)]
mod tests_serialization;
