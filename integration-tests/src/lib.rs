#![cfg(test)]

mod common;
mod driver_output;
mod known_values;
mod properties;
