#![no_std]

pub mod color;
pub mod error;
pub mod framebuffer;
pub mod ghost;
pub mod image;
pub mod sprites;

#[cfg(test)]
mod tests;

pub use error::Error;
