#![no_std]

pub mod delay;
