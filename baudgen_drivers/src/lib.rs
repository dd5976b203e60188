#![no_std]

pub mod clock_timer;
pub mod pinout;
pub mod selector;
