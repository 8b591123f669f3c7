//! Constant values for the curvelock library

#![no_std]

pub mod traditional;
