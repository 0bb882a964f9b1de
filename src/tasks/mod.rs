//! Background Tasks Module

pub(crate) mod sweeper;
