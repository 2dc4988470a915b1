// request handlers

pub mod status;
pub mod invoke;
