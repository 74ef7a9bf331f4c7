pub mod charts;
pub mod classification;
pub mod dashboard;
pub mod service;
pub mod tables;
