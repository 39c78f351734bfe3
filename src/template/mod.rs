//! Template processing for flask-starter
//!
//! - `set`: the folders and files a run generates, and how to load alternatives
//! - `flask`: the built-in Flask project set
//! - `operation`: rendered filesystem steps
//! - `processor`: renders a set into operations for one project name

pub mod flask;
pub mod operation;
pub mod processor;
pub mod set;

pub use operation::Operation;
pub use processor::TemplateProcessor;
pub use set::{FileTemplate, TemplateSet};
