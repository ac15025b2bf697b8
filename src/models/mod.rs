// Models module for data structures
pub mod babel_config;
pub mod dependency;
pub mod project;
