//! Rule file parsing and validation

pub mod rewrites_toml;

pub use rewrites_toml::{
    ColorOption, Config, OutputConfig, OutputFormat, RewritesMeta, RuleDefinition,
};
