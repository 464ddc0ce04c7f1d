// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use anyhow::Error;
use serde::Deserialize;
use std::path::Path;

pub const NEIGHBORHOOD_SIZE: usize = 2;
pub const DEFAULT_COUNT: usize = 3;
pub const EXPLAIN_PRECISION: usize = 2;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub neighborhood_size: usize,
    pub default_count: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            neighborhood_size: NEIGHBORHOOD_SIZE,
            default_count: DEFAULT_COUNT,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExplainConfig {
    pub precision: usize,
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self {
            precision: EXPLAIN_PRECISION,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub engine: EngineConfig,
    pub explain: ExplainConfig,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, Error> {
        let parsed: Self = toml::from_str(contents)?;
        Ok(parsed)
    }
}
