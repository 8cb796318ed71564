//! Network file parsing
//!
//! The input file carries three whitespace-separated integers: grid height,
//! grid width, and the number of vehicles to place.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Dimensions and vehicle count read from the network file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkConfig {
    pub height: usize,
    pub width: usize,
    pub vehicle_count: usize,
}

impl NetworkConfig {
    /// Load a configuration from `path`
    ///
    /// Fails on a missing file or on any token that does not parse as an
    /// integer; no further validation is applied.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read network file {}", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("failed to parse network file {}", path.display()))
    }

    fn parse(text: &str) -> Result<Self> {
        let mut tokens = text.split_whitespace();
        let height = parse_token(tokens.next(), "height")?;
        let width = parse_token(tokens.next(), "width")?;
        let vehicle_count = parse_token(tokens.next(), "vehicle count")?;
        Ok(Self {
            height,
            width,
            vehicle_count,
        })
    }
}

fn parse_token(token: Option<&str>, name: &str) -> Result<usize> {
    let token = token.with_context(|| format!("missing {} token", name))?;
    token
        .parse()
        .with_context(|| format!("invalid {} token {:?}", name, token))
}
