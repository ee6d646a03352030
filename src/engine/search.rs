use crate::ai::SearchLimits;

use anyhow::{bail, ensure, Context};

use std::str::FromStr;
use std::time::Duration;

/// Options for configuring the search behavior, as given to `go`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum depth in plies; the engine default when absent
    pub depth: Option<u32>,
    /// Maximum time to search in milliseconds
    pub move_time: Option<u64>,
    /// Maximum number of nodes to search
    pub nodes: Option<u64>,
}

impl SearchOptions {
    pub fn limits(&self, default_depth: u32) -> SearchLimits {
        SearchLimits {
            depth: self.depth.unwrap_or(default_depth),
            move_time: self.move_time.map(Duration::from_millis),
            nodes: self.nodes,
        }
    }
}

impl FromStr for SearchOptions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut i = 0;
        let mut search_options = SearchOptions::default();

        let parts = s.split_whitespace().collect::<Vec<_>>();

        while i < parts.len() {
            match parts[i] {
                "depth" if i + 1 < parts.len() => {
                    let depth: u32 = parts[i + 1].parse().context("invalid depth")?;
                    ensure!(depth > 0, "depth must be positive");
                    search_options.depth = Some(depth);
                    i += 1;
                }
                "movetime" if i + 1 < parts.len() => {
                    let time = parts[i + 1].parse().context("invalid movetime")?;
                    search_options.move_time = Some(time);
                    i += 1;
                }
                "nodes" if i + 1 < parts.len() => {
                    let n = parts[i + 1].parse().context("invalid nodes")?;
                    search_options.nodes = Some(n);
                    i += 1;
                }
                p => bail!("invalid go argument {}", p)
            }
            i += 1;
        }
        Ok(search_options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_options() {
        let options: SearchOptions = "depth 4 movetime 250".parse().unwrap();
        assert_eq!(options.depth, Some(4));
        assert_eq!(options.move_time, Some(250));
        assert_eq!(options.nodes, None);

        let limits = options.limits(3);
        assert_eq!(limits.depth, 4);
        assert_eq!(limits.move_time, Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_parse_defaults() {
        let options: SearchOptions = "".parse().unwrap();
        assert_eq!(options, SearchOptions::default());
        assert_eq!(options.limits(3), SearchLimits::depth(3));
    }

    #[test]
    fn test_parse_errors() {
        assert!("depth".parse::<SearchOptions>().is_err());
        assert!("depth 0".parse::<SearchOptions>().is_err());
        assert!("nodes many".parse::<SearchOptions>().is_err());
        assert!("infinite".parse::<SearchOptions>().is_err());
    }
}
