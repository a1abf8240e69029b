//! Configuration types for the report assembler

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PUBLIC_IP_URL: &str = "https://api.ipify.org";
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Half-open port range, `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRange {
    pub start: u16,
    pub end: u16,
}

impl PortRange {
    pub fn iter(&self) -> std::ops::Range<u16> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PortRange {
    fn default() -> Self {
        Self {
            start: 1024,
            end: 10000,
        }
    }
}

impl FromStr for PortRange {
    type Err = String;

    /// Parse `START-END`, e.g. `1024-10000`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| format!("expected START-END, got '{}'", s))?;
        let start: u16 = start
            .trim()
            .parse()
            .map_err(|_| format!("invalid port: {}", start))?;
        let end: u16 = end
            .trim()
            .parse()
            .map_err(|_| format!("invalid port: {}", end))?;
        if start > end {
            return Err(format!("range start {} is after end {}", start, end));
        }
        Ok(Self { start, end })
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Configuration for system diagnostics collection.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub ports: PortRange,
    /// Skip the public IP lookup when false
    pub lookup_public_ip: bool,
    pub public_ip_url: String,
    pub http_timeout: Duration,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            ports: PortRange::default(),
            lookup_public_ip: true,
            public_ip_url: DEFAULT_PUBLIC_IP_URL.to_string(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_range() {
        let range: PortRange = "1024-10000".parse().unwrap();
        assert_eq!(range, PortRange::default());
        assert_eq!(range.len(), 8976);

        let range: PortRange = " 80 - 81 ".parse().unwrap();
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![80]);
    }

    #[test]
    fn test_parse_port_range_errors() {
        assert!("1024".parse::<PortRange>().is_err());
        assert!("a-b".parse::<PortRange>().is_err());
        assert!("9000-80".parse::<PortRange>().is_err());
        assert!("1-70000".parse::<PortRange>().is_err());
    }

    #[test]
    fn test_empty_range() {
        let range: PortRange = "5000-5000".parse().unwrap();
        assert!(range.is_empty());
        assert_eq!(range.to_string(), "5000-5000");
    }
}
