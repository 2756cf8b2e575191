use std::error::Error;
use std::path::PathBuf;

use crate::report::RuleOrder;

/// Command line configuration for the miner binary.
pub struct Config {
    // input CSV; stdin when absent
    input: Option<PathBuf>,
    min_support: f64,
    min_confidence: f64,
    min_lift: f64,
    min_conviction: f64,
    order: RuleOrder,
}

impl Config {
    /// constructor
    ///
    /// # Examples
    /// ```bash
    /// $ cargo run -- -f data/market.csv -s 0.15 -c 0.6
    /// ```
    pub fn new(mut args: impl Iterator<Item = String>) -> Result<Config, Box<dyn Error>> {
        // 0: program name, then flag/value pairs
        args.next();

        let mut input = None;
        let mut min_support = 0.15;
        let mut min_confidence = 0.6;
        let mut min_lift = 1.0;
        let mut min_conviction = 1.0;
        let mut order = RuleOrder::default();

        while let Some(flag) = args.next() {
            let value = args
                .next()
                .ok_or_else(|| format!("missing value for {}", flag))?;
            match flag.as_str() {
                "-f" | "--file" => input = Some(PathBuf::from(value)),
                "-s" | "--min-support" => min_support = value.parse::<f64>()?,
                "-c" | "--min-confidence" => min_confidence = value.parse::<f64>()?,
                "-l" | "--min-lift" => min_lift = value.parse::<f64>()?,
                "-v" | "--min-conviction" => min_conviction = value.parse::<f64>()?,
                "-o" | "--order" => order = value.parse::<RuleOrder>()?,
                other => return Err(Box::from(format!("unknown argument: {}", other))),
            }
        }

        Ok(Config {
            input,
            min_support,
            min_confidence,
            min_lift,
            min_conviction,
            order,
        })
    }

    pub fn get_input(&self) -> Option<&PathBuf> {
        self.input.as_ref()
    }

    pub fn get_min_support(&self) -> f64 {
        self.min_support
    }

    pub fn get_min_confidence(&self) -> f64 {
        self.min_confidence
    }

    pub fn get_min_lift(&self) -> f64 {
        self.min_lift
    }

    pub fn get_min_conviction(&self) -> f64 {
        self.min_conviction
    }

    pub fn get_order(&self) -> RuleOrder {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, Box<dyn Error>> {
        let mut argv = vec!["target/debug/fast_apriori".to_string()];
        argv.extend(args.iter().map(|s| s.to_string()));
        Config::new(argv.into_iter())
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert!(config.get_input().is_none());
        assert_eq!(config.get_min_support(), 0.15);
        assert_eq!(config.get_min_confidence(), 0.6);
        assert_eq!(config.get_min_lift(), 1.0);
        assert_eq!(config.get_min_conviction(), 1.0);
        assert_eq!(config.get_order(), RuleOrder::Confidence);
    }

    #[test]
    fn test_full_argument_set() {
        let config = parse(&[
            "-f",
            "data/market.csv",
            "-s",
            "0.5",
            "-c",
            "0.05",
            "-l",
            "1.2",
            "-v",
            "1.1",
            "-o",
            "lift",
        ])
        .unwrap();
        assert_eq!(config.get_input(), Some(&PathBuf::from("data/market.csv")));
        assert_eq!(config.get_min_support(), 0.5);
        assert_eq!(config.get_min_confidence(), 0.05);
        assert_eq!(config.get_min_lift(), 1.2);
        assert_eq!(config.get_min_conviction(), 1.1);
        assert_eq!(config.get_order(), RuleOrder::Lift);
    }

    #[test]
    fn test_bad_inputs_are_rejected() {
        assert!(parse(&["-s"]).is_err());
        assert!(parse(&["-s", "lots"]).is_err());
        assert!(parse(&["--frequent"]).is_err());
        assert!(parse(&["-o", "support"]).is_err());
    }
}
