//! Workspace configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IterConfig {
    /// Cap on the number of elements an eager container will cache when
    /// collecting through `try_collect`. `None` means unbounded.
    pub materialize_limit: Option<usize>,

    /// Per-traversal term budget for series truncation (`epsilon`).
    pub series_max_terms: usize,

    /// A series term whose magnitude is at or below this is negligible.
    pub series_tolerance: f64,
}

impl Default for IterConfig {
    fn default() -> Self {
        Self {
            materialize_limit: Some(1 << 20),
            series_max_terms: 1024,
            series_tolerance: f64::EPSILON,
        }
    }
}

impl IterConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `ITERABLE_MATERIALIZE_LIMIT`: element cap (`0` or `none` = unbounded)
    /// - `ITERABLE_SERIES_MAX_TERMS`: term budget for series truncation
    /// - `ITERABLE_SERIES_TOLERANCE`: negligible-term threshold
    ///
    /// Unparseable values are ignored. Use [`IterConfig::try_from_env`] to
    /// surface them instead.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("ITERABLE_MATERIALIZE_LIMIT") {
            if let Some(v) = parse_limit(&s) {
                cfg.materialize_limit = v;
            }
        }

        if let Ok(s) = std::env::var("ITERABLE_SERIES_MAX_TERMS") {
            if let Ok(v) = s.trim().parse::<usize>() {
                cfg.series_max_terms = v;
            }
        }

        if let Ok(s) = std::env::var("ITERABLE_SERIES_TOLERANCE") {
            if let Ok(v) = s.trim().parse::<f64>() {
                cfg.series_tolerance = v;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            materialize_limit = ?cfg.materialize_limit,
            series_max_terms = cfg.series_max_terms,
            series_tolerance = cfg.series_tolerance,
            "config from env"
        );

        cfg
    }

    /// Like [`IterConfig::from_env`], but a present-yet-invalid variable is
    /// an error, and the result is validated.
    pub fn try_from_env() -> Result<Self> {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("ITERABLE_MATERIALIZE_LIMIT") {
            cfg.materialize_limit = parse_limit(&s).ok_or(Error::Env {
                var: "ITERABLE_MATERIALIZE_LIMIT",
                value: s.clone(),
            })?;
        }

        if let Ok(s) = std::env::var("ITERABLE_SERIES_MAX_TERMS") {
            cfg.series_max_terms = s.trim().parse().map_err(|_| Error::Env {
                var: "ITERABLE_SERIES_MAX_TERMS",
                value: s.clone(),
            })?;
        }

        if let Ok(s) = std::env::var("ITERABLE_SERIES_TOLERANCE") {
            cfg.series_tolerance = s.trim().parse().map_err(|_| Error::Env {
                var: "ITERABLE_SERIES_TOLERANCE",
                value: s.clone(),
            })?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from a JSON document; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.series_tolerance.is_finite() || self.series_tolerance < 0.0 {
            return Err(Error::Config(format!(
                "series_tolerance must be finite and non-negative, got {}",
                self.series_tolerance
            )));
        }
        if self.series_max_terms == 0 {
            return Err(Error::Config("series_max_terms must be positive".into()));
        }
        Ok(())
    }
}

/// `Some(None)` = unbounded, `Some(Some(n))` = cap, `None` = unparseable.
fn parse_limit(s: &str) -> Option<Option<usize>> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("none") {
        return Some(None);
    }
    match s.parse::<usize>() {
        Ok(0) => Some(None),
        Ok(n) => Some(Some(n)),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        IterConfig::default().validate().expect("default config");
    }

    #[test]
    fn test_json_partial_document_fills_defaults() {
        let cfg = IterConfig::from_json_str(r#"{ "series_max_terms": 64 }"#).unwrap();
        assert_eq!(cfg.series_max_terms, 64);
        assert_eq!(cfg.series_tolerance, f64::EPSILON);
        assert_eq!(cfg.materialize_limit, Some(1 << 20));
    }

    #[test]
    fn test_json_round_trip() {
        let cfg = IterConfig {
            materialize_limit: None,
            ..Default::default()
        };
        let s = cfg.to_json_string().unwrap();
        assert_eq!(IterConfig::from_json_str(&s).unwrap(), cfg);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cfg = IterConfig {
            series_tolerance: -1.0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(Error::Config(_))));

        let cfg = IterConfig {
            series_max_terms: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    const VARS: [&str; 3] = [
        "ITERABLE_MATERIALIZE_LIMIT",
        "ITERABLE_SERIES_MAX_TERMS",
        "ITERABLE_SERIES_TOLERANCE",
    ];

    fn with_env(values: [Option<&str>; 3], f: impl FnOnce()) {
        let saved: Vec<Option<String>> = VARS.iter().map(|v| std::env::var(v).ok()).collect();
        for (var, value) in VARS.iter().zip(values) {
            match value {
                Some(value) => std::env::set_var(var, value),
                None => std::env::remove_var(var),
            }
        }
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));
        for (var, value) in VARS.iter().zip(saved) {
            match value {
                Some(value) => std::env::set_var(var, value),
                None => std::env::remove_var(var),
            }
        }
        if let Err(e) = result {
            std::panic::resume_unwind(e);
        }
    }

    // One test so the process environment is never mutated concurrently.
    #[test]
    fn test_env_overrides_fallback_and_errors() {
        with_env([Some("0"), Some("64"), Some("1e-9")], || {
            let cfg = IterConfig::from_env();
            assert_eq!(cfg.materialize_limit, None);
            assert_eq!(cfg.series_max_terms, 64);
            assert_eq!(cfg.series_tolerance, 1e-9);
            assert_eq!(IterConfig::try_from_env().unwrap(), cfg);
        });

        with_env([Some("NONE"), None, None], || {
            assert_eq!(IterConfig::from_env().materialize_limit, None);
        });

        with_env([Some("lots"), Some("many"), Some("tiny")], || {
            // unparseable values fall back to the defaults
            assert_eq!(IterConfig::from_env(), IterConfig::default());

            match IterConfig::try_from_env() {
                Err(Error::Env { var, value }) => {
                    assert_eq!(var, "ITERABLE_MATERIALIZE_LIMIT");
                    assert_eq!(value, "lots");
                }
                other => panic!("expected an env error, got {other:?}"),
            }
        });

        with_env([None, Some("many"), None], || {
            assert!(matches!(
                IterConfig::try_from_env(),
                Err(Error::Env { var: "ITERABLE_SERIES_MAX_TERMS", .. })
            ));
        });

        with_env([None, Some("0"), None], || {
            // parses, but fails validation
            assert_eq!(IterConfig::from_env().series_max_terms, 0);
            assert!(matches!(IterConfig::try_from_env(), Err(Error::Config(_))));
        });

        with_env([None, None, None], || {
            assert_eq!(IterConfig::from_env(), IterConfig::default());
        });
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit("none"), Some(None));
        assert_eq!(parse_limit("0"), Some(None));
        assert_eq!(parse_limit(" 32 "), Some(Some(32)));
        assert_eq!(parse_limit("lots"), None);
    }
}
