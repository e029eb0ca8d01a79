//! Share links for an estimate
//!
//! Encodes the joint inputs as query parameters on a base URL and
//! optionally passes the result through a link shortener.

use serde::Serialize;
use url::Url;

use sealant_domain::LinkShortener;
use sealant_infra::validate_share_url;
use sealant_types::{ConfigError, Result};

use crate::app::estimate_service::{run_estimate, EstimateReport, EstimateRequest};
use crate::config::Config;

#[derive(Debug, Clone, Serialize)]
pub struct ShareLink {
    pub long_url: String,
    pub short_url: Option<String>,
}

/// Build the long share URL for an estimate
pub fn build_share_url(base_url: &str, report: &EstimateReport) -> Result<Url> {
    let mut url = validate_share_url(base_url)?;
    let estimate = &report.estimate;

    url.query_pairs_mut()
        .append_pair("profile", estimate.joint.profile().key())
        .append_pair("width_mm", &estimate.joint.width_mm().to_string())
        .append_pair("depth_mm", &estimate.joint.depth_mm().to_string())
        .append_pair("length_m", &estimate.joint.length_m().to_string())
        .append_pair("cartridge", &estimate.cartridge.key)
        .append_pair("wastage", &estimate.wastage_percent.to_string());

    Ok(url)
}

/// Base URL from the request override or config
pub fn resolve_base_url<'a>(config: &'a Config, override_url: Option<&'a str>) -> Result<&'a str> {
    override_url
        .or(config.share_base_url.as_deref())
        .ok_or_else(|| {
            ConfigError::ParseError(
                "share_base_url is not set (use --base-url or config --set-share-base-url)"
                    .to_string(),
            )
            .into()
        })
}

/// Estimate, build the share URL, and shorten it when a shortener is given
pub fn create_share_link(
    config: &Config,
    request: &EstimateRequest,
    base_url: Option<&str>,
    shortener: Option<&dyn LinkShortener>,
) -> Result<ShareLink> {
    let report = run_estimate(config, request)?;

    let base = resolve_base_url(config, base_url)?;
    let long_url = build_share_url(base, &report)?.to_string();

    let short_url = match shortener {
        Some(shortener) => Some(shortener.shorten(&long_url)?),
        None => None,
    };

    Ok(ShareLink {
        long_url,
        short_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sealant_types::{Error, ShareError};
    use std::cell::RefCell;

    struct RecordingShortener {
        seen: RefCell<Vec<String>>,
    }

    impl LinkShortener for RecordingShortener {
        fn shorten(&self, long_url: &str) -> Result<String> {
            self.seen.borrow_mut().push(long_url.to_string());
            Ok("https://short.example/x1".to_string())
        }
    }

    struct FailingShortener;

    impl LinkShortener for FailingShortener {
        fn shorten(&self, _long_url: &str) -> Result<String> {
            Err(ShareError::Status(429).into())
        }
    }

    fn request() -> EstimateRequest {
        EstimateRequest {
            profile: Some("v".to_string()),
            width_mm: Some(12.0),
            depth_mm: Some(6.0),
            length_m: Some(2.5),
            no_wastage: true,
            ..EstimateRequest::default()
        }
    }

    #[test]
    fn test_long_url_encodes_inputs() {
        let link = create_share_link(
            &Config::default(),
            &request(),
            Some("https://calc.example.com/"),
            None,
        )
        .unwrap();

        let url = Url::parse(&link.long_url).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("profile".to_string(), "v".to_string())));
        assert!(pairs.contains(&("width_mm".to_string(), "12".to_string())));
        assert!(pairs.contains(&("length_m".to_string(), "2.5".to_string())));
        assert!(pairs.contains(&("cartridge".to_string(), "cartridge-300".to_string())));
        assert!(pairs.contains(&("wastage".to_string(), "0".to_string())));
        assert!(link.short_url.is_none());
    }

    #[test]
    fn test_shortener_receives_long_url() {
        let shortener = RecordingShortener {
            seen: RefCell::new(Vec::new()),
        };
        let config = Config {
            share_base_url: Some("https://calc.example.com/".to_string()),
            ..Config::default()
        };

        let link = create_share_link(&config, &request(), None, Some(&shortener)).unwrap();
        assert_eq!(link.short_url.as_deref(), Some("https://short.example/x1"));
        assert_eq!(shortener.seen.borrow().as_slice(), [link.long_url.clone()]);
    }

    #[test]
    fn test_shortener_error_propagates() {
        let err = create_share_link(
            &Config::default(),
            &request(),
            Some("https://calc.example.com/"),
            Some(&FailingShortener),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Share(ShareError::Status(429))));
    }

    #[test]
    fn test_missing_base_url() {
        let err = create_share_link(&Config::default(), &request(), None, None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_invalid_input_never_reaches_shortener() {
        let shortener = RecordingShortener {
            seen: RefCell::new(Vec::new()),
        };
        let mut req = request();
        req.depth_mm = Some(0.0);

        let result = create_share_link(
            &Config::default(),
            &req,
            Some("https://calc.example.com/"),
            Some(&shortener),
        );
        assert!(result.is_err());
        assert!(shortener.seen.borrow().is_empty());
    }
}
