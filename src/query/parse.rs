//! Layout query tokenizer and value parsers.
//!
//! Splits `key=value` pairs, percent-decodes them, and maps each recognized
//! key onto a [`LayoutRequest`] field, collecting warnings for the rest.

use alloc::string::String;
use alloc::vec::Vec;

use super::ParseWarning;
use super::request::LayoutRequest;
use crate::config::{FloorPolicy, StackDirection};
use crate::strategy::Strategy;

/// Parse a layout query string into a request + warnings.
pub(crate) fn parse_query(query: &str) -> (LayoutRequest, Vec<ParseWarning>) {
    let mut req = LayoutRequest::new();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key);
        let value = percent_decode(raw_value);
        let key_lower = key.to_ascii_lowercase();

        dispatch_key(&key_lower, &value, &mut req, &mut warnings);
    }

    (req, warnings)
}

fn dispatch_key(key: &str, value: &str, req: &mut LayoutRequest, warnings: &mut Vec<ParseWarning>) {
    let mut w = Setter { key, value, warnings };
    match key {
        "strategy" | "layout" => w.set(
            &mut req.strategy,
            value.parse::<Strategy>().ok(),
            "strategy",
            "expected flow|masonry|proportional-grid|aspect-grouped|organic",
        ),

        // Spacing and size limits
        "spacing" | "gap" => w.set(
            &mut req.spacing,
            parse_non_negative(value),
            "spacing",
            "expected a number >= 0",
        ),
        "margin" => w.set(
            &mut req.margin,
            parse_non_negative(value),
            "margin",
            "expected a number >= 0",
        ),
        "min" | "minsize" => w.set(
            &mut req.min_image_size,
            parse_positive(value),
            "min",
            "expected a number > 0",
        ),
        "maxdown" | "maxscaledown" => w.set(
            &mut req.max_scale_down,
            parse_f64(value).filter(|&v| v > 0.0 && v <= 1.0),
            "maxdown",
            "expected a number in (0, 1]",
        ),

        // Flags
        "stacking" => w.set(
            &mut req.allow_stacking,
            parse_bool(value),
            "stacking",
            "expected true|false|1|0|yes|no|on|off",
        ),
        "balance" => w.set(
            &mut req.balance_composition,
            parse_bool(value),
            "balance",
            "expected true|false|1|0|yes|no|on|off",
        ),
        "prioritize" => w.set(
            &mut req.prioritize_large_images,
            parse_bool(value),
            "prioritize",
            "expected true|false|1|0|yes|no|on|off",
        ),
        "priority" => w.set(
            &mut req.prioritize_large_images,
            parse_priority(value),
            "priority",
            "expected large|none",
        ),
        "direction" => w.set(
            &mut req.stack_direction,
            parse_direction(value),
            "direction",
            "expected auto|horizontal|vertical",
        ),
        "floor" => w.set(
            &mut req.floor_policy,
            parse_floor(value),
            "floor",
            "expected uniform|peraxis",
        ),

        // Canvas
        "w" | "width" => w.set(
            &mut req.canvas_width,
            parse_positive(value),
            "w",
            "expected a number > 0",
        ),
        "h" | "height" => w.set(
            &mut req.canvas_height,
            parse_positive(value),
            "h",
            "expected a number > 0",
        ),

        _ => w.unknown(),
    }
}

/// Records one key's value, warning on duplicates and invalid values.
struct Setter<'a> {
    key: &'a str,
    value: &'a str,
    warnings: &'a mut Vec<ParseWarning>,
}

impl Setter<'_> {
    fn set<T>(
        &mut self,
        field: &mut Option<T>,
        parsed: Option<T>,
        canonical: &'static str,
        reason: &'static str,
    ) {
        match parsed {
            Some(v) => {
                if field.is_some() {
                    self.warnings.push(ParseWarning::DuplicateKey {
                        key: String::from(self.key),
                        value: String::from(self.value),
                    });
                }
                *field = Some(v);
            }
            None => self.warnings.push(ParseWarning::ValueInvalid {
                key: canonical,
                value: String::from(self.value),
                reason,
            }),
        }
    }

    fn unknown(&mut self) {
        self.warnings.push(ParseWarning::KeyNotRecognized {
            key: String::from(self.key),
            value: String::from(self.value),
        });
    }
}

// ---- Value parsers ----

fn parse_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_non_negative(s: &str) -> Option<f64> {
    parse_f64(s).filter(|&v| v >= 0.0)
}

fn parse_positive(s: &str) -> Option<f64> {
    parse_f64(s).filter(|&v| v > 0.0)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_priority(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "large" | "largest" | "size" => Some(true),
        "none" | "input" => Some(false),
        _ => None,
    }
}

fn parse_direction(s: &str) -> Option<StackDirection> {
    match s.trim().to_ascii_lowercase().as_str() {
        "auto" => Some(StackDirection::Auto),
        "horizontal" | "h" | "x" => Some(StackDirection::Horizontal),
        "vertical" | "v" | "y" => Some(StackDirection::Vertical),
        _ => None,
    }
}

fn parse_floor(s: &str) -> Option<FloorPolicy> {
    match s.trim().to_ascii_lowercase().as_str() {
        "uniform" => Some(FloorPolicy::Uniform),
        "peraxis" | "per-axis" | "axis" => Some(FloorPolicy::PerAxis),
        _ => None,
    }
}

// ---- Query string tokenizer ----

/// Split query string on '&'.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a URL component. Also handles '+' as space.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strategy_and_spacing() {
        let (req, warnings) = parse_query("strategy=masonry&spacing=12");
        assert_eq!(req.strategy, Some(Strategy::Masonry));
        assert_eq!(req.spacing, Some(12.0));
        assert!(warnings.is_empty());
    }

    #[test]
    fn leading_question_mark_and_aliases() {
        let (req, warnings) = parse_query("?layout=grid&gap=4&minsize=80&maxscaledown=0.6");
        assert_eq!(req.strategy, Some(Strategy::ProportionalGrid));
        assert_eq!(req.spacing, Some(4.0));
        assert_eq!(req.min_image_size, Some(80.0));
        assert_eq!(req.max_scale_down, Some(0.6));
        assert!(warnings.is_empty());
    }

    #[test]
    fn keys_case_insensitive() {
        let (req, _) = parse_query("Strategy=Organic&STACKING=on");
        assert_eq!(req.strategy, Some(Strategy::Organic));
        assert_eq!(req.allow_stacking, Some(true));
    }

    #[test]
    fn percent_encoded_strategy() {
        let (req, _) = parse_query("strategy=aspect%2Dgrouped");
        assert_eq!(req.strategy, Some(Strategy::AspectGrouped));
    }

    #[test]
    fn plus_is_space() {
        assert_eq!(percent_decode("a+b"), "a b");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_decode("%41"), "A");
    }

    #[test]
    fn priority_and_prioritize() {
        let (req, _) = parse_query("priority=large");
        assert_eq!(req.prioritize_large_images, Some(true));
        let (req, _) = parse_query("prioritize=0");
        assert_eq!(req.prioritize_large_images, Some(false));
    }

    #[test]
    fn direction_and_floor() {
        let (req, _) = parse_query("direction=vertical&floor=per-axis&balance=no");
        assert_eq!(req.stack_direction, Some(StackDirection::Vertical));
        assert_eq!(req.floor_policy, Some(FloorPolicy::PerAxis));
        assert_eq!(req.balance_composition, Some(false));
    }

    #[test]
    fn canvas_dimensions() {
        let (req, _) = parse_query("width=1920&h=1080");
        assert_eq!(req.canvas_width, Some(1920.0));
        assert_eq!(req.canvas_height, Some(1080.0));
    }

    #[test]
    fn duplicate_key_last_wins() {
        let (req, warnings) = parse_query("spacing=5&gap=8");
        assert_eq!(req.spacing, Some(8.0));
        assert_eq!(
            warnings,
            [ParseWarning::DuplicateKey {
                key: "gap".into(),
                value: "8".into()
            }]
        );
    }

    #[test]
    fn invalid_values_warn_and_are_ignored() {
        let (req, warnings) = parse_query("spacing=-3&maxdown=1.5&strategy=spiral&min=0");
        assert_eq!(req.spacing, None);
        assert_eq!(req.max_scale_down, None);
        assert_eq!(req.strategy, None);
        assert_eq!(req.min_image_size, None);
        let keys: Vec<_> = warnings
            .iter()
            .map(|w| match w {
                ParseWarning::ValueInvalid { key, .. } => *key,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(keys, ["spacing", "maxdown", "strategy", "min"]);
    }

    #[test]
    fn non_finite_rejected() {
        let (req, warnings) = parse_query("margin=inf&spacing=NaN");
        assert_eq!(req.margin, None);
        assert_eq!(req.spacing, None);
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn unknown_key_warns() {
        let (_, warnings) = parse_query("format=png&w=10");
        assert_eq!(
            warnings,
            [ParseWarning::KeyNotRecognized {
                key: "format".into(),
                value: "png".into()
            }]
        );
    }

    #[test]
    fn empty_pairs_skipped() {
        let (req, warnings) = parse_query("&&margin=3&");
        assert_eq!(req.margin, Some(3.0));
        assert!(warnings.is_empty());
    }
}
