//! Quadrant wind radii decoding and multi line merge.
use crate::{fields, ParsingError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Threshold and quadrant field positions, shared by both deck schemas.
const THRESHOLD: usize = 11;
const QUADRANTS: [usize; 4] = [13, 14, 15, 16]; // NE, SE, SW, NW

/// Radial extent (nautical miles) of one wind speed threshold, per
/// compass quadrant around the storm center. A quadrant the deck never
/// reported (or reported as zero) is `None`.
#[derive(Default, Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindRadii {
    /// Northeast quadrant radius (nm)
    pub ne: Option<f64>,
    /// Southeast quadrant radius (nm)
    pub se: Option<f64>,
    /// Southwest quadrant radius (nm)
    pub sw: Option<f64>,
    /// Northwest quadrant radius (nm)
    pub nw: Option<f64>,
}

impl WindRadii {
    /// True if no quadrant reported this threshold.
    pub fn is_empty(&self) -> bool {
        self.ne.is_none() && self.se.is_none() && self.sw.is_none() && self.nw.is_none()
    }
    /// Largest reported quadrant radius (nm), if any.
    pub fn max_radius(&self) -> Option<f64> {
        [self.ne, self.se, self.sw, self.nw]
            .into_iter()
            .flatten()
            .reduce(f64::max)
    }
    fn decode(fields: &[&str]) -> Result<Self, ParsingError> {
        Ok(Self {
            ne: fields::parse_optional(fields, QUADRANTS[0])?,
            se: fields::parse_optional(fields, QUADRANTS[1])?,
            sw: fields::parse_optional(fields, QUADRANTS[2])?,
            nw: fields::parse_optional(fields, QUADRANTS[3])?,
        })
    }
}

/// Merges the quadrant radii reported by every line of one record group
/// into [34 kt, 50 kt, 64 kt] radii. Each line announces one threshold:
/// 0 (or a blank / absent field) means the line carries no radii, and a
/// parseable threshold other than 34/50/64 is ignored. Lines carry
/// disjoint thresholds, so the merge is order independent.
pub(crate) fn decode_radii(lines: &[String]) -> Result<[WindRadii; 3], ParsingError> {
    let mut r34 = WindRadii::default();
    let mut r50 = WindRadii::default();
    let mut r64 = WindRadii::default();
    for line in lines {
        let fields = fields::split(line);
        let threshold = match fields.get(THRESHOLD) {
            Some(&"") | None => continue,
            Some(value) => value
                .parse::<i32>()
                .map_err(|_| ParsingError::Threshold(value.to_string()))?,
        };
        match threshold {
            34 => r34 = WindRadii::decode(&fields)?,
            50 => r50 = WindRadii::decode(&fields)?,
            64 => r64 = WindRadii::decode(&fields)?,
            _ => {},
        }
    }
    Ok([r34, r50, r64])
}

#[cfg(test)]
mod test {
    use super::*;
    fn lines(content: &[&str]) -> Vec<String> {
        content.iter().map(|s| s.to_string()).collect()
    }
    #[test]
    fn merges_thresholds() {
        let group = lines(&[
            "AL, 09, 2022092806, , BEST, 0, 251N, 800W, 45, 990, TS, 34, NEQ, 60, 60, 40, 40",
            "AL, 09, 2022092806, , BEST, 0, 251N, 800W, 45, 990, TS, 50, NEQ, 30, 30, 0, 0",
        ]);
        let [r34, r50, r64] = decode_radii(&group).unwrap();
        assert_eq!(r34.ne, Some(60.0));
        assert_eq!(r34.se, Some(60.0));
        assert_eq!(r34.sw, Some(40.0));
        assert_eq!(r34.nw, Some(40.0));
        assert_eq!(r50.ne, Some(30.0));
        assert_eq!(r50.se, Some(30.0));
        // zero radius means "not reported", never an actual zero
        assert_eq!(r50.sw, None);
        assert_eq!(r50.nw, None);
        assert!(r64.is_empty());
    }
    #[test]
    fn order_independent() {
        let mut group = lines(&[
            "AL, 09, 2022092806, , BEST, 0, 251N, 800W, 45, 990, TS, 34, NEQ, 60, 60, 40, 40",
            "AL, 09, 2022092806, , BEST, 0, 251N, 800W, 45, 990, TS, 64, NEQ, 10, 10, 5, 5",
        ]);
        let forward = decode_radii(&group).unwrap();
        group.reverse();
        assert_eq!(decode_radii(&group).unwrap(), forward);
    }
    #[test]
    fn zero_threshold_reports_nothing() {
        let group = lines(&[
            "AL, 09, 2022092806, , BEST, 0, 251N, 800W, 45, 990, TS, 0, , 0, 0, 0, 0",
        ]);
        let [r34, r50, r64] = decode_radii(&group).unwrap();
        assert!(r34.is_empty() && r50.is_empty() && r64.is_empty());
    }
    #[test]
    fn unexpected_threshold_is_ignored() {
        let group = lines(&[
            "AL, 09, 2022092806, , BEST, 0, 251N, 800W, 45, 990, TS, 100, NEQ, 60, 60, 40, 40",
        ]);
        let [r34, r50, r64] = decode_radii(&group).unwrap();
        assert!(r34.is_empty() && r50.is_empty() && r64.is_empty());
    }
    #[test]
    fn short_line_reports_nothing() {
        let group = lines(&["AL, 09, 2022092806, , BEST, 0, 251N, 800W, 45, 990, TS"]);
        let [r34, _, _] = decode_radii(&group).unwrap();
        assert!(r34.is_empty());
    }
    #[test]
    fn corrupt_threshold_is_fatal() {
        let group = lines(&[
            "AL, 09, 2022092806, , BEST, 0, 251N, 800W, 45, 990, TS, 3x, NEQ, 60, 60, 40, 40",
        ]);
        assert!(decode_radii(&group).is_err());
    }
    #[test]
    fn max_radius() {
        let radii = WindRadii {
            ne: Some(60.0),
            se: Some(45.0),
            sw: None,
            nw: Some(50.0),
        };
        assert_eq!(radii.max_radius(), Some(60.0));
        assert_eq!(WindRadii::default().max_radius(), None);
    }
}
