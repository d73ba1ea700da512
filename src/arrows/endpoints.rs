use super::options::ArrowOptions;
use super::types::StrokeSegment;
use crate::types::{distance, Point};

/// Endpoints of `members` that no other member absorbs.
///
/// An endpoint is absorbed when it lies closer than `absorb_radius` to an
/// endpoint of another member, or inside another member's rectangle grown by
/// `absorb_margin`. Duplicated coordinates are kept.
pub fn external_endpoints(members: &[&StrokeSegment], options: &ArrowOptions) -> Vec<Point> {
    let mut external = Vec::new();
    for (i, segment) in members.iter().enumerate() {
        for &end in &segment.ends {
            let absorbed = members
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .any(|(_, other)| {
                    other.rect.contains_with_margin(end, options.absorb_margin)
                        || other
                            .ends
                            .iter()
                            .any(|&p| distance(end, p) < options.absorb_radius)
                });
            if !absorbed {
                external.push(end);
            }
        }
    }
    external
}
