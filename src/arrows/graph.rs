use super::options::ArrowOptions;
use super::types::StrokeSegment;
use crate::types::distance;
use std::collections::VecDeque;

/// Undirected adjacency between the strokes of one image.
#[derive(Clone, Debug, Default)]
pub struct SegmentGraph {
    adjacency: Vec<Vec<usize>>,
}

impl SegmentGraph {
    /// Connect every pair of strokes that meet at a joint or a T-junction.
    pub fn build(segments: &[StrokeSegment], options: &ArrowOptions) -> Self {
        let mut adjacency = vec![Vec::new(); segments.len()];
        for i in 0..segments.len() {
            for j in (i + 1)..segments.len() {
                if segments_touch(&segments[i], &segments[j], options) {
                    adjacency[i].push(j);
                    adjacency[j].push(i);
                }
            }
        }
        Self { adjacency }
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Neighbours of `node` in ascending index order.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Connected components by breadth-first traversal, seeded in index order.
    /// Members are listed in visiting order.
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.len()];
        let mut components = Vec::new();
        let mut queue = VecDeque::new();
        for seed in 0..self.len() {
            if visited[seed] {
                continue;
            }
            visited[seed] = true;
            queue.push_back(seed);
            let mut component = Vec::new();
            while let Some(node) = queue.pop_front() {
                component.push(node);
                for &next in self.neighbors(node) {
                    if !visited[next] {
                        visited[next] = true;
                        queue.push_back(next);
                    }
                }
            }
            components.push(component);
        }
        components
    }
}

/// Two strokes touch when an endpoint pair lies within the joint radius, or an
/// endpoint of either falls inside the other's rectangle grown by the junction
/// margin.
pub fn segments_touch(a: &StrokeSegment, b: &StrokeSegment, options: &ArrowOptions) -> bool {
    let joint = a.ends.iter().any(|&pa| {
        b.ends
            .iter()
            .any(|&pb| distance(pa, pb) <= options.joint_radius)
    });
    joint
        || a.ends
            .iter()
            .any(|&p| b.rect.contains_with_margin(p, options.junction_margin))
        || b.ends
            .iter()
            .any(|&p| a.rect.contains_with_margin(p, options.junction_margin))
}
