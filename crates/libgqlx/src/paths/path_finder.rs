use crate::QueryError;
use crate::Schema;
use crate::paths::DiscoveredPath;
use crate::paths::PathStep;
use std::collections::HashSet;
use std::collections::VecDeque;

pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Breadth-first search over the field-reachability graph of a [`Schema`].
///
/// Each search state carries its own set of visited types, so a type never
/// appears twice as an intermediate node of one path while distinct
/// branches may still pass through it. The target is checked before the
/// visited set, which lets a path end on a type it already passed through.
///
/// Worst-case cost grows exponentially with the max depth; the depth bound
/// is the only limit.
#[derive(Clone, Copy, Debug)]
pub struct PathFinder<'schema> {
    max_depth: usize,
    schema: &'schema Schema,
}
impl<'schema> PathFinder<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            schema,
        }
    }

    /// Finds every path of at most `max_depth` hops from `from_type` to
    /// `target_type`, sorted by their rendered form.
    pub fn find_paths(
        &self,
        from_type: &str,
        target_type: &str,
    ) -> Result<Vec<DiscoveredPath>, QueryError> {
        self.schema.require_type(from_type, "type")?;
        self.schema.require_type(target_type, "type")?;

        let mut paths = vec![];
        if self.max_depth == 0 {
            return Ok(paths);
        }

        let mut queue = VecDeque::from([SearchState {
            current_type: from_type,
            steps: vec![],
            visited: HashSet::from([from_type]),
        }]);
        let mut states_explored: usize = 0;

        while let Some(state) = queue.pop_front() {
            states_explored += 1;
            let Some(type_node) = self.schema.type_node(state.current_type) else {
                continue;
            };

            for field in type_node.fields() {
                let return_type = field.return_type_name();
                let mut steps = state.steps.clone();
                steps.push(PathStep::new(
                    type_node.name(),
                    field.name(),
                    field.has_arguments(),
                ));

                if return_type == target_type {
                    paths.push(DiscoveredPath::new(steps.clone(), target_type));
                }

                if state.visited.contains(return_type) || steps.len() >= self.max_depth {
                    continue;
                }

                let traversable = self.schema.type_node(return_type)
                    .is_some_and(|next| next.kind().has_output_fields() && next.has_fields());
                if !traversable {
                    continue;
                }

                let mut visited = state.visited.clone();
                visited.insert(return_type);
                queue.push_back(SearchState {
                    current_type: return_type,
                    steps,
                    visited,
                });
            }
        }

        log::debug!(
            "Explored {states_explored} search state(s) from `{from_type}` and \
            found {} path(s) to `{target_type}` within {} hop(s).",
            paths.len(),
            self.max_depth,
        );

        paths.sort_by_cached_key(DiscoveredPath::to_string);
        Ok(paths)
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

struct SearchState<'schema> {
    current_type: &'schema str,
    steps: Vec<PathStep>,
    visited: HashSet<&'schema str>,
}

/// Keeps only the paths with a hop declared on `type_name`.
pub fn retain_through(paths: &mut Vec<DiscoveredPath>, type_name: &str) {
    paths.retain(|path| path.passes_through(type_name));
}

/// Keeps only the paths with the fewest hops. Ties are all kept.
pub fn retain_shortest(paths: &mut Vec<DiscoveredPath>) {
    if let Some(min_hops) = paths.iter().map(DiscoveredPath::hop_count).min() {
        paths.retain(|path| path.hop_count() == min_hops);
    }
}
