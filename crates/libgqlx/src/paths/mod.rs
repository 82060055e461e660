mod discovered_path;
mod path_finder;
mod path_step;

pub use discovered_path::DiscoveredPath;
pub use path_finder::DEFAULT_MAX_DEPTH;
pub use path_finder::PathFinder;
pub use path_finder::retain_shortest;
pub use path_finder::retain_through;
pub use path_step::PathStep;
