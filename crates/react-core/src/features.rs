//! Tracked network features.

/// Name of the month column in a metrics table.
pub const MONTH_COLUMN: &str = "month";

/// The features whose trends decide which ReACTs are extracted.
pub const TRACKED_FEATURES: [&str; 6] = [
    "s_avg_clustering_coef",
    "t_num_dev_nodes",
    "t_num_dev_per_file",
    "t_graph_density",
    "st_num_dev",
    "t_net_overlap",
];

/// Whether `name` is one of the tracked features.
pub fn is_tracked(name: &str) -> bool {
    TRACKED_FEATURES.contains(&name)
}
