//! Functional-group colors for molecule nodes

/// Tag used when a molecule has no functional-group entry
pub const UNCLASSIFIED: &str = "default";

/// Color for unrecognized or missing functional groups
pub const DEFAULT_COLOR: &str = "#7f7f7f";

/// Color for synthetic intermediate nodes
pub const INTERMEDIATE_COLOR: &str = "#ced4da";

/// Known functional-group tags and their node colors
pub const FUNCTIONAL_GROUP_COLORS: &[(&str, &str)] = &[
    ("alcohol", "#1f77b4"),
    ("aldehyde", "#ff7f0e"),
    ("carboxylic-acid", "#2ca02c"),
    ("ketone", "#d62728"),
    ("alkene", "#9467bd"),
    ("halide", "#8c564b"),
    ("ester", "#e377c2"),
    ("alkyne", "#bcbd22"),
    ("alkane", "#aec7e8"),
    ("diol", "#ffbb78"),
    ("halohydrin", "#98df8a"),
    ("tosylate", "#ff9896"),
    ("acetylide", "#c5b0d5"),
    ("ylide", "#c49c94"),
    ("grignard-reagent", "#f7b6d2"),
    ("phosphine-oxide", "#dbdb8d"),
    ("beta-keto-ester", "#9edae5"),
];

/// Resolve the node color for a functional-group tag
///
/// Unknown tags (including [`UNCLASSIFIED`]) fall back to [`DEFAULT_COLOR`].
#[must_use]
pub fn color_for(group: &str) -> &'static str {
    FUNCTIONAL_GROUP_COLORS
        .iter()
        .find(|(tag, _)| *tag == group)
        .map_or(DEFAULT_COLOR, |(_, color)| color)
}

/// Tag at `index`, or [`UNCLASSIFIED`] when the list is too short
#[must_use]
pub fn group_at(groups: &[String], index: usize) -> &str {
    groups.get(index).map_or(UNCLASSIFIED, String::as_str)
}
