use crate::graph::{Graph, Heuristics};
use crate::puzzle::Board;

/// Seven nodes where the cheapest route `S A B C E G` (cost 10) is neither
/// the route with fewest edges nor the one greedy search picks.
pub fn example_graph() -> Graph<&'static str> {
    Graph::from_edges([
        ("S", "A", 1.),
        ("S", "B", 4.),
        ("A", "B", 2.),
        ("A", "C", 5.),
        ("A", "D", 12.),
        ("B", "C", 2.),
        ("C", "D", 3.),
        ("C", "E", 4.),
        ("D", "G", 3.),
        ("E", "G", 1.),
    ])
    .unwrap()
}

/// Consistent estimates of the distance to `G` in [`example_graph`].
pub fn example_heuristics() -> Heuristics<&'static str> {
    Heuristics::from_entries([
        ("S", 7.),
        ("A", 6.),
        ("B", 5.),
        ("C", 4.),
        ("D", 2.),
        ("E", 1.),
        ("G", 0.),
    ])
    .unwrap()
}

/// `Z` reaches `S` but nothing reaches `Z`.
pub fn disconnected_graph() -> Graph<&'static str> {
    Graph::from_edges([("S", "A", 1.), ("A", "S", 1.), ("Z", "S", 1.)]).unwrap()
}

/// From `S` the heuristic points at `X`, a dead end whose only edge leads
/// back to `S`.
pub fn trap_graph() -> Graph<&'static str> {
    Graph::from_edges([("S", "X", 1.), ("S", "P", 1.), ("X", "S", 1.), ("P", "G", 5.)]).unwrap()
}

pub fn trap_heuristics() -> Heuristics<&'static str> {
    Heuristics::from_entries([("S", 3.), ("X", 2.), ("P", 5.), ("G", 0.)]).unwrap()
}

/// A solvable 8-puzzle with the blank in its solved position.
pub fn classic_board() -> Board {
    Board::new(&[[1, 8, 3], [6, 4, 7], [5, 2, 0]]).unwrap()
}

pub const GRAPH_CONFIG_TEXT: &str = r#"
[search]
engine = "astar"

[graph]
start = "S"
goal = "G"
edges = [
    ["S", "A", 1.0],
    ["S", "B", 4.0],
    ["A", "B", 2.0],
    ["A", "C", 5.0],
    ["A", "D", 12.0],
    ["B", "C", 2.0],
    ["C", "D", 3.0],
    ["C", "E", 4.0],
    ["D", "G", 3.0],
    ["E", "G", 1.0],
]

[graph.heuristics]
S = 7
A = 6
B = 5
C = 4
D = 2
E = 1
G = 0
"#;

pub const PUZZLE_CONFIG_TEXT: &str = r#"
[puzzle]
board = [
    [1, 8, 3],
    [6, 4, 7],
    [5, 2, 0],
]
"#;
