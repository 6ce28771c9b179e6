use crate::puzzle::{Board, PuzzleHeuristic};
use crate::search::{
    search_engines::{SearchEngineName, SearchOutcome, SearchResult},
    GoalTest, Heuristic, HeuristicValue, SearchError, SearchProblem, SearchStatistics,
    Successor,
};
use tracing::info;

/// Solving a sliding-tile board. Every move costs 1, the goal is the solved
/// board of the same dimensions.
#[derive(Debug, Clone)]
pub struct PuzzleProblem {
    goal: Board,
    heuristic: PuzzleHeuristic,
    goal_test: GoalTest,
}

impl PuzzleProblem {
    /// By default boards are goal-tested as soon as they are generated, the
    /// way breadth-first search over the puzzle is usually run.
    pub fn new(board: &Board) -> Self {
        Self {
            goal: board.solved(),
            heuristic: PuzzleHeuristic::default(),
            goal_test: GoalTest::OnGeneration,
        }
    }

    pub fn with_heuristic(mut self, heuristic: PuzzleHeuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_goal_test(mut self, goal_test: GoalTest) -> Self {
        self.goal_test = goal_test;
        self
    }

    pub fn goal(&self) -> &Board {
        &self.goal
    }
}

impl SearchProblem for PuzzleProblem {
    type State = Board;

    fn successors(&self, board: &Board) -> Vec<Successor<Board>> {
        board
            .neighbours()
            .map(|(_, neighbour)| Successor::new(neighbour, 1.))
            .collect()
    }

    fn is_goal(&self, board: &Board) -> bool {
        *board == self.goal
    }

    fn heuristic(&self, board: &Board) -> Result<HeuristicValue, SearchError> {
        self.heuristic.evaluate(board)
    }

    fn goal_test(&self) -> GoalTest {
        self.goal_test
    }
}

/// Solve `board` with breadth-first search, testing boards for the goal when
/// they are generated. The path has as few moves as possible. Boards that
/// cannot be solved are reported without searching.
pub fn solve(board: &Board) -> Result<SearchResult<Board>, SearchError> {
    solve_with(board, SearchEngineName::Bfs, PuzzleHeuristic::default()).map(|(result, _)| result)
}

/// Solve `board` with any strategy. Breadth-first search tests for the goal
/// on generation, every other strategy on expansion, which keeps uniform-cost
/// search and A* optimal.
pub fn solve_with(
    board: &Board,
    engine: SearchEngineName,
    heuristic: PuzzleHeuristic,
) -> SearchOutcome<Board> {
    if !board.is_solvable() {
        info!(inversions = board.inversions(), "board is not solvable");
        return Ok((SearchResult::ProvablyUnsolvable, SearchStatistics::new()));
    }
    let goal_test = if engine == SearchEngineName::Bfs {
        GoalTest::OnGeneration
    } else {
        GoalTest::OnExpansion
    };
    let problem = PuzzleProblem::new(board)
        .with_heuristic(heuristic)
        .with_goal_test(goal_test);
    engine.search(&problem, board.clone())
}
