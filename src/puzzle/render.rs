use crate::puzzle::Board;
use crate::search::Path;
use std::fmt;

/// Displays a solution move by move: every board preceded by its level, the
/// number of moves made to reach it.
#[derive(Debug, Clone, Copy)]
pub struct LevelTrace<'a>(pub &'a Path<Board>);

impl fmt::Display for LevelTrace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (level, board) in self.0.levels() {
            writeln!(f, "level {}", level)?;
            writeln!(f, "{}", board)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn render_trace(path: &Path<Board>) -> String {
    LevelTrace(path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::solve;

    #[test]
    fn levels_count_from_zero() {
        let board = Board::new(&[[1, 2], [0, 3]]).unwrap();
        let path = solve(&board).unwrap().into_path().unwrap();
        assert_eq!(
            render_trace(&path),
            "level 0\n1 2\n0 3\n\nlevel 1\n1 2\n3 0\n\n"
        );
    }
}
