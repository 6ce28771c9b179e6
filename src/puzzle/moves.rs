use strum_macros::{Display, EnumIter};

/// The direction the blank moves in. The tile on the other side slides the
/// opposite way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Move {
    Down,
    Right,
    Up,
    Left,
}

impl Move {
    /// (row, column) offset of the blank.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Move::Down => (1, 0),
            Move::Right => (0, 1),
            Move::Up => (-1, 0),
            Move::Left => (0, -1),
        }
    }

    /// The move that undoes this one.
    pub fn opposite(&self) -> Move {
        match self {
            Move::Down => Move::Up,
            Move::Right => Move::Left,
            Move::Up => Move::Down,
            Move::Left => Move::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn opposites_cancel() {
        for mv in Move::iter() {
            let (dr, dc) = mv.offset();
            let (or, oc) = mv.opposite().offset();
            assert_eq!((dr + or, dc + oc), (0, 0));
            assert_eq!(mv.opposite().opposite(), mv);
        }
    }

    #[test]
    fn generation_order() {
        let names: Vec<String> = Move::iter().map(|mv| mv.to_string()).collect();
        assert_eq!(names, vec!["down", "right", "up", "left"]);
    }
}
