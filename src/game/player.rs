use super::board::Mark;

/// Which of the two seats a player occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
}

/// A named participant and the mark they play with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    mark: Mark,
}

impl Player {
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Player {
            name: name.into(),
            mark,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }
}

/// Both players of a session, fixed once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    one: Player,
    two: Player,
}

impl Players {
    /// Pair two players. Their marks must differ, otherwise a run of four
    /// could not be attributed to either of them.
    pub fn new(one: Player, two: Player) -> Option<Self> {
        (one.mark != two.mark).then_some(Players { one, two })
    }

    pub fn get(&self, side: Side) -> &Player {
        match side {
            Side::One => &self.one,
            Side::Two => &self.two,
        }
    }

    /// Side that plays `mark`, if either does.
    pub fn side_of(&self, mark: Mark) -> Option<Side> {
        if mark == self.one.mark {
            Some(Side::One)
        } else if mark == self.two.mark {
            Some(Side::Two)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players() -> Players {
        Players::new(
            Player::new("Anna", Mark::new('o')),
            Player::new("Ben", Mark::new('*')),
        )
        .unwrap()
    }

    #[test]
    fn test_other_side() {
        assert_eq!(Side::One.other(), Side::Two);
        assert_eq!(Side::Two.other(), Side::One);
    }

    #[test]
    fn test_get_by_side() {
        let players = players();
        assert_eq!(players.get(Side::One).name(), "Anna");
        assert_eq!(players.get(Side::Two).mark(), Mark::new('*'));
    }

    #[test]
    fn test_side_of_mark() {
        let players = players();
        assert_eq!(players.side_of(Mark::new('o')), Some(Side::One));
        assert_eq!(players.side_of(Mark::new('*')), Some(Side::Two));
        assert_eq!(players.side_of(Mark::new('x')), None);
    }

    #[test]
    fn test_same_marks_rejected() {
        let pair = Players::new(
            Player::new("Anna", Mark::new('o')),
            Player::new("Ben", Mark::new('o')),
        );
        assert!(pair.is_none());
    }
}
