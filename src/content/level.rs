use std::fmt;

/// The fourteen proficiency levels, declared lowest to highest so the
/// derived `Ord` ranks 8급 below 준7급 and 특급 above everything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    L8,
    Pre7,
    L7,
    Pre6,
    L6,
    Pre5,
    L5,
    Pre4,
    L4,
    Pre3,
    L3,
    L2,
    L1,
    Special,
}

/// Study order. Range spans are sub-slices of this table, so it has to
/// agree with the enum's declaration order.
pub static LEVEL_ORDER: [Level; 14] = [
    Level::L8,
    Level::Pre7,
    Level::L7,
    Level::Pre6,
    Level::L6,
    Level::Pre5,
    Level::L5,
    Level::Pre4,
    Level::L4,
    Level::Pre3,
    Level::L3,
    Level::L2,
    Level::L1,
    Level::Special,
];

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::L8 => "8급",
            Level::Pre7 => "준7급",
            Level::L7 => "7급",
            Level::Pre6 => "준6급",
            Level::L6 => "6급",
            Level::Pre5 => "준5급",
            Level::L5 => "5급",
            Level::Pre4 => "준4급",
            Level::L4 => "4급",
            Level::Pre3 => "준3급",
            Level::L3 => "3급",
            Level::L2 => "2급",
            Level::L1 => "1급",
            Level::Special => "특급",
        }
    }

    /// Inverse of `label`. Data files key their tables by these strings,
    /// so an unknown label means the row belongs to no level we teach.
    pub fn from_label(label: &str) -> Option<Self> {
        LEVEL_ORDER.iter().copied().find(|lv| lv.label() == label)
    }

    /// Position in `LEVEL_ORDER` (0 = 8급, 13 = 특급).
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Next level up, wrapping from 특급 back to 8급.
    pub fn next(self) -> Self {
        LEVEL_ORDER[(self.rank() + 1) % LEVEL_ORDER.len()]
    }

    /// Next level down, wrapping from 8급 up to 특급.
    pub fn prev(self) -> Self {
        LEVEL_ORDER[(self.rank() + LEVEL_ORDER.len() - 1) % LEVEL_ORDER.len()]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_ascending() {
        for pair in LEVEL_ORDER.windows(2) {
            assert!(pair[0] < pair[1], "{} should rank below {}", pair[0], pair[1]);
        }
        assert!(Level::L8 < Level::Special);
        assert!(Level::Pre7 < Level::L7);
    }

    #[test]
    fn rank_matches_table_position() {
        for (i, level) in LEVEL_ORDER.iter().enumerate() {
            assert_eq!(level.rank(), i);
        }
    }

    #[test]
    fn label_round_trips() {
        for level in LEVEL_ORDER {
            assert_eq!(Level::from_label(level.label()), Some(level));
        }
    }

    #[test]
    fn unknown_label_is_none() {
        assert_eq!(Level::from_label("9급"), None);
        assert_eq!(Level::from_label(""), None);
        assert_eq!(Level::from_label("특"), None);
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(Level::L8.next(), Level::Pre7);
        assert_eq!(Level::Special.next(), Level::L8);
        assert_eq!(Level::L8.prev(), Level::Special);
        assert_eq!(Level::L7.prev(), Level::Pre7);
    }
}
