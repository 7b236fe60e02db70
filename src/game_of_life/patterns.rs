//! Catalogue of named seed patterns
//!
//! Every pattern is a list of `(row, col)` offsets from the top-left corner of
//! its bounding box. Stamping only marks cells alive, so callers that want a
//! clean slate clear the engine first.

use super::{Grid, Life};
use crate::error::LifeError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    Spaceship,
    Methuselah,
    RuleExample,
    StillLife,
    Oscillator,
    Gun,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PatternKind::Spaceship => "spaceship",
            PatternKind::Methuselah => "methuselah",
            PatternKind::RuleExample => "rule example",
            PatternKind::StillLife => "still life",
            PatternKind::Oscillator => "oscillator",
            PatternKind::Gun => "gun",
        };
        f.write_str(label)
    }
}

/// A named, immutable set of live cell offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub kind: PatternKind,
    pub description: &'static str,
    /// Generations until the shape repeats (possibly displaced), if it does
    pub period: Option<usize>,
    pub cells: &'static [(usize, usize)],
}

pub const GLIDER: Pattern = Pattern {
    name: "glider",
    kind: PatternKind::Spaceship,
    description: "Moves one cell diagonally down-right every 4 generations",
    period: Some(4),
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "r-pentomino",
    kind: PatternKind::Methuselah,
    description: "Five cells that churn for over a thousand generations",
    period: None,
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

pub const UNDERPOPULATION: Pattern = Pattern {
    name: "underpopulation",
    kind: PatternKind::RuleExample,
    description: "Four isolated cells, each dies with no neighbours",
    period: None,
    cells: &[(0, 0), (0, 2), (2, 0), (2, 2)],
};

pub const SURVIVAL: Pattern = Pattern {
    name: "survival",
    kind: PatternKind::RuleExample,
    description: "Every cell has three neighbours and lives on",
    period: Some(1),
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const OVERPOPULATION: Pattern = Pattern {
    name: "overpopulation",
    kind: PatternKind::RuleExample,
    description: "The centre cell has four neighbours and dies",
    period: None,
    cells: &[(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)],
};

pub const REPRODUCTION: Pattern = Pattern {
    name: "reproduction",
    kind: PatternKind::RuleExample,
    description: "Three dead cells with three neighbours each come alive",
    period: None,
    cells: &[(0, 0), (0, 1), (0, 2), (1, 1)],
};

pub const BLOCK: Pattern = Pattern {
    name: "block",
    kind: PatternKind::StillLife,
    description: "2x2 square",
    period: Some(1),
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const BEEHIVE: Pattern = Pattern {
    name: "beehive",
    kind: PatternKind::StillLife,
    description: "Six-cell hexagon",
    period: Some(1),
    cells: &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)],
};

pub const LOAF: Pattern = Pattern {
    name: "loaf",
    kind: PatternKind::StillLife,
    description: "Seven-cell still life",
    period: Some(1),
    cells: &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 3), (3, 2)],
};

pub const BOAT: Pattern = Pattern {
    name: "boat",
    kind: PatternKind::StillLife,
    description: "Five-cell still life",
    period: Some(1),
    cells: &[(0, 0), (0, 1), (1, 0), (1, 2), (2, 1)],
};

pub const TUB: Pattern = Pattern {
    name: "tub",
    kind: PatternKind::StillLife,
    description: "Four cells around an empty centre",
    period: Some(1),
    cells: &[(0, 1), (1, 0), (1, 2), (2, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    kind: PatternKind::Oscillator,
    description: "Line of three, period 2",
    period: Some(2),
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "toad",
    kind: PatternKind::Oscillator,
    description: "Two offset lines of three, period 2",
    period: Some(2),
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "beacon",
    kind: PatternKind::Oscillator,
    description: "Two diagonal blocks, period 2",
    period: Some(2),
    cells: &[(0, 0), (0, 1), (1, 0), (2, 3), (3, 2), (3, 3)],
};

pub const PENTA_DECATHLON: Pattern = Pattern {
    name: "penta-decathlon",
    kind: PatternKind::Oscillator,
    description: "Period 15 oscillator",
    period: Some(15),
    cells: &[
        (0, 2), (0, 7),
        (1, 0), (1, 1), (1, 3), (1, 4), (1, 5), (1, 6), (1, 8), (1, 9),
        (2, 2), (2, 7),
    ],
};

pub const COPPERHEAD: Pattern = Pattern {
    name: "copperhead",
    kind: PatternKind::Spaceship,
    description: "c/10 orthogonal spaceship, moves one row up every 10 generations",
    period: Some(10),
    cells: &[
        (0, 1), (0, 2), (0, 5), (0, 6),
        (1, 3), (1, 4),
        (2, 3), (2, 4),
        (3, 0), (3, 2), (3, 5), (3, 7),
        (4, 0), (4, 7),
        (6, 0), (6, 7),
        (7, 1), (7, 2), (7, 5), (7, 6),
        (8, 2), (8, 3), (8, 4), (8, 5),
        (10, 3), (10, 4),
        (11, 3), (11, 4),
    ],
};

pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "gosper-glider-gun",
    kind: PatternKind::Gun,
    description: "Emits a glider every 30 generations",
    period: Some(30),
    cells: &[
        (0, 24),
        (1, 22), (1, 24),
        (2, 12), (2, 13), (2, 20), (2, 21), (2, 34), (2, 35),
        (3, 11), (3, 15), (3, 20), (3, 21), (3, 34), (3, 35),
        (4, 0), (4, 1), (4, 10), (4, 16), (4, 20), (4, 21),
        (5, 0), (5, 1), (5, 10), (5, 14), (5, 16), (5, 17), (5, 22), (5, 24),
        (6, 10), (6, 16), (6, 24),
        (7, 11), (7, 15),
        (8, 12), (8, 13),
    ],
};

/// Every pattern in the catalogue
pub static CATALOGUE: [Pattern; 17] = [
    GLIDER,
    R_PENTOMINO,
    UNDERPOPULATION,
    SURVIVAL,
    OVERPOPULATION,
    REPRODUCTION,
    BLOCK,
    BEEHIVE,
    LOAF,
    BOAT,
    TUB,
    BLINKER,
    TOAD,
    BEACON,
    PENTA_DECATHLON,
    COPPERHEAD,
    GOSPER_GLIDER_GUN,
];

pub static STILL_LIFES: [Pattern; 5] = [BLOCK, BEEHIVE, LOAF, BOAT, TUB];

pub static OSCILLATORS: [Pattern; 4] = [BLINKER, TOAD, BEACON, PENTA_DECATHLON];

fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

impl Pattern {
    /// Find a pattern by name, ignoring case and treating `_` and `-` alike
    pub fn by_name(name: &str) -> Result<&'static Pattern, LifeError> {
        let wanted = normalize_name(name);
        CATALOGUE
            .iter()
            .find(|pattern| pattern.name == wanted)
            .ok_or_else(|| LifeError::UnknownPattern(name.to_string()))
    }

    /// All patterns of one kind, in catalogue order
    pub fn of_kind(kind: PatternKind) -> impl Iterator<Item = &'static Pattern> {
        CATALOGUE.iter().filter(move |pattern| pattern.kind == kind)
    }

    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0)
    }

    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0)
    }

    pub fn living_count(&self) -> usize {
        self.cells.len()
    }

    /// Stamp this pattern onto the engine, see [`Life::stamp`]
    pub fn stamp_onto(&self, life: &mut Life, anchor_row: usize, anchor_col: usize) -> Result<(), LifeError> {
        life.stamp(self, anchor_row, anchor_col)
    }

    /// Render the pattern alone on a grid with `margin` dead cells on each side
    pub fn to_grid(&self, margin: usize) -> Result<Grid, LifeError> {
        let mut grid = Grid::new(self.height() + 2 * margin, self.width() + 2 * margin)?;
        for &(row, col) in self.cells {
            grid.set(row + margin, col + margin, true)?;
        }
        Ok(grid)
    }
}

/// Anchors that lay `patterns` out side by side in equal column slots
///
/// Each pattern is centred horizontally in its slot and vertically in the grid.
pub fn layout_row(patterns: &[Pattern], rows: usize, cols: usize) -> Result<Vec<(usize, usize)>, LifeError> {
    if patterns.is_empty() {
        return Ok(Vec::new());
    }

    let slot_cols = cols / patterns.len();
    patterns
        .iter()
        .enumerate()
        .map(|(slot, pattern)| {
            let (height, width) = (pattern.height(), pattern.width());
            if height > rows || width > slot_cols {
                return Err(LifeError::DoesNotFit {
                    pattern: pattern.name,
                    height,
                    width,
                    slot_rows: rows,
                    slot_cols,
                });
            }
            Ok(((rows - height) / 2, slot * slot_cols + (slot_cols - width) / 2))
        })
        .collect()
}

/// Stamp `patterns` side by side across the engine's width
pub fn stamp_row(life: &mut Life, patterns: &[Pattern]) -> Result<(), LifeError> {
    let anchors = layout_row(patterns, life.rows(), life.cols())?;
    for (pattern, (row, col)) in patterns.iter().zip(anchors) {
        life.stamp(pattern, row, col)?;
    }
    Ok(())
}

/// Named groups that are shown together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternSet {
    StillLifes,
    Oscillators,
}

impl PatternSet {
    pub fn members(self) -> &'static [Pattern] {
        match self {
            PatternSet::StillLifes => &STILL_LIFES,
            PatternSet::Oscillators => &OSCILLATORS,
        }
    }

    pub fn stamp_onto(self, life: &mut Life) -> Result<(), LifeError> {
        stamp_row(life, self.members())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    type CellSet = BTreeSet<(isize, isize)>;

    fn cells_of(life: &Life) -> CellSet {
        life.state()
            .living_cells()
            .into_iter()
            .map(|(r, c)| (r as isize, c as isize))
            .collect()
    }

    fn shifted(cells: &CellSet, dr: isize, dc: isize) -> CellSet {
        cells.iter().map(|&(r, c)| (r + dr, c + dc)).collect()
    }

    fn isolated(pattern: &Pattern, margin: usize) -> Life {
        Life::from_grid(pattern.to_grid(margin).unwrap())
    }

    #[test]
    fn test_catalogue_sizes() {
        let expected = [
            ("glider", 5),
            ("r-pentomino", 5),
            ("underpopulation", 4),
            ("survival", 4),
            ("overpopulation", 5),
            ("reproduction", 4),
            ("block", 4),
            ("beehive", 6),
            ("loaf", 7),
            ("boat", 5),
            ("tub", 4),
            ("blinker", 3),
            ("toad", 6),
            ("beacon", 6),
            ("penta-decathlon", 12),
            ("copperhead", 28),
            ("gosper-glider-gun", 36),
        ];
        for (name, count) in expected {
            assert_eq!(Pattern::by_name(name).unwrap().living_count(), count, "{name}");
        }
        assert_eq!(CATALOGUE.len(), expected.len());
    }

    #[test]
    fn test_offsets_are_unique() {
        for pattern in &CATALOGUE {
            let unique: BTreeSet<_> = pattern.cells.iter().collect();
            assert_eq!(unique.len(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn test_lookup_normalizes_names() {
        assert_eq!(Pattern::by_name("Gosper_Glider_Gun").unwrap().name, "gosper-glider-gun");
        assert_eq!(Pattern::by_name(" R-Pentomino ").unwrap(), &R_PENTOMINO);
        assert_eq!(
            Pattern::by_name("lwss"),
            Err(LifeError::UnknownPattern("lwss".to_string()))
        );
    }

    #[test]
    fn test_bounding_boxes() {
        assert_eq!((GLIDER.height(), GLIDER.width()), (3, 3));
        assert_eq!((PENTA_DECATHLON.height(), PENTA_DECATHLON.width()), (3, 10));
        assert_eq!((COPPERHEAD.height(), COPPERHEAD.width()), (12, 8));
        assert_eq!((GOSPER_GLIDER_GUN.height(), GOSPER_GLIDER_GUN.width()), (9, 36));
    }

    #[test]
    fn test_still_lifes_are_fixed_points() {
        for pattern in Pattern::of_kind(PatternKind::StillLife) {
            let mut life = isolated(pattern, 3);
            let before = life.state().clone();
            life.advance();
            assert_eq!(life.state(), &before, "{} changed", pattern.name);
        }
    }

    #[test]
    fn test_oscillators_return_after_period() {
        for pattern in Pattern::of_kind(PatternKind::Oscillator) {
            let period = pattern.period.unwrap();
            let mut life = isolated(pattern, 5);
            let start = life.state().clone();
            for generation in 1..period {
                life.advance();
                assert_ne!(life.state(), &start, "{} repeated at {generation}", pattern.name);
            }
            life.advance();
            assert_eq!(life.state(), &start, "{} did not return after {period}", pattern.name);
        }
    }

    #[test]
    fn test_glider_moves_diagonally() {
        let mut life = Life::new(20, 20).unwrap();
        GLIDER.stamp_onto(&mut life, 5, 5).unwrap();
        let start = cells_of(&life);
        life.advance_by(4);
        assert_eq!(cells_of(&life), shifted(&start, 1, 1));
    }

    #[test]
    fn test_copperhead_moves_up() {
        let mut life = Life::new(40, 20).unwrap();
        COPPERHEAD.stamp_onto(&mut life, 12, 5).unwrap();
        let start = cells_of(&life);
        life.advance_by(10);
        assert_eq!(cells_of(&life), shifted(&start, -1, 0));
    }

    #[test]
    fn test_glider_gun_emits_one_glider_per_period() {
        let mut life = Life::new(40, 60).unwrap();
        GOSPER_GLIDER_GUN.stamp_onto(&mut life, 2, 2).unwrap();
        let gun = cells_of(&life);
        life.advance_by(30);
        let after = cells_of(&life);
        assert!(gun.is_subset(&after));
        assert_eq!(after.len(), gun.len() + GLIDER.living_count());
    }

    #[test]
    fn test_r_pentomino_keeps_changing() {
        let mut life = Life::new(64, 64).unwrap();
        R_PENTOMINO.stamp_onto(&mut life, 30, 30).unwrap();
        let mut seen = vec![life.state().clone()];
        for _ in 0..50 {
            seen.push(life.advance().clone());
        }
        let last = seen.pop().unwrap();
        assert!(!seen.contains(&last));
        assert!(last.living_count() > R_PENTOMINO.living_count());
    }

    #[test]
    fn test_rule_examples_fire_only_their_rule() {
        for pattern in Pattern::of_kind(PatternKind::RuleExample) {
            let life = isolated(pattern, 2);
            let census = life.census();
            let fired = [
                ("underpopulation", census.underpopulation),
                ("overpopulation", census.overpopulation),
                ("reproduction", census.reproduction),
            ];
            for (rule, count) in fired {
                if rule == pattern.name {
                    assert!(count > 0, "{rule} did not fire");
                } else {
                    assert_eq!(count, 0, "{rule} fired for {}", pattern.name);
                }
            }
            if pattern.name == "survival" {
                assert_eq!(census.survival, pattern.living_count());
            }
        }
    }

    #[test]
    fn test_still_life_row_is_fixed() {
        let mut life = Life::new(10, 40).unwrap();
        PatternSet::StillLifes.stamp_onto(&mut life).unwrap();
        let expected: usize = STILL_LIFES.iter().map(Pattern::living_count).sum();
        assert_eq!(life.state().living_count(), expected);

        let before = life.state().clone();
        life.advance();
        assert_eq!(life.state(), &before);
    }

    #[test]
    fn test_layout_centres_patterns() {
        let anchors = layout_row(&STILL_LIFES, 10, 40).unwrap();
        // 8-column slots; block is 2x2, loaf 4x4
        assert_eq!(anchors[0], (4, 3));
        assert_eq!(anchors[2], (3, 18));
    }

    #[test]
    fn test_oscillator_row_repeats() {
        let mut life = Life::new(20, 80).unwrap();
        PatternSet::Oscillators.stamp_onto(&mut life).unwrap();
        let start = life.state().clone();
        life.advance_by(2);
        assert_ne!(life.state(), &start);
        life.advance_by(28);
        assert_eq!(life.state(), &start);
    }

    #[test]
    fn test_layout_rejects_narrow_slots() {
        let mut life = Life::new(10, 12).unwrap();
        let err = PatternSet::StillLifes.stamp_onto(&mut life).unwrap_err();
        assert!(matches!(err, LifeError::DoesNotFit { pattern: "beehive", slot_cols: 2, .. }));
        assert!(layout_row(&[], 1, 1).unwrap().is_empty());
    }
}
