//! Built-in patterns.
use crate::{
    error::{Error, Result},
    grid::CellGrid,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub desc: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub pattern: &'static str,
}

impl Preset {
    /// The preset on a grid of its own dimensions.
    pub fn grid(&self) -> Result<CellGrid> {
        CellGrid::from_pattern(self.rows, self.cols, self.pattern)
    }
}

const PRESETS: &[Preset] = &[
    Preset {
        name: "block",
        desc: "A 2x2 still life.",
        rows: 4,
        cols: 4,
        pattern: "____\n_XX_\n_XX_",
    },
    Preset {
        name: "blinker",
        desc: "A period 2 oscillator: a line of three cells that flips between horizontal and vertical.",
        rows: 5,
        cols: 5,
        pattern: "_____\n_____\n_XXX_",
    },
    Preset {
        name: "glider",
        desc: "The smallest spaceship. Moves one cell diagonally every four generations.",
        rows: 10,
        cols: 10,
        pattern: "_X\n__X\nXXX",
    },
    Preset {
        name: "gosper",
        desc: "Gosper's glider gun, emitting a glider every 30 generations, with a block in the far \
               corner.",
        rows: 50,
        cols: 70,
        pattern: GOSPER,
    },
];

const GOSPER: &str = "\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
______________________________X\n\
____________________________X_X\n\
__________________XX______XX____________XX\n\
_________________X___X____XX____________XX\n\
______XX________X_____X___XX\n\
______XX________X___X_XX____X_X\n\
________________X_____X_______X\n\
_________________X___X\n\
__________________XX\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
_\n\
________________________________________________________________XX\n\
________________________________________________________________XX";

/// All built-in presets.
pub fn all() -> &'static [Preset] {
    PRESETS
}

/// Look up a preset by name.
pub fn find(name: &str) -> Result<&'static Preset> {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| Error::UnknownPreset(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_presets_fit() -> Result<()> {
        for preset in all() {
            let grid = preset.grid()?;
            assert_eq!(grid.dimensions(), (preset.rows, preset.cols), "{}", preset.name);
            assert!(!grid.is_dead(), "{}", preset.name);
        }
        Ok(())
    }

    #[test]
    fn test_find() -> Result<()> {
        assert_eq!(find("glider")?.name, "glider");
        assert_eq!(
            find("nope"),
            Err(Error::UnknownPreset("nope".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_gosper() -> Result<()> {
        let grid = find("gosper")?.grid()?;
        // 36 cells of gun and a 4 cell block.
        assert_eq!(grid.population(), 40);
        assert!(grid.get(30, 6));
        assert!(grid.get(64, 47) && grid.get(65, 48));
        Ok(())
    }

    #[test]
    fn test_block_and_blinker() -> Result<()> {
        let block = find("block")?.grid()?;
        assert_eq!(block.step(), block);

        let blinker = find("blinker")?.grid()?;
        assert_ne!(blinker.step(), blinker);
        assert_eq!(blinker.step().step(), blinker);
        Ok(())
    }
}
