//! Material catalogue and the per-material property table
//!
//! Materials are immutable constants. Everything the engine needs to know about
//! how a material moves lives in `MaterialProps`; the move routine never branches
//! on a concrete material, only on the table.

use serde::{Deserialize, Serialize};

/// Occupant tag of a grid cell
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    #[default]
    Empty = 0,
    Sand = 1,
    Water = 2,
    Stone = 3,
    Gold = 4,
    Antigrav = 5,
    Bees = 6,
    Styrofoam = 7,
}

pub const MATERIAL_COUNT: usize = 8;

impl Material {
    pub const ALL: [Material; MATERIAL_COUNT] = [
        Material::Empty,
        Material::Sand,
        Material::Water,
        Material::Stone,
        Material::Gold,
        Material::Antigrav,
        Material::Bees,
        Material::Styrofoam,
    ];

    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    #[inline]
    pub fn is_particle(self) -> bool {
        self != Material::Empty
    }

    pub fn name(self) -> &'static str {
        match self {
            Material::Empty => "Empty",
            Material::Sand => "Sand",
            Material::Water => "Water",
            Material::Stone => "Stone",
            Material::Gold => "Gold",
            Material::Antigrav => "Antigrav",
            Material::Bees => "Bees",
            Material::Styrofoam => "Styrofoam",
        }
    }

    /// ABGR packed display colour (empty cells get the background colour)
    pub fn color(self) -> u32 {
        match self {
            Material::Empty => 0xFF1E1414,
            Material::Sand => 0xFF80B2C2,
            Material::Water => 0xFFC86432,
            Material::Stone => 0xFF505050,
            Material::Gold => 0xFF32C8FF,
            Material::Antigrav => 0xFFFFF0F0,
            Material::Bees => 0xFF28BEE6,
            Material::Styrofoam => 0xFFEBF5F5,
        }
    }
}

/// How a material responds to the gravity pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mobility {
    /// Vacant cell, never processed
    Vacant,
    /// Never moves, never displaced
    Static,
    /// Falls, slides, sinks through liquid
    Granular,
    /// Falls, slides, levels out sideways
    Liquid,
    /// Rises against gravity, only through empty space
    GasLike,
    /// Lighter than liquid, rests on top of it
    Floater,
    /// Random walk outside the gravity pass
    Swarm,
}

/// Frames on which a material takes its gravity turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    EveryFrame,
    OddFrames,
}

impl Cadence {
    #[inline]
    pub fn is_active(self, frame: u64) -> bool {
        match self {
            Cadence::EveryFrame => true,
            Cadence::OddFrames => frame & 1 == 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProps {
    pub mobility: Mobility,
    /// Move attempts per frame
    pub steps: u8,
    /// Chance of swapping with a lighter occupant it may sink through
    pub sink_chance: f32,
    /// Moves against the ambient gravity direction
    pub inverted: bool,
    pub cadence: Cadence,
}

impl MaterialProps {
    const fn fixed(mobility: Mobility) -> Self {
        Self {
            mobility,
            steps: 0,
            sink_chance: 0.0,
            inverted: false,
            cadence: Cadence::EveryFrame,
        }
    }

    const fn mobile(mobility: Mobility, steps: u8, sink_chance: f32) -> Self {
        Self {
            mobility,
            steps,
            sink_chance,
            inverted: false,
            cadence: Cadence::EveryFrame,
        }
    }

    /// Whether the gravity pass ever looks at this material
    #[inline]
    pub fn falls(&self) -> bool {
        !matches!(
            self.mobility,
            Mobility::Vacant | Mobility::Static | Mobility::Swarm
        )
    }
}

/// Outcome of a mover trying to enter an occupied (or empty) cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    /// Target is empty: relocate unconditionally
    Move,
    /// Trade places with the occupant with the given probability
    Swap(f32),
    /// Like `Swap`, but only when the occupant is part of a floating run
    SwapIfFloating(f32),
    Blocked,
}

/// Per-material property lookup, indexed by material id
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialTable {
    props: [MaterialProps; MATERIAL_COUNT],
}

impl Default for MaterialTable {
    fn default() -> Self {
        let antigrav = MaterialProps {
            inverted: true,
            ..MaterialProps::mobile(Mobility::GasLike, 2, 0.0)
        };
        let styrofoam = MaterialProps {
            cadence: Cadence::OddFrames,
            ..MaterialProps::mobile(Mobility::Floater, 1, 0.0)
        };

        Self {
            props: [
                MaterialProps::fixed(Mobility::Vacant),
                MaterialProps::mobile(Mobility::Granular, 1, 0.3),
                MaterialProps::mobile(Mobility::Liquid, 1, 0.3),
                MaterialProps::fixed(Mobility::Static),
                MaterialProps::mobile(Mobility::Granular, 2, 0.5),
                antigrav,
                MaterialProps::fixed(Mobility::Swarm),
                styrofoam,
            ],
        }
    }
}

impl MaterialTable {
    #[inline]
    pub fn props(&self, material: Material) -> &MaterialProps {
        &self.props[material as usize]
    }

    #[inline]
    pub fn props_mut(&mut self, material: Material) -> &mut MaterialProps {
        &mut self.props[material as usize]
    }

    #[inline]
    pub fn mobility(&self, material: Material) -> Mobility {
        self.props(material).mobility
    }

    /// Displacement rule for `mover` entering a cell holding `target`.
    ///
    /// Gas-like materials are impassable in both directions: they only ever
    /// enter empty cells and nothing enters them.
    pub fn interaction(&self, mover: Material, target: Material) -> Interaction {
        if target == Material::Empty {
            return Interaction::Move;
        }

        let m = self.props(mover);
        let t = self.props(target);

        match (m.mobility, t.mobility) {
            (Mobility::GasLike, _) | (_, Mobility::GasLike) => Interaction::Blocked,
            (Mobility::Granular, Mobility::Liquid) => Interaction::Swap(m.sink_chance),
            (Mobility::Liquid, Mobility::Floater) => Interaction::Swap(m.sink_chance),
            (Mobility::Granular, Mobility::Floater) => Interaction::SwapIfFloating(m.sink_chance),
            _ => Interaction::Blocked,
        }
    }
}
