//! Biome identifiers, display colors, and per-biome lookup tables.

use std::ops::{Index, IndexMut};

/// The closed set of biomes a cell can be classified as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BiomeType {
    /// Below the river threshold.
    Water,
    /// Between the river and mountain thresholds.
    Forest,
    /// At or above the mountain threshold.
    Mountain,
}

impl BiomeType {
    /// Every biome, in declaration order.
    pub const ALL: [BiomeType; 3] = [BiomeType::Water, BiomeType::Forest, BiomeType::Mountain];

    /// Lowercase name used in logs and config keys.
    pub fn name(self) -> &'static str {
        match self {
            BiomeType::Water => "water",
            BiomeType::Forest => "forest",
            BiomeType::Mountain => "mountain",
        }
    }

    /// Label of the scene group placed objects of this biome are parented under.
    pub fn group_name(self) -> &'static str {
        match self {
            BiomeType::Water => "Water_Instances",
            BiomeType::Forest => "Forest_Instances",
            BiomeType::Mountain => "Mountain_Instances",
        }
    }

    /// Fixed tile color handed to the renderer.
    pub fn display_color(self) -> DisplayColor {
        match self {
            BiomeType::Water => DisplayColor::new(0.05, 0.18, 0.45, 1.0),
            BiomeType::Forest => DisplayColor::new(0.20, 0.55, 0.25, 1.0),
            BiomeType::Mountain => DisplayColor::new(0.30, 0.35, 0.35, 1.0),
        }
    }
}

impl std::fmt::Display for BiomeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// Linear RGBA color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl DisplayColor {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Quantize to 8-bit RGBA.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

/// One value per biome, indexable by [`BiomeType`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BiomeTable<T> {
    pub water: T,
    pub forest: T,
    pub mountain: T,
}

impl<T> BiomeTable<T> {
    /// Build a table by evaluating `f` for each biome.
    pub fn from_fn(mut f: impl FnMut(BiomeType) -> T) -> Self {
        Self {
            water: f(BiomeType::Water),
            forest: f(BiomeType::Forest),
            mountain: f(BiomeType::Mountain),
        }
    }

    /// `(biome, value)` pairs in [`BiomeType::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (BiomeType, &T)> {
        BiomeType::ALL.into_iter().map(move |b| (b, &self[b]))
    }
}

impl<T> Index<BiomeType> for BiomeTable<T> {
    type Output = T;

    fn index(&self, biome: BiomeType) -> &T {
        match biome {
            BiomeType::Water => &self.water,
            BiomeType::Forest => &self.forest,
            BiomeType::Mountain => &self.mountain,
        }
    }
}

impl<T> IndexMut<BiomeType> for BiomeTable<T> {
    fn index_mut(&mut self, biome: BiomeType) -> &mut T {
        match biome {
            BiomeType::Water => &mut self.water,
            BiomeType::Forest => &mut self.forest,
            BiomeType::Mountain => &mut self.mountain,
        }
    }
}
