//! In-memory Pokémon record, flattened from the PokeAPI response.

/// One Pokémon as used by the game. Built once by the fetcher and never
/// mutated afterwards; each selection step owns its own record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Type names in API order, e.g. `["grass", "poison"]`.
    pub types: Vec<String>,
    /// Ability names in API order; the first one is shown in summaries.
    pub abilities: Vec<String>,
    /// Height in decimetres (displayed divided by 10).
    pub height: u32,
    /// Weight in hectograms (displayed divided by 10).
    pub weight: u32,
    pub stats: Vec<Stat>,
}

/// A named base stat, e.g. `("attack", 49)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stat {
    pub name: String,
    pub base: u32,
}
