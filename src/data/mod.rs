/// Data layer: body file parsing and series types.
///
/// Architecture:
/// ```text
///   Mercury.txt … Brown Dwarf.txt
///        │
///        ▼
///   ┌──────────┐
///   │  reader   │  header + `name,temp,step,distance` lines → PlanetRecord
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ PlanetSeries  │  temperature / distance / steps columns
///   └──────────────┘
/// ```

pub mod model;
pub mod reader;
