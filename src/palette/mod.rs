use std::collections::BTreeMap;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{ScribbleError, ScribbleResult};
use crate::rng::RandomSource;

/// Fixed fallback palette returned for unknown names, independent of any
/// registration (including shadowing of the `BWR` built-in).
static DEFAULT_PALETTE: [Rgba8; 3] = [Rgba8::BLACK, Rgba8::WHITE, Rgba8::RED];

struct PaletteEntry {
    name: String,
    colors: Vec<Rgba8>,
}

/// Named, ordered palettes of selectable colors.
///
/// The registry starts with three built-ins (`BWR`, `BWR2`, `RGB`). Built-ins
/// can be shadowed by re-registration but never removed. Every registered
/// palette is non-empty by construction; lookups for unknown names fall back
/// to a fixed default instead of failing.
pub struct PaletteRegistry {
    entries: Vec<PaletteEntry>,
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteRegistry {
    /// Create a registry pre-populated with the built-in palettes.
    pub fn new() -> Self {
        let mut registry = Self {
            entries: Vec::new(),
        };
        registry.insert("BWR", vec![Rgba8::BLACK, Rgba8::WHITE, Rgba8::RED]);
        registry.insert("BWR2", vec![Rgba8::BLUE, Rgba8::WHITE, Rgba8::RED]);
        registry.insert("RGB", vec![Rgba8::RED, Rgba8::GREEN, Rgba8::BLUE]);
        registry
    }

    fn insert(&mut self, name: &str, colors: Vec<Rgba8>) {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.colors = colors,
            None => self.entries.push(PaletteEntry {
                name: name.to_owned(),
                colors,
            }),
        }
    }

    /// Register (or shadow) a palette under `name`, storing a copy of
    /// `colors`.
    ///
    /// Empty palettes are rejected: an empty registration would break the
    /// non-empty invariant [`random`](Self::random) relies on.
    pub fn register(&mut self, name: impl Into<String>, colors: &[Rgba8]) -> ScribbleResult<()> {
        let name = name.into();
        if colors.is_empty() {
            return Err(ScribbleError::validation(format!(
                "palette \"{name}\" must contain at least one color"
            )));
        }
        self.insert(&name, colors.to_vec());
        Ok(())
    }

    /// Look up a palette, falling back to the fixed default for unknown
    /// names.
    pub fn get(&self, name: &str) -> &[Rgba8] {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map_or(DEFAULT_PALETTE.as_slice(), |e| e.colors.as_slice())
    }

    /// Pick one uniformly random member of `get(name)`.
    pub fn random(&self, name: &str, rng: &mut dyn RandomSource) -> Rgba8 {
        let colors = self.get(name);
        colors[rng.next_int(0, colors.len() as u32) as usize]
    }

    /// Registered palette identifiers in registration order (built-ins
    /// first), for host UI enumeration.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Merge palettes from a JSON document of the shape
    /// `{"NAME": ["#rrggbb", "red", ...], ...}`.
    ///
    /// This is the wire shape hosts use to persist user palettes. Entries are
    /// validated like [`register`](Self::register); the first invalid entry
    /// aborts the load without rolling back earlier entries.
    pub fn load_json(&mut self, json: &str) -> ScribbleResult<()> {
        let doc: BTreeMap<String, Vec<Rgba8>> = serde_json::from_str(json)
            .map_err(|e| ScribbleError::validation(format!("invalid palette document: {e}")))?;
        for (name, colors) in doc {
            self.register(name, &colors)?;
        }
        Ok(())
    }

    /// Serialize every registered palette (built-ins included) to the JSON
    /// document shape accepted by [`load_json`](Self::load_json).
    pub fn to_json(&self) -> ScribbleResult<String> {
        let doc: BTreeMap<&str, &[Rgba8]> = self
            .entries
            .iter()
            .map(|e| (e.name.as_str(), e.colors.as_slice()))
            .collect();
        serde_json::to_string_pretty(&doc)
            .map_err(|e| ScribbleError::validation(format!("palette serialization failed: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/registry.rs"]
mod tests;
