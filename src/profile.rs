//! Plant Profiles and the Profile Registry
//!
//! A profile names one plant species and carries its acceptable
//! environmental ranges. Profiles are defined at startup and never
//! mutated; the registry is a plain slice scanned linearly, which is the
//! right tool at this size (two built-ins, maybe a handful in a custom
//! deployment).
//!
//! Lookup returns `Option` rather than a bare reference. The reference
//! firmware dereferenced a possibly-null profile pointer when the
//! configured name was missing; consumers of this registry must handle
//! absence explicitly ([`crate::MonitorError::ProfileNotFound`]).

/// Acceptable environmental ranges for one plant species
///
/// All bounds are inclusive. Only the moisture bounds participate in the
/// actuation decision; light and temperature bounds exist for diagnostic
/// narration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlantProfile {
    /// Unique species name, matched case-sensitively
    pub name: &'static str,
    /// Minimum acceptable soil moisture, percent
    pub min_moisture: f32,
    /// Maximum acceptable soil moisture, percent
    pub max_moisture: f32,
    /// Minimum acceptable light level, lux
    pub min_light: f32,
    /// Maximum acceptable light level, lux
    pub max_light: f32,
    /// Minimum acceptable temperature, °C
    pub min_temp: f32,
    /// Maximum acceptable temperature, °C
    pub max_temp: f32,
}

impl PlantProfile {
    /// Whether a light reading sits inside the acceptable range
    pub fn light_in_range(&self, lux: f32) -> bool {
        lux >= self.min_light && lux <= self.max_light
    }

    /// Whether a temperature reading sits inside the acceptable range
    pub fn temperature_in_range(&self, celsius: f32) -> bool {
        celsius >= self.min_temp && celsius <= self.max_temp
    }
}

/// Built-in profiles shipped with the reference deployment
pub const BUILTIN_PROFILES: &[PlantProfile] = &[
    PlantProfile {
        name: "Fern",
        min_moisture: 40.0,
        max_moisture: 60.0,
        min_light: 100.0,
        max_light: 500.0,
        min_temp: 18.0,
        max_temp: 24.0,
    },
    PlantProfile {
        name: "Cactus",
        min_moisture: 5.0,
        max_moisture: 20.0,
        min_light: 1000.0,
        max_light: 5000.0,
        min_temp: 15.0,
        max_temp: 35.0,
    },
];

/// Name → profile lookup over a static table
#[derive(Debug, Clone, Copy)]
pub struct ProfileRegistry {
    profiles: &'static [PlantProfile],
}

impl ProfileRegistry {
    /// Registry over the built-in profile table
    pub const fn builtin() -> Self {
        Self {
            profiles: BUILTIN_PROFILES,
        }
    }

    /// Registry over a caller-supplied table
    pub const fn with_profiles(profiles: &'static [PlantProfile]) -> Self {
        Self { profiles }
    }

    /// Find a profile by exact, case-sensitive name
    ///
    /// Linear scan; first match wins.
    pub fn lookup(&self, name: &str) -> Option<&PlantProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Number of registered profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookup() {
        let registry = ProfileRegistry::builtin();

        let fern = registry.lookup("Fern").unwrap();
        assert_eq!(fern.min_moisture, 40.0);
        assert_eq!(fern.max_moisture, 60.0);

        let cactus = registry.lookup("Cactus").unwrap();
        assert_eq!(cactus.max_light, 5000.0);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = ProfileRegistry::builtin();
        assert!(registry.lookup("fern").is_none());
        assert!(registry.lookup("FERN").is_none());
    }

    #[test]
    fn unknown_name_is_none() {
        let registry = ProfileRegistry::builtin();
        assert!(registry.lookup("Orchid").is_none());
    }

    #[test]
    fn custom_table() {
        static PROFILES: &[PlantProfile] = &[PlantProfile {
            name: "Basil",
            min_moisture: 50.0,
            max_moisture: 70.0,
            min_light: 200.0,
            max_light: 800.0,
            min_temp: 15.0,
            max_temp: 30.0,
        }];

        let registry = ProfileRegistry::with_profiles(PROFILES);
        assert_eq!(registry.len(), 1);
        assert!(registry.lookup("Basil").is_some());
        assert!(registry.lookup("Fern").is_none());
    }

    #[test]
    fn environment_ranges() {
        let fern = ProfileRegistry::builtin().lookup("Fern").copied().unwrap();
        assert!(fern.light_in_range(300.0));
        assert!(!fern.light_in_range(50.0));
        assert!(fern.temperature_in_range(20.0));
        assert!(!fern.temperature_in_range(30.0));
    }
}
