/// Celestial body data — visual radii, orbital distances and periods.
///
/// Distances and radii are exaggerated for readability (real planets would
/// be sub-pixel at true scale). Orbital periods are in Earth days, rotation
/// periods in hours; a negative rotation period marks retrograde spin.

/// Identifies one body in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl BodyId {
    pub const ALL: [BodyId; 9] = [
        BodyId::Sun,
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
    ];

    pub fn index(self) -> usize {
        match self {
            BodyId::Sun => 0,
            BodyId::Mercury => 1,
            BodyId::Venus => 2,
            BodyId::Earth => 3,
            BodyId::Mars => 4,
            BodyId::Jupiter => 5,
            BodyId::Saturn => 6,
            BodyId::Uranus => 7,
            BodyId::Neptune => 8,
        }
    }

    pub fn from_index(index: usize) -> Option<BodyId> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        DESCRIPTORS[self.index()].name
    }
}

/// Which surface material the render layer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    /// Self-luminous (the sun).
    Star,
    /// Terrestrial surface with specular highlight.
    Rocky,
    /// Banded gas surface, soft highlight.
    GasGiant,
}

/// Immutable per-body constants. Physical stats (mass, temperature, moons,
/// atmosphere) are display strings only — the simulation never reads them.
pub struct BodyDescriptor {
    pub name: &'static str,
    /// Visual radius before `PLANET_SCALE` (relative to Earth = 1).
    pub radius: f32,
    pub color: (f32, f32, f32),
    /// Semi-major axis of the orbit in world units. 0 for the sun.
    pub distance: f32,
    /// Orbital period in Earth days. 0 for the sun.
    pub orbital_period: f64,
    /// Rotation period in hours; negative = retrograde.
    pub rotation_period: f64,
    /// Orbital inclination in degrees.
    pub inclination: f32,
    pub material: MaterialKind,
    pub has_rings: bool,
    /// Tint for the translucent atmosphere shell, if the body has one.
    pub atmosphere_color: Option<(f32, f32, f32)>,
    pub mass: &'static str,
    pub temperature: &'static str,
    pub moons: &'static str,
    pub atmosphere: &'static str,
}

/// Planet radii are scaled down so Jupiter does not dominate the view.
pub const PLANET_SCALE: f32 = 0.8;

pub const BODY_COUNT: usize = 9;

pub static DESCRIPTORS: [BodyDescriptor; BODY_COUNT] = [
    BodyDescriptor {
        name: "Sun",
        radius: 10.0,
        color: (0.992, 0.722, 0.075),
        distance: 0.0,
        orbital_period: 0.0,
        rotation_period: 609.12,
        inclination: 0.0,
        material: MaterialKind::Star,
        has_rings: false,
        atmosphere_color: None,
        mass: "1.989 × 10^30 kg",
        temperature: "5,500°C (surface)",
        moons: "0",
        atmosphere: "Hydrogen, Helium",
    },
    BodyDescriptor {
        name: "Mercury",
        radius: 0.383,
        color: (0.549, 0.471, 0.325),
        distance: 30.0,
        orbital_period: 87.97,
        rotation_period: 1407.6,
        inclination: 7.005,
        material: MaterialKind::Rocky,
        has_rings: false,
        atmosphere_color: None,
        mass: "3.285 × 10^23 kg",
        temperature: "-173 to 427°C",
        moons: "0",
        atmosphere: "None",
    },
    BodyDescriptor {
        name: "Venus",
        radius: 0.949,
        color: (1.0, 0.776, 0.286),
        distance: 45.0,
        orbital_period: 224.7,
        rotation_period: -5832.5,
        inclination: 3.394,
        material: MaterialKind::Rocky,
        has_rings: false,
        atmosphere_color: Some((1.0, 1.0, 0.533)),
        mass: "4.867 × 10^24 kg",
        temperature: "462°C",
        moons: "0",
        atmosphere: "Carbon Dioxide",
    },
    BodyDescriptor {
        name: "Earth",
        radius: 1.0,
        color: (0.420, 0.576, 0.839),
        distance: 60.0,
        orbital_period: 365.25,
        rotation_period: 24.0,
        inclination: 0.0,
        material: MaterialKind::Rocky,
        has_rings: false,
        atmosphere_color: Some((0.267, 0.533, 1.0)),
        mass: "5.972 × 10^24 kg",
        temperature: "-88 to 58°C",
        moons: "1",
        atmosphere: "Nitrogen, Oxygen",
    },
    BodyDescriptor {
        name: "Mars",
        radius: 0.532,
        color: (0.804, 0.361, 0.361),
        distance: 75.0,
        orbital_period: 686.98,
        rotation_period: 24.6,
        inclination: 1.85,
        material: MaterialKind::Rocky,
        has_rings: false,
        atmosphere_color: Some((1.0, 0.4, 0.267)),
        mass: "6.39 × 10^23 kg",
        temperature: "-87 to -5°C",
        moons: "2",
        atmosphere: "Carbon Dioxide",
    },
    BodyDescriptor {
        name: "Jupiter",
        radius: 11.21,
        color: (0.847, 0.792, 0.616),
        distance: 110.0,
        orbital_period: 4332.59,
        rotation_period: 9.9,
        inclination: 1.303,
        material: MaterialKind::GasGiant,
        has_rings: false,
        atmosphere_color: Some((1.0, 0.867, 0.533)),
        mass: "1.898 × 10^27 kg",
        temperature: "-108°C",
        moons: "95",
        atmosphere: "Hydrogen, Helium",
    },
    BodyDescriptor {
        name: "Saturn",
        radius: 9.45,
        color: (0.980, 0.835, 0.647),
        distance: 140.0,
        orbital_period: 10759.22,
        rotation_period: 10.7,
        inclination: 2.485,
        material: MaterialKind::GasGiant,
        has_rings: true,
        atmosphere_color: Some((1.0, 0.933, 0.667)),
        mass: "5.683 × 10^26 kg",
        temperature: "-139°C",
        moons: "146",
        atmosphere: "Hydrogen, Helium",
    },
    BodyDescriptor {
        name: "Uranus",
        radius: 4.01,
        color: (0.310, 0.816, 0.890),
        distance: 175.0,
        orbital_period: 30685.4,
        rotation_period: 17.2,
        inclination: 0.773,
        material: MaterialKind::GasGiant,
        has_rings: false,
        atmosphere_color: Some((0.267, 0.867, 1.0)),
        mass: "8.681 × 10^25 kg",
        temperature: "-197°C",
        moons: "28",
        atmosphere: "Hydrogen, Helium, Methane",
    },
    BodyDescriptor {
        name: "Neptune",
        radius: 3.88,
        color: (0.294, 0.439, 0.867),
        distance: 210.0,
        orbital_period: 60190.0,
        rotation_period: 16.1,
        inclination: 1.77,
        material: MaterialKind::GasGiant,
        has_rings: false,
        atmosphere_color: Some((0.267, 0.533, 1.0)),
        mass: "1.024 × 10^26 kg",
        temperature: "-201°C",
        moons: "16",
        atmosphere: "Hydrogen, Helium, Methane",
    },
];

impl BodyDescriptor {
    /// Rendered sphere radius in world units.
    pub fn visual_radius(&self) -> f32 {
        match self.material {
            MaterialKind::Star => self.radius,
            _ => self.radius * PLANET_SCALE,
        }
    }
}

pub fn descriptor(id: BodyId) -> &'static BodyDescriptor {
    &DESCRIPTORS[id.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_round_trip() {
        for id in BodyId::ALL {
            assert_eq!(BodyId::from_index(id.index()), Some(id));
        }
        assert_eq!(BodyId::from_index(BODY_COUNT), None);
    }

    #[test]
    fn sun_is_the_only_star() {
        for (i, d) in DESCRIPTORS.iter().enumerate() {
            if i == 0 {
                assert_eq!(d.material, MaterialKind::Star);
                assert_eq!(d.distance, 0.0);
            } else {
                assert_ne!(d.material, MaterialKind::Star);
                assert!(d.distance > 0.0);
                assert!(d.orbital_period > 0.0);
            }
        }
    }

    #[test]
    fn venus_is_retrograde() {
        assert!(descriptor(BodyId::Venus).rotation_period < 0.0);
    }

    #[test]
    fn only_saturn_has_rings() {
        for id in BodyId::ALL {
            assert_eq!(descriptor(id).has_rings, id == BodyId::Saturn);
        }
    }

    #[test]
    fn distances_increase_outward() {
        let mut prev = -1.0;
        for d in &DESCRIPTORS {
            assert!(d.distance > prev);
            prev = d.distance;
        }
    }
}
