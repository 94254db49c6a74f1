/// Physical constants shared by the three dilation engines.
///
/// Carried as an explicit value instead of module globals so the engines can
/// be exercised with alternative constants in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Speed of light (m/s)
    pub c: f64,
    /// Gravitational constant (m^3 kg^-1 s^-2)
    pub g: f64,
    /// Mass of the Sun (kg)
    pub m_sun: f64,
    /// Mass of the Earth (kg)
    pub m_earth: f64,
    /// Proper lifetime of a muon at rest (s)
    pub muon_lifetime: f64,
}

impl PhysicalConstants {
    /// SI values.
    pub const SI: PhysicalConstants = PhysicalConstants {
        c: 299_792_458.0,
        g: 6.67430e-11,
        m_sun: 1.989e30,
        m_earth: 5.972e24,
        muon_lifetime: 2.2e-6,
    };
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::SI
    }
}
