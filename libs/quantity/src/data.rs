//! The static quantity table.
//!
//! Aliases and symbols follow common physics notation; unit lists are the
//! conventional units a result is usefully reported in, not an exhaustive
//! catalogue.

use crate::registry::QuantityDef;
use mensura_dimension::DimensionVector;

macro_rules! quantity {
    ($name:literal, $dim:expr, units: [$($unit:literal),* $(,)?], aliases: [$($alias:literal),* $(,)?], symbols: [$($symbol:literal),* $(,)?]) => {
        QuantityDef {
            name: $name,
            dimension: $dim,
            units: &[$($unit),*],
            aliases: &[$($alias),*],
            symbols: &[$($symbol),*],
        }
    };
}

pub(crate) static QUANTITIES: &[QuantityDef] = &[
    // Base quantities
    quantity!("length", DimensionVector::LENGTH,
        units: ["m", "km", "cm", "mm", "μm", "nm", "inch", "ft", "mile"],
        aliases: ["l", "displacement", "position", "meter", "metre"],
        symbols: ["l", "s", "x", "y", "z", "d", "r"]),
    quantity!("distance", DimensionVector::LENGTH,
        units: ["m", "km", "cm", "mm", "μm", "nm", "inch", "ft", "mile"],
        aliases: ["d", "separation", "range"],
        symbols: ["d", "s", "r"]),
    quantity!("height", DimensionVector::LENGTH,
        units: ["m", "km", "cm", "mm", "ft", "inch"],
        aliases: ["h", "altitude", "elevation"],
        symbols: ["h", "z"]),
    quantity!("width", DimensionVector::LENGTH,
        units: ["m", "km", "cm", "mm", "ft", "inch"],
        aliases: ["w", "breadth"],
        symbols: ["w", "b"]),
    quantity!("radius", DimensionVector::LENGTH,
        units: ["m", "km", "cm", "mm", "μm", "nm"],
        aliases: ["r", "radial distance"],
        symbols: ["r", "R"]),
    quantity!("diameter", DimensionVector::LENGTH,
        units: ["m", "km", "cm", "mm", "μm", "nm"],
        aliases: ["d", "width", "bore"],
        symbols: ["d", "D"]),
    quantity!("wavelength", DimensionVector::LENGTH,
        units: ["m", "nm", "μm", "Å"],
        aliases: ["lambda", "λ", "wave length"],
        symbols: ["λ", "lambda"]),
    quantity!("mass", DimensionVector::MASS,
        units: ["kg", "g", "mg", "μg", "ton", "lb", "oz"],
        aliases: ["m", "inertia", "kilogram", "kg"],
        symbols: ["m", "M"]),
    quantity!("weight", DimensionVector::FORCE,
        units: ["N", "kN", "dyn", "lbf"],
        aliases: ["w", "gravity force", "gravitational force"],
        symbols: ["W", "Fg"]),
    quantity!("time", DimensionVector::TIME,
        units: ["s", "ms", "μs", "ns", "min", "hr", "day", "year"],
        aliases: ["t", "second", "sec", "temporal"],
        symbols: ["t", "T"]),
    quantity!("duration", DimensionVector::TIME,
        units: ["s", "ms", "μs", "ns", "min", "hr", "day"],
        aliases: ["interval", "elapsed time", "timespan"],
        symbols: ["Δt", "dt"]),
    quantity!("period", DimensionVector::TIME,
        units: ["s", "ms", "μs", "ns"],
        aliases: ["t", "cycle time", "oscillation period"],
        symbols: ["T", "τ"]),
    quantity!("current", DimensionVector::CURRENT,
        units: ["A", "mA", "μA", "kA"],
        aliases: ["i", "electric current", "amperage", "ampere", "amp"],
        symbols: ["I", "i"]),
    quantity!("temperature", DimensionVector::TEMPERATURE,
        units: ["K", "°C", "°F"],
        aliases: ["t", "temp", "kelvin", "heat"],
        symbols: ["T", "θ", "Θ"]),
    quantity!("amount", DimensionVector::AMOUNT,
        units: ["mol", "mmol", "kmol"],
        aliases: ["n", "mole", "substance amount", "quantity"],
        symbols: ["n", "N"]),
    quantity!("luminosity", DimensionVector::LUMINOSITY,
        units: ["cd"],
        aliases: ["candela", "luminous intensity", "light intensity"],
        symbols: ["Iv", "I"]),
    // Geometric quantities
    quantity!("area", DimensionVector::AREA,
        units: ["m²", "cm²", "mm²", "km²", "hectare", "acre", "ft²", "in²"],
        aliases: ["a", "surface area", "cross section", "cross-sectional area"],
        symbols: ["A", "S"]),
    quantity!("volume", DimensionVector::VOLUME,
        units: ["m³", "L", "mL", "cm³", "mm³", "gal", "ft³", "in³"],
        aliases: ["v", "capacity", "space", "cubic", "liter", "litre"],
        symbols: ["V", "vol"]),
    quantity!("capacity", DimensionVector::VOLUME,
        units: ["m³", "L", "mL", "cm³", "gal"],
        aliases: ["volume", "container volume"],
        symbols: ["V", "C"]),
    // Kinematic quantities
    quantity!("velocity", DimensionVector::VELOCITY,
        units: ["m/s", "km/h", "mph", "ft/s", "cm/s"],
        aliases: ["v", "speed", "rate", "pace", "linear velocity"],
        symbols: ["v", "u", "V"]),
    quantity!("speed", DimensionVector::VELOCITY,
        units: ["m/s", "km/h", "mph", "ft/s", "knot"],
        aliases: ["v", "velocity", "rate", "pace"],
        symbols: ["v", "s", "c"]),
    quantity!("acceleration", DimensionVector::ACCELERATION,
        units: ["m/s²", "ft/s²", "g"],
        aliases: ["a", "linear acceleration", "rate of velocity change"],
        symbols: ["a", "g"]),
    quantity!("angularvelocity", DimensionVector::FREQUENCY,
        units: ["rad/s", "deg/s", "rpm"],
        aliases: ["ω", "omega", "angular speed", "rotational velocity", "rotation rate"],
        symbols: ["ω", "Ω"]),
    quantity!("angularacceleration", DimensionVector::from_ints(0, 0, -2, 0, 0, 0, 0),
        units: ["rad/s²", "deg/s²"],
        aliases: ["α", "alpha", "rotational acceleration"],
        symbols: ["α", "ε"]),
    // Dynamic quantities
    quantity!("force", DimensionVector::FORCE,
        units: ["N", "kN", "MN", "dyn", "lbf", "kgf"],
        aliases: ["f", "newton", "push", "pull", "load"],
        symbols: ["F", "f"]),
    quantity!("torque", DimensionVector::TORQUE,
        units: ["N·m", "kN·m", "dyn·cm", "lb·ft"],
        aliases: ["τ", "tau", "moment", "moment of force", "rotational force", "turning force"],
        symbols: ["τ", "M", "T"]),
    quantity!("moment", DimensionVector::TORQUE,
        units: ["N·m", "kN·m", "lb·ft"],
        aliases: ["m", "torque", "moment of force", "bending moment"],
        symbols: ["M", "τ"]),
    quantity!("pressure", DimensionVector::PRESSURE,
        units: ["Pa", "kPa", "MPa", "bar", "atm", "psi", "mmHg", "torr"],
        aliases: ["p", "pascal", "stress", "force per area"],
        symbols: ["P", "p"]),
    quantity!("stress", DimensionVector::PRESSURE,
        units: ["Pa", "MPa", "GPa", "psi", "ksi"],
        aliases: ["σ", "sigma", "pressure", "mechanical stress", "normal stress", "shear stress"],
        symbols: ["σ", "τ", "s"]),
    quantity!("energy", DimensionVector::ENERGY,
        units: ["J", "kJ", "MJ", "eV", "keV", "MeV", "cal", "kcal", "Wh", "kWh", "BTU"],
        aliases: ["e", "joule", "work", "heat", "kinetic energy", "potential energy"],
        symbols: ["E", "U", "W"]),
    quantity!("work", DimensionVector::ENERGY,
        units: ["J", "kJ", "MJ", "eV", "cal", "Wh", "kWh"],
        aliases: ["w", "energy", "mechanical work"],
        symbols: ["W", "A"]),
    quantity!("heat", DimensionVector::ENERGY,
        units: ["J", "kJ", "cal", "kcal", "BTU"],
        aliases: ["q", "thermal energy", "calorie", "heat energy"],
        symbols: ["Q", "q"]),
    quantity!("power", DimensionVector::POWER,
        units: ["W", "kW", "MW", "GW", "hp", "BTU/h"],
        aliases: ["p", "watt", "horsepower", "energy per time", "rate of work"],
        symbols: ["P", "W"]),
    quantity!("momentum", DimensionVector::MOMENTUM,
        units: ["kg·m/s", "N·s"],
        aliases: ["p", "linear momentum", "mv", "impulse"],
        symbols: ["p", "P"]),
    quantity!("impulse", DimensionVector::MOMENTUM,
        units: ["kg·m/s", "N·s"],
        aliases: ["j", "momentum change", "force impulse"],
        symbols: ["J", "I"]),
    quantity!("angularmomentum", DimensionVector::ANGULAR_MOMENTUM,
        units: ["kg·m²/s", "J·s"],
        aliases: ["l", "rotational momentum", "moment of momentum", "spin"],
        symbols: ["L", "J"]),
    // Material properties
    quantity!("density", DimensionVector::DENSITY,
        units: ["kg/m³", "g/cm³", "g/mL", "lb/ft³"],
        aliases: ["ρ", "rho", "mass density", "volumetric mass density", "specific mass"],
        symbols: ["ρ", "ρm", "d"]),
    quantity!("specificvolume", DimensionVector::from_ints(-1, 3, 0, 0, 0, 0, 0),
        units: ["m³/kg", "cm³/g", "ft³/lb"],
        aliases: ["v", "specific vol", "volume per mass"],
        symbols: ["v", "vs"]),
    quantity!("viscosity", DimensionVector::from_ints(1, -1, -1, 0, 0, 0, 0),
        units: ["Pa·s", "cP", "P"],
        aliases: ["η", "eta", "dynamic viscosity", "absolute viscosity", "poise"],
        symbols: ["η", "μ"]),
    quantity!("kinematicviscosity", DimensionVector::from_ints(0, 2, -1, 0, 0, 0, 0),
        units: ["m²/s", "St", "cSt"],
        aliases: ["ν", "nu", "momentum diffusivity", "stokes"],
        symbols: ["ν", "v"]),
    // Thermodynamic quantities
    quantity!("entropy", DimensionVector::from_ints(1, 2, -2, 0, -1, 0, 0),
        units: ["J/K", "cal/K"],
        aliases: ["s", "disorder", "thermal entropy"],
        symbols: ["S"]),
    quantity!("specificheat", DimensionVector::from_ints(0, 2, -2, 0, -1, 0, 0),
        units: ["J/(kg·K)", "cal/(g·K)", "BTU/(lb·°F)"],
        aliases: ["c", "heat capacity per mass", "specific heat capacity"],
        symbols: ["c", "cp", "cv"]),
    quantity!("thermalconductivity", DimensionVector::from_ints(1, 1, -3, 0, -1, 0, 0),
        units: ["W/(m·K)", "cal/(s·cm·K)", "BTU/(h·ft·°F)"],
        aliases: ["k", "κ", "kappa", "thermal conductance", "heat conductivity"],
        symbols: ["k", "λ", "κ"]),
    quantity!("heatcapacity", DimensionVector::from_ints(1, 2, -2, 0, -1, 0, 0),
        units: ["J/K", "cal/K"],
        aliases: ["c", "thermal capacity", "heat content per temperature"],
        symbols: ["C", "Cp", "Cv"]),
    // Electrical quantities
    quantity!("charge", DimensionVector::CHARGE,
        units: ["C", "mC", "μC", "e"],
        aliases: ["q", "coulomb", "electric charge", "electrical charge", "quantity of electricity"],
        symbols: ["Q", "q"]),
    quantity!("voltage", DimensionVector::VOLTAGE,
        units: ["V", "kV", "mV", "μV"],
        aliases: ["v", "volt", "potential difference", "electric potential", "electromotive force", "emf", "pd"],
        symbols: ["V", "U", "φ"]),
    quantity!("potential", DimensionVector::VOLTAGE,
        units: ["V", "kV", "mV"],
        aliases: ["φ", "phi", "electric potential", "voltage"],
        symbols: ["φ", "V", "Φ"]),
    quantity!("emf", DimensionVector::VOLTAGE,
        units: ["V", "kV", "mV"],
        aliases: ["electromotive force", "voltage", "emf", "e"],
        symbols: ["ε", "E", "V"]),
    quantity!("resistance", DimensionVector::RESISTANCE,
        units: ["Ω", "kΩ", "MΩ", "mΩ"],
        aliases: ["r", "ohm", "electric resistance", "electrical resistance"],
        symbols: ["R"]),
    quantity!("conductance", DimensionVector::from_ints(-1, -2, 3, 2, 0, 0, 0),
        units: ["S", "mS", "μS"],
        aliases: ["g", "siemens", "electric conductance", "electrical conductance", "mho"],
        symbols: ["G", "S"]),
    quantity!("capacitance", DimensionVector::CAPACITANCE,
        units: ["F", "mF", "μF", "nF", "pF"],
        aliases: ["c", "farad", "electric capacitance", "electrical capacitance"],
        symbols: ["C"]),
    quantity!("inductance", DimensionVector::from_ints(1, 2, -2, -2, 0, 0, 0),
        units: ["H", "mH", "μH", "nH"],
        aliases: ["l", "henry", "electric inductance", "magnetic inductance", "self-inductance"],
        symbols: ["L"]),
    quantity!("magneticfield", DimensionVector::MAGNETIC_FIELD,
        units: ["T", "mT", "μT", "G"],
        aliases: ["b", "tesla", "magnetic flux density", "magnetic induction", "b field", "gauss"],
        symbols: ["B"]),
    quantity!("magneticflux", DimensionVector::from_ints(1, 2, -2, -1, 0, 0, 0),
        units: ["Wb", "Mx"],
        aliases: ["φ", "phi", "weber", "flux", "magnetic flux"],
        symbols: ["Φ", "φB"]),
    quantity!("electricfield", DimensionVector::from_ints(1, 1, -3, -1, 0, 0, 0),
        units: ["V/m", "N/C"],
        aliases: ["e", "electric field strength", "electric field intensity", "e field"],
        symbols: ["E"]),
    // Wave and oscillation
    quantity!("frequency", DimensionVector::FREQUENCY,
        units: ["Hz", "kHz", "MHz", "GHz", "THz", "rpm"],
        aliases: ["f", "ν", "nu", "hertz", "cycles per second", "temporal frequency"],
        symbols: ["f", "ν"]),
    quantity!("angularfrequency", DimensionVector::FREQUENCY,
        units: ["rad/s", "s⁻¹"],
        aliases: ["ω", "omega", "angular velocity", "radial frequency"],
        symbols: ["ω"]),
    // Optical quantities
    quantity!("luminousflux", DimensionVector::LUMINOSITY,
        units: ["lm"],
        aliases: ["φ", "lumen", "light flux", "luminous power"],
        symbols: ["Φv", "F"]),
    quantity!("illuminance", DimensionVector::from_ints(0, -2, 0, 0, 0, 0, 1),
        units: ["lx", "lm/m²"],
        aliases: ["e", "lux", "light intensity", "luminous flux per area"],
        symbols: ["Ev", "E"]),
    quantity!("luminance", DimensionVector::from_ints(0, -2, 0, 0, 0, 0, 1),
        units: ["cd/m²", "nit"],
        aliases: ["l", "brightness", "nit", "luminous intensity per area"],
        symbols: ["Lv", "L"]),
    // Dimensionless quantities
    quantity!("angle", DimensionVector::ZERO,
        units: ["rad", "deg", "grad", "'", "\""],
        aliases: ["θ", "theta", "radian", "degree", "angular measure", "plane angle"],
        symbols: ["θ", "α", "β", "γ", "φ"]),
    quantity!("solidangle", DimensionVector::ZERO,
        units: ["sr"],
        aliases: ["ω", "omega", "steradian", "solid angular measure", "cone angle"],
        symbols: ["Ω", "ω"]),
    quantity!("strain", DimensionVector::ZERO,
        units: ["1", "%"],
        aliases: ["ε", "epsilon", "deformation", "relative elongation", "engineering strain"],
        symbols: ["ε", "e"]),
    quantity!("refractionindex", DimensionVector::ZERO,
        units: ["1"],
        aliases: ["n", "index of refraction", "refractive index", "optical density"],
        symbols: ["n"]),
    quantity!("relativepermittivity", DimensionVector::ZERO,
        units: ["1"],
        aliases: ["εr", "dielectric constant", "relative permittivity", "dielectric"],
        symbols: ["εr", "κ"]),
    quantity!("relativepermeability", DimensionVector::ZERO,
        units: ["1"],
        aliases: ["μr", "relative permeability", "magnetic permeability"],
        symbols: ["μr"]),
    // Rate quantities
    quantity!("flowrate", DimensionVector::from_ints(0, 3, -1, 0, 0, 0, 0),
        units: ["m³/s", "L/s", "L/min", "gal/min", "ft³/s"],
        aliases: ["q", "volume flow rate", "volumetric flow rate", "discharge", "flow"],
        symbols: ["Q", "q", "V̇"]),
    quantity!("massflowrate", DimensionVector::from_ints(1, 0, -1, 0, 0, 0, 0),
        units: ["kg/s", "g/s", "lb/s"],
        aliases: ["ṁ", "mass flow", "mass discharge", "mass rate"],
        symbols: ["ṁ"]),
    // Other quantities
    quantity!("surfacetension", DimensionVector::from_ints(1, 0, -2, 0, 0, 0, 0),
        units: ["N/m", "dyn/cm"],
        aliases: ["γ", "gamma", "surface energy", "interfacial tension"],
        symbols: ["γ", "σ"]),
    quantity!("action", DimensionVector::ANGULAR_MOMENTUM,
        units: ["J·s", "eV·s"],
        aliases: ["s", "planck constant", "angular momentum", "energy time"],
        symbols: ["S", "ℏ"]),
    quantity!("absorbeddose", DimensionVector::from_ints(0, 2, -2, 0, 0, 0, 0),
        units: ["Gy", "rad"],
        aliases: ["d", "gray", "radiation dose", "dose", "energy per mass"],
        symbols: ["D"]),
    quantity!("catalyticactivity", DimensionVector::from_ints(0, 0, -1, 0, 0, 1, 0),
        units: ["kat", "mol/s"],
        aliases: ["katal", "enzyme activity", "catalysis rate"],
        symbols: ["z"]),
    quantity!("molarity", DimensionVector::from_ints(0, -3, 0, 0, 0, 1, 0),
        units: ["mol/L", "M", "mM"],
        aliases: ["c", "molar concentration", "amount concentration", "concentration"],
        symbols: ["c", "M"]),
    quantity!("molality", DimensionVector::from_ints(-1, 0, 0, 0, 0, 1, 0),
        units: ["mol/kg"],
        aliases: ["m", "molal concentration", "amount per mass"],
        symbols: ["b", "m"]),
];
