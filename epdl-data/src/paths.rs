//! Well-known dataset paths, attribute names and file naming.

pub const ROOT: &str = "/";
pub const ATOMIC_WEIGHT_ATTRIBUTE: &str = "atomic_weight";
pub const ENERGY_LIMITS_ATTRIBUTE: &str = "energy_limits";

pub const COHERENT_CROSS_SECTION_LOC: &str = "/coherent_cross_section";
pub const INCOHERENT_CROSS_SECTION_LOC: &str = "/incoherent_cross_section";
pub const PHOTOELECTRIC_CROSS_SECTION_LOC: &str = "/photoelectric_cross_section";
pub const PHOTOELECTRIC_SUBSHELL_CROSS_SECTION_ROOT: &str =
    "/photoelectric_subshell_cross_sections/";
pub const PHOTOELECTRIC_SHELL_ATTRIBUTE: &str = "shells";
pub const PAIR_PRODUCTION_CROSS_SECTION_LOC: &str = "/pair_production_cross_section";
pub const TRIPLET_PRODUCTION_CROSS_SECTION_LOC: &str = "/triplet_production_cross_section";
pub const ATOMIC_FORM_FACTOR_LOC: &str = "/atomic_form_factor";
pub const SCATTERING_FUNCTION_LOC: &str = "/scattering_function";

pub const ELECTRON_SHELL_CDF_LOC: &str = "/electron_shell_cdf";
pub const ELECTRON_SHELL_BINDING_ENERGY_LOC: &str = "/electron_shell_binding_energy";
pub const ELECTRON_SHELL_KINETIC_ENERGY_LOC: &str = "/electron_shell_kinetic_energy";
pub const COMPTON_PROFILE_CDF_LOC: &str = "/compton_profile_cdf";

pub const TRANSITION_PROBABILITY_ROOT: &str = "/atomic_relaxation/";
pub const RADIATIVE_TRANSITION_SUB_ROOT: &str = "radiative_transitions/";
pub const NONRADIATIVE_TRANSITION_SUB_ROOT: &str = "nonradiative_transitions/";
pub const ATOMIC_RELAXATION_SHELL_ATTRIBUTE: &str = "shells";
pub const TOTAL_RAD_TRANS_PROB_ATTRIBUTE: &str = "total_radiative_transition_probability";

pub const PHOTON_DATA_FILE_PREFIX: &str = "photon_data_";
pub const DATA_FILE_SUFFIX: &str = ".bin.zst";
