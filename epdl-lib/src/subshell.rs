//! Atomic subshells and the Compton profile row of each subshell.

use std::fmt;

use epdl_data::shells;

use crate::error::{PhotonDataError, Result};

macro_rules! subshells {
    ($($variant:ident = $designator:literal),+ $(,)?) => {
        /// Atomic subshell, numbered by its EADL designator.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u32)]
        pub enum SubshellType {
            $($variant = $designator),+
        }

        impl SubshellType {
            pub const ALL: &'static [SubshellType] = &[$(SubshellType::$variant),+];

            pub fn from_eadl_designator(designator: u32) -> Option<Self> {
                match designator {
                    $($designator => Some(SubshellType::$variant),)+
                    _ => None,
                }
            }

            /// Spectroscopic label, e.g. `"L3"`.
            pub fn label(self) -> &'static str {
                match self {
                    $(SubshellType::$variant => stringify!($variant),)+
                }
            }
        }
    };
}

subshells! {
    K = 1,
    L1 = 3, L2 = 5, L3 = 6,
    M1 = 8, M2 = 10, M3 = 11, M4 = 13, M5 = 14,
    N1 = 16, N2 = 18, N3 = 19, N4 = 21, N5 = 22, N6 = 24, N7 = 25,
    O1 = 27, O2 = 29, O3 = 30, O4 = 32, O5 = 33, O6 = 35, O7 = 36, O8 = 38, O9 = 39,
    P1 = 41, P2 = 43, P3 = 44, P4 = 46, P5 = 47, P6 = 49, P7 = 50, P8 = 52, P9 = 53,
    P10 = 55, P11 = 56,
    Q1 = 58, Q2 = 60, Q3 = 61,
}

impl SubshellType {
    pub fn designator(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for SubshellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps the subshells of one element to rows of its Compton profile table.
#[derive(Debug, Clone, Copy)]
pub struct ComptonProfileSubshellConverter {
    atomic_number: u32,
    layout: &'static [(u32, u32)],
}

impl ComptonProfileSubshellConverter {
    pub fn for_element(atomic_number: u32) -> Result<Self> {
        let layout = shells::compton_profile_layout(atomic_number)
            .ok_or(PhotonDataError::UnsupportedElement(atomic_number))?;
        Ok(Self {
            atomic_number,
            layout,
        })
    }

    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    /// Row index of `subshell`. Fails for subshells the element's profiles
    /// do not cover.
    pub fn convert_subshell_to_index(&self, subshell: SubshellType) -> Result<usize> {
        self.layout
            .iter()
            .find(|(designator, _)| *designator == subshell.designator())
            .map(|(_, row)| *row as usize)
            .ok_or_else(|| PhotonDataError::InvalidSubshell {
                atomic_number: self.atomic_number,
                subshell: subshell.to_string(),
            })
    }

    /// Number of rows in the element's Compton profile table.
    pub fn number_of_profiles(&self) -> usize {
        self.layout
            .last()
            .map(|(_, row)| *row as usize + 1)
            .unwrap_or(0)
    }
}
