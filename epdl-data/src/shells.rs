//! Compton profile layout of every element.
//!
//! Each entry maps an EADL subshell designator to the row of the element's
//! Compton profile table. Subshells whose profiles are tabulated together
//! share a row. Profiles below Z = 36 are non-relativistic and merge the
//! spin-orbit pairs; from Z = 36 on they are relativistic and keep them
//! apart. Rows are numbered in filling order, so the 4s/5s shells of the
//! alkali and alkaline-earth metals come before the d shells they precede.

const Z1: &[(u32, u32)] = &[
    (1, 0),
];
const Z3: &[(u32, u32)] = &[
    (1, 0), (3, 1),
];
const Z5: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 2),
];
const Z11: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 2), (8, 3),
];
const Z13: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 2), (8, 3), (10, 4), (11, 4),
];
const Z19: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 2), (8, 3), (10, 4), (11, 4), (16, 5),
];
const Z21: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 2), (8, 3), (10, 4), (11, 4), (13, 5), (14, 5), (16, 6),
];
const Z31: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 2), (8, 3), (10, 4), (11, 4), (13, 5), (14, 5), (16, 6),
    (18, 7), (19, 7),
];
const Z36: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 3), (8, 4), (10, 5), (11, 6), (13, 7), (14, 8), (16, 9),
    (18, 10), (19, 11),
];
const Z37: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 3), (8, 4), (10, 5), (11, 6), (13, 7), (14, 8), (16, 9),
    (18, 10), (19, 11), (27, 12),
];
const Z39: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 3), (8, 4), (10, 5), (11, 6), (13, 7), (14, 8), (16, 9),
    (18, 10), (19, 11), (21, 12), (22, 12), (27, 13),
];
const Z42: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 3), (8, 4), (10, 5), (11, 6), (13, 7), (14, 8), (16, 9),
    (18, 10), (19, 11), (21, 12), (22, 13), (27, 14),
];
const Z46: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 3), (8, 4), (10, 5), (11, 6), (13, 7), (14, 8), (16, 9),
    (18, 10), (19, 11), (21, 12), (22, 13),
];
const Z49: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 3), (8, 4), (10, 5), (11, 6), (13, 7), (14, 8), (16, 9),
    (18, 10), (19, 11), (21, 12), (22, 13), (27, 14), (29, 15), (30, 15),
];
const Z51: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 3), (8, 4), (10, 5), (11, 6), (13, 7), (14, 8), (16, 9),
    (18, 10), (19, 11), (21, 12), (22, 13), (27, 14), (29, 15), (30, 16),
];
const Z55: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 3), (8, 4), (10, 5), (11, 6), (13, 7), (14, 8), (16, 9),
    (18, 10), (19, 11), (21, 12), (22, 13), (27, 14), (29, 15), (30, 16), (41, 17),
];
const Z57: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 3), (8, 4), (10, 5), (11, 6), (13, 7), (14, 8), (16, 9),
    (18, 10), (19, 11), (21, 12), (22, 13), (27, 14), (29, 15), (30, 16), (32, 17), (33, 17),
    (41, 18),
];
const Z58: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 3), (8, 4), (10, 5), (11, 6), (13, 7), (14, 8), (16, 9),
    (18, 10), (19, 11), (21, 12), (22, 13), (24, 14), (25, 14), (27, 15), (29, 16), (30, 17),
    (41, 19),
];
const Z59: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 3), (8, 4), (10, 5), (11, 6), (13, 7), (14, 8), (16, 9),
    (18, 10), (19, 11), (21, 12), (22, 13), (24, 14), (25, 14), (27, 15), (29, 16), (30, 17),
    (41, 18),
];
const Z63: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 3), (8, 4), (10, 5), (11, 6), (13, 7), (14, 8), (16, 9),
    (18, 10), (19, 11), (21, 12), (22, 13), (24, 14), (25, 15), (27, 16), (29, 17), (30, 18),
    (41, 19),
];
const Z64: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 3), (8, 4), (10, 5), (11, 6), (13, 7), (14, 8), (16, 9),
    (18, 10), (19, 11), (21, 12), (22, 13), (24, 14), (25, 15), (27, 16), (29, 17), (30, 18),
    (32, 19), (33, 19), (41, 20),
];
const Z75: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 3), (8, 4), (10, 5), (11, 6), (13, 7), (14, 8), (16, 9),
    (18, 10), (19, 11), (21, 12), (22, 13), (24, 14), (25, 15), (27, 16), (29, 17), (30, 18),
    (32, 19), (33, 20), (41, 21),
];
const Z77: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 3), (8, 4), (10, 5), (11, 6), (13, 7), (14, 8), (16, 9),
    (18, 10), (19, 11), (21, 12), (22, 13), (24, 14), (25, 15), (27, 16), (29, 17), (30, 18),
    (32, 19), (33, 20),
];
const Z81: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 3), (8, 4), (10, 5), (11, 6), (13, 7), (14, 8), (16, 9),
    (18, 10), (19, 11), (21, 12), (22, 13), (24, 14), (25, 15), (27, 16), (29, 17), (30, 18),
    (32, 19), (33, 20), (41, 21), (43, 22), (44, 22),
];
const Z83: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 3), (8, 4), (10, 5), (11, 6), (13, 7), (14, 8), (16, 9),
    (18, 10), (19, 11), (21, 12), (22, 13), (24, 14), (25, 15), (27, 16), (29, 17), (30, 18),
    (32, 19), (33, 20), (41, 21), (43, 22), (44, 23),
];
const Z87: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 3), (8, 4), (10, 5), (11, 6), (13, 7), (14, 8), (16, 9),
    (18, 10), (19, 11), (21, 12), (22, 13), (24, 14), (25, 15), (27, 16), (29, 17), (30, 18),
    (32, 19), (33, 20), (41, 21), (43, 22), (44, 23), (58, 24),
];
const Z89: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 3), (8, 4), (10, 5), (11, 6), (13, 7), (14, 8), (16, 9),
    (18, 10), (19, 11), (21, 12), (22, 13), (24, 14), (25, 15), (27, 16), (29, 17), (30, 18),
    (32, 19), (33, 20), (41, 21), (43, 22), (44, 23), (46, 24), (47, 24), (58, 25),
];
const Z91: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 3), (8, 4), (10, 5), (11, 6), (13, 7), (14, 8), (16, 9),
    (18, 10), (19, 11), (21, 12), (22, 13), (24, 14), (25, 15), (27, 16), (29, 17), (30, 18),
    (32, 19), (33, 20), (35, 21), (36, 21), (41, 22), (43, 23), (44, 24), (46, 25), (47, 25),
    (58, 26),
];
const Z94: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 3), (8, 4), (10, 5), (11, 6), (13, 7), (14, 8), (16, 9),
    (18, 10), (19, 11), (21, 12), (22, 13), (24, 14), (25, 15), (27, 16), (29, 17), (30, 18),
    (32, 19), (33, 20), (35, 21), (36, 21), (41, 22), (43, 23), (44, 24), (58, 25),
];
const Z95: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 3), (8, 4), (10, 5), (11, 6), (13, 7), (14, 8), (16, 9),
    (18, 10), (19, 11), (21, 12), (22, 13), (24, 14), (25, 15), (27, 16), (29, 17), (30, 18),
    (32, 19), (33, 20), (35, 21), (36, 22), (41, 23), (43, 24), (44, 25), (58, 26),
];
const Z96: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 3), (8, 4), (10, 5), (11, 6), (13, 7), (14, 8), (16, 9),
    (18, 10), (19, 11), (21, 12), (22, 13), (24, 14), (25, 15), (27, 16), (29, 17), (30, 18),
    (32, 19), (33, 20), (35, 21), (36, 22), (41, 23), (43, 24), (44, 25), (46, 26), (47, 26),
    (58, 27),
];
const Z97: &[(u32, u32)] = &[
    (1, 0), (3, 1), (5, 2), (6, 3), (8, 4), (10, 5), (11, 6), (13, 7), (14, 8), (16, 9),
    (18, 10), (19, 11), (21, 12), (22, 13), (24, 14), (25, 15), (27, 16), (29, 17), (30, 18),
    (32, 19), (33, 20), (35, 21), (36, 22), (41, 23), (43, 24), (44, 25), (46, 25), (47, 25),
    (58, 26),
];

pub fn compton_profile_layout(atomic_number: u32) -> Option<&'static [(u32, u32)]> {
    let layout = match atomic_number {
        1..=2 => Z1,
        3..=4 => Z3,
        5..=10 => Z5,
        11..=12 => Z11,
        13..=18 => Z13,
        19..=20 => Z19,
        21..=30 => Z21,
        31..=35 => Z31,
        36 => Z36,
        37..=38 => Z37,
        39..=41 => Z39,
        42..=45 => Z42,
        46 => Z46,
        47..=48 => Z42,
        49..=50 => Z49,
        51..=54 => Z51,
        55..=56 => Z55,
        57 => Z57,
        58 => Z58,
        59..=62 => Z59,
        63 => Z63,
        64 => Z64,
        65..=70 => Z63,
        71..=74 => Z64,
        75..=76 => Z75,
        77 => Z77,
        78..=80 => Z75,
        81..=82 => Z81,
        83..=86 => Z83,
        87..=88 => Z87,
        89..=90 => Z89,
        91..=93 => Z91,
        94 => Z94,
        95 => Z95,
        96 => Z96,
        97 => Z97,
        98..=100 => Z95,
        _ => return None,
    };
    Some(layout)
}

/// Row of the Compton profile table holding `designator`, if the element
/// tabulates that subshell.
pub fn compton_profile_row(atomic_number: u32, designator: u32) -> Option<u32> {
    compton_profile_layout(atomic_number)?
        .iter()
        .find(|(shell, _)| *shell == designator)
        .map(|(_, row)| *row)
}

/// Number of rows in the Compton profile table of the element.
pub fn compton_profile_rows(atomic_number: u32) -> Option<usize> {
    compton_profile_layout(atomic_number)
        .and_then(|layout| layout.last())
        .map(|(_, row)| *row as usize + 1)
}
