//! Built-in seed library.
//!
//! Template pairs are data, not algorithm: each entry is a puzzle string
//! and its full solution in canonical digits, tagged with the grid size and
//! an authoring-time difficulty. This is a small curated set; swapping in a
//! larger library is a data change only.

use crate::dimension::Dimension;
use crate::schema::{Difficulty, Schema};

type SeedTable = &'static [(Difficulty, &'static str, &'static str)];

const SEEDS_4X4: SeedTable = &[
    (
        Difficulty::Easy,
        "-BCDCDA-BAD--CBA",
        "ABCDCDABBADCDCBA",
    ),
    (
        Difficulty::Easy,
        "ABC-CDAB--D-D-BC",
        "ABCDCDABBCDADABC",
    ),
    (
        Difficulty::Medium,
        "A--D-DABBC---AB-",
        "ABCDCDABBCDADABC",
    ),
    (
        Difficulty::Hard,
        "--B-BD--CBDA-A--",
        "ACBDBDACCBDADACB",
    ),
    (
        Difficulty::Expert,
        "-A-C-------DCDAB",
        "DABCBCDAABCDCDAB",
    ),
];

const SEEDS_6X6: SeedTable = &[
    (
        Difficulty::Easy,
        "ABCD-FDEFA-C-CD--A-FA-C-C-EFABFAB---",
        "ABCDEFDEFABCBCDEFAEFABCDCDEFABFABCDE",
    ),
    (
        Difficulty::Medium,
        "A---D---B-F---ED-ADBAFC-CED-AF-A-C-D",
        "AFCEDBEDBAFCFCEDBADBAFCECEDBAFBAFCED",
    ),
    (
        Difficulty::Hard,
        "-E----AF--E-ECAFB----E--C-F-D-BDEC--",
        "DECAFBAFBDECECAFBDFBDECACAFBDEBDECAF",
    ),
    (
        Difficulty::Expert,
        "DBF--C-AC----F-----C---EFEA--B-D----",
        "DBFEACEACDBFBFEACDACDBFEFEACDBCDBFEA",
    ),
];

const SEEDS_9X9: SeedTable = &[
    (
        Difficulty::Easy,
        "ABCDEFG-I--FGH-A-CGHIAB-DEF-C-EFG--AEF-HI-B-DH-A-C---GCDEFG-IAB-G-IA-CD--A-CD-F--",
        "ABCDEFGHIDEFGHIABCGHIABCDEFBCDEFGHIAEFGHIABCDHIABCDEFGCDEFGHIABFGHIABCDEIABCDEFGH",
    ),
    (
        Difficulty::Medium,
        "-CF-BD----B-I-AEC-I-AEC-G---FGBDI---B-IHA-----AECF-BD-FG-DIHAE-D-HAECFG-A-----D--",
        "ECFGBDIHAGBDIHAECFIHAECFGBDCFGBDIHAEBDIHAECFGHAECFGBDIFGBDIHAECDIHAECFGBAECFGBDIH",
    ),
    (
        Difficulty::Hard,
        "---HGCI-B-----B-F-I----AHG--A-G---BE-----E-A-D--F-H-C-AH--IDB---ID--F-HGBEFA-G-I-",
        "EFAHGCIDBHGCIDBEFAIDBEFAHGCFAHGCIDBEGCIDBEFAHDBEFAHGCIAHGCIDBEFCIDBEFAHGBEFAHGCID",
    ),
    (
        Difficulty::Expert,
        "A-F-H------I-DCA-FG-C---B-I---HIGD-----D---F-D----B-I------DC--I--C---B-C-E-BH--D",
        "AEFBHIGDCBHIGDCAEFGDCAEFBHIEFBHIGDCAHIGDCAEFBDCAEFBHIGFBHIGDCAEIGDCAEFBHCAEFBHIGD",
    ),
];

const SEEDS_16X16: SeedTable = &[
    (
        Difficulty::Easy,
        "-Af---AeAdAaI-JG---AcH--Aa---GCDF-B-AbAI---C-F--AfAb--Ae--C-----Ab-H-AdAaIEJGAfAbA---AaIEJGCD-Ac-AeAdAaIE-G-D---AfAbA-E-G-DFAcBAfAb-HAeAdAa-D-Ac--Ab--AeAd-IEJ-C--H-Ad-IEJGCDF-BAfAdAaI--G-DFAcBAfAbAH--GCDF-BAf-AHAeAdAa-EFAcB--A-AeAdAa---G-DA---AaIEJGCD-AcBAfAbAaI--G-DFAcBAfAb-HAeAd-C-FAcB-AbAH--AaIEJAcBAfAb-HAeAdAaIEJGC-F",
        "BAfAbAHAeAdAaIEJGCDFAcHAeAdAaIEJGCDFAcBAfAbAIEJGCDFAcBAfAbAHAeAdAaCDFAcBAfAbAHAeAdAaIEJGAfAbAHAeAdAaIEJGCDFAcBAeAdAaIEJGCDFAcBAfAbAHEJGCDFAcBAfAbAHAeAdAaIDFAcBAfAbAHAeAdAaIEJGCAbAHAeAdAaIEJGCDFAcBAfAdAaIEJGCDFAcBAfAbAHAeJGCDFAcBAfAbAHAeAdAaIEFAcBAfAbAHAeAdAaIEJGCDAHAeAdAaIEJGCDFAcBAfAbAaIEJGCDFAcBAfAbAHAeAdGCDFAcBAfAbAHAeAdAaIEJAcBAfAbAHAeAdAaIEJGCDF",
    ),
    (
        Difficulty::Hard,
        "HJFGAeAaAcI----EAbA-Ae-Ac-----EAb-D---GB------DHJF--AaAcI---D-------I---Af--GAeAaAc-B-AdAf-AbADH-Ac--CAd-----H---Ae-Ad-EAbAD-----AaAcI-Ab--H--GAe---B--Af--GAe-AcIB------D---IB-AdAf-AbADH--GAe--Af----H-F-AeAaAcIBC---JF-AeAa-----Af-Ab-Ae---BCAd--AbA------C-Af---D-J-G-Aa---AbA--JF-----BC---J-GAeAa-IB--Af-AbA",
        "HJFGAeAaAcIBCAdAfEAbADAeAaAcIBCAdAfEAbADHJFGBCAdAfEAbADHJFGAeAaAcIEAbADHJFGAeAaAcIBCAdAfJFGAeAaAcIBCAdAfEAbADHAaAcIBCAdAfEAbADHJFGAeCAdAfEAbADHJFGAeAaAcIBAbADHJFGAeAaAcIBCAdAfEFGAeAaAcIBCAdAfEAbADHJAcIBCAdAfEAbADHJFGAeAaAdAfEAbADHJFGAeAaAcIBCADHJFGAeAaAcIBCAdAfEAbGAeAaAcIBCAdAfEAbADHJFIBCAdAfEAbADHJFGAeAaAcAfEAbADHJFGAeAaAcIBCAdDHJFGAeAaAcIBCAdAfEAbA",
    ),
];

pub(crate) fn builtin_schemas() -> Vec<Schema> {
    let mut schemas = Vec::new();
    push_all(&mut schemas, Dimension::FOUR, SEEDS_4X4);
    push_all(&mut schemas, Dimension::SIX, SEEDS_6X6);
    push_all(&mut schemas, Dimension::NINE, SEEDS_9X9);
    push_all(&mut schemas, Dimension::SIXTEEN, SEEDS_16X16);
    schemas
}

fn push_all(out: &mut Vec<Schema>, dimension: Dimension, table: SeedTable) {
    for &(difficulty, puzzle, solution) in table {
        out.push(Schema {
            puzzle: puzzle.to_string(),
            solution: solution.to_string(),
            difficulty,
            dimension,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::assert_valid_solution;
    use crate::token::decode_template;

    #[test]
    fn test_every_seed_solution_is_valid() {
        for schema in builtin_schemas() {
            let solution = decode_template(&schema.solution, schema.dimension)
                .unwrap_or_else(|e| panic!("{} {}: {e}", schema.dimension, schema.difficulty));
            assert_valid_solution(&solution, schema.dimension);
        }
    }

    #[test]
    fn test_every_seed_puzzle_is_a_subgrid_of_its_solution() {
        for schema in builtin_schemas() {
            let puzzle = decode_template(&schema.puzzle, schema.dimension).unwrap();
            let solution = decode_template(&schema.solution, schema.dimension).unwrap();
            assert!(puzzle.iter().any(|&v| v == 0), "puzzle has no empty cells");
            for (i, (&p, &s)) in puzzle.iter().zip(&solution).enumerate() {
                assert!(p == 0 || p == s, "cell {i} disagrees with the solution");
            }
        }
    }

    #[test]
    fn test_library_covers_all_difficulties_for_core_sizes() {
        let schemas = builtin_schemas();
        for dimension in [Dimension::FOUR, Dimension::SIX, Dimension::NINE] {
            for &difficulty in Difficulty::all_levels() {
                assert!(
                    schemas
                        .iter()
                        .any(|s| s.dimension == dimension && s.difficulty == difficulty),
                    "no {difficulty} seed for {dimension}"
                );
            }
        }
    }
}
