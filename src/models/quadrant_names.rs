use super::position::QuadrantPosition;

const REGION_NAMES: [[&str; 8]; 8] = [
    ["ANTARES", "RIGEL", "PROCYON", "VEGA", "CANOPUS", "ALTAIR", "SAGITTARIUS", "POLLUX"],
    ["SIRIUS", "DENEB", "CAPELLA", "BETELGEUSE", "ALDEBARAN", "REGULUS", "ARCTURUS", "SPICA"],
    ["POLARIS", "GACRUX", "HADAR", "MIMOSA", "ACRUX", "SHAULA", "BELLATRIX", "ELNATH"],
    ["ALNILAM", "ALNITAK", "SAIPH", "CASTOR", "MIZAR", "ALCOR", "HAMAL", "DENEBOLA"],
    ["ALPHECCA", "RASALHAGUE", "KOCHAB", "PHERKAD", "MENKENT", "ALBIREO", "GIENAH", "ALUDRA"],
    ["SCHEDAR", "CAPH", "RUCHBAH", "SEGIN", "ACHIRD", "ALMACH", "MIRACH", "ALGOL"],
    ["ATLAS", "ELECTRA", "MAIA", "MEROPE", "TAYGETA", "CELAENO", "ALCYONE", "PLEIONE"],
    ["ALPHARD", "SUHAIL", "NAOS", "REGOR", "ALSUHAIL", "MARKEB", "AVIOR", "MIAPLACIDUS"],
];

const SUFFIXES: [&str; 4] = ["I", "II", "III", "IV"];

/// Region name of a quadrant, e.g. "VEGA IV".
pub fn quadrant_name(pos: QuadrantPosition) -> String {
    if !pos.in_bounds() {
        return "UNKNOWN".to_string();
    }
    let base = REGION_NAMES[pos.row as usize][pos.col as usize];
    let suffix = SUFFIXES[((pos.row + pos.col) % 4) as usize];
    format!("{} {}", base, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_names() {
        assert_eq!(quadrant_name(QuadrantPosition::new(0, 0)), "ANTARES I");
        assert_eq!(quadrant_name(QuadrantPosition::new(0, 3)), "VEGA IV");
        assert_eq!(quadrant_name(QuadrantPosition::new(7, 7)), "MIAPLACIDUS III");
    }

    #[test]
    fn out_of_range_is_unknown() {
        assert_eq!(quadrant_name(QuadrantPosition::new(8, 0)), "UNKNOWN");
    }
}
