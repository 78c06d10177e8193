//! Disqualification code sets for the voting-rights classification.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Offenses involving moral turpitude; disqualifying but restorable
    // through the certificate-of-eligibility process.
    static ref CERV_CODES: Regex = Regex::new(
        r"(OSUA|EGUA|MAN1|MAN2|MANS|ASS1|ASS2|KID1|KID2|HUT1|HUT2|BUR1|BUR2|TOP1|TOP2|TP2D|TP2G|TPCS|TPCD|TPC1|TET2|TOD2|ROB1|ROB2|ROB3|FOR1|FOR2|FR2D|MIOB|TRAK|TRAG|VDRU|VDRY|TRAO|TRFT|TRMA|TROP|CHAB|WABC|ACHA|ACAL)"
    )
    .unwrap();
    // Restorable only by pardon.
    static ref PARDON_CODES: Regex = Regex::new(
        r"(RAP1|RAP2|SOD1|SOD2|STSA|SXA1|SXA2|ECHI|SX12|CSSC|FTCS|MURD|MRDI|MURR|FMUR|PMIO|POBM|MIPR|POMA|INCE)"
    )
    .unwrap();
    // Never restorable. Capital-murder markers appear in the charge
    // text rather than the code column, so this one matches the whole
    // line.
    static ref PERMANENT_MARKERS: Regex = Regex::new(r"(CM\d\d|CMUR|CAPITAL)").unwrap();
}

pub fn is_cerv_code(code: &str) -> bool {
    CERV_CODES.is_match(code)
}

pub fn is_pardon_code(code: &str) -> bool {
    PARDON_CODES.is_match(code)
}

pub fn is_permanent_line(line: &str) -> bool {
    PERMANENT_MARKERS.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_sets_are_disjoint_on_common_codes() {
        assert!(is_cerv_code("ROB1"));
        assert!(!is_pardon_code("ROB1"));
        assert!(is_pardon_code("MURD"));
        assert!(!is_cerv_code("MURD"));
        assert!(!is_cerv_code("UPCS"));
        assert!(!is_pardon_code("UPCS"));
    }

    #[test]
    fn permanent_markers_match_line_text() {
        assert!(is_permanent_line("001 CM02 MURDER CAPITAL-ROBBERY"));
        assert!(is_permanent_line("CAPITAL MURDER"));
        assert!(!is_permanent_line("001 ROB1 ROBBERY 1ST"));
    }
}
