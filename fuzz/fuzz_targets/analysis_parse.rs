#![no_main]

//! Fuzz target for analysis.json parsing.
//!
//! Arbitrary bytes must never panic the tolerant loader, and anything it
//! accepts must survive re-serialization.

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = qinvest_analysis::sha256_hex(data);

    if let Ok(analysis) = qinvest_analysis::parse_analysis(data) {
        let _ = serde_json::to_string(&analysis);
    }

    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    // Individual components.
    let _ = serde_json::from_str::<qinvest_types::violation::QualityViolation>(s);
    let _ = serde_json::from_str::<qinvest_types::violation::QualityCriteria>(s);
    let _ = serde_json::from_str::<qinvest_types::artefact::Artefact>(s);
    let _ = serde_json::from_str::<qinvest_types::plan::PlanRequest>(s);
    let _ = serde_json::from_str::<qinvest_types::artifact::PlanArtifact>(s);
});
