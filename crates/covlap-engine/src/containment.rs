use covlap_types::Holding;

/// True when the candidate's effective interval fully contains the
/// investigated holding's effective interval. Any undefined bound on
/// either side makes the answer false; undefined never satisfies a
/// comparison.
pub fn contains(candidate: &Holding, investigated: &Holding) -> bool {
    match (
        investigated.effective_begin,
        investigated.effective_end,
        candidate.effective_begin,
        candidate.effective_end,
    ) {
        (Some(inv_begin), Some(inv_end), Some(cand_begin), Some(cand_end)) => {
            inv_begin >= cand_begin && inv_end <= cand_end
        }
        _ => false,
    }
}
