use provtrack_core::DataFilePairing;

/// Render a file pairing as matched pairs followed by each side's leftovers.
pub fn render_pairing(pairing: &DataFilePairing) -> String {
    let mut out = String::new();
    if pairing.matches.is_empty() && pairing.unmatched_a.is_empty() && pairing.unmatched_b.is_empty()
    {
        out.push_str("No data files to pair.\n");
        return out;
    }

    if !pairing.matches.is_empty() {
        out.push_str("Matched files:\n");
        for (a, b) in &pairing.matches {
            out.push_str(&format!("  {} <-> {}\n", a.path, b.path));
        }
    }
    if !pairing.unmatched_a.is_empty() {
        out.push_str("Only in A:\n");
        for key in &pairing.unmatched_a {
            out.push_str(&format!("  {}\n", key.path));
        }
    }
    if !pairing.unmatched_b.is_empty() {
        out.push_str("Only in B:\n");
        for key in &pairing.unmatched_b {
            out.push_str(&format!("  {}\n", key.path));
        }
    }
    out
}
