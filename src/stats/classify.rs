use crate::model::{Mode, Route};

/// The mode served by the most routes.
///
/// On a tie the mode of the earliest qualifying route wins, so `[BUS, TRAM]`
/// is a bus stop. Returns None for an empty list, the caller picks the default.
pub fn classify_mode(routes: &[Route]) -> Option<Mode> {
    let mut counts = [0usize; Mode::ALL.len()];
    for route in routes {
        counts[route.mode as usize] += 1;
    }

    let mut best: Option<(Mode, usize)> = None;
    for route in routes {
        let count = counts[route.mode as usize];
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((route.mode, count)),
        }
    }
    best.map(|(mode, _)| mode)
}

/// Like [`classify_mode`], but a stop without routes gets `default`.
pub fn dominant_mode(routes: &[Route], default: Mode) -> Mode {
    classify_mode(routes).unwrap_or(default)
}
