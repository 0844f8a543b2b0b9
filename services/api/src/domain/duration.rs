//! ISO-8601 video durations (`PT#H#M#S`) rendered as clock strings.

/// Rendered when the upstream value cannot be parsed.
pub const UNKNOWN_DURATION: &str = "0:00";

/// Render an ISO-8601 duration as `H:MM:SS`, or `M:SS` under an hour.
/// Days are folded into hours. Anything unparseable renders as `0:00`.
pub fn format_duration(iso: &str) -> String {
    match parse_seconds(iso) {
        Some(total) => render(total),
        None => UNKNOWN_DURATION.to_owned(),
    }
}

fn parse_seconds(iso: &str) -> Option<u64> {
    let rest = iso.trim().strip_prefix('P')?;
    let mut total: u64 = 0;
    let mut digits = String::new();
    let mut in_time = false;
    let mut seen_component = false;

    for c in rest.chars() {
        match c {
            '0'..='9' => digits.push(c),
            'T' if !in_time && digits.is_empty() => in_time = true,
            'D' | 'H' | 'M' | 'S' => {
                let value: u64 = digits.parse().ok()?;
                digits.clear();
                let unit = match (c, in_time) {
                    ('D', false) => 86_400,
                    ('H', true) => 3_600,
                    ('M', true) => 60,
                    ('S', true) => 1,
                    _ => return None,
                };
                total = total.checked_add(value.checked_mul(unit)?)?;
                seen_component = true;
            }
            _ => return None,
        }
    }

    if !digits.is_empty() || !seen_component {
        return None;
    }
    Some(total)
}

fn render(total: u64) -> String {
    let hours = total / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
