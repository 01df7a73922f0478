//! Plain-text rendering of a payout breakdown.

use std::fmt::Write;

use crate::payout::PayoutResult;

const RULE_WIDTH: usize = 50;
const SECTION_RULE_WIDTH: usize = 30;

/// Position with its English ordinal suffix: 1st, 2nd, 3rd, 4th, 11th, 21st.
pub fn ordinal(position: usize) -> String {
    let suffix = if (10..=20).contains(&(position % 100)) {
        "th"
    } else {
        match position % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{}{}", position, suffix)
}

/// Render pool totals, position payouts and side pools as a text block.
pub fn render_report(result: &PayoutResult) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_report(&mut out, result);
    out
}

fn write_report(out: &mut String, result: &PayoutResult) -> std::fmt::Result {
    writeln!(out, "POKER TOURNAMENT PAYOUT RESULTS")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out)?;

    writeln!(out, "Total Players: {}", result.player_count)?;
    writeln!(out, "Main Prize Pool: ${:.2}", result.total_buy_in_pool)?;
    writeln!(out, "Food Pool: ${:.2}", result.total_food_pool)?;
    writeln!(out, "Bounty Pool: ${:.2}", result.total_bounty_pool)?;
    writeln!(out, "Total Collected: ${:.2}", result.total_collected())?;
    writeln!(out)?;

    writeln!(out, "MAIN TOURNAMENT PAYOUTS:")?;
    writeln!(out, "{}", "-".repeat(SECTION_RULE_WIDTH))?;
    for payout in &result.payouts {
        writeln!(out, "{} Place: ${:.2}", ordinal(payout.position), payout.amount)?;
    }
    writeln!(out)?;

    writeln!(out, "ADDITIONAL POOLS:")?;
    writeln!(out, "{}", "-".repeat(20))?;
    writeln!(out, "Food Pool: ${:.2} (for food and drinks)", result.total_food_pool)?;
    writeln!(
        out,
        "Bounty Pool: ${:.2} (${:.2} per knockout)",
        result.total_bounty_pool,
        result.bounty_per_player()
    )?;
    writeln!(out)?;

    writeln!(out, "PAYOUT BREAKDOWN:")?;
    writeln!(out, "{}", "-".repeat(20))?;
    writeln!(out, "Total Main Payouts: ${:.2}", result.total_paid())?;
    writeln!(out, "Remaining in Main Pool: ${:.2}", result.remaining())?;
    Ok(())
}

/// One line per field size: `12 players | 3 paid | $240.00 | 1st $120.00, ...`
pub fn render_table(rows: &[PayoutResult]) -> String {
    let mut out = String::new();
    for row in rows {
        let places: Vec<String> = row
            .payouts
            .iter()
            .map(|p| format!("{} ${:.2}", ordinal(p.position), p.amount))
            .collect();
        let _ = writeln!(
            out,
            "{:>2} players | {} paid | ${:.2} | {}",
            row.player_count,
            row.paid_positions,
            row.total_buy_in_pool,
            places.join(", ")
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_WEIGHTS;
    use crate::payout::{compute_payouts, payout_table};

    #[test]
    fn test_ordinal_suffixes() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(112), "112th");
    }

    #[test]
    fn test_report_contents() {
        let result = compute_payouts(9, 20.0, 5.0, 2.0, &DEFAULT_WEIGHTS).unwrap();
        let report = render_report(&result);

        assert!(report.contains("Total Players: 9"));
        assert!(report.contains("Main Prize Pool: $180.00"));
        assert!(report.contains("Food Pool: $45.00"));
        assert!(report.contains("Bounty Pool: $18.00"));
        assert!(report.contains("Total Collected: $243.00"));
        assert!(report.contains("1st Place: $90.00"));
        assert!(report.contains("2nd Place: $51.43"));
        assert!(report.contains("3rd Place: $38.57"));
        assert!(!report.contains("4th Place"));
        assert!(report.contains("($2.00 per knockout)"));
        assert!(report.contains("Remaining in Main Pool: $0.00"));
    }

    #[test]
    fn test_table_has_row_per_field() {
        let table = payout_table(10.0, 0.0, 0.0, &DEFAULT_WEIGHTS).unwrap();
        let text = render_table(&table);
        assert_eq!(text.lines().count(), table.len());
        assert!(text.lines().next().unwrap().starts_with(" 3 players | 1 paid | $30.00"));
    }
}
