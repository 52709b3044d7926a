//! Spin Gate
//!
//! Once-per-civil-day eligibility and win classification. Pure functions;
//! `today` always comes from the business clock (UTC+9).

use chrono::NaiveDate;

/// A label containing any of these marks a winning outcome
pub const WINNING_MARKERS: [&str; 4] = ["賞", "面談", "券", "ギフト"];

/// True iff the user never spun, or last spun on an earlier date.
///
/// A stored date later than `today` (clock skew) keeps the gate closed.
pub fn can_spin(last_reward_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    match last_reward_date {
        None => true,
        Some(last) => last < today,
    }
}

/// Substring match against [`WINNING_MARKERS`]
pub fn is_winning_label(label: &str) -> bool {
    WINNING_MARKERS.iter().any(|marker| label.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn never_spun_can_spin() {
        assert!(can_spin(None, date(2024, 3, 1)));
    }

    #[test]
    fn same_day_is_closed() {
        assert!(!can_spin(Some(date(2024, 3, 1)), date(2024, 3, 1)));
    }

    #[test]
    fn next_day_reopens() {
        assert!(can_spin(Some(date(2024, 3, 1)), date(2024, 3, 2)));
        assert!(can_spin(Some(date(2023, 12, 31)), date(2024, 1, 1)));
    }

    #[test]
    fn future_date_stays_closed() {
        assert!(!can_spin(Some(date(2024, 3, 5)), date(2024, 3, 1)));
    }

    #[test]
    fn winning_labels() {
        assert!(is_winning_label("特賞ギフト券"));
        assert!(is_winning_label("コンサル面談券"));
        assert!(is_winning_label("一等賞"));
        assert!(is_winning_label("Amazonギフト"));
        assert!(is_winning_label("カフェ券"));
        assert!(!is_winning_label("ハズレ"));
        assert!(!is_winning_label("また明日"));
        assert!(!is_winning_label(""));
    }
}
