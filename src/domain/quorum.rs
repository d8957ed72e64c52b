//! Quorum policy. Threshold fraction is keyed on the meeting date.

use chrono::NaiveDate;

/// Bylaw change: simple majority replaced the two-thirds rule starting with
/// the meeting held on this date.
fn simple_majority_effective() -> NaiveDate {
    NaiveDate::from_ymd_opt(2017, 11, 20).expect("valid calendar date")
}

/// Quorum for a board of `members` at a meeting on `meeting_date`:
/// two thirds rounded up before the bylaw change, half rounded up from it on.
pub fn threshold(members: usize, meeting_date: NaiveDate) -> usize {
    if meeting_date < simple_majority_effective() {
        (2 * members).div_ceil(3)
    } else {
        members.div_ceil(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_two_thirds_before_the_change() {
        assert_eq!(threshold(9, date(2017, 11, 19)), 6);
        assert_eq!(threshold(10, date(2016, 3, 1)), 7);
        assert_eq!(threshold(1, date(2015, 1, 1)), 1);
    }

    #[test]
    fn test_simple_majority_from_the_change_on() {
        assert_eq!(threshold(9, date(2017, 11, 20)), 5);
        assert_eq!(threshold(9, date(2018, 2, 5)), 5);
        assert_eq!(threshold(4, date(2018, 2, 5)), 2);
        assert_eq!(threshold(5, date(2018, 2, 5)), 3);
    }
}
