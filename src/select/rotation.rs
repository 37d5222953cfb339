use chrono::{Datelike, NaiveDate};

use crate::error::AppError;

/// Proleptic Gregorian ordinal, 0001-01-01 is day 1
pub(crate) fn day_number(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}

/// `day mod len`, always in `[0, len)`. `None` only for an empty pool.
pub(crate) fn rotation_index(day: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = i64::try_from(len).ok()?;
    usize::try_from(day.rem_euclid(len)).ok()
}

/// The entry chosen for a date, with the arithmetic that chose it
#[derive(Debug, Clone)]
pub(crate) struct DailySelection<'a, T> {
    pub(crate) date: NaiveDate,
    pub(crate) day_number: i64,
    pub(crate) index: usize,
    pub(crate) pool_size: usize,
    pub(crate) entry: &'a T,
}

/// Deterministic pick: the same date always gives the same entry
pub(crate) fn select_for_date<'a, T>(
    pool: &'a [T],
    date: NaiveDate,
    pool_name: &str,
) -> Result<DailySelection<'a, T>, AppError> {
    let day = day_number(date);
    let index = rotation_index(day, pool.len()).ok_or_else(|| AppError::EmptyPool {
        pool: pool_name.to_string(),
    })?;
    Ok(DailySelection {
        date,
        day_number: day,
        index,
        pool_size: pool.len(),
        entry: &pool[index],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_day_of_era_is_one() {
        assert_eq!(day_number(date(1, 1, 1)), 1);
        assert_eq!(day_number(date(1, 1, 7)), 7);
    }

    #[test]
    fn day_seven_of_three_picks_b() {
        let pool = ["A", "B", "C"];
        let sel = select_for_date(&pool, date(1, 1, 7), "letters").unwrap();
        assert_eq!(sel.day_number, 7);
        assert_eq!(sel.index, 1);
        assert_eq!(*sel.entry, "B");
    }

    #[test]
    fn same_date_same_entry() {
        let pool = ["A", "B", "C", "D", "E"];
        let d = date(2026, 10, 18);
        let first = select_for_date(&pool, d, "letters").unwrap();
        let second = select_for_date(&pool, d, "letters").unwrap();
        assert_eq!(first.index, second.index);
        assert_eq!(first.entry, second.entry);
    }

    #[test]
    fn dates_congruent_mod_len_agree() {
        let pool = ["A", "B", "C", "D"];
        let d1 = date(2026, 1, 1);
        let d2 = d1 + chrono::Days::new(4 * 97);
        let s1 = select_for_date(&pool, d1, "letters").unwrap();
        let s2 = select_for_date(&pool, d2, "letters").unwrap();
        assert_eq!(s1.entry, s2.entry);
    }

    #[test]
    fn consecutive_days_walk_the_whole_pool() {
        let pool = ["A", "B", "C", "D", "E", "F", "G"];
        let start = date(2026, 3, 1);
        let mut seen: Vec<usize> = (0..pool.len() as u64)
            .map(|i| {
                select_for_date(&pool, start + chrono::Days::new(i), "letters")
                    .unwrap()
                    .index
            })
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..pool.len()).collect::<Vec<_>>());
    }

    #[test]
    fn index_always_in_range() {
        for len in 1..=13usize {
            for day in [-400i64, -1, 0, 1, 7, 365, 739_542, i64::MAX, i64::MIN] {
                let idx = rotation_index(day, len).unwrap();
                assert!(idx < len, "day {day} len {len} gave {idx}");
            }
        }
    }

    #[test]
    fn empty_pool_only_when_len_zero() {
        assert!(rotation_index(7, 0).is_none());
        assert!(rotation_index(7, 1).is_some());

        let pool: [&str; 0] = [];
        let err = select_for_date(&pool, date(2026, 10, 18), "verses.json").unwrap_err();
        assert!(matches!(err, AppError::EmptyPool { ref pool } if pool == "verses.json"));
    }
}
