use chrono::{Datelike, Local};

/// Year and month (1-based) of the local calendar today.
pub fn current_year_month() -> (i32, u32) {
    let now = Local::now();
    (now.year(), now.month())
}

/// `count` years counting back from `from`, newest first.
pub fn recent_years_from(from: i32, count: usize) -> Vec<i32> {
    (0..count as i32).map(|offset| from - offset).collect()
}

pub fn recent_years(count: usize) -> Vec<i32> {
    recent_years_from(current_year_month().0, count)
}

pub fn months() -> impl Iterator<Item = u32> {
    1..=12
}
